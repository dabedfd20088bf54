//! Catalog - Built-in Component Definitions

use crate::components::node::{Kind, Node};
use crate::composition::{Props, Registry};

/// Registry of every built-in kind, keyed by manifest name
pub fn builtin_kinds() -> Registry<Node> {
    let mut registry = Registry::new();
    for kind in Kind::ALL {
        registry.register(kind.name(), move |props: Props| Node::new(kind, props));
    }
    registry
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_every_kind_registered() {
        let registry = builtin_kinds();
        assert_eq!(registry.keys().len(), Kind::ALL.len());
        for kind in Kind::ALL {
            assert!(registry.get(kind.name()).is_some());
        }
    }

    #[test]
    fn test_definition_builds_node_with_props() {
        let definition = builtin_kinds().get("board").expect("board");
        let node = definition.construct(Props::new().with_path("pages/home/"));
        assert_eq!(node.kind, Kind::Board);
        assert_eq!(node.path(), "pages/home/");
    }

    mod composed_tree {
        use std::fs;
        use std::path::Path;

        use super::*;
        use crate::composition::{Composer, DirectorySource, ManifestLoader};
        use crate::error::Error;

        type TreeComposer = Composer<DirectorySource, ManifestLoader<DirectorySource, Node>, Node>;

        fn entity(root: &Path, path: &str, kind_tag: &str, manifest: &str) {
            let dir = root.join(path);
            fs::create_dir_all(&dir).expect("entity dir");
            fs::write(dir.join("type"), kind_tag).expect("type");
            fs::write(dir.join("component.json"), manifest).expect("manifest");
        }

        /// Two levels: widgets at the root, fields inside the profile board
        fn content_tree() -> tempfile::TempDir {
            let dir = tempfile::tempdir().expect("tempdir");
            let root = dir.path();
            entity(
                root,
                "profile",
                "widget",
                r#"{"kind":"board","props":{"title":"Profile","filter":"field","childProps":{"readOnly":true}}}"#,
            );
            entity(root, "profile/role", "field", r#"{"kind":"dropdown","props":{"options":["admin"]}}"#);
            entity(root, "profile/name", "field", r#"{"kind":"text","props":{"label":"Name"}}"#);
            entity(root, "profile/notes", "memo", r#"{"kind":"textarea"}"#);
            fs::write(root.join("profile/data.json"), r#"{"name":"Ada"}"#).expect("data");
            entity(root, "team", "panel", r#"{"kind":"table","props":{"columns":2}}"#);
            entity(root, "settings", "widget", r#"{"kind":"grid"}"#);
            fs::write(root.join("readme.txt"), "not a component").expect("readme");
            dir
        }

        fn composer_for(dir: &tempfile::TempDir) -> TreeComposer {
            let source = DirectorySource::new(dir.path());
            Composer::new(source.clone(), ManifestLoader::new(source, builtin_kinds()))
        }

        #[tokio::test]
        async fn test_root_filter_selects_widgets_in_listing_order() {
            let dir = content_tree();
            let composer = composer_for(&dir);

            let nodes = composer
                .load_components("/", &Props::new(), Some("widget"))
                .await
                .expect("root");

            let summary: Vec<_> = nodes.iter().map(|n| (n.kind, n.path())).collect();
            assert_eq!(summary, [(Kind::Board, "/profile/"), (Kind::Grid, "/settings/")]);
            assert_eq!(nodes[0].props.str("title"), Some("Profile"));
        }

        #[tokio::test]
        async fn test_container_composes_its_own_directory() {
            let dir = content_tree();
            let composer = composer_for(&dir);

            let root = composer
                .load_components("/", &Props::new(), Some("widget"))
                .await
                .expect("root");
            let section = root[0].section().expect("board is a container");
            let children = composer
                .load_components(
                    &section.key.path,
                    &section.options,
                    section.key.filter.as_deref(),
                )
                .await
                .expect("board children");

            let summary: Vec<_> = children.iter().map(|n| (n.kind, n.path())).collect();
            assert_eq!(
                summary,
                [(Kind::Text, "/profile/name/"), (Kind::Dropdown, "/profile/role/")]
            );
            assert!(children.iter().all(Node::read_only));
            assert_eq!(children[0].label(), "Name");
            assert_eq!(children[1].field(), "role");

            let grid = root[1].section().expect("grid is a container");
            let empty = composer
                .load_components(&grid.key.path, &grid.options, grid.key.filter.as_deref())
                .await
                .expect("grid children");
            assert!(empty.is_empty());
        }

        #[tokio::test]
        async fn test_entry_without_manifest_fails_the_directory() {
            let dir = content_tree();
            fs::create_dir_all(dir.path().join("profile/draft")).expect("draft");
            fs::write(dir.path().join("profile/draft/type"), "field").expect("type");
            let composer = composer_for(&dir);

            let result = composer
                .load_components("/profile/", &Props::new(), Some("field"))
                .await;
            assert!(matches!(
                result,
                Err(Error::UnknownComponent { ref resource }) if resource == "/profile/draft/component.json"
            ));
        }
    }
}
