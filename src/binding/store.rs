//! Document Storage
//!
//! A page document lives next to the page's components as
//! `<path>data.json`. Loading reads that object; saving replaces it.

use serde_json::{Map, Value};
use snafu::ResultExt;

use super::document::Document;
use crate::composition::path::data_location;
use crate::composition::{ContentSink, ContentSource};
use crate::error::{Error, MalformedDataSnafu, Result};

/// Parse a data body. Empty bodies and `null` read as an empty object.
pub fn parse_data(resource: &str, body: &str) -> Result<Map<String, Value>> {
    if body.trim().is_empty() {
        return Ok(Map::new());
    }
    match serde_json::from_str(body).context(MalformedDataSnafu { resource })? {
        Value::Object(values) => Ok(values),
        Value::Null => Ok(Map::new()),
        _ => Err(Error::DataNotObject {
            resource: resource.to_string(),
        }),
    }
}

/// Fetch the data object of the entity at `path`.
///
/// An entity without a `data.json` has no values yet and loads as empty.
pub async fn load_data<S: ContentSource>(source: &S, path: &str) -> Result<Map<String, Value>> {
    let location = data_location(path);
    match source.read_text(&location).await {
        Ok(body) => parse_data(&location, &body),
        Err(e) if e.is_not_found() => {
            tracing::debug!("No data at {}, starting empty", location);
            Ok(Map::new())
        }
        Err(e) => Err(e),
    }
}

/// Write `document` back to the entity at `path`.
///
/// Returns the revision that was stored. Edits made while the write is in
/// flight keep the document dirty.
pub async fn save_document<S: ContentSink>(sink: &S, path: &str, document: &Document) -> Result<u64> {
    let (values, revision) = document.snapshot();
    let body = serde_json::to_string(&values)?;
    sink.put_data(path, body).await?;
    document.mark_saved(revision);
    Ok(revision)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::binding::{Bindable, TextProperty};
    use crate::composition::DirectorySource;
    use serde_json::json;
    use std::fs;

    #[test]
    fn test_parse_data_shapes() {
        assert!(parse_data("d", "").expect("empty").is_empty());
        assert!(parse_data("d", "null").expect("null").is_empty());
        assert_eq!(
            parse_data("d", r#"{"name":"Ada"}"#).expect("object").get("name"),
            Some(&json!("Ada"))
        );
        assert!(matches!(parse_data("d", "[1]"), Err(Error::DataNotObject { .. })));
        assert!(matches!(parse_data("d", "{"), Err(Error::MalformedData { .. })));
    }

    #[tokio::test]
    async fn test_missing_data_file_loads_empty() {
        let dir = tempfile::tempdir().expect("tempdir");
        fs::create_dir_all(dir.path().join("profile")).expect("profile");
        let source = DirectorySource::new(dir.path());

        assert!(load_data(&source, "/profile/").await.expect("empty").is_empty());
    }

    #[tokio::test]
    async fn test_edits_survive_save_and_reload() {
        let dir = tempfile::tempdir().expect("tempdir");
        fs::create_dir_all(dir.path().join("profile")).expect("profile");
        fs::write(dir.path().join("profile/data.json"), r#"{"name":"Ada","age":36}"#)
            .expect("seed");
        let source = DirectorySource::new(dir.path());

        let document = Document::new();
        document.replace(load_data(&source, "/profile/").await.expect("load"));
        TextProperty::new(document.field("name")).set("Grace".to_string());
        assert!(document.is_dirty());

        save_document(&source, "/profile/", &document).await.expect("save");
        assert!(!document.is_dirty());

        let reloaded = load_data(&source, "/profile/").await.expect("reload");
        assert_eq!(reloaded.get("name"), Some(&json!("Grace")));
        assert_eq!(reloaded.get("age"), Some(&json!(36)));
    }

    #[tokio::test]
    async fn test_http_round_trip() {
        use crate::composition::HttpSource;
        use reqwest::Url;
        use std::time::Duration;
        use wiremock::matchers::{body_json, method, path};
        use wiremock::{Mock, MockServer, ResponseTemplate};

        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/profile/data.json"))
            .respond_with(ResponseTemplate::new(200).set_body_string(r#"{"name":"Ada"}"#))
            .mount(&server)
            .await;
        Mock::given(method("PUT"))
            .and(path("/profile/"))
            .and(body_json(json!({"name": "Ada", "role": "admin"})))
            .respond_with(ResponseTemplate::new(204))
            .expect(1)
            .mount(&server)
            .await;

        let base = Url::parse(&format!("{}/", server.uri())).expect("mock url");
        let source = HttpSource::new(base, Duration::from_secs(5)).expect("client");

        let document = Document::new();
        document.replace(load_data(&source, "/profile/").await.expect("load"));
        document.set("role", json!("admin"));
        save_document(&source, "/profile/", &document).await.expect("save");
    }

    #[tokio::test]
    async fn test_http_missing_data_loads_empty() {
        use crate::composition::HttpSource;
        use reqwest::Url;
        use std::time::Duration;
        use wiremock::MockServer;

        let server = MockServer::start().await;
        let base = Url::parse(&format!("{}/", server.uri())).expect("mock url");
        let source = HttpSource::new(base, Duration::from_secs(5)).expect("client");

        assert!(load_data(&source, "/profile/").await.expect("empty").is_empty());
    }
}
