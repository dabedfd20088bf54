//! Content Paths
//!
//! Paths address the virtual content tree. A trailing `/` marks a directory.

/// Separator between path segments
pub const SEPARATOR: char = '/';

/// Well-known file holding a component definition inside a component directory
pub const COMPONENT_FILE: &str = "component.json";

/// Well-known file holding an entry's type tag
pub const TYPE_FILE: &str = "type";

/// Well-known file holding an entity's data object
pub const DATA_FILE: &str = "data.json";

/// Query string that selects the JSON listing of a directory
pub const LISTING_QUERY: &str = "json";

/// Whether a listing entry (or path) denotes a directory
pub fn is_directory(segment: &str) -> bool {
    segment.ends_with(SEPARATOR)
}

/// Full path of `entry` inside the directory `base`
pub fn child(base: &str, entry: &str) -> String {
    format!("{base}{entry}")
}

/// Location of the component definition for `path`
pub fn definition_location(path: &str) -> String {
    format!("{path}{COMPONENT_FILE}")
}

/// Location of the type tag for the entry at `path`
pub fn type_location(path: &str) -> String {
    format!("{path}{TYPE_FILE}")
}

/// Location of the data object for the entity at `path`
pub fn data_location(path: &str) -> String {
    format!("{path}{DATA_FILE}")
}

/// Last non-empty segment of `path`, without the separator
pub fn last_segment(path: &str) -> &str {
    path.trim_end_matches(SEPARATOR)
        .rsplit(SEPARATOR)
        .next()
        .unwrap_or_default()
}
