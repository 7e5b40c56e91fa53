//! Structured dump of the raw result tree.
//!
//! The dump is the machine-readable twin of the HTML report. It keeps the
//! tree exactly as collected:
//! - key order and nesting are preserved at every level
//! - four-space indentation
//! - non-ASCII text is written as-is, not `\u` escaped

use crate::error::Result;
use crate::models::ResultTree;
use crate::utils::prepare_parent_dir;
use serde::Serialize;
use serde_json::ser::{PrettyFormatter, Serializer};
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;
use tracing::{error, info, instrument};

/// Write the result tree to `path` as pretty-printed JSON.
///
/// Missing parent directories are created and an existing file is
/// overwritten. This never fails from the caller's point of view: errors
/// are logged and swallowed so a reporting failure cannot abort the
/// collection run.
#[instrument(level = "info", skip_all, fields(path = %path.display()))]
pub fn write_dump(tree: &ResultTree, path: &Path) {
    match try_write_dump(tree, path) {
        Ok(()) => info!(path = %path.display(), "JSON report saved"),
        Err(e) => error!(error = %e, "Failed to export JSON report"),
    }
}

fn try_write_dump(tree: &ResultTree, path: &Path) -> Result<()> {
    prepare_parent_dir(path)?;

    let file = File::create(path)?;
    let mut writer = BufWriter::new(file);
    let mut ser = Serializer::with_formatter(&mut writer, PrettyFormatter::with_indent(b"    "));
    tree.serialize(&mut ser)?;
    writer.flush()?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::{json, Value};

    fn tree(value: Value) -> ResultTree {
        match value {
            Value::Object(map) => map,
            _ => panic!("fixture must be an object"),
        }
    }

    #[test]
    fn test_dump_uses_four_space_indent() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("report.json");
        write_dump(&tree(json!({"a": {"b": 1}})), &path);

        let written = std::fs::read_to_string(&path).unwrap();
        assert_eq!(written, "{\n    \"a\": {\n        \"b\": 1\n    }\n}");
    }

    #[test]
    fn test_dump_keeps_unicode_unescaped() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("report.json");
        write_dump(&tree(json!({"whois": "Société Générale ✓"})), &path);

        let written = std::fs::read_to_string(&path).unwrap();
        assert!(written.contains("Société Générale ✓"));
        assert!(!written.contains("\\u"));
    }

    #[test]
    fn test_dump_preserves_key_order() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("report.json");
        let input: ResultTree =
            serde_json::from_str(r#"{"z": {"y": 1, "x": 2}, "a": [3, {"q": 1, "b": 2}]}"#).unwrap();
        write_dump(&input, &path);

        let written = std::fs::read_to_string(&path).unwrap();
        let parsed: ResultTree = serde_json::from_str(&written).unwrap();
        assert_eq!(parsed, input);
        let keys: Vec<&String> = parsed.keys().collect();
        assert_eq!(keys, vec!["z", "a"]);
        let inner: Vec<&String> = parsed["z"].as_object().unwrap().keys().collect();
        assert_eq!(inner, vec!["y", "x"]);
    }

    #[test]
    fn test_dump_overwrites_existing_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("report.json");
        std::fs::write(&path, "stale content that is much longer than the new dump").unwrap();

        write_dump(&tree(json!({})), &path);
        assert_eq!(std::fs::read_to_string(&path).unwrap(), "{}");
    }

    #[test]
    fn test_dump_failure_is_swallowed() {
        let dir = tempfile::tempdir().unwrap();
        // a regular file where a directory is needed
        let blocker = dir.path().join("blocker");
        std::fs::write(&blocker, "").unwrap();
        let path = blocker.join("report.json");

        write_dump(&tree(json!({"a": 1})), &path);
        assert!(!path.exists());
        assert!(try_write_dump(&tree(json!({"a": 1})), &path).is_err());
    }
}
