//! Outline loading from the file system
//!
//! Hosts that do not own a live parser hand the search a JSON snapshot:
//! an array of `{ "displayText", "sceneNumber"?, "location" }` objects.

use std::fs;
use std::path::Path;
use tracing::{info, instrument};

use super::types::SceneRecord;
use crate::error::{Result, SceneSearchError};

/// Parse an outline snapshot from JSON text.
pub fn parse_outline(json: &str) -> Result<Vec<SceneRecord>> {
    let scenes: Vec<SceneRecord> = serde_json::from_str(json)?;
    Ok(scenes)
}

/// Load an outline snapshot from a JSON file.
#[instrument(name = "load_outline", skip_all, fields(path = %path.display()))]
pub fn load_outline(path: &Path) -> Result<Vec<SceneRecord>> {
    let content = fs::read_to_string(path).map_err(|source| SceneSearchError::OutlineLoad {
        path: path.display().to_string(),
        source,
    })?;

    let scenes = parse_outline(&content)?;
    info!(scene_count = scenes.len(), "Loaded outline");
    Ok(scenes)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::outline::LocationRef;
    use tempfile::tempdir;

    #[test]
    fn test_parse_outline_with_optional_scene_number() {
        let json = r#"[
            {"displayText": "INT. KITCHEN", "sceneNumber": "1", "location": 0},
            {"displayText": "EXT. STREET", "location": 118}
        ]"#;
        let scenes = parse_outline(json).unwrap();
        assert_eq!(scenes.len(), 2);
        assert_eq!(scenes[0].scene_number.as_deref(), Some("1"));
        assert_eq!(scenes[1].scene_number, None);
        assert_eq!(scenes[1].location, LocationRef::new(118));
    }

    #[test]
    fn test_parse_outline_rejects_missing_location() {
        let json = r#"[{"displayText": "INT. KITCHEN"}]"#;
        let err = parse_outline(json).unwrap_err();
        assert!(matches!(err, SceneSearchError::OutlineParse(_)));
    }

    #[test]
    fn test_load_outline_from_file() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("outline.json");
        let scenes = vec![
            SceneRecord::new("INT. KITCHEN", LocationRef::new(0)).with_scene_number("1"),
            SceneRecord::new("EXT. STREET", LocationRef::new(42)),
        ];
        std::fs::write(&path, serde_json::to_string(&scenes).unwrap()).unwrap();

        let loaded = load_outline(&path).unwrap();
        assert_eq!(loaded, scenes);
    }

    #[test]
    fn test_load_outline_missing_file() {
        let dir = tempdir().unwrap();
        let err = load_outline(&dir.path().join("nope.json")).unwrap_err();
        match err {
            SceneSearchError::OutlineLoad { path, .. } => assert!(path.ends_with("nope.json")),
            other => panic!("Expected OutlineLoad, got {:?}", other),
        }
    }
}
