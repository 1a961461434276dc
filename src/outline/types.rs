//! Scene outline type definitions
//!
//! The outline is rebuilt by the document parser before a search session
//! starts and is treated as read-only afterwards.

use serde::{Deserialize, Serialize};

/// Opaque position of a scene in the document.
///
/// The host resolves it when scrolling; search never interprets it.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct LocationRef(usize);

impl LocationRef {
    pub fn new(position: usize) -> Self {
        LocationRef(position)
    }

    /// Character offset of the scene heading in the document
    pub fn position(&self) -> usize {
        self.0
    }
}

/// One scene heading in the script outline
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SceneRecord {
    /// Heading text shown in the result list (e.g. "INT. KITCHEN - NIGHT")
    pub display_text: String,
    /// Script-assigned scene number; None for unnumbered scenes
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub scene_number: Option<String>,
    /// Where the host should jump when this scene is chosen
    pub location: LocationRef,
}

impl SceneRecord {
    pub fn new(display_text: impl Into<String>, location: LocationRef) -> Self {
        SceneRecord {
            display_text: display_text.into(),
            scene_number: None,
            location,
        }
    }

    pub fn with_scene_number(mut self, scene_number: impl Into<String>) -> Self {
        self.scene_number = Some(scene_number.into());
        self
    }

    /// Scene number for display, empty when unnumbered
    pub fn scene_number_or_empty(&self) -> &str {
        self.scene_number.as_deref().unwrap_or("")
    }
}
