//! Export and share boundary
//!
//! Exporting is delegated to a host-provided [`FileExporter`]; the resulting
//! file is handed to the platform share sheet through [`ShareSheet`]. Neither
//! formats nor share UI live in this crate. The only rule enforced here is
//! that nothing is shared when the export produced no file.

use std::fmt;
use std::path::PathBuf;

use serde::{Deserialize, Serialize};
use tracing::{info, instrument};

use crate::error::{Result, ResultExt};

/// Export format identifier understood by the host's exporter (e.g. "pdf", "fdx")
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ExportFormat(String);

impl ExportFormat {
    pub fn new(id: impl Into<String>) -> Self {
        ExportFormat(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ExportFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Share activities that can be hidden from the share sheet
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum ShareTarget {
    AssignToContact,
    AddToReadingList,
    PostToFacebook,
    PostToVimeo,
    PostToTwitter,
    PostToWeibo,
    PostToFlickr,
    PostToTencentWeibo,
    AirDrop,
    Mail,
    Message,
    Print,
    CopyToPasteboard,
    SaveToFiles,
}

/// What the share sheet is asked to present
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ShareRequest {
    pub items: Vec<PathBuf>,
    pub excluded_targets: Vec<ShareTarget>,
}

/// Writes a document out in a given format
pub trait FileExporter {
    type Document: ?Sized;

    /// Returns the location of the written file.
    fn export(&self, document: &Self::Document, format: &ExportFormat) -> Result<PathBuf>;
}

/// Platform share mechanism
pub trait ShareSheet {
    fn present(&mut self, request: ShareRequest);
}

/// Export `document` and offer the resulting file for sharing.
///
/// Returns `true` if a share sheet was presented. A failed export is logged
/// and nothing is presented.
#[instrument(name = "export_and_share", skip_all, fields(format = %format))]
pub fn export_and_share<E, S>(
    exporter: &E,
    sheet: &mut S,
    document: &E::Document,
    format: &ExportFormat,
    excluded_targets: &[ShareTarget],
) -> bool
where
    E: FileExporter + ?Sized,
    S: ShareSheet + ?Sized,
{
    let Some(path) = exporter.export(document, format).warn_on_err() else {
        return false;
    };

    info!(path = %path.display(), "Export finished, presenting share sheet");
    sheet.present(ShareRequest {
        items: vec![path],
        excluded_targets: excluded_targets.to_vec(),
    });
    true
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::DEFAULT_EXCLUDED_SHARE_TARGETS;
    use crate::error::SceneSearchError;
    use std::cell::RefCell;

    struct Script {
        title: String,
    }

    /// Exporter that writes `<title>.<format>` or fails for unknown formats
    struct FakeExporter {
        supported: Vec<&'static str>,
        calls: RefCell<Vec<String>>,
    }

    impl FileExporter for FakeExporter {
        type Document = Script;

        fn export(&self, document: &Script, format: &ExportFormat) -> Result<PathBuf> {
            self.calls.borrow_mut().push(format.to_string());
            if self.supported.contains(&format.as_str()) {
                Ok(PathBuf::from(format!("/tmp/{}.{}", document.title, format)))
            } else {
                Err(SceneSearchError::Export {
                    format: format.to_string(),
                    message: "unsupported".to_string(),
                })
            }
        }
    }

    #[derive(Default)]
    struct RecordingSheet {
        presented: Vec<ShareRequest>,
    }

    impl ShareSheet for RecordingSheet {
        fn present(&mut self, request: ShareRequest) {
            self.presented.push(request);
        }
    }

    fn exporter() -> FakeExporter {
        FakeExporter {
            supported: vec!["pdf", "fdx"],
            calls: RefCell::new(Vec::new()),
        }
    }

    #[test]
    fn test_successful_export_presents_single_file() {
        let exporter = exporter();
        let mut sheet = RecordingSheet::default();
        let script = Script {
            title: "pilot".to_string(),
        };

        let shared = export_and_share(
            &exporter,
            &mut sheet,
            &script,
            &ExportFormat::new("pdf"),
            DEFAULT_EXCLUDED_SHARE_TARGETS,
        );

        assert!(shared);
        assert_eq!(sheet.presented.len(), 1);
        assert_eq!(sheet.presented[0].items, vec![PathBuf::from("/tmp/pilot.pdf")]);
        assert_eq!(
            sheet.presented[0].excluded_targets,
            DEFAULT_EXCLUDED_SHARE_TARGETS.to_vec()
        );
    }

    #[test]
    fn test_failed_export_presents_nothing() {
        let exporter = exporter();
        let mut sheet = RecordingSheet::default();
        let script = Script {
            title: "pilot".to_string(),
        };

        let shared = export_and_share(
            &exporter,
            &mut sheet,
            &script,
            &ExportFormat::new("rtf"),
            &[],
        );

        assert!(!shared);
        assert!(sheet.presented.is_empty());
        assert_eq!(*exporter.calls.borrow(), vec!["rtf".to_string()]);
    }

    #[test]
    fn test_share_target_serde_names() {
        let json = serde_json::to_string(&ShareTarget::PostToTencentWeibo).unwrap();
        assert_eq!(json, "\"postToTencentWeibo\"");
        let back: ShareTarget = serde_json::from_str("\"assignToContact\"").unwrap();
        assert_eq!(back, ShareTarget::AssignToContact);
    }
}
