use std::path::{Path, PathBuf};

use crate::document::SlateDocument;
use crate::error::SlaterResult;
use crate::export;
use crate::fields::{SlateConfig, SlateField, SlateFields};
use crate::compose::SlateTheme;

/// Blocking file-selection collaborator. Both prompts return `None` on
/// cancel, which callers treat as a silent no-op.
pub trait FileDialogs {
    fn pick_open(&mut self, title: &str, dir: &Path, extensions: &[&str]) -> Option<PathBuf>;
    fn pick_save(&mut self, title: &str, dir: &Path, extensions: &[&str]) -> Option<PathBuf>;
}

/// Control surface over one [`SlateDocument`]: confirmed field edits,
/// thumbnail loading, and slate export. Load/export failures are recovered
/// here into the one-line status surface; nothing is fatal to the session.
pub struct SlateEditor {
    document: SlateDocument,
    dialogs: Box<dyn FileDialogs>,
    start_dir: PathBuf,
    status: String,
}

impl SlateEditor {
    pub fn new(config: SlateConfig, dialogs: Box<dyn FileDialogs>) -> SlaterResult<Self> {
        let theme = SlateTheme::load(
            config.font_source.as_deref(),
            config.background_source.as_deref(),
        )?;
        let fields = SlateFields::new(&config);
        let start_dir = std::env::current_dir().unwrap_or_else(|_| PathBuf::from("."));

        Ok(Self {
            document: SlateDocument::new(fields, theme),
            dialogs,
            start_dir,
            status: String::new(),
        })
    }

    pub fn document(&self) -> &SlateDocument {
        &self.document
    }

    /// One-line outcome of the most recent load/export attempt.
    pub fn status(&self) -> &str {
        &self.status
    }

    pub fn confirm_show(&mut self, value: &str) {
        self.document.set_field(SlateField::ShowTitle, value);
    }

    pub fn confirm_shot(&mut self, value: &str) {
        self.document.set_field(SlateField::Shot, value);
    }

    pub fn confirm_artist(&mut self, value: &str) {
        self.document.set_field(SlateField::Artist, value);
    }

    /// Prompt for a thumbnail image and load it. Cancel changes nothing, not
    /// even the status line. A decode failure is reported once on the status
    /// surface and returned for callers that want to inspect it.
    pub fn load_thumbnail(&mut self) -> SlaterResult<()> {
        let Some(path) = self.dialogs.pick_open(
            "Load Thumbnail Image File",
            &self.start_dir,
            export::EXPORT_EXTENSIONS,
        ) else {
            return Ok(());
        };

        match self.document.set_thumbnail(&path) {
            Ok(()) => {
                tracing::info!(path = %path.display(), "thumbnail loaded");
                self.status = format!("Loaded Thumbnail Image from File: {}", path.display());
                Ok(())
            }
            Err(err) => {
                tracing::warn!(path = %path.display(), error = %err, "thumbnail load failed");
                self.status = format!("Thumbnail load failed: {err}");
                Err(err)
            }
        }
    }

    /// Render the current slate and prompt for a destination. Cancel changes
    /// nothing. Encode/write failures are reported once on the status surface
    /// and returned; no destination file is created for a bad extension.
    pub fn export_slate(&mut self) -> SlaterResult<()> {
        let frame = match self.document.render() {
            Ok(frame) => frame,
            Err(err) => {
                tracing::warn!(error = %err, "slate render failed");
                self.status = format!("Slate render failed: {err}");
                return Err(err);
            }
        };

        let Some(path) = self.dialogs.pick_save(
            "Save Slate to File",
            &self.start_dir,
            export::EXPORT_EXTENSIONS,
        ) else {
            return Ok(());
        };

        match export::write_slate(&frame, &path) {
            Ok(()) => {
                tracing::info!(path = %path.display(), "slate exported");
                self.status = format!("Saved Slate Image to File: {}", path.display());
                Ok(())
            }
            Err(err) => {
                tracing::warn!(path = %path.display(), error = %err, "slate export failed");
                self.status = format!("Slate export failed: {err}");
                Err(err)
            }
        }
    }

    /// Release the editor's and document's decoded resources. Idempotent.
    pub fn close(&mut self) {
        self.document.release();
    }
}
