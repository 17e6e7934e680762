use std::path::Path;

use crate::compose::{self, SlateFrame, SlateTheme};
use crate::error::SlaterResult;
use crate::fields::{SlateField, SlateFields};
use crate::thumbnail::{self, PreparedImage};

/// The slate being edited: field values plus the loaded thumbnail, with a
/// render operation producing the flattened title card. Exists only for the
/// duration of one editing session.
pub struct SlateDocument {
    fields: SlateFields,
    thumbnail: Option<PreparedImage>,
    theme: SlateTheme,
}

impl SlateDocument {
    pub fn new(fields: SlateFields, theme: SlateTheme) -> Self {
        Self {
            fields,
            thumbnail: None,
            theme,
        }
    }

    pub fn fields(&self) -> &SlateFields {
        &self.fields
    }

    pub fn thumbnail(&self) -> Option<&PreparedImage> {
        self.thumbnail.as_ref()
    }

    /// Overwrite one field verbatim. The show title's non-empty invariant is
    /// enforced by [`SlateFields::set`].
    pub fn set_field(&mut self, field: SlateField, value: &str) {
        self.fields.set(field, value);
    }

    /// Load and install a thumbnail. On failure the previous thumbnail (or
    /// the empty placeholder state) is retained and the error reported to the
    /// caller.
    pub fn set_thumbnail(&mut self, path: &Path) -> SlaterResult<()> {
        let prepared = thumbnail::load_thumbnail(path)?;
        self.thumbnail = Some(prepared);
        Ok(())
    }

    /// Composite the current state into one raster frame. Pure function of
    /// the document: repeated calls without intervening mutation are
    /// byte-identical.
    pub fn render(&self) -> SlaterResult<SlateFrame> {
        compose::compose_slate(&self.fields, self.thumbnail.as_ref(), &self.theme)
    }

    /// Drop decoded raster state. Field values stay readable; used by the
    /// editor's idempotent close.
    pub fn release(&mut self) {
        self.thumbnail = None;
    }
}
