//! Fixed slate template geometry. All positions are in output pixels on the
//! 1280x720 canvas; nothing here depends on runtime state.

use crate::fields::SlateField;

pub const CANVAS_WIDTH: u32 = 1280;
pub const CANVAS_HEIGHT: u32 = 720;

/// Thumbnail region. Thumbnails are scaled to exactly this size on load.
pub const THUMB_WIDTH: u32 = 500;
pub const THUMB_HEIGHT: u32 = 280;
pub const THUMB_X: f64 = 540.0;
pub const THUMB_Y: f64 = 30.0;

pub const THUMB_PLACEHOLDER: &str = "LOAD THUMBNAIL";
pub const THUMB_PLACEHOLDER_SIZE: f32 = 48.0;

/// Show title slot: right-aligned block under the thumbnail region.
pub const TITLE_X: f64 = 40.0;
pub const TITLE_Y: f64 = 330.0;
pub const TITLE_WIDTH: f64 = 400.0;
pub const TITLE_SIZE: f32 = 48.0;

/// One labeled entry row: a right-aligned caption followed by a filled value
/// panel.
#[derive(Clone, Copy, Debug)]
pub struct RowSlot {
    pub caption: &'static str,
    pub field: SlateField,
    pub y: f64,
    pub value_width: f64,
}

pub const CAPTION_X: f64 = 40.0;
pub const CAPTION_WIDTH: f64 = 140.0;
pub const VALUE_X: f64 = 190.0;
pub const ROW_HEIGHT: f64 = 27.0;
pub const ROW_TEXT_SIZE: f32 = 20.0;
pub const ROW_TEXT_INSET: f64 = 6.0;

pub const ROWS: [RowSlot; 6] = [
    RowSlot {
        caption: "shot:",
        field: SlateField::Shot,
        y: 402.0,
        value_width: 200.0,
    },
    RowSlot {
        caption: "filename:",
        field: SlateField::Filename,
        y: 441.0,
        value_width: 200.0,
    },
    RowSlot {
        caption: "artist:",
        field: SlateField::Artist,
        y: 480.0,
        value_width: 200.0,
    },
    RowSlot {
        caption: "frame range:",
        field: SlateField::FrameRange,
        y: 519.0,
        value_width: 200.0,
    },
    RowSlot {
        caption: "date:",
        field: SlateField::Date,
        y: 558.0,
        value_width: 200.0,
    },
    RowSlot {
        caption: "notes:",
        field: SlateField::Notes,
        y: 597.0,
        value_width: 600.0,
    },
];

/// Slate palette, straight (non-premultiplied) RGBA8.
pub mod palette {
    pub const BACKGROUND: [u8; 4] = [24, 28, 40, 255];
    pub const TITLE: [u8; 4] = [90, 140, 255, 255];
    pub const CAPTION: [u8; 4] = [200, 200, 200, 255];
    pub const VALUE_PANEL: [u8; 4] = [180, 180, 180, 255];
    pub const VALUE_TEXT: [u8; 4] = [20, 20, 20, 255];
    pub const THUMB_PANEL: [u8; 4] = [128, 128, 128, 255];
    pub const THUMB_TEXT: [u8; 4] = [139, 0, 0, 255];
}
