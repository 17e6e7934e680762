#![forbid(unsafe_code)]

pub mod compose;
pub mod dialogs;
pub mod document;
pub mod editor;
pub mod error;
pub mod export;
pub mod fields;
pub mod layout;
pub mod text;
pub mod thumbnail;

pub use compose::{SlateFrame, SlateTheme};
pub use dialogs::RfdDialogs;
pub use document::SlateDocument;
pub use editor::{FileDialogs, SlateEditor};
pub use error::{SlaterError, SlaterResult};
pub use export::EXPORT_EXTENSIONS;
pub use fields::{SHOW_TITLE_PLACEHOLDER, SlateConfig, SlateField, SlateFields};
pub use thumbnail::PreparedImage;
