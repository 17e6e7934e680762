use std::path::{Path, PathBuf};

use crate::editor::FileDialogs;

/// Native file dialogs backed by `rfd`. Modal from the window's point of
/// view; both calls block until the user chooses or cancels.
#[derive(Debug, Default)]
pub struct RfdDialogs;

impl FileDialogs for RfdDialogs {
    fn pick_open(&mut self, title: &str, dir: &Path, extensions: &[&str]) -> Option<PathBuf> {
        rfd::FileDialog::new()
            .set_title(title)
            .set_directory(dir)
            .add_filter("Image files", extensions)
            .pick_file()
    }

    fn pick_save(&mut self, title: &str, dir: &Path, extensions: &[&str]) -> Option<PathBuf> {
        rfd::FileDialog::new()
            .set_title(title)
            .set_directory(dir)
            .add_filter("Images", extensions)
            .set_file_name("slate.png")
            .save_file()
    }
}
