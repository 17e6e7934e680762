use eframe::egui;

use slater::{RfdDialogs, SlateConfig, SlateEditor};

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt().init();

    let editor = SlateEditor::new(SlateConfig::from_env(), Box::new(RfdDialogs))?;

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([1280.0, 860.0])
            .with_title("Slater"),
        ..Default::default()
    };
    eframe::run_native(
        "Slater",
        options,
        Box::new(|_cc| Box::new(SlaterApp::new(editor))),
    )
    .map_err(|e| anyhow::anyhow!("{e}"))?;
    Ok(())
}

struct SlaterApp {
    editor: SlateEditor,
    show_edit: String,
    shot_edit: String,
    artist_edit: String,
    preview: Option<egui::TextureHandle>,
    preview_dirty: bool,
}

impl SlaterApp {
    fn new(editor: SlateEditor) -> Self {
        let fields = editor.document().fields();
        let show_edit = fields.show_title.clone();
        let shot_edit = fields.shot.clone();
        let artist_edit = fields.artist.clone();
        Self {
            editor,
            show_edit,
            shot_edit,
            artist_edit,
            preview: None,
            preview_dirty: true,
        }
    }

    fn refresh_preview(&mut self, ctx: &egui::Context) {
        if !self.preview_dirty {
            return;
        }
        self.preview_dirty = false;

        match self.editor.document().render() {
            Ok(frame) => {
                let size = [frame.width as usize, frame.height as usize];
                let color_image = egui::ColorImage::from_rgba_premultiplied(size, &frame.data);
                self.preview =
                    Some(ctx.load_texture("slate_preview", color_image, egui::TextureOptions::default()));
            }
            Err(err) => {
                tracing::warn!(error = %err, "preview render failed");
            }
        }
    }

    /// Line edit that writes through on Enter, not per keystroke.
    fn confirm_edit(
        ui: &mut egui::Ui,
        label: &str,
        buffer: &mut String,
        mut confirm: impl FnMut(&str),
    ) -> bool {
        ui.label(label);
        let response = ui.add(egui::TextEdit::singleline(buffer).desired_width(180.0));
        let confirmed = response.lost_focus() && ui.input(|i| i.key_pressed(egui::Key::Enter));
        if confirmed {
            confirm(buffer);
        }
        confirmed
    }
}

impl eframe::App for SlaterApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        egui::TopBottomPanel::top("inputs").show(ctx, |ui| {
            ui.horizontal(|ui| {
                let editor = &mut self.editor;
                let mut edited = false;
                edited |= Self::confirm_edit(ui, "Show:", &mut self.show_edit, |v| {
                    editor.confirm_show(v);
                });
                edited |= Self::confirm_edit(ui, "Shot:", &mut self.shot_edit, |v| {
                    editor.confirm_shot(v);
                });
                edited |= Self::confirm_edit(ui, "Artist:", &mut self.artist_edit, |v| {
                    editor.confirm_artist(v);
                });
                if edited {
                    // Confirmed edits may rewrite the title placeholder.
                    self.show_edit = self.editor.document().fields().show_title.clone();
                    self.preview_dirty = true;
                }

                ui.add_space(24.0);
                if ui.button("Load Thumbnail").clicked() {
                    // Failures land on the status line; the session continues.
                    let _ = self.editor.load_thumbnail();
                    self.preview_dirty = true;
                }
                if ui.button("Save Slate").clicked() {
                    let _ = self.editor.export_slate();
                }
                if ui.button("Close").clicked() {
                    self.editor.close();
                    ctx.send_viewport_cmd(egui::ViewportCommand::Close);
                }
            });
        });

        egui::TopBottomPanel::bottom("status").show(ctx, |ui| {
            ui.horizontal(|ui| {
                ui.label("Status:");
                ui.label(self.editor.status());
            });
        });

        self.refresh_preview(ctx);
        egui::CentralPanel::default().show(ctx, |ui| {
            if let Some(texture) = &self.preview {
                let avail = ui.available_size();
                let scale = (avail.x / 1280.0).min(avail.y / 720.0).min(1.0);
                ui.centered_and_justified(|ui| {
                    ui.add(
                        egui::Image::new(texture)
                            .fit_to_exact_size(egui::vec2(1280.0 * scale, 720.0 * scale)),
                    );
                });
            } else {
                ui.label("Slate preview unavailable.");
            }
        });
    }
}
