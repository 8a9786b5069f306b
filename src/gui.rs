//! The eframe window: text field, buttons, image area, menu bar and About box.

use eframe::egui;
use tracing::debug;

use crate::clipboard::{platform_clipboard, ClipboardSink};
use crate::controller::Controller;
use crate::generator::QrGenerator;
use crate::launcher::SystemBrowser;
use crate::symbol::EncodedSymbol;
use crate::view::{self, Intent, Notice, NoticeLevel, Presentation};

pub const INITIAL_SIZE: [f32; 2] = [800.0, 600.0];
/// Entry width in points, about 40 characters at the default font size.
const ENTRY_WIDTH: f32 = 320.0;

pub struct QrApp {
    controller: Controller<Box<dyn ClipboardSink>, SystemBrowser>,
    surface: Surface,
}

impl QrApp {
    pub fn new(cc: &eframe::CreationContext<'_>) -> Self {
        Self {
            controller: Controller::new(QrGenerator::new(), platform_clipboard(), SystemBrowser),
            surface: Surface::new(cc.egui_ctx.clone()),
        }
    }
}

impl eframe::App for QrApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        egui::TopBottomPanel::top("menu_bar").show(ctx, |ui| {
            egui::MenuBar::new().ui(ui, |ui| {
                ui.menu_button("File", |ui| {
                    if ui.button("Quit").clicked() {
                        ui.ctx().send_viewport_cmd(egui::ViewportCommand::Close);
                    }
                });
                ui.menu_button("Help", |ui| {
                    if ui.button(view::ABOUT_TITLE).clicked() {
                        self.surface.show_about = true;
                        ui.close();
                    }
                });
            });
        });

        let mut intent = None;
        egui::CentralPanel::default().show(ctx, |ui| {
            intent = self.surface.controls(ui);
        });
        self.surface.about_window(ctx);

        if let Some(intent) = intent {
            // Already shown to the user by the controller.
            if let Err(err) = self.controller.dispatch(intent, &mut self.surface) {
                debug!(error = %err, "intent failed");
            }
        }
    }
}

/// Widget state. Implements [`Presentation`] for the controller.
struct Surface {
    ctx: egui::Context,
    input: String,
    texture: Option<egui::TextureHandle>,
    show_about: bool,
}

impl Surface {
    fn new(ctx: egui::Context) -> Self {
        Self {
            ctx,
            input: String::new(),
            texture: None,
            show_about: false,
        }
    }

    /// Draws the controls and returns the intent raised this frame, if any.
    fn controls(&mut self, ui: &mut egui::Ui) -> Option<Intent> {
        let mut intent = None;

        ui.vertical_centered(|ui| {
            ui.add_space(10.0);
            let entry =
                ui.add(egui::TextEdit::singleline(&mut self.input).desired_width(ENTRY_WIDTH));
            let submitted = entry.lost_focus() && ui.input(|i| i.key_pressed(egui::Key::Enter));

            ui.add_space(5.0);
            let generate = ui
                .button(view::GENERATE_LABEL)
                .on_hover_text(view::GENERATE_TOOLTIP)
                .clicked();
            if generate || submitted {
                match view::generate_intent(&self.input) {
                    Ok(generate) => intent = Some(generate),
                    Err(err) => self.notify(Notice::from(&err)),
                }
            }

            ui.add_space(5.0);
            if ui
                .button(view::SAVE_LABEL)
                .on_hover_text(view::SAVE_TOOLTIP)
                .clicked()
            {
                if let Some(path) = rfd::FileDialog::new()
                    .add_filter("PNG files", &["png"])
                    .set_file_name("qrcode.png")
                    .save_file()
                {
                    intent = Some(Intent::Save(view::with_png_extension(path)));
                }
            }

            ui.add_space(5.0);
            if ui
                .button(view::MESSAGING_LABEL)
                .on_hover_text(view::MESSAGING_TOOLTIP)
                .clicked()
            {
                intent = Some(Intent::OpenMessagingPage);
            }

            if let Some(texture) = &self.texture {
                ui.add_space(5.0);
                egui::ScrollArea::both().show(ui, |ui| {
                    let response = ui
                        .add(
                            egui::Image::new(texture)
                                .fit_to_exact_size(texture.size_vec2())
                                .sense(egui::Sense::click()),
                        )
                        .on_hover_text(view::IMAGE_TOOLTIP);
                    response.context_menu(|ui| {
                        if ui.button(view::COPY_LABEL).clicked() {
                            intent = Some(Intent::Copy);
                            ui.close();
                        }
                    });
                });
            }
        });

        intent
    }

    fn about_window(&mut self, ctx: &egui::Context) {
        egui::Window::new(view::ABOUT_TITLE)
            .open(&mut self.show_about)
            .collapsible(false)
            .resizable(false)
            .anchor(egui::Align2::CENTER_CENTER, [0.0, 0.0])
            .show(ctx, |ui| {
                ui.label(view::ABOUT_TEXT);
            });
    }
}

impl Presentation for Surface {
    fn display(&mut self, symbol: &EncodedSymbol) {
        let size = [symbol.width() as usize, symbol.height() as usize];
        let image = egui::ColorImage::from_gray(size, symbol.image().as_raw());
        self.texture = Some(
            self.ctx
                .load_texture("qr-symbol", image, egui::TextureOptions::NEAREST),
        );
    }

    fn notify(&mut self, notice: Notice) {
        let level = match notice.level {
            NoticeLevel::Info => rfd::MessageLevel::Info,
            NoticeLevel::Error => rfd::MessageLevel::Error,
        };
        rfd::MessageDialog::new()
            .set_level(level)
            .set_title(notice.title)
            .set_description(notice.message)
            .set_buttons(rfd::MessageButtons::Ok)
            .show();
    }
}
