//! Main application state and eframe integration.

use std::time::Instant;

use egui::epaint::Shadow;
use egui::{Align, Button, CentralPanel, Color32, Context, FontId, Key, RichText, Stroke, Ui, Vec2};
use hexpick_core::{ColorPicker, Intent, PickerConfig};

use crate::clipboard::SystemClipboard;
use crate::slider::channel_slider;
use crate::theme;

/// Main application state.
pub struct PickerApp {
    /// Color picker core: state, randomness and the copy reset timer
    picker: ColorPicker,
    /// OS clipboard
    clipboard: SystemClipboard,
}

impl PickerApp {
    /// Create a new picker application.
    pub fn new(_cc: &eframe::CreationContext<'_>, config: &PickerConfig) -> Self {
        let picker = ColorPicker::new(config);
        tracing::info!("Starting with {}", picker.state().color());
        Self {
            picker,
            clipboard: SystemClipboard::default(),
        }
    }

    /// Copy the committed color to the OS clipboard.
    fn copy(&mut self) {
        // The failure is already recorded in the picker state.
        if let Err(e) = self.picker.copy(&mut self.clipboard, Instant::now()) {
            tracing::debug!("Copy failed: {}", e);
        }
    }

    /// Render the whole window.
    fn render(&mut self, ctx: &Context) {
        let appearance = self.picker.appearance();
        let background = theme::color32(&appearance.background);
        let foreground = theme::color32(&appearance.foreground);

        CentralPanel::default()
            .frame(egui::Frame::none().fill(background))
            .show(ctx, |ui| {
                ui.add_space((ui.available_height() * 0.2).max(24.0));

                ui.vertical_centered(|ui| {
                    // Headline hex field with its glow painted underneath
                    let glow_slot = ui.painter().add(egui::Shape::Noop);
                    let mut buffer = self.picker.state().input_value().to_string();
                    let response = ui.add(
                        egui::TextEdit::singleline(&mut buffer)
                            .font(FontId::monospace(theme::HEX_FONT_SIZE))
                            .text_color(foreground)
                            .frame(false)
                            .horizontal_align(Align::Center)
                            .desired_width(theme::HEX_FIELD_WIDTH),
                    );
                    let shadow = Shadow {
                        offset: Vec2::ZERO,
                        blur: theme::GLOW_BLUR,
                        spread: 0.0,
                        color: theme::glow32(&appearance.glow),
                    };
                    ui.painter()
                        .set(glow_slot, shadow.as_shape(response.rect, theme::BUTTON_ROUNDING));
                    if response.changed() {
                        self.picker.dispatch(Intent::TextInput(buffer));
                    }

                    if let Some(error) = self.picker.state().error() {
                        ui.add_space(8.0);
                        ui.label(
                            RichText::new(error)
                                .size(theme::ERROR_FONT_SIZE)
                                .color(foreground.gamma_multiply(theme::ERROR_OPACITY)),
                        );
                    }

                    ui.add_space(24.0);
                    self.render_buttons(ui, foreground, background);

                    if self.picker.state().show_sliders() {
                        ui.add_space(32.0);
                        self.render_sliders(ui, foreground, background);
                    }
                });
            });
    }

    /// Shuffle, Edit/Hide and Copy buttons.
    fn render_buttons(&mut self, ui: &mut Ui, foreground: Color32, background: Color32) {
        let outlined = |text: &str| {
            Button::new(
                RichText::new(text)
                    .size(theme::BUTTON_FONT_SIZE)
                    .strong()
                    .color(foreground),
            )
            .fill(Color32::TRANSPARENT)
            .stroke(Stroke::new(theme::BUTTON_STROKE_WIDTH, foreground))
            .rounding(theme::BUTTON_ROUNDING)
            .min_size(theme::BUTTON_SIZE.into())
        };

        let row_width = theme::BUTTON_SIZE[0] * 3.0 + ui.spacing().item_spacing.x * 2.0;
        ui.allocate_ui(Vec2::new(row_width, theme::BUTTON_SIZE[1]), |ui| {
            ui.horizontal(|ui| {
                if ui.add(outlined("Shuffle")).clicked() {
                    self.picker.dispatch(Intent::Shuffle);
                }

                let toggle_label = self.picker.state().toggle_label();
                if ui.add(outlined(toggle_label)).clicked() {
                    self.picker.dispatch(Intent::ToggleSliders);
                }

                let copy_button = Button::new(
                    RichText::new(self.picker.state().copy_label())
                        .size(theme::BUTTON_FONT_SIZE)
                        .strong()
                        .color(background),
                )
                .fill(foreground)
                .rounding(theme::BUTTON_ROUNDING)
                .min_size(theme::BUTTON_SIZE.into());
                if ui.add(copy_button).clicked() {
                    self.copy();
                }
            });
        });
    }

    /// One labelled gradient slider per channel.
    fn render_sliders(&mut self, ui: &mut Ui, foreground: Color32, background: Color32) {
        let tracks = self.picker.tracks();
        ui.allocate_ui(Vec2::new(theme::PANEL_WIDTH, 0.0), |ui| {
            for track in &tracks {
                ui.horizontal(|ui| {
                    ui.label(
                        RichText::new(track.channel.label())
                            .font(FontId::monospace(theme::LABEL_FONT_SIZE))
                            .strong()
                            .color(foreground),
                    );
                    ui.with_layout(egui::Layout::right_to_left(Align::Center), |ui| {
                        ui.label(
                            RichText::new(track.value.to_string())
                                .font(FontId::monospace(theme::VALUE_FONT_SIZE))
                                .color(foreground.gamma_multiply(theme::VALUE_OPACITY)),
                        );
                    });
                });
                if let Some(value) = channel_slider(ui, track, foreground, background) {
                    self.picker.dispatch(Intent::SliderChange(track.channel, value));
                }
                ui.add_space(16.0);
            }
        });
    }

    /// Handle keyboard shortcuts.
    fn handle_keyboard(&mut self, ctx: &Context) {
        // Leave plain keys and Ctrl+C to the text field while it has focus
        let editing = ctx.memory(|m| m.focused().is_some());

        let (copy, shuffle, quit) = ctx.input(|i| {
            (
                !editing
                    && (i.events.iter().any(|e| matches!(e, egui::Event::Copy))
                        || (i.modifiers.command && i.key_pressed(Key::C))),
                !editing && i.key_pressed(Key::Space),
                i.modifiers.command && i.key_pressed(Key::Q),
            )
        });

        if copy {
            self.copy();
        }
        if shuffle {
            self.picker.dispatch(Intent::Shuffle);
        }
        if quit {
            ctx.send_viewport_cmd(egui::ViewportCommand::Close);
        }
    }
}

impl eframe::App for PickerApp {
    fn update(&mut self, ctx: &Context, _frame: &mut eframe::Frame) {
        let now = Instant::now();
        self.picker.tick(now);

        self.handle_keyboard(ctx);
        self.render(ctx);

        // Wake up when the copy indicator is due to turn off
        if let Some(remaining) = self.picker.reset_remaining(now) {
            ctx.request_repaint_after(remaining);
        }
    }
}
