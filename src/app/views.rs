//! Form rendering

use super::App;
use crate::form::FormSurface;
use crate::theme;
use crate::types::FieldName;
use crate::ui::components::{feedback_banner, field_label, service_select, text_field};
use eframe::egui;

impl App {
    pub(crate) fn render_form(&mut self, ui: &mut egui::Ui, ctx: &egui::Context) {
        let focus = self.view.take_focus_request();
        let mut submit = false;

        ui.add_space(theme::SPACING_XL);
        ui.label(
            egui::RichText::new("CONTÁCTANOS")
                .size(theme::FONT_TITLE)
                .color(theme::TEXT_PRIMARY)
                .strong(),
        );
        ui.label(
            egui::RichText::new("Déjanos tu consulta y te responderemos a la brevedad.")
                .size(theme::FONT_BODY)
                .color(theme::TEXT_DIM),
        );
        ui.add_space(theme::SPACING_LG);

        // Banner sits right above the form
        if let Some(message) = self.view.feedback.current().cloned() {
            let response = feedback_banner(ui, &message);
            if self.view.feedback.take_scroll_request() {
                response.scroll_to_me(Some(egui::Align::Center));
            }
            ui.add_space(theme::SPACING_LG);
        }

        theme::card_frame().show(ui, |ui| {
            ui.set_width(ui.available_width());

            for name in FieldName::ALL {
                field_label(ui, name);
                if name == FieldName::Servicio {
                    service_select(ui, &mut self.view.form);
                } else {
                    let response =
                        text_field(ui, &mut self.view.form, name, focus == Some(name));
                    if name != FieldName::Mensaje
                        && response.lost_focus()
                        && ui.input(|i| i.key_pressed(egui::Key::Enter))
                    {
                        submit = true;
                    }
                }
                ui.add_space(theme::SPACING_MD);
            }

            ui.add_space(theme::SPACING_SM);
            ui.horizontal(|ui| {
                let button = self.view.submit_button().clone();
                let text = if button.is_sending() {
                    button.label.clone()
                } else {
                    format!("{} {}", egui_phosphor::regular::PAPER_PLANE_TILT, button.label)
                };
                let clicked = ui
                    .add_enabled(button.enabled, theme::button_submit(text, button.enabled))
                    .clicked();
                if clicked {
                    submit = true;
                }
                if button.is_sending() {
                    ui.add(egui::Spinner::new().color(theme::ACCENT));
                }
            });
        });

        if submit {
            self.start_submit(ctx);
        }
    }
}
