//! Reusable UI components
//!
//! Widgets for the contact form: the feedback banner and the field editors.
//! They edit [`ContactForm`] directly and forward blur/input events to it.

use crate::constants::SERVICE_OPTIONS;
use crate::feedback::FeedbackMessage;
use crate::form::ContactForm;
use crate::theme;
use crate::types::FieldName;
use eframe::egui;

/// Banner shown above the form
pub fn feedback_banner(ui: &mut egui::Ui, message: &FeedbackMessage) -> egui::Response {
    let (bg, border, text) = theme::feedback_colors(message.kind);

    egui::Frame::new()
        .fill(bg)
        .stroke(egui::Stroke::new(theme::STROKE_DEFAULT, border))
        .corner_radius(theme::RADIUS_LARGE)
        .inner_margin(egui::Margin::symmetric(20, 15))
        .show(ui, |ui| {
            ui.set_width(ui.available_width());
            ui.horizontal_wrapped(|ui| {
                ui.spacing_mut().item_spacing.x = 10.0;
                ui.label(
                    egui::RichText::new(theme::feedback_icon(message.kind))
                        .size(theme::FONT_TITLE)
                        .color(text),
                );
                ui.label(
                    egui::RichText::new(&message.text)
                        .size(theme::FONT_BODY)
                        .color(text)
                        .strong(),
                );
            });
        })
        .response
}

/// Field caption, with an asterisk on required fields
pub fn field_label(ui: &mut egui::Ui, name: FieldName) {
    ui.horizontal(|ui| {
        ui.spacing_mut().item_spacing.x = 2.0;
        ui.label(
            egui::RichText::new(name.label())
                .size(theme::FONT_SMALL)
                .color(theme::TEXT_MUTED),
        );
        if name.is_required() {
            ui.label(
                egui::RichText::new("*")
                    .size(theme::FONT_SMALL)
                    .color(theme::BORDER_INVALID),
            );
        }
    });
}

/// Text input bound to one form field. Mensaje is multi-line, the rest single-line.
pub fn text_field(
    ui: &mut egui::Ui,
    form: &mut ContactForm,
    name: FieldName,
    focus: bool,
) -> egui::Response {
    let invalid = form.is_invalid(name);
    let width = ui.available_width();

    let edit = if name == FieldName::Mensaje {
        egui::TextEdit::multiline(form.value_mut(name)).desired_rows(theme::MESSAGE_ROWS)
    } else {
        egui::TextEdit::singleline(form.value_mut(name))
    };
    let response = ui.add(
        edit.hint_text(name.hint())
            .desired_width(width)
            .margin(egui::Margin::symmetric(8, 8)),
    );

    if invalid {
        ui.painter().rect_stroke(
            response.rect,
            theme::RADIUS_DEFAULT,
            egui::Stroke::new(theme::STROKE_MEDIUM, theme::BORDER_INVALID),
            egui::StrokeKind::Inside,
        );
    }

    if response.changed() {
        form.on_input(name);
    }
    if response.lost_focus() {
        form.on_blur(name);
    }
    if focus {
        response.request_focus();
    }

    response
}

/// Drop-down for the optional `servicio` field
pub fn service_select(ui: &mut egui::Ui, form: &mut ContactForm) {
    let before = form.value(FieldName::Servicio).to_string();
    let selected = if before.is_empty() {
        FieldName::Servicio.hint()
    } else {
        before.as_str()
    };

    let mut chosen = before.clone();
    egui::ComboBox::from_id_salt("servicio")
        .selected_text(selected)
        .width(ui.available_width())
        .show_ui(ui, |ui| {
            for option in SERVICE_OPTIONS {
                let text = if option.is_empty() { "—" } else { option };
                ui.selectable_value(&mut chosen, option.to_string(), text);
            }
        });

    if chosen != before {
        form.set_value(FieldName::Servicio, chosen);
    }
}
