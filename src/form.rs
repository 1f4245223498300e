//! Contact form model and the surface the submission handler talks to

use crate::constants::{SENDING_LABEL, SUBMIT_LABEL};
use crate::feedback::FeedbackSlot;
use crate::types::{FeedbackKind, FieldName, FormSubmission};
use crate::utils::format_phone;
use tracing::debug;

/// What the submission handler needs from whatever renders the form
pub trait FormSurface {
    /// Current raw value of a field
    fn field(&self, name: FieldName) -> String;
    /// Every declared field as `(name, value)` pairs, in declaration order
    fn entries(&self) -> Vec<(String, String)>;
    fn focus_field(&mut self, name: FieldName);
    fn set_field_error(&mut self, name: FieldName, invalid: bool);
    fn show_message(&mut self, kind: FeedbackKind, text: &str);
    fn reset_form(&mut self);
    fn submit_button(&mut self) -> &mut SubmitButton;

    fn submission(&self) -> FormSubmission {
        FormSubmission::new(
            &self.field(FieldName::Nombre),
            &self.field(FieldName::Email),
            &self.field(FieldName::Mensaje),
            &self.field(FieldName::Telefono),
        )
    }
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct FieldState {
    pub value: String,
    pub invalid: bool,
}

/// Field values and their highlight state
#[derive(Clone, Debug, Default)]
pub struct ContactForm {
    fields: [FieldState; FieldName::ALL.len()],
}

impl ContactForm {
    fn slot(name: FieldName) -> usize {
        name as usize
    }

    pub fn value(&self, name: FieldName) -> &str {
        &self.fields[Self::slot(name)].value
    }

    /// Mutable access for text widgets; call [`ContactForm::on_input`] after an edit
    pub fn value_mut(&mut self, name: FieldName) -> &mut String {
        &mut self.fields[Self::slot(name)].value
    }

    pub fn set_value(&mut self, name: FieldName, value: impl Into<String>) {
        *self.value_mut(name) = value.into();
        self.on_input(name);
    }

    pub fn is_invalid(&self, name: FieldName) -> bool {
        self.fields[Self::slot(name)].invalid
    }

    pub fn set_invalid(&mut self, name: FieldName, invalid: bool) {
        self.fields[Self::slot(name)].invalid = invalid;
    }

    /// Required fields left empty get highlighted when focus leaves them
    pub fn on_blur(&mut self, name: FieldName) {
        let empty = self.value(name).trim().is_empty();
        self.set_invalid(name, name.is_required() && empty);
    }

    /// Typing clears the highlight; the phone field is reformatted as it changes
    pub fn on_input(&mut self, name: FieldName) {
        self.set_invalid(name, false);
        if name == FieldName::Telefono {
            let formatted = format_phone(self.value(name));
            *self.value_mut(name) = formatted;
        }
    }

    pub fn entries(&self) -> Vec<(String, String)> {
        FieldName::ALL
            .iter()
            .map(|&name| (name.as_str().to_string(), self.value(name).to_string()))
            .collect()
    }

    pub fn reset(&mut self) {
        *self = Self::default();
    }
}

/// Submit button label and enabled state
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SubmitButton {
    pub label: String,
    pub enabled: bool,
}

impl Default for SubmitButton {
    fn default() -> Self {
        Self {
            label: SUBMIT_LABEL.to_string(),
            enabled: true,
        }
    }
}

/// Proof that the button was switched to its sending state.
/// Hand it back to [`SubmitButton::release`] to restore the original label.
#[must_use = "the button stays disabled until the ticket is released"]
#[derive(Debug)]
pub struct SendingTicket {
    original_label: String,
}

impl SubmitButton {
    pub fn is_sending(&self) -> bool {
        !self.enabled
    }

    pub fn acquire(&mut self) -> SendingTicket {
        let original_label = std::mem::replace(&mut self.label, SENDING_LABEL.to_string());
        self.enabled = false;
        SendingTicket { original_label }
    }

    pub fn release(&mut self, ticket: SendingTicket) {
        self.label = ticket.original_label;
        self.enabled = true;
    }
}

/// Everything the window shows for the form: fields, banner and button
#[derive(Debug, Default)]
pub struct FormView {
    pub form: ContactForm,
    pub feedback: FeedbackSlot,
    pub button: SubmitButton,
    focus_request: Option<FieldName>,
}

impl FormView {
    /// Field that should grab keyboard focus on the next frame
    pub fn take_focus_request(&mut self) -> Option<FieldName> {
        self.focus_request.take()
    }
}

impl FormSurface for FormView {
    fn field(&self, name: FieldName) -> String {
        self.form.value(name).to_string()
    }

    fn entries(&self) -> Vec<(String, String)> {
        self.form.entries()
    }

    fn focus_field(&mut self, name: FieldName) {
        self.focus_request = Some(name);
    }

    fn set_field_error(&mut self, name: FieldName, invalid: bool) {
        self.form.set_invalid(name, invalid);
    }

    fn show_message(&mut self, kind: FeedbackKind, text: &str) {
        debug!(kind = kind.as_str(), text, "Showing feedback");
        self.feedback.show(kind, text);
    }

    fn reset_form(&mut self) {
        self.form.reset();
    }

    fn submit_button(&mut self) -> &mut SubmitButton {
        &mut self.button
    }
}
