//! Submission lifecycle: validate, send, interpret the reply, restore the button
//!
//! A submission is split in two halves so the window never blocks on the network:
//! [`FormSubmissionHandler::begin`] runs on the UI thread and returns a
//! [`PendingSubmission`], the caller sends its body however it likes, and
//! [`FormSubmissionHandler::finish`] applies the outcome.

use crate::constants::{
    ENDPOINT_URL, MSG_CONNECTION_ERROR, MSG_SENDING, MSG_SERVER_ERROR, MSG_SUCCESS,
};
use crate::error::{SubmitError, TransportError, ValidationError};
use crate::form::{FormSurface, SendingTicket};
use crate::transport::{HttpTransport, Transport};
use crate::types::{FeedbackKind, ServerResponse};
use crate::utils::encode_form;
use crate::validation::validate;
use tracing::{debug, error, info};

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct HandlerConfig {
    pub endpoint_url: String,
}

impl Default for HandlerConfig {
    fn default() -> Self {
        Self {
            endpoint_url: ENDPOINT_URL.to_string(),
        }
    }
}

/// A validated form whose request has not settled yet.
///
/// Owns the button's [`SendingTicket`], so the only way to get rid of it is
/// [`FormSubmissionHandler::finish`], which always restores the button.
#[must_use = "pass this to FormSubmissionHandler::finish so the submit button is restored"]
#[derive(Debug)]
pub struct PendingSubmission {
    body: String,
    ticket: SendingTicket,
}

impl PendingSubmission {
    /// The `application/x-www-form-urlencoded` request body
    pub fn body(&self) -> &str {
        &self.body
    }
}

#[derive(Clone, Debug)]
pub struct FormSubmissionHandler<T> {
    transport: T,
}

impl FormSubmissionHandler<HttpTransport> {
    pub fn from_config(config: &HandlerConfig) -> Self {
        Self::new(HttpTransport::new(config.endpoint_url.clone()))
    }
}

impl<T: Transport> FormSubmissionHandler<T> {
    pub fn new(transport: T) -> Self {
        Self { transport }
    }

    pub fn transport(&self) -> &T {
        &self.transport
    }

    /// Validate the form and, if it passes, switch the UI to its sending state.
    ///
    /// On a validation failure the error is shown and the offending field is
    /// highlighted and focused; the button is left alone.
    pub fn begin<S: FormSurface>(&self, surface: &mut S) -> Result<PendingSubmission, ValidationError> {
        let submission = surface.submission();
        if let Err(err) = validate(&submission) {
            debug!(field = err.field().as_str(), reason = %err, "Form rejected");
            surface.show_message(FeedbackKind::Error, &err.to_string());
            surface.set_field_error(err.field(), true);
            surface.focus_field(err.field());
            return Err(err);
        }

        let ticket = surface.submit_button().acquire();
        surface.show_message(FeedbackKind::Info, MSG_SENDING);

        let entries = surface.entries();
        let body = encode_form(&entries);
        info!(fields = entries.len(), "Submitting contact form");

        Ok(PendingSubmission { body, ticket })
    }

    /// [`FormSubmissionHandler::begin`] for the window: refused while a request
    /// is already in flight, since the button is disabled until it settles.
    pub fn try_begin<S: FormSurface>(&self, surface: &mut S) -> Option<PendingSubmission> {
        if surface.submit_button().is_sending() {
            debug!("Submit ignored, a request is already in flight");
            return None;
        }
        self.begin(surface).ok()
    }

    /// Apply the request outcome and restore the submit button, whatever happened.
    pub fn finish<S: FormSurface>(
        &self,
        surface: &mut S,
        pending: PendingSubmission,
        outcome: Result<ServerResponse, TransportError>,
    ) -> Result<(), SubmitError> {
        let PendingSubmission { ticket, .. } = pending;

        let result = match outcome {
            Ok(response) if response.is_success() => {
                info!("Contact form delivered");
                surface.show_message(FeedbackKind::Success, MSG_SUCCESS);
                surface.reset_form();
                Ok(())
            }
            Ok(response) => {
                error!(
                    status = ?response.status,
                    message = ?response.message,
                    "Server rejected contact form"
                );
                surface.show_message(FeedbackKind::Error, MSG_SERVER_ERROR);
                Err(SubmitError::Server {
                    status: response.status,
                    message: response.message,
                })
            }
            Err(err) => {
                error!(error = %err, "Connection error while sending contact form");
                surface.show_message(FeedbackKind::Error, MSG_CONNECTION_ERROR);
                Err(err.into())
            }
        };

        surface.submit_button().release(ticket);
        result
    }

    /// Run a whole submission, awaiting the request in place.
    #[cfg(test)]
    pub async fn submit<S: FormSurface>(&self, surface: &mut S) -> Result<(), SubmitError> {
        let pending = self.begin(surface)?;
        let outcome = self.transport.post_form(pending.body.clone()).await;
        self.finish(surface, pending, outcome)
    }
}
