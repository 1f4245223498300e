//! Background submission: spawn the request, poll for its result each frame

use super::{App, InFlight};
use crate::error::TransportError;
use crate::transport::Transport;
use crate::types::ServerResponse;
use eframe::egui;
use std::time::Instant;
use tokio::sync::oneshot::{self, error::TryRecvError};
use tracing::debug;

impl InFlight {
    /// The request outcome once the task has answered. A task that died
    /// without answering counts as a transport failure.
    pub(crate) fn try_outcome(&mut self) -> Option<Result<ServerResponse, TransportError>> {
        match self.rx.try_recv() {
            Ok(outcome) => Some(outcome),
            Err(TryRecvError::Empty) => None,
            Err(TryRecvError::Closed) => Some(Err(TransportError::Interrupted)),
        }
    }
}

impl App {
    /// Submit action from the button or Enter in a single-line field.
    pub(crate) fn start_submit(&mut self, ctx: &egui::Context) {
        // Same as a browser: no submission while the button is disabled
        let Some(pending) = self.handler.try_begin(&mut self.view) else {
            return;
        };

        let (tx, rx) = oneshot::channel();
        let transport = self.handler.transport().clone();
        let body = pending.body().to_string();
        let ctx = ctx.clone();
        self.runtime.spawn(async move {
            let outcome = transport.post_form(body).await;
            if tx.send(outcome).is_err() {
                debug!("Submission result dropped, window already closed");
            }
            ctx.request_repaint();
        });

        self.in_flight = Some(InFlight { pending, rx });
    }

    /// Apply a finished request, if any
    pub(crate) fn poll_submit(&mut self) {
        let Some(outcome) = self.in_flight.as_mut().and_then(InFlight::try_outcome) else {
            return;
        };

        if let Some(InFlight { pending, .. }) = self.in_flight.take() {
            if let Err(e) = self.handler.finish(&mut self.view, pending, outcome) {
                debug!(error = %e, "Submission finished without success");
            }
        }
    }

    /// Remove an expired banner and schedule a repaint for the next deadline
    pub(crate) fn tick_feedback(&mut self, ctx: &egui::Context) {
        let now = Instant::now();
        self.view.feedback.expire(now);
        if let Some(remaining) = self.view.feedback.remaining(now) {
            ctx.request_repaint_after(remaining);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::constants::{MSG_CONNECTION_ERROR, SUBMIT_LABEL};
    use crate::error::SubmitError;
    use crate::form::FormView;
    use crate::handler::{FormSubmissionHandler, HandlerConfig};
    use crate::transport::HttpTransport;
    use crate::types::{FeedbackKind, FieldName};
    use pretty_assertions::assert_eq;
    use serde_json::json;

    type Outcome = Result<ServerResponse, TransportError>;

    /// A valid form in its sending state, with the task's channel still open
    fn sending_view() -> (
        FormSubmissionHandler<HttpTransport>,
        FormView,
        InFlight,
        oneshot::Sender<Outcome>,
    ) {
        let handler = FormSubmissionHandler::from_config(&HandlerConfig::default());
        let mut view = FormView::default();
        view.form.set_value(FieldName::Nombre, "Ana Torres");
        view.form.set_value(FieldName::Email, "ana@correo.pe");
        view.form.set_value(FieldName::Mensaje, "Hola");

        let pending = handler.try_begin(&mut view).unwrap();
        let (tx, rx) = oneshot::channel();
        (handler, view, InFlight { pending, rx }, tx)
    }

    #[test]
    fn nothing_to_apply_while_task_runs() {
        let (_handler, view, mut in_flight, _tx) = sending_view();

        assert!(in_flight.try_outcome().is_none());
        assert!(view.button.is_sending());
    }

    #[test]
    fn answered_task_hands_back_its_outcome() {
        let (handler, mut view, mut in_flight, tx) = sending_view();
        tx.send(Ok(ServerResponse::from_json(&json!({"status": "success"}))))
            .unwrap();

        let outcome = in_flight.try_outcome().unwrap();
        handler.finish(&mut view, in_flight.pending, outcome).unwrap();

        assert_eq!(view.feedback.current().unwrap().kind, FeedbackKind::Success);
        assert_eq!(view.button.label, SUBMIT_LABEL);
    }

    #[test]
    fn vanished_task_restores_the_button() {
        let (handler, mut view, mut in_flight, tx) = sending_view();
        drop(tx);

        let outcome = in_flight.try_outcome().unwrap();
        assert!(matches!(outcome, Err(TransportError::Interrupted)));

        let err = handler.finish(&mut view, in_flight.pending, outcome).unwrap_err();

        assert!(matches!(err, SubmitError::Transport(TransportError::Interrupted)));
        assert_eq!(view.feedback.current().unwrap().text, MSG_CONNECTION_ERROR);
        assert_eq!(view.button.label, SUBMIT_LABEL);
        assert!(view.button.enabled);
    }
}
