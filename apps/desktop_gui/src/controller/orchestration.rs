//! Command orchestration from reducer effects to the backend command queue.

use client_core::ClassifyError;
use crossbeam_channel::{Sender, TrySendError};
use shared::domain::{Classification, RequestTicket};
use thiserror::Error;

use crate::backend_bridge::commands::BackendCommand;
use crate::controller::{
    events::{FailureNotice, InteractionEvent},
    reducer::{reduce, Effect, Rejection},
    state::InteractionState,
};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum DispatchError {
    #[error("command queue is full")]
    QueueFull,
    #[error("backend worker disconnected")]
    Disconnected,
}

pub fn dispatch_backend_command(
    cmd_tx: &Sender<BackendCommand>,
    cmd: BackendCommand,
) -> Result<(), DispatchError> {
    let cmd_name = match &cmd {
        BackendCommand::Classify { .. } => "classify",
    };

    match cmd_tx.try_send(cmd) {
        Ok(()) => {
            tracing::debug!(command = cmd_name, "queued ui->backend command");
            Ok(())
        }
        Err(TrySendError::Full(_)) => Err(DispatchError::QueueFull),
        Err(TrySendError::Disconnected(_)) => Err(DispatchError::Disconnected),
    }
}

/// Owns the interaction state and turns reducer effects into backend commands.
pub struct InteractionController {
    state: InteractionState,
    cmd_tx: Sender<BackendCommand>,
}

impl InteractionController {
    pub fn new(cmd_tx: Sender<BackendCommand>) -> Self {
        Self {
            state: InteractionState::default(),
            cmd_tx,
        }
    }

    pub fn state(&self) -> &InteractionState {
        &self.state
    }

    pub fn edit_text(&mut self, text: impl Into<String>) {
        self.apply(InteractionEvent::TextEdited(text.into()));
    }

    pub fn submit(&mut self) {
        self.apply(InteractionEvent::SubmitRequested);
    }

    pub fn reset(&mut self) {
        self.apply(InteractionEvent::ResetRequested);
    }

    pub fn apply_response(
        &mut self,
        ticket: RequestTicket,
        outcome: Result<Classification, FailureNotice>,
    ) {
        self.apply(InteractionEvent::ResponseArrived { ticket, outcome });
    }

    pub fn apply_backend_outcome(
        &mut self,
        ticket: RequestTicket,
        outcome: Result<Classification, ClassifyError>,
    ) {
        self.apply_response(
            ticket,
            outcome.map_err(|err| FailureNotice::from_classify_error(&err)),
        );
    }

    fn apply(&mut self, event: InteractionEvent) {
        let transition = reduce(std::mem::take(&mut self.state), event);
        self.state = transition.state;

        match transition.rejected {
            Some(Rejection::EmptyInput) => tracing::debug!("submit ignored: input is blank"),
            Some(Rejection::AlreadySubmitting { in_flight }) => {
                tracing::debug!(ticket = in_flight.0, "submit ignored: request already in flight")
            }
            Some(Rejection::StaleResponse { ticket }) => tracing::debug!(
                ticket = ticket.0,
                "dropping response for a request no longer in flight"
            ),
            None => {}
        }

        if let Some(Effect::Classify { ticket, text }) = transition.effect {
            tracing::info!(
                ticket = ticket.0,
                text_len = text.len(),
                "submitting text for classification"
            );
            let cmd = BackendCommand::Classify { ticket, text };
            if let Err(err) = dispatch_backend_command(&self.cmd_tx, cmd) {
                tracing::warn!(ticket = ticket.0, "failed to queue classification: {err}");
                self.apply_response(ticket, Err(FailureNotice::from_dispatch_error(&err)));
            }
        }
    }
}
