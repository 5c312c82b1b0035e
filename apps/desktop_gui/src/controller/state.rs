//! Interaction state owned by the controller.

use shared::domain::{Classification, RequestTicket};

use crate::controller::events::FailureNotice;

/// Request lifecycle. The verdict lives inside `Succeeded`, so a result can
/// only be observed after a settled successful response.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum RequestState {
    #[default]
    Idle,
    Submitting {
        ticket: RequestTicket,
    },
    Succeeded(Classification),
    Failed(FailureNotice),
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct InteractionState {
    pub(super) input_text: String,
    pub(super) request: RequestState,
    /// Last ticket handed out. Survives reset so late responses never match.
    pub(super) last_ticket: RequestTicket,
}

impl InteractionState {
    pub fn input_text(&self) -> &str {
        &self.input_text
    }

    pub fn request(&self) -> &RequestState {
        &self.request
    }

    pub fn result(&self) -> Option<&Classification> {
        match &self.request {
            RequestState::Succeeded(result) => Some(result),
            _ => None,
        }
    }

    pub fn failure(&self) -> Option<&FailureNotice> {
        match &self.request {
            RequestState::Failed(notice) => Some(notice),
            _ => None,
        }
    }

    pub fn in_flight(&self) -> Option<RequestTicket> {
        match self.request {
            RequestState::Submitting { ticket } => Some(ticket),
            _ => None,
        }
    }

    pub fn is_submitting(&self) -> bool {
        self.in_flight().is_some()
    }

    pub fn has_submittable_text(&self) -> bool {
        !self.input_text.trim().is_empty()
    }

    /// Mirrors the submit guard used by the reducer.
    pub fn can_submit(&self) -> bool {
        !self.is_submitting() && self.has_submittable_text()
    }

    pub fn is_pristine(&self) -> bool {
        self.input_text.is_empty() && self.request == RequestState::Idle
    }
}
