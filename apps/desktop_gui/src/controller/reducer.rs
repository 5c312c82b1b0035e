//! Pure state transitions: `(state, event) -> (state, effect)`.

use shared::domain::RequestTicket;

use crate::controller::{
    events::InteractionEvent,
    state::{InteractionState, RequestState},
};

/// Side effect requested by a transition. At most one per transition.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Effect {
    Classify { ticket: RequestTicket, text: String },
}

/// Why an event left the state untouched.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Rejection {
    EmptyInput,
    AlreadySubmitting { in_flight: RequestTicket },
    StaleResponse { ticket: RequestTicket },
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Transition {
    pub state: InteractionState,
    pub effect: Option<Effect>,
    pub rejected: Option<Rejection>,
}

impl Transition {
    fn to(state: InteractionState) -> Self {
        Self {
            state,
            effect: None,
            rejected: None,
        }
    }

    fn rejected(state: InteractionState, reason: Rejection) -> Self {
        Self {
            state,
            effect: None,
            rejected: Some(reason),
        }
    }
}

pub fn reduce(state: InteractionState, event: InteractionEvent) -> Transition {
    match event {
        InteractionEvent::TextEdited(input_text) => Transition::to(InteractionState {
            input_text,
            ..state
        }),
        InteractionEvent::SubmitRequested => submit(state),
        InteractionEvent::ResetRequested => Transition::to(InteractionState {
            input_text: String::new(),
            request: RequestState::Idle,
            last_ticket: state.last_ticket,
        }),
        InteractionEvent::ResponseArrived { ticket, outcome } => {
            if state.in_flight() != Some(ticket) {
                return Transition::rejected(state, Rejection::StaleResponse { ticket });
            }
            let request = match outcome {
                Ok(result) => RequestState::Succeeded(result),
                Err(notice) => RequestState::Failed(notice),
            };
            Transition::to(InteractionState { request, ..state })
        }
    }
}

fn submit(state: InteractionState) -> Transition {
    if let Some(in_flight) = state.in_flight() {
        return Transition::rejected(state, Rejection::AlreadySubmitting { in_flight });
    }
    if !state.has_submittable_text() {
        return Transition::rejected(state, Rejection::EmptyInput);
    }

    let ticket = state.last_ticket.next();
    // The untrimmed text goes on the wire.
    let text = state.input_text.clone();
    Transition {
        state: InteractionState {
            request: RequestState::Submitting { ticket },
            last_ticket: ticket,
            ..state
        },
        effect: Some(Effect::Classify { ticket, text }),
        rejected: None,
    }
}

#[cfg(test)]
#[path = "tests/reducer_tests.rs"]
mod tests;
