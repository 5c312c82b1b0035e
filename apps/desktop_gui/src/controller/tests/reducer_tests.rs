use super::*;
use crate::controller::events::{FailureCategory, FailureNotice};
use shared::domain::{Classification, Label};

fn replay(events: Vec<InteractionEvent>) -> (InteractionState, Vec<Effect>) {
    let mut state = InteractionState::default();
    let mut effects = Vec::new();
    for event in events {
        let transition = reduce(state, event);
        state = transition.state;
        effects.extend(transition.effect);
    }
    (state, effects)
}

fn edited(text: &str) -> InteractionEvent {
    InteractionEvent::TextEdited(text.to_string())
}

fn verdict(label: Label, status: &str) -> Classification {
    Classification::new(label, status).expect("valid classification")
}

fn server_error() -> FailureNotice {
    FailureNotice::new(FailureCategory::Service, "classification service returned http 500")
}

#[test]
fn starts_idle_and_empty() {
    let state = InteractionState::default();
    assert_eq!(state.input_text(), "");
    assert_eq!(state.request(), &RequestState::Idle);
    assert!(state.result().is_none());
    assert!(state.is_pristine());
}

#[test]
fn editing_only_replaces_text() {
    let (state, effects) = replay(vec![edited("halo"), edited("halo dunia")]);
    assert_eq!(state.input_text(), "halo dunia");
    assert_eq!(state.request(), &RequestState::Idle);
    assert!(effects.is_empty());
}

#[test]
fn blank_input_never_submits() {
    for text in ["", " ", "  ", "\t", "\n \r\n", "\u{3000}"] {
        let transition = reduce(
            InteractionState {
                input_text: text.to_string(),
                ..InteractionState::default()
            },
            InteractionEvent::SubmitRequested,
        );
        assert_eq!(
            transition.state.request(),
            &RequestState::Idle,
            "{text:?} must not submit"
        );
        assert_eq!(transition.effect, None);
        assert_eq!(transition.rejected, Some(Rejection::EmptyInput));
    }
}

#[test]
fn valid_submit_issues_one_call_with_untrimmed_text() {
    for text in ["saya merasa sangat sedih", "  ada spasi  ", "x"] {
        let (state, effects) = replay(vec![edited(text), InteractionEvent::SubmitRequested]);
        assert!(state.is_submitting());
        assert_eq!(
            effects,
            vec![Effect::Classify {
                ticket: RequestTicket(1),
                text: text.to_string(),
            }]
        );
    }
}

#[test]
fn second_submit_while_submitting_is_rejected() {
    let (state, effects) = replay(vec![
        edited("halo"),
        InteractionEvent::SubmitRequested,
        InteractionEvent::SubmitRequested,
        InteractionEvent::SubmitRequested,
    ]);
    assert_eq!(effects.len(), 1);
    assert_eq!(state.in_flight(), Some(RequestTicket(1)));

    let again = reduce(state, InteractionEvent::SubmitRequested);
    assert_eq!(
        again.rejected,
        Some(Rejection::AlreadySubmitting {
            in_flight: RequestTicket(1)
        })
    );
}

#[test]
fn editing_while_submitting_keeps_request_in_flight() {
    let (state, effects) = replay(vec![
        edited("halo"),
        InteractionEvent::SubmitRequested,
        edited("halo lagi"),
    ]);
    assert_eq!(state.input_text(), "halo lagi");
    assert!(state.is_submitting());
    assert_eq!(effects.len(), 1);
}

#[test]
fn matching_success_response_settles_with_result() {
    let (state, _) = replay(vec![
        edited("saya merasa sangat sedih"),
        InteractionEvent::SubmitRequested,
        InteractionEvent::ResponseArrived {
            ticket: RequestTicket(1),
            outcome: Ok(verdict(Label::PositiveIndication, "Depresi")),
        },
    ]);
    assert!(matches!(state.request(), RequestState::Succeeded(_)));
    let result = state.result().expect("result present");
    assert_eq!(result.label(), Label::PositiveIndication);
    assert_eq!(result.status(), "Depresi");
}

#[test]
fn failure_keeps_input_and_clears_result() {
    let (state, _) = replay(vec![
        edited("percobaan pertama"),
        InteractionEvent::SubmitRequested,
        InteractionEvent::ResponseArrived {
            ticket: RequestTicket(1),
            outcome: Ok(verdict(Label::NoIndication, "Normal")),
        },
        InteractionEvent::SubmitRequested,
        InteractionEvent::ResponseArrived {
            ticket: RequestTicket(2),
            outcome: Err(server_error()),
        },
    ]);
    assert_eq!(state.input_text(), "percobaan pertama");
    assert!(state.result().is_none());
    assert_eq!(state.failure(), Some(&server_error()));
}

#[test]
fn new_submit_discards_previous_result() {
    let (state, effects) = replay(vec![
        edited("halo"),
        InteractionEvent::SubmitRequested,
        InteractionEvent::ResponseArrived {
            ticket: RequestTicket(1),
            outcome: Ok(verdict(Label::NoIndication, "Normal")),
        },
        InteractionEvent::SubmitRequested,
    ]);
    assert!(state.result().is_none());
    assert_eq!(state.in_flight(), Some(RequestTicket(2)));
    assert_eq!(effects.len(), 2);
}

#[test]
fn retry_after_failure_is_accepted() {
    let (state, effects) = replay(vec![
        edited("halo"),
        InteractionEvent::SubmitRequested,
        InteractionEvent::ResponseArrived {
            ticket: RequestTicket(1),
            outcome: Err(server_error()),
        },
        InteractionEvent::SubmitRequested,
    ]);
    assert_eq!(state.in_flight(), Some(RequestTicket(2)));
    assert_eq!(effects.len(), 2);
}

#[test]
fn reset_from_every_state_returns_to_pristine() {
    let prefixes: Vec<Vec<InteractionEvent>> = vec![
        vec![],
        vec![edited("halo")],
        vec![edited("halo"), InteractionEvent::SubmitRequested],
        vec![
            edited("halo"),
            InteractionEvent::SubmitRequested,
            InteractionEvent::ResponseArrived {
                ticket: RequestTicket(1),
                outcome: Ok(verdict(Label::PositiveIndication, "Depresi")),
            },
        ],
        vec![
            edited("halo"),
            InteractionEvent::SubmitRequested,
            InteractionEvent::ResponseArrived {
                ticket: RequestTicket(1),
                outcome: Err(server_error()),
            },
        ],
    ];

    for mut events in prefixes {
        events.push(InteractionEvent::ResetRequested);
        let (state, _) = replay(events.clone());
        assert_eq!(state.input_text(), "");
        assert!(state.result().is_none());
        assert_eq!(state.request(), &RequestState::Idle);

        events.push(InteractionEvent::ResetRequested);
        let (twice, _) = replay(events);
        assert_eq!(twice, state);
    }
}

#[test]
fn response_after_reset_is_ignored() {
    let (state, _) = replay(vec![
        edited("halo"),
        InteractionEvent::SubmitRequested,
        InteractionEvent::ResetRequested,
    ]);

    let late = reduce(
        state.clone(),
        InteractionEvent::ResponseArrived {
            ticket: RequestTicket(1),
            outcome: Ok(verdict(Label::PositiveIndication, "Depresi")),
        },
    );
    assert_eq!(late.state, state);
    assert_eq!(
        late.rejected,
        Some(Rejection::StaleResponse {
            ticket: RequestTicket(1)
        })
    );
}

#[test]
fn superseded_response_does_not_overwrite_current_request() {
    let (state, effects) = replay(vec![
        edited("pertama"),
        InteractionEvent::SubmitRequested,
        InteractionEvent::ResetRequested,
        edited("kedua"),
        InteractionEvent::SubmitRequested,
        InteractionEvent::ResponseArrived {
            ticket: RequestTicket(1),
            outcome: Ok(verdict(Label::PositiveIndication, "Depresi")),
        },
    ]);
    assert_eq!(state.in_flight(), Some(RequestTicket(2)));
    assert!(state.result().is_none());
    assert_eq!(
        effects,
        vec![
            Effect::Classify {
                ticket: RequestTicket(1),
                text: "pertama".to_string(),
            },
            Effect::Classify {
                ticket: RequestTicket(2),
                text: "kedua".to_string(),
            },
        ]
    );

    let settled = reduce(
        state,
        InteractionEvent::ResponseArrived {
            ticket: RequestTicket(2),
            outcome: Ok(verdict(Label::NoIndication, "Normal")),
        },
    );
    assert_eq!(
        settled.state.result().map(|r| r.status()),
        Some("Normal")
    );
}

#[test]
fn response_while_idle_is_ignored() {
    let state = InteractionState::default();
    let transition = reduce(
        state.clone(),
        InteractionEvent::ResponseArrived {
            ticket: RequestTicket(9),
            outcome: Err(server_error()),
        },
    );
    assert_eq!(transition.state, state);
    assert!(transition.rejected.is_some());
}
