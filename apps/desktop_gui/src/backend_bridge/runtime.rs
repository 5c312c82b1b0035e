//! Worker thread that owns the tokio runtime and runs classification calls.

use std::{sync::Arc, thread};

use client_core::ClassifierClient;
use crossbeam_channel::{Receiver, Sender, TrySendError};
use shared::domain::RequestTicket;

use crate::backend_bridge::commands::BackendCommand;
use crate::controller::events::UiEvent;

/// Spawns the worker. It runs until every command sender is dropped.
///
/// If the runtime cannot be built the worker reports `BackendUnavailable` and
/// exits, which disconnects the command queue so later submits fail fast.
pub fn launch(
    cmd_rx: Receiver<BackendCommand>,
    ui_tx: Sender<UiEvent>,
    client: Arc<dyn ClassifierClient>,
) -> thread::JoinHandle<()> {
    thread::spawn(move || {
        let runtime = match tokio::runtime::Builder::new_multi_thread()
            .worker_threads(2)
            .thread_name("classifier-io")
            .enable_all()
            .build()
        {
            Ok(runtime) => runtime,
            Err(err) => {
                tracing::error!("failed to build backend runtime: {err}");
                let _ = ui_tx.try_send(UiEvent::BackendUnavailable(format!(
                    "backend worker startup failure: {err}"
                )));
                return;
            }
        };
        tracing::info!("classification worker started");

        for cmd in cmd_rx.iter() {
            match cmd {
                BackendCommand::Classify { ticket, text } => {
                    let client = Arc::clone(&client);
                    let ui_tx = ui_tx.clone();
                    runtime.spawn(async move {
                        let outcome = client.classify(&text).await;
                        if let Err(err) = &outcome {
                            tracing::warn!(ticket = ticket.0, "classification failed: {err}");
                        }
                        deliver(ui_tx, UiEvent::ClassificationSettled { ticket, outcome }, ticket)
                            .await;
                    });
                }
            }
        }

        tracing::info!("command queue closed; classification worker stopping");
    })
}

/// Hands a settled outcome to the UI thread. A full queue applies
/// backpressure instead of dropping the event; only a closed queue loses it.
async fn deliver(ui_tx: Sender<UiEvent>, event: UiEvent, ticket: RequestTicket) {
    let event = match ui_tx.try_send(event) {
        Ok(()) => return,
        Err(TrySendError::Disconnected(_)) => {
            tracing::warn!(ticket = ticket.0, "ui event queue closed; dropping outcome");
            return;
        }
        Err(TrySendError::Full(event)) => event,
    };

    tracing::debug!(ticket = ticket.0, "ui event queue full; waiting for the ui to drain");
    match tokio::task::spawn_blocking(move || ui_tx.send(event)).await {
        Ok(Ok(())) => {}
        Ok(Err(_)) => {
            tracing::warn!(ticket = ticket.0, "ui event queue closed; dropping outcome");
        }
        Err(err) => {
            tracing::error!(ticket = ticket.0, "outcome delivery task failed: {err}");
        }
    }
}

#[cfg(test)]
#[path = "tests/runtime_tests.rs"]
mod tests;
