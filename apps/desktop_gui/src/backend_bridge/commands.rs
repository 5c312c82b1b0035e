//! Backend commands queued from UI to backend worker.

use shared::domain::RequestTicket;

#[derive(Debug)]
pub enum BackendCommand {
    Classify { ticket: RequestTicket, text: String },
}
