//! Controller events and failure modeling for the screening window.

use client_core::ClassifyError;
use shared::domain::{Classification, RequestTicket};

use crate::controller::orchestration::DispatchError;

/// Events delivered from the backend worker to the UI thread.
#[derive(Debug)]
pub enum UiEvent {
    ClassificationSettled {
        ticket: RequestTicket,
        outcome: Result<Classification, ClassifyError>,
    },
    BackendUnavailable(String),
}

/// Inputs to the interaction reducer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InteractionEvent {
    TextEdited(String),
    SubmitRequested,
    ResetRequested,
    ResponseArrived {
        ticket: RequestTicket,
        outcome: Result<Classification, FailureNotice>,
    },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FailureCategory {
    Unreachable,
    Timeout,
    Service,
    InvalidResponse,
    LocalQueue,
}

/// User-visible description of a failed request. The headline is the same for
/// every category; the detail line carries the specific cause.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FailureNotice {
    category: FailureCategory,
    detail: String,
}

impl FailureNotice {
    pub const HEADLINE: &'static str = "Gagal menghubungi layanan analisis. Silakan coba lagi.";

    pub fn new(category: FailureCategory, detail: impl Into<String>) -> Self {
        Self {
            category,
            detail: detail.into(),
        }
    }

    pub fn from_classify_error(err: &ClassifyError) -> Self {
        let category = match err {
            ClassifyError::Setup(_) | ClassifyError::Network(_) => FailureCategory::Unreachable,
            ClassifyError::Timeout { .. } => FailureCategory::Timeout,
            ClassifyError::HttpStatus { .. } => FailureCategory::Service,
            ClassifyError::MalformedBody(_) | ClassifyError::Protocol(_) => {
                FailureCategory::InvalidResponse
            }
        };
        Self::new(category, err.to_string())
    }

    pub fn from_dispatch_error(err: &DispatchError) -> Self {
        Self::new(FailureCategory::LocalQueue, err.to_string())
    }

    pub fn headline(&self) -> &'static str {
        Self::HEADLINE
    }

    pub fn category(&self) -> FailureCategory {
        self.category
    }

    pub fn detail(&self) -> &str {
        &self.detail
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use shared::error::ProtocolViolation;

    #[test]
    fn maps_classify_errors_to_categories() {
        let status = FailureNotice::from_classify_error(&ClassifyError::HttpStatus { status: 503 });
        assert_eq!(status.category(), FailureCategory::Service);
        assert!(status.detail().contains("503"));

        let timeout = FailureNotice::from_classify_error(&ClassifyError::Timeout { seconds: 30 });
        assert_eq!(timeout.category(), FailureCategory::Timeout);

        let schema = FailureNotice::from_classify_error(&ClassifyError::Protocol(
            ProtocolViolation::LabelOutOfRange(4),
        ));
        assert_eq!(schema.category(), FailureCategory::InvalidResponse);
        assert_eq!(schema.headline(), FailureNotice::HEADLINE);
    }

    #[test]
    fn dispatch_failures_are_local_queue_notices() {
        let notice = FailureNotice::from_dispatch_error(&DispatchError::Disconnected);
        assert_eq!(notice.category(), FailureCategory::LocalQueue);
        assert!(notice.detail().contains("disconnected"));
    }
}
