use thiserror::Error;

/// A response body that parsed but does not satisfy the classification schema.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ProtocolViolation {
    #[error("label {0} is outside the supported range {{0, 1}}")]
    LabelOutOfRange(i64),
    #[error("status is missing or empty")]
    EmptyStatus,
}
