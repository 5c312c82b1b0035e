use std::fmt;

use serde::{Deserialize, Serialize};

use crate::error::ProtocolViolation;

/// Generation token handed out for every accepted submit.
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize,
)]
pub struct RequestTicket(pub u64);

impl RequestTicket {
    /// Saturates at `u64::MAX` so a ticket never falls back to the default.
    pub fn next(self) -> Self {
        Self(self.0.saturating_add(1))
    }
}

impl fmt::Display for RequestTicket {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// Binary verdict returned by the classifier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Label {
    /// `0` on the wire.
    NoIndication,
    /// `1` on the wire.
    PositiveIndication,
}

impl Label {
    pub fn is_positive(self) -> bool {
        self == Label::PositiveIndication
    }
}

impl TryFrom<i64> for Label {
    type Error = ProtocolViolation;

    fn try_from(value: i64) -> Result<Self, Self::Error> {
        match value {
            0 => Ok(Label::NoIndication),
            1 => Ok(Label::PositiveIndication),
            other => Err(ProtocolViolation::LabelOutOfRange(other)),
        }
    }
}

impl From<Label> for i64 {
    fn from(value: Label) -> Self {
        match value {
            Label::NoIndication => 0,
            Label::PositiveIndication => 1,
        }
    }
}

/// A fully validated classification verdict. Never partially populated.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Classification {
    label: Label,
    status: String,
}

impl Classification {
    pub fn new(label: Label, status: impl Into<String>) -> Result<Self, ProtocolViolation> {
        let status = status.into();
        if status.trim().is_empty() {
            return Err(ProtocolViolation::EmptyStatus);
        }
        Ok(Self { label, status })
    }

    pub fn label(&self) -> Label {
        self.label
    }

    /// Backend-supplied category name, kept verbatim.
    pub fn status(&self) -> &str {
        &self.status
    }
}
