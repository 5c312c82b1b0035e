use serde::{Deserialize, Serialize};

use crate::{
    domain::{Classification, Label},
    error::ProtocolViolation,
};

/// Body of the single outbound call. `text` is sent exactly as typed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ClassifyRequest {
    pub text: String,
}

impl ClassifyRequest {
    pub fn new(text: impl Into<String>) -> Self {
        Self { text: text.into() }
    }
}

/// Success body as it appears on the wire, before schema checks.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ClassifyResponse {
    pub label: i64,
    #[serde(default)]
    pub status: String,
}

impl TryFrom<ClassifyResponse> for Classification {
    type Error = ProtocolViolation;

    fn try_from(value: ClassifyResponse) -> Result<Self, Self::Error> {
        let label = Label::try_from(value.label)?;
        Classification::new(label, value.status)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn request_serializes_untrimmed_text_field() {
        let body = serde_json::to_value(ClassifyRequest::new("  saya lelah \n")).expect("json");
        assert_eq!(body, serde_json::json!({ "text": "  saya lelah \n" }));
    }

    #[test]
    fn response_ignores_unknown_fields() {
        let raw = r#"{"label":1,"status":"Depresi","confidence":0.93}"#;
        let response: ClassifyResponse = serde_json::from_str(raw).expect("parse");
        let classification = Classification::try_from(response).expect("valid");
        assert_eq!(classification.label(), Label::PositiveIndication);
        assert_eq!(classification.status(), "Depresi");
    }

    #[test]
    fn missing_status_is_a_protocol_violation() {
        let response: ClassifyResponse = serde_json::from_str(r#"{"label":0}"#).expect("parse");
        assert_eq!(
            Classification::try_from(response),
            Err(ProtocolViolation::EmptyStatus)
        );
    }

    #[test]
    fn missing_label_fails_to_parse() {
        assert!(serde_json::from_str::<ClassifyResponse>(r#"{"status":"Normal"}"#).is_err());
    }
}
