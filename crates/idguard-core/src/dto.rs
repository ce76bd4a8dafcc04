use crate::domain::{normalize_candidate, FacebookId};
use crate::guard::{Decision, SubmitControl};
use crate::rules::IdentifierShape;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CandidateCheckDto {
    pub raw: String,
    pub normalized: String,
    pub decision: Decision,
    pub shape: Option<IdentifierShape>,
}

impl CandidateCheckDto {
    /// `parsed` is the id `raw` parsed to, if it did.
    pub fn new(raw: &str, decision: Decision, parsed: Option<&FacebookId>) -> Self {
        let (normalized, shape) = match parsed {
            Some(id) => (id.as_str().to_string(), Some(id.shape())),
            None => (normalize_candidate(raw).to_string(), None),
        };
        Self {
            raw: raw.to_string(),
            normalized,
            decision,
            shape,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ButtonStateDto {
    pub disabled: bool,
    pub label: String,
}

impl ButtonStateDto {
    pub fn from_control<B: SubmitControl + ?Sized>(button: &B) -> Self {
        Self {
            disabled: button.is_disabled(),
            label: button.label(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SubmissionReportDto {
    pub field_id: String,
    #[serde(flatten)]
    pub check: CandidateCheckDto,
    pub default_prevented: bool,
    pub button: ButtonStateDto,
    pub alert: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::CandidateCheckDto;
    use crate::domain::FacebookId;
    use crate::guard::Decision;
    use crate::rules::IdentifierShape;

    fn check(raw: &str) -> CandidateCheckDto {
        let parsed = FacebookId::parse(raw);
        CandidateCheckDto::new(raw, Decision::of(&parsed), parsed.as_ref().ok())
    }

    #[test]
    fn candidate_check_keeps_raw_and_normalized() {
        let check = check("  12345  ");
        assert_eq!(check.raw, "  12345  ");
        assert_eq!(check.normalized, "12345");
        assert_eq!(check.decision, Decision::Accept);
        assert_eq!(check.shape, Some(IdentifierShape::NumericId));
    }

    #[test]
    fn candidate_check_normalizes_rejected_value() {
        let check = check(" john doe ");
        assert_eq!(check.normalized, "john doe");
        assert_eq!(check.decision, Decision::Reject);
        assert_eq!(check.shape, None);
    }

    #[test]
    fn candidate_check_serializes_shape_names() {
        let value = serde_json::to_value(check("user@name")).unwrap();
        assert_eq!(value["decision"], "reject");
        assert!(value["shape"].is_null());

        let value = serde_json::to_value(check("john.doe123")).unwrap();
        assert_eq!(value["shape"], "username");
    }
}
