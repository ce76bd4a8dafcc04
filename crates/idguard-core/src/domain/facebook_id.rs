use crate::domain::candidate::normalize_candidate;
use crate::error::CoreError;
use crate::rules::validation::{classify, IdentifierShape};
use serde::{Deserialize, Serialize};
use std::fmt;

#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct FacebookId {
    value: String,
    shape: IdentifierShape,
}

impl FacebookId {
    pub fn parse(raw: &str) -> Result<Self, CoreError> {
        let normalized = normalize_candidate(raw);
        let shape = classify(normalized).ok_or(CoreError::ValidationFailure)?;
        Ok(Self {
            value: normalized.to_string(),
            shape,
        })
    }

    pub fn as_str(&self) -> &str {
        &self.value
    }

    pub fn shape(&self) -> IdentifierShape {
        self.shape
    }
}

impl fmt::Display for FacebookId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.value)
    }
}
