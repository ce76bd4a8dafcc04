pub mod domain;
pub mod dto;
pub mod error;
pub mod guard;
pub mod rules;

pub use domain::*;
pub use dto::*;
pub use error::CoreError;
pub use guard::{
    on_submit_attempt, Alert, ButtonElement, Decision, InputElement, RecordedAlerts,
    SubmissionGuard, SubmitControl, SubmitEvent, SubmitEventState, TextField, FIELD_ID,
    IN_PROGRESS_LABEL, REJECT_MESSAGE,
};
pub use rules::*;
