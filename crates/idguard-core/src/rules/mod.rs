pub mod validation;

pub use validation::{classify, IdentifierShape, NUMERIC_ID_PATTERN, USERNAME_PATTERN};
