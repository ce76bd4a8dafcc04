pub mod candidate;
pub mod facebook_id;

pub use candidate::normalize_candidate;
pub use facebook_id::FacebookId;
