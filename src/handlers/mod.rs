pub mod extractors;
pub mod health;
pub mod movies;

// Re-export commonly used types
pub use extractors::{ModelState, ValidatedUuid};
