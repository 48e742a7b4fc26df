//! # Error Types
//!
//! Only caller contract violations are represented as errors: the normalizer
//! and keyboard mapper accept note strings, and a string that does not parse
//! as a letter followed by accidental marks is reported back to the caller.
//! Inconsistencies in the engine's own static tables are programming defects
//! and panic instead (see `Accidental::from_offset`).

use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum EngineError {
    /// The note string does not parse as a letter A-G followed by a run of
    /// accidental marks.
    ///
    /// # Example
    /// ```
    /// # use seventh::EngineError;
    /// let err = EngineError::MalformedNote { input: "H♭".to_string() };
    /// assert_eq!(err.to_string(), "Malformed note 'H♭': expected a letter A-G followed by accidental marks");
    /// ```
    #[error("Malformed note '{input}': expected a letter A-G followed by accidental marks")]
    MalformedNote { input: String },
}
