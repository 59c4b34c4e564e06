//! Pre-flight sequence validation.

use crate::error::ValidationError;

/// Minimum accepted sequence length. Anything shorter is rejected
/// before the backend is contacted.
pub const MIN_SEQUENCE_LEN: usize = 10;

/// An amino-acid sequence that passed validation.
///
/// The inner string is the submitted text unchanged — no case
/// normalization and no residue-set filtering. The relay only accepts
/// this type, so an unvalidated string can never reach the backend.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidSequence(String);

impl ValidSequence {
    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl std::fmt::Display for ValidSequence {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

/// Check a candidate sequence for minimal well-formedness.
///
/// Only length is enforced; residue-letter checking is left to the
/// backend, which rejects sequences it cannot fold.
pub fn validate(sequence: &str) -> Result<ValidSequence, ValidationError> {
    let len = sequence.len();
    if len < MIN_SEQUENCE_LEN {
        return Err(ValidationError::TooShort {
            len,
            min: MIN_SEQUENCE_LEN,
        });
    }
    Ok(ValidSequence(sequence.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_sequence_rejected() {
        assert_eq!(
            validate(""),
            Err(ValidationError::TooShort { len: 0, min: 10 })
        );
    }

    #[test]
    fn test_short_sequence_rejected() {
        assert_eq!(
            validate("MKTAYIAKQ"),
            Err(ValidationError::TooShort { len: 9, min: 10 })
        );
    }

    #[test]
    fn test_minimum_length_accepted() {
        let seq = validate("MKTAYIAKQR").unwrap();
        assert_eq!(seq.as_str(), "MKTAYIAKQR");
        assert_eq!(seq.len(), 10);
    }

    #[test]
    fn test_sequence_preserved_verbatim() {
        // No case normalization or residue filtering at this stage.
        let seq = validate("mktayiakqrZZ").unwrap();
        assert_eq!(seq.as_str(), "mktayiakqrZZ");
    }
}
