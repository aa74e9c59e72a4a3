//! Status-code decoding.
//!
//! The remote service answers a validation request with an HTTP status code
//! and no body of interest. Decoding that status into a
//! [`ValidationOutcome`] is the only domain logic at the response boundary,
//! and it is kept separate from the transport so it can be tested entirely
//! in memory.

use std::collections::HashMap;

use gatecode_core::ValidationOutcome;

use crate::config::StatusMapConfig;

/// Maps HTTP status codes to validation outcomes.
///
/// Explicit entries win; an unmapped 200-class status still decodes as
/// [`ValidationOutcome::Valid`] per the wire contract; everything else
/// unmapped decodes as [`ValidationOutcome::Unrecognized`], never an error.
#[derive(Debug, Clone)]
pub struct StatusDecoder {
    map: HashMap<u16, ValidationOutcome>,
}

impl Default for StatusDecoder {
    fn default() -> Self {
        Self::from_config(&StatusMapConfig::default())
    }
}

impl StatusDecoder {
    pub fn new(map: HashMap<u16, ValidationOutcome>) -> Self {
        Self { map }
    }

    pub fn from_config(config: &StatusMapConfig) -> Self {
        let mut map = HashMap::new();
        map.insert(config.valid, ValidationOutcome::Valid);
        map.insert(config.invalid, ValidationOutcome::Invalid);
        map.insert(config.full_program, ValidationOutcome::FullProgram);
        Self { map }
    }

    pub fn decode(&self, status: u16) -> ValidationOutcome {
        if let Some(outcome) = self.map.get(&status) {
            return *outcome;
        }
        if (200..300).contains(&status) {
            return ValidationOutcome::Valid;
        }
        ValidationOutcome::Unrecognized
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn decodes_mapped_statuses() {
        let decoder = StatusDecoder::default();
        assert_eq!(decoder.decode(200), ValidationOutcome::Valid);
        assert_eq!(decoder.decode(401), ValidationOutcome::Invalid);
        assert_eq!(decoder.decode(423), ValidationOutcome::FullProgram);
    }

    #[test]
    fn unmapped_success_class_decodes_valid() {
        let decoder = StatusDecoder::default();
        assert_eq!(decoder.decode(204), ValidationOutcome::Valid);
        assert_eq!(decoder.decode(299), ValidationOutcome::Valid);
    }

    #[test]
    fn unmapped_statuses_decode_unrecognized() {
        let decoder = StatusDecoder::default();
        assert_eq!(decoder.decode(404), ValidationOutcome::Unrecognized);
        assert_eq!(decoder.decode(500), ValidationOutcome::Unrecognized);
        assert_eq!(decoder.decode(302), ValidationOutcome::Unrecognized);
    }

    #[test]
    fn explicit_entries_win_over_class_rules() {
        let mut map = HashMap::new();
        map.insert(200, ValidationOutcome::Invalid);
        let decoder = StatusDecoder::new(map);
        assert_eq!(decoder.decode(200), ValidationOutcome::Invalid);
        // Other 2xx still fall through to the class rule.
        assert_eq!(decoder.decode(201), ValidationOutcome::Valid);
    }

    #[test]
    fn custom_config_mapping() {
        let decoder = StatusDecoder::from_config(&StatusMapConfig {
            valid: 201,
            invalid: 403,
            full_program: 409,
        });
        assert_eq!(decoder.decode(403), ValidationOutcome::Invalid);
        assert_eq!(decoder.decode(409), ValidationOutcome::FullProgram);
    }
}
