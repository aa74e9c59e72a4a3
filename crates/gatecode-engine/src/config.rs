use serde::{Deserialize, Serialize};

use gatecode_core::CODE_LENGTH;

/// Configuration for the validation pipeline.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AuthConfig {
    /// Endpoint receiving `POST {"code": "..."}` submissions.
    pub endpoint: String,
    /// Required access-code length.
    pub code_length: usize,
    /// Request timeout in seconds.
    pub timeout_secs: u64,
    #[serde(default)]
    pub status_map: StatusMapConfig,
}

impl Default for AuthConfig {
    fn default() -> Self {
        Self {
            endpoint: "https://api.gatecode.dev/client/validate-code".into(),
            code_length: CODE_LENGTH,
            timeout_secs: 10,
            status_map: StatusMapConfig::default(),
        }
    }
}

/// HTTP status codes the remote service answers with. Any 200-class status
/// not listed here still decodes as valid; anything else unmapped decodes
/// as unrecognized.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StatusMapConfig {
    pub valid: u16,
    pub invalid: u16,
    pub full_program: u16,
}

impl Default for StatusMapConfig {
    fn default() -> Self {
        Self {
            valid: 200,
            invalid: 401,
            full_program: 423,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_reference_constants() {
        let cfg = AuthConfig::default();
        assert_eq!(cfg.code_length, 6);
        assert_eq!(cfg.status_map.valid, 200);
        assert_eq!(cfg.status_map.invalid, 401);
        assert_eq!(cfg.status_map.full_program, 423);
    }

    #[test]
    fn status_map_defaults_apply_when_omitted() {
        let cfg: AuthConfig = serde_json::from_value(serde_json::json!({
            "endpoint": "http://localhost:9999/validate",
            "code_length": 6,
            "timeout_secs": 5,
        }))
        .unwrap();
        assert_eq!(cfg.status_map.invalid, 401);
    }
}
