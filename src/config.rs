//! Configuration for the LLM endpoint and the translation workflow

use std::fmt;
use serde::{Deserialize, Serialize};
use log::{debug, warn};

pub const DEFAULT_ENDPOINT: &str
  = "https://api.mentorpiece.org/v1/process-ai-request";
pub const DEFAULT_TIMEOUT_SECS: u64 = 15;

pub const ENV_ENDPOINT: &str = "MENTORPIECE_ENDPOINT";
pub const ENV_API_KEY: &str = "MENTORPIECE_API_KEY";
pub const ENV_TIMEOUT_SECS: &str = "MENTORPIECE_TIMEOUT_SECS";

pub const DEFAULT_TRANSLATOR_MODEL: &str
  = "Qwen/Qwen3-VL-30B-A3B-Instruct";
pub const DEFAULT_JUDGE_MODEL: &str
  = "claude-sonnet-4-5-20250929";
pub const DEFAULT_TARGET_LANG: &str = "English";

/// Endpoint configuration, resolved once and then read-only
#[derive(Clone, Serialize, Deserialize)]
pub struct LlmConfig
{   /// Inference endpoint URL
    pub endpoint: String
  , /// Bearer credential; never serialized
    #[serde(skip_serializing, default)]
    pub api_key: Option<String>
  , /// Request timeout in seconds
    pub timeout_secs: u64
}

impl LlmConfig
{   /// Read endpoint, credential and timeout from the process environment
    pub fn from_env() -> Self
    {   let mut config = LlmConfig::default();

        if let Ok(endpoint) = std::env::var(ENV_ENDPOINT)
        {   if !endpoint.trim().is_empty()
            {   config.endpoint = endpoint;
            }
        }

        config.api_key = std::env::var(ENV_API_KEY)
          .ok()
          .filter(|k| !k.is_empty());

        if let Ok(raw) = std::env::var(ENV_TIMEOUT_SECS)
        {   match raw.trim().parse::<u64>()
            {   Ok(secs) if secs > 0 => config.timeout_secs = secs
              , _ => {
                  warn!(
                    "Ignoring invalid {}={:?}, using {}s",
                    ENV_TIMEOUT_SECS, raw, config.timeout_secs
                  );
                }
            }
        }

        debug!("Loaded config from env: {:?}", config);
        config
    }

    pub fn with_endpoint(mut self, endpoint: impl Into<String>) -> Self
    {   self.endpoint = endpoint.into();
        self
    }

    pub fn with_api_key(mut self, key: impl Into<String>) -> Self
    {   self.api_key = Some(key.into());
        self
    }

    /// Zero would time every call out at once; it is ignored
    pub fn with_timeout_secs(mut self, secs: u64) -> Self
    {   if secs > 0
        {   self.timeout_secs = secs;
        } else
        {   warn!(
              "Ignoring zero timeout, keeping {}s",
              self.timeout_secs
            );
        }
        self
    }

    pub fn has_api_key(&self) -> bool
    {   self.api_key.is_some()
    }
}

impl Default for LlmConfig
{   fn default() -> Self
    {   LlmConfig
        {   endpoint: DEFAULT_ENDPOINT.to_string()
          , api_key: None
          , timeout_secs: DEFAULT_TIMEOUT_SECS
        }
    }
}

// Hand-written so the credential never shows up in `{:?}` output.
impl fmt::Debug for LlmConfig
{   fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result
    {   f.debug_struct("LlmConfig")
          .field("endpoint", &self.endpoint)
          .field(
            "api_key",
            &self.api_key.as_ref().map(|_| "<redacted>")
          )
          .field("timeout_secs", &self.timeout_secs)
          .finish()
    }
}

/// Models and defaults for the translate-then-judge workflow
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TranslatorConfig
{   /// Model that produces the translation
    pub translator_model: String
  , /// Model that rates the translation
    pub judge_model: String
  , /// Used when the caller gives no target language
    pub default_target_lang: String
}

impl Default for TranslatorConfig
{   fn default() -> Self
    {   TranslatorConfig
        {   translator_model: DEFAULT_TRANSLATOR_MODEL.to_string()
          , judge_model: DEFAULT_JUDGE_MODEL.to_string()
          , default_target_lang: DEFAULT_TARGET_LANG.to_string()
        }
    }
}
