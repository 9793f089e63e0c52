pub mod error;
pub mod config;
pub mod request;
pub mod client;
pub mod translator;

/*

translate-critic: send a text to one LLM for translation, send the
result to a second LLM for a quality judgment, hand back three strings
(original, translation, evaluation) for display.

translate-critic/
├── Cargo.toml
├── src/
│   ├── lib.rs          # Re-exports
│   ├── error.rs        # Failure kinds of one LLM round trip
│   ├── config.rs       # Endpoint, credential, timeout, models
│   ├── request.rs      # Prompt input and wire types
│   ├── client.rs       # The single POST to the endpoint
│   ├── translator.rs   # Translate-then-judge workflow
│   └── bin/
│       └── translate_critic.rs
└── tests/              # wiremock-backed integration tests

*/

pub use client::LlmClient;
pub use config::{LlmConfig, TranslatorConfig};
pub use error::Error;
pub use request::{ChatMessage, Prompt};
pub use translator::{TranslationReport, Translator};

/// Outcome of one call before it is rendered for display
pub type InvokeResult = Result<String, crate::error::Error>;
