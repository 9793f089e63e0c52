//! Translate a text with one model, then have a second model judge it

use log::{debug, info};
use serde::{Deserialize, Serialize};

use crate::client::LlmClient;
use crate::config::TranslatorConfig;

/// Shown in place of a translation when the input is blank
pub const EMPTY_INPUT_MESSAGE: &str = "Please enter text to translate.";

/// The three strings handed to whatever displays the result
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct TranslationReport
{   pub original: String
  , pub translation: String
  , pub evaluation: String
}

pub struct Translator
{   client: LlmClient
  , config: TranslatorConfig
}

impl Translator
{   pub fn new(client: LlmClient, config: TranslatorConfig) -> Self
    {   debug!(
          "Creating Translator: translator={}, judge={}",
          config.translator_model, config.judge_model
        );
        Translator
        {   client
          , config
        }
    }

    pub fn config(&self) -> &TranslatorConfig
    {   &self.config
    }

    /// Translate `text` into `target_lang`
    pub async fn translate(&self, text: &str, target_lang: &str)
      -> String
    {   let prompt = translate_prompt(text, target_lang);
        self.client
          .invoke(&self.config.translator_model, prompt)
          .await
    }

    /// Rate `translation` of `original` on a 1..10 scale
    pub async fn evaluate(&self, original: &str, translation: &str)
      -> String
    {   let prompt = judge_prompt(original, translation);
        self.client
          .invoke(&self.config.judge_model, prompt)
          .await
    }

    /// Full round: validate, translate, then judge.
    ///
    /// Blank input short-circuits without any request. Error strings
    /// from the translation step are judged like any other text.
    pub async fn run(&self, text: &str, target_lang: Option<&str>)
      -> TranslationReport
    {   let original = text.trim();
        if original.is_empty()
        {   info!("Empty input, skipping translation");
            return TranslationReport
            {   translation: EMPTY_INPUT_MESSAGE.to_string()
              , ..TranslationReport::default()
            };
        }

        let lang = target_lang
          .map(str::trim)
          .filter(|l| !l.is_empty())
          .unwrap_or(&self.config.default_target_lang);

        let translation = self.translate(original, lang).await;
        let evaluation = self.evaluate(original, &translation).await;

        TranslationReport
        {   original: original.to_string()
          , translation
          , evaluation
        }
    }
}

pub fn translate_prompt(text: &str, target_lang: &str) -> Vec<String>
{   vec![
      format!("Translate the following text into {}.", target_lang)
    , "Requirements: translate accurately, keeping meaning, style and \
       punctuation; do not add explanations.".to_string()
    , "Text to translate:".to_string()
    , text.to_string()
    ]
}

pub fn judge_prompt(original: &str, translation: &str) -> Vec<String>
{   vec![
      "Rate the quality of the translation from 1 to 10 and justify \
       the score.".to_string()
    , "Criteria: preservation of meaning, appropriate style, grammar \
       and naturalness in the target language.".to_string()
    , "Original:".to_string()
    , original.to_string()
    , "Translation:".to_string()
    , translation.to_string()
    ]
}
