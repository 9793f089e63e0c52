//! Prompt input and the wire types of the inference endpoint

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// One role-tagged chat message
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChatMessage
{   pub role: String
  , pub content: String
}

impl ChatMessage
{   pub fn new(role: impl Into<String>, content: impl Into<String>)
      -> Self
    {   ChatMessage
        {   role: role.into()
          , content: content.into()
        }
    }

    pub fn user(content: impl Into<String>) -> Self
    {   ChatMessage::new("user", content)
    }
}

/// What gets sent to a model: flat text lines or chat messages
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Prompt
{   /// Joined with `\n` and sent as `prompt`
    Lines(Vec<String>)
  , /// Sent as-is under `messages`
    Messages(Vec<ChatMessage>)
}

impl Prompt
{   /// Number of lines or messages
    pub fn segment_count(&self) -> usize
    {   match self
        {   Prompt::Lines(lines) => lines.len()
          , Prompt::Messages(messages) => messages.len()
        }
    }

    /// Total content size in bytes, for logging
    pub fn byte_size(&self) -> usize
    {   match self
        {   Prompt::Lines(lines) => {
              lines.iter().map(String::len).sum::<usize>()
                + lines.len().saturating_sub(1)
            }
          , Prompt::Messages(messages) => {
              messages.iter().map(|m| m.content.len()).sum()
            }
        }
    }

    pub fn kind(&self) -> &'static str
    {   match self
        {   Prompt::Lines(_) => "lines"
          , Prompt::Messages(_) => "messages"
        }
    }

    pub fn is_empty(&self) -> bool
    {   self.segment_count() == 0
    }
}

impl From<Vec<String>> for Prompt
{   fn from(lines: Vec<String>) -> Self
    {   Prompt::Lines(lines)
    }
}

impl From<Vec<&str>> for Prompt
{   fn from(lines: Vec<&str>) -> Self
    {   Prompt::Lines(lines.into_iter().map(String::from).collect())
    }
}

impl From<&[&str]> for Prompt
{   fn from(lines: &[&str]) -> Self
    {   Prompt::Lines(lines.iter().map(|s| s.to_string()).collect())
    }
}

impl From<Vec<ChatMessage>> for Prompt
{   fn from(messages: Vec<ChatMessage>) -> Self
    {   Prompt::Messages(messages)
    }
}

/// Request body. Exactly one of `prompt` / `messages` is present.
#[derive(Debug, Clone, Serialize)]
pub struct InvokeRequest<'a>
{   pub model_name: &'a str
  , #[serde(skip_serializing_if = "Option::is_none")]
    pub prompt: Option<String>
  , #[serde(skip_serializing_if = "Option::is_none")]
    pub messages: Option<&'a [ChatMessage]>
}

impl<'a> InvokeRequest<'a>
{   pub fn new(model_name: &'a str, prompt: &'a Prompt) -> Self
    {   match prompt
        {   Prompt::Lines(lines) => InvokeRequest
            {   model_name
              , prompt: Some(lines.join("\n"))
              , messages: None
            }
          , Prompt::Messages(messages) => InvokeRequest
            {   model_name
              , prompt: None
              , messages: Some(messages.as_slice())
            }
        }
    }
}

/// Pull the answer out of a parsed success body.
///
/// A string `response` is returned verbatim; any other JSON value under
/// `response` comes back as its compact JSON text. A body that is not an
/// object, or lacks `response`, is a format error.
pub fn extract_response(data: Value)
  -> Result<String, crate::error::Error>
{   match data
    {   Value::Object(mut map) if map.contains_key("response") => {
          match map.remove("response")
          {   Some(Value::String(text)) => Ok(text)
            , Some(other) => Ok(other.to_string())
            , None => Ok(String::new())
          }
        }
      , other => Err(crate::error::Error::Format(other.to_string()))
    }
}

/// Render an error body: compact JSON when it parses, raw text otherwise
pub fn render_error_body(raw: &str) -> String
{   serde_json::from_str::<Value>(raw)
      .map(|v| v.to_string())
      .unwrap_or_else(|_| raw.to_string())
}
