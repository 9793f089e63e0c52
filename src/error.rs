use std::fmt;

/// Failure kinds of a single LLM round trip.
/// Rendered to a display string only at the outer boundary
/// (see `LlmClient::invoke`).
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Error
{   /// Transport failure: connect, DNS, timeout
    Network(String)
  , /// Endpoint answered with HTTP status >= 400
    Api
    {   status: u16
      , body: String
    }
  , /// Success status but the body is not valid JSON
    Parse(String)
  , /// Valid JSON without a `response` field
    Format(String)
  , /// Anything else that broke while handling the call
    Unexpected(String)
}

impl Error
{   /// Short stable tag used as the display prefix
    pub fn tag(&self) -> &'static str
    {   match self
        {   Error::Network(_) => "Network error"
          , Error::Api { .. } => "API error"
          , Error::Parse(_) => "Parse error"
          , Error::Format(_) => "Format error"
          , Error::Unexpected(_) => "Unexpected error"
        }
    }
}

impl fmt::Display for Error
{   fn fmt(&self, f: &mut fmt::Formatter<'_>)
      -> fmt::Result
    {   match self
        {   Error::Network(msg) => {
              write!(f, "[{}] {}", self.tag(), msg)
            }
          , Error::Api { status, body } => {
              write!(f, "[{} {}] {}", self.tag(), status, body)
            }
          , Error::Parse(msg) => {
              write!(f, "[{}] {}", self.tag(), msg)
            }
          , Error::Format(payload) => {
              write!(f,
                "[{}] Unexpected response format: {}",
                self.tag(),
                payload
              )
            }
          , Error::Unexpected(msg) => {
              write!(f, "[{}] {}", self.tag(), msg)
            }
        }
    }
}

impl std::error::Error for Error {}

impl From<reqwest::Error> for Error
{   fn from(e: reqwest::Error) -> Self
    {   // reqwest messages hold the URL and cause, never headers.
        if e.is_timeout() || e.is_connect() || e.is_request()
        {   Error::Network(e.to_string())
        } else
        {   Error::Unexpected(e.to_string())
        }
    }
}

#[cfg(test)]
mod tests
{   use super::*;

    #[test]
    fn api_error_carries_status_and_body()
    {   let e = Error::Api
        {   status: 500
          , body: r#"{"error":"Server error"}"#.to_string()
        };
        assert_eq!(
          e.to_string(),
          r#"[API error 500] {"error":"Server error"}"#
        );
    }

    #[test]
    fn every_kind_renders_with_its_tag()
    {   let cases = vec![
          Error::Network("refused".into())
        , Error::Parse("bad".into())
        , Error::Format("[]".into())
        , Error::Unexpected("boom".into())
        ];
        for e in cases
        {   let shown = e.to_string();
            assert!(
              shown.starts_with(&format!("[{}]", e.tag())),
              "{} lacks tag {}", shown, e.tag()
            );
        }
    }

    #[test]
    fn format_error_embeds_payload()
    {   let e = Error::Format(r#"{"foo":"bar"}"#.into());
        assert!(e.to_string().contains(r#"{"foo":"bar"}"#));
    }
}
