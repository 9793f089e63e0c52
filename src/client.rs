use std::time::Duration;
use log::{debug, trace, error, info, warn};
use reqwest::header::{HeaderMap, HeaderValue, AUTHORIZATION, CONTENT_TYPE};

use crate::config::LlmConfig;
use crate::error::Error;
use crate::request::{InvokeRequest, Prompt};

/// Calls the configured inference endpoint.
///
/// Holds read-only configuration and a pooled HTTP client, so one
/// instance can serve any number of concurrent calls.
#[derive(Debug, Clone)]
pub struct LlmClient
{   config: LlmConfig
  , http_client: reqwest::Client
}

impl LlmClient
{   pub fn new(config: LlmConfig) -> Self
    {   debug!("Creating LlmClient for {}", config.endpoint);
        LlmClient
        {   config
          , http_client: reqwest::Client::new()
        }
    }

    /// Build a client from `LlmConfig::from_env`
    pub fn from_env() -> Self
    {   LlmClient::new(LlmConfig::from_env())
    }

    pub fn config(&self) -> &LlmConfig
    {   &self.config
    }

    /// Ask `model_name` and return its answer or a tagged error string.
    /// Never fails; see `try_invoke` for the structured result.
    pub async fn invoke(
      &self
    , model_name: &str
    , prompt: impl Into<Prompt>
    ) -> String
    {   match self.try_invoke(model_name, prompt).await
        {   Ok(text) => text
          , Err(e) => e.to_string()
        }
    }

    /// One POST to the endpoint, no retries
    pub async fn try_invoke(
      &self
    , model_name: &str
    , prompt: impl Into<Prompt>
    ) -> crate::InvokeResult
    {   let prompt = prompt.into();
        info!(
          "invoke: model={}, {} {} ({} bytes)",
          model_name,
          prompt.segment_count(),
          prompt.kind(),
          prompt.byte_size()
        );
        if !self.config.has_api_key()
        {   warn!(
              "{} is not set; calling without Authorization header",
              crate::config::ENV_API_KEY
            );
        }

        // Prompt text may quote anything, the key included; it stays out
        // of the logs along with the response payloads.
        let request = InvokeRequest::new(model_name, &prompt);

        let response = self.http_client
          .post(&self.config.endpoint)
          .headers(self.headers()?)
          .timeout(Duration::from_secs(self.config.timeout_secs))
          .json(&request)
          .send()
          .await
          .map_err(|e| {
            error!("Network error calling LLM API: {}", e);
            Error::Network(e.to_string())
          })?;

        let status = response.status();
        trace!("LLM response status: {}", status);

        if status.as_u16() >= 400
        {   let error_text = response.text().await
              .unwrap_or_else(|e| {
                warn!("Could not read error body: {}", e);
                String::new()
              });
            let rendered = crate::request::render_error_body(&error_text);
            error!(
              "LLM API returned error status {} ({} byte body)",
              status.as_u16(), rendered.len()
            );
            return Err(Error::Api
            {   status: status.as_u16()
              , body: rendered
            });
        }

        let body = response.text().await.map_err(|e| {
          error!("Failed to read LLM response body: {}", e);
          Error::from(e)
        })?;

        let data: serde_json::Value = serde_json::from_str(&body)
          .map_err(|e| {
            error!("Invalid JSON received from LLM API: {}", e);
            Error::Parse("invalid JSON in LLM response".to_string())
          })?;

        crate::request::extract_response(data).map_err(|e| {
          if let Error::Format(payload) = &e
          {   error!(
                "Unexpected response format from LLM API ({} bytes)",
                payload.len()
              );
          }
          e
        })
    }

    fn headers(&self) -> Result<HeaderMap, Error>
    {   let mut headers = HeaderMap::new();
        headers.insert(
          CONTENT_TYPE,
          HeaderValue::from_static("application/json")
        );
        if let Some(key) = &self.config.api_key
        {   let mut value
              = HeaderValue::from_str(&format!("Bearer {}", key))
                .map_err(|_| {
                  error!("API key is not a valid header value");
                  Error::Unexpected(
                    "API key contains characters not allowed in a header"
                      .to_string()
                  )
                })?;
            value.set_sensitive(true);
            headers.insert(AUTHORIZATION, value);
        }
        Ok(headers)
    }
}

#[cfg(test)]
mod tests
{   use super::*;

    #[test]
    fn headers_without_key_have_no_authorization()
    {   let client = LlmClient::new(LlmConfig::default());
        let headers = client.headers().unwrap();
        assert_eq!(
          headers.get(CONTENT_TYPE).unwrap(),
          "application/json"
        );
        assert!(headers.get(AUTHORIZATION).is_none());
    }

    #[test]
    fn authorization_is_bearer_and_sensitive()
    {   let client = LlmClient::new(
          LlmConfig::default().with_api_key("DUMMY_KEY")
        );
        let headers = client.headers().unwrap();
        let auth = headers.get(AUTHORIZATION).unwrap();
        assert_eq!(auth, "Bearer DUMMY_KEY");
        assert!(auth.is_sensitive());
        assert!(!format!("{:?}", headers).contains("DUMMY_KEY"));
    }

    #[test]
    fn key_with_newline_is_rejected_without_echoing_it()
    {   let client = LlmClient::new(
          LlmConfig::default().with_api_key("bad\nkey")
        );
        let err = client.headers().unwrap_err();
        assert!(matches!(err, Error::Unexpected(_)));
        assert!(!err.to_string().contains("bad\nkey"));
    }

    #[test]
    fn client_debug_hides_key()
    {   let client = LlmClient::new(
          LlmConfig::default().with_api_key("SECRET_KEY_12345")
        );
        assert!(!format!("{:?}", client).contains("SECRET_KEY_12345"));
    }

    #[tokio::test]
    async fn unreachable_endpoint_is_network_error()
    {   // Port 9 on loopback: nothing listens there in test sandboxes.
        let client = LlmClient::new(
          LlmConfig::default()
            .with_endpoint("http://127.0.0.1:9/v1/process-ai-request")
            .with_timeout_secs(2)
        );
        let shown = client.invoke("m", vec!["hello"]).await;
        assert!(shown.starts_with("[Network error]"), "{}", shown);
    }
}
