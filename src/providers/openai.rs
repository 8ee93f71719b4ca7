use serde::{Deserialize, Serialize};
use async_trait::async_trait;
use log::{debug, trace, error};
use std::time::Duration;

// ===== Message Types =====

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChatMessage
{   pub role: String
  , #[serde(default)]
    pub content: Option<String>
}

impl ChatMessage
{   fn new(role: &str, content: String) -> Self
    {   ChatMessage
        {   role: role.to_string()
          , content: Some(content)
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChatRequest
{   pub model: String
  , pub messages: Vec<ChatMessage>
  , pub max_tokens: usize
  , pub temperature: f32
}

#[derive(Debug, Clone, Deserialize)]
pub struct ChatResponse
{   #[serde(default)]
    pub choices: Vec<Choice>
}

#[derive(Debug, Clone, Deserialize)]
pub struct Choice
{   pub message: Option<ChatMessage>
  , pub finish_reason: Option<String>
}

impl ChatRequest
{   /// Build the wire request: system instruction first, then the prompt
    pub fn from_completion(
      model: &str
    , request: crate::request::CompletionRequest
    ) -> Self
    {   ChatRequest
        {   model: model.to_string()
          , messages: vec![
              ChatMessage::new("system", request.system_instruction)
            , ChatMessage::new("user", request.user_prompt)
            ]
          , max_tokens: request.max_tokens
          , temperature: request.temperature
        }
    }
}

impl ChatResponse
{   /// Text of the first choice, if the oracle produced any
    pub fn first_text(self) -> Option<String>
    {   self.choices
          .into_iter()
          .next()
          .and_then(|c| c.message)
          .and_then(|m| m.content)
    }
}

// ===== Client =====

/// OpenAI-compatible chat completions client
pub struct OpenAiClient
{   api_key: Option<String>
  , api_base: String
  , model: String
  , http_client: reqwest::Client
}

impl OpenAiClient
{   /// Create a client; a missing key only fails once a request is made
    pub fn new(
      api_key: Option<String>
    , config: &crate::config::ProviderConfig
    ) -> Result<Self, crate::error::Error>
    {   debug!("Creating OpenAiClient for model: {}", config.model);
        let mut builder = reqwest::Client::builder();
        if let Some(secs) = config.timeout_secs
        {   builder = builder.timeout(Duration::from_secs(secs));
        }
        let http_client = builder.build().map_err(|e| {
          error!("Failed to build HTTP client: {}", e);
          crate::error::Error::InvalidConfiguration(e.to_string())
        })?;

        Ok(OpenAiClient
        {   api_key
          , api_base: config.api_base().to_string()
          , model: config.model.clone()
          , http_client
        })
    }

    fn get_api_key(&self)
      -> Result<&str, crate::error::Error>
    {   self.api_key.as_deref().ok_or_else(|| {
          error!("No API key for model: {}", self.model);
          crate::error::Error::MissingApiKey(
            format!("OpenAI:{}", self.model)
          )
        })
    }
}

#[async_trait]
impl super::CompletionOracle for OpenAiClient
{   async fn complete(
      &self
    , request: crate::request::CompletionRequest
    ) -> Result<Option<String>, crate::error::Error>
    {   debug!("Sending completion to: {}", self.model);

        let api_key = self.get_api_key()?;
        let body = ChatRequest::from_completion(&self.model, request);

        trace!("OpenAI request: {:?}", body);

        let response = self.http_client
          .post(format!("{}/chat/completions", self.api_base))
          .header("Authorization", format!("Bearer {}", api_key))
          .header("Content-Type", "application/json")
          .json(&body)
          .send()
          .await
          .map_err(|e| {
            error!("HTTP error: {}", e);
            if e.is_timeout()
            {   crate::error::Error::Timeout
            } else
            {   crate::error::Error::HttpError(e.to_string())
            }
          })?;

        let status = response.status();
        trace!("OpenAI response status: {}", status);

        if !status.is_success()
        {   let error_text = response.text().await
              .unwrap_or_else(|_|
                "Unknown error".to_string()
              );
            error!("OpenAI API error: {}", error_text);
            return Err(crate::error::Error::ApiError(
              format!("OpenAI error ({}): {}", status, error_text)
            ));
        }

        let chat_response: ChatResponse
          = response.json().await.map_err(|e| {
            error!("Parse error: {}", e);
            crate::error::Error::ParseError(e.to_string())
          })?;

        Ok(chat_response.first_text())
    }
}
