//! HTTP surface: decode the body, compose, ask the oracle, respond

use std::sync::Arc;
use axum::{
  body::Bytes,
  extract::State,
  http::StatusCode,
  response::{IntoResponse, Response},
  routing::{get, post},
  Json, Router,
};
use serde::de::DeserializeOwned;
use serde_json::json;
use log::{debug, error, info};

use crate::error::Error;
use crate::fallback::{decode_or_else, text_or};
use crate::prompt::{compose_spec, compose_translation, compose_workflow, Prompt};
use crate::providers::CompletionOracle;
use crate::request::{
  or_undefined, CompletionRequest, ErrorResponse, SpecRequest, SpecResponse,
  TranslateRequest, TranslationResponse, WorkflowRequest, WorkflowResponse,
};
use crate::workflow::Workflow;
use crate::Feature;

pub const SPEC_FALLBACK: &str = "Failed to generate specification.";
pub const TRANSLATION_FALLBACK: &str
  = "Sorry, I couldn't generate a translation at this time.";

/// Shared handler state; holds nothing mutable
#[derive(Clone)]
pub struct AppState
{   pub oracle: Arc<dyn CompletionOracle>
}

impl AppState
{   pub fn new(oracle: Arc<dyn CompletionOracle>) -> Self
    {   AppState { oracle }
    }

    /// One oracle round-trip with the feature's sampling parameters
    async fn ask(&self, feature: Feature, prompt: Prompt)
      -> Result<Option<String>, Error>
    {   let request = CompletionRequest
        {   system_instruction: prompt.system
          , user_prompt: prompt.user
          , max_tokens: feature.max_tokens()
          , temperature: crate::TEMPERATURE
        };
        debug!("{} prompt is {} bytes", feature.name(), request.user_prompt.len());
        self.oracle.complete(request).await
    }
}

/// Any unrecovered failure, collapsed to the feature's generic 500
#[derive(Debug)]
pub struct ApiError
{   pub feature: Feature
  , pub source: Error
}

impl ApiError
{   fn logged(feature: Feature, source: Error) -> Self
    {   error!("{} generation failed: {}", feature.name(), source);
        ApiError { feature, source }
    }
}

impl IntoResponse for ApiError
{   fn into_response(self) -> Response
    {   let body = ErrorResponse
        {   error: self.feature.failure_message().to_string()
        };
        (StatusCode::INTERNAL_SERVER_ERROR, Json(body)).into_response()
    }
}

fn decode_body<T: DeserializeOwned>(body: &[u8]) -> Result<T, Error>
{   serde_json::from_slice(body)
      .map_err(|e| Error::InvalidRequest(e.to_string()))
}

// ===== Features =====

async fn spec(state: &AppState, body: &[u8])
  -> Result<SpecResponse, Error>
{   let req: SpecRequest = decode_body(body)?;
    let text = state.ask(Feature::Spec, compose_spec(&req)).await?;
    Ok(SpecResponse
    {   spec: text_or(text, SPEC_FALLBACK)
    })
}

async fn workflow(state: &AppState, body: &[u8])
  -> Result<WorkflowResponse, Error>
{   let req: WorkflowRequest = decode_body(body)?;
    let text = state.ask(Feature::Workflow, compose_workflow(&req)).await?;
    let workflow = decode_or_else(text.as_deref(), || {
      Workflow::fallback(
        or_undefined(&req.skill),
        or_undefined(&req.project_type)
      )
    });
    Ok(WorkflowResponse { workflow })
}

async fn translation(state: &AppState, body: &[u8])
  -> Result<TranslationResponse, Error>
{   let req: TranslateRequest = decode_body(body)?;
    let text = state.ask(Feature::Translation, compose_translation(&req)).await?;
    Ok(TranslationResponse
    {   translation: text_or(text, TRANSLATION_FALLBACK)
    })
}

// ===== Handlers =====

pub async fn generate_spec(
  State(state): State<AppState>
, body: Bytes
) -> Result<Json<SpecResponse>, ApiError>
{   spec(&state, &body).await
      .map(Json)
      .map_err(|e| ApiError::logged(Feature::Spec, e))
}

pub async fn generate_workflow(
  State(state): State<AppState>
, body: Bytes
) -> Result<Json<WorkflowResponse>, ApiError>
{   workflow(&state, &body).await
      .map(Json)
      .map_err(|e| ApiError::logged(Feature::Workflow, e))
}

pub async fn translate_skill(
  State(state): State<AppState>
, body: Bytes
) -> Result<Json<TranslationResponse>, ApiError>
{   translation(&state, &body).await
      .map(Json)
      .map_err(|e| ApiError::logged(Feature::Translation, e))
}

async fn health_check() -> impl IntoResponse
{   (StatusCode::OK, Json(json!({ "status": "healthy" })))
}

/// Build the application router
pub fn router(state: AppState) -> Router
{   Router::new()
      .route("/api/generate-spec", post(generate_spec))
      .route("/api/generate-workflow", post(generate_workflow))
      .route("/api/translate-skill", post(translate_skill))
      .route("/health", get(health_check))
      .with_state(state)
}

/// Bind and serve until the process is stopped
pub async fn serve(
  config: &crate::config::ServerConfig
, oracle: Arc<dyn CompletionOracle>
) -> Result<(), Error>
{   let listener = tokio::net::TcpListener::bind(&config.bind_addr)
      .await
      .map_err(|e| {
        error!("Failed to bind {}: {}", config.bind_addr, e);
        Error::InvalidConfiguration(
          format!("bind {}: {}", config.bind_addr, e)
        )
      })?;
    info!("Listening on {}", config.bind_addr);

    axum::serve(listener, router(AppState::new(oracle)))
      .await
      .map_err(|e| {
        error!("Server error: {}", e);
        Error::from(e.to_string())
      })
}

#[cfg(test)]
mod tests
{   use super::*;
    use async_trait::async_trait;

    struct Echo;

    #[async_trait]
    impl CompletionOracle for Echo
    {   async fn complete(&self, request: CompletionRequest)
          -> Result<Option<String>, Error>
        {   Ok(Some(format!("{}:{}", request.max_tokens, request.temperature)))
        }
    }

    #[test]
    fn sampling_parameters_follow_the_feature()
    {   let state = AppState::new(Arc::new(Echo));
        let prompt = Prompt
        {   system: String::new()
          , user: String::new()
        };
        let text = tokio_test::block_on(
          state.ask(Feature::Workflow, prompt)
        ).unwrap();
        assert_eq!(text.as_deref(), Some("1000:0.7"));
    }

    #[test]
    fn api_error_is_a_500()
    {   let response = ApiError
        {   feature: Feature::Spec
          , source: Error::Timeout
        }.into_response();
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    }

    #[test]
    fn decode_failures_are_invalid_requests()
    {   let result = decode_body::<WorkflowRequest>(b"{not json");
        assert!(matches!(result, Err(Error::InvalidRequest(_))));
    }
}
