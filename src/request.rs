//! Request and response types shared by the oracle and the HTTP layer

use serde::{Deserialize, Serialize};

/// Placeholder rendered for fields the caller left out
pub const UNDEFINED: &str = "undefined";

/// Render an optional caller field; absent and `null` both become `undefined`
pub fn or_undefined(field: &Option<String>) -> &str
{   field.as_deref().unwrap_or(UNDEFINED)
}

// ===== Oracle =====

/// One completion call against the oracle
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CompletionRequest
{   /// System instruction sent ahead of the prompt
    pub system_instruction: String
  , /// The composed user prompt
    pub user_prompt: String
  , /// Max tokens to generate
    pub max_tokens: usize
  , /// Temperature for sampling
    pub temperature: f32
}

// ===== Incoming bodies =====

/// Body of `POST /api/generate-spec`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SpecRequest
{   pub title: Option<String>
  , pub description: Option<String>
  , pub modules: Vec<Module>
}

/// One course module as drafted by the caller
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Module
{   pub title: Option<String>
  , pub duration: Option<String>
  , pub difficulty: Option<String>
  , pub description: Option<String>
  , pub objectives: Vec<String>
}

/// Body of `POST /api/generate-workflow`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WorkflowRequest
{   pub skill: Option<String>
  , #[serde(rename = "projectType")]
    pub project_type: Option<String>
}

/// Body of `POST /api/translate-skill`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TranslateRequest
{   pub skill: Option<String>
  , pub language: Option<String>
  , pub level: Option<String>
}

// ===== Outgoing bodies =====

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SpecResponse
{   pub spec: String
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WorkflowResponse
{   pub workflow: crate::workflow::Workflow
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TranslationResponse
{   pub translation: String
}

/// Uniform failure body, no further classification
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ErrorResponse
{   pub error: String
}
