pub mod error;
pub mod config;
pub mod providers;
pub mod request;
pub mod prompt;
pub mod fallback;
pub mod workflow;
pub mod server;

/*

skillgen turns free-text skill-learning requests into generated
artifacts: learning specs, project workflows and translated lessons.

Each endpoint follows the same shape:

  body ──> decode ──> compose prompt ──> oracle ──> resolve ──> JSON
                                            │
                           no text / bad JSON ──> canned fallback
                           anything else      ──> generic 500

src/
├── lib.rs          # Feature table and re-exports
├── error.rs        # Error type
├── config.rs       # Provider and server configuration
├── request.rs      # Wire types
├── prompt.rs       # Prompt templates
├── providers/      # Completion oracles (OpenAI)
├── fallback.rs     # Decode-with-default helpers
├── workflow.rs     # Workflow record and its fallback
├── server.rs       # axum router and handlers
└── main.rs         # Binary entry point

*/

pub use error::Error;
pub use providers::{CompletionOracle, OpenAiClient};
pub use server::{router, serve, AppState};

/// Sampling temperature shared by every feature
pub const TEMPERATURE: f32 = 0.7;

/// The three generation features exposed over HTTP.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Feature
{   /// Markdown learning specification (`/api/generate-spec`)
    Spec
  , /// JSON project workflow (`/api/generate-workflow`)
    Workflow
  , /// Culturally-adapted lesson (`/api/translate-skill`)
    Translation
}

impl Feature
{   /// Max tokens requested from the oracle
    pub fn max_tokens(self) -> usize
    {   match self
        {   Feature::Spec => 2000
          , Feature::Workflow => 1000
          , Feature::Translation => 1500
        }
    }

    /// Static message returned with every 500
    pub fn failure_message(self) -> &'static str
    {   match self
        {   Feature::Spec => "Failed to generate specification"
          , Feature::Workflow => "Failed to generate workflow"
          , Feature::Translation => "Failed to translate skill"
        }
    }

    pub fn name(self) -> &'static str
    {   match self
        {   Feature::Spec => "Spec"
          , Feature::Workflow => "Workflow"
          , Feature::Translation => "Translation"
        }
    }
}
