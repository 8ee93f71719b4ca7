//! Resolve raw oracle text into a response payload, masking bad output

use serde::de::DeserializeOwned;
use log::debug;

/// Strictly decode `text` as JSON, substituting `default()` on failure.
/// The decode error is logged and dropped, never returned.
pub fn decode_or_else<T, F>(text: Option<&str>, default: F) -> T
where T: DeserializeOwned
    , F: FnOnce() -> T
{   match text.map(serde_json::from_str::<T>)
    {   Some(Ok(value)) => value
      , Some(Err(e)) => {
          debug!("Oracle output did not decode, using default: {}", e);
          default()
        }
      , None => {
          debug!("Oracle returned no output, using default");
          default()
        }
    }
}

/// Pass oracle text through unchanged unless it is absent or empty
pub fn text_or(text: Option<String>, fallback: &str) -> String
{   match text
    {   Some(t) if !t.is_empty() => t
      , _ => {
          debug!("Oracle returned no text, using fallback");
          fallback.to_string()
        }
    }
}
