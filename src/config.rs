//! Configuration for the oracle provider and the HTTP server

use serde::{Deserialize, Serialize};
use log::debug;

pub const DEFAULT_API_BASE: &str
  = "https://api.openai.com/v1";
pub const DEFAULT_MODEL: &str = "gpt-3.5-turbo";
pub const DEFAULT_BIND_ADDR: &str = "0.0.0.0:3000";

/// Provider configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProviderConfig
{   /// API base URL (if custom)
    pub api_base: Option<String>
  , /// Model name sent with every completion
    pub model: String
  , /// Request timeout in seconds; none means the runtime decides
    pub timeout_secs: Option<u64>
}

impl ProviderConfig
{   /// Base URL with the default applied and no trailing slash
    pub fn api_base(&self) -> &str
    {   self.api_base
          .as_deref()
          .unwrap_or(DEFAULT_API_BASE)
          .trim_end_matches('/')
    }
}

impl Default for ProviderConfig
{   fn default() -> Self
    {   ProviderConfig
        {   api_base: None
          , model: DEFAULT_MODEL.to_string()
          , timeout_secs: None
        }
    }
}

/// Server configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ServerConfig
{   /// Socket address to listen on
    pub bind_addr: String
  , /// Oracle provider settings
    pub provider: ProviderConfig
}

impl Default for ServerConfig
{   fn default() -> Self
    {   ServerConfig
        {   bind_addr: DEFAULT_BIND_ADDR.to_string()
          , provider: ProviderConfig::default()
        }
    }
}

impl ServerConfig
{   /// Build config from the process environment
    ///
    /// Reads `SKILLGEN_BIND_ADDR`, `OPENAI_API_BASE`, `OPENAI_MODEL`
    /// and `OPENAI_TIMEOUT_SECS`. The API key is not read here.
    pub fn from_env() -> Result<Self, crate::error::Error>
    {   Self::from_lookup(|name| std::env::var(name).ok())
    }

    /// Build config from an arbitrary variable lookup
    pub fn from_lookup<F>(lookup: F)
      -> Result<Self, crate::error::Error>
    where F: Fn(&str) -> Option<String>
    {   let mut config = ServerConfig::default();

        if let Some(addr) = lookup("SKILLGEN_BIND_ADDR")
        {   config.bind_addr = addr;
        }
        if let Some(base) = lookup("OPENAI_API_BASE")
        {   config.provider.api_base = Some(base);
        }
        if let Some(model) = lookup("OPENAI_MODEL")
        {   config.provider.model = model;
        }
        if let Some(raw) = lookup("OPENAI_TIMEOUT_SECS")
        {   let secs = raw.trim().parse::<u64>()
              .map_err(|e| {
                crate::error::Error::InvalidConfiguration(
                  format!("OPENAI_TIMEOUT_SECS={}: {}", raw, e)
                )
              })?;
            config.provider.timeout_secs = Some(secs);
        }

        debug!("Loaded config: {:?}", config);
        Ok(config)
    }
}

#[cfg(test)]
mod tests
{   use super::*;
    use std::collections::HashMap;

    fn lookup_from(
      pairs: &[(&str, &str)]
    ) -> impl Fn(&str) -> Option<String>
    {   let map: HashMap<String, String> = pairs
          .iter()
          .map(|(k, v)| (k.to_string(), v.to_string()))
          .collect();
        move |name| map.get(name).cloned()
    }

    #[test]
    fn defaults_when_environment_is_empty()
    {   let config = ServerConfig::from_lookup(lookup_from(&[]))
          .unwrap();
        assert_eq!(config, ServerConfig::default());
        assert_eq!(config.provider.api_base(), DEFAULT_API_BASE);
        assert_eq!(config.provider.model, "gpt-3.5-turbo");
        assert!(config.provider.timeout_secs.is_none());
    }

    #[test]
    fn environment_overrides_defaults()
    {   let config = ServerConfig::from_lookup(lookup_from(&[
            ("SKILLGEN_BIND_ADDR", "127.0.0.1:8080")
          , ("OPENAI_API_BASE", "http://localhost:9999/v1/")
          , ("OPENAI_MODEL", "gpt-4o-mini")
          , ("OPENAI_TIMEOUT_SECS", "30")
          ])).unwrap();
        assert_eq!(config.bind_addr, "127.0.0.1:8080");
        assert_eq!(config.provider.api_base(), "http://localhost:9999/v1");
        assert_eq!(config.provider.model, "gpt-4o-mini");
        assert_eq!(config.provider.timeout_secs, Some(30));
    }

    #[test]
    fn bad_timeout_is_a_configuration_error()
    {   let result = ServerConfig::from_lookup(lookup_from(&[
            ("OPENAI_TIMEOUT_SECS", "soon")
          ]));
        assert!(matches!(
          result,
          Err(crate::error::Error::InvalidConfiguration(_))
        ));
    }
}
