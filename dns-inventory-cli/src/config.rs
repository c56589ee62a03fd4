//! Runtime configuration, merged from flags and environment variables.

use dns_inventory_provider::{CF_API_BASE, Credentials, ZoneSelector};
use thiserror::Error;

use crate::args::{Args, ENV_API_BASE, ENV_API_KEY, ENV_DOMAIN, ENV_EMAIL, ENV_ZONE_ID};

/// Domain searched for when neither a zone id nor a domain is configured.
pub const DEFAULT_DOMAIN: &str = "example.com";

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("Missing account email: pass -e/--email or set {ENV_EMAIL}")]
    MissingEmail,

    #[error("Missing API key: pass -k/--key or set {ENV_API_KEY}")]
    MissingApiKey,
}

/// Immutable settings for one run.
#[derive(Debug, Clone)]
pub struct Config {
    pub credentials: Credentials,
    /// Explicit zone id; `None` means discovery by `domain`.
    pub zone_id: Option<String>,
    pub domain: String,
    pub api_base: String,
}

impl Config {
    /// Merge flags with values from `env`. A flag wins over its variable.
    ///
    /// A whitespace-only value counts as unset, so a blank email or key is an
    /// error and a blank zone id means discovery. Other values are used
    /// exactly as given.
    pub fn resolve<F>(args: Args, env: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let pick = |flag: Option<String>, key: &str| {
            flag.or_else(|| env(key)).filter(|v| !v.trim().is_empty())
        };

        let email = pick(args.email, ENV_EMAIL).ok_or(ConfigError::MissingEmail)?;
        let api_key = pick(args.key, ENV_API_KEY).ok_or(ConfigError::MissingApiKey)?;
        let zone_id = pick(args.zone_id, ENV_ZONE_ID);
        let domain = pick(args.domain, ENV_DOMAIN).unwrap_or_else(|| DEFAULT_DOMAIN.to_string());
        let api_base = pick(args.api_base, ENV_API_BASE).unwrap_or_else(|| CF_API_BASE.to_string());

        Ok(Self {
            credentials: Credentials::new(email, api_key),
            zone_id,
            domain,
            api_base,
        })
    }

    pub fn zone_selector(&self) -> ZoneSelector {
        match &self.zone_id {
            Some(id) => ZoneSelector::Explicit(id.clone()),
            None => ZoneSelector::Discover {
                domain: self.domain.clone(),
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;

    use super::*;

    fn env_of(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| ((*k).to_string(), (*v).to_string()))
            .collect();
        move |key| map.get(key).cloned()
    }

    fn args(email: Option<&str>, key: Option<&str>) -> Args {
        Args {
            email: email.map(str::to_string),
            key: key.map(str::to_string),
            ..Args::default()
        }
    }

    #[test]
    fn flags_only() {
        let config = Config::resolve(args(Some("a@b.c"), Some("k1")), env_of(&[]));
        assert!(matches!(
            &config,
            Ok(c) if c.credentials.email == "a@b.c" && c.credentials.api_key == "k1"
        ));
    }

    #[test]
    fn env_fallback() {
        let env = env_of(&[(ENV_EMAIL, "env@b.c"), (ENV_API_KEY, "envkey"), (ENV_ZONE_ID, "z9")]);
        let Ok(config) = Config::resolve(Args::default(), env) else {
            unreachable!("env should satisfy credentials");
        };
        assert_eq!(config.credentials.email, "env@b.c");
        assert_eq!(config.credentials.api_key, "envkey");
        assert_eq!(config.zone_id.as_deref(), Some("z9"));
    }

    #[test]
    fn flag_wins_over_env() {
        let env = env_of(&[(ENV_EMAIL, "env@b.c"), (ENV_API_KEY, "envkey")]);
        let Ok(config) = Config::resolve(args(Some("flag@b.c"), None), env) else {
            unreachable!("credentials are complete");
        };
        assert_eq!(config.credentials.email, "flag@b.c");
        assert_eq!(config.credentials.api_key, "envkey");
    }

    #[test]
    fn missing_email() {
        let result = Config::resolve(args(None, Some("k")), env_of(&[]));
        assert!(matches!(result, Err(ConfigError::MissingEmail)));
    }

    #[test]
    fn missing_key() {
        let result = Config::resolve(args(Some("a@b.c"), None), env_of(&[]));
        assert!(matches!(result, Err(ConfigError::MissingApiKey)));
    }

    #[test]
    fn blank_values_count_as_missing() {
        let env = env_of(&[(ENV_API_KEY, "   ")]);
        let result = Config::resolve(args(Some("a@b.c"), None), env);
        assert!(matches!(result, Err(ConfigError::MissingApiKey)));

        let result = Config::resolve(args(Some(""), Some("k")), env_of(&[(ENV_EMAIL, "x@y.z")]));
        assert!(matches!(result, Err(ConfigError::MissingEmail)));
    }

    #[test]
    fn padded_values_kept_verbatim() {
        let env = env_of(&[(ENV_API_KEY, " key ")]);
        let Ok(config) = Config::resolve(args(Some("a@b.c\t"), None), env) else {
            unreachable!("credentials are complete");
        };
        assert_eq!(config.credentials.email, "a@b.c\t");
        assert_eq!(config.credentials.api_key, " key ");
    }

    #[test]
    fn defaults() {
        let Ok(config) = Config::resolve(args(Some("a@b.c"), Some("k")), env_of(&[])) else {
            unreachable!("credentials are complete");
        };
        assert_eq!(config.domain, DEFAULT_DOMAIN);
        assert_eq!(config.api_base, CF_API_BASE);
        assert_eq!(config.zone_id, None);
        assert_eq!(
            config.zone_selector(),
            ZoneSelector::Discover {
                domain: DEFAULT_DOMAIN.to_string()
            }
        );
    }

    #[test]
    fn blank_zone_id_means_discovery() {
        let env = env_of(&[(ENV_ZONE_ID, ""), (ENV_DOMAIN, "example.org")]);
        let Ok(config) = Config::resolve(args(Some("a@b.c"), Some("k")), env) else {
            unreachable!("credentials are complete");
        };
        assert_eq!(
            config.zone_selector(),
            ZoneSelector::Discover {
                domain: "example.org".to_string()
            }
        );
    }

    #[test]
    fn explicit_zone_selector() {
        let mut a = args(Some("a@b.c"), Some("k"));
        a.zone_id = Some("abc".to_string());
        let Ok(config) = Config::resolve(a, env_of(&[])) else {
            unreachable!("credentials are complete");
        };
        assert_eq!(config.zone_selector(), ZoneSelector::Explicit("abc".to_string()));
    }
}
