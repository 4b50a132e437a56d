use anyhow::{Context, Result};
use dotenvy::dotenv;
use orgscout::ScoutConfig;
use std::env;

/// Settings read from the environment, before command-line flags apply.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct EnvConfig {
    pub concurrency: Option<usize>,
    pub timeout_secs: Option<u64>,
    pub user_agent: Option<String>,
}

impl EnvConfig {
    /// Load configuration from environment variables
    pub fn from_env() -> Result<Self> {
        // Load .env file if present
        let _ = dotenv();

        Self::from_lookup(|name| env::var(name).ok())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self> {
        Ok(Self {
            concurrency: lookup("ORGSCOUT_CONCURRENCY")
                .map(|v| v.trim().parse())
                .transpose()
                .context("ORGSCOUT_CONCURRENCY must be a positive number")?,
            timeout_secs: lookup("ORGSCOUT_TIMEOUT_SECS")
                .map(|v| v.trim().parse())
                .transpose()
                .context("ORGSCOUT_TIMEOUT_SECS must be a number of seconds")?,
            user_agent: lookup("ORGSCOUT_USER_AGENT").filter(|v| !v.trim().is_empty()),
        })
    }

    /// Build the scout configuration. Flags given on the command line win.
    pub fn into_scout_config(
        self,
        concurrency: Option<usize>,
        timeout_secs: Option<u64>,
        user_agent: Option<String>,
    ) -> ScoutConfig {
        let mut config = ScoutConfig::default();

        if let Some(concurrency) = concurrency.or(self.concurrency) {
            config = config.with_concurrency(concurrency);
        }
        if let Some(secs) = timeout_secs.or(self.timeout_secs) {
            config = config.with_timeout_secs(secs);
        }
        if let Some(user_agent) = user_agent.or(self.user_agent) {
            config = config.with_user_agent(user_agent);
        }

        config
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup(vars: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let vars: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |name| vars.get(name).cloned()
    }

    #[test]
    fn test_empty_environment() {
        let config = EnvConfig::from_lookup(lookup(&[])).unwrap();
        assert_eq!(config, EnvConfig::default());
    }

    #[test]
    fn test_reads_variables() {
        let config = EnvConfig::from_lookup(lookup(&[
            ("ORGSCOUT_CONCURRENCY", "8"),
            ("ORGSCOUT_TIMEOUT_SECS", " 5 "),
            ("ORGSCOUT_USER_AGENT", "probe/1.0"),
        ]))
        .unwrap();

        assert_eq!(config.concurrency, Some(8));
        assert_eq!(config.timeout_secs, Some(5));
        assert_eq!(config.user_agent.as_deref(), Some("probe/1.0"));
    }

    #[test]
    fn test_rejects_bad_numbers() {
        let err = EnvConfig::from_lookup(lookup(&[("ORGSCOUT_CONCURRENCY", "lots")])).unwrap_err();
        assert!(err.to_string().contains("ORGSCOUT_CONCURRENCY"));
    }

    #[test]
    fn test_flags_override_environment() {
        let env = EnvConfig {
            concurrency: Some(8),
            timeout_secs: Some(5),
            user_agent: Some("probe/1.0".to_string()),
        };

        let config = env.into_scout_config(Some(2), None, None);

        assert_eq!(config.concurrency, 2);
        assert_eq!(config.timeout_secs, 5);
        assert_eq!(config.user_agent, "probe/1.0");
    }

    #[test]
    fn test_defaults_without_overrides() {
        let config = EnvConfig::default().into_scout_config(None, None, None);
        assert_eq!(config.concurrency, ScoutConfig::default().concurrency);
    }
}
