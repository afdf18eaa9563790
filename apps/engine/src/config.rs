use std::time::Duration;

use anyhow::{Context, Result};

/// Engine configuration loaded from environment variables. The AI judgment
/// integration is optional: with no API keys configured the blender runs
/// deterministic-only.
#[derive(Debug, Clone)]
pub struct EngineConfig {
    /// Credential pool for the external AI call, rotated round-robin.
    pub api_keys: Vec<String>,
    pub ai_timeout: Duration,
    /// How long a rate-limited credential cools down before reuse.
    pub credential_cooldown: Duration,
    /// Pause between attempts when rotating to the next credential.
    pub retry_backoff: Duration,
    pub rust_log: String,
}

impl EngineConfig {
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok(); // load .env if present; ignore if missing

        let api_keys = std::env::var("ANTHROPIC_API_KEYS")
            .unwrap_or_default()
            .split(',')
            .map(str::trim)
            .filter(|k| !k.is_empty())
            .map(str::to_string)
            .collect();

        Ok(EngineConfig {
            api_keys,
            ai_timeout: Duration::from_secs(env_u64("AI_TIMEOUT_SECS", 30)?),
            credential_cooldown: Duration::from_secs(env_u64("AI_COOLDOWN_SECS", 60)?),
            retry_backoff: Duration::from_millis(env_u64("AI_RETRY_BACKOFF_MS", 250)?),
            rust_log: std::env::var("RUST_LOG").unwrap_or_else(|_| "info".to_string()),
        })
    }

    /// Configuration with the AI judgment disabled outright.
    pub fn disabled() -> Self {
        EngineConfig {
            api_keys: Vec::new(),
            ai_timeout: Duration::from_secs(30),
            credential_cooldown: Duration::from_secs(60),
            retry_backoff: Duration::from_millis(250),
            rust_log: "info".to_string(),
        }
    }

    pub fn ai_enabled(&self) -> bool {
        !self.api_keys.is_empty()
    }
}

fn env_u64(key: &str, default: u64) -> Result<u64> {
    match std::env::var(key) {
        Ok(raw) => raw
            .parse::<u64>()
            .with_context(|| format!("{key} must be a non-negative integer")),
        Err(_) => Ok(default),
    }
}
