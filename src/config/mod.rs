use std::env;
use std::str::FromStr;

use crate::services::window::DEFAULT_VISIBLE;

/// Application configuration loaded from environment variables.
#[derive(Debug, Clone)]
pub struct AppConfig {
    pub host: String,
    pub port: u16,
    /// Concrete page links shown when a request does not ask for a size.
    pub visible: i64,
    /// Largest window size a request may ask for.
    pub max_visible: i64,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            host: "0.0.0.0".to_string(),
            port: 3000,
            visible: DEFAULT_VISIBLE,
            max_visible: 50,
        }
    }
}

impl AppConfig {
    /// Read `PAGER_*` variables; anything missing or malformed keeps its default.
    pub fn from_env() -> Self {
        let defaults = Self::default();
        Self {
            host: env::var("PAGER_HOST").unwrap_or(defaults.host),
            port: parse_or("PAGER_PORT", defaults.port),
            visible: parse_or("PAGER_VISIBLE", defaults.visible),
            max_visible: parse_or("PAGER_MAX_VISIBLE", defaults.max_visible),
        }
    }
}

fn parse_or<T: FromStr>(key: &str, default: T) -> T {
    env::var(key)
        .ok()
        .and_then(|v| v.parse().ok())
        .unwrap_or(default)
}
