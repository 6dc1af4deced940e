use std::path::PathBuf;

use actix_web::cookie::Key;

use crate::models::table_filter::selection::PagePolicy;

pub const DEFAULT_BIND: &str = "127.0.0.1:8080";
pub const DEFAULT_PAGE_SIZE: usize = 7;

/// Runtime settings read from the environment (and `.env`, if present).
#[derive(Debug, Clone)]
pub struct AppConfig {
    pub bind: String,
    pub page_size: usize,
    pub page_policy: PagePolicy,
    pub seed_path: Option<PathBuf>,
    pub session_key: Option<String>,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            bind: DEFAULT_BIND.to_string(),
            page_size: DEFAULT_PAGE_SIZE,
            page_policy: PagePolicy::CarryOver,
            seed_path: None,
            session_key: None,
        }
    }
}

fn parse_bool(value: &str) -> Option<bool> {
    match value.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Some(true),
        "0" | "false" | "no" | "off" => Some(false),
        _ => None,
    }
}

impl AppConfig {
    pub fn from_env() -> Self {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    /// Build from any variable source. Bad values are logged and replaced
    /// by their defaults.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let mut config = Self::default();

        if let Some(bind) = lookup("PROTODESK_BIND").filter(|b| !b.trim().is_empty()) {
            config.bind = bind.trim().to_string();
        }

        if let Some(raw) = lookup("PROTODESK_PAGE_SIZE") {
            match raw.trim().parse::<usize>() {
                Ok(n) if n >= 1 => config.page_size = n,
                _ => log::warn!(
                    "PROTODESK_PAGE_SIZE={raw:?} is not a positive integer, using {DEFAULT_PAGE_SIZE}"
                ),
            }
        }

        if let Some(raw) = lookup("PROTODESK_RESET_PAGE_ON_FILTER_CHANGE") {
            match parse_bool(&raw) {
                Some(true) => config.page_policy = PagePolicy::Reset,
                Some(false) => config.page_policy = PagePolicy::CarryOver,
                None => log::warn!("PROTODESK_RESET_PAGE_ON_FILTER_CHANGE={raw:?} is not a boolean, ignoring"),
            }
        }

        config.seed_path = lookup("PROTODESK_SEED")
            .filter(|p| !p.trim().is_empty())
            .map(PathBuf::from);
        config.session_key = lookup("SESSION_KEY");
        config
    }

    /// Cookie signing key. Falls back to a random key, which loses sessions
    /// on restart.
    pub fn cookie_key(&self) -> Key {
        match &self.session_key {
            Some(val) if val.len() >= 64 => {
                log::info!("Using SESSION_KEY from environment");
                Key::from(val.as_bytes())
            }
            Some(val) => {
                log::warn!("SESSION_KEY too short ({} bytes, need 64+), generating random key", val.len());
                Key::generate()
            }
            None => {
                log::warn!("No SESSION_KEY set, generating random key (sessions lost on restart)");
                Key::generate()
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn config_from(pairs: &[(&str, &str)]) -> AppConfig {
        let vars: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        AppConfig::from_lookup(|name| vars.get(name).cloned())
    }

    #[test]
    fn defaults_without_env() {
        let c = config_from(&[]);
        assert_eq!(c.bind, DEFAULT_BIND);
        assert_eq!(c.page_size, 7);
        assert_eq!(c.page_policy, PagePolicy::CarryOver);
        assert!(c.seed_path.is_none());
    }

    #[test]
    fn reads_overrides() {
        let c = config_from(&[
            ("PROTODESK_BIND", "0.0.0.0:9000"),
            ("PROTODESK_PAGE_SIZE", "3"),
            ("PROTODESK_RESET_PAGE_ON_FILTER_CHANGE", "true"),
            ("PROTODESK_SEED", "/tmp/protocols.json"),
        ]);
        assert_eq!(c.bind, "0.0.0.0:9000");
        assert_eq!(c.page_size, 3);
        assert_eq!(c.page_policy, PagePolicy::Reset);
        assert_eq!(c.seed_path, Some(PathBuf::from("/tmp/protocols.json")));
    }

    #[test]
    fn bad_values_fall_back() {
        let c = config_from(&[
            ("PROTODESK_PAGE_SIZE", "0"),
            ("PROTODESK_RESET_PAGE_ON_FILTER_CHANGE", "maybe"),
        ]);
        assert_eq!(c.page_size, DEFAULT_PAGE_SIZE);
        assert_eq!(c.page_policy, PagePolicy::CarryOver);
    }

    #[test]
    fn short_session_key_still_yields_a_key() {
        let c = config_from(&[("SESSION_KEY", "short")]);
        let _ = c.cookie_key();
    }
}
