//! Startup configuration read from the environment.

/// Settings for one run of the terminal game
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    /// `tracing` filter directive (`RUST_LOG`)
    pub log_filter: String,
    /// Display names for X and O (`BLOCKADE_PLAYER_X`, `BLOCKADE_PLAYER_O`)
    pub player_names: [String; 2],
}

impl Config {
    /// Read configuration from the process environment
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Read configuration through an arbitrary key lookup
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let non_empty = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());

        Self {
            // Log lines share the terminal with the board, so stay quiet by default
            log_filter: non_empty("RUST_LOG").unwrap_or_else(|| "warn".into()),
            player_names: [
                non_empty("BLOCKADE_PLAYER_X").unwrap_or_else(|| "X".into()),
                non_empty("BLOCKADE_PLAYER_O").unwrap_or_else(|| "O".into()),
            ],
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    #[test]
    fn test_defaults() {
        let config = Config::from_lookup(|_| None);
        assert_eq!(config.log_filter, "warn");
        assert_eq!(config.player_names, ["X".to_string(), "O".to_string()]);
    }

    #[test]
    fn test_overrides() {
        let vars: HashMap<&str, &str> = [
            ("RUST_LOG", "blockade_core=debug"),
            ("BLOCKADE_PLAYER_X", "Ana"),
            ("BLOCKADE_PLAYER_O", "  "),
        ]
        .into_iter()
        .collect();

        let config = Config::from_lookup(|key| vars.get(key).map(|v| v.to_string()));
        assert_eq!(config.log_filter, "blockade_core=debug");
        assert_eq!(config.player_names, ["Ana".to_string(), "O".to_string()]);
    }
}
