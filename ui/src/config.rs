//! Build-time configuration for the shell.
//!
//! Values are baked in when the crate is compiled, so the mounted view is fixed
//! for the lifetime of the document.
//!
//! # Environment Variables (read at compile time):
//! - `AUTH_SHELL_INITIAL_VIEW`: "SignIn" or "SignUp" (also "sign-in" / "sign-up",
//!   case-insensitive). Defaults to SignIn.
//! - `AUTH_SHELL_VIEW_TOGGLE`: "1"/"true" renders a link that switches views.
//!   Defaults to off.

use std::str::FromStr;

use dioxus_logger::tracing::warn;
use thiserror::Error;

use crate::ViewSelection;

pub const INITIAL_VIEW_VAR: &str = "AUTH_SHELL_INITIAL_VIEW";
pub const VIEW_TOGGLE_VAR: &str = "AUTH_SHELL_VIEW_TOGGLE";

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConfigError {
    #[error("unknown view `{value}` in {var}")]
    InvalidView {
        var: &'static str,
        value: String,
        #[source]
        source: strum::ParseError,
    },

    #[error("invalid value `{value}` in {var}, expected 1/0 or true/false")]
    InvalidFlag { var: &'static str, value: String },
}

#[derive(Clone, Copy, PartialEq, Eq, Debug, Default)]
pub struct ShellConfig {
    pub initial_view: ViewSelection,
    pub view_toggle: bool,
}

impl ShellConfig {
    /// Builds a config from raw values. `None` keeps the default.
    pub fn from_values(
        initial_view: Option<&str>,
        view_toggle: Option<&str>,
    ) -> Result<Self, ConfigError> {
        let mut config = Self::default();

        if let Some(value) = initial_view {
            config.initial_view =
                ViewSelection::from_str(value.trim()).map_err(|source| ConfigError::InvalidView {
                    var: INITIAL_VIEW_VAR,
                    value: value.to_string(),
                    source,
                })?;
        }

        if let Some(value) = view_toggle {
            config.view_toggle = parse_flag(VIEW_TOGGLE_VAR, value)?;
        }

        Ok(config)
    }

    /// Reads the values captured at compile time. Invalid values are logged and
    /// replaced by the default config.
    pub fn from_build_env() -> Self {
        Self::from_values(
            option_env!("AUTH_SHELL_INITIAL_VIEW"),
            option_env!("AUTH_SHELL_VIEW_TOGGLE"),
        )
        .unwrap_or_else(|e| {
            warn!("{e}, using default shell config");
            Self::default()
        })
    }
}

fn parse_flag(var: &'static str, value: &str) -> Result<bool, ConfigError> {
    let value = value.trim();
    if value == "1" || value.eq_ignore_ascii_case("true") {
        Ok(true)
    } else if value == "0" || value.eq_ignore_ascii_case("false") {
        Ok(false)
    } else {
        Err(ConfigError::InvalidFlag {
            var,
            value: value.to_string(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_values_keep_defaults() {
        let config = ShellConfig::from_values(None, None).unwrap();
        assert_eq!(config, ShellConfig::default());
        assert!(config.initial_view.is_sign_in());
        assert!(!config.view_toggle);
    }

    #[test]
    fn parses_view_names() {
        for raw in ["SignUp", "signup", "sign-up", "SIGN-UP", " SignUp "] {
            let config = ShellConfig::from_values(Some(raw), None).unwrap();
            assert_eq!(config.initial_view, ViewSelection::SignUp, "{raw}");
        }
        let config = ShellConfig::from_values(Some("sign-in"), None).unwrap();
        assert_eq!(config.initial_view, ViewSelection::SignIn);
    }

    #[test]
    fn rejects_unknown_view() {
        let err = ShellConfig::from_values(Some("dashboard"), None).unwrap_err();
        assert!(matches!(
            err,
            ConfigError::InvalidView { var: INITIAL_VIEW_VAR, ref value, .. } if value == "dashboard"
        ));
        assert!(err.to_string().contains("AUTH_SHELL_INITIAL_VIEW"));
    }

    #[test]
    fn parses_toggle_flag() {
        for (raw, expected) in [("1", true), ("TRUE", true), ("0", false), ("false", false)] {
            let config = ShellConfig::from_values(None, Some(raw)).unwrap();
            assert_eq!(config.view_toggle, expected, "{raw}");
        }
    }

    #[test]
    fn rejects_bad_toggle_flag() {
        let err = ShellConfig::from_values(Some("SignIn"), Some("yes")).unwrap_err();
        assert_eq!(
            err,
            ConfigError::InvalidFlag {
                var: VIEW_TOGGLE_VAR,
                value: "yes".to_string(),
            }
        );
    }
}
