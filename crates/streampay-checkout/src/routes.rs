//! Callback Route Prefixes
//!
//! The gateway ends a hosted checkout by redirecting to one of two
//! custom-scheme URLs; anything under these prefixes is intercepted instead
//! of loaded. Each prefix is resolved through an explicit ordered source
//! list, first hit wins, rather than chained defaults.

use serde::{Deserialize, Serialize};

const DEFAULT_SUCCESS_PREFIX: &str = "streampay://payment/success";
const DEFAULT_FAILURE_PREFIX: &str = "streampay://payment/failure";

/// A single place a route prefix may come from
#[derive(Debug, Clone, Copy)]
enum Source<'a> {
    /// Environment variable, read at resolution time
    Env(&'a str),
    /// Built-in fallback
    Default(&'a str),
}

/// Resolve the first available value from an ordered source list
fn first(sources: &[Source<'_>]) -> Option<String> {
    for source in sources {
        match source {
            Source::Env(name) => {
                if let Ok(value) = std::env::var(name) {
                    if !value.is_empty() {
                        return Some(value);
                    }
                }
            }
            Source::Default(value) => return Some((*value).to_string()),
        }
    }
    None
}

/// The two terminal callback URL prefixes
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct CallbackRoutes {
    /// Prefix signaling a completed payment
    pub success_prefix: String,

    /// Prefix signaling a failed or cancelled payment
    pub failure_prefix: String,
}

impl Default for CallbackRoutes {
    fn default() -> Self {
        Self {
            success_prefix: DEFAULT_SUCCESS_PREFIX.into(),
            failure_prefix: DEFAULT_FAILURE_PREFIX.into(),
        }
    }
}

impl CallbackRoutes {
    /// Custom prefixes
    pub fn new(success_prefix: impl Into<String>, failure_prefix: impl Into<String>) -> Self {
        Self {
            success_prefix: success_prefix.into(),
            failure_prefix: failure_prefix.into(),
        }
    }

    /// Create from environment variables, falling back to the app scheme
    ///
    /// Precedence per prefix: `STREAMPAY_SUCCESS_URL` /
    /// `STREAMPAY_FAILURE_URL`, then the built-in default.
    pub fn from_env() -> Self {
        let success_prefix = first(&[
            Source::Env("STREAMPAY_SUCCESS_URL"),
            Source::Default(DEFAULT_SUCCESS_PREFIX),
        ])
        .unwrap_or_else(|| DEFAULT_SUCCESS_PREFIX.into());
        let failure_prefix = first(&[
            Source::Env("STREAMPAY_FAILURE_URL"),
            Source::Default(DEFAULT_FAILURE_PREFIX),
        ])
        .unwrap_or_else(|| DEFAULT_FAILURE_PREFIX.into());
        Self {
            success_prefix,
            failure_prefix,
        }
    }
}
