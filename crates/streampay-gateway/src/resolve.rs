//! Ordered-Precedence Configuration Resolution
//!
//! Every configurable value is resolved through an explicit source list,
//! first hit wins, instead of ad hoc chained defaults scattered through the
//! code. A typical chain is explicit override, then environment variable,
//! then built-in default.

/// A single place a configuration value may come from
#[derive(Debug, Clone, Copy)]
pub enum Source<'a> {
    /// Value passed in by the caller, if any
    Explicit(Option<&'a str>),
    /// Environment variable, read at resolution time
    Env(&'a str),
    /// Built-in fallback
    Default(&'a str),
}

/// Resolve the first available value from an ordered source list
pub fn first(sources: &[Source<'_>]) -> Option<String> {
    for source in sources {
        match source {
            Source::Explicit(Some(value)) if !value.is_empty() => {
                return Some((*value).to_string());
            }
            Source::Explicit(_) => {}
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

/// Resolve with a required outcome, naming the value in the error
pub fn required(name: &str, sources: &[Source<'_>]) -> crate::Result<String> {
    first(sources).ok_or_else(|| crate::GatewayError::Config(format!("{name} not set")))
}
