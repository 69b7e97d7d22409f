//! Typed access to environment-provided settings
//!
//! Every helper takes a lookup function so callers can read from the real
//! process environment (`|k| std::env::var(k).ok()`) or from a map in tests.

use std::fmt::Display;
use std::str::FromStr;
use thiserror::Error;

/// An environment variable was set to a value that does not parse
#[derive(Debug, Error, PartialEq, Eq)]
#[error("Invalid value '{value}' for {key}: {reason}")]
pub struct EnvError {
    pub key: String,
    pub value: String,
    pub reason: String,
}

/// Non-empty, trimmed string value of `key`
pub fn env_string(lookup: &impl Fn(&str) -> Option<String>, key: &str) -> Option<String> {
    lookup(key)
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
}

/// Parsed value of `key`, `None` when unset or blank
pub fn env_parse<T>(lookup: &impl Fn(&str) -> Option<String>, key: &str) -> Result<Option<T>, EnvError>
where
    T: FromStr,
    T::Err: Display,
{
    env_string(lookup, key)
        .map(|value| {
            value.parse::<T>().map_err(|e| EnvError {
                key: key.to_string(),
                reason: e.to_string(),
                value,
            })
        })
        .transpose()
}

/// Parsed value of `key`, or `default` when unset or blank
pub fn env_or<T>(
    lookup: &impl Fn(&str) -> Option<String>,
    key: &str,
    default: T,
) -> Result<T, EnvError>
where
    T: FromStr,
    T::Err: Display,
{
    Ok(env_parse(lookup, key)?.unwrap_or(default))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup_from(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| ((*k).to_string(), (*v).to_string()))
            .collect();
        move |k| map.get(k).cloned()
    }

    #[test]
    fn test_env_string_trims_and_skips_blank() {
        let lookup = lookup_from(&[("A", "  x "), ("B", "   ")]);
        assert_eq!(env_string(&lookup, "A").as_deref(), Some("x"));
        assert_eq!(env_string(&lookup, "B"), None);
        assert_eq!(env_string(&lookup, "C"), None);
    }

    #[test]
    fn test_env_or_default_and_parse() {
        let lookup = lookup_from(&[("PORT", "9090"), ("BAD", "nine")]);
        assert_eq!(env_or(&lookup, "PORT", 8080u16), Ok(9090));
        assert_eq!(env_or(&lookup, "MISSING", 8080u16), Ok(8080));

        let err = env_or(&lookup, "BAD", 1u16).unwrap_err();
        assert_eq!(err.key, "BAD");
        assert_eq!(err.value, "nine");
        assert!(err.to_string().starts_with("Invalid value 'nine' for BAD"));
    }
}
