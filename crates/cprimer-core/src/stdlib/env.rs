//! Environment variables.
//!
//! [`EnvOverlay`] gives `getenv`/`setenv`/`unsetenv` semantics without
//! touching the process environment: assignments are kept as C-style
//! `NAME=VALUE` entries layered over a lookup function (normally
//! [`std::env::var_os`]), and removals hide the underlying value.

use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum EnvError {
    #[error("invalid environment variable name {0:?}")]
    InvalidName(String),
    #[error("environment variable value contains a NUL byte")]
    InvalidValue,
}

/// Validates that `name` is a legal environment variable name.
///
/// POSIX requires: non-empty, no `'='` character, no embedded NUL.
pub fn valid_env_name(name: &[u8]) -> bool {
    !name.is_empty() && !name.contains(&b'=') && !name.contains(&0)
}

/// Validates that `value` contains no embedded NUL bytes.
pub fn valid_env_value(value: &[u8]) -> bool {
    !value.contains(&0)
}

/// Returns `true` if `entry` is `name` followed by `'='`.
pub fn entry_matches(entry: &[u8], name: &[u8]) -> bool {
    entry.len() > name.len() && entry[..name.len()] == *name && entry[name.len()] == b'='
}

/// Extract the value portion from a `NAME=VALUE` entry.
pub fn entry_value(entry: &[u8]) -> Option<&[u8]> {
    let eq_pos = entry.iter().position(|&b| b == b'=')?;
    Some(&entry[eq_pos + 1..])
}

type Lookup = Box<dyn Fn(&str) -> Option<String>>;

/// Process environment plus local `setenv`/`unsetenv` changes.
pub struct EnvOverlay {
    base: Lookup,
    entries: Vec<Vec<u8>>,
    removed: Vec<String>,
}

impl EnvOverlay {
    /// Overlay on the real process environment.
    #[must_use]
    pub fn from_process() -> Self {
        Self::with_lookup(|name| std::env::var_os(name).map(|v| v.to_string_lossy().into_owned()))
    }

    /// Overlay on an arbitrary lookup (tests, embedding).
    pub fn with_lookup(lookup: impl Fn(&str) -> Option<String> + 'static) -> Self {
        Self {
            base: Box::new(lookup),
            entries: Vec::new(),
            removed: Vec::new(),
        }
    }

    fn local(&self, name: &str) -> Option<usize> {
        self.entries
            .iter()
            .position(|entry| entry_matches(entry, name.as_bytes()))
    }

    /// C `getenv`.
    pub fn get(&self, name: &str) -> Option<String> {
        if let Some(idx) = self.local(name) {
            return entry_value(&self.entries[idx])
                .map(|v| String::from_utf8_lossy(v).into_owned());
        }
        if self.removed.iter().any(|r| r == name) {
            return None;
        }
        (self.base)(name)
    }

    /// C `setenv`. With `overwrite == false` an existing value is kept.
    pub fn set(&mut self, name: &str, value: &str, overwrite: bool) -> Result<(), EnvError> {
        if !valid_env_name(name.as_bytes()) {
            return Err(EnvError::InvalidName(name.to_string()));
        }
        if !valid_env_value(value.as_bytes()) {
            return Err(EnvError::InvalidValue);
        }
        if !overwrite && self.get(name).is_some() {
            return Ok(());
        }

        let mut entry = Vec::with_capacity(name.len() + 1 + value.len());
        entry.extend_from_slice(name.as_bytes());
        entry.push(b'=');
        entry.extend_from_slice(value.as_bytes());

        match self.local(name) {
            Some(idx) => self.entries[idx] = entry,
            None => self.entries.push(entry),
        }
        self.removed.retain(|r| r != name);
        Ok(())
    }

    /// C `unsetenv`. Removing an unset name is not an error.
    pub fn unset(&mut self, name: &str) -> Result<(), EnvError> {
        if !valid_env_name(name.as_bytes()) {
            return Err(EnvError::InvalidName(name.to_string()));
        }
        if let Some(idx) = self.local(name) {
            self.entries.remove(idx);
        }
        if !self.removed.iter().any(|r| r == name) {
            self.removed.push(name.to_string());
        }
        Ok(())
    }
}

impl std::fmt::Debug for EnvOverlay {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("EnvOverlay")
            .field("entries", &self.entries.len())
            .field("removed", &self.removed)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn fixed() -> EnvOverlay {
        EnvOverlay::with_lookup(|name| match name {
            "USER" => Some("alice".to_string()),
            "HOME" => Some("/home/alice".to_string()),
            _ => None,
        })
    }

    #[test]
    fn name_validation() {
        assert!(valid_env_name(b"LD_LIBRARY_PATH"));
        assert!(!valid_env_name(b""));
        assert!(!valid_env_name(b"A="));
        assert!(!valid_env_name(b"FOO\0BAR"));
        assert!(valid_env_value(b""));
        assert!(!valid_env_value(b"a\0b"));
    }

    #[test]
    fn entry_helpers() {
        assert!(entry_matches(b"HOME=/home/user", b"HOME"));
        assert!(!entry_matches(b"HOMEPATH=/foo", b"HOME"));
        assert!(!entry_matches(b"HOME", b"HOME"));
        assert_eq!(entry_value(b"X=a=b"), Some(&b"a=b"[..]));
        assert_eq!(entry_value(b"HOME"), None);
    }

    #[test]
    fn reads_through_to_base() {
        let env = fixed();
        assert_eq!(env.get("USER").as_deref(), Some("alice"));
        assert_eq!(env.get("DEMO_VAR"), None);
    }

    #[test]
    fn set_get_unset_cycle() {
        let mut env = fixed();
        env.set("DEMO_VAR", "42", true).unwrap();
        assert_eq!(env.get("DEMO_VAR").as_deref(), Some("42"));
        env.set("DEMO_VAR", "43", true).unwrap();
        assert_eq!(env.get("DEMO_VAR").as_deref(), Some("43"));
        env.unset("DEMO_VAR").unwrap();
        assert_eq!(env.get("DEMO_VAR"), None);
    }

    #[test]
    fn no_overwrite_keeps_base_value() {
        let mut env = fixed();
        env.set("USER", "bob", false).unwrap();
        assert_eq!(env.get("USER").as_deref(), Some("alice"));
        env.set("USER", "bob", true).unwrap();
        assert_eq!(env.get("USER").as_deref(), Some("bob"));
    }

    #[test]
    fn unset_hides_base_until_set_again() {
        let mut env = fixed();
        env.unset("HOME").unwrap();
        assert_eq!(env.get("HOME"), None);
        env.set("HOME", "/tmp", false).unwrap();
        assert_eq!(env.get("HOME").as_deref(), Some("/tmp"));
    }

    #[test]
    fn invalid_names_are_rejected() {
        let mut env = fixed();
        assert_eq!(
            env.set("A=B", "1", true),
            Err(EnvError::InvalidName("A=B".to_string()))
        );
        assert_eq!(env.set("OK", "a\0b", true), Err(EnvError::InvalidValue));
        assert!(env.unset("").is_err());
    }
}
