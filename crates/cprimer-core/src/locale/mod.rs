//! Locale support.
//!
//! A model of `setlocale` for the six POSIX categories. Every program
//! starts in the "C" locale; setting the empty name resolves each category
//! from the environment with POSIX precedence (`LC_ALL`, then the
//! category's own variable, then `LANG`, then "C").

use thiserror::Error;

use crate::stdlib::EnvOverlay;

/// POSIX locale category: character classification and conversion.
pub const LC_CTYPE: i32 = 0;
/// POSIX locale category: numeric formatting.
pub const LC_NUMERIC: i32 = 1;
/// POSIX locale category: date and time formatting.
pub const LC_TIME: i32 = 2;
/// POSIX locale category: string collation.
pub const LC_COLLATE: i32 = 3;
/// POSIX locale category: monetary formatting.
pub const LC_MONETARY: i32 = 4;
/// POSIX locale category: informational and diagnostic messages.
pub const LC_MESSAGES: i32 = 5;
/// POSIX locale category: all categories.
pub const LC_ALL: i32 = 6;

const CATEGORY_NAMES: [&str; 6] = [
    "LC_CTYPE",
    "LC_NUMERIC",
    "LC_TIME",
    "LC_COLLATE",
    "LC_MONETARY",
    "LC_MESSAGES",
];

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum LocaleError {
    #[error("invalid locale category {0}")]
    InvalidCategory(i32),
    #[error("locale {0:?} is not available")]
    Unavailable(String),
}

/// Returns `true` if `cat` is a valid POSIX locale category.
#[inline]
pub fn valid_category(cat: i32) -> bool {
    (LC_CTYPE..=LC_ALL).contains(&cat)
}

/// Returns `true` if `name` refers to the minimal POSIX "C" locale.
#[inline]
pub fn is_c_locale(name: &str) -> bool {
    matches!(name, "C" | "POSIX")
}

/// Accepts `language[_territory][.codeset][@modifier]` shaped names and the
/// C/POSIX aliases. Path-like names are refused.
fn well_formed(name: &str) -> bool {
    if is_c_locale(name) {
        return true;
    }
    !name.is_empty()
        && name.len() <= 255
        && !name.starts_with(['.', '_', '@'])
        && name
            .bytes()
            .all(|b| b.is_ascii_alphanumeric() || matches!(b, b'_' | b'.' | b'@' | b'-'))
}

fn canonical(name: &str) -> String {
    if name == "POSIX" { "C" } else { name }.to_string()
}

/// Per-category locale selection for one program.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Locale {
    categories: [String; 6],
}

impl Default for Locale {
    fn default() -> Self {
        Self {
            categories: std::array::from_fn(|_| "C".to_string()),
        }
    }
}

impl Locale {
    /// The "C" locale in every category.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// `setlocale(category, NULL)`.
    ///
    /// For `LC_ALL` a single name is returned when every category agrees,
    /// otherwise the glibc composite `LC_CTYPE=..;LC_NUMERIC=..;...`.
    pub fn query(&self, category: i32) -> Result<String, LocaleError> {
        if !valid_category(category) {
            return Err(LocaleError::InvalidCategory(category));
        }
        if category != LC_ALL {
            return Ok(self.categories[category as usize].clone());
        }
        let first = &self.categories[0];
        if self.categories.iter().all(|c| c == first) {
            return Ok(first.clone());
        }
        Ok(CATEGORY_NAMES
            .iter()
            .zip(self.categories.iter())
            .map(|(cat, name)| format!("{cat}={name}"))
            .collect::<Vec<_>>()
            .join(";"))
    }

    /// Name the environment selects for one category.
    fn from_env(category: usize, env: &EnvOverlay) -> String {
        ["LC_ALL", CATEGORY_NAMES[category], "LANG"]
            .iter()
            .filter_map(|var| env.get(var))
            .find(|value| !value.is_empty())
            .unwrap_or_else(|| "C".to_string())
    }

    /// `setlocale(category, name)`. An empty `name` resolves from `env`.
    ///
    /// The change is all-or-nothing: if any category's resolved name is
    /// unusable nothing is modified.
    pub fn set(
        &mut self,
        category: i32,
        name: &str,
        env: &EnvOverlay,
    ) -> Result<String, LocaleError> {
        if !valid_category(category) {
            return Err(LocaleError::InvalidCategory(category));
        }
        let targets: Vec<usize> = if category == LC_ALL {
            (0..CATEGORY_NAMES.len()).collect()
        } else {
            vec![category as usize]
        };

        let mut resolved = Vec::with_capacity(targets.len());
        for &cat in &targets {
            let chosen = if name.is_empty() {
                Self::from_env(cat, env)
            } else {
                name.to_string()
            };
            if !well_formed(&chosen) {
                return Err(LocaleError::Unavailable(chosen));
            }
            resolved.push(canonical(&chosen));
        }
        for (cat, chosen) in targets.into_iter().zip(resolved) {
            self.categories[cat] = chosen;
        }
        self.query(category)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn env(vars: &'static [(&'static str, &'static str)]) -> EnvOverlay {
        EnvOverlay::with_lookup(move |name| {
            vars.iter()
                .find(|(k, _)| *k == name)
                .map(|(_, v)| v.to_string())
        })
    }

    #[test]
    fn categories() {
        assert!(valid_category(LC_CTYPE));
        assert!(valid_category(LC_ALL));
        assert!(!valid_category(-1));
        assert!(!valid_category(7));
    }

    #[test]
    fn starts_in_c() {
        let loc = Locale::new();
        assert_eq!(loc.query(LC_ALL).unwrap(), "C");
        assert_eq!(loc.query(LC_TIME).unwrap(), "C");
        assert_eq!(loc.query(42), Err(LocaleError::InvalidCategory(42)));
    }

    #[test]
    fn empty_name_with_bare_env_is_c() {
        let mut loc = Locale::new();
        assert_eq!(loc.set(LC_ALL, "", &env(&[])).unwrap(), "C");
    }

    #[test]
    fn lang_applies_to_every_category() {
        let mut loc = Locale::new();
        let e = env(&[("LANG", "en_US.UTF-8")]);
        assert_eq!(loc.set(LC_ALL, "", &e).unwrap(), "en_US.UTF-8");
    }

    #[test]
    fn category_variable_beats_lang_and_yields_composite() {
        let mut loc = Locale::new();
        let e = env(&[("LANG", "en_US.UTF-8"), ("LC_TIME", "de_DE.UTF-8")]);
        let all = loc.set(LC_ALL, "", &e).unwrap();
        assert_eq!(
            all,
            "LC_CTYPE=en_US.UTF-8;LC_NUMERIC=en_US.UTF-8;LC_TIME=de_DE.UTF-8;\
             LC_COLLATE=en_US.UTF-8;LC_MONETARY=en_US.UTF-8;LC_MESSAGES=en_US.UTF-8"
        );
        assert_eq!(loc.query(LC_TIME).unwrap(), "de_DE.UTF-8");
    }

    #[test]
    fn lc_all_beats_everything() {
        let mut loc = Locale::new();
        let e = env(&[("LANG", "en_US"), ("LC_TIME", "de_DE"), ("LC_ALL", "POSIX")]);
        assert_eq!(loc.set(LC_ALL, "", &e).unwrap(), "C");
    }

    #[test]
    fn bad_name_leaves_state_untouched() {
        let mut loc = Locale::new();
        assert_eq!(
            loc.set(LC_ALL, "../etc", &env(&[])),
            Err(LocaleError::Unavailable("../etc".to_string()))
        );
        assert_eq!(loc.query(LC_ALL).unwrap(), "C");
    }

    #[test]
    fn single_category() {
        let mut loc = Locale::new();
        assert_eq!(loc.set(LC_NUMERIC, "fr_FR", &env(&[])).unwrap(), "fr_FR");
        assert_eq!(loc.query(LC_CTYPE).unwrap(), "C");
        assert!(loc.query(LC_ALL).unwrap().contains("LC_NUMERIC=fr_FR"));
    }
}
