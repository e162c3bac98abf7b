//! Compile-time configuration.
//!
//! Constants, a hygienic squaring macro, and the facts `cfg!` knows about
//! the build: whether assertions are on and which platform this is.

/// Value of pi used by the preprocessor lesson.
pub const PI: f64 = std::f64::consts::PI;

/// Size of the formatting buffer in the preprocessor lesson.
pub const BUF_SIZE: usize = 64;

/// Build mode used when nothing overrides it.
pub const DEFAULT_BUILD_MODE: &str = "dev";

/// Square an expression, evaluating it once.
///
/// Unlike a textual `#define SQR(x) ((x) * (x))` there is no precedence
/// trap and no double evaluation.
#[macro_export]
macro_rules! sqr {
    ($x:expr) => {{
        let v = $x;
        v * v
    }};
}

/// Build mode baked in at compile time via `CPRIMER_BUILD_MODE`, or
/// [`DEFAULT_BUILD_MODE`].
pub fn compiled_build_mode() -> &'static str {
    option_env!("CPRIMER_BUILD_MODE").unwrap_or(DEFAULT_BUILD_MODE)
}

/// `true` when `debug_assert!` is active in this build.
pub fn assertions_enabled() -> bool {
    cfg!(debug_assertions)
}

pub fn platform_name() -> &'static str {
    if cfg!(target_os = "windows") {
        "Windows"
    } else if cfg!(target_os = "macos") {
        "macOS"
    } else if cfg!(target_os = "linux") {
        "Linux"
    } else {
        "unknown"
    }
}

pub fn max_i(a: i32, b: i32) -> i32 {
    if a > b { a } else { b }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sqr_respects_grouping() {
        assert_eq!(sqr!(3 + 1), 16);
        let mut calls = 0;
        let mut next = || {
            calls += 1;
            5
        };
        assert_eq!(sqr!(next()), 25);
        assert_eq!(calls, 1);
    }

    #[test]
    fn build_facts() {
        assert!(!compiled_build_mode().is_empty());
        assert_eq!(assertions_enabled(), cfg!(debug_assertions));
        #[cfg(target_os = "linux")]
        assert_eq!(platform_name(), "Linux");
        assert_eq!(max_i(3, 9), 9);
    }
}
