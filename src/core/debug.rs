//! Diagnostics on stderr, switched on with `VIBROISO_DEBUG`.
//!
//! Accepted values are `1`, `true`, `yes` and `on` (any case). Every line
//! names the module that logged it, e.g. `[vibroiso::core::sweep] sweep: 5 points`.
use std::sync::OnceLock;

pub const ENV_VAR: &str = "VIBROISO_DEBUG";

static ENABLED: OnceLock<bool> = OnceLock::new();

fn parse_switch(value: Option<&str>) -> bool {
    matches!(
        value.map(|v| v.trim().to_ascii_lowercase()).as_deref(),
        Some("1" | "true" | "yes" | "on")
    )
}

/// Read once per process.
pub fn is_enabled() -> bool {
    *ENABLED.get_or_init(|| parse_switch(std::env::var(ENV_VAR).ok().as_deref()))
}

#[macro_export]
macro_rules! debug_log {
    ($($arg:tt)*) => {{
        if $crate::core::debug::is_enabled() {
            eprintln!("[{}] {}", module_path!(), format_args!($($arg)*));
        }
    }};
}
