#![warn(missing_docs)]
#![warn(clippy::missing_docs_in_private_items)]

use std::{
    str::FromStr,
    sync::{Arc, Mutex, OnceLock},
};

use tracing::metadata::LevelFilter;

use crate::constants::DEFAULT_CREDIT_HOURS;

/// Environment variable holding the default credit hours for new courses.
pub const DEFAULT_CREDITS_VAR: &str = "GRADEBOOK_DEFAULT_CREDITS";
/// Environment variable holding the log level.
pub const LOG_VAR: &str = "GRADEBOOK_LOG";
/// Environment variable holding the report table style.
pub const TABLE_STYLE_VAR: &str = "GRADEBOOK_TABLE_STYLE";

/// Border style used when rendering report tables.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TableStyle {
    /// Box-drawing characters with rounded corners.
    #[default]
    Rounded,
    /// Box-drawing characters with square corners.
    Modern,
    /// Plain `+`, `-` and `|`.
    Ascii,
    /// A GitHub-flavoured markdown table.
    Markdown,
}

impl FromStr for TableStyle {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "rounded" => Ok(TableStyle::Rounded),
            "modern" => Ok(TableStyle::Modern),
            "ascii" => Ok(TableStyle::Ascii),
            "markdown" | "md" => Ok(TableStyle::Markdown),
            other => Err(format!("unknown table style `{other}`")),
        }
    }
}

/// Parses the log level name, `None` if it isn't one.
fn parse_level(val: &str) -> Option<LevelFilter> {
    match val.trim().to_ascii_lowercase().as_str() {
        "off" => Some(LevelFilter::OFF),
        "error" => Some(LevelFilter::ERROR),
        "warn" | "warning" => Some(LevelFilter::WARN),
        "info" => Some(LevelFilter::INFO),
        "debug" => Some(LevelFilter::DEBUG),
        "trace" => Some(LevelFilter::TRACE),
        _ => None,
    }
}

/// Settings read from the environment once per process.
#[derive(Debug, Clone, PartialEq)]
pub struct ConfigState {
    /// Credit hours offered when a course is added without any.
    default_credit_hours: f64,
    /// Minimum level of log events written to stderr.
    log_level:            LevelFilter,
    /// Border style for report tables.
    table_style:          TableStyle,
    /// Values that were set but could not be understood, as `(key, value)`.
    rejected:             Vec<(&'static str, String)>,
}

impl Default for ConfigState {
    fn default() -> Self {
        Self {
            default_credit_hours: DEFAULT_CREDIT_HOURS,
            log_level:            LevelFilter::WARN,
            table_style:          TableStyle::default(),
            rejected:             Vec::new(),
        }
    }
}

impl ConfigState {
    /// Builds a configuration from the process environment.
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Builds a configuration from an arbitrary key lookup. Missing keys use
    /// defaults; malformed values use defaults and are remembered in
    /// [`ConfigState::rejected`].
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let mut cfg = Self::default();

        if let Some(raw) = lookup(DEFAULT_CREDITS_VAR) {
            match raw.trim().parse::<f64>() {
                Ok(v) if v > 0.0 && v.is_finite() => cfg.default_credit_hours = v,
                _ => cfg.rejected.push((DEFAULT_CREDITS_VAR, raw)),
            }
        }

        if let Some(raw) = lookup(LOG_VAR) {
            match parse_level(&raw) {
                Some(level) => cfg.log_level = level,
                None => cfg.rejected.push((LOG_VAR, raw)),
            }
        }

        if let Some(raw) = lookup(TABLE_STYLE_VAR) {
            match raw.parse::<TableStyle>() {
                Ok(style) => cfg.table_style = style,
                Err(_) => cfg.rejected.push((TABLE_STYLE_VAR, raw)),
            }
        }

        cfg
    }

    /// Credit hours offered when a course is added without any.
    pub fn default_credit_hours(&self) -> f64 {
        self.default_credit_hours
    }

    /// Minimum level of log events written to stderr.
    pub fn log_level(&self) -> LevelFilter {
        self.log_level
    }

    /// Border style for report tables.
    pub fn table_style(&self) -> TableStyle {
        self.table_style
    }

    /// Environment values that were ignored because they did not parse.
    pub fn rejected(&self) -> &[(&'static str, String)] {
        &self.rejected
    }

    /// Logs a warning for every ignored value. Call after the subscriber is
    /// installed.
    pub fn warn_rejected(&self) {
        for (key, value) in &self.rejected {
            tracing::warn!("Ignoring {key}={value:?}, using the default instead");
        }
    }
}

/// Shared configuration handle used throughout the crate.
#[derive(Clone, Debug)]
pub struct ConfigHandle(Arc<ConfigState>);

impl std::ops::Deref for ConfigHandle {
    type Target = ConfigState;

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

/// Global storage for the lazily constructed configuration state.
static CONFIG_SLOT: OnceLock<Mutex<Option<Arc<ConfigState>>>> = OnceLock::new();

/// Returns the mutex guarding the global configuration slot.
fn slot() -> &'static Mutex<Option<Arc<ConfigState>>> {
    CONFIG_SLOT.get_or_init(|| Mutex::new(None))
}

/// Returns the active configuration, reading the environment on first use.
pub fn get() -> ConfigHandle {
    let mut guard = slot().lock().unwrap_or_else(|e| e.into_inner());
    if let Some(cfg) = guard.as_ref() {
        return ConfigHandle(Arc::clone(cfg));
    }

    let cfg = Arc::new(ConfigState::from_env());
    *guard = Some(Arc::clone(&cfg));
    ConfigHandle(cfg)
}

/// Replaces the active configuration, eg. with one built by
/// [`ConfigState::from_lookup`].
pub fn install(cfg: ConfigState) -> ConfigHandle {
    let cfg = Arc::new(cfg);
    *slot().lock().unwrap_or_else(|e| e.into_inner()) = Some(Arc::clone(&cfg));
    ConfigHandle(cfg)
}

/// Default credit hours from the active configuration.
pub fn default_credit_hours() -> f64 {
    get().default_credit_hours()
}

/// Table style from the active configuration.
pub fn table_style() -> TableStyle {
    get().table_style()
}
