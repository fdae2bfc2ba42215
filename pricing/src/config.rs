use std::time::Duration;

use crate::copy::Locale;
use crate::toast::{DEFAULT_DURATION, DEFAULT_EXIT, ToastConfig};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PageConfig {
    pub locale: Locale,
    pub toast_duration: Duration,
    pub toast_exit: Duration,
}

impl Default for PageConfig {
    fn default() -> Self {
        Self {
            locale: Locale::default(),
            toast_duration: DEFAULT_DURATION,
            toast_exit: DEFAULT_EXIT,
        }
    }
}

impl PageConfig {
    /// Reads overrides from a URL query string such as `?lang=en&toast_ms=3000`.
    ///
    /// Recognised keys are `lang`, `toast_ms` and `toast_exit_ms`. Unknown keys are
    /// ignored and unparsable values keep their default.
    pub fn from_query(query: &str) -> Self {
        let mut config = Self::default();

        for pair in query.trim_start_matches('?').split('&') {
            let Some((key, value)) = pair.split_once('=') else {
                continue;
            };

            match key {
                "lang" => match Locale::from_tag(value) {
                    Some(locale) => config.locale = locale,
                    None => tracing::warn!("Unsupported lang '{}', using {}", value, config.locale.tag()),
                },
                "toast_ms" => {
                    if let Some(duration) = parse_millis(key, value) {
                        config.toast_duration = duration;
                    }
                }
                "toast_exit_ms" => {
                    if let Some(duration) = parse_millis(key, value) {
                        config.toast_exit = duration;
                    }
                }
                _ => {}
            }
        }

        config
    }

    pub fn toast_config(&self) -> ToastConfig {
        ToastConfig {
            duration: self.toast_duration,
            exit: self.toast_exit,
            ..ToastConfig::default()
        }
    }
}

fn parse_millis(key: &str, value: &str) -> Option<Duration> {
    match value.parse::<u64>() {
        Ok(ms) => Some(Duration::from_millis(ms)),
        Err(_) => {
            tracing::warn!("Ignoring {}={}: expected milliseconds", key, value);
            None
        }
    }
}
