//! Site configuration.
//!
//! Values are fixed at build time so that the server render and the hydrated
//! client agree. The relay endpoint and fallback address can be overridden
//! with `MIMIR_FORM_ENDPOINT` / `MIMIR_FALLBACK_EMAIL` when compiling.

use std::time::Duration;

use super::counter::StepMode;

/// Default form-relay endpoint
pub const DEFAULT_FORM_ENDPOINT: &str = "https://formspree.io/f/mimir-contact";

/// Default address users are directed to when every submission path fails
pub const DEFAULT_FALLBACK_EMAIL: &str = "mimirsoftwarefactory@gmail.com";

/// Contact phone shown next to the form
pub const CONTACT_PHONE: &str = "(+61) 0433-514-560";

/// Delay before a successful form resets itself (5s)
pub const SUCCESS_RESET_MS: u64 = 5000;

/// Typewriter timing
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TypewriterTiming {
    pub type_ms: u64,
    pub delete_ms: u64,
    pub hold_ms: u64,
}

impl Default for TypewriterTiming {
    fn default() -> Self {
        Self {
            type_ms: 100,
            delete_ms: 50,
            hold_ms: 2000,
        }
    }
}

/// Counter timing for one group of stats
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CounterTiming {
    /// Number of ticks the animation is spread over
    pub ticks: u32,
    /// Interval between ticks
    pub tick_ms: u64,
    /// Delay added per stat index before its animation starts
    pub stagger_ms: u64,
    pub mode: StepMode,
}

/// Application configuration shared by the server render and the browser.
#[derive(Debug, Clone, PartialEq)]
pub struct SiteConfig {
    /// Third-party form relay receiving contact submissions
    pub form_endpoint: String,
    /// Address offered when submission cannot be completed
    pub fallback_email: String,
    pub contact_phone: String,
    pub success_reset_ms: u64,
    pub typewriter: TypewriterTiming,
    pub hero_counters: CounterTiming,
    pub about_counters: CounterTiming,
    pub model_rotation_ms: u64,
    pub category_rotation_ms: u64,
    pub badge_stagger_ms: u64,
    pub progress_tick_ms: u64,
}

impl SiteConfig {
    /// Build the configuration, honouring build-time overrides.
    pub fn from_build_env() -> Self {
        Self {
            form_endpoint: option_env!("MIMIR_FORM_ENDPOINT")
                .unwrap_or(DEFAULT_FORM_ENDPOINT)
                .to_string(),
            fallback_email: option_env!("MIMIR_FALLBACK_EMAIL")
                .unwrap_or(DEFAULT_FALLBACK_EMAIL)
                .to_string(),
            ..Self::defaults()
        }
    }

    fn defaults() -> Self {
        Self {
            form_endpoint: DEFAULT_FORM_ENDPOINT.to_string(),
            fallback_email: DEFAULT_FALLBACK_EMAIL.to_string(),
            contact_phone: CONTACT_PHONE.to_string(),
            success_reset_ms: SUCCESS_RESET_MS,
            typewriter: TypewriterTiming::default(),
            hero_counters: CounterTiming {
                ticks: 100,
                tick_ms: 30,
                stagger_ms: 500,
                mode: StepMode::Proportional,
            },
            about_counters: CounterTiming {
                ticks: 60,
                tick_ms: 60,
                stagger_ms: 200,
                mode: StepMode::ByTarget,
            },
            model_rotation_ms: 2000,
            category_rotation_ms: 5000,
            badge_stagger_ms: 800,
            progress_tick_ms: 200,
        }
    }

    /// Delay before a successful submission clears the form
    pub fn success_reset(&self) -> Duration {
        Duration::from_millis(self.success_reset_ms)
    }

    /// Check if the endpoint was overridden at build time
    pub fn has_custom_endpoint(&self) -> bool {
        self.form_endpoint != DEFAULT_FORM_ENDPOINT
    }
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self::from_build_env()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_match_site_timings() {
        let config = SiteConfig::defaults();

        assert_eq!(config.success_reset(), Duration::from_millis(5000));
        assert_eq!(config.typewriter.type_ms, 100);
        assert_eq!(config.typewriter.delete_ms, 50);
        assert_eq!(config.typewriter.hold_ms, 2000);
        assert_eq!(config.hero_counters.ticks, 100);
        assert_eq!(config.about_counters.ticks, 60);
        assert_eq!(config.category_rotation_ms, 5000);
        assert_eq!(config.model_rotation_ms, 2000);
    }

    #[test]
    fn test_default_endpoint_is_not_custom() {
        let config = SiteConfig::defaults();
        assert!(!config.has_custom_endpoint());

        let config = SiteConfig {
            form_endpoint: "https://relay.example/f/abc".to_string(),
            ..SiteConfig::defaults()
        };
        assert!(config.has_custom_endpoint());
    }

    #[test]
    fn test_fallback_email_is_set() {
        let config = SiteConfig::from_build_env();
        assert!(config.fallback_email.contains('@'));
    }
}
