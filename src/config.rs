use std::time::Duration;

use log::Level;

pub const THEME_KEY: &str = "portfolio-theme";
/// Root margin that collapses the viewport to a line at its vertical midpoint.
pub const FOCUS_BAND_ROOT_MARGIN: &str = "-50% 0px -50% 0px";

const DEFAULT_SEND_DELAY_MS: u64 = 1_500;
const DEFAULT_RESET_DELAY_MS: u64 = 3_000;
const DEFAULT_SCROLL_THRESHOLD_PX: u64 = 50;
const DEFAULT_LOG_LEVEL: Level = Level::Info;

const SEND_DELAY_MS_BOUNDS: (u64, u64) = (0, 60_000);
const RESET_DELAY_MS_BOUNDS: (u64, u64) = (0, 60_000);
const SCROLL_THRESHOLD_PX_BOUNDS: (u64, u64) = (0, 2_000);

#[derive(Clone, Debug, PartialEq)]
pub struct SiteConfig {
    pub send_delay: Duration,
    pub reset_delay: Duration,
    pub scroll_threshold_px: f64,
    pub theme_key: &'static str,
    pub focus_band_root_margin: &'static str,
    pub log_level: Level,
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            send_delay: Duration::from_millis(DEFAULT_SEND_DELAY_MS),
            reset_delay: Duration::from_millis(DEFAULT_RESET_DELAY_MS),
            scroll_threshold_px: DEFAULT_SCROLL_THRESHOLD_PX as f64,
            theme_key: THEME_KEY,
            focus_band_root_margin: FOCUS_BAND_ROOT_MARGIN,
            log_level: DEFAULT_LOG_LEVEL,
        }
    }
}

impl SiteConfig {
    /// Reads overrides baked in at build time (`PORTFOLIO_*` variables seen by
    /// `trunk build`). The page has no runtime environment to consult.
    pub fn from_build_env() -> Self {
        Self::from_overrides(|name| match name {
            "PORTFOLIO_SEND_DELAY_MS" => option_env!("PORTFOLIO_SEND_DELAY_MS"),
            "PORTFOLIO_RESET_DELAY_MS" => option_env!("PORTFOLIO_RESET_DELAY_MS"),
            "PORTFOLIO_SCROLL_THRESHOLD_PX" => option_env!("PORTFOLIO_SCROLL_THRESHOLD_PX"),
            "PORTFOLIO_LOG_LEVEL" => option_env!("PORTFOLIO_LOG_LEVEL"),
            _ => None,
        })
    }

    fn from_overrides<'a>(lookup: impl Fn(&str) -> Option<&'a str>) -> Self {
        let send_delay_ms = parse_u64_with_bounds(
            lookup("PORTFOLIO_SEND_DELAY_MS"),
            DEFAULT_SEND_DELAY_MS,
            SEND_DELAY_MS_BOUNDS,
        );
        let reset_delay_ms = parse_u64_with_bounds(
            lookup("PORTFOLIO_RESET_DELAY_MS"),
            DEFAULT_RESET_DELAY_MS,
            RESET_DELAY_MS_BOUNDS,
        );
        let scroll_threshold_px = parse_u64_with_bounds(
            lookup("PORTFOLIO_SCROLL_THRESHOLD_PX"),
            DEFAULT_SCROLL_THRESHOLD_PX,
            SCROLL_THRESHOLD_PX_BOUNDS,
        );
        let log_level = parse_log_level(lookup("PORTFOLIO_LOG_LEVEL"), DEFAULT_LOG_LEVEL);

        Self {
            send_delay: Duration::from_millis(send_delay_ms),
            reset_delay: Duration::from_millis(reset_delay_ms),
            scroll_threshold_px: scroll_threshold_px as f64,
            log_level,
            ..Self::default()
        }
    }
}

fn parse_u64_with_bounds(raw: Option<&str>, default: u64, bounds: (u64, u64)) -> u64 {
    raw.and_then(|value| value.trim().parse::<u64>().ok())
        .filter(|value| (bounds.0..=bounds.1).contains(value))
        .unwrap_or(default)
}

fn parse_log_level(raw: Option<&str>, default: Level) -> Level {
    raw.and_then(|value| value.trim().parse::<Level>().ok())
        .unwrap_or(default)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_simulated_latency() {
        let config = SiteConfig::from_overrides(|_| None);

        assert_eq!(config, SiteConfig::default());
        assert_eq!(config.send_delay, Duration::from_millis(1_500));
        assert_eq!(config.reset_delay, Duration::from_millis(3_000));
        assert_eq!(config.scroll_threshold_px, 50.0);
        assert_eq!(config.theme_key, "portfolio-theme");
    }

    #[test]
    fn valid_overrides_are_applied() {
        let config = SiteConfig::from_overrides(|name| match name {
            "PORTFOLIO_SEND_DELAY_MS" => Some(" 250 "),
            "PORTFOLIO_SCROLL_THRESHOLD_PX" => Some("120"),
            "PORTFOLIO_LOG_LEVEL" => Some("DEBUG"),
            _ => None,
        });

        assert_eq!(config.send_delay, Duration::from_millis(250));
        assert_eq!(config.reset_delay, Duration::from_millis(DEFAULT_RESET_DELAY_MS));
        assert_eq!(config.scroll_threshold_px, 120.0);
        assert_eq!(config.log_level, Level::Debug);
    }

    #[test]
    fn malformed_or_out_of_bounds_overrides_keep_defaults() {
        let config = SiteConfig::from_overrides(|name| match name {
            "PORTFOLIO_SEND_DELAY_MS" => Some("soon"),
            "PORTFOLIO_RESET_DELAY_MS" => Some("600000"),
            "PORTFOLIO_SCROLL_THRESHOLD_PX" => Some("-4"),
            "PORTFOLIO_LOG_LEVEL" => Some("verbose"),
            _ => None,
        });

        assert_eq!(config, SiteConfig::default());
    }

    #[test]
    fn log_level_names_follow_the_log_crate() {
        assert_eq!(parse_log_level(Some("Warn"), Level::Info), Level::Warn);
        assert_eq!(parse_log_level(Some(" trace "), Level::Info), Level::Trace);
        assert_eq!(parse_log_level(Some(""), Level::Error), Level::Error);
    }
}
