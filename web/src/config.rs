use std::time::Duration;

pub const DEFAULT_LOADING_DELAY: Duration = Duration::from_millis(1500);

/// Presentation options for the hotel details page.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ViewConfig {
    /// Minimum time the loading skeleton stays up after each navigation.
    pub loading_delay: Duration,
    pub show_footer: bool,
}

impl Default for ViewConfig {
    fn default() -> Self {
        Self {
            loading_delay: DEFAULT_LOADING_DELAY,
            show_footer: false,
        }
    }
}

impl ViewConfig {
    pub fn with_loading_delay(mut self, delay: Duration) -> Self {
        self.loading_delay = delay;
        self
    }

    pub fn with_footer(mut self, show: bool) -> Self {
        self.show_footer = show;
        self
    }
}

#[cfg(feature = "ssr")]
#[derive(Debug, Clone, Default)]
pub struct ServerConfig {
    pub hotels_data_path: Option<std::path::PathBuf>,
}

#[cfg(feature = "ssr")]
impl ServerConfig {
    pub fn from_env() -> Self {
        let hotels_data_path = std::env::var("HOTELS_DATA_PATH")
            .ok()
            .filter(|path| !path.trim().is_empty())
            .map(std::path::PathBuf::from);

        Self { hotels_data_path }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_hide_footer_and_wait_one_and_a_half_seconds() {
        let config = ViewConfig::default();
        assert_eq!(config.loading_delay, Duration::from_millis(1500));
        assert!(!config.show_footer);
    }

    #[test]
    fn builder_overrides() {
        let config = ViewConfig::default()
            .with_loading_delay(Duration::ZERO)
            .with_footer(true);
        assert_eq!(config.loading_delay, Duration::ZERO);
        assert!(config.show_footer);
    }
}
