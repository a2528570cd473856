//! Widget Configuration
//!
//! Storage keys, timings and asset paths used by the widget.

/// Static widget settings, provided to handlers through `AppContext`
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct WidgetConfig {
    /// localStorage key of the task array
    pub tasks_key: &'static str,
    /// localStorage key of the theme string
    pub theme_key: &'static str,
    /// Fade-out time before a removed row is detached
    pub removal_delay_ms: u32,
    pub icon_sun: &'static str,
    pub icon_moon: &'static str,
    pub icon_check: &'static str,
    pub icon_cross: &'static str,
    /// Lines kept by the in-memory logger
    pub log_capacity: usize,
}

impl Default for WidgetConfig {
    fn default() -> Self {
        Self {
            tasks_key: "tasks",
            theme_key: "theme",
            removal_delay_ms: 1000,
            icon_sun: "./images/icon-sun.svg",
            icon_moon: "./images/icon-moon.svg",
            icon_check: "./images/icon-check.svg",
            icon_cross: "./images/cross.svg",
            log_capacity: rolling_logger::DEFAULT_CAPACITY,
        }
    }
}

impl WidgetConfig {
    /// Icon shown by the theme toggle for the given theme
    pub fn theme_icon(&self, theme: crate::models::Theme) -> &'static str {
        match theme {
            crate::models::Theme::Light => self.icon_sun,
            crate::models::Theme::Dark => self.icon_moon,
        }
    }
}
