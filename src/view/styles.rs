//! Color configuration and the shared style palette.

use ratatui::style::{Color, Modifier, Style};

// ===== ColorConfig =====

/// Configuration for color output.
///
/// Colors are disabled by the `--no-color` CLI flag or by the `NO_COLOR`
/// environment variable (any value).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ColorConfig {
    enabled: bool,
}

impl ColorConfig {
    /// Create a ColorConfig from CLI args and environment.
    pub fn from_env_and_args(no_color_flag: bool) -> Self {
        let enabled = !no_color_flag && std::env::var("NO_COLOR").is_err();
        Self { enabled }
    }

    /// Check if colors are enabled.
    pub fn colors_enabled(self) -> bool {
        self.enabled
    }
}

// ===== Palette =====

/// Shared style palette for all widgets.
///
/// When colors are disabled every accessor degrades to the terminal
/// default so the layout stays legible on monochrome output.
#[derive(Debug, Clone, Copy)]
pub struct Palette {
    enabled: bool,
}

impl Palette {
    /// Palette honoring the `NO_COLOR` environment variable.
    pub fn from_env() -> Self {
        Self::with_color_config(ColorConfig::from_env_and_args(false))
    }

    /// Palette with an explicit color configuration.
    pub fn with_color_config(config: ColorConfig) -> Self {
        Self {
            enabled: config.colors_enabled(),
        }
    }

    fn style(self, style: Style) -> Style {
        if self.enabled {
            style
        } else {
            Style::default()
        }
    }

    /// Title and highlight accent.
    pub fn accent(self) -> Style {
        self.style(Style::default().fg(Color::Cyan))
    }

    /// Emphasized accent for headers.
    pub fn title(self) -> Style {
        self.style(
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        )
    }

    /// Secondary text (addresses, hints, separators).
    pub fn dim(self) -> Style {
        self.style(Style::default().fg(Color::DarkGray))
    }

    /// Healthy status (catalog loaded).
    pub fn ok(self) -> Style {
        self.style(Style::default().fg(Color::Green))
    }

    /// In-progress status (fetch in flight).
    pub fn warn(self) -> Style {
        self.style(Style::default().fg(Color::Yellow))
    }

    /// Failure status and error panels.
    pub fn error(self) -> Style {
        self.style(Style::default().fg(Color::Red))
    }

    /// Highlight for the card under the cursor.
    pub fn highlight(self) -> Style {
        self.style(
            Style::default()
                .bg(Color::Cyan)
                .fg(Color::Black)
                .add_modifier(Modifier::BOLD),
        )
    }
}
