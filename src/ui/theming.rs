// SPDX-License-Identifier: MPL-2.0
//! Light/Dark/System theme mode management.

use serde::{Deserialize, Serialize};

/// Theme preference persisted in `settings.toml`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ThemeMode {
    Light,
    Dark,
    #[default]
    System,
}

impl ThemeMode {
    /// Resolves the preference into a concrete Iced theme. `System` asks the
    /// OS and falls back to dark when detection fails.
    pub fn resolve(self) -> iced::Theme {
        match self {
            ThemeMode::Light => iced::Theme::Light,
            ThemeMode::Dark => iced::Theme::Dark,
            ThemeMode::System => {
                if let Ok(dark_light::Mode::Light) = dark_light::detect() {
                    iced::Theme::Light
                } else {
                    iced::Theme::Dark
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn explicit_modes_resolve_to_matching_themes() {
        assert_eq!(ThemeMode::Light.resolve(), iced::Theme::Light);
        assert_eq!(ThemeMode::Dark.resolve(), iced::Theme::Dark);
    }

    #[test]
    fn default_mode_is_system() {
        assert_eq!(ThemeMode::default(), ThemeMode::System);
    }

    #[test]
    fn mode_serializes_lowercase() {
        let serialized = toml::to_string(&SerdeWrap { theme_mode: ThemeMode::Dark })
            .expect("serializable");
        assert!(serialized.contains("dark"));
    }

    #[derive(Serialize)]
    struct SerdeWrap {
        theme_mode: ThemeMode,
    }
}
