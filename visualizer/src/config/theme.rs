// Theme specific colors for the dashboard and the chart
use serde::{Deserialize, Serialize};
use std::str::FromStr;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Theme {
    Dark,
    Light,
}

impl FromStr for Theme {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "dark" => Ok(Theme::Dark),
            "light" => Ok(Theme::Light),
            other => Err(anyhow::anyhow!("Unknown theme '{}' (expected 'dark' or 'light')", other)),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ThemePalette {
    pub background: String,
    pub foreground: String,
    pub grid: String,
    pub sales_line: String,
    pub marker: String,
}

impl ThemePalette {
    pub fn for_theme(theme: Theme) -> Self {
        match theme {
            Theme::Dark => Self::default_dark(),
            Theme::Light => Self::default_light(),
        }
    }

    pub fn default_dark() -> Self {
        Self {
            background: "#1e1e1e".to_string(),
            foreground: "#d1d4dc".to_string(),
            grid: "#363a45".to_string(),
            sales_line: "#26a69a".to_string(),
            marker: "#ef5350".to_string(),
        }
    }

    pub fn default_light() -> Self {
        Self {
            background: "#ffffff".to_string(),
            foreground: "#222222".to_string(),
            grid: "#e0e0e0".to_string(),
            sales_line: "#e91e63".to_string(),
            marker: "#f44336".to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_theme_from_str() {
        assert_eq!("Dark".parse::<Theme>().unwrap(), Theme::Dark);
        assert_eq!("light".parse::<Theme>().unwrap(), Theme::Light);
        assert!("solarized".parse::<Theme>().is_err());
    }

    #[test]
    fn test_palette_for_theme() {
        assert_eq!(ThemePalette::for_theme(Theme::Dark), ThemePalette::default_dark());
        assert_ne!(ThemePalette::for_theme(Theme::Light).background, ThemePalette::default_dark().background);
    }
}
