use std::collections::HashMap;

use anyhow::{anyhow, Result};
use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};

use crate::document::Rgb;

/// Application configuration module
/// This module handles the application configuration including loading,
/// validating and resolving design settings before a pipeline run.

/// Fonts offered by the standard selection. A caller-supplied font outside
/// this list is accepted as-is.
pub const FONT_CHOICES: [&str; 10] = [
    "Arial",
    "Calibri",
    "Times New Roman",
    "Helvetica",
    "Verdana",
    "Georgia",
    "Courier New",
    "Palatino",
    "Garamond",
    "Trebuchet MS",
];

/// Named color palettes: primary, secondary, text, background.
pub static COLOR_PALETTES: Lazy<HashMap<&'static str, [&'static str; 4]>> = Lazy::new(|| {
    HashMap::from([
        ("Professional", ["#2B579A", "#5B9BD5", "#000000", "#FFFFFF"]),
        ("Modern", ["#404040", "#A5A5A5", "#FFFFFF", "#121212"]),
        ("Vibrant", ["#E53935", "#FFCDD2", "#212121", "#F5F5F5"]),
        ("Corporate", ["#1976D2", "#BBDEFB", "#212121", "#FAFAFA"]),
        ("Creative", ["#7B1FA2", "#CE93D8", "#FFFFFF", "#212121"]),
        ("Nature", ["#388E3C", "#A5D6A7", "#212121", "#F1F8E9"]),
        ("Elegant", ["#5D4037", "#BCAAA4", "#FFFFFF", "#3E2723"]),
        ("Minimal", ["#000000", "#E0E0E0", "#212121", "#FFFFFF"]),
    ])
});

/// Represents the application configuration
#[derive(Debug, Serialize, Deserialize, Clone, Default)]
pub struct Config {
    /// Rewrite provider config
    #[serde(default)]
    pub rewrite: RewriteConfig,

    /// Visual design config
    #[serde(default)]
    pub design: DesignConfig,

    /// Log level
    #[serde(default)]
    pub log_level: LogLevel,
}

/// Rewrite provider configuration
#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct RewriteConfig {
    /// Model name used for content rewriting
    #[serde(default = "default_model")]
    pub model: String,

    /// API key; empty means fall back to the environment
    #[serde(default = "String::new")]
    pub api_key: String,

    /// Service endpoint URL (optional, for self-hosted gateways)
    #[serde(default = "String::new")]
    pub endpoint: String,

    /// Request timeout in seconds
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,

    /// Temperature parameter for text generation (0.0 to 1.0)
    #[serde(default = "default_temperature")]
    pub temperature: f32,
}

impl Default for RewriteConfig {
    fn default() -> Self {
        Self {
            model: default_model(),
            api_key: String::new(),
            endpoint: String::new(),
            timeout_secs: default_timeout_secs(),
            temperature: default_temperature(),
        }
    }
}

/// Visual design configuration as supplied by the caller
#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct DesignConfig {
    /// Font family applied to every run
    #[serde(default = "default_font")]
    pub font_family: String,

    /// Named palette, ignored when custom colors are set
    #[serde(default = "default_palette")]
    pub color_palette: String,

    /// Explicit colors overriding the named palette
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub custom_colors: Option<PaletteColors>,

    /// Title font size in points
    #[serde(default = "default_title_size")]
    pub title_size_pt: u32,

    /// Heading font size in points
    #[serde(default = "default_heading_size")]
    pub heading_size_pt: u32,

    /// Body font size in points
    #[serde(default = "default_body_size")]
    pub body_size_pt: u32,

    /// Whether to fill slide backgrounds with the palette background color
    #[serde(default)]
    pub set_background: bool,
}

impl Default for DesignConfig {
    fn default() -> Self {
        Self {
            font_family: default_font(),
            color_palette: default_palette(),
            custom_colors: None,
            title_size_pt: default_title_size(),
            heading_size_pt: default_heading_size(),
            body_size_pt: default_body_size(),
            set_background: false,
        }
    }
}

/// Explicit hex colors for the four color roles
#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct PaletteColors {
    pub primary: String,
    pub secondary: String,
    pub text: String,
    pub background: String,
}

/// Resolved color roles shared read-only across all slides
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Palette {
    pub primary: Rgb,
    pub secondary: Rgb,
    pub text: Rgb,
    pub background: Rgb,
}

/// Immutable visual settings for one pipeline run.
///
/// Created once from the validated configuration and shared read-only
/// across every slide; nothing in the pipeline mutates it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DesignSettings {
    pub font_family: String,
    pub title_size_pt: u32,
    pub heading_size_pt: u32,
    pub body_size_pt: u32,
    pub colors: Palette,
    pub set_background: bool,
}

impl Default for DesignSettings {
    fn default() -> Self {
        DesignConfig::default()
            .resolve()
            .expect("default design config must resolve")
    }
}

/// Log verbosity level
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Default)]
#[serde(rename_all = "lowercase")]
pub enum LogLevel {
    Error,
    Warn,
    #[default]
    Info,
    Debug,
    Trace,
}

fn default_model() -> String {
    "gemma2-9b-it".to_string()
}

fn default_timeout_secs() -> u64 {
    30
}

fn default_temperature() -> f32 {
    0.7
}

fn default_font() -> String {
    "Calibri".to_string()
}

fn default_palette() -> String {
    "Professional".to_string()
}

fn default_title_size() -> u32 {
    32
}

fn default_heading_size() -> u32 {
    24
}

fn default_body_size() -> u32 {
    18
}

impl DesignConfig {
    /// Resolve the caller-supplied design config into immutable settings.
    ///
    /// Rejects unknown palettes, malformed hex colors, and non-positive
    /// sizes before the pipeline touches the document.
    pub fn resolve(&self) -> Result<DesignSettings> {
        if self.font_family.trim().is_empty() {
            return Err(anyhow!("Font family must not be empty"));
        }
        for (name, size) in [
            ("title", self.title_size_pt),
            ("heading", self.heading_size_pt),
            ("body", self.body_size_pt),
        ] {
            if size == 0 {
                return Err(anyhow!("{} size must be a positive number of points", name));
            }
        }

        let colors = match &self.custom_colors {
            Some(custom) => Palette {
                primary: parse_color(&custom.primary)?,
                secondary: parse_color(&custom.secondary)?,
                text: parse_color(&custom.text)?,
                background: parse_color(&custom.background)?,
            },
            None => {
                let hex = COLOR_PALETTES
                    .get(self.color_palette.as_str())
                    .ok_or_else(|| anyhow!("Unknown color palette: {}", self.color_palette))?;
                Palette {
                    primary: parse_color(hex[0])?,
                    secondary: parse_color(hex[1])?,
                    text: parse_color(hex[2])?,
                    background: parse_color(hex[3])?,
                }
            }
        };

        Ok(DesignSettings {
            font_family: self.font_family.clone(),
            title_size_pt: self.title_size_pt,
            heading_size_pt: self.heading_size_pt,
            body_size_pt: self.body_size_pt,
            colors,
            set_background: self.set_background,
        })
    }
}

fn parse_color(hex: &str) -> Result<Rgb> {
    Rgb::from_hex(hex).map_err(|e| anyhow!(e))
}

impl Config {
    /// Validate the configuration for consistency and required values
    pub fn validate(&self) -> Result<()> {
        // Design settings must resolve; this covers palettes, colors, sizes.
        let _settings = self.design.resolve()?;

        if self.rewrite.model.trim().is_empty() {
            return Err(anyhow!("Rewrite model must not be empty"));
        }
        if self.rewrite.timeout_secs == 0 {
            return Err(anyhow!("Rewrite timeout must be positive"));
        }

        Ok(())
    }
}
