//! Page configuration module.
//!
//! Handles loading, validating, and merging `config.toml`. Stock defaults
//! describe the Skyline Vista demo listing; a user `config.toml` in the
//! content directory overrides any subset of them.
//!
//! ## Configuration Options
//!
//! ```toml
//! # All options are optional - defaults shown below
//!
//! slug = "skyline-vista"      # URL segment: /property/<slug>/
//! images = ["https://...", ...] # Ordered photo set (first 5 shown inline)
//!
//! [listing]
//! name = "Skyline Vista Apartments"
//! rating = 4.6
//! # ... `property-view gen-config` prints every listing key
//!
//! [colors.light]
//! background = "#ffffff"
//! text = "#111827"
//! text_muted = "#4b5563"
//! border = "#e5e7eb"
//! accent = "#2563eb"
//! accent_hover = "#1d4ed8"
//!
//! [motion]
//! duration = 0.6            # Seconds for section enter animations
//! hero_duration = 0.8       # Seconds for the hero card
//! easing = "ease-out"       # CSS easing curve
//! offset_y = "20px"         # Vertical translation sections enter from
//! stagger = 0.05            # Delay between consecutive review cards
//! ```
//!
//! ## Partial Configuration
//!
//! Config files are sparse — override just the values you want:
//!
//! ```toml
//! [listing.pricing]
//! amount = "$3,900"
//! ```
//!
//! Unknown keys are rejected to catch typos early.

use crate::gallery::ImageSet;
use crate::listing::{Listing, STAR_COUNT};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("TOML parse error: {0}")]
    Toml(#[from] toml::de::Error),
    #[error("Config validation error: {0}")]
    Validation(String),
}

/// Page configuration loaded from `config.toml`.
///
/// All fields have defaults. User config files need only specify the values
/// they want to override. Unknown keys are rejected.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct PageConfig {
    /// URL segment of the property page (`/property/<slug>/`).
    pub slug: String,
    /// Ordered photo set for the preview grid and lightbox.
    pub images: ImageSet,
    /// Static listing copy.
    pub listing: Listing,
    /// Color schemes for light and dark modes.
    pub colors: ColorConfig,
    /// Enter animation parameters.
    pub motion: MotionConfig,
}

impl Default for PageConfig {
    fn default() -> Self {
        Self {
            slug: "skyline-vista".to_string(),
            images: default_images(),
            listing: Listing::default(),
            colors: ColorConfig::default(),
            motion: MotionConfig::default(),
        }
    }
}

const DEFAULT_IMAGE_IDS: [&str; 8] = [
    "photo-1505692794403-34d4982a86e8",
    "photo-1494526585095-c41746248156",
    "photo-1564013799919-ab600027ffc6",
    "photo-1560185127-6ed189bf02f4",
    "photo-1501183638710-841dd1904471",
    "photo-1501045661006-fcebe0257c3f",
    "photo-1616594039964-ae9021a400a0",
    "photo-1522708323590-d24dbb6b0267",
];

fn default_images() -> ImageSet {
    DEFAULT_IMAGE_IDS
        .iter()
        .map(|id| format!("https://images.unsplash.com/{id}?q=80&w=1600&auto=format&fit=crop"))
        .collect()
}

impl PageConfig {
    /// Validate config values are within acceptable ranges.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.slug.is_empty()
            || !self
                .slug
                .chars()
                .all(|c| c.is_ascii_lowercase() || c.is_ascii_digit() || c == '-')
        {
            return Err(ConfigError::Validation(
                "slug must be non-empty and use only a-z, 0-9 and '-'".into(),
            ));
        }
        if let Some(pos) = self.images.iter().position(|image| image.trim().is_empty()) {
            return Err(ConfigError::Validation(format!(
                "images[{pos}] must not be empty"
            )));
        }
        check_rating("listing.rating", self.listing.rating)?;
        check_rating("listing.editorial.rating", self.listing.editorial.rating)?;
        for (i, review) in self.listing.reviews.iter().enumerate() {
            check_rating(&format!("listing.reviews[{i}].rating"), review.rating)?;
        }
        let positive = |v: f64| v.is_finite() && v > 0.0;
        if !positive(self.motion.duration) || !positive(self.motion.hero_duration) {
            return Err(ConfigError::Validation(
                "motion durations must be positive".into(),
            ));
        }
        if !self.motion.stagger.is_finite() || self.motion.stagger < 0.0 {
            return Err(ConfigError::Validation(
                "motion.stagger must not be negative".into(),
            ));
        }
        Ok(())
    }
}

fn check_rating(key: &str, value: f64) -> Result<(), ConfigError> {
    if (0.0..=f64::from(STAR_COUNT)).contains(&value) {
        Ok(())
    } else {
        Err(ConfigError::Validation(format!(
            "{key} must be between 0 and {STAR_COUNT}"
        )))
    }
}

/// Enter animation parameters, consumed by the renderer as CSS custom
/// properties. Sections fade in while translating up by `offset_y`.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct MotionConfig {
    /// Section enter duration in seconds.
    pub duration: f64,
    /// Hero card enter duration in seconds.
    pub hero_duration: f64,
    /// CSS easing function.
    pub easing: String,
    /// Vertical offset sections enter from (CSS length).
    pub offset_y: String,
    /// Delay between consecutive review cards, in seconds.
    pub stagger: f64,
}

impl Default for MotionConfig {
    fn default() -> Self {
        Self {
            duration: 0.6,
            hero_duration: 0.8,
            easing: "ease-out".to_string(),
            offset_y: "20px".to_string(),
            stagger: 0.05,
        }
    }
}

/// Color configuration for light and dark modes.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ColorConfig {
    /// Light mode color scheme.
    pub light: ColorScheme,
    /// Dark mode color scheme.
    pub dark: ColorScheme,
}

impl Default for ColorConfig {
    fn default() -> Self {
        Self {
            light: ColorScheme::default_light(),
            dark: ColorScheme::default_dark(),
        }
    }
}

/// Individual color scheme (light or dark).
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ColorScheme {
    /// Page background color.
    pub background: String,
    /// Primary text color.
    pub text: String,
    /// Secondary text (location line, review bodies, footer).
    pub text_muted: String,
    /// Card border color.
    pub border: String,
    /// Call-to-action button color.
    pub accent: String,
    /// Call-to-action hover color.
    pub accent_hover: String,
}

impl ColorScheme {
    pub fn default_light() -> Self {
        Self {
            background: "#ffffff".to_string(),
            text: "#111827".to_string(),
            text_muted: "#4b5563".to_string(),
            border: "#e5e7eb".to_string(),
            accent: "#2563eb".to_string(),
            accent_hover: "#1d4ed8".to_string(),
        }
    }

    pub fn default_dark() -> Self {
        Self {
            background: "#0b0f19".to_string(),
            text: "#f3f4f6".to_string(),
            text_muted: "#9ca3af".to_string(),
            border: "#374151".to_string(),
            accent: "#3b82f6".to_string(),
            accent_hover: "#60a5fa".to_string(),
        }
    }
}

impl Default for ColorScheme {
    fn default() -> Self {
        Self::default_light()
    }
}

// =============================================================================
// Config loading, merging, and validation
// =============================================================================

/// Returns the stock default config as a `toml::Value::Table`.
///
/// This is the base layer user overrides are merged on top of.
pub fn stock_defaults_value() -> toml::Value {
    toml::Value::try_from(PageConfig::default()).expect("default config must serialize")
}

/// Recursively merge `overlay` on top of `base`.
///
/// - Tables are merged key-by-key (overlay keys override base keys).
/// - Non-table values in overlay replace base values entirely, so an
///   overriding `images` or `listing.reviews` array replaces the stock list.
/// - Keys in base that are not in overlay are preserved.
pub fn merge_toml(base: toml::Value, overlay: toml::Value) -> toml::Value {
    match (base, overlay) {
        (toml::Value::Table(mut base_table), toml::Value::Table(overlay_table)) => {
            for (key, overlay_val) in overlay_table {
                let merged = match base_table.remove(&key) {
                    Some(base_val) => merge_toml(base_val, overlay_val),
                    None => overlay_val,
                };
                base_table.insert(key, merged);
            }
            toml::Value::Table(base_table)
        }
        (_, overlay) => overlay,
    }
}

/// Load `config.toml` from a directory as a raw TOML value.
///
/// Returns `Ok(None)` if no `config.toml` exists in the directory.
pub fn load_raw_config(path: &Path) -> Result<Option<toml::Value>, ConfigError> {
    let config_path = path.join("config.toml");
    if !config_path.exists() {
        return Ok(None);
    }
    let content = fs::read_to_string(&config_path)?;
    let value: toml::Value = toml::from_str(&content)?;
    Ok(Some(value))
}

/// Merge an optional overlay onto a base value, then deserialize and validate.
pub fn resolve_config(
    base: toml::Value,
    overlay: Option<toml::Value>,
) -> Result<PageConfig, ConfigError> {
    let merged = match overlay {
        Some(ov) => merge_toml(base, ov),
        None => base,
    };
    let config: PageConfig = merged.try_into()?;
    config.validate()?;
    Ok(config)
}

/// Load config from `config.toml` in the given directory.
///
/// Merges user values on top of stock defaults, rejects unknown keys,
/// and validates the result.
pub fn load_config(root: &Path) -> Result<PageConfig, ConfigError> {
    let base = stock_defaults_value();
    let overlay = load_raw_config(root)?;
    resolve_config(base, overlay)
}

/// Returns a fully-commented stock `config.toml` with all keys and explanations.
///
/// Used by the `gen-config` CLI command.
pub fn stock_config_toml() -> &'static str {
    r##"# Property View Configuration
# ===========================
# All settings are optional. Remove or comment out any you don't need.
# Values shown below are the defaults (the Skyline Vista demo listing).
# Unknown keys will cause an error.

# URL segment of the property page: /property/<slug>/
slug = "skyline-vista"

# Ordered photo set. The first 5 are shown inline; the rest are reachable
# from the lightbox and counted in the "+ N photos" badge.
images = [
    "https://images.unsplash.com/photo-1505692794403-34d4982a86e8?q=80&w=1600&auto=format&fit=crop",
    "https://images.unsplash.com/photo-1494526585095-c41746248156?q=80&w=1600&auto=format&fit=crop",
    "https://images.unsplash.com/photo-1564013799919-ab600027ffc6?q=80&w=1600&auto=format&fit=crop",
    "https://images.unsplash.com/photo-1560185127-6ed189bf02f4?q=80&w=1600&auto=format&fit=crop",
    "https://images.unsplash.com/photo-1501183638710-841dd1904471?q=80&w=1600&auto=format&fit=crop",
    "https://images.unsplash.com/photo-1501045661006-fcebe0257c3f?q=80&w=1600&auto=format&fit=crop",
    "https://images.unsplash.com/photo-1616594039964-ae9021a400a0?q=80&w=1600&auto=format&fit=crop",
    "https://images.unsplash.com/photo-1522708323590-d24dbb6b0267?q=80&w=1600&auto=format&fit=crop",
]

# ---------------------------------------------------------------------------
# Listing copy
# ---------------------------------------------------------------------------
[listing]
name = "Skyline Vista Apartments"
location = "Midtown, New York • 2.1 km from Central Park"
# Ratings are out of 5; halves are shown as half stars.
rating = 4.6
review_count = 238
highlights = ["3 Bedrooms", "2 Bathrooms", "1,450 sq ft", "Floor 18", "City View", "Pet Friendly"]
# Markdown is supported.
description = "Experience modern living with floor-to-ceiling windows, an open-concept kitchen with marble countertops, and smart-home automation throughout. The building includes a rooftop pool, fitness center, and 24/7 concierge."

[listing.editorial]
rating = 4.8
quote = "A rare blend of location, design, and amenities. Perfect for urban professionals who value both style and convenience."

# Tenant reviews. Setting this list replaces the defaults entirely.
[[listing.reviews]]
name = "Emily R."
rating = 5.0
text = "Loved the view and the building staff is incredibly helpful."

[[listing.reviews]]
name = "Marcus L."
rating = 4.0
text = "Great gym and pool. Elevators can be busy during rush hours."

[[listing.reviews]]
name = "Priya S."
rating = 4.5
text = "Apartments are bright and well insulated. Noise is minimal."

# Walkthrough video. An empty embed_url hides the section.
[listing.video]
embed_url = "https://www.youtube.com/embed/dQw4w9WgXcQ?rel=0&modestbranding=1"
caption = "Watch a short walkthrough of the apartment and amenities."

[listing.pricing]
amount = "$4,250"
period = "month"
terms = "Utilities not included • 12-month lease"
perks = ["No broker fee", "1 month free", "Furnished", "Parking optional"]

# Map embed. An empty embed_url hides the section.
[listing.map]
embed_url = "https://www.google.com/maps/embed?pb=!1m18!1m12!1m3!1d3021.9428219362323!2d-73.98773122366027!3d40.74844053510043!2m3!1f0!2f0!3f0!3m2!1i1024!2i768!4f13.1!3m3!1m2!1s0x89c259ae30c9b1b5%3A0x3f518d42e4d9d8f!2sEmpire%20State%20Building!5e0!3m2!1sen!2sus!4v1700000000000"
open_url = "https://www.google.com/maps?q=40.748817,-73.985428"

[listing.footer]
brand = "Skyline"
tagline = "Modern homes curated for city living. Crafted with care."

[[listing.footer.columns]]
heading = "Explore"
links = ["Apartments", "Townhomes", "Penthouses"]

[[listing.footer.columns]]
heading = "Company"
links = ["About", "Careers", "Contact"]

[[listing.footer.columns]]
heading = "Legal"
links = ["Privacy", "Terms", "Cookies"]

# ---------------------------------------------------------------------------
# Colors - Light mode (prefers-color-scheme: light)
# ---------------------------------------------------------------------------
[colors.light]
background = "#ffffff"
text = "#111827"
text_muted = "#4b5563"    # Location line, review text, footer
border = "#e5e7eb"
accent = "#2563eb"        # Buttons
accent_hover = "#1d4ed8"

# ---------------------------------------------------------------------------
# Colors - Dark mode (prefers-color-scheme: dark)
# ---------------------------------------------------------------------------
[colors.dark]
background = "#0b0f19"
text = "#f3f4f6"
text_muted = "#9ca3af"
border = "#374151"
accent = "#3b82f6"
accent_hover = "#60a5fa"

# ---------------------------------------------------------------------------
# Enter animations
# ---------------------------------------------------------------------------
[motion]
# Seconds for each section to fade and slide in.
duration = 0.6
# Seconds for the hero card.
hero_duration = 0.8
# CSS easing curve.
easing = "ease-out"
# Vertical offset sections enter from.
offset_y = "20px"
# Delay in seconds between consecutive review cards.
stagger = 0.05
"##
}

/// Generate CSS custom properties from color config.
pub fn generate_color_css(colors: &ColorConfig) -> String {
    format!(
        r#":root {{
    --color-bg: {light_bg};
    --color-text: {light_text};
    --color-text-muted: {light_text_muted};
    --color-border: {light_border};
    --color-accent: {light_accent};
    --color-accent-hover: {light_accent_hover};
}}

@media (prefers-color-scheme: dark) {{
    :root {{
        --color-bg: {dark_bg};
        --color-text: {dark_text};
        --color-text-muted: {dark_text_muted};
        --color-border: {dark_border};
        --color-accent: {dark_accent};
        --color-accent-hover: {dark_accent_hover};
    }}
}}"#,
        light_bg = colors.light.background,
        light_text = colors.light.text,
        light_text_muted = colors.light.text_muted,
        light_border = colors.light.border,
        light_accent = colors.light.accent,
        light_accent_hover = colors.light.accent_hover,
        dark_bg = colors.dark.background,
        dark_text = colors.dark.text,
        dark_text_muted = colors.dark.text_muted,
        dark_border = colors.dark.border,
        dark_accent = colors.dark.accent,
        dark_accent_hover = colors.dark.accent_hover,
    )
}

/// Generate CSS custom properties from motion config.
pub fn generate_motion_css(motion: &MotionConfig) -> String {
    format!(
        r#":root {{
    --motion-duration: {duration}s;
    --motion-hero-duration: {hero_duration}s;
    --motion-easing: {easing};
    --motion-offset-y: {offset_y};
    --motion-stagger: {stagger}s;
}}"#,
        duration = motion.duration,
        hero_duration = motion.hero_duration,
        easing = motion.easing,
        offset_y = motion.offset_y,
        stagger = motion.stagger,
    )
}
