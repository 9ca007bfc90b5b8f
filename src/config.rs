//! Gallery configuration module.
//!
//! Handles loading, validating, and merging the `gallery.toml` file at the
//! gallery root. Stock defaults are overridden by whatever keys the user
//! config provides; everything else keeps its default.
//!
//! ## Config File Location
//!
//! Place `gallery.toml` next to the album folders:
//!
//! ```text
//! gallery/
//! ├── gallery.toml             # Optional, defaults apply without it
//! ├── 010-Landscapes/
//! │   └── ...
//! └── 020-Travel/
//!     ├── 010-Japan/
//!     └── 020-Italy/
//! ```
//!
//! ## Configuration Options
//!
//! ```toml
//! # All options are optional - defaults shown below
//!
//! [thumbnails]
//! width = 150               # Cropped album/image thumbnail width (px)
//! height = 115              # Cropped album/image thumbnail height (px)
//!
//! [previews]
//! max_size = 800            # Longest edge of zoomed preview images (px)
//!
//! [listing]
//! albums_per_page = 16      # Albums shown per gallery page
//! images_per_page = 12      # Images shown per album page
//! sort_option = 1           # 1: filename, 2: created, 3: last edited, 4: EXIF date
//! sort_order = 1            # 1: ascending, 2: descending
//!
//! [display]
//! show_breadcrumbs = true   # Breadcrumb trail above listings
//!
//! [processing]
//! max_processes = 4         # Max parallel workers (omit for auto = CPU cores)
//! ```
//!
//! ## Partial Configuration
//!
//! Config files are sparse; override just the values you want:
//!
//! ```toml
//! # Only override the image page size
//! [listing]
//! images_per_page = 24
//! ```
//!
//! Unknown keys are rejected to catch typos early. Out-of-range sort codes
//! are *not* rejected: they decode to the first option at the point of use,
//! so a stale config keeps producing listings instead of failing.

use crate::listing::{SortKey, SortOrder};
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

/// Name of the config file looked up in the gallery root.
pub const CONFIG_FILENAME: &str = "gallery.toml";

/// Gallery configuration loaded from `gallery.toml`.
///
/// All fields have sensible defaults. User config files need only specify
/// the values they want to override. Unknown keys are rejected.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct GalleryConfig {
    /// Cropped thumbnail dimensions.
    pub thumbnails: ThumbnailsConfig,
    /// Zoomed preview settings.
    pub previews: PreviewsConfig,
    /// Listing sort and pagination settings.
    pub listing: ListingConfig,
    /// Presentation toggles.
    pub display: DisplayConfig,
    /// Parallel processing settings.
    pub processing: ProcessingConfig,
}

impl Default for GalleryConfig {
    fn default() -> Self {
        Self {
            thumbnails: ThumbnailsConfig::default(),
            previews: PreviewsConfig::default(),
            listing: ListingConfig::default(),
            display: DisplayConfig::default(),
            processing: ProcessingConfig::default(),
        }
    }
}

impl GalleryConfig {
    /// Validate config values are within acceptable ranges.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.thumbnails.width == 0 || self.thumbnails.height == 0 {
            return Err(ConfigError::Validation(
                "thumbnails.width and thumbnails.height must be non-zero".into(),
            ));
        }
        if self.previews.max_size == 0 {
            return Err(ConfigError::Validation(
                "previews.max_size must be non-zero".into(),
            ));
        }
        if self.listing.albums_per_page == 0 {
            return Err(ConfigError::Validation(
                "listing.albums_per_page must be non-zero".into(),
            ));
        }
        if self.listing.images_per_page == 0 {
            return Err(ConfigError::Validation(
                "listing.images_per_page must be non-zero".into(),
            ));
        }
        Ok(())
    }

    /// Decoded sort key for listings. Unknown codes fall back to filename.
    pub fn sort_key(&self) -> SortKey {
        SortKey::from_code(self.listing.sort_option)
    }

    /// Decoded sort direction for listings. Unknown codes fall back to ascending.
    pub fn sort_direction(&self) -> SortOrder {
        SortOrder::from_code(self.listing.sort_order)
    }

    /// Thumbnail box as `(width, height)`.
    pub fn thumbnail_size(&self) -> (u32, u32) {
        (self.thumbnails.width, self.thumbnails.height)
    }

    /// Longest edge of zoomed previews.
    pub fn preview_max_size(&self) -> u32 {
        self.previews.max_size
    }

    pub fn albums_per_page(&self) -> usize {
        self.listing.albums_per_page
    }

    pub fn images_per_page(&self) -> usize {
        self.listing.images_per_page
    }

    pub fn show_breadcrumbs(&self) -> bool {
        self.display.show_breadcrumbs
    }
}

/// Cropped thumbnail dimensions.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ThumbnailsConfig {
    /// Thumbnail width in pixels.
    pub width: u32,
    /// Thumbnail height in pixels.
    pub height: u32,
}

impl Default for ThumbnailsConfig {
    fn default() -> Self {
        Self {
            width: 150,
            height: 115,
        }
    }
}

/// Zoomed preview settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct PreviewsConfig {
    /// Longest edge in pixels. Previews keep their aspect ratio and are
    /// bounded by a `max_size` × `max_size` box; smaller images pass through.
    pub max_size: u32,
}

impl Default for PreviewsConfig {
    fn default() -> Self {
        Self { max_size: 800 }
    }
}

/// Listing sort and pagination settings.
///
/// Sort options are numeric codes so configs written for earlier releases
/// keep working. Codes outside the known range decode to the first option
/// (filename ascending) rather than erroring.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ListingConfig {
    /// Albums shown per gallery page.
    pub albums_per_page: usize,
    /// Images shown per album page.
    pub images_per_page: usize,
    /// Sort key code: 1 filename, 2 created, 3 last edited, 4 EXIF date.
    pub sort_option: u32,
    /// Sort direction code: 1 ascending, 2 descending.
    pub sort_order: u32,
}

impl Default for ListingConfig {
    fn default() -> Self {
        Self {
            albums_per_page: 16,
            images_per_page: 12,
            sort_option: 1,
            sort_order: 1,
        }
    }
}

/// Presentation toggles.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct DisplayConfig {
    /// Whether listings carry a breadcrumb trail.
    pub show_breadcrumbs: bool,
}

impl Default for DisplayConfig {
    fn default() -> Self {
        Self {
            show_breadcrumbs: true,
        }
    }
}

/// Parallel processing settings.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ProcessingConfig {
    /// Maximum number of parallel metadata refresh workers.
    /// When absent or null, defaults to the number of CPU cores.
    /// Values larger than the core count are clamped down.
    pub max_processes: Option<usize>,
}

/// Resolve the effective thread count from config.
///
/// - `None` → use all available cores
/// - `Some(n)` → use `min(n, cores)` (user can constrain down, not up)
pub fn effective_threads(config: &ProcessingConfig) -> usize {
    let cores = std::thread::available_parallelism()
        .map(|n| n.get())
        .unwrap_or(1);
    config.max_processes.map(|n| n.min(cores)).unwrap_or(cores)
}

// =============================================================================
// Config loading, merging, and validation
// =============================================================================

/// Returns the stock default config as a `toml::Value::Table`.
///
/// This is the canonical representation of all default values, used as the
/// base layer for merging user overrides on top.
pub fn stock_defaults_value() -> toml::Value {
    toml::Value::try_from(GalleryConfig::default()).expect("default config must serialize")
}

/// Recursively merge `overlay` on top of `base`.
///
/// - Tables are merged key-by-key (overlay keys override base keys).
/// - Non-table values in overlay replace base values entirely.
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

/// Load a `gallery.toml` from a directory as a raw TOML value.
///
/// Returns `Ok(None)` if no `gallery.toml` exists in the directory.
/// Returns `Err` if the file exists but contains invalid TOML.
pub fn load_raw_config(path: &Path) -> Result<Option<toml::Value>, ConfigError> {
    let config_path = path.join(CONFIG_FILENAME);
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
) -> Result<GalleryConfig, ConfigError> {
    let merged = match overlay {
        Some(ov) => merge_toml(base, ov),
        None => base,
    };
    let config: GalleryConfig = merged.try_into()?;
    config.validate()?;
    Ok(config)
}

/// Load config from `gallery.toml` in the given directory.
///
/// Merges user values on top of stock defaults, rejects unknown keys,
/// and validates the result.
pub fn load_config(root: &Path) -> Result<GalleryConfig, ConfigError> {
    let base = stock_defaults_value();
    let overlay = load_raw_config(root)?;
    resolve_config(base, overlay)
}

/// Returns a fully-commented stock `gallery.toml` with all keys and explanations.
///
/// Used by the `gen-config` CLI command.
pub fn stock_config_toml() -> &'static str {
    r##"# Folder Gallery Configuration
# ============================
# All settings are optional. Remove or comment out any you don't need.
# Values shown below are the defaults.
#
# Place this file in the gallery root, next to the album folders.
# Unknown keys will cause an error.

# ---------------------------------------------------------------------------
# Thumbnails
# ---------------------------------------------------------------------------
[thumbnails]
# Cropped thumbnail dimensions in pixels. Thumbnails are center-cropped to
# exactly this box in album and image grids.
width = 150
height = 115

# ---------------------------------------------------------------------------
# Previews
# ---------------------------------------------------------------------------
[previews]
# Longest edge of zoomed preview images in pixels. Previews keep their
# aspect ratio; images already smaller than this pass through unscaled.
max_size = 800

# ---------------------------------------------------------------------------
# Listings
# ---------------------------------------------------------------------------
[listing]
# Albums shown per gallery page.
albums_per_page = 16

# Images shown per album page.
images_per_page = 12

# Image sort key:
#   1 = filename
#   2 = file creation date
#   3 = file modification date
#   4 = EXIF capture date (falls back to creation date per image)
# Unknown codes fall back to 1.
sort_option = 1

# Sort direction: 1 = ascending, 2 = descending. Unknown codes fall back to 1.
sort_order = 1

# ---------------------------------------------------------------------------
# Display
# ---------------------------------------------------------------------------
[display]
# Show the breadcrumb trail above album and image listings.
show_breadcrumbs = true

# ---------------------------------------------------------------------------
# Processing
# ---------------------------------------------------------------------------
[processing]
# Maximum parallel metadata-refresh workers.
# Omit or comment out to auto-detect (= number of CPU cores).
# max_processes = 4
"##
}
