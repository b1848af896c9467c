//! # Storefront Configuration
//!
//! ## Configuration Sources
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Configuration Priority                               │
//! │                                                                         │
//! │  1. Environment Variables (highest priority)                           │
//! │     ONLYPETS_PET_COUNT=20                                              │
//! │     ONLYPETS_TOAST_TTL_SECS=5                                          │
//! │                                                                         │
//! │  2. TOML Config File                                                   │
//! │     ~/.config/onlypets-storefront/storefront.toml (Linux)              │
//! │                                                                         │
//! │  3. Default Values (lowest priority)                                   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Configuration File Format
//! ```toml
//! [catalog]
//! pet_count = 12
//! booking_seed_offset_days = 5
//! simulated_latency_ms = 0
//!
//! [toasts]
//! ttl_secs = 5        # omit to keep toasts until dismissed
//!
//! [display]
//! image_base_url = "https://images.unsplash.com"
//! currency_symbol = "₹"
//! ```

use serde::{Deserialize, Serialize};
use std::path::PathBuf;
use std::time::Duration;
use tracing::{debug, info, warn};

use onlypets_core::images::DEFAULT_IMAGE_BASE_URL;
use onlypets_core::{DEFAULT_BOOKING_SEED_OFFSET_DAYS, MAX_BOOKING_SEED_OFFSET_DAYS};

use crate::error::{StoreError, StoreResult};
use crate::store::MAX_TOAST_TTL_SECS;

// =============================================================================
// Catalog Settings
// =============================================================================

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CatalogSettings {
    /// Number of pets the generated source produces.
    #[serde(default = "default_pet_count")]
    pub pet_count: usize,

    /// Days after today for the seeded conflict booking.
    #[serde(default = "default_booking_offset")]
    pub booking_seed_offset_days: i64,

    /// Artificial delay before the generated source answers.
    #[serde(default)]
    pub simulated_latency_ms: u64,
}

fn default_pet_count() -> usize {
    12
}

fn default_booking_offset() -> i64 {
    DEFAULT_BOOKING_SEED_OFFSET_DAYS
}

impl Default for CatalogSettings {
    fn default() -> Self {
        CatalogSettings {
            pet_count: default_pet_count(),
            booking_seed_offset_days: default_booking_offset(),
            simulated_latency_ms: 0,
        }
    }
}

// =============================================================================
// Toast Settings
// =============================================================================

/// Toast lifecycle settings.
///
/// `ttl_secs = None` keeps toasts until they are removed explicitly.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ToastSettings {
    #[serde(default)]
    pub ttl_secs: Option<u64>,
}

// =============================================================================
// Display Settings
// =============================================================================

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DisplaySettings {
    #[serde(default = "default_image_base_url")]
    pub image_base_url: String,

    #[serde(default = "default_currency_symbol")]
    pub currency_symbol: String,
}

fn default_image_base_url() -> String {
    DEFAULT_IMAGE_BASE_URL.to_string()
}

fn default_currency_symbol() -> String {
    "₹".to_string()
}

impl Default for DisplaySettings {
    fn default() -> Self {
        DisplaySettings {
            image_base_url: default_image_base_url(),
            currency_symbol: default_currency_symbol(),
        }
    }
}

// =============================================================================
// Main Configuration
// =============================================================================

/// Complete storefront configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct StorefrontConfig {
    #[serde(default)]
    pub catalog: CatalogSettings,

    #[serde(default)]
    pub toasts: ToastSettings,

    #[serde(default)]
    pub display: DisplaySettings,
}

impl StorefrontConfig {
    /// Loads configuration from file, environment, and defaults.
    ///
    /// ## Load Order (later overrides earlier)
    /// 1. Default values
    /// 2. Config file (storefront.toml)
    /// 3. Environment variables
    pub fn load(config_path: Option<PathBuf>) -> StoreResult<Self> {
        Self::load_with_env(config_path, |key| std::env::var(key).ok())
    }

    /// Like [`StorefrontConfig::load`], reading overrides through `env`
    /// instead of the process environment.
    pub fn load_with_env(
        config_path: Option<PathBuf>,
        env: impl Fn(&str) -> Option<String>,
    ) -> StoreResult<Self> {
        let mut config = Self::default();

        if let Some(path) = config_path.or_else(Self::default_config_path) {
            if path.exists() {
                info!(?path, "Loading storefront config from file");
                let contents = std::fs::read_to_string(&path)?;
                config = toml::from_str(&contents)?;
            } else {
                debug!(?path, "Config file not found, using defaults");
            }
        }

        config.apply_env_overrides(env);
        config.validate()?;

        Ok(config)
    }

    /// Loads config or returns default if load fails.
    pub fn load_or_default(config_path: Option<PathBuf>) -> Self {
        Self::load(config_path).unwrap_or_else(|e| {
            warn!("Failed to load storefront config: {}. Using defaults.", e);
            Self::default()
        })
    }

    /// Saves configuration to file.
    pub fn save(&self, config_path: Option<PathBuf>) -> StoreResult<()> {
        let path = config_path
            .or_else(Self::default_config_path)
            .ok_or_else(|| StoreError::ConfigSaveFailed("No config path available".into()))?;

        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)
                .map_err(|e| StoreError::ConfigSaveFailed(e.to_string()))?;
        }

        let contents = toml::to_string_pretty(self)?;
        std::fs::write(&path, contents).map_err(|e| StoreError::ConfigSaveFailed(e.to_string()))?;

        info!(?path, "Storefront config saved");
        Ok(())
    }

    pub fn validate(&self) -> StoreResult<()> {
        if self.catalog.pet_count == 0 {
            return Err(StoreError::InvalidConfig(
                "pet_count must be greater than 0".into(),
            ));
        }

        if self.catalog.booking_seed_offset_days < 0 {
            return Err(StoreError::InvalidConfig(
                "booking_seed_offset_days cannot be negative".into(),
            ));
        }

        if self.catalog.booking_seed_offset_days > MAX_BOOKING_SEED_OFFSET_DAYS {
            return Err(StoreError::InvalidConfig(format!(
                "booking_seed_offset_days cannot exceed {}, got: {}",
                MAX_BOOKING_SEED_OFFSET_DAYS, self.catalog.booking_seed_offset_days
            )));
        }

        if self.toasts.ttl_secs == Some(0) {
            return Err(StoreError::InvalidConfig(
                "toast ttl_secs must be greater than 0 (omit it to disable expiry)".into(),
            ));
        }

        if let Some(ttl) = self.toasts.ttl_secs.filter(|&t| t > MAX_TOAST_TTL_SECS) {
            return Err(StoreError::InvalidConfig(format!(
                "toast ttl_secs cannot exceed {} seconds, got: {}",
                MAX_TOAST_TTL_SECS, ttl
            )));
        }

        let url = self.display.image_base_url.trim();
        if !url.starts_with("http://") && !url.starts_with("https://") {
            return Err(StoreError::InvalidConfig(format!(
                "image_base_url must start with http:// or https://, got: '{}'",
                url
            )));
        }

        Ok(())
    }

    fn apply_env_overrides(&mut self, env: impl Fn(&str) -> Option<String>) {
        if let Some(count) = env("ONLYPETS_PET_COUNT") {
            match count.parse::<usize>() {
                Ok(n) => {
                    debug!(pet_count = n, "Overriding pet count from environment");
                    self.catalog.pet_count = n;
                }
                Err(_) => warn!(value = %count, "Ignoring non-numeric ONLYPETS_PET_COUNT"),
            }
        }

        if let Some(days) = env("ONLYPETS_BOOKING_OFFSET_DAYS") {
            if let Ok(d) = days.parse::<i64>() {
                self.catalog.booking_seed_offset_days = d;
            }
        }

        if let Some(ms) = env("ONLYPETS_SIMULATED_LATENCY_MS") {
            if let Ok(ms) = ms.parse::<u64>() {
                self.catalog.simulated_latency_ms = ms;
            }
        }

        if let Some(ttl) = env("ONLYPETS_TOAST_TTL_SECS") {
            match ttl.to_lowercase().as_str() {
                "" | "none" | "off" => self.toasts.ttl_secs = None,
                other => {
                    if let Ok(secs) = other.parse::<u64>() {
                        debug!(ttl_secs = secs, "Overriding toast TTL from environment");
                        self.toasts.ttl_secs = Some(secs);
                    }
                }
            }
        }

        if let Some(url) = env("ONLYPETS_IMAGE_BASE_URL") {
            self.display.image_base_url = url;
        }

        if let Some(symbol) = env("ONLYPETS_CURRENCY_SYMBOL") {
            self.display.currency_symbol = symbol;
        }
    }

    fn default_config_path() -> Option<PathBuf> {
        directories::ProjectDirs::from("com", "onlypets", "storefront")
            .map(|dirs| dirs.config_dir().join("storefront.toml"))
    }

    // =========================================================================
    // Convenience Methods
    // =========================================================================

    pub fn toast_ttl(&self) -> Option<Duration> {
        self.toasts.ttl_secs.map(Duration::from_secs)
    }

    pub fn simulated_latency(&self) -> Option<Duration> {
        match self.catalog.simulated_latency_ms {
            0 => None,
            ms => Some(Duration::from_millis(ms)),
        }
    }
}
