use crate::error::{BrewError, Result};
use crate::store::ShopOrdering;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

const CONFIG_FILENAME: &str = "config.json";

pub const KEY_DEFAULT_DATE_TODAY: &str = "default-date-today";
pub const KEY_SHOP_ORDER: &str = "shop-order";
pub const KEYS: [&str; 2] = [KEY_DEFAULT_DATE_TODAY, KEY_SHOP_ORDER];

/// Configuration for brewlog, stored in `<data_dir>/config.json`
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct BrewConfig {
    /// Fill in today's date when a new order has no date tried
    #[serde(default = "default_date_today")]
    pub default_date_today: bool,

    /// How the shop list is sorted
    #[serde(default)]
    pub shop_order: ShopOrdering,
}

fn default_date_today() -> bool {
    true
}

impl Default for BrewConfig {
    fn default() -> Self {
        Self {
            default_date_today: default_date_today(),
            shop_order: ShopOrdering::default(),
        }
    }
}

impl BrewConfig {
    /// Load config from the given directory, or return defaults if not found
    pub fn load<P: AsRef<Path>>(config_dir: P) -> Result<Self> {
        let config_path = config_dir.as_ref().join(CONFIG_FILENAME);

        if !config_path.exists() {
            return Ok(Self::default());
        }

        let content = fs::read_to_string(&config_path).map_err(BrewError::Io)?;
        let config: BrewConfig = serde_json::from_str(&content).map_err(|e| {
            BrewError::Config(format!("{}: {}", config_path.display(), e))
        })?;
        Ok(config)
    }

    /// Save config to the given directory
    pub fn save<P: AsRef<Path>>(&self, config_dir: P) -> Result<()> {
        let config_dir = config_dir.as_ref();

        if !config_dir.exists() {
            fs::create_dir_all(config_dir).map_err(BrewError::Io)?;
        }

        let config_path = config_dir.join(CONFIG_FILENAME);
        let content = serde_json::to_string_pretty(self).map_err(BrewError::Serialization)?;
        fs::write(config_path, content).map_err(BrewError::Io)?;
        Ok(())
    }

    pub fn get(&self, key: &str) -> Option<String> {
        match key {
            KEY_DEFAULT_DATE_TODAY => Some(self.default_date_today.to_string()),
            KEY_SHOP_ORDER => Some(self.shop_order.to_string()),
            _ => None,
        }
    }

    pub fn set(&mut self, key: &str, value: &str) -> std::result::Result<(), String> {
        match key {
            KEY_DEFAULT_DATE_TODAY => {
                self.default_date_today = parse_bool(value)
                    .ok_or_else(|| format!("{} expects true or false, got '{}'", key, value))?;
                Ok(())
            }
            KEY_SHOP_ORDER => {
                self.shop_order = value.parse()?;
                Ok(())
            }
            _ => Err(format!("Unknown config key: {}", key)),
        }
    }

    /// All keys with their current values, in display order.
    pub fn entries(&self) -> Vec<(&'static str, String)> {
        KEYS.iter()
            .filter_map(|key| self.get(key).map(|value| (*key, value)))
            .collect()
    }
}

fn parse_bool(value: &str) -> Option<bool> {
    match value.trim().to_ascii_lowercase().as_str() {
        "true" | "yes" | "on" | "1" => Some(true),
        "false" | "no" | "off" | "0" => Some(false),
        _ => None,
    }
}
