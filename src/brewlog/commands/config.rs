use crate::commands::{CmdMessage, CmdResult};
use crate::config::BrewConfig;
use crate::error::{BrewError, Result};
use std::path::Path;
use tracing::warn;

#[derive(Debug, Clone)]
pub enum ConfigAction {
    ShowAll,
    ShowKey(String),
    Set(String, String),
}

pub fn run(data_dir: &Path, action: ConfigAction) -> Result<CmdResult> {
    match action {
        ConfigAction::ShowAll => {
            let config = BrewConfig::load(data_dir)?;
            Ok(CmdResult::default().with_config(config))
        }
        ConfigAction::ShowKey(key) => {
            let config = BrewConfig::load(data_dir)?;
            let mut result = CmdResult::default();
            match config.get(&key) {
                Some(val) => result.add_message(CmdMessage::info(val)),
                None => {
                    result.add_message(CmdMessage::error(format!("Unknown config key: {}", key)))
                }
            }
            Ok(result)
        }
        ConfigAction::Set(key, value) => {
            let mut result = CmdResult::default();
            // Setting a key is how an unreadable file gets repaired, so start
            // over from defaults instead of failing.
            let mut config = match BrewConfig::load(data_dir) {
                Ok(config) => config,
                Err(BrewError::Config(reason)) => {
                    warn!(%reason, "replacing unreadable config");
                    result.add_message(CmdMessage::warning(
                        "config.json was unreadable; other keys were reset to defaults",
                    ));
                    BrewConfig::default()
                }
                Err(e) => return Err(e),
            };
            if let Err(e) = config.set(&key, &value) {
                let mut res = CmdResult::default();
                res.add_message(CmdMessage::error(e));
                return Ok(res);
            }
            config.save(data_dir)?;
            let display_val = config.get(&key).unwrap_or(value);
            result.add_message(CmdMessage::success(format!(
                "{} set to {}",
                key, display_val
            )));
            Ok(result.with_config(config))
        }
    }
}
