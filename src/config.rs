// Copyright (c) AlphaVelocity.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use anyhow::{Context, Result};
use directories::ProjectDirs;
use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

static APP: Lazy<(&str, &str, &str)> =
    Lazy::new(|| ("com.alphavelocity", "Eventclip", "eventclip"));

pub const DEFAULT_API_URL: &str = "http://localhost:3000/api";
pub const API_URL_ENV: &str = "EVENTCLIP_API_URL";

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub api_url: Option<String>,
}

pub fn config_path() -> Result<PathBuf> {
    let proj = ProjectDirs::from(APP.0, APP.1, APP.2)
        .context("Could not determine platform-specific config dir")?;
    let dir = proj.config_dir();
    fs::create_dir_all(dir).context("Failed to create config dir")?;
    Ok(dir.join("config.json"))
}

pub fn load_from(path: &Path) -> Result<Config> {
    if !path.exists() {
        return Ok(Config::default());
    }
    let raw = fs::read_to_string(path)
        .with_context(|| format!("Read config at {}", path.display()))?;
    serde_json::from_str(&raw).with_context(|| format!("Parse config at {}", path.display()))
}

pub fn save_to(path: &Path, cfg: &Config) -> Result<()> {
    fs::write(path, serde_json::to_string_pretty(cfg)?)
        .with_context(|| format!("Write config at {}", path.display()))
}

pub fn load() -> Result<Config> {
    load_from(&config_path()?)
}

pub fn save(cfg: &Config) -> Result<()> {
    save_to(&config_path()?, cfg)
}

/// Env override wins, then the config file, then the compiled-in default.
pub fn resolve_api_url(env_value: Option<String>, cfg: &Config) -> String {
    env_value
        .filter(|s| !s.trim().is_empty())
        .or_else(|| cfg.api_url.clone())
        .unwrap_or_else(|| DEFAULT_API_URL.to_string())
}

pub fn api_url() -> Result<String> {
    let cfg = load()?;
    Ok(resolve_api_url(std::env::var(API_URL_ENV).ok(), &cfg))
}
