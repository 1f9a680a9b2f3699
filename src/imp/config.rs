use anyhow::{Context, Result};
use lazy_static::lazy_static;
use serde_derive::Deserialize;
use std::fs;
use std::path::PathBuf;

lazy_static! {
    pub static ref CONFIG: ConfigFile = ConfigFile::get_config().expect(concat!(
        "critical error: failed to get the config;",
        " Make sure you get config once before using CONFIG",
        " and handle errors earlier"
    ));
}

#[derive(Deserialize, Default)]
pub struct ConfigFile {
    #[serde(default)]
    pub bundle: Bundle,
}

#[derive(Deserialize)]
pub struct Bundle {
    #[serde(default = "Bundle::default_delimiter")]
    pub delimiter: char,
    #[serde(default = "Bundle::default_minify")]
    pub minify: bool,
    #[serde(default = "Bundle::default_path")]
    pub path: String,
}

impl ConfigFile {
    pub fn get_config() -> Result<ConfigFile> {
        let config_path = config_dir().join("config.toml");

        let content = match fs::read_to_string(&config_path) {
            Ok(content) => content,
            Err(_) => return Ok(ConfigFile::default()),
        };

        toml::from_str(&content).context("error in config file")
    }
}

impl Default for Bundle {
    fn default() -> Self {
        Bundle {
            delimiter: Bundle::default_delimiter(),
            minify: Bundle::default_minify(),
            path: Bundle::default_path(),
        }
    }
}

impl Bundle {
    fn default_delimiter() -> char {
        ';'
    }

    fn default_minify() -> bool {
        false
    }

    fn default_path() -> String {
        String::new()
    }
}

pub fn config_dir() -> PathBuf {
    dirs::config_dir().unwrap().join("jsrequire")
}
