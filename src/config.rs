//! 配置加载
//!
//! 配置文件为 TOML 格式，默认位于 `<config_dir>/jotlist/config.toml`。
//! 文件不存在时使用默认值。

use std::fs;
use std::path::{Path, PathBuf};

use ratatui::style::Color;
use serde::Deserialize;

use crate::error::ConfigError;

/// 获取默认配置文件路径 (~/.config/jotlist/config.toml)
pub fn default_config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|dir| dir.join("jotlist").join("config.toml"))
}

/// TOML 文件结构
#[derive(Debug, Clone, Deserialize, Default)]
#[serde(default)]
struct ConfigFile {
    title: Option<String>,
    log_file: Option<PathBuf>,
    theme: ThemeFile,
}

#[derive(Debug, Clone, Deserialize, Default)]
#[serde(default)]
struct ThemeFile {
    background: Option<String>,
    text: Option<String>,
    accent: Option<String>,
    danger: Option<String>,
    muted: Option<String>,
}

/// 运行时配置
#[derive(Debug, Clone, PartialEq)]
pub struct Config {
    pub title: String,
    pub log_file: Option<PathBuf>,
    pub theme: Theme,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            title: "Items".to_string(),
            log_file: None,
            theme: Theme::default(),
        }
    }
}

/// 界面配色
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Theme {
    pub background: Color,
    pub text: Color,
    pub accent: Color,
    pub danger: Color,
    pub muted: Color,
}

impl Default for Theme {
    fn default() -> Self {
        Self {
            background: Color::Rgb(0x30, 0x30, 0x30),
            text: Color::White,
            accent: Color::Rgb(0xFF, 0x69, 0x61),
            danger: Color::Rgb(0xFF, 0x69, 0x61),
            muted: Color::Gray,
        }
    }
}

fn parse_color(key: &'static str, value: Option<String>, fallback: Color) -> Result<Color, ConfigError> {
    match value {
        None => Ok(fallback),
        Some(value) => value
            .parse::<Color>()
            .map_err(|_| ConfigError::InvalidColor { key, value }),
    }
}

impl Theme {
    fn from_file(file: ThemeFile) -> Result<Self, ConfigError> {
        let defaults = Self::default();
        Ok(Self {
            background: parse_color("background", file.background, defaults.background)?,
            text: parse_color("text", file.text, defaults.text)?,
            accent: parse_color("accent", file.accent, defaults.accent)?,
            danger: parse_color("danger", file.danger, defaults.danger)?,
            muted: parse_color("muted", file.muted, defaults.muted)?,
        })
    }
}

impl Config {
    /// 从 TOML 字符串解析
    pub fn from_toml(content: &str, path: &Path) -> Result<Self, ConfigError> {
        let file: ConfigFile = toml::from_str(content).map_err(|source| ConfigError::Parse {
            path: path.to_path_buf(),
            source,
        })?;

        let defaults = Self::default();
        Ok(Self {
            title: file.title.unwrap_or(defaults.title),
            log_file: file.log_file,
            theme: Theme::from_file(file.theme)?,
        })
    }
}

/// 从配置文件加载；文件不存在时返回默认配置
pub fn load_config(path: &Path) -> Result<Config, ConfigError> {
    if !path.exists() {
        return Ok(Config::default());
    }

    let content = fs::read_to_string(path).map_err(|source| ConfigError::Io {
        path: path.to_path_buf(),
        source,
    })?;

    Config::from_toml(&content, path)
}
