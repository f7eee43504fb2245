//! 配置管理
//!
//! 支持TOML配置文件与GROWTH前缀环境变量两种来源，缺省时使用内置默认值。

use anyhow::{Context, Result};
use config::{Config, Environment, File};
use growth_assessment::AssessmentConfig;
use serde::{Deserialize, Serialize};

/// 命令行工具完整配置
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct GrowthConfig {
    /// 评估配置
    #[serde(default)]
    pub assessment: AssessmentConfig,
    /// 日志配置
    #[serde(default)]
    pub logging: LoggingConfig,
}

/// 日志配置
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    /// 日志级别
    pub level: String,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
        }
    }
}

/// 加载配置
///
/// 环境变量形如 GROWTH__ASSESSMENT__MAX_AGE_MONTHS，优先级高于配置文件。
pub fn load(config_path: Option<&str>) -> Result<GrowthConfig> {
    let mut builder = Config::builder();
    if let Some(path) = config_path {
        builder = builder.add_source(File::with_name(path));
    }
    let settings = builder
        .add_source(Environment::with_prefix("GROWTH").separator("__"))
        .build()
        .context("配置加载失败")?;

    let config: GrowthConfig = settings.try_deserialize().context("配置解析失败")?;
    config.assessment.validate()?;
    Ok(config)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_default_config() {
        let config = GrowthConfig::default();
        assert_eq!(config.assessment.max_age_months, 24);
        assert_eq!(config.logging.level, "info");
    }

    #[test]
    fn test_load_from_file() {
        let mut file = tempfile::Builder::new().suffix(".toml").tempfile().unwrap();
        writeln!(file, "[assessment]").unwrap();
        writeln!(file, "max_age_months = 60").unwrap();
        writeln!(file, "[logging]").unwrap();
        writeln!(file, "level = \"debug\"").unwrap();

        let config = load(file.path().to_str()).unwrap();
        assert_eq!(config.assessment.max_age_months, 60);
        assert_eq!(config.logging.level, "debug");
    }

    #[test]
    fn test_partial_file_keeps_defaults() {
        let mut file = tempfile::Builder::new().suffix(".toml").tempfile().unwrap();
        writeln!(file, "[logging]").unwrap();
        writeln!(file, "level = \"warn\"").unwrap();

        let config = load(file.path().to_str()).unwrap();
        assert_eq!(config.assessment.max_age_months, 24);
        assert_eq!(config.logging.level, "warn");
    }

    #[test]
    fn test_invalid_window_rejected() {
        let mut file = tempfile::Builder::new().suffix(".toml").tempfile().unwrap();
        writeln!(file, "[assessment]").unwrap();
        writeln!(file, "max_age_months = 100").unwrap();

        assert!(load(file.path().to_str()).is_err());
    }

    #[test]
    fn test_missing_file_is_error() {
        assert!(load(Some("/不存在/growth.toml")).is_err());
    }
}
