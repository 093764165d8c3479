use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

use tracing::{debug, info};

/// 기본 설정 파일 이름. 작업 디렉터리 기준으로 찾는다.
pub const DEFAULT_CONFIG_PATH: &str = "estimator.toml";

/// 입력 처리 설정.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct InputConfig {
    /// true면 음수/숫자가 아닌 치수 입력을 거부하고 다시 묻는다.
    pub strict: bool,
}

/// 언어팩 설정.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct LocaleConfig {
    /// `<code>.toml` 덮어쓰기 파일이 있는 디렉터리
    pub dir: Option<String>,
}

/// 로그 설정.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct LogConfig {
    /// tracing EnvFilter 문법 (예: "warn", "material_estimator=debug")
    pub filter: String,
}

impl Default for LogConfig {
    fn default() -> Self {
        Self {
            filter: "warn".to_string(),
        }
    }
}

/// 애플리케이션 설정을 표현한다.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub input: InputConfig,
    pub locales: LocaleConfig,
    pub log: LogConfig,
}

/// 설정 로드 시 발생 가능한 오류를 표현한다.
#[derive(Debug)]
pub enum ConfigError {
    /// 파일 입출력 오류
    Io(std::io::Error),
    /// TOML 역직렬화 오류
    Parse(toml::de::Error),
}

impl std::fmt::Display for ConfigError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ConfigError::Io(e) => write!(f, "cannot read config file: {e}"),
            ConfigError::Parse(e) => write!(f, "invalid config file: {e}"),
        }
    }
}

impl std::error::Error for ConfigError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            ConfigError::Io(e) => Some(e),
            ConfigError::Parse(e) => Some(e),
        }
    }
}

impl From<std::io::Error> for ConfigError {
    fn from(value: std::io::Error) -> Self {
        ConfigError::Io(value)
    }
}

impl From<toml::de::Error> for ConfigError {
    fn from(value: toml::de::Error) -> Self {
        ConfigError::Parse(value)
    }
}

/// 설정 파일을 읽는다. 파일이 없으면 기본값을 쓰며 새로 만들지 않는다.
pub fn load_or_default(path: &Path) -> Result<Config, ConfigError> {
    if !path.exists() {
        debug!(path = %path.display(), "config file not found, using defaults");
        return Ok(Config::default());
    }
    let content = fs::read_to_string(path)?;
    let cfg = parse(&content)?;
    info!(path = %path.display(), "config loaded");
    Ok(cfg)
}

/// TOML 문자열에서 설정을 읽는다. 빠진 항목은 기본값으로 채운다.
pub fn parse(content: &str) -> Result<Config, ConfigError> {
    Ok(toml::from_str(content)?)
}
