//! 애플리케이션 컨텍스트 설정
//!
//! `key=value` 형식의 프로퍼티 파일을 읽어 [`ContextConfig`]를 만듭니다.
//! 파싱에는 `dotenv`의 반복자 파서를 사용하므로 `#` 주석과 따옴표 값이 지원되며,
//! 프로세스 환경 변수는 변경하지 않습니다.
//!
//! ```properties
//! # application.properties
//! scanPackage=app
//! sourceRoot=src
//! contextPath=
//! strictInjection=false
//! ```

use std::env;
use std::path::{Path, PathBuf};

use log::{debug, warn};

use crate::core::errors::{ContextError, ContextResult};
use crate::utils::string_utils::is_blank;

/// 프로퍼티 파일 위치를 지정하는 환경 변수
pub const CONFIG_LOCATION_ENV: &str = "CONTEXT_CONFIG_LOCATION";
pub const DEFAULT_CONFIG_LOCATION: &str = "application.properties";
pub const DEFAULT_SOURCE_ROOT: &str = "src";

pub const SCAN_PACKAGE_KEY: &str = "scanPackage";
pub const SOURCE_ROOT_KEY: &str = "sourceRoot";
pub const CONTEXT_PATH_KEY: &str = "contextPath";
pub const STRICT_INJECTION_KEY: &str = "strictInjection";

/// 애플리케이션 컨텍스트 초기화 설정
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ContextConfig {
    /// 스캔할 패키지 (점 구분, 예: `app`)
    pub scan_package: String,
    /// 패키지 이름을 해석할 소스 루트 디렉터리
    pub source_root: PathBuf,
    /// 요청 경로에서 제거할 마운트 경로
    pub context_path: String,
    /// 찾지 못한 주입 대상을 기동 실패로 처리할지 여부
    pub strict_injection: bool,
}

impl ContextConfig {
    /// 기본값으로 설정을 생성합니다.
    pub fn new(scan_package: impl Into<String>) -> Self {
        Self {
            scan_package: scan_package.into(),
            source_root: PathBuf::from(DEFAULT_SOURCE_ROOT),
            context_path: String::new(),
            strict_injection: false,
        }
    }

    pub fn with_source_root(mut self, source_root: impl Into<PathBuf>) -> Self {
        self.source_root = source_root.into();
        self
    }

    pub fn with_context_path(mut self, context_path: impl Into<String>) -> Self {
        self.context_path = context_path.into();
        self
    }

    pub fn with_strict_injection(mut self, strict: bool) -> Self {
        self.strict_injection = strict;
        self
    }

    /// 프로퍼티 파일 위치
    ///
    /// `CONTEXT_CONFIG_LOCATION`이 설정되지 않았거나 비어 있으면 `application.properties`
    pub fn location() -> PathBuf {
        env::var(CONFIG_LOCATION_ENV)
            .ok()
            .filter(|value| !is_blank(value))
            .map(PathBuf::from)
            .unwrap_or_else(|| PathBuf::from(DEFAULT_CONFIG_LOCATION))
    }

    /// 기본 위치의 프로퍼티 파일에서 설정을 로드합니다.
    pub fn load() -> ContextResult<Self> {
        Self::from_file(Self::location())
    }

    /// 프로퍼티 파일에서 설정을 로드합니다.
    ///
    /// # Errors
    ///
    /// * `ContextError::Config` - 파일이 없거나 읽을 수 없음, 잘못된 줄, 필수 키 누락
    pub fn from_file(path: impl AsRef<Path>) -> ContextResult<Self> {
        let path = path.as_ref();
        debug!("Loading context configuration from {}", path.display());

        #[allow(deprecated)]
        let iter = dotenv::from_path_iter(path).map_err(|e| {
            ContextError::Config(format!("Cannot read {}: {}", path.display(), e))
        })?;

        let mut properties = Vec::new();
        for item in iter {
            let pair = item.map_err(|e| {
                ContextError::Config(format!("Invalid line in {}: {}", path.display(), e))
            })?;
            properties.push(pair);
        }

        Self::from_properties(properties)
    }

    /// (키, 값) 목록에서 설정을 만듭니다. 같은 키가 반복되면 마지막 값이 사용됩니다.
    ///
    /// # Errors
    ///
    /// * `ContextError::Config` - `scanPackage` 누락 또는 `strictInjection`이 불리언이 아님
    pub fn from_properties<I>(properties: I) -> ContextResult<Self>
    where
        I: IntoIterator<Item = (String, String)>,
    {
        let mut scan_package = None;
        let mut config = Self::new("");

        for (key, value) in properties {
            let value = value.trim().to_string();
            match key.trim() {
                SCAN_PACKAGE_KEY => scan_package = Some(value),
                SOURCE_ROOT_KEY if !value.is_empty() => config.source_root = PathBuf::from(value),
                SOURCE_ROOT_KEY => {}
                CONTEXT_PATH_KEY => config.context_path = value,
                STRICT_INJECTION_KEY => config.strict_injection = parse_bool(&key, &value)?,
                other => warn!("⚠️ Unknown configuration key ignored: {}", other),
            }
        }

        config.scan_package = scan_package
            .filter(|package| !package.is_empty())
            .ok_or_else(|| {
                ContextError::Config(format!("Missing required property \"{}\"", SCAN_PACKAGE_KEY))
            })?;

        Ok(config)
    }
}

fn parse_bool(key: &str, value: &str) -> ContextResult<bool> {
    match value.to_ascii_lowercase().as_str() {
        "true" => Ok(true),
        "false" | "" => Ok(false),
        _ => Err(ContextError::Config(format!(
            "Property \"{}\" must be true or false, got \"{}\"",
            key, value
        ))),
    }
}
