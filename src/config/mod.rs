//! # Configuration Module
//!
//! 프레임워크 기동과 HTTP 서버 바인딩에 필요한 설정을 관리합니다.
//!
//! ## 모듈 구성
//!
//! - [`context_config`] - 스캔 패키지, 소스 루트 등 애플리케이션 컨텍스트 설정
//!   (`application.properties`)
//! - [`server_config`] - 호스트, 포트, 워커 수 등 서버 설정 (환경 변수)
//!
//! ## 설정 소스
//!
//! | 설정 | 소스 | 기본값 |
//! |------|------|--------|
//! | 프로퍼티 파일 위치 | `CONTEXT_CONFIG_LOCATION` | `application.properties` |
//! | `scanPackage` | 프로퍼티 파일 | 없음 (필수) |
//! | `sourceRoot` | 프로퍼티 파일 | `src` |
//! | `contextPath` | 프로퍼티 파일 | 빈 문자열 |
//! | `strictInjection` | 프로퍼티 파일 | `false` |
//! | `HOST` / `PORT` / `WORKERS` | 환경 변수 | `127.0.0.1` / `8080` / `4` |
//!
//! 환경 변수는 `PROFILE`에 따라 `.env.dev`, `.env.prod`, `.env` 파일에서도 로드됩니다.
//!
//! ## Spring과의 비교
//!
//! | Spring | 이 프로젝트 |
//! |--------|-------------|
//! | `contextConfigLocation` init-param | `CONTEXT_CONFIG_LOCATION` |
//! | `application.properties` | `application.properties` |
//! | `server.port` | `PORT` |

pub mod context_config;
pub mod server_config;

pub use context_config::*;
pub use server_config::*;
