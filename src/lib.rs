//! 미니 MVC 디스패치 프레임워크
//!
//! 소스 패키지를 스캔하여 컨트롤러와 서비스를 싱글톤으로 등록하고,
//! `Autowired` 필드를 주입한 뒤, 컨트롤러 메서드를 정규화된 URL 경로에
//! 매핑하여 HTTP 요청을 디스패치합니다.
//!
//! # Features
//!
//! - **컴포넌트 스캔**: `scanPackage` 디렉터리를 재귀 순회하여 후보 수집
//! - **IoC 레지스트리**: 컨트롤러/서비스 싱글톤, capability 키 별칭
//! - **필드 주입**: 명시적 이름 또는 capability 타입으로 `Autowired` 바인딩
//! - **라우팅**: 기본 경로 + 메서드 경로의 정확한 일치
//! - **에러 격리**: 요청 단위 에러와 panic을 평문 응답으로 변환
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────────┐
//! │   HTTP Routes   │ ← 모든 경로를 단일 핸들러로
//! └─────────────────┘
//!          │
//!          ▼
//! ┌─────────────────┐
//! │    Handlers     │ ← HttpRequest → DispatchRequest
//! └─────────────────┘
//!          │
//!          ▼
//! ┌─────────────────┐
//! │   Dispatcher    │ ← 라우트 조회, 파라미터 추출, 핸들러 호출
//! └─────────────────┘
//!          │
//!          ▼
//! ┌─────────────────┐
//! │  app (scanned)  │ ← 컨트롤러 + 서비스
//! └─────────────────┘
//! ```
//!
//! # Examples
//!
//! ```rust,ignore
//! use mini_mvc::config::ContextConfig;
//! use mini_mvc::core::context::ApplicationContext;
//! use mini_mvc::core::dispatcher::DispatchRequest;
//!
//! let context = ApplicationContext::initialize(&ContextConfig::new("app"))?;
//! let response = context.dispatch(&DispatchRequest::get("/demo/query").with_query("name=world"));
//! assert_eq!(response.body, "hello world");
//! ```

pub mod app;
pub mod config;
pub mod core;
pub mod handlers;
pub mod routes;
pub mod utils;
