//! # Core Framework Module
//!
//! 컴포넌트 스캔, IoC 레지스트리, 의존성 주입, 라우팅, 요청 디스패치로 이루어진
//! 최소 웹 디스패치 프레임워크입니다.
//!
//! ## 모듈 구성
//!
//! - [`metadata`] - 컴포넌트가 제출하는 정적 선언과 마커 조회
//! - [`component`] - 관리 인스턴스 인터페이스, `Autowired` 슬롯, 타입 카탈로그
//! - [`scanner`] - 패키지 디렉터리 → 후보 이름
//! - [`registry`] - 후보 → 싱글톤 인스턴스 (문자열 키)
//! - [`injector`] - `Autowired` 필드 바인딩
//! - [`routing`] - 경로 정규화와 라우트 테이블
//! - [`dispatcher`] - 요청 단위 상태 기계
//! - [`context`] - 위 단계를 묶는 초기화 파이프라인
//! - [`errors`] - 기동/요청 에러 분류
//!
//! ## Spring Framework와의 비교
//!
//! | Spring | 이 프레임워크 |
//! |--------|---------------|
//! | `@Controller` | `Marker::controller()` |
//! | `@Service("name")` | `Marker::service("name")` |
//! | `@RequestMapping("/demo")` | `Marker::request_mapping("/demo")` |
//! | `@Autowired` | `Marker::autowired("")` + [`component::Autowired`] |
//! | `@RequestParam("name")` | `Marker::request_param("name")` |
//! | `DispatcherServlet` | [`dispatcher::Dispatcher`] |
//! | `ApplicationContext` | [`context::ApplicationContext`] |
//!
//! ## 초기화 흐름
//!
//! ```text
//! ContextConfig ─▶ ComponentScanner ─▶ RegistryBuilder ─▶ DependencyInjector ─▶ RouteTableBuilder
//!                                                                                   │
//!                                        HTTP 요청 ─▶ Dispatcher ◀── 읽기 전용 공유 ─┘
//! ```
//!
//! ## 트러블슈팅
//!
//! ### capability 중복
//! ```text
//! Error: The "mini_mvc::app::service::DemoService" is exists!! (...)
//! ```
//! **해결**: 같은 트레이트를 capability로 선언한 서비스를 하나만 남기거나,
//! 나머지는 `capabilities`에서 제외하고 명시적 이름으로 주입
//!
//! ### 주입되지 않은 필드
//! ```text
//! ⚠️ No bean "absentBean" for DemoAction.demo_service, field left unset
//! ```
//! **해결**: 대상 서비스가 `scanPackage` 아래에 있는지 확인. 기동 시 바로 실패시키려면
//! `strictInjection=true`

pub mod component;
pub mod context;
pub mod dispatcher;
pub mod errors;
pub mod injector;
pub mod metadata;
pub mod registry;
pub mod routing;
pub mod scanner;

#[cfg(test)]
mod testing;

pub use context::ApplicationContext;
pub use errors::*;
