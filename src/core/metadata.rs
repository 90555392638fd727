//! # Declarative Component Metadata
//!
//! 컴포넌트가 컴파일 타임에 스스로 제출하는 선언 테이블과,
//! 그 선언에 부착된 마커를 읽는 순수 조회 함수들을 제공합니다.
//!
//! 런타임 리플렉션 대신 각 컴포넌트가 정적 서술자([`ComponentDecl`])를
//! `inventory::submit!`으로 등록하며, 레지스트리 빌더/주입기/라우트 빌더는
//! 오직 이 서술자와 [`marker_value`]를 통해서만 컴포넌트를 해석합니다.
//!
//! ## 마커 종류
//!
//! | 마커 | 부착 대상 | 값의 의미 |
//! |------|-----------|-----------|
//! | `Controller` | 타입 | 없음 |
//! | `Service` | 타입 | 명시적 레지스트리 키 (빈 값이면 타입명에서 유도) |
//! | `RequestMapping` | 타입 / 메서드 | 기본 경로 / 상대 경로 |
//! | `Autowired` | 필드 | 명시적 주입 키 (빈 값이면 필드 타입명) |
//! | `RequestParam` | 파라미터 | 요청 파라미터 이름 |
//!
//! ## 선언 예제
//!
//! ```rust,ignore
//! pub static DEMO_ACTION: ComponentDecl = ComponentDecl {
//!     name: "DemoAction",
//!     module_path: module_path!(),
//!     markers: &[Marker::controller(), Marker::request_mapping("/demo")],
//!     capabilities: &[],
//!     fields: &[FieldDecl {
//!         name: "demo_service",
//!         type_name: DEMO_SERVICE,
//!         markers: &[Marker::autowired("")],
//!     }],
//!     methods: &[MethodDecl {
//!         name: "query",
//!         markers: &[Marker::request_mapping("/query")],
//!         params: &[ParamDecl { name: "name", markers: &[Marker::request_param("name")] }],
//!         handler: query_handler,
//!     }],
//!     factory: DemoAction::create,
//! };
//!
//! inventory::submit! { ComponentRegistration(&DEMO_ACTION) }
//! ```

use std::sync::Arc;

use crate::core::component::Component;
use crate::core::dispatcher::RequestContext;
use crate::core::errors::AppResult;

/// 컴포넌트 생성 실패 원인
pub type BoxError = Box<dyn std::error::Error + Send + Sync>;

/// 기본 생성자 역할을 하는 팩토리 함수
pub type Factory = fn() -> Result<Arc<dyn Component>, BoxError>;

/// 핸들러 메서드 호출 어댑터
///
/// 소유 인스턴스와 요청 컨텍스트를 받아 실제 메서드를 호출합니다.
/// 구현체는 보통 [`crate::core::component::downcast`]로 구체 타입을 꺼낸 뒤
/// 메서드에 위임합니다.
pub type HandlerFn = fn(&dyn Component, &mut RequestContext<'_>) -> AppResult<()>;

/// 마커 종류
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MarkerKind {
    Controller,
    Service,
    RequestMapping,
    Autowired,
    RequestParam,
}

/// 선언에 부착되는 마커와 선택적 문자열 값
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Marker {
    pub kind: MarkerKind,
    pub value: &'static str,
}

impl Marker {
    pub const fn controller() -> Self {
        Self { kind: MarkerKind::Controller, value: "" }
    }

    pub const fn service(name: &'static str) -> Self {
        Self { kind: MarkerKind::Service, value: name }
    }

    pub const fn request_mapping(path: &'static str) -> Self {
        Self { kind: MarkerKind::RequestMapping, value: path }
    }

    pub const fn autowired(key: &'static str) -> Self {
        Self { kind: MarkerKind::Autowired, value: key }
    }

    pub const fn request_param(name: &'static str) -> Self {
        Self { kind: MarkerKind::RequestParam, value: name }
    }
}

/// 마커를 가질 수 있는 모든 선언의 공통 인터페이스
pub trait Declaration {
    fn markers(&self) -> &'static [Marker];
}

/// 마커의 값을 조회합니다.
///
/// # Returns
///
/// * `None` - 해당 마커가 없음
/// * `Some("")` - 마커는 있지만 값이 비어 있음
/// * `Some(value)` - 마커와 값이 모두 있음
///
/// 같은 종류의 마커가 여러 개 붙어 있으면 첫 번째 것이 사용됩니다.
pub fn marker_value<D: Declaration + ?Sized>(decl: &D, kind: MarkerKind) -> Option<&'static str> {
    decl.markers()
        .iter()
        .find(|marker| marker.kind == kind)
        .map(|marker| marker.value)
}

/// 마커의 존재 여부만 확인합니다.
pub fn is_marker_present<D: Declaration + ?Sized>(decl: &D, kind: MarkerKind) -> bool {
    marker_value(decl, kind).is_some()
}

/// 타입 선언 (컴포넌트 서술자)
///
/// `inventory`로 수집되는 단위이며, 하나의 소스 유닛(모듈 파일)은
/// 여러 개의 컴포넌트를 선언할 수 있습니다.
pub struct ComponentDecl {
    /// 단순 타입 이름 (예: `DemoAction`)
    pub name: &'static str,
    /// 선언 위치의 `module_path!()`
    pub module_path: &'static str,
    pub markers: &'static [Marker],
    /// 구현한 capability(트레이트)의 정규화된 이름 목록
    pub capabilities: &'static [&'static str],
    pub fields: &'static [FieldDecl],
    pub methods: &'static [MethodDecl],
    pub factory: Factory,
}

impl ComponentDecl {
    /// `module_path::Name` 형태의 정규화된 타입 이름
    pub fn qualified_name(&self) -> String {
        format!("{}::{}", self.module_path, self.name)
    }

    /// 스캐너가 생산하는 후보 이름과 비교되는 유닛 이름
    ///
    /// `mini_mvc::app::controller::demo_action` → `app.controller.demo_action`
    pub fn unit_name(&self) -> String {
        unit_name_of(self.module_path)
    }
}

impl Declaration for ComponentDecl {
    fn markers(&self) -> &'static [Marker] {
        self.markers
    }
}

impl std::fmt::Debug for ComponentDecl {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ComponentDecl")
            .field("name", &self.name)
            .field("module_path", &self.module_path)
            .field("markers", &self.markers)
            .finish_non_exhaustive()
    }
}

/// 필드 선언
#[derive(Debug)]
pub struct FieldDecl {
    pub name: &'static str,
    /// 필드가 선언한 타입의 정규화된 이름 (기본 주입 키)
    pub type_name: &'static str,
    pub markers: &'static [Marker],
}

impl Declaration for FieldDecl {
    fn markers(&self) -> &'static [Marker] {
        self.markers
    }
}

/// 메서드 선언
pub struct MethodDecl {
    pub name: &'static str,
    pub markers: &'static [Marker],
    pub params: &'static [ParamDecl],
    pub handler: HandlerFn,
}

impl MethodDecl {
    /// 핸들러가 바인딩하는 요청 파라미터 이름
    ///
    /// `RequestParam` 마커가 붙은 첫 번째 파라미터를 사용하며,
    /// 마커 값이 비어 있으면 파라미터 자체의 이름으로 대체합니다.
    pub fn request_param(&self) -> Option<&'static str> {
        self.params.iter().find_map(|param| {
            marker_value(param, MarkerKind::RequestParam).map(|value| {
                if value.trim().is_empty() { param.name } else { value }
            })
        })
    }
}

impl Declaration for MethodDecl {
    fn markers(&self) -> &'static [Marker] {
        self.markers
    }
}

impl std::fmt::Debug for MethodDecl {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("MethodDecl")
            .field("name", &self.name)
            .field("markers", &self.markers)
            .field("params", &self.params)
            .finish_non_exhaustive()
    }
}

/// 파라미터 선언
#[derive(Debug)]
pub struct ParamDecl {
    pub name: &'static str,
    pub markers: &'static [Marker],
}

impl Declaration for ParamDecl {
    fn markers(&self) -> &'static [Marker] {
        self.markers
    }
}

/// 모듈 경로에서 크레이트 이름을 제거하고 `.`으로 연결합니다.
pub fn unit_name_of(module_path: &str) -> String {
    module_path
        .split("::")
        .skip(1)
        .collect::<Vec<_>>()
        .join(".")
}

/// 전역 카탈로그 등록 정보
///
/// 각 컴포넌트 모듈이 자신의 정적 선언을 `inventory::submit!`으로 제출합니다.
pub struct ComponentRegistration(pub &'static ComponentDecl);

// 링크된 모든 ComponentRegistration을 수집합니다.
inventory::collect!(ComponentRegistration);
