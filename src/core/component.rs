//! # Managed Components
//!
//! 레지스트리가 보관하는 인스턴스의 공통 인터페이스([`Component`])와
//! 필드 주입 슬롯([`Autowired`]), 그리고 후보 이름을 타입 서술자로
//! 해석하는 [`Catalog`]를 제공합니다.
//!
//! ## 주입 방식
//!
//! 필드 가시성을 우회하는 리플렉션 대신, 각 컴포넌트가 [`Component::inject`]에서
//! 자신이 선언한 필드 이름에 맞춰 [`Autowired::bind`]를 호출합니다.
//! 주입 대상은 [`Component::provide`]를 통해 요청된 capability 뷰
//! (`Arc<dyn Trait>`)를 꺼내 줍니다.
//!
//! ```rust,ignore
//! impl Component for DemoAction {
//!     fn as_any(&self) -> &dyn Any { self }
//!
//!     fn inject(&self, field: &FieldDecl, dependency: &Arc<dyn Component>) -> Result<(), String> {
//!         match field.name {
//!             "demo_service" => self.demo_service.bind(dependency, field.type_name),
//!             other => Err(format!("unknown field {}", other)),
//!         }
//!     }
//! }
//! ```

use std::any::Any;
use std::collections::HashMap;
use std::sync::Arc;

use once_cell::sync::OnceCell;

use crate::core::errors::{AppError, AppResult};
use crate::core::metadata::{ComponentDecl, ComponentRegistration, FieldDecl};

/// 레지스트리에 등록되는 모든 인스턴스의 공통 인터페이스
///
/// 싱글톤으로 모든 동시 요청이 공유하므로 `Send + Sync`가 필요합니다.
/// 내부 가변 상태의 동기화는 각 컴포넌트의 책임입니다.
pub trait Component: Any + Send + Sync {
    /// 구체 타입으로의 다운캐스트를 위한 접근자
    fn as_any(&self) -> &dyn Any;

    /// `Autowired` 마커가 붙은 필드에 의존성을 바인딩합니다.
    ///
    /// 이미 바인딩된 필드에 다시 호출되면 아무것도 바꾸지 않아야 합니다.
    fn inject(&self, field: &FieldDecl, dependency: &Arc<dyn Component>) -> Result<(), String> {
        let _ = dependency;
        Err(format!("field {} is not injectable", field.name))
    }

    /// 요청된 capability 이름에 해당하는 뷰를 제공합니다.
    ///
    /// 반환값은 `Box<Arc<dyn Trait>>`를 `Any`로 감싼 것이며,
    /// 지원하지 않는 capability이면 `None`입니다.
    fn provide(self: Arc<Self>, capability: &str) -> Option<Box<dyn Any + Send + Sync>> {
        let _ = capability;
        None
    }
}

/// 컴포넌트 트레이트 객체를 구체 타입으로 다운캐스트합니다.
///
/// 핸들러 어댑터에서 소유 인스턴스를 꺼낼 때 사용합니다.
pub fn downcast<T: Component>(component: &dyn Component) -> AppResult<&T> {
    component.as_any().downcast_ref::<T>().ok_or_else(|| {
        AppError::InternalError(format!(
            "handler owner is not a {}",
            std::any::type_name::<T>()
        ))
    })
}

/// 한 번만 채워지는 의존성 주입 슬롯
///
/// 초기화 단계에서 주입기가 채우고, 이후에는 읽기 전용으로만 사용됩니다.
/// 이미 채워진 슬롯에 대한 재주입은 무시되므로 주입 과정은 멱등입니다.
pub struct Autowired<T: ?Sized> {
    slot: OnceCell<Arc<T>>,
}

impl<T: ?Sized + Send + Sync + 'static> Autowired<T> {
    pub const fn new() -> Self {
        Self { slot: OnceCell::new() }
    }

    /// 주입된 인스턴스 (주입 전이면 `None`)
    pub fn get(&self) -> Option<&Arc<T>> {
        self.slot.get()
    }

    /// 주입된 인스턴스를 요구합니다.
    ///
    /// # Errors
    ///
    /// * `AppError::DependencyMissing` - 기동 시 주입 대상을 찾지 못해 비어 있는 경우
    pub fn require(&self, field: &str) -> AppResult<&Arc<T>> {
        self.get()
            .ok_or_else(|| AppError::DependencyMissing(field.to_string()))
    }

    pub fn is_bound(&self) -> bool {
        self.slot.get().is_some()
    }

    /// `dependency`에서 `capability` 뷰를 꺼내 슬롯에 바인딩합니다.
    pub fn bind(&self, dependency: &Arc<dyn Component>, capability: &str) -> Result<(), String> {
        if self.is_bound() {
            return Ok(());
        }

        let provided = Arc::clone(dependency)
            .provide(capability)
            .ok_or_else(|| format!("instance does not provide {}", capability))?;
        let typed = provided
            .downcast::<Arc<T>>()
            .map_err(|_| format!("{} view has an unexpected type", capability))?;

        // 동시에 다른 바인딩이 먼저 끝났다면 기존 값을 유지한다
        let _ = self.slot.set(*typed);
        Ok(())
    }
}

impl<T: ?Sized + Send + Sync + 'static> Default for Autowired<T> {
    fn default() -> Self {
        Self::new()
    }
}

/// 후보 이름 → 타입 서술자 카탈로그
///
/// `Class.forName`에 해당하는 해석 단계입니다. 기본적으로 `inventory`로
/// 수집된 모든 [`ComponentDecl`]에서 구성됩니다.
pub struct Catalog {
    units: HashMap<String, Vec<&'static ComponentDecl>>,
}

impl Catalog {
    /// 링크된 모든 컴포넌트 선언으로 카탈로그를 구성합니다.
    pub fn discover() -> Self {
        Self::from_decls(
            inventory::iter::<ComponentRegistration>().map(|registration| registration.0),
        )
    }

    /// 명시적인 선언 목록으로 카탈로그를 구성합니다.
    pub fn from_decls<I>(decls: I) -> Self
    where
        I: IntoIterator<Item = &'static ComponentDecl>,
    {
        let mut units: HashMap<String, Vec<&'static ComponentDecl>> = HashMap::new();
        for decl in decls {
            units.entry(decl.unit_name()).or_default().push(decl);
        }
        Self { units }
    }

    /// 후보 이름이 선언한 타입들 (선언이 없으면 빈 슬라이스)
    pub fn resolve(&self, candidate: &str) -> &[&'static ComponentDecl] {
        self.units.get(candidate).map(Vec::as_slice).unwrap_or(&[])
    }

    pub fn len(&self) -> usize {
        self.units.values().map(Vec::len).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.units.is_empty()
    }
}
