//! # Dependency Injector
//!
//! 레지스트리에 등록된 모든 인스턴스의 `Autowired` 필드를 다른 레지스트리
//! 항목과 연결합니다.
//!
//! ## 키 결정
//!
//! 1. 마커 값이 비어 있지 않으면 그 값 (명시적 빈 이름)
//! 2. 그렇지 않으면 필드가 선언한 타입의 정규화된 이름 (capability 키)
//!
//! ## 찾지 못한 대상
//!
//! 기본적으로 경고 로그만 남기고 필드를 비워 둡니다. 이런 필드에 요청 처리 중
//! 접근하면 해당 요청만 500 응답으로 끝납니다. strict 모드에서는
//! [`ContextError::UnresolvedDependency`]로 기동을 중단합니다.
//!
//! 이미 채워진 필드는 다시 바인딩되지 않으므로 여러 번 실행해도 결과가 같습니다.

use log::{debug, warn};

use crate::core::errors::{ContextError, ContextResult};
use crate::core::metadata::{marker_value, MarkerKind};
use crate::core::registry::Registry;
use crate::utils::string_utils::is_blank;

/// 주입 결과 요약
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct InjectionReport {
    /// 바인딩에 성공한 필드 수
    pub bound: usize,
    /// 대상을 찾지 못한 필드 (`Type.field`)
    pub unresolved: Vec<String>,
}

#[derive(Debug, Default, Clone, Copy)]
pub struct DependencyInjector {
    strict: bool,
}

impl DependencyInjector {
    pub fn new() -> Self {
        Self::default()
    }

    /// 찾지 못한 주입 대상을 기동 실패로 승격합니다.
    pub fn strict(mut self, strict: bool) -> Self {
        self.strict = strict;
        self
    }

    /// 모든 기본 항목의 `Autowired` 필드를 주입합니다.
    ///
    /// # Errors
    ///
    /// * `ContextError::Injection` - 찾은 인스턴스가 필드 타입을 제공하지 않음
    /// * `ContextError::UnresolvedDependency` - strict 모드에서 대상 키가 없음
    pub fn inject_all(&self, registry: &Registry) -> ContextResult<InjectionReport> {
        let mut report = InjectionReport::default();

        for entry in registry.primary_entries() {
            for field in entry.decl.fields {
                let Some(value) = marker_value(field, MarkerKind::Autowired) else {
                    continue;
                };
                let key = if is_blank(value) { field.type_name } else { value.trim() };

                let Some(dependency) = registry.get(key) else {
                    if self.strict {
                        return Err(ContextError::UnresolvedDependency {
                            owner: entry.decl.qualified_name(),
                            field: field.name.to_string(),
                            key: key.to_string(),
                        });
                    }
                    warn!(
                        "⚠️ No bean \"{}\" for {}.{}, field left unset",
                        key, entry.decl.name, field.name
                    );
                    report
                        .unresolved
                        .push(format!("{}.{}", entry.decl.name, field.name));
                    continue;
                };

                entry
                    .instance
                    .inject(field, dependency)
                    .map_err(|reason| ContextError::Injection {
                        owner: entry.decl.qualified_name(),
                        field: field.name.to_string(),
                        reason,
                    })?;
                debug!("Injected {}.{} <- \"{}\"", entry.decl.name, field.name, key);
                report.bound += 1;
            }
        }

        Ok(report)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::component::downcast;
    use crate::core::registry::RegistryBuilder;
    use crate::core::testing::{self, *};
    use std::sync::Arc;

    fn registry() -> Registry {
        let catalog = testing::catalog(&[&GREETING_CONTROLLER, &GREETER_IMPL, &QUIET_GREETER]);
        RegistryBuilder::new(&catalog)
            .build(&testing::candidates())
            .unwrap()
    }

    fn controller(registry: &Registry) -> &GreetingController {
        let owner = registry.get("greetingController").unwrap();
        downcast::<GreetingController>(owner.as_ref()).unwrap()
    }

    #[test]
    fn test_injects_by_capability_type() {
        let registry = registry();
        DependencyInjector::new().inject_all(&registry).unwrap();

        let greeter = controller(&registry).greeter.get().unwrap();
        assert_eq!(greeter.greet("world"), "hello world");
    }

    #[test]
    fn test_unresolved_target_is_left_unset() {
        let registry = registry();
        let report = DependencyInjector::new().inject_all(&registry).unwrap();

        assert_eq!(report.bound, 1);
        assert_eq!(report.unresolved.len(), 2);
        assert!(report.unresolved.contains(&"GreetingController.absent".to_string()));
        assert!(!controller(&registry).absent.is_bound());
        assert!(!controller(&registry).loud.is_bound());
    }

    #[test]
    fn test_strict_mode_rejects_unresolved_target() {
        let registry = registry();
        let result = DependencyInjector::new().strict(true).inject_all(&registry);

        assert!(matches!(result, Err(ContextError::UnresolvedDependency { .. })));
    }

    #[test]
    fn test_injects_by_explicit_name() {
        let catalog =
            testing::catalog(&[&GREETING_CONTROLLER, &GREETER_IMPL, &LOUD_GREETER_NO_CAPABILITY]);
        let registry = RegistryBuilder::new(&catalog)
            .build(&testing::candidates())
            .unwrap();
        DependencyInjector::new().inject_all(&registry).unwrap();

        let loud = controller(&registry).loud.get().unwrap();
        assert_eq!(loud.greet("world"), "HELLO WORLD!");
    }

    #[test]
    fn test_incompatible_target_is_fatal() {
        let catalog = testing::catalog(&[&GREETING_CONTROLLER, &ROOT_AS_LOUD]);
        let registry = RegistryBuilder::new(&catalog)
            .build(&testing::candidates())
            .unwrap();

        let result = DependencyInjector::new().inject_all(&registry);
        assert!(matches!(result, Err(ContextError::Injection { .. })));
    }

    #[test]
    fn test_injection_is_idempotent() {
        let registry = registry();
        let injector = DependencyInjector::new();

        let first = injector.inject_all(&registry).unwrap();
        let bound = Arc::clone(controller(&registry).greeter.get().unwrap());
        let second = injector.inject_all(&registry).unwrap();

        assert_eq!(first, second);
        assert!(Arc::ptr_eq(&bound, controller(&registry).greeter.get().unwrap()));
    }
}
