//! # Component Registry (IoC Container)
//!
//! 스캔된 후보 이름을 타입 서술자로 해석하고, 역할 마커가 붙은 타입을
//! 인스턴스화하여 문자열 키로 보관하는 싱글톤 컨테이너입니다.
//! Spring의 `ApplicationContext` + `BeanFactory` 중 싱글톤 등록 부분만을
//! 담당합니다.
//!
//! ## 키 규칙
//!
//! | 역할 | 기본 키 | 추가 키 |
//! |------|---------|---------|
//! | `Controller` | 타입 이름 첫 글자 소문자 (`DemoAction` → `demoAction`) | 없음 |
//! | `Service` | 마커 값, 비어 있으면 타입 이름 첫 글자 소문자 | 선언한 capability마다 정규화된 이름 |
//!
//! capability 키에는 기본 키와 **같은 인스턴스**가 다시 저장되므로,
//! 주입기는 필드 타입 이름만으로 구현체를 찾을 수 있습니다.
//!
//! ## 충돌 정책
//!
//! - capability 키 중복 → [`ContextError::DuplicateCapability`]
//! - 기본 키 중복 → [`ContextError::DuplicateBean`]
//!
//! 어떤 경우에도 기존 항목을 조용히 덮어쓰지 않습니다.
//!
//! ## 생명주기
//!
//! [`RegistryBuilder::build`]가 반환한 [`Registry`]는 이후 변경되지 않으며,
//! 잠금 없이 모든 요청 스레드에서 공유됩니다.

use std::collections::HashMap;
use std::panic::{self, AssertUnwindSafe};
use std::sync::Arc;

use log::{debug, info};

use crate::core::component::{Catalog, Component};
use crate::core::errors::{panic_message, ContextError, ContextResult};
use crate::core::metadata::{is_marker_present, marker_value, ComponentDecl, MarkerKind};
use crate::utils::display_terminal::print_sub_task;
use crate::utils::string_utils::{is_blank, to_lower_first_case};

/// 레지스트리 항목의 종류
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EntryKind {
    /// 컨트롤러/서비스의 기본 키
    Primary,
    /// 서비스가 선언한 capability 키
    Capability,
}

/// (키, 인스턴스) 쌍과 인스턴스를 만든 선언
#[derive(Clone)]
pub struct RegistryEntry {
    pub key: String,
    pub instance: Arc<dyn Component>,
    pub decl: &'static ComponentDecl,
    pub kind: EntryKind,
}

impl std::fmt::Debug for RegistryEntry {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("RegistryEntry")
            .field("key", &self.key)
            .field("type", &self.decl.name)
            .field("kind", &self.kind)
            .finish()
    }
}

/// 초기화가 끝난 읽기 전용 레지스트리
#[derive(Debug, Default)]
pub struct Registry {
    entries: HashMap<String, RegistryEntry>,
}

impl Registry {
    /// 키로 인스턴스를 조회합니다.
    pub fn get(&self, key: &str) -> Option<&Arc<dyn Component>> {
        self.entries.get(key).map(|entry| &entry.instance)
    }

    pub fn entry(&self, key: &str) -> Option<&RegistryEntry> {
        self.entries.get(key)
    }

    pub fn contains_key(&self, key: &str) -> bool {
        self.entries.contains_key(key)
    }

    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.entries.keys().map(String::as_str)
    }

    /// 컴포넌트당 하나씩, 기본 키 항목만 순회합니다.
    pub fn primary_entries(&self) -> impl Iterator<Item = &RegistryEntry> {
        self.entries
            .values()
            .filter(|entry| entry.kind == EntryKind::Primary)
    }

    /// 주어진 역할 마커를 가진 컴포넌트 수
    pub fn count_role(&self, role: MarkerKind) -> usize {
        self.primary_entries()
            .filter(|entry| is_marker_present(entry.decl, role))
            .count()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// 후보 이름 목록으로부터 [`Registry`]를 구성합니다.
pub struct RegistryBuilder<'a> {
    catalog: &'a Catalog,
    entries: HashMap<String, RegistryEntry>,
}

impl<'a> RegistryBuilder<'a> {
    pub fn new(catalog: &'a Catalog) -> Self {
        Self {
            catalog,
            entries: HashMap::new(),
        }
    }

    /// 모든 후보를 해석하고 역할 마커가 있는 타입을 등록합니다.
    ///
    /// # Errors
    ///
    /// * `ContextError::Instantiation` - 팩토리가 에러를 반환하거나 panic
    /// * `ContextError::DuplicateCapability` - capability 키 중복
    /// * `ContextError::DuplicateBean` - 기본 키 중복
    pub fn build(mut self, candidates: &[String]) -> ContextResult<Registry> {
        for candidate in candidates {
            let decls = self.catalog.resolve(candidate);
            if decls.is_empty() {
                debug!("Skipping {}: no component declarations", candidate);
                continue;
            }

            for decl in decls {
                self.register(decl)?;
            }
        }

        Ok(Registry {
            entries: self.entries,
        })
    }

    /// 단일 선언을 역할에 따라 등록합니다. 관리 대상이 아니면 `false`.
    fn register(&mut self, decl: &'static ComponentDecl) -> ContextResult<bool> {
        if is_marker_present(decl, MarkerKind::Controller) {
            let key = to_lower_first_case(decl.name);
            let instance = instantiate(decl)?;
            self.insert_primary(key, instance, decl)?;
            Ok(true)
        } else if let Some(name) = marker_value(decl, MarkerKind::Service) {
            let key = if is_blank(name) {
                to_lower_first_case(decl.name)
            } else {
                name.trim().to_string()
            };
            let instance = instantiate(decl)?;
            self.insert_primary(key, Arc::clone(&instance), decl)?;

            for capability in decl.capabilities {
                if let Some(existing) = self.entries.get(*capability) {
                    return Err(ContextError::DuplicateCapability {
                        key: capability.to_string(),
                        existing: existing.decl.qualified_name(),
                        duplicate: decl.qualified_name(),
                    });
                }
                debug!("Binding capability {} -> {}", capability, decl.name);
                self.entries.insert(
                    capability.to_string(),
                    RegistryEntry {
                        key: capability.to_string(),
                        instance: Arc::clone(&instance),
                        decl,
                        kind: EntryKind::Capability,
                    },
                );
            }
            Ok(true)
        } else {
            debug!("Skipping {}: no role marker", decl.qualified_name());
            Ok(false)
        }
    }

    fn insert_primary(
        &mut self,
        key: String,
        instance: Arc<dyn Component>,
        decl: &'static ComponentDecl,
    ) -> ContextResult<()> {
        if let Some(existing) = self.entries.get(&key) {
            return Err(ContextError::DuplicateBean {
                key,
                existing: existing.decl.qualified_name(),
                duplicate: decl.qualified_name(),
            });
        }

        info!("📦 Registering: {} as \"{}\"", decl.name, key);
        print_sub_task(&key, decl.name);
        self.entries.insert(
            key.clone(),
            RegistryEntry {
                key,
                instance,
                decl,
                kind: EntryKind::Primary,
            },
        );
        Ok(())
    }
}

/// 선언의 팩토리를 호출합니다. panic도 생성 실패로 취급합니다.
fn instantiate(decl: &'static ComponentDecl) -> ContextResult<Arc<dyn Component>> {
    let factory = decl.factory;
    match panic::catch_unwind(AssertUnwindSafe(factory)) {
        Ok(Ok(instance)) => Ok(instance),
        Ok(Err(e)) => Err(ContextError::Instantiation {
            type_name: decl.qualified_name(),
            reason: e.to_string(),
        }),
        Err(payload) => Err(ContextError::Instantiation {
            type_name: decl.qualified_name(),
            reason: format!("constructor panicked: {}", panic_message(payload.as_ref())),
        }),
    }
}
