//! # Route Table
//!
//! 컨트롤러의 기본 경로와 메서드 경로를 합쳐 정규화된 URL 키를 만들고,
//! 각 키를 호출 가능한 핸들러와 소유 레지스트리 키에 매핑합니다.
//!
//! ## 경로 정규화
//!
//! - 항상 `/`로 시작
//! - 연속된 `/`는 하나로 축약
//! - 그 외의 문자(끝의 `/` 포함)는 그대로 유지
//!
//! ```text
//! base "/demo" + method "/query"   →  /demo/query
//! base ""      + method "/query"   →  /query
//! base "demo/" + method "//query"  →  /demo/query
//! ```
//!
//! 경로 매칭은 정규화된 문자열의 정확한 일치만 지원합니다.
//! 패턴이나 와일드카드 세그먼트는 없습니다.

use std::collections::HashMap;

use log::info;

use crate::core::errors::{ContextError, ContextResult};
use crate::core::metadata::{is_marker_present, marker_value, ComponentDecl, MarkerKind, MethodDecl};
use crate::core::registry::Registry;
use crate::utils::display_terminal::print_sub_task;

/// 경로를 정규형으로 변환합니다.
///
/// 멱등입니다: `normalize_path(&normalize_path(p)) == normalize_path(p)`.
pub fn normalize_path(path: &str) -> String {
    let mut normalized = String::with_capacity(path.len() + 1);
    normalized.push('/');

    for ch in path.chars() {
        if ch == '/' && normalized.ends_with('/') {
            continue;
        }
        normalized.push(ch);
    }

    normalized
}

/// 기본 경로와 메서드 경로를 합성합니다.
pub fn compose_route(base: &str, method_path: &str) -> String {
    normalize_path(&format!("{}/{}", base, method_path))
}

/// 요청 URI에서 마운트(context) 경로 접두어를 제거합니다.
///
/// 접두어는 세그먼트 경계에서만 제거되므로 `/app`은 `/application`에서 제거되지 않습니다.
pub fn strip_context_path<'a>(uri: &'a str, context_path: &str) -> &'a str {
    let prefix = context_path.trim_end_matches('/');
    if prefix.is_empty() {
        return uri;
    }

    match uri.strip_prefix(prefix) {
        Some(rest) if rest.is_empty() || rest.starts_with('/') => rest,
        _ => uri,
    }
}

/// 요청 URI를 라우트 조회용 키로 변환합니다.
pub fn normalize_request_path(uri: &str, context_path: &str) -> String {
    normalize_path(strip_context_path(uri, context_path))
}

/// 정규화된 경로 → (핸들러 메서드, 소유 키)
#[derive(Debug)]
pub struct Route {
    pub path: String,
    pub method: &'static MethodDecl,
    /// 핸들러를 선언한 타입
    pub declaring_type: &'static ComponentDecl,
    pub owner_key: String,
}

impl Route {
    /// 로그용 `Type::method` 표기
    pub fn handler_name(&self) -> String {
        format!("{}::{}", self.declaring_type.name, self.method.name)
    }
}

#[derive(Debug, Default)]
pub struct RouteTable {
    routes: HashMap<String, Route>,
}

impl RouteTable {
    /// 정규화된 경로로 라우트를 조회합니다.
    pub fn get(&self, path: &str) -> Option<&Route> {
        self.routes.get(path)
    }

    /// 정렬된 경로 목록
    pub fn paths(&self) -> Vec<&str> {
        let mut paths: Vec<&str> = self.routes.keys().map(String::as_str).collect();
        paths.sort_unstable();
        paths
    }

    pub fn len(&self) -> usize {
        self.routes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.routes.is_empty()
    }
}

pub struct RouteTableBuilder;

impl RouteTableBuilder {
    /// 레지스트리의 모든 컨트롤러로부터 라우트 테이블을 만듭니다.
    ///
    /// # Errors
    ///
    /// * `ContextError::DuplicateRoute` - 두 핸들러가 같은 정규화 경로를 가짐
    /// * `ContextError::OrphanRoute` - 소유 키가 레지스트리에 없음
    pub fn build(registry: &Registry) -> ContextResult<RouteTable> {
        let mut routes: HashMap<String, Route> = HashMap::new();

        for entry in registry.primary_entries() {
            let decl = entry.decl;
            if !is_marker_present(decl, MarkerKind::Controller) {
                continue;
            }

            let base = marker_value(decl, MarkerKind::RequestMapping).unwrap_or("");
            for method in decl.methods {
                let Some(method_path) = marker_value(method, MarkerKind::RequestMapping) else {
                    continue;
                };

                let path = compose_route(base, method_path);
                let route = Route {
                    path: path.clone(),
                    method,
                    declaring_type: decl,
                    owner_key: entry.key.clone(),
                };

                if let Some(existing) = routes.get(&path) {
                    return Err(ContextError::DuplicateRoute {
                        path,
                        existing: existing.handler_name(),
                        duplicate: route.handler_name(),
                    });
                }
                if !registry.contains_key(&route.owner_key) {
                    return Err(ContextError::OrphanRoute {
                        path,
                        owner: route.owner_key,
                    });
                }

                info!("Mapped : {} -> {}", path, route.handler_name());
                print_sub_task(&path, &route.handler_name());
                routes.insert(path, route);
            }
        }

        Ok(RouteTable { routes })
    }
}
