//! # Application Context
//!
//! 기동 시 한 번 실행되는 초기화 파이프라인을 담당합니다.
//!
//! ```text
//! Step 1  ComponentScanner    scanPackage → 후보 이름
//! Step 2  RegistryBuilder     후보 → 싱글톤 인스턴스 (+ capability 키)
//! Step 3  DependencyInjector  Autowired 필드 바인딩
//! Step 4  RouteTableBuilder   컨트롤러 메서드 → 정규화된 경로
//! ```
//!
//! 어느 단계든 실패하면 [`ContextError`]를 반환하며 서버는 요청을 받지 않습니다.
//! 성공하면 레지스트리와 라우트 테이블은 더 이상 변경되지 않고,
//! `web::Data<ApplicationContext>`로 모든 워커 스레드에서 잠금 없이 공유됩니다.

use std::sync::Arc;

use log::{debug, info, warn};

use crate::config::ContextConfig;
use crate::core::component::{Catalog, Component};
use crate::core::dispatcher::{DispatchRequest, DispatchResponse, Dispatcher};
use crate::core::errors::ContextResult;
use crate::core::injector::DependencyInjector;
use crate::core::metadata::MarkerKind;
use crate::core::registry::{Registry, RegistryBuilder};
use crate::core::routing::{RouteTable, RouteTableBuilder};
use crate::core::scanner::ComponentScanner;
use crate::utils::display_terminal::{
    print_boxed_title, print_final_summary, print_step_complete, print_step_start,
};

#[derive(Debug)]
pub struct ApplicationContext {
    registry: Registry,
    routes: RouteTable,
    context_path: String,
}

impl ApplicationContext {
    /// `inventory`로 수집된 모든 컴포넌트 선언을 사용해 컨텍스트를 초기화합니다.
    pub fn initialize(config: &ContextConfig) -> ContextResult<Self> {
        Self::initialize_with(config, &Catalog::discover())
    }

    /// 주어진 카탈로그로 컨텍스트를 초기화합니다.
    ///
    /// # Errors
    ///
    /// * `ContextError::ScanRootNotFound` / `ScanIo` - 스캔 실패
    /// * `ContextError::Instantiation` - 컴포넌트 생성 실패
    /// * `ContextError::DuplicateCapability` / `DuplicateBean` - 레지스트리 키 충돌
    /// * `ContextError::Injection` / `UnresolvedDependency` - 주입 실패
    /// * `ContextError::DuplicateRoute` / `OrphanRoute` - 라우트 구성 실패
    pub fn initialize_with(config: &ContextConfig, catalog: &Catalog) -> ContextResult<Self> {
        print_boxed_title("🔄 INITIALIZING APPLICATION CONTEXT");

        if catalog.is_empty() {
            warn!("⚠️ No component declarations linked into the binary");
        } else {
            debug!("Catalog holds {} component declaration(s)", catalog.len());
        }

        print_step_start(1, &format!("Scanning package {}", config.scan_package));
        let candidates = ComponentScanner::new(&config.source_root).scan(&config.scan_package)?;
        print_step_complete(1, "Candidates found", candidates.len());

        print_step_start(2, "Registering components");
        let registry = RegistryBuilder::new(catalog).build(&candidates)?;
        print_step_complete(2, "Registry built", registry.len());

        print_step_start(3, "Injecting dependencies");
        let report = DependencyInjector::new()
            .strict(config.strict_injection)
            .inject_all(&registry)?;
        print_step_complete(3, "Fields injected", report.bound);

        print_step_start(4, "Mapping routes");
        let routes = RouteTableBuilder::build(&registry)?;
        print_step_complete(4, "Routes mapped", routes.len());

        print_final_summary(
            registry.count_role(MarkerKind::Controller),
            registry.count_role(MarkerKind::Service),
            registry.len(),
            routes.len(),
        );
        if !report.unresolved.is_empty() {
            info!("Unset dependencies: {}", report.unresolved.join(", "));
        }

        Ok(Self {
            registry,
            routes,
            context_path: config.context_path.clone(),
        })
    }

    pub fn registry(&self) -> &Registry {
        &self.registry
    }

    pub fn routes(&self) -> &RouteTable {
        &self.routes
    }

    pub fn context_path(&self) -> &str {
        &self.context_path
    }

    /// 레지스트리 키로 인스턴스를 조회합니다.
    pub fn bean(&self, key: &str) -> Option<Arc<dyn Component>> {
        self.registry.get(key).cloned()
    }

    pub fn dispatcher(&self) -> Dispatcher<'_> {
        Dispatcher::new(&self.registry, &self.routes, &self.context_path)
    }

    pub fn dispatch(&self, request: &DispatchRequest) -> DispatchResponse {
        self.dispatcher().dispatch(request)
    }
}
