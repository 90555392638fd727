//! `/demo` 아래의 데모 컨트롤러
//!
//! ```text
//! GET /demo/query?name=world  →  hello world
//! ```

use std::any::Any;
use std::sync::Arc;

use crate::app::service::{DemoService, DEMO_SERVICE};
use crate::core::component::{downcast, Autowired, Component};
use crate::core::dispatcher::RequestContext;
use crate::core::errors::AppResult;
use crate::core::metadata::{
    BoxError, ComponentDecl, ComponentRegistration, FieldDecl, Marker, MethodDecl, ParamDecl,
};

pub struct DemoAction {
    demo_service: Autowired<dyn DemoService>,
}

impl DemoAction {
    fn create() -> Result<Arc<dyn Component>, BoxError> {
        Ok(Arc::new(Self {
            demo_service: Autowired::new(),
        }))
    }

    /// 주입된 서비스의 결과를 그대로 응답에 씁니다.
    pub fn query(&self, ctx: &mut RequestContext<'_>) -> AppResult<()> {
        let name = ctx.required_param()?.to_string();
        let result = self.demo_service.require("demo_service")?.get(&name);
        ctx.write(&result);
        Ok(())
    }
}

impl Component for DemoAction {
    fn as_any(&self) -> &dyn Any {
        self
    }

    fn inject(&self, field: &FieldDecl, dependency: &Arc<dyn Component>) -> Result<(), String> {
        match field.name {
            "demo_service" => self.demo_service.bind(dependency, field.type_name),
            other => Err(format!("unknown field {}", other)),
        }
    }
}

fn query_handler(this: &dyn Component, ctx: &mut RequestContext<'_>) -> AppResult<()> {
    downcast::<DemoAction>(this)?.query(ctx)
}

pub static DEMO_ACTION: ComponentDecl = ComponentDecl {
    name: "DemoAction",
    module_path: module_path!(),
    markers: &[Marker::controller(), Marker::request_mapping("/demo")],
    capabilities: &[],
    fields: &[FieldDecl {
        name: "demo_service",
        type_name: DEMO_SERVICE,
        markers: &[Marker::autowired("")],
    }],
    methods: &[MethodDecl {
        name: "query",
        markers: &[Marker::request_mapping("/query")],
        params: &[ParamDecl {
            name: "name",
            markers: &[Marker::request_param("name")],
        }],
        handler: query_handler,
    }],
    factory: DemoAction::create,
};

inventory::submit! { ComponentRegistration(&DEMO_ACTION) }
