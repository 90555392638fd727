use std::any::Any;
use std::sync::Arc;

use crate::app::service::{DemoService, DEMO_SERVICE};
use crate::core::component::Component;
use crate::core::metadata::{BoxError, ComponentDecl, ComponentRegistration, Marker};

/// `demoServiceImpl` 키와 [`DEMO_SERVICE`] capability 키로 등록됩니다.
#[derive(Debug, Default)]
pub struct DemoServiceImpl;

impl DemoServiceImpl {
    fn create() -> Result<Arc<dyn Component>, BoxError> {
        Ok(Arc::new(Self))
    }
}

impl DemoService for DemoServiceImpl {
    fn get(&self, name: &str) -> String {
        format!("hello {}", name)
    }
}

impl Component for DemoServiceImpl {
    fn as_any(&self) -> &dyn Any {
        self
    }

    fn provide(self: Arc<Self>, capability: &str) -> Option<Box<dyn Any + Send + Sync>> {
        match capability {
            DEMO_SERVICE => Some(Box::new(self as Arc<dyn DemoService>)),
            _ => None,
        }
    }
}

pub static DEMO_SERVICE_IMPL: ComponentDecl = ComponentDecl {
    name: "DemoServiceImpl",
    module_path: module_path!(),
    markers: &[Marker::service("")],
    capabilities: &[DEMO_SERVICE],
    fields: &[],
    methods: &[],
    factory: DemoServiceImpl::create,
};

inventory::submit! { ComponentRegistration(&DEMO_SERVICE_IMPL) }
