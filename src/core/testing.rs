//! 테스트 전용 컴포넌트 픽스처
//!
//! `inventory`에 제출하지 않으므로 전역 카탈로그에는 나타나지 않으며,
//! 각 테스트가 [`Catalog::from_decls`]로 필요한 조합만 골라 사용합니다.
//! 모든 선언의 유닛 이름은 [`UNIT`]입니다.

use std::any::Any;
use std::sync::Arc;

use crate::core::component::{downcast, Autowired, Catalog, Component};
use crate::core::dispatcher::RequestContext;
use crate::core::errors::{AppError, AppResult};
use crate::core::metadata::{BoxError, ComponentDecl, FieldDecl, Marker, MethodDecl, ParamDecl};

pub const UNIT: &str = "core.testing";

pub const GREETER: &str = concat!(module_path!(), "::Greeter");

pub trait Greeter: Send + Sync {
    fn greet(&self, name: &str) -> String;
}

pub fn candidates() -> Vec<String> {
    vec![UNIT.to_string()]
}

pub fn catalog(decls: &[&'static ComponentDecl]) -> Catalog {
    Catalog::from_decls(decls.iter().copied())
}

// ---- services ----

fn create_greeter() -> Result<Arc<dyn Component>, BoxError> {
    Ok(Arc::new(GreeterImpl))
}

fn create_loud() -> Result<Arc<dyn Component>, BoxError> {
    Ok(Arc::new(LoudGreeter))
}

fn create_broken() -> Result<Arc<dyn Component>, BoxError> {
    Err("database unavailable".into())
}

fn create_panicking() -> Result<Arc<dyn Component>, BoxError> {
    panic!("constructor exploded")
}

fn create_root() -> Result<Arc<dyn Component>, BoxError> {
    Ok(Arc::new(RootController))
}

pub struct GreeterImpl;

impl Greeter for GreeterImpl {
    fn greet(&self, name: &str) -> String {
        format!("hello {}", name)
    }
}

impl Component for GreeterImpl {
    fn as_any(&self) -> &dyn Any {
        self
    }

    fn provide(self: Arc<Self>, capability: &str) -> Option<Box<dyn Any + Send + Sync>> {
        match capability {
            GREETER => Some(Box::new(self as Arc<dyn Greeter>)),
            _ => None,
        }
    }
}

pub static GREETER_IMPL: ComponentDecl = ComponentDecl {
    name: "GreeterImpl",
    module_path: module_path!(),
    markers: &[Marker::service("")],
    capabilities: &[GREETER],
    fields: &[],
    methods: &[],
    factory: create_greeter,
};

pub struct LoudGreeter;

impl Greeter for LoudGreeter {
    fn greet(&self, name: &str) -> String {
        format!("HELLO {}!", name.to_uppercase())
    }
}

impl Component for LoudGreeter {
    fn as_any(&self) -> &dyn Any {
        self
    }

    fn provide(self: Arc<Self>, capability: &str) -> Option<Box<dyn Any + Send + Sync>> {
        match capability {
            GREETER => Some(Box::new(self as Arc<dyn Greeter>)),
            _ => None,
        }
    }
}

/// 명시적 이름을 가지며 `GreeterImpl`과 같은 capability를 선언
pub static LOUD_GREETER: ComponentDecl = ComponentDecl {
    name: "LoudGreeter",
    module_path: module_path!(),
    markers: &[Marker::service("loud")],
    capabilities: &[GREETER],
    fields: &[],
    methods: &[],
    factory: create_loud,
};

/// `loud` 이름으로만 조회되는 변형 (capability 키를 점유하지 않음)
pub static LOUD_GREETER_NO_CAPABILITY: ComponentDecl = ComponentDecl {
    name: "LoudGreeter",
    module_path: module_path!(),
    markers: &[Marker::service("loud")],
    capabilities: &[],
    fields: &[],
    methods: &[],
    factory: create_loud,
};

/// `loud` 이름을 갖지만 `Greeter` 뷰를 제공하지 않는 서비스
pub static ROOT_AS_LOUD: ComponentDecl = ComponentDecl {
    name: "MuteService",
    module_path: module_path!(),
    markers: &[Marker::service("loud")],
    capabilities: &[],
    fields: &[],
    methods: &[],
    factory: create_root,
};

/// capability 없이 이름만 가진 서비스
pub static QUIET_GREETER: ComponentDecl = ComponentDecl {
    name: "QuietGreeter",
    module_path: module_path!(),
    markers: &[Marker::service("  quiet  ")],
    capabilities: &[],
    fields: &[],
    methods: &[],
    factory: create_loud,
};

/// `GreeterImpl`의 기본 키와 충돌하는 명시적 이름
pub static SHADOW_GREETER: ComponentDecl = ComponentDecl {
    name: "ShadowGreeter",
    module_path: module_path!(),
    markers: &[Marker::service("greeterImpl")],
    capabilities: &[],
    fields: &[],
    methods: &[],
    factory: create_loud,
};

pub static BROKEN_SERVICE: ComponentDecl = ComponentDecl {
    name: "BrokenService",
    module_path: module_path!(),
    markers: &[Marker::service("")],
    capabilities: &[],
    fields: &[],
    methods: &[],
    factory: create_broken,
};

pub static PANICKING_SERVICE: ComponentDecl = ComponentDecl {
    name: "PanickingService",
    module_path: module_path!(),
    markers: &[Marker::service("")],
    capabilities: &[],
    fields: &[],
    methods: &[],
    factory: create_panicking,
};

/// 역할 마커가 없는 타입
pub static PLAIN_TYPE: ComponentDecl = ComponentDecl {
    name: "PlainType",
    module_path: module_path!(),
    markers: &[Marker::request_mapping("/ignored")],
    capabilities: &[],
    fields: &[],
    methods: &[],
    factory: create_greeter,
};

// ---- controllers ----

pub struct GreetingController {
    pub greeter: Autowired<dyn Greeter>,
    pub loud: Autowired<dyn Greeter>,
    pub absent: Autowired<dyn Greeter>,
}

impl GreetingController {
    fn create() -> Result<Arc<dyn Component>, BoxError> {
        Ok(Arc::new(Self {
            greeter: Autowired::new(),
            loud: Autowired::new(),
            absent: Autowired::new(),
        }))
    }

    fn hello(&self, ctx: &mut RequestContext<'_>) -> AppResult<()> {
        let name = ctx.required_param()?.to_string();
        let greeting = self.greeter.require("greeter")?.greet(&name);
        ctx.write(&greeting);
        Ok(())
    }

    fn shout(&self, ctx: &mut RequestContext<'_>) -> AppResult<()> {
        let name = ctx.required_param()?.to_string();
        let greeting = self.loud.require("loud")?.greet(&name);
        ctx.write(&greeting);
        Ok(())
    }

    fn fail(&self, ctx: &mut RequestContext<'_>) -> AppResult<()> {
        ctx.write("partial output");
        let cause = std::io::Error::new(std::io::ErrorKind::Other, "disk full");
        Err(AppError::HandlerError(Box::new(cause)))
    }

    fn orphan(&self, ctx: &mut RequestContext<'_>) -> AppResult<()> {
        let greeting = self.absent.require("absent")?.greet("nobody");
        ctx.write(&greeting);
        Ok(())
    }
}

impl Component for GreetingController {
    fn as_any(&self) -> &dyn Any {
        self
    }

    fn inject(&self, field: &FieldDecl, dependency: &Arc<dyn Component>) -> Result<(), String> {
        match field.name {
            "greeter" => self.greeter.bind(dependency, field.type_name),
            "loud" => self.loud.bind(dependency, field.type_name),
            "absent" => self.absent.bind(dependency, field.type_name),
            other => Err(format!("unknown field {}", other)),
        }
    }
}

fn hello_handler(this: &dyn Component, ctx: &mut RequestContext<'_>) -> AppResult<()> {
    downcast::<GreetingController>(this)?.hello(ctx)
}

fn shout_handler(this: &dyn Component, ctx: &mut RequestContext<'_>) -> AppResult<()> {
    downcast::<GreetingController>(this)?.shout(ctx)
}

fn fail_handler(this: &dyn Component, ctx: &mut RequestContext<'_>) -> AppResult<()> {
    downcast::<GreetingController>(this)?.fail(ctx)
}

fn explode_handler(_this: &dyn Component, _ctx: &mut RequestContext<'_>) -> AppResult<()> {
    panic!("kaboom")
}

fn orphan_handler(this: &dyn Component, ctx: &mut RequestContext<'_>) -> AppResult<()> {
    downcast::<GreetingController>(this)?.orphan(ctx)
}

fn unreachable_handler(_this: &dyn Component, _ctx: &mut RequestContext<'_>) -> AppResult<()> {
    Err(AppError::InternalError("unmapped method was invoked".to_string()))
}

const NAME_PARAM: &[ParamDecl] = &[ParamDecl {
    name: "name",
    markers: &[Marker::request_param("name")],
}];

pub static GREETING_CONTROLLER: ComponentDecl = ComponentDecl {
    name: "GreetingController",
    module_path: module_path!(),
    markers: &[Marker::controller(), Marker::request_mapping("/greeting")],
    capabilities: &[],
    fields: &[
        FieldDecl {
            name: "greeter",
            type_name: GREETER,
            markers: &[Marker::autowired("")],
        },
        FieldDecl {
            name: "loud",
            type_name: GREETER,
            markers: &[Marker::autowired("loud")],
        },
        FieldDecl {
            name: "absent",
            type_name: GREETER,
            markers: &[Marker::autowired("absentBean")],
        },
    ],
    methods: &[
        MethodDecl {
            name: "hello",
            markers: &[Marker::request_mapping("/hello")],
            params: NAME_PARAM,
            handler: hello_handler,
        },
        MethodDecl {
            name: "shout",
            markers: &[Marker::request_mapping("shout")],
            params: NAME_PARAM,
            handler: shout_handler,
        },
        MethodDecl {
            name: "fail",
            markers: &[Marker::request_mapping("/fail")],
            params: &[],
            handler: fail_handler,
        },
        MethodDecl {
            name: "explode",
            markers: &[Marker::request_mapping("//explode")],
            params: &[],
            handler: explode_handler,
        },
        MethodDecl {
            name: "orphan",
            markers: &[Marker::request_mapping("/orphan")],
            params: &[],
            handler: orphan_handler,
        },
        MethodDecl {
            name: "helper",
            markers: &[],
            params: &[],
            handler: unreachable_handler,
        },
    ],
    factory: GreetingController::create,
};

pub struct RootController;

impl Component for RootController {
    fn as_any(&self) -> &dyn Any {
        self
    }
}

fn index_handler(_this: &dyn Component, ctx: &mut RequestContext<'_>) -> AppResult<()> {
    ctx.response().set_content_type("text/html; charset=utf-8");
    ctx.write("index");
    Ok(())
}

/// 기본 경로 마커가 없는 컨트롤러
pub static ROOT_CONTROLLER: ComponentDecl = ComponentDecl {
    name: "RootController",
    module_path: module_path!(),
    markers: &[Marker::controller()],
    capabilities: &[],
    fields: &[],
    methods: &[MethodDecl {
        name: "index",
        markers: &[Marker::request_mapping("/query")],
        params: &[],
        handler: index_handler,
    }],
    factory: create_root,
};

/// 정규화 후 `/greeting/hello`로 `GreetingController`와 충돌
pub static SHADOW_CONTROLLER: ComponentDecl = ComponentDecl {
    name: "ShadowController",
    module_path: module_path!(),
    markers: &[Marker::controller(), Marker::request_mapping("greeting/")],
    capabilities: &[],
    fields: &[],
    methods: &[MethodDecl {
        name: "hello",
        markers: &[Marker::request_mapping("//hello")],
        params: &[],
        handler: index_handler,
    }],
    factory: create_root,
};
