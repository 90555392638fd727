//! 컨트롤러에 주입되는 서비스와 그 capability 트레이트

pub mod demo_service_impl;

/// [`DemoService`]의 capability 키
pub const DEMO_SERVICE: &str = concat!(module_path!(), "::DemoService");

/// 이름을 받아 인사말을 만드는 서비스
pub trait DemoService: Send + Sync {
    fn get(&self, name: &str) -> String;
}
