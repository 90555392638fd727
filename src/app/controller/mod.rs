//! 요청 핸들러를 가진 컨트롤러

pub mod demo_action;
