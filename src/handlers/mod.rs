//! # HTTP Request Handlers Module
//!
//! actix-web 요청을 전송 계층과 독립적인 [`DispatchRequest`]로 변환하여
//! [`ApplicationContext`]의 디스패처에 넘기는 어댑터입니다.
//!
//! 개별 엔드포인트 핸들러는 없습니다. 모든 경로가 하나의 핸들러
//! ([`dispatch::dispatch_request`])로 들어오며, 실제 라우팅은 스캔된 컨트롤러로
//! 구성된 라우트 테이블이 담당합니다.
//!
//! ```text
//! HttpRequest ─▶ to_dispatch_request ─▶ Dispatcher ─▶ DispatchResponse ─▶ HttpResponse
//! ```
//!
//! [`DispatchRequest`]: crate::core::dispatcher::DispatchRequest
//! [`ApplicationContext`]: crate::core::context::ApplicationContext

pub mod dispatch;
