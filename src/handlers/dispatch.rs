//! 단일 진입 디스패치 핸들러

use actix_web::http::header::{self, HeaderMap};
use actix_web::http::Method;
use actix_web::{web, HttpRequest, HttpResponse};

use crate::core::context::ApplicationContext;
use crate::core::dispatcher::DispatchRequest;
use crate::core::errors::{AppResult, ErrorContext};

const FORM_URLENCODED: &str = "application/x-www-form-urlencoded";

/// 모든 요청을 애플리케이션 컨텍스트의 디스패처로 전달합니다.
///
/// # Errors
///
/// * `AppError::InternalError` - POST 폼 본문이 UTF-8이 아님
pub async fn dispatch_request(
    req: HttpRequest,
    body: web::Bytes,
    context: web::Data<ApplicationContext>,
) -> AppResult<HttpResponse> {
    let request = to_dispatch_request(&req, &body)?;
    Ok(context.dispatch(&request).into_http_response())
}

/// `HttpRequest`를 [`DispatchRequest`]로 변환합니다.
///
/// 쿼리 문자열 파라미터가 먼저 들어가고, `application/x-www-form-urlencoded`
/// POST 본문의 파라미터가 그 뒤에 붙습니다.
pub fn to_dispatch_request(req: &HttpRequest, body: &[u8]) -> AppResult<DispatchRequest> {
    let mut request =
        DispatchRequest::new(req.method().clone(), req.path()).with_query(req.query_string());

    if *req.method() == Method::POST && is_form(req.headers()) && !body.is_empty() {
        let form = std::str::from_utf8(body).context("Invalid form body")?;
        request = request.with_query(form);
    }

    Ok(request)
}

fn is_form(headers: &HeaderMap) -> bool {
    headers
        .get(header::CONTENT_TYPE)
        .and_then(|value| value.to_str().ok())
        .map(|value| value.trim_start().to_ascii_lowercase().starts_with(FORM_URLENCODED))
        .unwrap_or(false)
}
