//! # Request Dispatcher
//!
//! 요청마다 다음 순서로 동작하는 상태 기계입니다.
//!
//! ```text
//! Normalize ─▶ Lookup ─┬─ miss ─▶ 404 not found!!
//!                      └─ hit ──▶ Resolve owner ─▶ Extract parameter ─▶ Invoke ─▶ Respond
//! ```
//!
//! 조회, 소유자 해석, 파라미터 추출, 호출 중 발생한 모든 에러와 panic은
//! [`Dispatcher::dispatch`] 경계에서 포착되어 에러 응답으로 변환됩니다.
//! 호스팅 HTTP 서버로 전파되는 일은 없으며, 다른 동시 요청에도 영향을 주지 않습니다.
//!
//! 디스패처는 전송 계층과 독립적인 [`DispatchRequest`]/[`DispatchResponse`]만 다루며,
//! actix-web 어댑터는 [`crate::handlers::dispatch`]에 있습니다.

use std::collections::HashMap;
use std::panic::{self, AssertUnwindSafe};

use actix_web::http::{Method, StatusCode};
use actix_web::HttpResponse;
use log::{debug, error, warn};
use uuid::Uuid;

use crate::core::errors::{panic_message, AppError, AppResult};
use crate::core::registry::Registry;
use crate::core::routing::{normalize_request_path, RouteTable};
use crate::utils::string_utils::to_lower_first_case;

pub const DEFAULT_CONTENT_TYPE: &str = "text/plain; charset=utf-8";

/// 전송 계층과 독립적인 요청 표현
#[derive(Debug, Clone)]
pub struct DispatchRequest {
    method: Method,
    path: String,
    params: HashMap<String, Vec<String>>,
}

impl DispatchRequest {
    pub fn new(method: Method, path: impl Into<String>) -> Self {
        Self {
            method,
            path: path.into(),
            params: HashMap::new(),
        }
    }

    pub fn get(path: impl Into<String>) -> Self {
        Self::new(Method::GET, path)
    }

    pub fn post(path: impl Into<String>) -> Self {
        Self::new(Method::POST, path)
    }

    /// 파라미터 값을 하나 추가합니다. 같은 이름의 기존 값 뒤에 붙습니다.
    pub fn with_param(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.params.entry(name.into()).or_default().push(value.into());
        self
    }

    /// `application/x-www-form-urlencoded` 문자열의 파라미터를 추가합니다.
    pub fn with_query(mut self, query: &str) -> Self {
        for (name, value) in parse_urlencoded(query) {
            self.params.entry(name).or_default().push(value);
        }
        self
    }

    pub fn method(&self) -> &Method {
        &self.method
    }

    pub fn path(&self) -> &str {
        &self.path
    }

    /// 이름에 해당하는 첫 번째 값
    pub fn parameter(&self, name: &str) -> Option<&str> {
        self.params
            .get(name)
            .and_then(|values| values.first())
            .map(String::as_str)
    }

    pub fn parameter_values(&self, name: &str) -> Option<&[String]> {
        self.params.get(name).map(Vec::as_slice)
    }
}

/// `a=1&b=x+y&c=%ED%95%9C` 형식을 (이름, 값) 목록으로 디코딩합니다.
///
/// `+`는 공백으로 바뀌며, 잘못된 퍼센트 인코딩은 원문 그대로 유지합니다.
/// 이름이 비어 있는 쌍은 버립니다.
pub fn parse_urlencoded(input: &str) -> Vec<(String, String)> {
    input
        .split('&')
        .filter(|pair| !pair.is_empty())
        .filter_map(|pair| {
            let (name, value) = pair.split_once('=').unwrap_or((pair, ""));
            let name = decode_component(name);
            if name.is_empty() {
                None
            } else {
                Some((name, decode_component(value)))
            }
        })
        .collect()
}

fn decode_component(raw: &str) -> String {
    let spaced = raw.replace('+', " ");
    match urlencoding::decode(&spaced) {
        Ok(decoded) => decoded.into_owned(),
        Err(_) => spaced,
    }
}

/// 핸들러가 결과를 기록하는 응답 채널
#[derive(Debug, Clone)]
pub struct ResponseWriter {
    status: StatusCode,
    content_type: String,
    body: String,
}

impl ResponseWriter {
    pub fn new() -> Self {
        Self {
            status: StatusCode::OK,
            content_type: DEFAULT_CONTENT_TYPE.to_string(),
            body: String::new(),
        }
    }

    pub fn write(&mut self, text: &str) {
        self.body.push_str(text);
    }

    pub fn set_status(&mut self, status: StatusCode) {
        self.status = status;
    }

    pub fn set_content_type(&mut self, content_type: impl Into<String>) {
        self.content_type = content_type.into();
    }

    pub fn status(&self) -> StatusCode {
        self.status
    }

    pub fn body(&self) -> &str {
        &self.body
    }
}

impl Default for ResponseWriter {
    fn default() -> Self {
        Self::new()
    }
}

/// 디스패치 결과
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DispatchResponse {
    pub status: StatusCode,
    pub content_type: String,
    pub body: String,
}

impl DispatchResponse {
    pub fn from_error(error: &AppError) -> Self {
        Self {
            status: error.status(),
            content_type: DEFAULT_CONTENT_TYPE.to_string(),
            body: error.body(),
        }
    }

    pub fn into_http_response(self) -> HttpResponse {
        HttpResponse::build(self.status)
            .content_type(self.content_type)
            .body(self.body)
    }
}

impl From<ResponseWriter> for DispatchResponse {
    fn from(writer: ResponseWriter) -> Self {
        Self {
            status: writer.status,
            content_type: writer.content_type,
            body: writer.body,
        }
    }
}

/// 핸들러 호출 한 번 동안만 유효한 요청 컨텍스트
pub struct RequestContext<'a> {
    path: &'a str,
    param: Option<String>,
    request: &'a DispatchRequest,
    response: &'a mut ResponseWriter,
}

impl<'a> RequestContext<'a> {
    pub fn new(
        path: &'a str,
        param: Option<String>,
        request: &'a DispatchRequest,
        response: &'a mut ResponseWriter,
    ) -> Self {
        Self {
            path,
            param,
            request,
            response,
        }
    }

    /// 정규화된 요청 경로
    pub fn path(&self) -> &str {
        self.path
    }

    /// 핸들러가 선언한 파라미터의 추출된 값
    pub fn param(&self) -> Option<&str> {
        self.param.as_deref()
    }

    /// 추출된 파라미터 값을 요구합니다.
    ///
    /// 선언된 파라미터가 요청에 없으면 디스패처가 호출 전에 400으로 응답하므로,
    /// 여기서 값이 없다는 것은 핸들러가 파라미터를 선언하지 않았다는 뜻입니다.
    ///
    /// # Errors
    ///
    /// * `AppError::InternalError` - 경로의 핸들러가 요청 파라미터를 선언하지 않음
    pub fn required_param(&self) -> AppResult<&str> {
        self.param.as_deref().ok_or_else(|| {
            AppError::InternalError(format!(
                "handler for {} declares no request parameter",
                self.path
            ))
        })
    }

    pub fn request(&self) -> &DispatchRequest {
        self.request
    }

    pub fn response(&mut self) -> &mut ResponseWriter {
        &mut *self.response
    }

    pub fn write(&mut self, text: &str) {
        self.response.write(text);
    }
}

/// 레지스트리와 라우트 테이블을 빌려 요청을 처리하는 디스패처
pub struct Dispatcher<'a> {
    registry: &'a Registry,
    routes: &'a RouteTable,
    context_path: &'a str,
}

impl<'a> Dispatcher<'a> {
    pub fn new(registry: &'a Registry, routes: &'a RouteTable, context_path: &'a str) -> Self {
        Self {
            registry,
            routes,
            context_path,
        }
    }

    /// 요청을 처리하고 항상 응답을 반환합니다.
    ///
    /// GET과 POST는 동일하게 처리되며, 그 외 메서드는 405로 응답합니다.
    pub fn dispatch(&self, request: &DispatchRequest) -> DispatchResponse {
        let request_id = Uuid::new_v4();
        debug!("[{}] {} {}", request_id, request.method(), request.path());

        let mut response = ResponseWriter::new();
        let outcome = panic::catch_unwind(AssertUnwindSafe(|| {
            self.try_dispatch(request, &mut response)
        }));

        let error = match outcome {
            Ok(Ok(())) => return response.into(),
            Ok(Err(error)) => error,
            Err(payload) => AppError::Panic(panic_message(payload.as_ref())),
        };

        match &error {
            AppError::NotFound(path) => debug!("[{}] no route for {}", request_id, path),
            AppError::MissingParameter(_) | AppError::MethodNotAllowed(_) => {
                warn!("[{}] {}", request_id, error)
            }
            _ => error!(
                "[{}] {} {} failed: {}",
                request_id,
                request.method(),
                request.path(),
                error.diagnostics()
            ),
        }
        DispatchResponse::from_error(&error)
    }

    fn try_dispatch(
        &self,
        request: &DispatchRequest,
        response: &mut ResponseWriter,
    ) -> AppResult<()> {
        let method = request.method();
        if *method != Method::GET && *method != Method::POST {
            return Err(AppError::MethodNotAllowed(method.to_string()));
        }

        // Normalize → Lookup
        let path = normalize_request_path(request.path(), self.context_path);
        let route = self
            .routes
            .get(&path)
            .ok_or_else(|| AppError::NotFound(path.clone()))?;

        // Resolve owner: 선언 타입 이름에서 등록 시와 같은 규칙으로 키를 유도
        let owner_key = to_lower_first_case(route.declaring_type.name);
        let owner = self
            .registry
            .get(&owner_key)
            .ok_or_else(|| AppError::OwnerNotFound(owner_key.clone()))?;

        // Extract parameter
        let param = match route.method.request_param() {
            Some(name) => {
                let value = request
                    .parameter(name)
                    .ok_or_else(|| AppError::MissingParameter(name.to_string()))?;
                Some(value.to_string())
            }
            None => None,
        };

        // Invoke
        let mut ctx = RequestContext::new(&path, param, request, response);
        (route.method.handler)(owner.as_ref(), &mut ctx)
    }
}
