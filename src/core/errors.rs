//! # Framework Error Handling System
//!
//! 디스패치 프레임워크에서 발생하는 에러를 두 계층으로 나누어 관리합니다.
//!
//! ## 에러 분류
//!
//! | 분류 | 타입 | 정책 |
//! |------|------|------|
//! | 기동 시점 치명적 에러 | [`ContextError`] | 초기화 중단, 서버가 요청을 받지 않음 |
//! | 요청 단위 에러 | [`AppError`] | 해당 요청에만 에러 응답, 다른 요청에 영향 없음 |
//!
//! ## HTTP 응답 매핑
//!
//! | AppError | HTTP Status | 응답 본문 |
//! |----------|-------------|-----------|
//! | `NotFound` | 404 Not Found | `404 not found!!` |
//! | `MissingParameter` | 400 Bad Request | `400 Missing request parameter: <name>` |
//! | `MethodNotAllowed` | 405 Method Not Allowed | `405 Method Not Allowed: <method>` |
//! | 나머지 | 500 Internal Server Error | `500 Exception [<진단 정보>]` |
//!
//! 미등록 경로는 본문만 정해진 계약이지만, 상태 코드도 기본값(200) 대신 404를 사용합니다.
//!
//! 모든 응답 본문은 사람이 읽을 수 있는 평문이며, 구조화된 에러 코드는 제공하지 않습니다.

use std::path::PathBuf;

use actix_web::http::StatusCode;
use thiserror::Error;

/// 요청 처리 중 발생하는 에러
///
/// 디스패처의 최외곽 경계에서 모두 포착되어 [`AppError::body`]와
/// [`AppError::status`]를 통해 HTTP 응답으로 변환됩니다.
/// 호스팅 HTTP 서버까지 전파되는 일은 없습니다.
#[derive(Error, Debug)]
pub enum AppError {
    /// 등록되지 않은 경로 (404 Not Found)
    #[error("Not found: {0}")]
    NotFound(String),

    /// 핸들러가 선언한 요청 파라미터 누락 (400 Bad Request)
    #[error("Missing request parameter: {0}")]
    MissingParameter(String),

    /// GET/POST 이외의 메서드 (405 Method Not Allowed)
    #[error("Method not allowed: {0}")]
    MethodNotAllowed(String),

    /// 라우트의 소유 인스턴스를 레지스트리에서 찾지 못함 (500)
    #[error("No registered instance for key: {0}")]
    OwnerNotFound(String),

    /// 의존성이 주입되지 않은 필드에 접근 (500)
    #[error("Dependency not injected: {0}")]
    DependencyMissing(String),

    /// 핸들러가 반환한 에러 (500)
    #[error("Handler error: {0}")]
    HandlerError(#[source] Box<dyn std::error::Error + Send + Sync>),

    /// 핸들러 실행 중 panic 발생 (500)
    #[error("Handler panicked: {0}")]
    Panic(String),

    /// 내부 서버 에러 (500)
    #[error("Internal server error: {0}")]
    InternalError(String),
}

impl AppError {
    /// 에러에 대응하는 HTTP 상태 코드를 반환합니다.
    pub fn status(&self) -> StatusCode {
        match self {
            AppError::NotFound(_) => StatusCode::NOT_FOUND,
            AppError::MissingParameter(_) => StatusCode::BAD_REQUEST,
            AppError::MethodNotAllowed(_) => StatusCode::METHOD_NOT_ALLOWED,
            _ => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// 클라이언트에게 전달할 평문 응답 본문을 생성합니다.
    ///
    /// 500 계열은 `500 Exception ` 접두어 뒤에 [`AppError::diagnostics`]가 붙습니다.
    pub fn body(&self) -> String {
        match self {
            AppError::NotFound(_) => "404 not found!!".to_string(),
            AppError::MissingParameter(name) => {
                format!("400 Missing request parameter: {}", name)
            }
            AppError::MethodNotAllowed(method) => {
                format!("405 Method Not Allowed: {}", method)
            }
            _ => format!("500 Exception {}", self.diagnostics()),
        }
    }

    /// 에러와 모든 원인(source) 체인을 대괄호 목록으로 렌더링합니다.
    ///
    /// ```rust,ignore
    /// let err = AppError::HandlerError(Box::new(io_error));
    /// assert_eq!(err.diagnostics(), "[Handler error: disk full, disk full]");
    /// ```
    pub fn diagnostics(&self) -> String {
        let mut frames = vec![self.to_string()];
        let mut source = std::error::Error::source(self);
        while let Some(cause) = source {
            frames.push(cause.to_string());
            source = cause.source();
        }
        format!("[{}]", frames.join(", "))
    }
}

impl actix_web::ResponseError for AppError {
    fn status_code(&self) -> StatusCode {
        self.status()
    }

    /// HTTP 에러 응답을 생성합니다.
    ///
    /// 디스패처를 거치지 않는 어댑터 단계의 에러(요청 본문 읽기 실패 등)도
    /// 동일한 평문 형식으로 응답합니다.
    fn error_response(&self) -> actix_web::HttpResponse {
        actix_web::HttpResponse::build(self.status())
            .content_type("text/plain; charset=utf-8")
            .body(self.body())
    }
}

/// 편의성을 위한 Result 타입 별칭
pub type AppResult<T> = Result<T, AppError>;

/// 애플리케이션 컨텍스트 초기화 에러
///
/// 설정 로드, 컴포넌트 스캔, 인스턴스 생성, 의존성 주입, 라우트 구성 중
/// 발생하는 모든 에러입니다. 어느 하나라도 발생하면 서버는 기동하지 않습니다.
#[derive(Error, Debug)]
pub enum ContextError {
    /// 설정 리소스 누락 또는 필수 키 누락
    #[error("Configuration error: {0}")]
    Config(String),

    /// 스캔 패키지가 존재하는 디렉터리로 해석되지 않음
    #[error("Scan root for package \"{package}\" not found: {}", path.display())]
    ScanRootNotFound { package: String, path: PathBuf },

    /// 스캔 중 디렉터리 읽기 실패
    #[error("Failed to read {}: {source}", path.display())]
    ScanIo {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// 컴포넌트 인스턴스 생성 실패 (팩토리 에러 또는 panic)
    #[error("Failed to instantiate {type_name}: {reason}")]
    Instantiation { type_name: String, reason: String },

    /// 동일한 capability 키에 두 번째 서비스가 바인딩되려 함
    #[error("The \"{key}\" is exists!! ({existing} already bound, rejected {duplicate})")]
    DuplicateCapability {
        key: String,
        existing: String,
        duplicate: String,
    },

    /// 동일한 기본 레지스트리 키를 가진 두 컴포넌트
    #[error("Duplicate bean key \"{key}\": {existing} and {duplicate}")]
    DuplicateBean {
        key: String,
        existing: String,
        duplicate: String,
    },

    /// 정규화 후 동일한 경로로 매핑되는 두 핸들러
    #[error("Duplicate route \"{path}\": {existing} and {duplicate}")]
    DuplicateRoute {
        path: String,
        existing: String,
        duplicate: String,
    },

    /// strict 모드에서 주입 대상 키를 찾지 못함
    #[error("Unresolved dependency \"{key}\" for field {owner}.{field}")]
    UnresolvedDependency {
        owner: String,
        field: String,
        key: String,
    },

    /// 찾은 인스턴스가 필드 타입을 제공하지 않음
    #[error("Cannot inject {owner}.{field}: {reason}")]
    Injection {
        owner: String,
        field: String,
        reason: String,
    },

    /// 라우트의 소유 키가 레지스트리에 존재하지 않음
    #[error("Route \"{path}\" is owned by unregistered key \"{owner}\"")]
    OrphanRoute { path: String, owner: String },
}

/// 초기화 단계의 Result 타입 별칭
pub type ContextResult<T> = Result<T, ContextError>;

/// `catch_unwind`로 포착한 panic 페이로드에서 메시지를 추출합니다.
pub fn panic_message(payload: &(dyn std::any::Any + Send)) -> String {
    if let Some(message) = payload.downcast_ref::<&str>() {
        message.to_string()
    } else if let Some(message) = payload.downcast_ref::<String>() {
        message.clone()
    } else {
        "unknown panic payload".to_string()
    }
}

/// 외부 에러를 [`AppError`]로 변환하는 확장 trait
///
/// ```rust,ignore
/// let text = std::str::from_utf8(&body).context("Invalid form body")?;
/// ```
pub trait ErrorContext<T> {
    /// 컨텍스트 메시지와 함께 에러를 변환합니다.
    fn context(self, msg: &str) -> AppResult<T>;

    /// 지연 평가된 컨텍스트 메시지를 사용합니다.
    fn with_context<F>(self, f: F) -> AppResult<T>
    where
        F: FnOnce() -> String;
}

impl<T, E> ErrorContext<T> for Result<T, E>
where
    E: std::fmt::Display,
{
    fn context(self, msg: &str) -> AppResult<T> {
        self.map_err(|e| AppError::InternalError(format!("{}: {}", msg, e)))
    }

    fn with_context<F>(self, f: F) -> AppResult<T>
    where
        F: FnOnce() -> String,
    {
        self.map_err(|e| AppError::InternalError(format!("{}: {}", f(), e)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use actix_web::ResponseError;

    #[test]
    fn test_not_found_body_and_status() {
        let error = AppError::NotFound("/demo/missing".to_string());

        assert_eq!(error.status(), StatusCode::NOT_FOUND);
        assert_eq!(error.body(), "404 not found!!");
    }

    #[test]
    fn test_missing_parameter_response() {
        let error = AppError::MissingParameter("name".to_string());
        let response = error.error_response();

        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        assert_eq!(error.body(), "400 Missing request parameter: name");
    }

    #[test]
    fn test_internal_errors_render_exception_body() {
        let error = AppError::Panic("boom".to_string());

        assert_eq!(error.status(), StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(error.body(), "500 Exception [Handler panicked: boom]");
    }

    #[test]
    fn test_diagnostics_include_source_chain() {
        let io = std::io::Error::new(std::io::ErrorKind::Other, "disk full");
        let error = AppError::HandlerError(Box::new(io));

        let body = error.body();
        assert!(body.starts_with("500 Exception "));
        assert_eq!(error.diagnostics(), "[Handler error: disk full, disk full]");
    }

    #[test]
    fn test_panic_message_extraction() {
        let payload = std::panic::catch_unwind(|| panic!("kaboom")).unwrap_err();
        assert_eq!(panic_message(payload.as_ref()), "kaboom");

        let payload = std::panic::catch_unwind(|| panic!("{} {}", "formatted", 1)).unwrap_err();
        assert_eq!(panic_message(payload.as_ref()), "formatted 1");
    }

    #[test]
    fn test_duplicate_capability_message() {
        let error = ContextError::DuplicateCapability {
            key: "app::service::DemoService".to_string(),
            existing: "DemoServiceImpl".to_string(),
            duplicate: "OtherDemoService".to_string(),
        };

        assert!(error.to_string().contains("app::service::DemoService"));
        assert!(error.to_string().contains("is exists!!"));
    }

    #[test]
    fn test_error_context_wraps_message() {
        let result: Result<(), std::fmt::Error> = Err(std::fmt::Error);
        let error = result.context("Invalid form body").unwrap_err();

        assert!(matches!(error, AppError::InternalError(_)));
        assert!(
            error
                .body()
                .starts_with("500 Exception [Internal server error: Invalid form body: ")
        );

        let result: Result<(), &str> = Err("bad");
        let error = result.with_context(|| format!("field {}", "name")).unwrap_err();
        assert_eq!(error.to_string(), "Internal server error: field name: bad");
    }
}
