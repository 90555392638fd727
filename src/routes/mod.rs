//! HTTP 라우트 설정 모듈
//!
//! 개별 API 경로를 등록하지 않고, 모든 경로와 메서드를 하나의 디스패치 핸들러로
//! 보냅니다. 경로 해석과 404/405 응답은 디스패처가 담당합니다.
//!
//! # Examples
//!
//! ```rust,ignore
//! use actix_web::{web, App};
//!
//! let context = web::Data::new(ApplicationContext::initialize(&config)?);
//! let app = App::new()
//!     .app_data(context)
//!     .configure(configure_all_routes);
//! ```

use actix_web::web;

use crate::handlers;

/// 모든 라우트를 설정합니다
///
/// `web::Data<ApplicationContext>`가 앱 데이터로 등록되어 있어야 합니다.
pub fn configure_all_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(web::resource("/{tail:.*}").to(handlers::dispatch::dispatch_request));
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::ContextConfig;
    use crate::core::context::ApplicationContext;
    use actix_web::http::header::ContentType;
    use actix_web::http::StatusCode;
    use actix_web::{test, App};

    fn context() -> web::Data<ApplicationContext> {
        let config = ContextConfig::new("app")
            .with_source_root(concat!(env!("CARGO_MANIFEST_DIR"), "/src"));
        web::Data::new(ApplicationContext::initialize(&config).unwrap())
    }

    #[actix_web::test]
    async fn test_get_demo_query() {
        let app = test::init_service(
            App::new().app_data(context()).configure(configure_all_routes),
        )
        .await;

        let req = test::TestRequest::get().uri("/demo/query?name=world").to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::OK);

        let body = test::read_body(resp).await;
        assert_eq!(body, web::Bytes::from_static(b"hello world"));
    }

    #[actix_web::test]
    async fn test_post_form_is_dispatched_like_get() {
        let app = test::init_service(
            App::new().app_data(context()).configure(configure_all_routes),
        )
        .await;

        let req = test::TestRequest::post()
            .uri("/demo/query")
            .insert_header(ContentType::form_url_encoded())
            .set_payload("name=form")
            .to_request();
        let body = test::call_and_read_body(&app, req).await;
        assert_eq!(body, web::Bytes::from_static(b"hello form"));
    }

    #[actix_web::test]
    async fn test_unknown_path_returns_not_found_body() {
        let app = test::init_service(
            App::new().app_data(context()).configure(configure_all_routes),
        )
        .await;

        let req = test::TestRequest::get().uri("/demo/missing").to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::NOT_FOUND);

        let body = test::read_body(resp).await;
        assert_eq!(body, web::Bytes::from_static(b"404 not found!!"));
    }

    #[actix_web::test]
    async fn test_missing_parameter_is_contained() {
        let app = test::init_service(
            App::new().app_data(context()).configure(configure_all_routes),
        )
        .await;

        let req = test::TestRequest::get().uri("/demo/query").to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::BAD_REQUEST);

        let body = test::read_body(resp).await;
        assert_eq!(body, web::Bytes::from_static(b"400 Missing request parameter: name"));
    }

    #[actix_web::test]
    async fn test_other_methods_are_rejected() {
        let app = test::init_service(
            App::new().app_data(context()).configure(configure_all_routes),
        )
        .await;

        let req = test::TestRequest::put().uri("/demo/query?name=x").to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::METHOD_NOT_ALLOWED);
    }
}
