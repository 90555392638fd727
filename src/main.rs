//! 미니 MVC 서버 메인 애플리케이션
//!
//! 애플리케이션 컨텍스트를 초기화한 뒤 Actix-web HTTP 서버를 구동합니다.
//! 초기화가 실패하면 서버는 시작되지 않습니다.

use actix_web::{middleware, web, App, HttpServer};
use dotenv::dotenv;
use env_logger::Env;
use log::{error, info};
use mini_mvc::config::{ContextConfig, ServerConfig};
use mini_mvc::core::context::ApplicationContext;
use mini_mvc::routes::configure_all_routes;

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    // 환경 설정 및 로깅 초기화
    load_env_file();
    init_logging();

    info!("🚀 미니 MVC 서버 시작중...");

    let context = initialize_context().map_err(|e| {
        error!("❌ 애플리케이션 컨텍스트 초기화 실패: {}", e);
        std::io::Error::other(e)
    })?;

    info!("✅ 애플리케이션 컨텍스트가 초기화되었습니다!");

    start_http_server(web::Data::new(context)).await
}

/// 프로퍼티 파일을 읽어 애플리케이션 컨텍스트를 초기화합니다
///
/// # Errors
///
/// * `ContextError` - 설정 로드, 스캔, 등록, 주입, 라우트 구성 중 하나라도 실패
fn initialize_context() -> Result<ApplicationContext, mini_mvc::core::ContextError> {
    let location = ContextConfig::location();
    info!("📄 Context configuration: {}", location.display());

    let config = ContextConfig::load()?;
    ApplicationContext::initialize(&config)
}

/// HTTP 서버를 구성하고 실행합니다
///
/// 모든 요청은 단일 디스패치 핸들러로 전달됩니다.
///
/// # Errors
///
/// * `std::io::Error` - 포트 바인딩 실패 또는 서버 실행 오류
async fn start_http_server(context: web::Data<ApplicationContext>) -> std::io::Result<()> {
    let bind_address = ServerConfig::bind_address();
    let workers = ServerConfig::workers();

    info!("🌐 서버가 http://{} 에서 실행중입니다", bind_address);
    for path in context.routes().paths() {
        info!("📍 http://{}{}{}", bind_address, context.context_path(), path);
    }

    HttpServer::new(move || {
        App::new()
            .app_data(context.clone())
            .wrap(middleware::Logger::default())
            .configure(configure_all_routes)
    })
    .bind(bind_address)?
    .workers(workers)
    .run()
    .await
}

/// 환경별 설정 파일을 로드합니다
///
/// # Environment Variables
///
/// * `PROFILE=dev` - .env.dev 파일 로드 (기본값)
/// * `PROFILE=prod` - .env.prod 파일 로드
/// * 기타 - 기본 .env 파일 로드
fn load_env_file() {
    let profile = std::env::var("PROFILE").unwrap_or_else(|_| "dev".to_string());

    info!("Current profile: {}", profile);

    match profile.as_str() {
        "prod" => match dotenv::from_filename(".env.prod") {
            Ok(_) => info!(".env.prod 파일 로드 됨"),
            Err(e) => error!(".env.prod 파일 로드 실패: {}", e),
        },
        "dev" => match dotenv::from_filename(".env.dev") {
            Ok(_) => info!(".env.dev 파일 로드 됨"),
            Err(e) => error!(".env.dev 파일 로드 실패: {}", e),
        },
        _ => {
            dotenv().ok();
            info!("기본 .env 파일 로드");
        }
    }
}

/// 로깅 시스템을 초기화합니다
///
/// # Environment Variables
///
/// * `RUST_LOG` - 로깅 레벨 설정 (기본값: "info,actix_web=info")
///
/// ```bash
/// # 디스패치마다 요청 ID 출력
/// RUST_LOG=mini_mvc=debug cargo run
/// ```
fn init_logging() {
    env_logger::init_from_env(Env::default().default_filter_or("info,actix_web=info"));
}
