//! 기동 시 스캔되는 데모 애플리케이션 패키지
//!
//! `application.properties`의 `scanPackage=app`이 이 디렉터리를 가리킵니다.
//! 각 컴포넌트 모듈은 자신의 선언을 `inventory::submit!`으로 제출하므로
//! 새 컨트롤러나 서비스는 파일을 추가하고 `mod` 선언만 하면 됩니다.

pub mod controller;
pub mod service;
