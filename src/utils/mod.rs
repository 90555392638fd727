//! 공통 유틸리티 함수 모듈
//!
//! 프레임워크 전체에서 사용되는 공통 유틸리티 함수들을 제공합니다.
//!
//! # Modules
//!
//! - [`string_utils`] - 레지스트리 키 유도, 공백 검사
//! - [`display_terminal`] - 초기화 과정 터미널 출력

pub mod string_utils;
pub mod display_terminal;
