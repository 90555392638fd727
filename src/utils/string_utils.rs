//! # 문자열 유틸리티
//!
//! 레지스트리 키 유도와 마커 값 검사에 사용되는 문자열 함수들입니다.

/// 첫 글자만 ASCII 소문자로 바꿉니다.
///
/// 컴포넌트의 기본 레지스트리 키를 유도할 때 사용합니다.
/// 전체 유니코드 case folding이 아니라 첫 문자가 ASCII 대문자일 때만 변환하며,
/// 나머지 문자는 그대로 유지합니다.
///
/// # 예제
/// ```rust,ignore
/// use crate::utils::string_utils::to_lower_first_case;
///
/// assert_eq!(to_lower_first_case("DemoAction"), "demoAction");
/// assert_eq!(to_lower_first_case("URLMapper"), "uRLMapper");
/// assert_eq!(to_lower_first_case("Ärger"), "Ärger");
/// ```
pub fn to_lower_first_case(simple_name: &str) -> String {
    let mut chars = simple_name.chars();
    match chars.next() {
        Some(first) => {
            let mut key = String::with_capacity(simple_name.len());
            key.push(first.to_ascii_lowercase());
            key.push_str(chars.as_str());
            key
        }
        None => String::new(),
    }
}

/// 빈 문자열이거나 공백만 있는지 확인합니다.
///
/// # 예제
/// ```rust,ignore
/// assert!(is_blank(""));
/// assert!(is_blank("  \t"));
/// assert!(!is_blank(" demo "));
/// ```
pub fn is_blank(value: &str) -> bool {
    value.trim().is_empty()
}
