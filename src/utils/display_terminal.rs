//! 터미널 출력 포맷팅 유틸리티
//!
//! 애플리케이션 컨텍스트 초기화 과정에서 사용되는 터미널 출력 함수들을 제공합니다.
//! 박스 형태의 제목, 진행 단계 표시, 완료 상태 등을 시각적으로 표현합니다.

/// 박스 내부 너비 (칸)
const BOX_WIDTH: usize = 50;

/// 박스 형태로 둘러싸인 제목을 출력합니다
///
/// 텍스트는 자동으로 중앙 정렬됩니다.
///
/// Output:
/// ```text
/// ╔══════════════════════════════════════════════════╗
/// ║        🔄 INITIALIZING APPLICATION CONTEXT       ║
/// ╚══════════════════════════════════════════════════╝
/// ```
pub fn print_boxed_title(title: &str) {
    let border = "═".repeat(BOX_WIDTH);

    println!("╔{}╗", border);
    // 이모지가 두 칸을 차지하므로 한 칸 덜 채운다
    println!("║{:^width$}║", title, width = BOX_WIDTH - 1);
    println!("╚{}╝", border);
}

/// 진행 단계 시작을 표시합니다
///
/// ```text
/// → Step 1: Scanning package app
/// ```
pub fn print_step_start(step: u8, description: &str) {
    println!("→ Step {}: {}", step, description);
}

/// 진행 단계 완료를 처리된 항목 수와 함께 표시합니다
///
/// ```text
/// ✓ Step 1: Candidates found (5 items)
/// ```
pub fn print_step_complete(step: u8, description: &str, count: usize) {
    println!("✓ Step {}: {} ({} items)", step, description, count);
}

/// 서브 작업의 상태를 표시합니다
///
/// ```text
///    ├─ demoAction: DemoAction
///    ├─ /demo/query: DemoAction::query
/// ```
pub fn print_sub_task(name: &str, status: &str) {
    println!("   ├─ {}: {}", name, status);
}

/// 최종 완료 요약을 출력합니다
///
/// ```text
/// ╔══════════════════════════════════════════════════╗
/// ║        🎉 APPLICATION CONTEXT INITIALIZED        ║
/// ╚══════════════════════════════════════════════════╝
///    🎮 Controllers: 1
///    🔧 Services: 1
///    📦 Registry Entries: 3
///    🧭 Routes: 1
/// ```
pub fn print_final_summary(controllers: usize, services: usize, entries: usize, routes: usize) {
    println!();
    print_boxed_title("🎉 APPLICATION CONTEXT INITIALIZED");
    println!("   🎮 Controllers: {}", controllers);
    println!("   🔧 Services: {}", services);
    println!("   📦 Registry Entries: {}", entries);
    println!("   🧭 Routes: {}", routes);
    println!();
}
