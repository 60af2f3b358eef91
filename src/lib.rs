//! xstream library root.
//! Clean Architecture 계층(domain/application/infrastructure/interface)을 노출한다.

use anyhow::Result;

pub mod application;
pub mod domain;
pub mod infrastructure;
pub mod interface;

use interface::cli::{AppComposition, ShellExit};

/// 라이브러리 직접 호출용 대화형 쉘 실행 함수.
pub async fn run() -> Result<ShellExit> {
    let composition = AppComposition::new()?;
    interface::cli::run_repl(&composition).await
}

/// 설정 점검 JSON 출력용 함수.
/// 조립 전에 호출할 수 있어야 하므로 설정 저장소 어댑터만 직접 쓴다.
pub fn inspect_config_pretty_json() -> Result<String> {
    use application::ports::ConfigRepository;

    infrastructure::adapters::JsonConfigRepository.inspect_pretty_json()
}
