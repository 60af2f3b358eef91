//! 애플리케이션 계층이 의존하는 포트(추상 인터페이스) 모음.

use anyhow::Result;
use async_trait::async_trait;

use crate::application::config::Config;
use crate::domain::store::{Account, TransactionRecord};

/// 설정 로딩/점검을 담당하는 저장소 포트.
pub trait ConfigRepository: Send + Sync {
    fn load(&self) -> Result<Config>;
    fn inspect_pretty_json(&self) -> Result<String>;
}

/// 계정 디렉터리(UserAccounts 파일) 접근 포트.
#[async_trait]
pub trait AccountDirectory: Send + Sync {
    async fn find(&self, username: &str) -> Result<Option<Account>>;
    /// 동일 username이 이미 있으면 오류다.
    async fn insert(&self, account: Account) -> Result<()>;
    /// 없는 계정이면 오류다.
    async fn remove(&self, username: &str) -> Result<()>;
    /// 잔액을 증액하고 갱신된 잔액을 돌려준다.
    async fn add_credit(&self, username: &str, amount: u64) -> Result<u64>;
}

/// 일일 거래 파일 기록 포트.
#[async_trait]
pub trait TransactionLedger: Send + Sync {
    async fn append(&self, record: &TransactionRecord) -> Result<()>;
}

/// 핸들러 인자(사용자명/수량 등)를 한 줄씩 묻는 입력 포트.
pub trait Prompter: Send + Sync {
    fn ask(&self, label: &str) -> Result<String>;
}

/// 콘솔/로그 출력 추상화 포트.
pub trait Reporter: Send + Sync {
    fn section(&self, name: &str);
    fn kv(&self, key: &str, value: &str);
    fn status(&self, scope: &str, message: &str);
    /// 사용자 실수(거부/미인식 명령 등)에 대한 진단 한 줄.
    fn diagnostic(&self, message: &str);
    fn raw(&self, line: &str);
}
