//! 애플리케이션이 사용하는 설정 스키마(순수 데이터).
//!
//! 주의: 파일/환경변수 접근은 `infrastructure`에서만 수행한다.

use std::path::PathBuf;

use serde::{Deserialize, Serialize};

pub const DEFAULT_ACCOUNTS_FILE: &str = "UserAccounts.txt";
pub const DEFAULT_TRANSACTIONS_FILE: &str = "DailyTransactions.txt";

#[derive(Debug, Clone, Deserialize, Serialize, Default)]
pub struct Config {
    /// 저장 파일 경로 기본값
    #[serde(default)]
    pub defaults: DefaultsConfig,
}

#[derive(Debug, Clone, Deserialize, Serialize, Default)]
pub struct DefaultsConfig {
    /// 계정 파일 읽기 경로
    pub accounts_path: Option<String>,
    /// 계정 파일 쓰기 경로(미지정 시 읽기 경로에 덮어쓴다)
    pub accounts_write_path: Option<String>,
    /// 일일 거래 파일 경로
    pub transactions_path: Option<String>,
}

impl Config {
    pub fn accounts_read_path(&self) -> PathBuf {
        self.defaults
            .accounts_path
            .as_deref()
            .unwrap_or(DEFAULT_ACCOUNTS_FILE)
            .into()
    }

    /// 쓰기 경로는 별도 지정이 없으면 읽기 경로와 같다.
    pub fn accounts_write_path(&self) -> PathBuf {
        self.defaults
            .accounts_write_path
            .as_deref()
            .map(PathBuf::from)
            .unwrap_or_else(|| self.accounts_read_path())
    }

    pub fn transactions_path(&self) -> PathBuf {
        self.defaults
            .transactions_path
            .as_deref()
            .unwrap_or(DEFAULT_TRANSACTIONS_FILE)
            .into()
    }

    /// 후순위(나중 파일) 값으로 덮어쓰는 병합 규칙.
    pub fn merge_from(&mut self, other: Config) {
        self.defaults.merge_from(other.defaults);
    }
}

impl DefaultsConfig {
    pub fn merge_from(&mut self, other: DefaultsConfig) {
        if other.accounts_path.is_some() {
            self.accounts_path = other.accounts_path;
        }
        if other.accounts_write_path.is_some() {
            self.accounts_write_path = other.accounts_write_path;
        }
        if other.transactions_path.is_some() {
            self.transactions_path = other.transactions_path;
        }
    }
}
