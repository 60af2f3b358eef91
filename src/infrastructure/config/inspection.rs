//! 적용 설정 진단(inspection) 뷰 모델.

use std::fs;
use std::path::Path;

use serde::Serialize;

use super::loader::LoadedConfig;
use crate::infrastructure::store::accounts::parse_accounts;

#[derive(Debug, Clone, Serialize)]
pub struct ConfigInspection {
    pub searched_paths: Vec<String>,
    pub loaded_paths: Vec<String>,
    pub effective_store: EffectiveStore,
}

#[derive(Debug, Clone, Serialize)]
pub struct EffectiveStore {
    pub accounts_path: String,
    pub accounts_write_path: String,
    pub accounts_file_exists: bool,
    /// 계정 파일이 읽히는 경우에만 채워진다.
    pub account_count: Option<usize>,
    pub transactions_path: String,
    pub transactions_file_exists: bool,
}

impl ConfigInspection {
    pub(crate) fn from_loaded(loaded: LoadedConfig) -> Self {
        let accounts_path = loaded.config.accounts_read_path();
        let transactions_path = loaded.config.transactions_path();

        Self {
            searched_paths: loaded
                .searched_paths
                .iter()
                .map(|p| p.display().to_string())
                .collect(),
            loaded_paths: loaded
                .loaded_paths
                .iter()
                .map(|p| p.display().to_string())
                .collect(),
            effective_store: EffectiveStore {
                accounts_path: accounts_path.display().to_string(),
                accounts_write_path: loaded.config.accounts_write_path().display().to_string(),
                accounts_file_exists: accounts_path.exists(),
                account_count: count_accounts(&accounts_path),
                transactions_path: transactions_path.display().to_string(),
                transactions_file_exists: transactions_path.exists(),
            },
        }
    }
}

fn count_accounts(path: &Path) -> Option<usize> {
    let raw = fs::read_to_string(path).ok()?;
    match parse_accounts(&raw) {
        Ok(accounts) => Some(accounts.len()),
        Err(err) => {
            tracing::debug!("accounts file not countable: {err:#}");
            None
        }
    }
}
