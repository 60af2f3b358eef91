//! 계정 디렉터리 포트의 파일 구현 어댑터.

use std::path::PathBuf;

use anyhow::{Context, Result, bail};
use async_trait::async_trait;
use tokio::fs;

use crate::application::ports::AccountDirectory;
use crate::domain::store::Account;
use crate::infrastructure::store::accounts::{encode_accounts, parse_accounts};

/// UserAccounts 파일을 읽고 쓰는 어댑터.
/// 읽기/쓰기 경로를 분리 지정할 수 있다(야간 배치가 새 파일을 내려주는 운용 형태).
pub struct FileAccountDirectory {
    read_path: PathBuf,
    write_path: PathBuf,
}

impl FileAccountDirectory {
    pub fn new(read_path: PathBuf, write_path: PathBuf) -> Self {
        Self {
            read_path,
            write_path,
        }
    }

    async fn load(&self) -> Result<Vec<Account>> {
        let raw = fs::read_to_string(&self.read_path)
            .await
            .with_context(|| format!("failed to read accounts at {}", self.read_path.display()))?;
        parse_accounts(&raw)
            .with_context(|| format!("failed to parse accounts at {}", self.read_path.display()))
    }

    async fn save(&self, accounts: &[Account]) -> Result<()> {
        fs::write(&self.write_path, encode_accounts(accounts))
            .await
            .with_context(|| format!("failed to write accounts at {}", self.write_path.display()))
    }
}

#[async_trait]
impl AccountDirectory for FileAccountDirectory {
    async fn find(&self, username: &str) -> Result<Option<Account>> {
        let accounts = self.load().await?;
        Ok(accounts.into_iter().find(|a| a.username == username))
    }

    async fn insert(&self, account: Account) -> Result<()> {
        let mut accounts = self.load().await?;
        if accounts.iter().any(|a| a.username == account.username) {
            bail!("account already exists: {}", account.username);
        }

        tracing::debug!(username = account.username.as_str(), "account created");
        accounts.push(account);
        self.save(&accounts).await
    }

    async fn remove(&self, username: &str) -> Result<()> {
        let mut accounts = self.load().await?;
        let before = accounts.len();
        accounts.retain(|a| a.username != username);
        if accounts.len() == before {
            bail!("unknown account: {username}");
        }

        tracing::debug!(username, "account deleted");
        self.save(&accounts).await
    }

    async fn add_credit(&self, username: &str, amount: u64) -> Result<u64> {
        let mut accounts = self.load().await?;
        let Some(account) = accounts.iter_mut().find(|a| a.username == username) else {
            bail!("unknown account: {username}");
        };

        account.credit = account
            .credit
            .checked_add(amount)
            .with_context(|| format!("credit overflow for {username}"))?;
        let balance = account.credit;

        self.save(&accounts).await?;
        Ok(balance)
    }
}
