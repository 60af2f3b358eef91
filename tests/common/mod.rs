//! 통합 테스트 공용 페이크 포트 구현.

#![allow(dead_code)]

use std::collections::VecDeque;
use std::sync::{Arc, Mutex};

use anyhow::{Result, bail};
use async_trait::async_trait;

use xstream::application::ports::{AccountDirectory, Prompter, Reporter, TransactionLedger};
use xstream::domain::session::PermissionLevel;
use xstream::domain::store::{Account, TransactionRecord};

pub fn account(username: &str, permission: &str, credit: u64) -> Account {
    Account {
        username: username.to_string(),
        permission: PermissionLevel::new(permission),
        credit,
    }
}

/// 인메모리 계정 디렉터리. 핸들은 테스트가 나중에 들여다볼 수 있게 공유한다.
pub struct MemoryAccounts {
    accounts: Arc<Mutex<Vec<Account>>>,
}

impl MemoryAccounts {
    pub fn new(seed: Vec<Account>) -> (Self, Arc<Mutex<Vec<Account>>>) {
        let accounts = Arc::new(Mutex::new(seed));
        (
            Self {
                accounts: accounts.clone(),
            },
            accounts,
        )
    }
}

#[async_trait]
impl AccountDirectory for MemoryAccounts {
    async fn find(&self, username: &str) -> Result<Option<Account>> {
        let accounts = self.accounts.lock().unwrap();
        Ok(accounts.iter().find(|a| a.username == username).cloned())
    }

    async fn insert(&self, account: Account) -> Result<()> {
        let mut accounts = self.accounts.lock().unwrap();
        if accounts.iter().any(|a| a.username == account.username) {
            bail!("account already exists: {}", account.username);
        }
        accounts.push(account);
        Ok(())
    }

    async fn remove(&self, username: &str) -> Result<()> {
        let mut accounts = self.accounts.lock().unwrap();
        let before = accounts.len();
        accounts.retain(|a| a.username != username);
        if accounts.len() == before {
            bail!("unknown account: {username}");
        }
        Ok(())
    }

    async fn add_credit(&self, username: &str, amount: u64) -> Result<u64> {
        let mut accounts = self.accounts.lock().unwrap();
        let Some(account) = accounts.iter_mut().find(|a| a.username == username) else {
            bail!("unknown account: {username}");
        };
        account.credit += amount;
        Ok(account.credit)
    }
}

/// 인메모리 거래 장부.
pub struct MemoryLedger {
    records: Arc<Mutex<Vec<TransactionRecord>>>,
}

impl MemoryLedger {
    pub fn new() -> (Self, Arc<Mutex<Vec<TransactionRecord>>>) {
        let records = Arc::new(Mutex::new(Vec::new()));
        (
            Self {
                records: records.clone(),
            },
            records,
        )
    }
}

#[async_trait]
impl TransactionLedger for MemoryLedger {
    async fn append(&self, record: &TransactionRecord) -> Result<()> {
        self.records.lock().unwrap().push(record.clone());
        Ok(())
    }
}

/// 답변을 미리 채워 두는 프롬프터.
pub struct ScriptedPrompter {
    answers: Mutex<VecDeque<String>>,
}

impl ScriptedPrompter {
    pub fn new(answers: &[&str]) -> Self {
        Self {
            answers: Mutex::new(answers.iter().map(|s| s.to_string()).collect()),
        }
    }
}

impl Prompter for ScriptedPrompter {
    fn ask(&self, label: &str) -> Result<String> {
        let Some(answer) = self.answers.lock().unwrap().pop_front() else {
            bail!("no scripted answer left for prompt `{label}`");
        };
        Ok(answer)
    }
}

/// 출력 줄을 모아 두는 리포터. 진단과 일반 출력을 분리해 기록한다.
pub struct RecordingReporter {
    lines: Arc<Mutex<Vec<String>>>,
    diagnostics: Arc<Mutex<Vec<String>>>,
}

pub struct ReporterHandles {
    pub lines: Arc<Mutex<Vec<String>>>,
    pub diagnostics: Arc<Mutex<Vec<String>>>,
}

impl RecordingReporter {
    pub fn new() -> (Self, ReporterHandles) {
        let lines = Arc::new(Mutex::new(Vec::new()));
        let diagnostics = Arc::new(Mutex::new(Vec::new()));
        (
            Self {
                lines: lines.clone(),
                diagnostics: diagnostics.clone(),
            },
            ReporterHandles { lines, diagnostics },
        )
    }
}

impl Reporter for RecordingReporter {
    fn section(&self, name: &str) {
        self.lines.lock().unwrap().push(format!("section:{name}"));
    }

    fn kv(&self, key: &str, value: &str) {
        self.lines.lock().unwrap().push(format!("{key}={value}"));
    }

    fn status(&self, scope: &str, message: &str) {
        self.lines
            .lock()
            .unwrap()
            .push(format!("[{scope}] {message}"));
    }

    fn diagnostic(&self, message: &str) {
        self.diagnostics.lock().unwrap().push(message.to_string());
    }

    fn raw(&self, line: &str) {
        self.lines.lock().unwrap().push(line.to_string());
    }
}
