//! 거래 파일 기록 포트의 파일 구현 어댑터.

use std::path::PathBuf;

use anyhow::{Context, Result};
use async_trait::async_trait;
use tokio::fs::OpenOptions;
use tokio::io::AsyncWriteExt;

use crate::application::ports::TransactionLedger;
use crate::domain::store::TransactionRecord;
use crate::infrastructure::store::transactions::encode_record;

/// 일일 거래 파일에 레코드를 덧붙이는 어댑터.
pub struct FileTransactionLedger {
    path: PathBuf,
}

impl FileTransactionLedger {
    pub fn new(path: PathBuf) -> Self {
        Self { path }
    }
}

#[async_trait]
impl TransactionLedger for FileTransactionLedger {
    async fn append(&self, record: &TransactionRecord) -> Result<()> {
        if let Some(parent) = self.path.parent()
            && !parent.as_os_str().is_empty()
        {
            tokio::fs::create_dir_all(parent)
                .await
                .with_context(|| format!("failed to create directory {}", parent.display()))?;
        }

        let mut file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(&self.path)
            .await
            .with_context(|| format!("failed to open ledger at {}", self.path.display()))?;

        file.write_all(encode_record(record).as_bytes())
            .await
            .with_context(|| format!("failed to append to ledger at {}", self.path.display()))?;
        file.flush().await?;

        tracing::debug!(code = record.code.digits(), "transaction recorded");
        Ok(())
    }
}
