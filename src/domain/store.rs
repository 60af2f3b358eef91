//! 계정/거래 기록 도메인 엔티티.

use crate::domain::session::PermissionLevel;

/// 계정 파일 한 줄에 해당하는 사용자 계정.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Account {
    pub username: String,
    pub permission: PermissionLevel,
    pub credit: u64,
}

/// 일일 거래 파일에 기록되는 두 자리 트랜잭션 코드.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TransactionCode {
    EndOfSession,
    Create,
    Delete,
    Sell,
    Buy,
    Refund,
    AddCredit,
}

impl TransactionCode {
    pub fn digits(self) -> u8 {
        match self {
            TransactionCode::EndOfSession => 0,
            TransactionCode::Create => 1,
            TransactionCode::Delete => 2,
            TransactionCode::Sell => 3,
            TransactionCode::Buy => 4,
            TransactionCode::Refund => 5,
            TransactionCode::AddCredit => 6,
        }
    }
}

/// 거래 파일 한 줄. `"{code:02} {detail}"` 형태로 인코딩된다.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TransactionRecord {
    pub code: TransactionCode,
    pub detail: String,
}

impl TransactionRecord {
    pub fn new(code: TransactionCode, detail: impl Into<String>) -> Self {
        Self {
            code,
            detail: detail.into(),
        }
    }

    pub fn encode(&self) -> String {
        let detail = self.detail.trim();
        if detail.is_empty() {
            format!("{:02}", self.code.digits())
        } else {
            format!("{:02} {}", self.code.digits(), detail)
        }
    }
}
