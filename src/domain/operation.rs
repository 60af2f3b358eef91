//! 명령 어휘와 논리 연산(Logical Operation) 정의.

use crate::domain::store::TransactionCode;

/// 인식되는 명령 토큰이 가리키는 논리 연산.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Operation {
    Login,
    Logout,
    Create,
    Delete,
    Sell,
    Buy,
    Refund,
    AddCredit,
}

/// 명령 토큰 -> 연산 매핑 테이블. 디스패치와 입력 추천이 같은 테이블을 쓴다.
pub const COMMAND_VOCABULARY: [(&str, Operation); 8] = [
    ("login", Operation::Login),
    ("logout", Operation::Logout),
    ("create", Operation::Create),
    ("delete", Operation::Delete),
    ("sell", Operation::Sell),
    ("buy", Operation::Buy),
    ("refund", Operation::Refund),
    ("addcredit", Operation::AddCredit),
];

impl Operation {
    /// 토큰을 연산으로 해석한다. 대소문자를 구분하는 완전 일치만 허용한다.
    pub fn from_token(token: &str) -> Option<Self> {
        COMMAND_VOCABULARY
            .iter()
            .find(|(name, _)| *name == token)
            .map(|(_, op)| *op)
    }

    pub fn token(self) -> &'static str {
        COMMAND_VOCABULARY
            .iter()
            .find(|(_, op)| *op == self)
            .map(|(name, _)| *name)
            .unwrap_or("")
    }

    /// login을 제외한 모든 연산은 인증된 세션을 요구한다.
    pub fn requires_auth(self) -> bool {
        !matches!(self, Operation::Login)
    }

    /// 거래 파일에 기록할 트랜잭션 코드. login은 기록 대상이 아니다.
    pub fn transaction_code(self) -> Option<TransactionCode> {
        match self {
            Operation::Login => None,
            Operation::Logout => Some(TransactionCode::EndOfSession),
            Operation::Create => Some(TransactionCode::Create),
            Operation::Delete => Some(TransactionCode::Delete),
            Operation::Sell => Some(TransactionCode::Sell),
            Operation::Buy => Some(TransactionCode::Buy),
            Operation::Refund => Some(TransactionCode::Refund),
            Operation::AddCredit => Some(TransactionCode::AddCredit),
        }
    }
}
