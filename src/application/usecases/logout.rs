//! 로그아웃(세션 종료) 유스케이스.

use anyhow::Result;

use crate::application::ports::{Reporter, TransactionLedger};
use crate::application::usecases::HandlerOutcome;
use crate::domain::operation::Operation;
use crate::domain::session::Session;
use crate::domain::store::{TransactionCode, TransactionRecord};

/// 세션 종료 레코드(`00`)를 기록하고 세션을 초기화한다.
pub struct LogoutUseCase<'a> {
    pub ledger: &'a dyn TransactionLedger,
    pub reporter: &'a dyn Reporter,
}

impl LogoutUseCase<'_> {
    pub async fn execute(&self, session: &mut Session) -> Result<HandlerOutcome> {
        let username = session.username().unwrap_or_default().to_string();

        self.ledger
            .append(&TransactionRecord::new(
                TransactionCode::EndOfSession,
                username.as_str(),
            ))
            .await?;

        session.clear();
        self.reporter.status("Session", "logged out");

        Ok(HandlerOutcome::Completed(Operation::Logout))
    }
}
