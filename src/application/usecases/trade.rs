//! 판매/구매/환불 거래 기록 유스케이스.

use anyhow::{Result, bail};

use crate::application::ports::{Prompter, Reporter, TransactionLedger};
use crate::application::usecases::{HandlerOutcome, account_admin::require_admin};
use crate::domain::operation::Operation;
use crate::domain::session::Session;
use crate::domain::store::TransactionRecord;

/// 거래 한 건을 일일 거래 파일에 기록한다.
/// 재고/정산은 후속 배치(백엔드)의 몫이고, 프런트는 코드화된 기록만 남긴다.
pub struct TradeUseCase<'a> {
    pub ledger: &'a dyn TransactionLedger,
    pub prompter: &'a dyn Prompter,
    pub reporter: &'a dyn Reporter,
}

impl TradeUseCase<'_> {
    pub async fn execute(&self, operation: Operation, session: &Session) -> Result<HandlerOutcome> {
        let Some(code) = operation.transaction_code() else {
            bail!("not a ledger operation: {}", operation.token());
        };

        match operation {
            Operation::Sell | Operation::Buy => {}
            Operation::Refund => {
                if let Some(denied) = require_admin(session, operation, self.reporter) {
                    return Ok(denied);
                }
            }
            other => bail!("not a trade operation: {}", other.token()),
        }

        let title = self.prompter.ask("Unit title")?;
        let title = title.trim().to_string();
        if title.is_empty() {
            self.reporter.diagnostic("unit title must not be empty");
            return Ok(HandlerOutcome::denied(operation, "empty unit title"));
        }

        self.ledger
            .append(&TransactionRecord::new(code, title.as_str()))
            .await?;

        self.reporter.status(
            "Ledger",
            &format!("recorded {} for {title}", operation.token()),
        );
        Ok(HandlerOutcome::Completed(operation))
    }
}
