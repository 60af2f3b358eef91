//! 크레딧 충전 유스케이스.

use anyhow::{Context, Result};

use crate::application::ports::{AccountDirectory, Prompter, Reporter, TransactionLedger};
use crate::application::usecases::HandlerOutcome;
use crate::domain::operation::Operation;
use crate::domain::session::Session;
use crate::domain::store::{TransactionCode, TransactionRecord};

/// 로그인한 계정의 잔액을 증액하고 `06` 레코드를 남긴다.
pub struct AddCreditUseCase<'a> {
    pub accounts: &'a dyn AccountDirectory,
    pub ledger: &'a dyn TransactionLedger,
    pub prompter: &'a dyn Prompter,
    pub reporter: &'a dyn Reporter,
}

impl AddCreditUseCase<'_> {
    pub async fn execute(&self, session: &Session) -> Result<HandlerOutcome> {
        let username = session
            .username()
            .context("addcredit requires an authenticated session")?
            .to_string();

        let raw_amount = self.prompter.ask("Amount")?;
        let amount: u64 = match raw_amount.trim().parse() {
            Ok(value) if value > 0 => value,
            _ => {
                self.reporter
                    .diagnostic(&format!("invalid amount: {}", raw_amount.trim()));
                return Ok(HandlerOutcome::denied(Operation::AddCredit, "invalid amount"));
            }
        };

        let balance = self.accounts.add_credit(&username, amount).await?;
        self.ledger
            .append(&TransactionRecord::new(
                TransactionCode::AddCredit,
                format!("{username} {amount}"),
            ))
            .await?;

        self.reporter
            .status("Accounts", &format!("credit of {username} is now {balance}"));
        Ok(HandlerOutcome::Completed(Operation::AddCredit))
    }
}
