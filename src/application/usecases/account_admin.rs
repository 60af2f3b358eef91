//! 계정 생성/삭제(관리자 전용) 유스케이스.

use anyhow::Result;

use crate::application::ports::{AccountDirectory, Prompter, Reporter, TransactionLedger};
use crate::application::usecases::HandlerOutcome;
use crate::domain::operation::Operation;
use crate::domain::session::{PermissionLevel, Session};
use crate::domain::store::{Account, TransactionCode, TransactionRecord};

/// 계정 디렉터리를 변경하고 해당 트랜잭션 코드를 기록한다.
pub struct AccountAdminUseCase<'a> {
    pub accounts: &'a dyn AccountDirectory,
    pub ledger: &'a dyn TransactionLedger,
    pub prompter: &'a dyn Prompter,
    pub reporter: &'a dyn Reporter,
}

impl AccountAdminUseCase<'_> {
    /// `create`: 새 계정을 추가한다.
    pub async fn execute_create(&self, session: &Session) -> Result<HandlerOutcome> {
        if let Some(denied) = require_admin(session, Operation::Create, self.reporter) {
            return Ok(denied);
        }

        let username = self.prompter.ask("New username")?;
        let username = username.trim().to_string();
        if username.is_empty() || username.contains(char::is_whitespace) {
            self.reporter
                .diagnostic("username must be one non-empty word");
            return Ok(HandlerOutcome::denied(Operation::Create, "invalid username"));
        }

        if self.accounts.find(&username).await?.is_some() {
            self.reporter
                .diagnostic(&format!("account already exists: {username}"));
            return Ok(HandlerOutcome::denied(Operation::Create, "duplicate account"));
        }

        let permission = self.prompter.ask("Permission level")?;
        let permission = PermissionLevel::new(&permission);
        if permission.is_empty() {
            self.reporter.diagnostic("permission level must not be empty");
            return Ok(HandlerOutcome::denied(Operation::Create, "empty permission"));
        }

        self.accounts
            .insert(Account {
                username: username.clone(),
                permission: permission.clone(),
                credit: 0,
            })
            .await?;
        self.ledger
            .append(&TransactionRecord::new(
                TransactionCode::Create,
                format!("{username} {}", permission.as_str()),
            ))
            .await?;

        self.reporter
            .status("Accounts", &format!("created {username}"));
        Ok(HandlerOutcome::Completed(Operation::Create))
    }

    /// `delete`: 계정을 제거한다. 로그인 중인 자기 계정은 지울 수 없다.
    pub async fn execute_delete(&self, session: &Session) -> Result<HandlerOutcome> {
        if let Some(denied) = require_admin(session, Operation::Delete, self.reporter) {
            return Ok(denied);
        }

        let username = self.prompter.ask("Username to delete")?;
        let username = username.trim().to_string();
        if username.is_empty() {
            self.reporter.diagnostic("username must not be empty");
            return Ok(HandlerOutcome::denied(Operation::Delete, "empty username"));
        }

        if session.username() == Some(username.as_str()) {
            self.reporter
                .diagnostic("cannot delete the account that is logged in");
            return Ok(HandlerOutcome::denied(Operation::Delete, "self deletion"));
        }

        if self.accounts.find(&username).await?.is_none() {
            self.reporter
                .diagnostic(&format!("unknown account: {username}"));
            return Ok(HandlerOutcome::denied(Operation::Delete, "unknown account"));
        }

        self.accounts.remove(&username).await?;
        self.ledger
            .append(&TransactionRecord::new(
                TransactionCode::Delete,
                username.as_str(),
            ))
            .await?;

        self.reporter
            .status("Accounts", &format!("deleted {username}"));
        Ok(HandlerOutcome::Completed(Operation::Delete))
    }
}

/// 관리자 권한이 없으면 거절 결과를 만들어 준다.
pub(super) fn require_admin(
    session: &Session,
    operation: Operation,
    reporter: &dyn Reporter,
) -> Option<HandlerOutcome> {
    if session.permission().is_admin() {
        return None;
    }

    reporter.diagnostic(&format!(
        "'{}' requires the admin permission level",
        operation.token()
    ));
    Some(HandlerOutcome::denied(operation, "admin required"))
}
