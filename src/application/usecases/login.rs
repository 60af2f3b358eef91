//! 로그인(세션 인증) 유스케이스.

use anyhow::Result;

use crate::application::ports::{AccountDirectory, Prompter, Reporter};
use crate::application::usecases::HandlerOutcome;
use crate::domain::operation::Operation;
use crate::domain::session::Session;

/// 사용자명을 계정 디렉터리에서 확인하고 세션을 인증 상태로 전환한다.
pub struct LoginUseCase<'a> {
    pub accounts: &'a dyn AccountDirectory,
    pub prompter: &'a dyn Prompter,
    pub reporter: &'a dyn Reporter,
}

impl LoginUseCase<'_> {
    pub async fn execute(&self, session: &mut Session) -> Result<HandlerOutcome> {
        let username = self.prompter.ask("Username")?;
        let username = username.trim();
        if username.is_empty() {
            self.reporter.diagnostic("username must not be empty");
            return Ok(HandlerOutcome::denied(Operation::Login, "empty username"));
        }

        let Some(account) = self.accounts.find(username).await? else {
            tracing::warn!(username, "login attempt for unknown account");
            self.reporter
                .diagnostic(&format!("unknown account: {username}"));
            return Ok(HandlerOutcome::denied(Operation::Login, "unknown account"));
        };

        session.set_authenticated(&account.username, account.permission.clone());

        self.reporter.section("Session");
        self.reporter.kv("User", &account.username);
        self.reporter.kv("Permission", account.permission.as_str());
        self.reporter.kv("Credit", &account.credit.to_string());

        Ok(HandlerOutcome::Completed(Operation::Login))
    }
}
