//! 애플리케이션 조립(composition root) 모듈.

use anyhow::Result;

use crate::application::config::Config;
use crate::application::ports::{AccountDirectory, Prompter, Reporter, TransactionLedger};
use crate::application::usecases::account_admin::AccountAdminUseCase;
use crate::application::usecases::add_credit::AddCreditUseCase;
use crate::application::usecases::inspect_config::InspectConfigUseCase;
use crate::application::usecases::login::LoginUseCase;
use crate::application::usecases::logout::LogoutUseCase;
use crate::application::usecases::trade::TradeUseCase;
use crate::infrastructure::adapters::{
    ConsoleReporter, FileAccountDirectory, FileTransactionLedger, JsonConfigRepository,
    StdinPrompter,
};

/// 실행 시점 의존성을 한 곳에서 조립하는 컨테이너.
pub struct AppComposition {
    config_repo: JsonConfigRepository,
    accounts: Box<dyn AccountDirectory>,
    ledger: Box<dyn TransactionLedger>,
    prompter: Box<dyn Prompter>,
    reporter: Box<dyn Reporter>,
}

impl AppComposition {
    /// 병합된 설정에서 파일 어댑터 경로를 해석해 실행 조합을 생성한다.
    pub fn new() -> Result<Self> {
        let config = Config::load()?;

        Ok(Self::with_ports(
            Box::new(FileAccountDirectory::new(
                config.accounts_read_path(),
                config.accounts_write_path(),
            )),
            Box::new(FileTransactionLedger::new(config.transactions_path())),
            Box::new(StdinPrompter),
            Box::new(ConsoleReporter),
        ))
    }

    /// 포트 구현을 외부에서 주입한다(테스트/임베딩용).
    pub fn with_ports(
        accounts: Box<dyn AccountDirectory>,
        ledger: Box<dyn TransactionLedger>,
        prompter: Box<dyn Prompter>,
        reporter: Box<dyn Reporter>,
    ) -> Self {
        Self {
            config_repo: JsonConfigRepository,
            accounts,
            ledger,
            prompter,
            reporter,
        }
    }

    pub fn reporter(&self) -> &dyn Reporter {
        self.reporter.as_ref()
    }

    /// 설정 점검 유스케이스를 생성한다.
    pub fn inspect_config_usecase(&self) -> InspectConfigUseCase<'_> {
        InspectConfigUseCase {
            config_repo: &self.config_repo,
        }
    }

    /// 로그인 유스케이스를 생성한다.
    pub fn login_usecase(&self) -> LoginUseCase<'_> {
        LoginUseCase {
            accounts: self.accounts.as_ref(),
            prompter: self.prompter.as_ref(),
            reporter: self.reporter.as_ref(),
        }
    }

    /// 로그아웃 유스케이스를 생성한다.
    pub fn logout_usecase(&self) -> LogoutUseCase<'_> {
        LogoutUseCase {
            ledger: self.ledger.as_ref(),
            reporter: self.reporter.as_ref(),
        }
    }

    /// 계정 생성/삭제 유스케이스를 생성한다.
    pub fn account_admin_usecase(&self) -> AccountAdminUseCase<'_> {
        AccountAdminUseCase {
            accounts: self.accounts.as_ref(),
            ledger: self.ledger.as_ref(),
            prompter: self.prompter.as_ref(),
            reporter: self.reporter.as_ref(),
        }
    }

    /// 거래 기록 유스케이스를 생성한다.
    pub fn trade_usecase(&self) -> TradeUseCase<'_> {
        TradeUseCase {
            ledger: self.ledger.as_ref(),
            prompter: self.prompter.as_ref(),
            reporter: self.reporter.as_ref(),
        }
    }

    /// 크레딧 충전 유스케이스를 생성한다.
    pub fn add_credit_usecase(&self) -> AddCreditUseCase<'_> {
        AddCreditUseCase {
            accounts: self.accounts.as_ref(),
            ledger: self.ledger.as_ref(),
            prompter: self.prompter.as_ref(),
            reporter: self.reporter.as_ref(),
        }
    }
}
