//! `Xstream` 대화형 쉘(REPL)과 디스패치 루프.

use std::io::{self, IsTerminal, Write};

use anyhow::Result;
use serde_json::Value;

use crate::application::ports::Reporter;
use crate::application::usecases::HandlerOutcome;
use crate::domain::dispatch::{Dispatch, RejectReason, classify};
use crate::domain::operation::Operation;
use crate::domain::session::Session;
use crate::interface::cli::composition::AppComposition;
use crate::interface::cli::repl_input::read_repl_input;

/// 디스패치 한 사이클의 결과.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CycleOutcome {
    Handled(HandlerOutcome),
    Rejected(RejectReason),
}

/// 루프 종료 시점의 상태. 프로세스 종료 코드 결정에 쓰인다.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ShellExit {
    Clean,
    Failed,
}

/// 토큰을 읽어 디스패치하는 메인 루프.
/// EOF(Ctrl-D)나 Ctrl-C에서 끝나며, 마지막 사이클의 성패를 돌려준다.
pub async fn run_repl(composition: &AppComposition) -> Result<ShellExit> {
    print_welcome(composition);
    io::stdout().flush()?;

    let mut session = Session::new();
    let mut exit = ShellExit::Clean;

    loop {
        let Some(raw_input) = read_repl_input()? else {
            println!();
            break;
        };

        // 한 번에 한 토큰만 해석한다. 첫 토큰 뒤는 버린다.
        let token = raw_input.split_whitespace().next().unwrap_or("").to_string();

        match handle_token(composition, &mut session, &token).await {
            Ok(CycleOutcome::Handled(HandlerOutcome::Completed(_))) => {
                exit = ShellExit::Clean;
            }
            Ok(_) => {
                exit = ShellExit::Failed;
            }
            Err(err) => {
                eprintln!("error: {err:#}");
                exit = ShellExit::Failed;
            }
        }
    }

    Ok(exit)
}

/// 토큰 하나를 분류하고, 허용되면 해당 핸들러를 호출한다.
/// 거부 시 진단만 출력하고 세션은 건드리지 않는다.
pub async fn handle_token(
    composition: &AppComposition,
    session: &mut Session,
    token: &str,
) -> Result<CycleOutcome> {
    match classify(session, token) {
        Dispatch::Rejected(reason) => {
            report_rejection(composition.reporter(), reason, token);
            Ok(CycleOutcome::Rejected(reason))
        }
        Dispatch::Run(op) => {
            let outcome = match op {
                Operation::Login => composition.login_usecase().execute(session).await?,
                Operation::Logout => composition.logout_usecase().execute(session).await?,
                Operation::Create => {
                    composition
                        .account_admin_usecase()
                        .execute_create(session)
                        .await?
                }
                Operation::Delete => {
                    composition
                        .account_admin_usecase()
                        .execute_delete(session)
                        .await?
                }
                Operation::Sell | Operation::Buy | Operation::Refund => {
                    composition.trade_usecase().execute(op, session).await?
                }
                Operation::AddCredit => {
                    composition.add_credit_usecase().execute(session).await?
                }
            };
            Ok(CycleOutcome::Handled(outcome))
        }
    }
}

fn report_rejection(reporter: &dyn Reporter, reason: RejectReason, token: &str) {
    match reason {
        RejectReason::NotLoggedIn => {
            reporter.diagnostic("invalid command");
            reporter.diagnostic("not logged in (run 'login' first)");
        }
        RejectReason::UnknownCommand => {
            if token.is_empty() {
                reporter.diagnostic("unrecognized command");
            } else {
                reporter.diagnostic(&format!("unrecognized command: {token}"));
            }
        }
    }
}

fn print_welcome(composition: &AppComposition) {
    let interactive = io::stdout().is_terminal();
    if interactive {
        // 대화형 터미널에서는 시작 화면을 지우고 배너를 출력한다.
        print!("\x1b[2J\x1b[H");
    }

    let title = paint("Xstream store terminal", "1;36", interactive);
    let subtitle = paint("login-gated command dispatch", "2;37", interactive);

    println!("+------------------------------------------------------------+");
    println!("| {:<58} |", title);
    println!("| {:<58} |", subtitle);
    println!("+------------------------------------------------------------+");
    println!("| Store Files                                                 |");
    for line in build_startup_dashboard_lines(composition) {
        println!("| {:<58} |", fit_box_line(&line, 58));
    }
    println!("+------------------------------------------------------------+");
    println!("| Quick start                                                 |");
    println!("|  1) {:<54} |", paint("login", "1;32", interactive));
    println!(
        "|  2) {:<54} |",
        paint("sell / buy / refund / addcredit", "1;35", interactive)
    );
    println!(
        "|  3) {:<54} |",
        paint("create / delete (admin)", "1;33", interactive)
    );
    println!("|  4) {:<54} |", paint("logout", "1;31", interactive));
    println!("+------------------------------------------------------------+");
    println!();
}

fn paint(text: &str, ansi: &str, interactive: bool) -> String {
    if interactive {
        format!("\x1b[{ansi}m{text}\x1b[0m")
    } else {
        text.to_string()
    }
}

fn build_startup_dashboard_lines(composition: &AppComposition) -> Vec<String> {
    let mut lines = Vec::new();

    let inspection_json = match composition.inspect_config_usecase().execute() {
        Ok(raw) => raw,
        Err(err) => {
            lines.push("Config: error".to_string());
            lines.push(format!("detail: {err}"));
            lines.push("hint: run `xstream config` to inspect and fix".to_string());
            return lines;
        }
    };

    let value: Value = match serde_json::from_str(&inspection_json) {
        Ok(v) => v,
        Err(_) => {
            lines.push("Config: loaded (dashboard parse fallback)".to_string());
            return lines;
        }
    };

    let loaded_count = value
        .get("loaded_paths")
        .and_then(|v| v.as_array())
        .map(|arr| arr.len())
        .unwrap_or(0);
    lines.push(format!("Config: ok (loaded files: {loaded_count})"));

    let accounts_path = value
        .pointer("/effective_store/accounts_path")
        .and_then(|v| v.as_str())
        .unwrap_or("?");
    let accounts_exists = value
        .pointer("/effective_store/accounts_file_exists")
        .and_then(|v| v.as_bool())
        .unwrap_or(false);
    match value
        .pointer("/effective_store/account_count")
        .and_then(|v| v.as_u64())
    {
        Some(count) => lines.push(format!("Accounts: {accounts_path} ({count} accounts)")),
        None if accounts_exists => {
            lines.push(format!("Accounts: {accounts_path} (unreadable)"));
        }
        None => lines.push(format!("Accounts: {accounts_path} (missing)")),
    }

    let tx_path = value
        .pointer("/effective_store/transactions_path")
        .and_then(|v| v.as_str())
        .unwrap_or("?");
    let tx_exists = value
        .pointer("/effective_store/transactions_file_exists")
        .and_then(|v| v.as_bool())
        .unwrap_or(false);
    let tx_state = if tx_exists { "present" } else { "will be created" };
    lines.push(format!("Ledger: {tx_path} ({tx_state})"));

    lines
}

fn fit_box_line(text: &str, width: usize) -> String {
    let chars: Vec<char> = text.chars().collect();
    if chars.len() <= width {
        return text.to_string();
    }

    if width <= 3 {
        return ".".repeat(width);
    }

    let keep = width - 3;
    let head: String = chars.into_iter().take(keep).collect();
    format!("{head}...")
}
