//! REPL 입력 처리기.
//! 명령 토큰을 입력하는 동안 실시간으로 추천과 힌트를 표시한다.

use std::env;
use std::io::{self, IsTerminal, Write};

use anyhow::Result;
use crossterm::cursor;
use crossterm::event::{self, Event, KeyCode, KeyEventKind, KeyModifiers};
use crossterm::execute;
use crossterm::style::{Color, ResetColor, SetForegroundColor};
use crossterm::terminal::{self, ClearType};
use unicode_width::UnicodeWidthStr;

use crate::domain::operation::Operation;

/// `Xstream >> ` 프롬프트. 비대화형 입력에서도 동일하게 쓴다.
pub const PROMPT: &str = "Xstream >> ";

struct Suggestion {
    token: &'static str,
    description: &'static str,
}

const SUGGESTIONS: [Suggestion; 8] = [
    Suggestion {
        token: "login",
        description: "authenticate a store session",
    },
    Suggestion {
        token: "logout",
        description: "end the session (writes the 00 record)",
    },
    Suggestion {
        token: "create",
        description: "add a user account (admin)",
    },
    Suggestion {
        token: "delete",
        description: "remove a user account (admin)",
    },
    Suggestion {
        token: "sell",
        description: "record a sell transaction",
    },
    Suggestion {
        token: "buy",
        description: "record a buy transaction",
    },
    Suggestion {
        token: "refund",
        description: "record a refund (admin)",
    },
    Suggestion {
        token: "addcredit",
        description: "add credit to the logged-in account",
    },
];

/// REPL 한 줄 입력을 읽는다.
/// - TTY + 지원 터미널: 실시간 추천 + 방향키 선택
/// - non-TTY/미지원 터미널: 일반 라인 입력
pub fn read_repl_input() -> Result<Option<String>> {
    if !supports_interactive_input() {
        return read_line_fallback();
    }

    match read_line_interactive() {
        Ok(v) => Ok(v),
        Err(_) => read_line_fallback(),
    }
}

fn supports_interactive_input() -> bool {
    if !io::stdout().is_terminal() {
        return false;
    }

    // dumb 터미널에서는 제어 시퀀스 기반 UI를 비활성화한다.
    if let Ok(term) = env::var("TERM")
        && term.eq_ignore_ascii_case("dumb")
    {
        return false;
    }

    true
}

fn read_line_fallback() -> Result<Option<String>> {
    print!("{PROMPT}");
    io::stdout().flush()?;

    let mut line = String::new();
    let read = io::stdin().read_line(&mut line)?;
    if read == 0 {
        return Ok(None);
    }

    Ok(Some(trim_newline(line)))
}

fn read_line_interactive() -> Result<Option<String>> {
    let mut stdout = io::stdout();
    let _guard = InputGuard::enter(&mut stdout)?;

    let mut input = String::new();
    let mut selected_idx = 0usize;

    loop {
        let suggestions = match_suggestions(&input);
        if suggestions.is_empty() {
            selected_idx = 0;
        } else if selected_idx >= suggestions.len() {
            selected_idx = suggestions.len() - 1;
        }

        render_frame(&mut stdout, &input, &suggestions, selected_idx)?;

        let Event::Key(key) = event::read()? else {
            continue;
        };
        if key.kind != KeyEventKind::Press {
            continue;
        }

        match key.code {
            KeyCode::Enter => {
                let final_input = finalize_input(&input, &suggestions, selected_idx);
                clear_panel_for_output(&mut stdout)?;
                return Ok(Some(final_input));
            }
            KeyCode::Backspace => {
                input.pop();
            }
            KeyCode::Up => {
                selected_idx = selected_idx.saturating_sub(1);
            }
            KeyCode::Down => {
                if !suggestions.is_empty() {
                    selected_idx = (selected_idx + 1).min(suggestions.len() - 1);
                }
            }
            KeyCode::Tab => {
                if !suggestions.is_empty() {
                    input = suggestions[selected_idx].token.to_string();
                }
            }
            KeyCode::Char('d' | 'c') if key.modifiers.contains(KeyModifiers::CONTROL) => {
                clear_panel_for_output(&mut stdout)?;
                return Ok(None);
            }
            KeyCode::Char(ch) => {
                if !key.modifiers.contains(KeyModifiers::CONTROL)
                    && !key.modifiers.contains(KeyModifiers::ALT)
                {
                    input.push(ch);
                }
            }
            _ => {}
        }
    }
}

fn match_suggestions(input: &str) -> Vec<&'static Suggestion> {
    if input.contains(' ') {
        return Vec::new();
    }

    SUGGESTIONS
        .iter()
        .filter(|s| s.token.starts_with(input))
        .collect()
}

/// 미완성 접두어는 선택된 추천으로 확정한다. 완전 일치/미일치 입력은 그대로 둔다.
fn finalize_input(input: &str, suggestions: &[&Suggestion], selected_idx: usize) -> String {
    if input.is_empty() || suggestions.is_empty() {
        return input.to_string();
    }
    if Operation::from_token(input).is_some() {
        return input.to_string();
    }
    suggestions[selected_idx].token.to_string()
}

fn realtime_hint(input: &str) -> (Color, String) {
    if input.is_empty() {
        return (
            Color::Grey,
            "type a command - Up/Down select - Tab complete - Enter run".to_string(),
        );
    }

    let token = input.split_whitespace().next().unwrap_or("");
    if let Some(op) = Operation::from_token(token) {
        let description = SUGGESTIONS
            .iter()
            .find(|s| s.token == op.token())
            .map(|s| s.description)
            .unwrap_or("");
        return (Color::Green, format!("ready: {description}"));
    }

    if !input.contains(' ') && SUGGESTIONS.iter().any(|s| s.token.starts_with(input)) {
        return (Color::Yellow, "hint: press Tab to complete".to_string());
    }

    (Color::Red, format!("error: unknown command `{input}`"))
}

fn render_frame(
    stdout: &mut io::Stdout,
    input: &str,
    suggestions: &[&Suggestion],
    selected_idx: usize,
) -> Result<()> {
    let (w, h) = terminal::size().unwrap_or((120, 40));
    let width = (w as usize).max(20);
    let total_rows = h as usize;

    // 프롬프트 + 힌트 + 추천 목록만큼 하단 영역을 쓴다.
    let panel_height = 2 + suggestions.len();
    let max_panel_height = 2 + SUGGESTIONS.len();
    let clear_top = total_rows.saturating_sub(max_panel_height);
    for row in clear_top..total_rows {
        execute!(
            stdout,
            cursor::MoveTo(0, row as u16),
            terminal::Clear(ClearType::CurrentLine)
        )?;
    }

    let panel_top = total_rows.saturating_sub(panel_height);
    let prompt_row = panel_top;
    let hint_row = panel_top + 1;

    execute!(stdout, cursor::MoveTo(0, prompt_row as u16))?;
    write!(stdout, "{}", clip_line_display(&format!("{PROMPT}{input}"), width))?;

    let (color, hint) = realtime_hint(input);
    draw_line_at_with_fg(stdout, hint_row as u16, &clip_line_display(&hint, width), color)?;

    for (idx, item) in suggestions.iter().enumerate() {
        let marker = if idx == selected_idx { ">" } else { " " };
        draw_line_at_with_fg(
            stdout,
            (hint_row + 1 + idx) as u16,
            &clip_line_display(
                &format!("{marker} {:<10} - {}", item.token, item.description),
                width,
            ),
            Color::White,
        )?;
    }

    let cursor_col = display_width(PROMPT) + display_width(input);
    execute!(
        stdout,
        cursor::MoveTo(cursor_col.min(width - 1) as u16, prompt_row as u16),
        cursor::Show
    )?;
    stdout.flush()?;
    Ok(())
}

fn draw_line_at_with_fg(stdout: &mut io::Stdout, row: u16, text: &str, fg: Color) -> Result<()> {
    execute!(
        stdout,
        cursor::MoveTo(0, row),
        terminal::Clear(ClearType::CurrentLine),
        SetForegroundColor(fg)
    )?;
    write!(stdout, "{text}")?;
    execute!(stdout, ResetColor)?;
    Ok(())
}

fn clear_panel_for_output(stdout: &mut io::Stdout) -> Result<()> {
    // 명령 실행 출력이 항상 상단에서 시작하도록 화면을 정리한다.
    execute!(
        stdout,
        cursor::MoveTo(0, 0),
        terminal::Clear(ClearType::All),
        ResetColor,
        cursor::Show
    )?;
    stdout.flush()?;
    Ok(())
}

fn clip_line_display(line: &str, max_width: usize) -> String {
    if display_width(line) <= max_width {
        return line.to_string();
    }

    if max_width <= 3 {
        return ".".repeat(max_width);
    }

    let mut out = String::new();
    let cap = max_width - 3;
    for ch in line.chars() {
        if display_width(&out) + unicode_width::UnicodeWidthChar::width(ch).unwrap_or(0) > cap {
            break;
        }
        out.push(ch);
    }
    out.push_str("...");
    out
}

fn display_width(text: &str) -> usize {
    UnicodeWidthStr::width(text)
}

fn trim_newline(mut s: String) -> String {
    while matches!(s.chars().last(), Some('\n' | '\r')) {
        s.pop();
    }
    s
}

struct InputGuard;

impl InputGuard {
    fn enter(stdout: &mut io::Stdout) -> Result<Self> {
        terminal::enable_raw_mode()?;
        execute!(stdout, cursor::Show)?;
        Ok(Self)
    }
}

impl Drop for InputGuard {
    fn drop(&mut self) {
        let mut stdout = io::stdout();
        let _ = execute!(stdout, cursor::Show, ResetColor);
        let _ = terminal::disable_raw_mode();
        let _ = stdout.flush();
    }
}
