//! 핸들러 인자 입력 포트 구현 어댑터.

use std::io::{self, Write};

use anyhow::{Result, bail};

use crate::application::ports::Prompter;

/// stdin에서 한 줄을 받아오는 어댑터.
pub struct StdinPrompter;

impl Prompter for StdinPrompter {
    fn ask(&self, label: &str) -> Result<String> {
        print!("{label}: ");
        io::stdout().flush()?;

        let mut input = String::new();
        let read = io::stdin().read_line(&mut input)?;
        if read == 0 {
            bail!("input closed while waiting for {label}");
        }

        Ok(input.trim_end_matches(['\r', '\n']).to_string())
    }
}
