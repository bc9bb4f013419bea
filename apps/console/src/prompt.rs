use std::io::Write;

use anyhow::{bail, Result};
use tokio::io::{AsyncBufRead, AsyncBufReadExt, BufReader, Stdin};

/// Line-oriented prompts. Answers are read as typed, so they echo on the
/// terminal.
pub struct Prompter<R = BufReader<Stdin>> {
    reader: R,
    line: String,
}

impl Prompter {
    pub fn new() -> Self {
        Self::from_reader(BufReader::new(tokio::io::stdin()))
    }
}

impl<R: AsyncBufRead + Unpin> Prompter<R> {
    pub fn from_reader(reader: R) -> Self {
        Self {
            reader,
            line: String::new(),
        }
    }

    /// Ask for a value. An empty answer keeps `default` when one is given.
    pub async fn ask(&mut self, label: &str, default: Option<&str>) -> Result<String> {
        match default.filter(|value| !value.is_empty()) {
            Some(value) => print!("{label} [{value}]: "),
            None => print!("{label}: "),
        }
        std::io::stdout().flush()?;

        self.line.clear();
        let bytes_read = self.reader.read_line(&mut self.line).await?;
        if bytes_read == 0 {
            bail!("input closed before registration finished");
        }

        let answer = self.line.trim_end_matches(&['\r', '\n'][..]);
        match default {
            Some(value) if answer.is_empty() => Ok(value.to_string()),
            _ => Ok(answer.to_string()),
        }
    }
}
