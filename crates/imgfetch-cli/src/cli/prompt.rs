//! Interactive URL prompt on stdin.

use anyhow::{Context, Result};
use std::io::{self, BufRead, Write};

pub const PROMPT: &str = "Please enter the image URLs, separated by a comma: ";

/// Prints the prompt and reads one line of comma-separated URLs.
pub fn read_urls() -> Result<String> {
    let stdin = io::stdin();
    let stdout = io::stdout();
    read_urls_from(&mut stdin.lock(), &mut stdout.lock())
}

pub(super) fn read_urls_from<R: BufRead, W: Write>(input: &mut R, out: &mut W) -> Result<String> {
    write!(out, "{}", PROMPT).context("write prompt")?;
    out.flush().context("flush prompt")?;
    let mut line = String::new();
    input.read_line(&mut line).context("read URLs from stdin")?;
    Ok(line.trim_end_matches(['\r', '\n']).to_string())
}
