use anyhow::Result;
use serde::Serialize;

use crate::config::Config;
use crate::helpers::read_input;
use crate::normalize::{TruncateOptions, truncate_comment};

#[derive(Debug, Serialize)]
pub struct TruncateResult {
    pub original_length: usize,
    pub text: String,
    pub options: TruncateOptions,
}

/// Truncates `text`, or stdin when absent. Flags override the config limits.
pub fn run(
    text: Option<String>,
    max_length: Option<usize>,
    word_max_length: Option<usize>,
    config: &Config,
) -> Result<TruncateResult> {
    let text = match text {
        Some(text) => text,
        None => strip_line_ending(read_input(None)?),
    };

    let options = TruncateOptions {
        max_length: max_length.unwrap_or(config.truncate.max_length),
        word_max_length: word_max_length.unwrap_or(config.truncate.word_max_length),
    };

    Ok(TruncateResult {
        original_length: text.chars().count(),
        text: truncate_comment(&text, &options),
        options,
    })
}

/// Drops the single line terminator that piped input ends with.
fn strip_line_ending(mut input: String) -> String {
    if input.ends_with('\n') {
        input.pop();
        if input.ends_with('\r') {
            input.pop();
        }
    }
    input
}
