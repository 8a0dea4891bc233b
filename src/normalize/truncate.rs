use std::borrow::Cow;

use serde::{Deserialize, Serialize};

pub const DEFAULT_MAX_LENGTH: usize = 260;
pub const DEFAULT_WORD_MAX_LENGTH: usize = 20;

const PARAGRAPH_BREAK: &str = "\n\n";
const LINK_PREFIX: &str = "https://";
const ELLIPSIS: &str = "...";

/// Limits for comment previews. Both count characters, not bytes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct TruncateOptions {
    pub max_length: usize,
    pub word_max_length: usize,
}

impl Default for TruncateOptions {
    fn default() -> Self {
        Self {
            max_length: DEFAULT_MAX_LENGTH,
            word_max_length: DEFAULT_WORD_MAX_LENGTH,
        }
    }
}

/// Shortens a comment for display.
///
/// The first matching rule decides where the text is cut:
/// 1. a paragraph break before `max_length` ends the preview there, with no ellipsis;
/// 2. otherwise the last `https://` starting at or before `max_length` is dropped together
///    with the word it is attached to, and `...` is appended;
/// 3. otherwise text of at most `max_length` characters is kept whole;
/// 4. otherwise the text is cut at the last space at or before `max_length` and `...`
///    is appended. Without such a space the cut lands exactly on `max_length`.
///
/// Every word of the result longer than `word_max_length` is then shortened as in
/// [`truncate_long_words`].
pub fn truncate_comment(comment: &str, opts: &TruncateOptions) -> String {
    let cut = cut_comment(comment, opts.max_length);
    truncate_long_words(&cut, opts.word_max_length)
}

fn cut_comment(comment: &str, max_length: usize) -> Cow<'_, str> {
    let limit = byte_offset(comment, max_length);

    if let Some(index) = comment.find(PARAGRAPH_BREAK).filter(|&i| i < limit) {
        return Cow::Borrowed(&comment[..index]);
    }

    let last_link = comment
        .match_indices(LINK_PREFIX)
        .map(|(start, _)| start)
        .take_while(|&start| start <= limit)
        .last();
    if let Some(link_start) = last_link {
        let end = comment[..link_start].rfind(' ').unwrap_or(link_start);
        return Cow::Owned(format!("{}{ELLIPSIS}", &comment[..end]));
    }

    // No character sits at `max_length`, so the whole text fits.
    if limit == comment.len() {
        return Cow::Borrowed(comment);
    }

    let window = &comment[..byte_offset(comment, max_length + 1)];
    let end = window.rfind(' ').unwrap_or(limit);
    Cow::Owned(format!("{}{ELLIPSIS}", &comment[..end]))
}

/// Cuts every space-separated word longer than `word_max_length` characters
/// down to that length and appends `...`.
pub fn truncate_long_words(text: &str, word_max_length: usize) -> String {
    text.split(' ')
        .map(|word| {
            let end = byte_offset(word, word_max_length);
            if end < word.len() {
                Cow::Owned(format!("{}{ELLIPSIS}", &word[..end]))
            } else {
                Cow::Borrowed(word)
            }
        })
        .collect::<Vec<_>>()
        .join(" ")
}

/// Byte offset of the `chars`-th character, or the text length when shorter.
fn byte_offset(text: &str, chars: usize) -> usize {
    text.char_indices()
        .nth(chars)
        .map_or(text.len(), |(offset, _)| offset)
}
