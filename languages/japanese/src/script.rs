use std::sync::LazyLock;

use regex::Regex;

static JAPANESE_RUN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"[\p{Hiragana}\p{Katakana}\p{Han}ー々、。「」『』？！]+")
        .expect("japanese script pattern is valid")
});

/// Longest contiguous run of Japanese script in `text`, earliest wins on ties.
/// `None` when the text has no Japanese at all.
pub fn longest_japanese_run(text: &str) -> Option<&str> {
    let mut longest: Option<&str> = None;

    for found in JAPANESE_RUN.find_iter(text) {
        let run = found.as_str();
        if longest.is_none_or(|current| run.len() > current.len()) {
            longest = Some(run);
        }
    }

    longest
}
