use unicode_normalization::UnicodeNormalization;

/// Cleanup applied to user text before it reaches a capability
pub trait Preprocessor {
    fn process(&self, text: &str) -> String;
}

/// NFKC folding for pasted Japanese. Half-width katakana become full width
/// and line breaks are dropped. NFKC turns `？` and `！` into ASCII, they are
/// restored when they follow Japanese script so sentence endings survive.
#[derive(Debug, Default, Clone, Copy)]
pub struct DefaultPreprocessor;

impl Preprocessor for DefaultPreprocessor {
    fn process(&self, text: &str) -> String {
        let mut out = String::with_capacity(text.len());

        for c in text.trim().nfkc() {
            match c {
                '\n' | '\r' => {}
                '?' | '!' if out.chars().next_back().is_some_and(is_japanese) => {
                    out.push(if c == '?' { '？' } else { '！' });
                }
                c => out.push(c),
            }
        }

        out.trim().to_string()
    }
}

/// Kana, kanji and the prolonged sound / iteration marks
fn is_japanese(c: char) -> bool {
    matches!(c,
        '\u{3040}'..='\u{309F}'
        | '\u{30A0}'..='\u{30FF}'
        | '\u{3400}'..='\u{4DBF}'
        | '\u{4E00}'..='\u{9FFF}'
        | '々' | '？' | '！' | '。'
    )
}
