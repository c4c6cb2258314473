/// Code-likelihood classifier — pure heuristic, < 1ms, no parsing.
///
/// Votes seven independent boolean indicators over the raw message text.
/// A message is treated as code when at least 2 of the 7 fire and the
/// message has enough lines to judge. The indicator set and the ≥2
/// threshold are a wire contract with the chat integration — changing
/// either changes which messages get wrapped.

use std::sync::OnceLock;

// Call-shaped token: identifier characters immediately followed by a
// parenthesized argument run, e.g. `print("hi")` or `foo(x, y)`.
static RE_CALL: OnceLock<regex::Regex> = OnceLock::new();

fn re_call() -> &'static regex::Regex {
    RE_CALL.get_or_init(|| {
        regex::Regex::new(r"[A-Za-z0-9_]+\([^)]*\)").expect("call pattern regex")
    })
}

/// Keywords counted as a single indicator when any one appears in the
/// lowercased text. Trailing spaces are significant (`def ` not `def`).
const CODE_KEYWORDS: [&str; 15] = [
    "function", "def ", "class ", "import ", "return", "const ", "let ",
    "var ", "if ", "for ", "while ", "try:", "catch", "public ", "private ",
];

/// Decide whether `text` is likely a block of source code.
///
/// Returns false immediately when the text has fewer than `min_lines`
/// lines — too short to judge. This function is **pure**: no side
/// effects, no panics, safe on empty and unicode-only input.
pub fn is_code(text: &str, min_lines: i64) -> bool {
    let lines: Vec<&str> = text.split('\n').collect();
    if (lines.len() as i64) < min_lines {
        return false;
    }

    let lower = text.to_lowercase();

    let indicators = [
        // Indentation: some line starts with four spaces or a tab.
        lines
            .iter()
            .any(|line| line.starts_with("    ") || line.starts_with('\t')),
        // Common programming keywords.
        CODE_KEYWORDS.iter().any(|kw| lower.contains(kw)),
        // Paired braces.
        text.contains('{') && text.contains('}'),
        // Paired parentheses.
        text.contains('(') && text.contains(')'),
        // Statement/label punctuation.
        text.contains(';') || text.contains(':'),
        // Assignment without comparison. Crude substring check: a text
        // carrying both `=` and `==` anywhere fails this indicator.
        text.contains('=') && !text.contains("=="),
        // Call-shaped token somewhere in the text.
        re_call().is_match(text),
    ];

    indicators.iter().filter(|&&fired| fired).count() >= 2
}
