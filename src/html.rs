//! HTML cleanup for inbound webhook messages.
//!
//! The chat platform delivers rich messages as HTML fragments. The
//! webhook path only wants the text: tags are removed and the surviving
//! text segments are joined with newlines, so block-level structure
//! degrades to line breaks instead of words running together.

use once_cell::sync::Lazy;
use regex::Regex;

static TAG: Lazy<Regex> = Lazy::new(|| Regex::new(r"<[^>]+>").expect("html tag regex"));

/// Remove HTML tags from `input`, joining the text segments between them
/// with `\n` and decoding the common entities. Tag-free input passes
/// through with only entity decoding applied.
pub fn strip_html(input: &str) -> String {
    if !TAG.is_match(input) {
        return decode_entities(input);
    }
    let text = TAG
        .split(input)
        .filter(|segment| !segment.is_empty())
        .collect::<Vec<_>>()
        .join("\n");
    decode_entities(&text)
}

/// Decode the handful of entities the platform actually emits. `&amp;`
/// is decoded last so it cannot re-introduce another entity.
fn decode_entities(text: &str) -> String {
    text.replace("&lt;", "<")
        .replace("&gt;", ">")
        .replace("&quot;", "\"")
        .replace("&#39;", "'")
        .replace("&nbsp;", " ")
        .replace("&amp;", "&")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn plain_text_is_unchanged() {
        assert_eq!(strip_html("just text"), "just text");
    }

    #[test]
    fn tags_are_removed() {
        assert_eq!(strip_html("<p>Hello <b>world</b></p>"), "Hello \nworld");
    }

    #[test]
    fn block_tags_become_line_breaks() {
        assert_eq!(
            strip_html("<p>def f():</p><p>    return 1</p>"),
            "def f():\n    return 1"
        );
    }

    #[test]
    fn adjacent_tags_do_not_produce_blank_lines() {
        assert_eq!(strip_html("<div><span>one</span></div>"), "one");
    }

    #[test]
    fn entities_are_decoded() {
        assert_eq!(strip_html("a &lt;= b &amp;&amp; c"), "a <= b && c");
        assert_eq!(strip_html("<code>&quot;hi&quot;</code>"), "\"hi\"");
    }

    #[test]
    fn empty_input_stays_empty() {
        assert_eq!(strip_html(""), "");
        assert_eq!(strip_html("<br/>"), "");
    }
}
