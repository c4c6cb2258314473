//! Language detection for fenced-block tags.
//!
//! An ordered registry of (tag, pattern) rules scanned top to bottom; the
//! first rule whose pattern occurs anywhere in the text wins. This is a
//! first-match policy, not a best-match one: a text matching both the
//! javascript and typescript rules is tagged `javascript` because that
//! rule is declared earlier. Matching is existence-only and
//! case-insensitive.

use once_cell::sync::Lazy;
use regex::Regex;

/// Fallback tag when no rule matches.
pub const PLAINTEXT: &str = "plaintext";

/// Ordered rule registry. Order is load-bearing: several patterns overlap
/// (`private ` appears in both typescript and java; a same-line `{...}`
/// span satisfies javascript before css or json ever get a look).
static RULES: Lazy<Vec<(&'static str, Regex)>> = Lazy::new(|| {
    vec![
        (
            "python",
            Regex::new(
                r#"(?i)(def |class |import |from .+ import|[ ]{4}|@[A-Za-z_][A-Za-z0-9_]*|async def|print\(|if __name__ == "__main__":|raise Exception)"#,
            )
            .expect("python rule regex"),
        ),
        (
            "javascript",
            Regex::new(
                r"(?i)(const |let |var |function |=>|\{.*\}|console\.|document\.|window\.|addEventListener|Promise|async function)",
            )
            .expect("javascript rule regex"),
        ),
        (
            "typescript",
            Regex::new(r"(?i)(interface |type |namespace |enum |readonly |private |public |async )")
                .expect("typescript rule regex"),
        ),
        (
            "java",
            Regex::new(r"(?i)(public class |private |protected |void |static |extends |implements )")
                .expect("java rule regex"),
        ),
        (
            "html",
            Regex::new(r"(?i)(<[^>]+>|<!DOCTYPE|<html|<body|<head|<script|<style)")
                .expect("html rule regex"),
        ),
        (
            "css",
            Regex::new(r"(?i)(@media|@import|@keyframes|\{.*\}|margin:|padding:|color:|background:)")
                .expect("css rule regex"),
        ),
        (
            "sql",
            Regex::new(r"(?i)(SELECT |INSERT |UPDATE |DELETE |CREATE TABLE|ALTER |DROP |WHERE |JOIN )")
                .expect("sql rule regex"),
        ),
        (
            "bash",
            Regex::new(r"(?i)(#!/bin/|echo |sudo |apt |yum |brew |chmod |chown |mkdir |cd |ls )")
                .expect("bash rule regex"),
        ),
        // Whole-input object-or-array envelope, may span lines.
        (
            "json",
            Regex::new(r"(?is)^\s*[\{\[].*[\}\]]\s*$").expect("json rule regex"),
        ),
        (
            "xml",
            Regex::new(r"(?is)(<\?xml|<[^>]+>.*</[^>]+>)").expect("xml rule regex"),
        ),
    ]
});

/// Best-guess language tag for `code`, or [`PLAINTEXT`] when no rule
/// matches. Deterministic and order-dependent by construction.
pub fn detect_language(code: &str) -> &'static str {
    for (lang, pattern) in RULES.iter() {
        if pattern.is_match(code) {
            return lang;
        }
    }
    PLAINTEXT
}
