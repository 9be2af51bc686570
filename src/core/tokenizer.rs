// File: src/core/tokenizer.rs
use crate::core::types::{Token, TokenKind, QUOTE_CLOSE, QUOTE_OPEN};

/// Splits text into alternating whitespace and non-whitespace runs. A run
/// with any letter in it is a word; anything else is punctuation.
///
/// Concatenating the token texts gives back the input exactly.
pub fn segment(text: &str) -> Vec<Token> {
    let mut tokens = Vec::new();
    let mut current = String::new();
    let mut in_space = false;

    for c in text.chars() {
        let space = c.is_whitespace();
        if !current.is_empty() && space != in_space {
            tokens.push(classify(std::mem::take(&mut current), in_space));
        }
        in_space = space;
        current.push(c);
    }
    if !current.is_empty() {
        tokens.push(classify(current, in_space));
    }
    tokens
}

fn classify(text: String, whitespace: bool) -> Token {
    let kind = if whitespace {
        TokenKind::Whitespace
    } else if text.chars().any(char::is_alphabetic) {
        TokenKind::Word
    } else {
        TokenKind::Punctuation
    };
    Token::new(text, kind)
}

/// Like [`segment`], but a quotation-bracketed span that contains spaces is
/// kept as one word token. Used on rendered text, where multi-word titles
/// come wrapped as `«… …»`.
pub fn segment_bracketed(text: &str) -> Vec<Token> {
    let mut merged: Vec<Token> = Vec::new();
    let mut open: Option<Token> = None;

    for token in segment(text) {
        if let Some(mut group) = open.take() {
            group.text.push_str(&token.text);
            if token.kind == TokenKind::Whitespace || !token.text.contains(QUOTE_CLOSE) {
                open = Some(group);
            } else {
                group.kind = TokenKind::Word;
                merged.push(group);
            }
            continue;
        }
        if token.kind != TokenKind::Whitespace && opens_unclosed(&token.text) {
            open = Some(token);
        } else {
            merged.push(token);
        }
    }

    // An unclosed bracket falls back to plain segmentation.
    if let Some(group) = open {
        merged.extend(segment(&group.text));
    }
    merged
}

fn opens_unclosed(text: &str) -> bool {
    match text.rfind(QUOTE_OPEN) {
        Some(i) => !text[i..].contains(QUOTE_CLOSE),
        None => false,
    }
}
