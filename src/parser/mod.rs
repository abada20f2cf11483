//! # Pattern tokenizer
//! This module cuts a pattern into [Token]s, one at a time, for the
//! [compiler](crate::compiler). A token is either a structural character
//! (group delimiters, the alternation bar, a quantifier mark, an anchor) or
//! a complete atom: a literal, an escape, the wildcard, or a whole character
//! class folded into a single [symbol set](crate::nfa::symbols). The
//! compiler never needs to look inside an atom again; it only wires the
//! symbol set into the automaton.
//!
//! Tokenization failures carry a [CompileErrorKind] and the position at
//! which they occurred, so "unclosed character class" and "invalid escape"
//! survive the combinator layer intact instead of collapsing into a generic
//! parse error.

mod pattern;

use crate::compiler::{CompileError, CompileErrorKind};
use crate::nfa::symbols::SymbolSet;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Token {
    /// `(`
    OpenGroup,
    /// `)`
    CloseGroup,
    /// `|`
    Pipe,
    /// `?`, `+` or `*` standing on its own. Quantifiers attached to an atom
    /// are consumed by the compiler directly, so lexing one here means it
    /// had nothing to apply to.
    Quantifier,
    Anchor(Anchor),
    /// A literal, escape, wildcard or character class.
    Atom(SymbolSet),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Anchor {
    /// `^`
    Start,
    /// `$`
    End,
}

/// Error type threaded through the nom parsers: the remaining input pins the
/// position, and hard failures carry the specific error kind.
#[derive(Debug, PartialEq)]
pub(crate) struct LexError<'a> {
    rest: &'a str,
    kind: Option<CompileErrorKind>,
}

impl<'a> LexError<'a> {
    fn new(rest: &'a str, kind: CompileErrorKind) -> Self {
        Self {
            rest,
            kind: Some(kind),
        }
    }
}

impl<'a> nom::error::ParseError<&'a str> for LexError<'a> {
    fn from_error_kind(input: &'a str, _: nom::error::ErrorKind) -> Self {
        Self {
            rest: input,
            kind: None,
        }
    }

    fn append(_: &'a str, _: nom::error::ErrorKind, other: Self) -> Self {
        other
    }
}

/// Cuts the next token off `rest`. `pattern` is the full pattern text, used
/// to turn the remaining-input pointer of an error into a byte offset.
pub(crate) fn next_token<'a>(pattern: &str, rest: &'a str) -> Result<(&'a str, Token), CompileError> {
    match pattern::token(rest) {
        Ok(pair) => Ok(pair),
        Err(nom::Err::Error(e)) | Err(nom::Err::Failure(e)) => Err(CompileError {
            kind: e.kind.unwrap_or(CompileErrorKind::InvalidEscape),
            at: pattern.len() - e.rest.len(),
        }),
        Err(nom::Err::Incomplete(_)) => Err(CompileError {
            kind: CompileErrorKind::UnclosedClass,
            at: pattern.len() - rest.len(),
        }),
    }
}
