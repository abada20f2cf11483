use super::{Anchor, LexError, Token};
use crate::compiler::CompileErrorKind;
use crate::nfa::symbols::SymbolSet;
use nom::branch::alt;
use nom::bytes::complete::take;
use nom::character::complete::{char, one_of};
use nom::combinator::{map, value};
use nom::IResult;

type TokenResult<'a> = IResult<&'a str, Token, LexError<'a>>;

/// The characters that may appear escaped outside a character class.
const METACHARACTERS: &str = "\\()[]{}.*+?^$|";

pub(super) fn token(input: &str) -> TokenResult {
    alt((
        value(Token::OpenGroup, char('(')),
        value(Token::CloseGroup, char(')')),
        value(Token::Pipe, char('|')),
        value(Token::Quantifier, one_of("?+*")),
        value(Token::Anchor(Anchor::Start), char('^')),
        value(Token::Anchor(Anchor::End), char('$')),
        value(Token::Atom(SymbolSet::wildcard()), char('.')),
        class,
        escape,
        curly,
        literal,
    ))(input)
}

fn escape(input: &str) -> TokenResult {
    let (rest, _) = char('\\')(input)?;
    let set = match rest.chars().next() {
        Some('t') => SymbolSet::byte(b'\t'),
        Some('s') => SymbolSet::whitespace(),
        Some('d') => SymbolSet::digits(),
        Some(c) if METACHARACTERS.contains(c) => SymbolSet::byte(c as u8),
        _ => {
            return Err(nom::Err::Failure(LexError::new(
                rest,
                CompileErrorKind::InvalidEscape,
            )))
        }
    };
    Ok((&rest[1..], Token::Atom(set)))
}

/// Curly braces are reserved: seeing an unescaped one is a hard failure.
fn curly(input: &str) -> TokenResult {
    let (_, _) = one_of::<_, _, LexError>("{}")(input)?;
    Err(nom::Err::Failure(LexError::new(
        input,
        CompileErrorKind::CurlyBrace,
    )))
}

/// Any remaining character stands for itself. The compiler validates the
/// pattern as printable ASCII up front, so single-byte indexing is safe, and
/// every metacharacter has been claimed by an earlier alternative. A stray
/// `]` is an ordinary literal.
fn literal(input: &str) -> TokenResult {
    map(take(1usize), |s: &str| {
        Token::Atom(SymbolSet::byte(s.as_bytes()[0]))
    })(input)
}

/// Parses a whole `[...]` class into one symbol set.
///
/// `^` directly after `[` negates the class over the printable alphabet. A
/// leading `-` is a literal member. `A-B` is an inclusive range, valid only
/// within one of the monotone spans `A-Z`, `a-z`, `0-9` and with `A < B`;
/// the range marker binds only directly after an unescaped single-character
/// member. Inside a class only `\t`, `\[` and `\]` are recognized escapes.
fn class(input: &str) -> TokenResult {
    let (rest, _) = char('[')(input)?;
    let bytes = rest.as_bytes();
    let mut at = 0;

    let negated = bytes.first() == Some(&b'^');
    if negated {
        at += 1;
    }
    let mut set = SymbolSet::none();
    if bytes.get(at) == Some(&b'-') {
        set.insert_byte(b'-');
        at += 1;
    }

    loop {
        match bytes.get(at).copied() {
            None => {
                return Err(nom::Err::Failure(LexError::new(
                    input,
                    CompileErrorKind::UnclosedClass,
                )))
            }
            Some(b']') => {
                at += 1;
                break;
            }
            Some(b'\\') => {
                let member = match bytes.get(at + 1).copied() {
                    Some(b't') => b'\t',
                    Some(c @ (b'[' | b']')) => c,
                    _ => {
                        return Err(nom::Err::Failure(LexError::new(
                            &rest[at + 1..],
                            CompileErrorKind::InvalidEscape,
                        )))
                    }
                };
                set.insert_byte(member);
                at += 2;
            }
            Some(lo) if bytes.get(at + 1) == Some(&b'-') => {
                let Some(&hi) = bytes.get(at + 2) else {
                    return Err(nom::Err::Failure(LexError::new(
                        input,
                        CompileErrorKind::UnclosedClass,
                    )));
                };
                let top = match lo {
                    b'A'..=b'Y' => b'Z',
                    b'a'..=b'y' => b'z',
                    b'0'..=b'8' => b'9',
                    _ => {
                        return Err(nom::Err::Failure(LexError::new(
                            &rest[at..],
                            CompileErrorKind::InvalidClassRange,
                        )))
                    }
                };
                if !(lo < hi && hi <= top) {
                    return Err(nom::Err::Failure(LexError::new(
                        &rest[at..],
                        CompileErrorKind::InvalidClassRange,
                    )));
                }
                set.insert_range(lo, hi);
                at += 3;
            }
            Some(member) => {
                set.insert_byte(member);
                at += 1;
            }
        }
    }

    if negated {
        set = set.negate();
    }
    if set.is_unmatchable() {
        return Err(nom::Err::Failure(LexError::new(
            input,
            CompileErrorKind::EmptyClass,
        )));
    }
    Ok((&rest[at..], Token::Atom(set)))
}
