//!# prowl
//!
//! `prowl` is a small regular expression engine built for embedding in text
//! search tools (the kind that walk a directory tree and grep every file).
//! It compiles a deliberately restricted dialect into a compact
//! nondeterministic finite automaton and runs that automaton in two modes:
//! whole-string matching and longest-substring search, with optional
//! tolerance for non-printable bytes in the searched text.
//!
//! ## Usage
//!
//! ```rust
//! use prowl::Tolerance;
//!
//! fn main() {
//!     let nfa = prowl::compile(r"ab+c").unwrap();
//!
//!     // Whole-string matching: the entire input must match.
//!     assert!(nfa.is_match(b"abbbc").unwrap());
//!     assert!(!nfa.is_match(b"xabbbcx").unwrap());
//!
//!     // Substring search: the widest match wins, earliest first on ties.
//!     let span = nfa.find(b"xabbbcx").unwrap().unwrap();
//!     assert_eq!(span.range(), 1..6);
//!
//!     // Reuse the scratch state when scanning many lines, and ask for the
//!     // scan cursor: searching stops at a newline.
//!     let mut searcher = nfa.searcher();
//!     let scan = searcher.scan(b"abc\nabbc", Tolerance::Reject).unwrap();
//!     assert_eq!(scan.span.unwrap().range(), 0..3);
//!     assert_eq!(scan.cursor, 3);
//! }
//! ```
//!
//! ## Pattern syntax
//!
//! Patterns are printable ASCII. The dialect:
//!
//! * Literal characters match themselves; `.` matches any printable byte
//!   except tab.
//! * Escapes: `\t` (tab), `\s` (space or tab), `\d` (decimal digit), and
//!   `\\` `\(` `\)` `\[` `\]` `\{` `\}` `\.` `\*` `\+` `\?` `\^` `\$` `\|`
//!   for literal metacharacters. Anything else fails to compile.
//! * Anchors: `^` (start of input; only legal at the start of an
//!   alternation branch) and `$` (end of input).
//! * Groups `(...)` (non-capturing, empty groups allowed) and n-ary
//!   alternation `a|b|c`, where an empty branch stands for the empty
//!   string.
//! * Character classes `[...]`, with `^` negation over the printable
//!   alphabet, a literal `-` as first member, and inclusive ranges `A-B`
//!   within `A-Z`, `a-z` or `0-9`. Inside a class only `\t`, `\[` and `\]`
//!   are escapes.
//! * Postfix quantifiers `?`, `+` and `*` on the preceding atom or group.
//! * Curly braces are reserved and must be escaped.
//!
//! There are no capture groups, backreferences or lookaround, and no
//! Unicode awareness: the alphabet is printable ASCII plus tab, full stop.
//!
//! ## Searching text with non-printable bytes
//!
//! A search stops at the first `\r` or `\n` (newlines are line
//! terminators, never part of a match) and reports where it stopped, so a
//! caller feeding raw file contents can pick up at the next line. Other
//! bytes outside the alphabet either abort the scan or, with
//! [Tolerance::Skip], act as hard breaks: candidates in flight are dropped
//! and `^`/`$` bind to the edges of the break, as if each run of
//! non-printable bytes ended one input and began another.
//!
//! ## Operations
//!
//! * [Compiling a pattern](compile) to an automaton
//! * [Whole-string matching](Nfa::is_match) and
//!   [longest-substring search](Nfa::find)
//! * [Reusable scratch state](Nfa::matcher) for
//!   [both runtimes](Nfa::searcher)
//! * [Recovering the original pattern](Nfa::description) from an automaton
//! * [Rendering a caret diagnostic](CompileError::annotate) for a
//!   compilation error

pub mod compiler;
pub mod nfa;
pub(crate) mod parser;

pub use compiler::{compile, CompileError, CompileErrorKind};
pub use nfa::{Matcher, Nfa, Scan, Searcher, Span, Tolerance, UnprintableByte};
