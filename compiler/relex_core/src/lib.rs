//! Ordered-pattern tokenizer for language front-ends.
//!
//! A [`LexerBuilder`] collects named regex patterns in priority order and
//! freezes them into a [`Lexer`]. The lexer turns a byte position in a
//! source string into exactly one [`Token`]:
//!
//! - the first registered pattern that matches at the position wins,
//!   regardless of match length (no maximal munch);
//! - tokens from `skip` patterns (whitespace, comments) are folded into the
//!   next significant token's [`Token::skipped`] list;
//! - input that no pattern recognizes becomes a single `UNEXPECTED` token
//!   spanning the whole unrecognized run, so scanning never aborts.
//!
//! A [`Scanner`] pairs the lexer with one source buffer and a cursor, giving
//! a recursive descent parser `peek`/`advance`/`expect`.
//!
//! ```
//! use relex_core::LexerBuilder;
//!
//! let lexer = LexerBuilder::new()
//!     .define("WHITESPACE", r"\s+", true)?
//!     .keyword("let")?
//!     .operator("=")?
//!     .define("ID", r"[a-zA-Z_][a-zA-Z0-9_]*", false)?
//!     .define("NUMBER", r"[0-9]+", false)?
//!     .build();
//!
//! let mut scanner = lexer.scanner("let answer = 42");
//! scanner.expect("let")?;
//! let name = scanner.expect("ID")?;
//! assert_eq!(name.text(), "answer");
//! assert_eq!(name.skipped().len(), 1);
//! scanner.expect("=")?;
//! assert_eq!(scanner.expect("NUMBER")?.text(), "42");
//! assert!(scanner.peek().is_eof());
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```
//!
//! The lexer is immutable once built and `Send + Sync`; share it by
//! reference (or `Arc`) between any number of scanners.

mod engine;
mod error;
mod registry;
mod scanner;
mod span;
mod token;

pub use error::{DefineError, ScanError};
pub use registry::{Lexer, LexerBuilder, PatternDefinition};
pub use scanner::{Scanner, Tokens};
pub use span::Span;
pub use token::{Token, EOF, UNEXPECTED};
