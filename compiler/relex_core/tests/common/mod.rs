//! Shared setup for integration tests.

use std::sync::Once;

use relex_core::{Lexer, LexerBuilder};

static TRACING_INIT: Once = Once::new();

/// Install a tracing subscriber for test output.
///
/// Safe to call from every test. Enable with `RUST_LOG=relex_core=trace`.
pub fn init_tracing() {
    TRACING_INIT.call_once(|| {
        use tracing_subscriber::{fmt, prelude::*, EnvFilter};

        if std::env::var("RUST_LOG").is_ok() {
            let filter = EnvFilter::from_default_env();
            tracing_subscriber::registry()
                .with(fmt::layer().with_test_writer().with_target(true))
                .with(filter)
                .init();
        }
    });
}

/// `WHITESPACE` (skip) on `\s+` followed by a C-style `ID`.
pub fn whitespace_and_ids() -> Lexer {
    init_tracing();
    match LexerBuilder::new()
        .define("WHITESPACE", r"\s+", true)
        .and_then(|b| b.define("ID", "[a-zA-Z_][a-zA-Z0-9_]*", false))
    {
        Ok(builder) => builder.build(),
        Err(err) => panic!("bad test registry: {err}"),
    }
}

/// A small expression-language registry with comments, keywords, numbers,
/// and operators.
pub fn expression_language() -> Lexer {
    init_tracing();
    let builder = LexerBuilder::new()
        .define("WHITESPACE", r"\s+", true)
        .and_then(|b| b.define("COMMENT", r"//[^\r\n]*", true))
        .and_then(|b| b.keyword("let"))
        .and_then(|b| b.keyword("fn"))
        .and_then(|b| b.define("NUMBER", r"[0-9]+(\.[0-9]+)?([eE][+-]?[0-9]+)?", false))
        .and_then(|b| b.define("ID", "[a-zA-Z_][a-zA-Z0-9_]*", false))
        .and_then(|b| b.operator("=="))
        .and_then(|b| b.operator("="))
        .and_then(|b| b.operator("+"))
        .and_then(|b| b.operator("*"))
        .and_then(|b| b.operator("("))
        .and_then(|b| b.operator(")"))
        .and_then(|b| b.operator(";"));
    match builder {
        Ok(builder) => builder.build(),
        Err(err) => panic!("bad test registry: {err}"),
    }
}
