//! End-to-end: scan, collect problems, render them.

use pretty_assertions::assert_eq;
use relex_core::{DefineError, Lexer, LexerBuilder, Scanner};
use relex_diagnostic::emitter::{ColorMode, DiagnosticEmitter, TerminalEmitter};
use relex_diagnostic::{collect_unexpected, from_scan_error, Diagnostic, ErrorCode};

fn lexer() -> Result<Lexer, DefineError> {
    Ok(LexerBuilder::new()
        .define("WS", r"\s+", true)?
        .keyword("let")?
        .define("ID", "[a-z]+", false)?
        .define("NUMBER", "[0-9]+", false)?
        .operator("=")?
        .operator(";")?
        .build())
}

fn render(path: &str, source: &str, diagnostics: &[Diagnostic]) -> String {
    let mut emitter = TerminalEmitter::new(Vec::new(), path, source, ColorMode::Never, false);
    let errors = emitter.emit_report(diagnostics);
    assert_eq!(errors, diagnostics.len());
    String::from_utf8_lossy(&emitter.into_inner()).into_owned()
}

/// Scan `let ID = NUMBER ;`, stopping at the first mismatch.
fn parse_binding(scanner: &mut Scanner<'_>) -> Result<(), relex_core::ScanError> {
    scanner.expect("let")?;
    scanner.expect("ID")?;
    scanner.expect("=")?;
    scanner.expect("NUMBER")?;
    scanner.expect(";")?;
    Ok(())
}

#[test]
fn unrecognized_input_report() -> Result<(), DefineError> {
    let lexer = lexer()?;
    let source = "let x = 1 $ 2";
    let diagnostics = collect_unexpected(&lexer, source);
    assert_eq!(diagnostics.len(), 1);
    assert_eq!(diagnostics[0].code, ErrorCode::L0001);

    assert_eq!(
        render("demo.rl", source, &diagnostics),
        "error[L0001]: unrecognized input `$`\n\
         \x20 --> demo.rl:1:11\n\
         \x20 |\n\
         1 | let x = 1 $ 2\n\
         \x20 |           ^ no token definition matches here\n\
         \n\
         error: aborting due to previous error\n"
    );
    Ok(())
}

#[test]
fn expect_failure_on_second_line() -> Result<(), DefineError> {
    let lexer = lexer()?;
    let source = "let x =\n;";
    let mut scanner = lexer.scanner(source);
    let Err(err) = parse_binding(&mut scanner) else {
        panic!("binding without a value should not parse");
    };
    assert_eq!(scanner.position(), source.len());

    let text = render("demo.rl", source, &[from_scan_error(&err)]);
    assert!(
        text.starts_with("error[L0002]: unexpected token: expected NUMBER, found ; `;`\n"),
        "{text}"
    );
    assert!(text.contains("  --> demo.rl:2:1\n"), "{text}");
    assert!(text.contains("2 | ;\n  | ^ expected NUMBER\n"), "{text}");
    Ok(())
}

#[test]
fn end_of_input_report() -> Result<(), DefineError> {
    let lexer = lexer()?;
    let source = "let x =";
    let mut scanner = lexer.scanner(source);
    let Err(err) = parse_binding(&mut scanner) else {
        panic!("truncated binding should not parse");
    };

    let text = render("demo.rl", source, &[from_scan_error(&err)]);
    assert!(
        text.starts_with("error[L0002]: unexpected end of input: expected NUMBER\n"),
        "{text}"
    );
    assert!(text.contains("  --> demo.rl:1:8\n"), "{text}");
    assert!(text.contains("1 | let x =\n  |        ^ expected NUMBER\n"), "{text}");
    Ok(())
}

#[test]
fn clean_input_reports_nothing() -> Result<(), DefineError> {
    let lexer = lexer()?;
    let source = "let answer = 42;";
    assert!(collect_unexpected(&lexer, source).is_empty());

    let mut scanner = lexer.scanner(source);
    assert!(parse_binding(&mut scanner).is_ok());
    assert!(scanner.at_end());
    assert_eq!(render("demo.rl", source, &[]), "");
    Ok(())
}
