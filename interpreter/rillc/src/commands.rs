//! File-based commands: run, parse, lex.

use rill_ir::{LineCol, SharedArena, SharedInterner, Span};
use rill_object::Scope;
use rill_eval::Interpreter;

/// Read a source file or exit with a message.
fn read_source(path: &str) -> String {
    match std::fs::read_to_string(path) {
        Ok(source) => source,
        Err(e) => {
            eprintln!("error: cannot read {path}: {e}");
            std::process::exit(1);
        }
    }
}

fn report(source: &str, path: &str, span: Span, message: &str) {
    let pos = LineCol::of(source, span.start);
    eprintln!("{path}:{pos}: {message}");
}

/// Evaluate a script file.
pub fn run_file(path: &str) {
    let source = read_source(path);
    let interner = SharedInterner::new();

    let outcome = rill_parse::parse_source(&source, &interner);
    if !outcome.errors.is_empty() {
        for error in &outcome.errors {
            report(&source, path, error.span, &error.message);
        }
        std::process::exit(1);
    }

    let interp = Interpreter::new(interner, SharedArena::new(outcome.arena));
    if let Err(e) = interp.eval_program(&outcome.program, &Scope::root()) {
        let span = e.span.unwrap_or(Span::DUMMY);
        report(&source, path, span, &format!("runtime error: {e}"));
        std::process::exit(1);
    }
}

/// Parse a script file and report errors or a summary.
pub fn parse_file(path: &str) {
    let source = read_source(path);
    let interner = SharedInterner::new();

    let outcome = rill_parse::parse_source(&source, &interner);
    if outcome.errors.is_empty() {
        println!(
            "ok: {} statement(s), {} expression node(s)",
            outcome.program.statements.len(),
            outcome.arena.expr_count()
        );
    } else {
        for error in &outcome.errors {
            report(&source, path, error.span, &error.message);
        }
        std::process::exit(1);
    }
}

/// Dump the token stream of a script file.
pub fn lex_file(path: &str) {
    let source = read_source(path);
    let interner = SharedInterner::new();

    let (tokens, errors) = rill_lexer::lex(&source, &interner);
    for token in tokens.iter() {
        let pos = LineCol::of(&source, token.span.start);
        println!("{pos}\t{}", token.kind.display_name());
    }
    if !errors.is_empty() {
        for error in &errors {
            report(&source, path, error.span, &error.message);
        }
        std::process::exit(1);
    }
}
