//! Interactive REPL.
//!
//! One interner and one root scope persist for the session; every line
//! gets a fresh parse and interpreter. Closures keep their own arena
//! alive, so functions defined on earlier lines stay callable.

use std::io::Write;

use rill_eval::Interpreter;
use rill_ir::{SharedArena, SharedInterner, Stmt};
use rill_object::Scope;

const PROMPT: &str = ">> ";

/// Run the REPL until end of input or `exit`.
pub fn start() {
    let interner = SharedInterner::new();
    let scope = Scope::root();

    println!("Rill {} - type `exit` to leave", env!("CARGO_PKG_VERSION"));

    // No persistent stdin lock here: the `input` builtin takes its own
    // lock per read, and a held lock would deadlock it.
    let mut buffer = String::new();
    loop {
        print!("{PROMPT}");
        let _ = std::io::stdout().flush();

        buffer.clear();
        match std::io::stdin().read_line(&mut buffer) {
            Ok(0) => {
                // End of input.
                println!();
                break;
            }
            Ok(_) => {}
            Err(e) => {
                eprintln!("error: cannot read input: {e}");
                break;
            }
        }

        let line = buffer.trim();
        if line.is_empty() {
            continue;
        }
        if line == "exit" {
            break;
        }

        let outcome = rill_parse::parse_source(line, &interner);
        if !outcome.errors.is_empty() {
            for error in &outcome.errors {
                eprintln!("parse error: {error}");
            }
            continue;
        }

        // A trailing bare `let` would only echo `null`; stay quiet.
        let ends_with_let = matches!(outcome.program.statements.last(), Some(Stmt::Let { .. }));

        let interp = Interpreter::new(interner.clone(), SharedArena::new(outcome.arena));
        match interp.eval_program(&outcome.program, &scope) {
            Ok(value) => {
                if !ends_with_let {
                    println!("{}", value.inspect(&interner));
                }
            }
            Err(e) => eprintln!("error: {e}"),
        }
    }
}
