//! Rill CLI
//!
//! `rill` with no arguments starts the REPL; `run`/`parse`/`lex` operate
//! on script files.

mod commands;
mod repl;

fn main() {
    init_tracing();

    let args: Vec<String> = std::env::args().collect();

    if args.len() < 2 {
        repl::start();
        return;
    }

    let command = &args[1];

    match command.as_str() {
        "repl" => repl::start(),
        "run" => {
            let Some(path) = args.get(2) else {
                eprintln!("Usage: rill run <file.rill>");
                std::process::exit(1);
            };
            commands::run_file(path);
        }
        "parse" => {
            let Some(path) = args.get(2) else {
                eprintln!("Usage: rill parse <file.rill>");
                std::process::exit(1);
            };
            commands::parse_file(path);
        }
        "lex" => {
            let Some(path) = args.get(2) else {
                eprintln!("Usage: rill lex <file.rill>");
                std::process::exit(1);
            };
            commands::lex_file(path);
        }
        "help" | "--help" | "-h" => print_usage(),
        other => {
            eprintln!("error: unknown command `{other}`");
            eprintln!();
            print_usage();
            std::process::exit(1);
        }
    }
}

fn print_usage() {
    println!("Rill - a small scripting language");
    println!();
    println!("Usage: rill [command] [file]");
    println!();
    println!("Commands:");
    println!("  repl               Start the interactive REPL (default)");
    println!("  run <file.rill>    Evaluate a script");
    println!("  parse <file.rill>  Parse a script and report errors");
    println!("  lex <file.rill>    Dump the token stream");
    println!("  help               Show this help");
}

/// Log filtering comes from `RUST_LOG`; default is warnings only, on
/// stderr so program output stays clean.
fn init_tracing() {
    use tracing_subscriber::EnvFilter;

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}
