//! Ember CLI.

fn main() {
    let args: Vec<String> = std::env::args().collect();

    if args.len() < 2 {
        print_usage();
        std::process::exit(64);
    }

    let command = args[1].as_str();
    let code = match command {
        "run" => {
            if args.len() < 3 {
                eprintln!("Usage: emberc run <file.em>");
                std::process::exit(64);
            }
            emberc::commands::run_file(&args[2])
        }
        "repl" => emberc::commands::repl(),
        "lex" => {
            if args.len() < 3 {
                eprintln!("Usage: emberc lex <file.em>");
                std::process::exit(64);
            }
            emberc::commands::lex_file(&args[2])
        }
        "help" | "--help" | "-h" => {
            print_usage();
            0
        }
        other => {
            eprintln!("error: unknown command '{other}'");
            print_usage();
            64
        }
    };
    std::process::exit(code);
}

fn print_usage() {
    eprintln!("Ember interpreter");
    eprintln!();
    eprintln!("Usage: emberc <command> [args]");
    eprintln!();
    eprintln!("Commands:");
    eprintln!("  run <file.em>    Run a script");
    eprintln!("  repl             Start an interactive session");
    eprintln!("  lex <file.em>    Dump the token stream (debug)");
    eprintln!("  help             Show this message");
}
