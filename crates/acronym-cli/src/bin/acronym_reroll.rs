// acronym-reroll: Show a word's assignment and an alternative.
//
// For each word read from stdin, prints the generated assignment, then an
// alternative assignment introducing at least one company not shown
// before, or "no alternatives" when none can be found.
//
// Usage:
//   acronym-reroll [-t TABLE] [OPTIONS]
//
// Options:
//   -t, --table PATH     Candidate table JSON (default: built-in table)
//   -n, --attempts N     Maximum re-roll attempts (default: 10)
//   -h, --help           Print help

use std::io::{self, BufRead, Write};

use acronym_engine::DEFAULT_MAX_REGENERATE_ATTEMPTS;

fn parse_attempts(args: &[String]) -> usize {
    let mut attempts = DEFAULT_MAX_REGENERATE_ATTEMPTS;
    let mut iter = args.iter();
    while let Some(arg) = iter.next() {
        let value = if let Some(v) = arg.strip_prefix("--attempts=") {
            Some(v.to_string())
        } else if arg == "-n" || arg == "--attempts" {
            match iter.next() {
                Some(v) => Some(v.clone()),
                None => acronym_cli::fatal(&format!("{arg} requires a value")),
            }
        } else {
            None
        };
        if let Some(v) = value {
            attempts = v
                .parse()
                .unwrap_or_else(|_| acronym_cli::fatal(&format!("invalid attempt count: {v}")));
        }
    }
    attempts
}

fn main() {
    let args: Vec<String> = std::env::args().skip(1).collect();
    let (table_path, args) = acronym_cli::parse_table_path(&args);

    if acronym_cli::wants_help(&args) {
        println!("acronym-reroll: Show a word's assignment and an alternative.");
        println!();
        println!("Usage: acronym-reroll [-t TABLE] [OPTIONS]");
        println!();
        println!("Reads words from stdin (one per line).");
        println!();
        println!("Options:");
        println!("  -t, --table PATH     Candidate table JSON (default: built-in table)");
        println!("  -n, --attempts N     Maximum re-roll attempts (default: 10)");
        println!("  -h, --help           Print this help");
        return;
    }

    acronym_cli::init_logging();

    let mut engine = acronym_cli::load_engine(table_path.as_deref())
        .unwrap_or_else(|e| acronym_cli::fatal(&e));
    engine.set_max_regenerate_attempts(parse_attempts(&args));

    let stdin = io::stdin();
    let stdout = io::stdout();
    let mut out = io::BufWriter::new(stdout.lock());

    for line in stdin.lock().lines() {
        let line = match line {
            Ok(l) => l,
            Err(e) => {
                eprintln!("error reading stdin: {e}");
                break;
            }
        };
        let word = line.trim();
        if word.is_empty() {
            continue;
        }

        let current = engine.generate(word);
        let _ = writeln!(out, "{}", current.letters());
        for entry in &current.assignment {
            let _ = writeln!(out, "  {}", acronym_cli::format_entry(entry));
        }

        match engine.regenerate_with_alternatives(word, &current.assignment) {
            Some(alternative) => {
                let _ = writeln!(out, "alternative:");
                for entry in &alternative {
                    let _ = writeln!(out, "  {}", acronym_cli::format_entry(entry));
                }
            }
            None => {
                let _ = writeln!(out, "no alternatives");
            }
        }
        let _ = writeln!(out);
    }
}
