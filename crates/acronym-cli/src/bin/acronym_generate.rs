// acronym-generate: Spell words from stdin with company logos.
//
// Reads words from stdin (one per line) and prints the company chosen for
// each letter:
//   G: Google
//   O: OpenAI
//
// Usage:
//   acronym-generate [-t TABLE] [OPTIONS]
//
// Options:
//   -t, --table PATH   Candidate table JSON (default: built-in table)
//   -s, --stats        Print generation statistics after each word
//   --json             Print each result as one JSON object per line
//   -h, --help         Print help

use std::io::{self, BufRead, Write};

fn main() {
    let args: Vec<String> = std::env::args().skip(1).collect();
    let (table_path, args) = acronym_cli::parse_table_path(&args);

    if acronym_cli::wants_help(&args) {
        println!("acronym-generate: Spell words from stdin with company logos.");
        println!();
        println!("Usage: acronym-generate [-t TABLE] [OPTIONS]");
        println!();
        println!("Reads words from stdin (one per line). Prints one line per letter:");
        println!("  L: Company");
        println!("  L: L-Company (placeholder)");
        println!();
        println!("Options:");
        println!("  -t, --table PATH   Candidate table JSON (default: built-in table)");
        println!("  -s, --stats        Print generation statistics after each word");
        println!("  --json             Print each result as one JSON object per line");
        println!("  -h, --help         Print this help");
        return;
    }

    acronym_cli::init_logging();

    let show_stats = args.iter().any(|a| a == "-s" || a == "--stats");
    let json = args.iter().any(|a| a == "--json");

    let engine = acronym_cli::load_engine(table_path.as_deref())
        .unwrap_or_else(|e| acronym_cli::fatal(&e));

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

        let result = engine.generate(word);

        if json {
            match serde_json::to_string(&result) {
                Ok(s) => {
                    let _ = writeln!(out, "{s}");
                }
                Err(e) => acronym_cli::fatal(&format!("failed to serialize result: {e}")),
            }
            continue;
        }

        let _ = writeln!(out, "{}", result.letters());
        for entry in &result.assignment {
            let _ = writeln!(out, "{}", acronym_cli::format_entry(entry));
        }
        if show_stats {
            let stats = &result.stats;
            let duplicates: String = stats.duplicate_letters.iter().collect();
            let _ = writeln!(
                out,
                "# letters={} companies={} placeholders={} exhausted={} rerollable={}",
                stats.total_letters,
                stats.unique_companies_used,
                stats.placeholder_count,
                if duplicates.is_empty() { "-" } else { duplicates.as_str() },
                result.can_regenerate
            );
        }
        let _ = writeln!(out);
    }
}
