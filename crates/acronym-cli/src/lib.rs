// acronym-cli: shared utilities for CLI tools.

use std::path::{Path, PathBuf};
use std::process;

use acronym_core::AssignmentEntry;
use acronym_engine::{AcronymEngine, CandidateTable, TableError};

/// Candidate table file name looked up in search directories.
const TABLE_FILE: &str = "companies.json";

/// Environment variable naming a table file or a directory containing one.
const TABLE_PATH_ENV: &str = "ACRONYM_TABLE_PATH";

/// Search for a candidate table and create an engine over it.
///
/// Search order:
/// 1. `table_path` argument (if provided; must exist)
/// 2. `ACRONYM_TABLE_PATH` environment variable (file, or directory with `companies.json`)
/// 3. `companies.json` in the current working directory
/// 4. The built-in table
pub fn load_engine(table_path: Option<&str>) -> Result<AcronymEngine, String> {
    if let Some(p) = table_path {
        let path = PathBuf::from(p);
        if !path.is_file() {
            return Err(format!("table file {} does not exist", path.display()));
        }
        return read_table(&path).map(AcronymEngine::new);
    }

    let env_path = std::env::var(TABLE_PATH_ENV).ok();
    let cwd = std::env::current_dir().ok();
    search_tables(&build_search_paths(env_path.as_deref(), cwd.as_deref()))
}

/// Load the first existing table file in `paths`, else the built-in table.
fn search_tables(paths: &[PathBuf]) -> Result<AcronymEngine, String> {
    for path in paths {
        if path.is_file() {
            log::debug!("using candidate table {}", path.display());
            return read_table(path).map(AcronymEngine::new);
        }
    }

    log::debug!("no table file found, using built-in table");
    AcronymEngine::builtin().map_err(|e: TableError| format!("failed to load built-in table: {e}"))
}

fn read_table(path: &Path) -> Result<CandidateTable, String> {
    let json = std::fs::read_to_string(path)
        .map_err(|e| format!("failed to read {}: {}", path.display(), e))?;
    CandidateTable::from_json(&json).map_err(|e| format!("{}: {}", path.display(), e))
}

/// Build the list of table files to try, in order: the env path as a file,
/// the env path as a directory, then the working directory.
fn build_search_paths(env_path: Option<&str>, cwd: Option<&Path>) -> Vec<PathBuf> {
    let mut paths = Vec::new();

    if let Some(env_path) = env_path {
        paths.push(PathBuf::from(env_path));
        paths.push(Path::new(env_path).join(TABLE_FILE));
    }

    if let Some(cwd) = cwd {
        paths.push(cwd.join(TABLE_FILE));
    }

    paths
}

/// Parse a `--table=PATH` or `-t PATH` argument from command line args.
///
/// Returns `(table_path, remaining_args)`.
pub fn parse_table_path(args: &[String]) -> (Option<String>, Vec<String>) {
    let mut table_path = None;
    let mut remaining = Vec::new();
    let mut skip_next = false;

    for (i, arg) in args.iter().enumerate() {
        if skip_next {
            skip_next = false;
            continue;
        }
        if let Some(val) = arg.strip_prefix("--table=") {
            table_path = Some(val.to_string());
        } else if arg == "--table" || arg == "-t" {
            if i + 1 < args.len() {
                table_path = Some(args[i + 1].clone());
                skip_next = true;
            } else {
                fatal(&format!("{arg} requires a value"));
            }
        } else {
            remaining.push(arg.clone());
        }
    }

    (table_path, remaining)
}

/// Install the `env_logger` backend; verbosity comes from `RUST_LOG`.
pub fn init_logging() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn"))
        .format_timestamp(None)
        .init();
}

/// Format one assignment entry as `L: Company`, marking placeholders.
pub fn format_entry(entry: &AssignmentEntry) -> String {
    if entry.is_placeholder {
        format!("{}: {} (placeholder)", entry.letter, entry.company.name)
    } else {
        format!("{}: {}", entry.letter, entry.company.name)
    }
}

/// Print an error message and exit with code 1.
pub fn fatal(msg: &str) -> ! {
    eprintln!("error: {msg}");
    process::exit(1);
}

/// Check if `--help` or `-h` is in the args.
pub fn wants_help(args: &[String]) -> bool {
    args.iter().any(|a| a == "--help" || a == "-h")
}
