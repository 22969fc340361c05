use std::path::PathBuf;
use std::process::ExitCode;
use clap::Parser;
use anyhow::Result;

use depscan::config::Config;
use depscan::output::{OutputFormat, OutputFormatter};
use depscan::scanner::ModuleScanner;

#[derive(Parser)]
#[command(name = "depscan")]
#[command(about = "List the external modules imported by a JavaScript/TypeScript source tree")]
#[command(version)]
struct Cli {
    /// Directories to scan (default: backend and frontend, or `roots` from .depscanrc.json)
    roots: Vec<PathBuf>,

    /// Project root used to resolve relative roots and find .depscanrc.json
    #[arg(short, long)]
    root: Option<PathBuf>,

    /// Additional directory name to skip (repeatable)
    #[arg(short, long = "exclude", value_name = "NAME")]
    exclude: Vec<String>,

    /// Additional file extension to scan, e.g. `cjs` (repeatable)
    #[arg(long = "ext", value_name = "EXT")]
    ext: Vec<String>,

    /// Output format: list, json
    #[arg(short, long, default_value = "list")]
    format: String,

    /// Exit with failure when no files were scanned
    #[arg(long)]
    fail_on_empty: bool,

    /// Report skipped files and roots on stderr
    #[arg(short, long)]
    verbose: bool,
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    match run(cli) {
        Ok(code) => code,
        Err(e) => {
            eprintln!("Error: {}", e);
            ExitCode::FAILURE
        }
    }
}

fn get_root(root: Option<PathBuf>) -> PathBuf {
    root.unwrap_or_else(|| std::env::current_dir().unwrap_or_else(|_| PathBuf::from(".")))
}

fn run(cli: Cli) -> Result<ExitCode> {
    let output_format: OutputFormat = cli.format.parse()
        .map_err(|e: String| anyhow::anyhow!(e))?;

    let root = get_root(cli.root);
    let mut config = Config::load(&root)?;

    if !cli.roots.is_empty() {
        config = config.with_roots(cli.roots);
    }
    for name in cli.exclude {
        config.add_exclude_dir(name);
    }
    for ext in &cli.ext {
        config.add_extension(ext);
    }

    let report = ModuleScanner::new(root, config)
        .verbose(cli.verbose)
        .scan();

    OutputFormatter::write_report(&mut std::io::stdout().lock(), &report, output_format)?;

    if cli.verbose {
        eprintln!("{}", report.summary());
    }

    if cli.fail_on_empty && report.files_scanned == 0 {
        eprintln!("No source files found.");
        return Ok(ExitCode::FAILURE);
    }

    Ok(ExitCode::SUCCESS)
}
