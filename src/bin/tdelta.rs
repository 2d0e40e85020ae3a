//! tdelta - Tree Delta CLI tool
//!
//! A command line tool for creating and applying deltas between YAML/JSON files.

use std::fs;
use std::io::{self, Write};
use std::path::{Path, PathBuf};
use std::process::ExitCode;

use clap::{Parser, Subcommand, ValueEnum};
use tracing::{debug, Level};

use tree_delta::path::flatten;
use tree_delta::value::{self, Map, Value};

#[derive(Debug, Parser)]
#[command(name = "tdelta", version, about = "Create and apply deltas between YAML/JSON trees")]
struct Cli {
    /// Output location. Use '-' for stdout
    #[arg(short, long, global = true, default_value = "-")]
    output: String,

    /// Output format
    #[arg(short, long, global = true, value_enum, default_value_t = Format::Json)]
    format: Format,

    /// Indent JSON output
    #[arg(long, global = true)]
    pretty: bool,

    /// Increase log verbosity (-v debug, -vv trace)
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    verbose: u8,

    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum Format {
    Json,
    Yaml,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Compute the delta turning ORIGINAL into CURRENT
    Create {
        #[arg(long)]
        original: PathBuf,
        #[arg(long)]
        current: PathBuf,
    },
    /// Apply a delta to a data file
    Apply {
        #[arg(long)]
        data: PathBuf,
        #[arg(long)]
        delta: PathBuf,
    },
    /// List every leaf path of a file with its value
    Flatten { file: PathBuf },
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    let level = match cli.verbose {
        0 => Level::WARN,
        1 => Level::DEBUG,
        _ => Level::TRACE,
    };
    tracing_subscriber::fmt()
        .with_max_level(level)
        .with_writer(io::stderr)
        .init();

    if let Err(e) = run(cli) {
        eprintln!("Error: {}", e);
        ExitCode::FAILURE
    } else {
        ExitCode::SUCCESS
    }
}

fn run(cli: Cli) -> Result<(), Box<dyn std::error::Error>> {
    let result = match &cli.command {
        Command::Create { original, current } => create(original, current)?,
        Command::Apply { data, delta } => apply(data, delta)?,
        Command::Flatten { file } => flatten_file(file)?,
    };

    let mut output: Box<dyn Write> = if cli.output == "-" {
        Box::new(io::stdout())
    } else {
        Box::new(
            fs::File::create(&cli.output)
                .map_err(|e| format!("Failed to create output file {:?}: {}", cli.output, e))?,
        )
    };

    let text = match cli.format {
        Format::Json if cli.pretty => value::to_json_pretty(&result)?,
        Format::Json => value::to_json(&result)?,
        Format::Yaml => value::to_yaml(&result)?,
    };
    write!(output, "{}", text)?;
    if cli.format == Format::Json {
        writeln!(output)?;
    }
    Ok(())
}

/// Reads a tree, as YAML for `.yaml`/`.yml` files and as JSON otherwise.
fn read_tree(file: &Path) -> Result<Value, Box<dyn std::error::Error>> {
    let content =
        fs::read_to_string(file).map_err(|e| format!("Failed to read file {:?}: {}", file, e))?;
    let is_yaml = matches!(
        file.extension().and_then(|ext| ext.to_str()),
        Some("yaml" | "yml")
    );
    debug!(file = %file.display(), yaml = is_yaml, "reading tree");
    let tree = if is_yaml {
        value::from_yaml(&content).map_err(|e| format!("Failed to parse {:?}: {}", file, e))?
    } else {
        value::from_json(&content).map_err(|e| format!("Failed to parse {:?}: {}", file, e))?
    };
    Ok(tree)
}

fn create(original: &Path, current: &Path) -> Result<Value, Box<dyn std::error::Error>> {
    let original = read_tree(original)?;
    let current = read_tree(current)?;
    let delta = tree_delta::create(&original, &current)?;
    Ok(delta.map(|d| d.to_value()).unwrap_or(Value::Null))
}

fn apply(data: &Path, delta: &Path) -> Result<Value, Box<dyn std::error::Error>> {
    let data = read_tree(data)?;
    let delta = read_tree(delta)?;
    Ok(tree_delta::apply(&data, &delta)?)
}

fn flatten_file(file: &Path) -> Result<Value, Box<dyn std::error::Error>> {
    let tree = read_tree(file)?;
    let flat: Map = flatten(&tree)
        .into_iter()
        .map(|(path, leaf)| (path, leaf.clone()))
        .collect();
    Ok(Value::Map(flat))
}
