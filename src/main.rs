use anyhow::{Context, Result};
use camelsplit::cli::output::{self, OutputFormat};
use camelsplit::{split_with, Config, SplitResult};
use clap::{CommandFactory, Parser};
use clap_complete::{generate, Shell};
use std::io::{self, Read};

#[derive(Parser, Debug)]
#[command(name = "camelsplit")]
#[command(version, about = "A blazingly fast CamelCase splitter", long_about = None)]
struct Cli {
    /// Identifier-style strings to split (reads stdin when omitted)
    #[arg(value_name = "INPUTS")]
    inputs: Vec<String>,

    /// Word that must never be split apart (repeatable)
    #[arg(short = 'n', long = "no-split", value_name = "WORD")]
    no_split: Vec<String>,

    /// Delimiter between tokens in text output
    #[arg(short, long)]
    delimiter: Option<String>,

    /// Disable colored output
    #[arg(long)]
    no_color: bool,

    /// Output format (text, json)
    #[arg(short = 'o', long, default_value = "text")]
    format: OutputFormat,

    /// Generate shell completion script
    #[arg(long, value_name = "SHELL")]
    completion: Option<Shell>,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Handle shell completion generation
    if let Some(shell) = cli.completion {
        let mut cmd = Cli::command();
        generate(shell, &mut cmd, "camelsplit", &mut io::stdout());
        return Ok(());
    }

    // Load configuration
    let config = Config::load(cli.no_split.clone(), cli.delimiter.clone())?;

    // Collect inputs
    let inputs = if cli.inputs.is_empty() {
        read_stdin_inputs()?
    } else {
        cli.inputs.clone()
    };

    if inputs.is_empty() {
        anyhow::bail!("No inputs given. Use --help for usage information.");
    }

    // Split each input
    let no_split = config.no_split_words();
    let mut results = Vec::new();

    for input in inputs {
        let tokens = split_with(&input, &no_split)
            .into_iter()
            .map(str::to_string)
            .collect();

        results.push(SplitResult { input, tokens });
    }

    output::print_results(&results, !cli.no_color, &config.delimiter, &cli.format);

    Ok(())
}

fn read_stdin_inputs() -> Result<Vec<String>> {
    let mut buffer = String::new();
    io::stdin()
        .read_to_string(&mut buffer)
        .context("Failed to read from stdin")?;

    Ok(buffer.split_whitespace().map(str::to_string).collect())
}
