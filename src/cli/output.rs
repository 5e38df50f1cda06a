use crate::SplitResult;
use colored::*;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

#[derive(Debug, Clone, Copy)]
pub enum OutputFormat {
    Text,
    Json,
}

impl FromStr for OutputFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "text" => Ok(OutputFormat::Text),
            "json" => Ok(OutputFormat::Json),
            _ => Err(format!("Unknown format: {}", s)),
        }
    }
}

impl fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            OutputFormat::Text => write!(f, "text"),
            OutputFormat::Json => write!(f, "json"),
        }
    }
}

#[derive(Debug, Serialize, Deserialize)]
struct JsonResult {
    input: String,
    tokens: Vec<String>,
}

#[derive(Debug, Serialize, Deserialize)]
struct JsonOutput {
    inputs_split: usize,
    results: Vec<JsonResult>,
}

pub fn print_results(
    results: &[SplitResult],
    colored_output: bool,
    delimiter: &str,
    format: &OutputFormat,
) {
    match format {
        OutputFormat::Text => print_text_results(results, colored_output, delimiter),
        OutputFormat::Json => print_json_results(results),
    }
}

fn print_text_results(results: &[SplitResult], colored_output: bool, delimiter: &str) {
    for result in results {
        let joined = result.tokens.join(delimiter);

        if colored_output {
            println!("{} {}", format!("{}:", result.input).dimmed(), joined.cyan());
        } else {
            println!("{}: {}", result.input, joined);
        }
    }
}

fn print_json_results(results: &[SplitResult]) {
    let json_results: Vec<JsonResult> = results
        .iter()
        .map(|r| JsonResult {
            input: r.input.clone(),
            tokens: r.tokens.clone(),
        })
        .collect();

    let output = JsonOutput {
        inputs_split: results.len(),
        results: json_results,
    };

    println!("{}", serde_json::to_string_pretty(&output).unwrap());
}
