//! csv2json CLI - Convert a CSV file into a JSON array of records
//!
//! ```bash
//! csv2json                                  # assets/dogBreeds.csv -> assets/dogBreeds.json
//! csv2json -i breeds.csv -o breeds.json     # explicit paths
//! csv2json -v                               # print progress to stderr
//! ```

use clap::Parser;
use csv2json::logs::{log_error, LOGGER};
use csv2json::{convert, ConvertOptions, DEFAULT_INPUT, DEFAULT_OUTPUT};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "csv2json", version)]
#[command(about = "Convert a CSV file into a JSON array of records", long_about = None)]
struct Cli {
    /// Input CSV file (first row is the header)
    #[arg(short, long, default_value = DEFAULT_INPUT)]
    input: PathBuf,

    /// Output JSON file, overwritten if it exists
    #[arg(short, long, default_value = DEFAULT_OUTPUT)]
    output: PathBuf,

    /// Print progress details to stderr
    #[arg(short, long)]
    verbose: bool,
}

fn main() {
    let cli = Cli::parse();
    LOGGER.set_verbose(cli.verbose);

    let options = ConvertOptions {
        input: cli.input,
        output: cli.output,
    };

    if let Err(e) = convert(&options) {
        log_error(format!("Error: {}", e));
        std::process::exit(1);
    }

    println!("CSV → JSON conversion complete");
}
