mod constructor;
mod errors;
mod parser;
mod report;
mod rules_doc;
mod runner;

use anyhow::Result;
use clap::{Args as ClapArgs, Parser, Subcommand};
use tabmerge_core::{ReadOptions, ReadOptionsBuilder};
use tracing_subscriber::{fmt, EnvFilter};

use crate::constructor::parse_delimiter;

#[derive(Parser, Debug)]
#[command(
    name = "tabmerge",
    version,
    about = "Merge delimited files into one table or into filtered JSON documents",
    long_about = "tabmerge reads one or more delimited (CSV-style) files, checks that they \
                  share a column schema, filters rows with per-column match rules and emits \
                  the surviving rows as JSON documents.\n\n\
                  Example usage:\n  \
                  tabmerge filter -i a.csv -i b.csv --match name=exact:Bob -o out.json\n  \
                  tabmerge run --config job.toml"
)]
pub struct Args {
    #[command(subcommand)]
    command: Command,

    /// Enable debug logging and detailed error backtraces
    #[arg(short, long, global = true)]
    debug: bool,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Run a read-merge-filter job described in a TOML file
    Run {
        /// Path to the TOML job file
        #[arg(short, long, value_name = "FILE")]
        config: String,
    },
    /// Read, merge and filter files into JSON documents
    Filter {
        /// Input file, repeat for several
        #[arg(short, long = "input", value_name = "FILE", required = true)]
        inputs: Vec<String>,

        /// Output file or directory; JSON is printed to stdout when omitted
        #[arg(short, long, value_name = "PATH")]
        output: Option<String>,

        /// Field delimiter (single character, or `tab`)
        #[arg(long, default_value = ",", value_parser = parse_delimiter_arg)]
        delimiter: char,

        /// Strip a leading UTF-8 byte-order mark from every input
        #[arg(long)]
        strip_bom: bool,

        /// Octal permission mode of the written file
        #[arg(long, default_value = "644")]
        perm: String,

        /// Match predicate COLUMN=RULE:VALUE, repeat for several (logical AND)
        #[arg(short, long = "match", value_name = "COLUMN=RULE:VALUE")]
        matches: Vec<String>,
    },
    /// Merge files sharing one column schema into a single table
    Merge {
        #[command(flatten)]
        simple: SimpleReadArgs,

        /// Files to merge, in order
        #[arg(required = true)]
        files: Vec<String>,
    },
    /// Print the values of one column across files
    Extract {
        /// Zero-based column index
        #[arg(short, long)]
        column: usize,

        /// Condense whitespace, drop empties, de-duplicate and sort
        #[arg(short, long)]
        unique: bool,

        #[command(flatten)]
        simple: SimpleReadArgs,

        #[arg(required = true)]
        files: Vec<String>,
    },
    /// Print the match rule reference
    Rules,
}

/// Options of the line-split reader
#[derive(ClapArgs, Debug)]
struct SimpleReadArgs {
    /// Field delimiter (single character, or `tab`)
    #[arg(long, default_value = ",", value_parser = parse_delimiter_arg)]
    delimiter: char,

    /// The first line is data, not a header
    #[arg(long)]
    no_header: bool,

    /// Trim whitespace around lines and fields
    #[arg(long)]
    trim: bool,
}

impl SimpleReadArgs {
    fn read_options(&self) -> ReadOptions {
        ReadOptionsBuilder::new()
            .with_delimiter(self.delimiter)
            .with_header(!self.no_header)
            .with_trim_space(self.trim)
            .build()
    }
}

fn parse_delimiter_arg(value: &str) -> Result<char, String> {
    parse_delimiter(value).map_err(|e| e.to_string())
}

fn init_logging(debug: bool) {
    let default = if debug { "debug" } else { "info" };
    let env = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));
    fmt::Subscriber::builder()
        .with_env_filter(env)
        .with_writer(std::io::stderr)
        .init();
}

fn run(args: Args) -> Result<()> {
    match args.command {
        Command::Run { config } => runner::run_config(&config),
        Command::Filter {
            inputs,
            output,
            delimiter,
            strip_bom,
            perm,
            matches,
        } => {
            let options = ReadOptionsBuilder::new()
                .with_delimiter(delimiter)
                .with_strip_bom(strip_bom)
                .build();
            runner::run_filter(&inputs, &output, &options, &matches, &perm)
        }
        Command::Merge { simple, files } => runner::run_merge(&files, &simple.read_options()),
        Command::Extract {
            column,
            unique,
            simple,
            files,
        } => runner::run_extract(&files, &simple.read_options(), column, unique),
        Command::Rules => {
            rules_doc::print_rules_documentation();
            Ok(())
        }
    }
}

fn main() {
    let args = Args::parse();

    // Enable backtraces in debug mode
    if args.debug {
        std::env::set_var("RUST_BACKTRACE", "1");
    }
    init_logging(args.debug);

    if let Err(err) = run(args) {
        if std::env::var("RUST_BACKTRACE").is_ok() {
            eprintln!("Error: {:?}", err);
        } else {
            eprintln!("Error: {:#}", err);
            eprintln!("\nHint: Run with --debug flag for detailed stack traces");
        }
        std::process::exit(1);
    }
}
