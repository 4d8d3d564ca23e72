mod generate;
mod view;

use std::path::PathBuf;

use clap::{Parser, Subcommand};

use crate::{generate::run_generate, view::print_view};

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    #[command(subcommand)]
    commands: Commands,
}

/// Supported subcommands.
#[derive(Subcommand, Debug)]
enum Commands {
    /// Generate Rust accessors from .resx files.
    Generate {
        /// The .resx files to process
        #[arg(short, long, required = true, num_args = 1..)]
        input: Vec<PathBuf>,

        /// Namespace (module path) for the generated types
        #[arg(short, long)]
        namespace: Option<String>,

        /// Directory to write `{namespace}.{class}.rs` files into; prints to stdout when omitted
        #[arg(short, long)]
        output_dir: Option<PathBuf>,
    },

    /// View the entries of a .resx file.
    View {
        /// The input file to view
        #[arg(short, long)]
        input: PathBuf,

        /// Display full value without truncation
        #[arg(long)]
        full: bool,

        /// Print entries as JSON
        #[arg(long)]
        json: bool,
    },
}

fn setup_tracing() {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();
}

fn main() {
    setup_tracing();
    let args = Args::parse();

    let result = match args.commands {
        Commands::Generate {
            input,
            namespace,
            output_dir,
        } => run_generate(&input, namespace.as_deref(), output_dir.as_deref()),
        Commands::View { input, full, json } => print_view(&input, full, json),
    };

    if let Err(e) = result {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}
