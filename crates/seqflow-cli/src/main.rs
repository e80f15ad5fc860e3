//! seqflow CLI: runs the sequence-query demonstrations.

use clap::{Parser, Subcommand};

mod config;
mod demos;
mod fixtures;

use config::{DemoConfig, OutputFormat};
use demos::DemoKind;

#[derive(Parser)]
#[command(name = "seqflow")]
#[command(about = "Demonstrations of the seqflow sequence-query engine", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Run one demonstration
    Run {
        /// Which demonstration to run
        #[arg(value_enum)]
        demo: DemoKind,

        /// Element budget for demos over infinite sources (overrides
        /// SEQFLOW_TAKE_COUNT)
        #[arg(long)]
        take: Option<usize>,

        /// Pagination page size (overrides SEQFLOW_PAGE_SIZE)
        #[arg(long)]
        page_size: Option<usize>,

        /// Output format (overrides SEQFLOW_FORMAT)
        #[arg(long, value_enum)]
        format: Option<OutputFormat>,
    },

    /// List the available demonstrations
    List,
}

fn main() {
    let cli = Cli::parse();

    match cli.command {
        Commands::Run {
            demo,
            take,
            page_size,
            format,
        } => {
            let mut config = DemoConfig::from_env();
            config.apply_overrides(take, page_size, format);
            if let Err(e) = demos::run(demo, &config) {
                eprintln!("Error: {e}");
                std::process::exit(1);
            }
        }
        Commands::List => {
            for (name, summary) in demos::catalog() {
                println!("{name:<14} {summary}");
            }
        }
    }
}
