//! PatchBook - modular synthesizer patch notation tool.
//!
//! Parses a PatchBook notation file and inspects the resulting patch
//! graph.
//!
//! # Usage
//!
//! ```bash
//! patchbook patch.txt module filter1
//! patchbook patch.txt connections
//! patchbook patch.txt export > patch.json
//! ```

use std::path::PathBuf;

use clap::{Parser, Subcommand};
use patchbook::{error::Result, export, notation, report};

/// PatchBook patch notation parser
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Path to the patch notation file
    #[arg(value_name = "PATCH_FILE")]
    patch_file: PathBuf,

    /// Print per-line parse diagnostics to stderr
    #[arg(short, long)]
    debug: bool,

    /// Suppress parse warnings
    #[arg(short, long)]
    quiet: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Show inputs, outputs and parameters of one module, or of all
    Module {
        /// Module name, or "all"
        #[arg(default_value = "all")]
        name: String,
    },
    /// List all connections grouped by kind
    Connections,
    /// Export the parsed model as JSON
    Export,
    /// Dump the raw parsed model
    Dump,
}

fn main() -> Result<()> {
    let args = Args::parse();

    if args.debug {
        tracing_subscriber::fmt()
            .with_env_filter("patchbook=trace")
            .with_writer(std::io::stderr)
            .init();
    }

    let parsed = notation::parse_file(&args.patch_file)?;
    if !args.quiet {
        for warning in &parsed.warnings {
            eprintln!("warning: {warning}");
        }
    }
    let patch = parsed.patch;

    match args.command {
        Command::Module { name } => {
            if name == "all" {
                print!("{}", report::module_detail_all(&patch));
            } else {
                print!("{}", report::module_detail(&patch, &name.to_lowercase())?);
            }
        }
        Command::Connections => print!("{}", report::connections_by_kind(&patch)),
        Command::Export => println!("{}", export::to_json(&patch)?),
        Command::Dump => println!("{patch:#?}"),
    }

    Ok(())
}
