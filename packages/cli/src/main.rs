mod commands;

use clap::{Parser, Subcommand};
use colored::Colorize;
use commands::{
    classify, patch, render, replay, templates, ClassifyArgs, PatchArgs, RenderArgs, ReplayArgs,
    TemplatesArgs,
};

/// Tandem CLI - Two-way visual editing for generated code
#[derive(Parser, Debug)]
#[command(name = "tandem")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Enable debug logging
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Classify a code file into a template kind
    Classify(ClassifyArgs),

    /// List the built-in template catalog
    Templates(TemplatesArgs),

    /// Render a code file into its editable region tree
    Render(RenderArgs),

    /// Apply a single region edit to a code file
    Patch(PatchArgs),

    /// Drive a full editing session from a JSON script
    Replay(ReplayArgs),
}

fn init_tracing(verbose: bool) {
    if verbose {
        tracing_subscriber::fmt()
            .with_max_level(tracing::Level::DEBUG)
            .init();
    } else {
        tracing_subscriber::fmt::init();
    }
}

fn main() {
    let cli = Cli::parse();

    init_tracing(cli.verbose);

    let result = match cli.command {
        Command::Classify(args) => classify(args),
        Command::Templates(args) => templates(args),
        Command::Render(args) => render(args),
        Command::Patch(args) => patch(args),
        Command::Replay(args) => replay(args),
    };

    if let Err(err) = result {
        eprintln!();
        eprintln!("{} {}", "Error:".red().bold(), err);
        eprintln!();
        std::process::exit(1);
    }
}
