use anyhow::Result;
use clap::Args;
use colored::Colorize;
use serde_json::json;
use std::fs;
use std::path::PathBuf;

#[derive(Args, Debug)]
pub struct ClassifyArgs {
    /// Input code file to classify
    pub input: PathBuf,

    /// Output format (text, json)
    #[arg(short, long, default_value = "text")]
    pub format: String,
}

pub fn classify(args: ClassifyArgs) -> Result<()> {
    if !args.input.is_file() {
        return Err(anyhow::anyhow!(
            "Input file does not exist: {}",
            args.input.display()
        ));
    }

    let source = fs::read_to_string(&args.input)?;
    let kind = tandem_catalog::classify(&source);

    if args.format == "json" {
        let json = serde_json::to_string_pretty(&json!({
            "file": args.input.display().to_string(),
            "kind": kind,
        }))?;
        println!("{}", json);
        return Ok(());
    }

    println!("🔎 {} Tandem Classifier", "Starting".green().bold());
    println!("   Input: {}", args.input.display());
    println!();
    println!("   {} {}", "✓".green(), kind.to_string().bold());

    Ok(())
}
