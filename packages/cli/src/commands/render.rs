use anyhow::Result;
use clap::Args;
use colored::Colorize;
use std::fs;
use std::path::PathBuf;
use tandem_preview::{Preview, RenderOutcome};

#[derive(Args, Debug)]
pub struct RenderArgs {
    /// Input code file to render
    pub input: PathBuf,

    /// Output format (text, json)
    #[arg(short, long, default_value = "text")]
    pub format: String,
}

pub fn render(args: RenderArgs) -> Result<()> {
    if !args.input.is_file() {
        return Err(anyhow::anyhow!(
            "Input file does not exist: {}",
            args.input.display()
        ));
    }

    let source = fs::read_to_string(&args.input)?;

    let mut preview = Preview::new();
    preview.render(&source);

    if args.format == "json" {
        let json = serde_json::to_string_pretty(preview.outcome())?;
        println!("{}", json);
        return Ok(());
    }

    println!("🎨 {} Tandem Renderer", "Starting".green().bold());
    println!("   Input: {}", args.input.display());
    println!();

    match preview.outcome() {
        RenderOutcome::Tree(tree) => {
            let kind = preview.current_kind().unwrap_or_default();
            println!("   Kind: {}", kind.to_string().bold());
            println!();

            for region in tree.regions() {
                if region.style_props().is_empty() {
                    println!(
                        "   {} {} <{}> {:?}",
                        "•".blue(),
                        region.path(),
                        region.tag(),
                        region.value()
                    );
                } else {
                    println!(
                        "   {} {} <{}> {:?} [{}]",
                        "•".blue(),
                        region.path(),
                        region.tag(),
                        region.value(),
                        region.style_props().join(", ").yellow()
                    );
                }
            }

            println!();
            println!(
                "✨ {} {} editable regions",
                "Done".green().bold(),
                tree.len()
            );
        }
        RenderOutcome::Empty => {
            println!("   {} Nothing to render", "✗".red());
        }
        RenderOutcome::Failed(err) => {
            return Err(anyhow::anyhow!("Render failed: {}", err));
        }
    }

    Ok(())
}
