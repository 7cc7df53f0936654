use anyhow::Result;
use clap::Args;
use colored::Colorize;
use std::fs;
use std::path::PathBuf;
use tandem_patch::Commit;

#[derive(Args, Debug)]
pub struct PatchArgs {
    /// Input code file to patch
    pub input: PathBuf,

    /// Region path, or region.style.property for a style edit
    #[arg(long)]
    pub path: String,

    /// Text currently in the region (ignored for style edits)
    #[arg(long, default_value = "")]
    pub old: String,

    /// Replacement text, or the style value
    #[arg(long)]
    pub new: String,

    /// Write the result here instead of stdout
    #[arg(short, long)]
    pub output: Option<PathBuf>,
}

pub fn patch(args: PatchArgs) -> Result<()> {
    if !args.input.is_file() {
        return Err(anyhow::anyhow!(
            "Input file does not exist: {}",
            args.input.display()
        ));
    }

    let source = fs::read_to_string(&args.input)?;
    let commit = Commit::new(&args.path, &args.new, &args.old);
    let patched = tandem_patch::patch(&source, &commit);
    let changed = patched != source;

    match &args.output {
        Some(out) => {
            println!("🩹 {} Tandem Patcher", "Starting".green().bold());
            println!("   Input: {}", args.input.display());
            if let Some(property) = commit.style_property() {
                println!("   Edit: {} (style: {})", commit.path, property);
            } else {
                println!("   Edit: {} (text)", commit.path);
            }
            println!();

            fs::write(out, &patched)?;

            if changed {
                println!("✨ {} Wrote {}", "Done".green().bold(), out.display());
            } else {
                println!("   {} No occurrences replaced", "!".yellow());
                println!("✨ {} Wrote {} unchanged", "Done".green().bold(), out.display());
            }
        }
        None => {
            // Keep stdout clean for piping; diagnostics go to stderr.
            print!("{}", patched);
            if !changed {
                eprintln!("{} No occurrences replaced", "!".yellow());
            }
        }
    }

    Ok(())
}
