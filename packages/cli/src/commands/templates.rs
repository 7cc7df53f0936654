use anyhow::Result;
use clap::Args;
use colored::Colorize;
use tandem_catalog::{catalog, Node};

#[derive(Args, Debug)]
pub struct TemplatesArgs {
    /// Output format (text, json)
    #[arg(short, long, default_value = "text")]
    pub format: String,
}

pub fn templates(args: TemplatesArgs) -> Result<()> {
    if args.format == "json" {
        let json = serde_json::to_string_pretty(catalog())?;
        println!("{}", json);
        return Ok(());
    }

    println!("📦 {} Template Catalog", "Tandem".green().bold());

    for template in catalog() {
        println!();
        println!(
            "  {} {}",
            template.kind.to_string().bold(),
            format!("({} regions)", template.tree.region_count()).dimmed()
        );

        template.tree.visit_regions(&mut |node| {
            if let Node::Region {
                path,
                tag,
                text,
                style_props,
                ..
            } = node
            {
                if style_props.is_empty() {
                    println!("    {} {} <{}> {:?}", "•".blue(), path, tag, text);
                } else {
                    println!(
                        "    {} {} <{}> {:?} [{}]",
                        "•".blue(),
                        path,
                        tag,
                        text,
                        style_props.join(", ").yellow()
                    );
                }
            }
        });
    }

    println!();
    println!("✨ {} {} templates", "Done".green().bold(), catalog().len());

    Ok(())
}
