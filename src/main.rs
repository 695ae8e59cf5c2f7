use anyhow::{Context, Result};
use clap::Parser;
use tracing_subscriber::EnvFilter;
use xpath_locator::DeclarationPipeline;

/// Sample expressions shown when no paths are given
const DEMO_PATHS: &[&str] = &[
    "//div[@class='header']/span[1]/text()",
    "//button[@name='submit' and @enabled='true']",
    "//bookstore/book[price>35]/title",
];

/// Translate XPath-like paths into widget locator declarations
#[derive(Parser, Debug)]
#[command(name = "xpath-locator", version, about)]
struct Cli {
    /// Path expressions to translate (demo paths are used when omitted)
    paths: Vec<String>,
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_target(false)
        .init();

    let cli = Cli::parse();
    let pipeline = DeclarationPipeline::standard();

    let paths: Vec<String> = if cli.paths.is_empty() {
        DEMO_PATHS.iter().map(|p| p.to_string()).collect()
    } else {
        cli.paths
    };

    for path in &paths {
        let declarations = pipeline
            .declare(path)
            .with_context(|| format!("failed to translate path '{path}'"))?;
        println!("{declarations}");
    }

    Ok(())
}
