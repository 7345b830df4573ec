use std::path::Path;

use anyhow::{bail, Context, Result};
use renderer::{Renderer, RendererConfig};
use shadersrc::{ShaderStage, StageSources};
use tracing_subscriber::EnvFilter;

use crate::cli::{Cli, Command, ViewArgs};

pub fn run(cli: Cli) -> Result<()> {
    initialise_tracing();

    match cli.command {
        Some(Command::Check(args)) => check(&args.source.unwrap_or(cli.view.source)),
        None => view(cli.view),
    }
}

fn initialise_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .init();
}

fn view(args: ViewArgs) -> Result<()> {
    tracing::info!(
        source = %args.source.display(),
        width = args.size.0,
        height = args.size.1,
        "starting triview"
    );

    let config = RendererConfig {
        surface_size: args.size,
        source_path: args.source,
        title: args.title,
        clear_color: args.clear_color,
    };

    let mut renderer = Renderer::new(config);
    renderer.run()
}

/// Splits the file and reports per-stage sizes, failing when a stage is
/// absent. Never touches the GPU, so it works headless.
fn check(source: &Path) -> Result<()> {
    let sources = StageSources::from_path(source)
        .with_context(|| format!("cannot inspect {}", source.display()))?;

    for stage in [ShaderStage::Vertex, ShaderStage::Fragment] {
        let text = sources.stage(stage);
        println!(
            "{stage}: {} line(s), {} byte(s)",
            text.lines().count(),
            text.len()
        );
    }

    let missing = sources.missing_stages();
    if !missing.is_empty() {
        bail!(
            "missing stage(s): {}",
            missing
                .iter()
                .map(ToString::to_string)
                .collect::<Vec<_>>()
                .join(", ")
        );
    }

    println!("ok");
    Ok(())
}
