use std::io;

use anyhow::{Context, Result};
use clap::Parser;
use tracing::info;
use tracing_subscriber::EnvFilter;

use themer::cli::Args;
use themer::pipeline::contrast::enforce_contrast;
use themer::pipeline::entropy::SystemEntropy;
use themer::pipeline::names::random_name;
use themer::pipeline::scheme::Scheme;
use themer::pipeline::generate;
use themer::preview::render_preview;
use themer::theme::AlacrittyTheme;

fn main() -> Result<()> {
    let args = Args::parse();

    tracing_subscriber::fmt()
        .with_writer(io::stderr)
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(args.log_level())),
        )
        .init();

    if args.list_schemes {
        for scheme in Scheme::ALL {
            println!("{scheme}");
        }
        return Ok(());
    }

    let mut entropy = args.seed.map(SystemEntropy::seeded).unwrap_or_default();
    let mode = args.mode();

    let mut colors = generate(args.scheme, mode, &mut entropy);
    if let Some(min_ratio) = args.min_contrast {
        enforce_contrast(&mut colors, min_ratio);
    }

    let name = match &args.name {
        Some(name) => name.clone(),
        None => {
            let suffix = mode.map_or("", |m| m.suffix());
            random_name(&format!("{}{suffix}", args.scheme), &mut entropy)
        }
    };
    info!(%name, scheme = %args.scheme, "theme generated");

    let theme = AlacrittyTheme::new(name, args.scheme, colors);

    if args.preview {
        render_preview(&mut io::stderr(), &theme.name, &theme.colors)
            .context("failed to render preview")?;
    }

    if args.install {
        let path = theme
            .install(args.themes_dir.as_deref())
            .context("failed to install theme")?;
        eprintln!("Installed theme to {}", path.display());
    } else if let Some(path) = &args.output {
        theme
            .write_to(path)
            .with_context(|| format!("failed to write {}", path.display()))?;
        eprintln!("Wrote theme to {}", path.display());
    } else {
        print!("{}", theme.serialize()?);
    }

    Ok(())
}
