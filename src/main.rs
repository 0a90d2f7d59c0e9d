use anyhow::{Context, Result};
use clap::Parser;
use tracing::info;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use kolor_export::backends::{all_targets, OutputLayout};
use kolor_export::cli::{Args, PrintMapping};
use kolor_export::gate::{ChangeGate, ConfigSource};
use kolor_export::kde::KdeGlobalsFile;
use kolor_export::pipeline::{resolve_general, resolve_secondary};
use kolor_export::theme::{render, BlockStyle};

fn main() -> Result<()> {
    let args = Args::parse();
    init_logging(args.verbose);

    let layout = resolve_layout(&args)?;
    let source = match &args.kdeglobals {
        Some(path) => KdeGlobalsFile::new(path),
        None => KdeGlobalsFile::new(layout.config_dir.join("kdeglobals")),
    };

    if let Some(which) = args.print {
        let store = source.snapshot();
        let (mapping, style) = match which {
            PrintMapping::General => (resolve_general(&store), BlockStyle::css_root()),
            PrintMapping::Secondary => (resolve_secondary(&store), BlockStyle::css_override()),
        };
        print!("{}", render(&mapping, &style));
        return Ok(());
    }

    let gate = ChangeGate::new(source.clone(), all_targets(&layout));
    if args.once {
        gate.run_pass();
        return Ok(());
    }

    info!("staying resident; exported files follow color scheme changes");
    let (_gate, _subscription) = gate
        .start(&source)
        .context("failed to watch kdeglobals for changes")?;

    // The watcher thread drives every later pass.
    loop {
        std::thread::park();
    }
}

fn resolve_layout(args: &Args) -> Result<OutputLayout> {
    let config_dir = match &args.config_dir {
        Some(dir) => dir.clone(),
        None => dirs::config_dir().context("could not determine the config directory")?,
    };
    let data_dir = match &args.data_dir {
        Some(dir) => dir.clone(),
        None => dirs::data_dir().context("could not determine the data directory")?,
    };
    let home_dir = match &args.home_dir {
        Some(dir) => dir.clone(),
        None => dirs::home_dir().context("could not determine the home directory")?,
    };
    Ok(OutputLayout {
        config_dir,
        data_dir,
        home_dir,
    })
}

fn init_logging(verbose: bool) {
    let default = if verbose {
        "kolor_export=debug,info"
    } else {
        "kolor_export=info,warn"
    };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));

    tracing_subscriber::registry()
        .with(
            fmt::layer()
                .with_target(false)
                .with_writer(std::io::stderr),
        )
        .with(filter)
        .init();
}
