use anyhow::Result;
use clap::{CommandFactory, Parser};
use std::io::{self, Write};

use rusty_tree::cli::Cli;
use rusty_tree::config::Config;
use rusty_tree::tree::{render_tree, ExcludeSet, RenderOptions, SortOrder};

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize logging based on verbosity
    init_logging(cli.verbose, cli.quiet);

    if let Some(shell) = cli.completions {
        let mut command = Cli::command();
        let name = command.get_name().to_string();
        clap_complete::generate(shell, &mut command, name, &mut io::stdout());
        return Ok(());
    }

    if cli.man {
        let man = clap_mangen::Man::new(Cli::command());
        man.render(&mut io::stdout())?;
        return Ok(());
    }

    // Load configuration
    let config = Config::load(cli.config.as_deref())?;

    tracing::debug!(?config, "Loaded configuration");

    // CLI flags take precedence over config values
    let print_files = cli.files || config.walk.print_files;
    let sort = SortOrder::from_str(cli.sort.as_deref().unwrap_or(&config.walk.sort));

    let mut exclude = if cli.no_default_excludes || !config.exclude.use_defaults {
        ExcludeSet::empty()
    } else {
        ExcludeSet::defaults()
    };
    exclude.extend(config.exclude.names.iter().cloned());
    exclude.extend(cli.exclude.iter().cloned());

    let options = RenderOptions::new().with_files(print_files).with_sort(sort);

    tracing::info!(path = %cli.path.display(), print_files, "Rendering tree");

    let stdout = io::stdout();
    let mut out = io::BufWriter::new(stdout.lock());
    render_tree(&mut out, &cli.path, &options, &exclude)?;
    out.flush()?;

    Ok(())
}

fn init_logging(verbosity: u8, quiet: bool) {
    use tracing_subscriber::{fmt, prelude::*, EnvFilter};

    let level = if quiet {
        "warn"
    } else {
        match verbosity {
            0 => "warn",
            1 => "info",
            2 => "debug",
            _ => "trace",
        }
    };

    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(format!("rusty_tree={}", level)));

    tracing_subscriber::registry()
        .with(fmt::layer().with_target(false).with_writer(io::stderr))
        .with(filter)
        .init();
}
