//! Postflow CLI - Validate, tag and schedule blog posts from the command line

use clap::Parser;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use postflow::cli::commands::{self, Context};
use postflow::cli::{Cli, Commands};
use postflow::domain::Clock;
use postflow::errors::to_exit_code;

fn main() {
    let cli = Cli::parse();

    // Initialize tracing
    let default_level = if cli.verbose {
        "debug"
    } else if cli.quiet {
        "warn"
    } else {
        "info"
    };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));
    tracing_subscriber::registry()
        .with(filter)
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    match run(cli) {
        Ok(()) => std::process::exit(0),
        Err(e) => {
            eprintln!("Error: {}", e);
            std::process::exit(to_exit_code(&e));
        }
    }
}

fn run(cli: Cli) -> postflow::Result<()> {
    let cwd = postflow::fs::resolve_cwd(cli.cwd.as_deref());
    let root = postflow::fs::find_project_root(&cwd);
    let config = postflow::config::load_config(&root, cli.config.as_deref())?;

    let clock = commands::clock_for(cli.now.as_deref())?;
    let ctx = Context {
        config,
        now: clock.now(),
    };

    match cli.command {
        Some(Commands::Slug { title }) => commands::slug::run(&title),
        Some(Commands::Check { field, value }) => commands::check::run(&ctx, &field, &value),
        Some(Commands::Validate { draft }) => commands::validate::run(&ctx, &draft),
        Some(Commands::Credential { kind, input }) => {
            commands::credential::run(&ctx, &kind, &input)
        }
        Some(Commands::Comment { text }) => commands::comment::run(&ctx, &text),
        Some(Commands::Tags {
            draft,
            add,
            remove,
            write,
        }) => commands::tags::run(&ctx, &draft, &add, &remove, write),
        Some(Commands::Transition {
            draft,
            status,
            at,
            write,
        }) => commands::transition::run(&ctx, &draft, &status, at.as_deref(), write),
        Some(Commands::Due { draft }) => commands::due::run(&ctx, &draft),
        Some(Commands::Permalink { slug }) => commands::permalink::run(&ctx, &slug),
        None => {
            // Default to showing help - clap handles this
            println!("Use --help for usage information");
            Ok(())
        }
    }
}
