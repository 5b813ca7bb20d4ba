use clap::{Parser, Subcommand};
use jjricks_core::Config;
use tracing_subscriber::EnvFilter;

mod commands;

#[derive(Parser)]
#[command(name = "jjricks", version, about = "JJRicks color generator and study timer")]
pub(crate) struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Convert a hex or RGB color
    Color(commands::color::ColorArgs),
    /// Study/break interval timer
    Timer {
        #[command(subcommand)]
        action: commands::timer::TimerAction,
    },
    /// Configuration management
    Config {
        #[command(subcommand)]
        action: commands::config::ConfigAction,
    },
    /// Print shell completions
    Completions {
        /// Target shell
        shell: clap_complete::Shell,
    },
}

/// Logs go to stderr so stdout stays machine-readable.
/// `JJRICKS_LOG` overrides the configured level.
fn init_logging() {
    let filter = EnvFilter::try_from_env("JJRICKS_LOG").unwrap_or_else(|_| {
        // Read-only: `timer format` or `completions` must not create a config file.
        let level = Config::read_existing()
            .ok()
            .flatten()
            .map(|cfg| cfg.logging.level)
            .unwrap_or_else(|| "warn".to_string());
        EnvFilter::try_new(format!("jjricks_core={level},jjricks={level}"))
            .unwrap_or_else(|_| EnvFilter::new("warn"))
    });
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn main() {
    let cli = Cli::parse();
    init_logging();

    let result = match cli.command {
        Commands::Color(args) => commands::color::run(args),
        Commands::Timer { action } => commands::timer::run(action),
        Commands::Config { action } => commands::config::run(action),
        Commands::Completions { shell } => commands::completions::run(shell),
    };

    if let Err(e) = result {
        eprintln!("error: {e}");
        std::process::exit(1);
    }
}
