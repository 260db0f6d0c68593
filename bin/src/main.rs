//! mailco2 CLI - Estimate the carbon footprint of an email.

use anyhow::Result;
use clap::{CommandFactory, Parser, Subcommand, ValueEnum};
use std::path::PathBuf;
use tracing_subscriber::{EnvFilter, FmtSubscriber};

mod commands;
mod display;

use commands::message::MessageArgs;

#[derive(Parser)]
#[command(name = "mailco2")]
#[command(about = "Estimate the carbon footprint of an email", long_about = None)]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Verbosity level (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    /// Display language (en, fr). Unknown languages fall back to English.
    #[arg(short, long, global = true, default_value = "en")]
    locale: String,

    /// Directory holding preferences and sessions. Defaults to the platform data directory.
    #[arg(long, global = true)]
    data_dir: Option<PathBuf>,
}

#[derive(Subcommand)]
enum Commands {
    /// Estimate a message given on the command line or a stored session
    Estimate {
        /// Stored session to estimate instead of the message arguments
        #[arg(long, conflicts_with_all = ["to", "cc", "bcc", "subject", "body", "body_file", "plain_text", "attach"])]
        session: Option<String>,

        #[command(flatten)]
        message: MessageArgs,

        /// Print the sizes as HTML fragments
        #[arg(long)]
        html: bool,
    },

    /// Manage stored compose sessions
    Session {
        #[command(subcommand)]
        action: SessionAction,
    },

    /// Append the equivalences signature to a stored session
    Sign {
        /// Session ID
        session: String,
    },

    /// Remove the equivalences signature from a stored session
    Unsign {
        /// Session ID
        session: String,
    },

    /// View and edit the equivalence constants
    Config {
        #[command(subcommand)]
        action: ConfigAction,
    },

    /// Open the preferences or the recommendations page
    Open {
        /// Page to open
        #[arg(value_enum)]
        page: PageArg,
    },
}

/// Actions on stored compose sessions.
#[derive(Subcommand)]
enum SessionAction {
    /// Store a new session
    New {
        #[command(flatten)]
        message: MessageArgs,
    },

    /// Show a session's message and attachments
    Show {
        /// Session ID
        session: String,
    },

    /// List stored sessions
    List,

    /// Delete a session
    Delete {
        /// Session ID
        session: String,
    },
}

/// Actions on the equivalence constants.
#[derive(Subcommand)]
enum ConfigAction {
    /// Show the effective constants
    Show,

    /// Override a constant
    Set {
        /// Constant name (CO2, CO2u, OIL, CAR, TGV, BULBW, BULB, BREATHING)
        key: String,
        /// New value, strictly positive
        value: String,
    },

    /// Restore defaults
    Reset {
        /// Constant to restore (all when omitted)
        key: Option<String>,
    },

    /// Edit every constant interactively
    Edit,
}

#[derive(Clone, Copy, ValueEnum)]
enum PageArg {
    Preferences,
    Recommendations,
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    // Show help if no command provided
    let Some(command) = cli.command else {
        Cli::command().print_help()?;
        return Ok(());
    };

    let ctx = commands::Context::new(cli.data_dir, &cli.locale)?;

    match command {
        Commands::Estimate {
            session,
            message,
            html,
        } => commands::estimate::estimate(&ctx, session.as_deref(), message, html).await,
        Commands::Session { action } => match action {
            SessionAction::New { message } => commands::session::new_session(&ctx, message).await,
            SessionAction::Show { session } => {
                commands::session::show_session(&ctx, &session).await
            }
            SessionAction::List => commands::session::list_sessions(&ctx).await,
            SessionAction::Delete { session } => {
                commands::session::delete_session(&ctx, &session).await
            }
        },
        Commands::Sign { session } => commands::sign::sign(&ctx, &session).await,
        Commands::Unsign { session } => commands::sign::unsign(&ctx, &session).await,
        Commands::Config { action } => match action {
            ConfigAction::Show => commands::config::show(&ctx).await,
            ConfigAction::Set { key, value } => commands::config::set(&ctx, &key, &value).await,
            ConfigAction::Reset { key } => commands::config::reset(&ctx, key.as_deref()).await,
            ConfigAction::Edit => commands::config::edit(&ctx).await,
        },
        Commands::Open { page } => match page {
            PageArg::Preferences => commands::open::open_preferences(&ctx).await,
            PageArg::Recommendations => commands::open::open_recommendations(&ctx).await,
        },
    }
}

/// Installs the log subscriber. `RUST_LOG` takes precedence over `-v`.
fn init_tracing(verbose: u8) {
    let level = match verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };
    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));
    let subscriber = FmtSubscriber::builder()
        .with_env_filter(env_filter)
        .with_writer(std::io::stderr)
        .finish();

    let _ = tracing::subscriber::set_global_default(subscriber);
}
