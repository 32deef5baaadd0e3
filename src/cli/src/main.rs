//! Terminal front-end for the Tiny Token ledger API.

use anyhow::Result;
use colored::Colorize;
use std::io;
use std::path::PathBuf;
use std::sync::Arc;
use structopt::StructOpt;
use tinytoken_cli::commands::{create_user, init_config, interactive, transfer, user_details};
use tinytoken_cli::{FrontendConfig, Home, TerminalNotifier};
use tinytoken_client::HttpLedgerClient;
use tinytoken_core::CoreError;
use tracing::info;
use tracing_subscriber::{EnvFilter, FmtSubscriber};

/// Command line arguments for the front-end.
#[derive(Debug, StructOpt)]
#[structopt(name = "tinytoken", about = "Tiny Token ledger front-end")]
struct Opt {
    /// Path to the configuration file
    #[structopt(short, long, parse(from_os_str))]
    config: Option<PathBuf>,

    /// Ledger API base URL, overrides the configuration file
    #[structopt(short = "u", long)]
    api_url: Option<String>,

    /// Default balance of new users, for display only
    #[structopt(long)]
    default_balance: Option<String>,

    /// Subcommand to run
    #[structopt(subcommand)]
    cmd: Command,
}

/// Subcommands for the front-end.
#[derive(Debug, StructOpt)]
enum Command {
    /// Create a new user with the default balance
    #[structopt(name = "create-user")]
    CreateUser,

    /// Get the balance of a user
    #[structopt(name = "user-details")]
    UserDetails {
        /// User ID
        #[structopt(long)]
        id: String,
    },

    /// Transfer tokens between two users
    #[structopt(name = "transfer")]
    Transfer {
        /// Sender user ID
        #[structopt(long)]
        from: String,

        /// Recipient user ID
        #[structopt(long)]
        to: String,

        /// Amount to transfer
        #[structopt(long)]
        amount: String,
    },

    /// Fill in the forms one by one at a prompt
    #[structopt(name = "interactive")]
    Interactive,

    /// Write the effective configuration to a file
    #[structopt(name = "init-config")]
    InitConfig {
        /// Where to write the file, defaults to the user config directory
        #[structopt(long, parse(from_os_str))]
        path: Option<PathBuf>,

        /// Overwrite an existing file
        #[structopt(long)]
        force: bool,
    },
}

/// Resolves configuration: defaults, then the config file, then flags.
fn load_config(opt: &Opt) -> Result<FrontendConfig, CoreError> {
    let mut config = match &opt.config {
        Some(path) => FrontendConfig::from_file(path)?,
        None => match FrontendConfig::default_path().filter(|path| path.exists()) {
            Some(path) => FrontendConfig::from_file(path)?,
            None => FrontendConfig::default(),
        },
    };

    if let Some(api_url) = &opt.api_url {
        config.api_url = api_url.clone();
    }
    if let Some(balance) = &opt.default_balance {
        config.default_balance = Some(balance.clone());
    }

    config.validate()?;
    Ok(config)
}

#[tokio::main]
async fn main() -> Result<()> {
    // Initialize logging
    let subscriber = FmtSubscriber::builder()
        .with_env_filter(EnvFilter::from_default_env())
        .finish();
    tracing::subscriber::set_global_default(subscriber)?;

    // Parse command line arguments
    let opt = Opt::from_args();

    // Load configuration
    let config = load_config(&opt)?;
    info!("Using ledger API at {}", config.api_url);

    let api = Arc::new(HttpLedgerClient::new(config.api_url.clone()));
    let mut home = Home::new(&config, api, Arc::new(TerminalNotifier));

    // Run the appropriate command
    match opt.cmd {
        Command::CreateUser => {
            let message = create_user::run(&mut home).await?;
            println!("{}", message.green());
        }
        Command::UserDetails { id } => {
            let details = user_details::run(&mut home, &id).await?;
            println!("{}", details.green());
        }
        Command::Transfer { from, to, amount } => {
            let message = transfer::run(&mut home, &from, &to, &amount).await?;
            println!("{}", message.green());
        }
        Command::Interactive => {
            let stdin = io::stdin();
            interactive::run(&mut home, stdin.lock(), io::stdout()).await?;
        }
        Command::InitConfig { path, force } => {
            let path = path
                .or_else(FrontendConfig::default_path)
                .unwrap_or_else(|| PathBuf::from("tinytoken.json"));
            init_config::run(&config, &path, force).await?;
            println!("{} {}", "Configuration written:".green(), path.display());
        }
    }

    Ok(())
}
