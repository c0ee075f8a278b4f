use std::sync::Arc;

use anyhow::Result;
use clap::{Parser, Subcommand};

use nestegg::cli::{handle_account_command, handle_category_command, print_response};
use nestegg::config::{NestEggPaths, Settings};
use nestegg::storage::Storage;

#[derive(Parser)]
#[command(
    name = "nestegg",
    version,
    about = "Bank accounts and spending categories from the command line or over HTTP"
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Account management commands
    #[command(subcommand)]
    Account(nestegg::cli::AccountCommands),

    /// Category management commands
    #[command(subcommand)]
    Category(nestegg::cli::CategoryCommands),

    /// Run the HTTP API
    Serve {
        /// Address to bind (defaults to the configured host)
        #[arg(long)]
        host: Option<String>,
        /// Port to bind (defaults to the configured port)
        #[arg(short, long)]
        port: Option<u16>,
    },

    /// Write the default settings file and data directory
    Init,

    /// Show current configuration and paths
    Config,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let paths = NestEggPaths::new()?;
    let mut settings = Settings::load_or_create(&paths)?;
    nestegg::logging::init(&settings.log_filter);

    let mut storage = Storage::new(paths.clone())?;
    storage.load_all()?;

    let response = match cli.command {
        Some(Commands::Account(cmd)) => handle_account_command(&storage, cmd),
        Some(Commands::Category(cmd)) => handle_category_command(&storage, cmd),
        Some(Commands::Serve { host, port }) => {
            if let Some(host) = host {
                settings.server.host = host;
            }
            if let Some(port) = port {
                settings.server.port = port;
            }
            let address = settings.server.bind_address();

            let runtime = tokio::runtime::Runtime::new()?;
            return runtime.block_on(nestegg::api::serve(Arc::new(storage), &address));
        }
        Some(Commands::Init) => {
            settings.save(&paths)?;
            println!("Initialized NestEgg at: {}", paths.base_dir().display());
            return Ok(());
        }
        Some(Commands::Config) => {
            println!("NestEgg Configuration");
            println!("=====================");
            println!("Base directory:  {}", paths.base_dir().display());
            println!("Settings file:   {}", paths.settings_file().display());
            println!("Accounts file:   {}", paths.accounts_file().display());
            println!("Categories file: {}", paths.categories_file().display());
            println!();
            println!("Settings:");
            println!("  Server address: {}", settings.server.bind_address());
            println!("  Log filter:     {}", settings.log_filter);
            println!("  Initialized:    {}", paths.is_initialized());
            return Ok(());
        }
        None => {
            println!("NestEgg - accounts and categories");
            println!();
            println!("Run 'nestegg --help' for usage information.");
            return Ok(());
        }
    };

    print_response(&response)?;
    if !response.success {
        std::process::exit(1);
    }

    Ok(())
}
