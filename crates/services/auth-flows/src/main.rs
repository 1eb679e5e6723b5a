//! Auth Flows - run the sign-in screens from the command line.

use std::path::PathBuf;
use std::sync::Arc;
use std::time::Duration;

use clap::{Parser, Subcommand};
use tracing::error;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use auth_flows_lib::client::AuthCollaborator;
use auth_flows_lib::config::AuthFlowsConfig;
use auth_flows_lib::forms::{LoginForm, LoginOutcome, PasswordChangeForm};
use auth_flows_lib::notify::{ConsoleNotifier, Notifier};

#[derive(Parser)]
#[command(name = "auth-flows")]
#[command(about = "Daycare sign-in flows")]
struct Cli {
    /// JSON file with daycares and users
    #[arg(long, global = true, env = "DIRECTORY_SEED")]
    seed: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Sign in
    Login {
        #[arg(long, default_value = "")]
        code: String,
        #[arg(long)]
        username: String,
        #[arg(long)]
        password: String,
    },
    /// Sign in, then set a new password
    ChangePassword {
        #[arg(long, default_value = "")]
        code: String,
        #[arg(long)]
        username: String,
        #[arg(long)]
        password: String,
        #[arg(long)]
        new_password: String,
        #[arg(long)]
        confirm: String,
    },
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Load environment variables
    dotenvy::dotenv().ok();

    let mut config = AuthFlowsConfig::from_env();

    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| config.log.level.clone().into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let cli = Cli::parse();
    if cli.seed.is_some() {
        config.directory_seed = cli.seed;
    }

    let directory = match auth_flows_lib::build_directory(&config) {
        Ok(directory) => directory,
        Err(e) => {
            error!(code = e.code(), "Failed to load directory");
            eprintln!("{}", e.user_message());
            std::process::exit(1);
        }
    };
    let auth: Arc<dyn AuthCollaborator> = directory;
    let notifier: Arc<dyn Notifier> = Arc::new(ConsoleNotifier::new(Duration::from_millis(
        config.notices.default_duration_ms,
    )));

    let mut login = LoginForm::new(auth.clone(), notifier.clone(), config.notices.clone());

    match cli.command {
        Commands::Login {
            code,
            username,
            password,
        } => {
            login.set_organization_code(&code);
            login.set_username(username);
            login.set_password(password);
            login.submit().await;

            if auth.current_user().is_some_and(|u| u.must_change_password) {
                println!("A new password must be set before continuing (use change-password).");
            }
        }
        Commands::ChangePassword {
            code,
            username,
            password,
            new_password,
            confirm,
        } => {
            login.set_organization_code(&code);
            login.set_username(username);
            login.set_password(password);
            if !matches!(login.submit().await, LoginOutcome::SignedIn { .. }) {
                return Ok(());
            }

            let mut change = PasswordChangeForm::new(auth, notifier);
            change.set_new_password(new_password);
            change.set_confirmation(confirm);

            let feedback = change.feedback();
            if let Some(hint) = feedback.length_hint() {
                println!("{}", hint);
            }
            if let Some(hint) = feedback.mismatch_hint() {
                println!("{}", hint);
            }

            change.submit().await;
        }
    }

    Ok(())
}
