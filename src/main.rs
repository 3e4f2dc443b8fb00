//! Command-line driver for the check-in admin console.
//!
//! Stands in for the browser UI: logs in, keeps the session token in a
//! local file between runs, and calls the account / cron / config / log
//! endpoints through the same pipeline the UI uses.

use std::collections::HashMap;
use std::path::PathBuf;
use std::sync::Arc;

use clap::{Args, Parser, Subcommand};
use serde::Serialize;

use checkin_console::api::{account, auth, cron, system};
use checkin_console::net::{ApiClient, ApiError};
use checkin_console::routes::{Navigator, Route};
use checkin_console::session::SessionStore;
use checkin_console::storage::{FileTokenStore, MemoryTokenStore, TokenStore};

#[derive(Parser, Debug)]
#[command(name = "checkin-console", about = "Check-in admin console API CLI")]
struct Cli {
    /// API root; all request paths are relative to it.
    #[arg(long, env = "CONSOLE_BASE_URL", default_value = "http://127.0.0.1:8080/api")]
    base_url: String,

    /// File holding the session token between runs.
    #[arg(long, env = "CONSOLE_TOKEN_FILE")]
    token_file: Option<PathBuf>,

    /// Keep the token in memory only; useful for one-shot scripted runs.
    #[arg(long)]
    no_persist: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Log in and store the session token.
    Login {
        username: String,
        #[arg(long, env = "CONSOLE_PASSWORD")]
        password: String,
    },
    /// Clear the stored session token.
    Logout,
    /// Show the current user's profile.
    Profile,
    /// Change the current user's password.
    Password {
        #[arg(long)]
        old: String,
        #[arg(long)]
        new: String,
    },
    Account(AccountCommand),
    Cron(CronCommand),
    Config(ConfigCommand),
    /// Recent check-in logs.
    Logs,
}

#[derive(Args, Debug)]
struct AccountCommand {
    #[command(subcommand)]
    command: AccountSubcommand,
}

#[derive(Subcommand, Debug)]
enum AccountSubcommand {
    List,
    Create {
        #[arg(long)]
        name: String,
        #[arg(long)]
        session: String,
    },
    Update {
        id: i64,
        #[arg(long)]
        name: String,
        #[arg(long)]
        session: String,
    },
    Delete {
        id: i64,
    },
    /// Run a check-in for one account now.
    Checkin {
        id: i64,
    },
    /// Validate an upstream session string without creating an account.
    Verify {
        session: String,
    },
}

#[derive(Args, Debug)]
struct CronCommand {
    #[command(subcommand)]
    command: CronSubcommand,
}

#[derive(Subcommand, Debug)]
enum CronSubcommand {
    List,
    Create {
        #[arg(long)]
        name: String,
        #[arg(long)]
        cron_expr: String,
        #[arg(long)]
        task_type: String,
        #[arg(long)]
        account_ids: String,
    },
    Update {
        id: i64,
        #[arg(long)]
        name: Option<String>,
        #[arg(long)]
        cron_expr: Option<String>,
        #[arg(long)]
        task_type: Option<String>,
        #[arg(long)]
        account_ids: Option<String>,
        #[arg(long)]
        status: Option<i64>,
    },
    Delete {
        id: i64,
    },
    /// Run a scheduled task immediately.
    Trigger {
        id: i64,
    },
}

#[derive(Args, Debug)]
struct ConfigCommand {
    #[command(subcommand)]
    command: ConfigSubcommand,
}

#[derive(Subcommand, Debug)]
enum ConfigSubcommand {
    /// Show settings for one category.
    Get { category: String },
    /// Replace settings for one category from `key=value` pairs.
    Set {
        category: String,
        #[arg(required = true)]
        entries: Vec<String>,
    },
    /// Send a test Telegram notification.
    TestTelegram,
}

fn default_token_file() -> PathBuf {
    std::env::var_os("HOME")
        .map(PathBuf::from)
        .unwrap_or_else(|| PathBuf::from("."))
        .join(".checkin-console")
        .join("token")
}

#[tokio::main]
async fn main() -> Result<(), ApiError> {
    tracing_subscriber::fmt::init();

    let cli = Cli::parse();

    let store: Arc<dyn TokenStore> = if cli.no_persist {
        Arc::new(MemoryTokenStore::default())
    } else {
        let path = cli.token_file.clone().unwrap_or_else(default_token_file);
        Arc::new(FileTokenStore::new(path))
    };
    let session = Arc::new(SessionStore::new(store));
    session.initialize();
    let navigator = Arc::new(Navigator::new(session.clone()));
    let client = ApiClient::new(&cli.base_url, session.clone(), navigator.clone())?;

    run(&cli.command, &client, &session, &navigator).await
}

async fn run(
    command: &Command,
    client: &ApiClient,
    session: &SessionStore,
    navigator: &Navigator,
) -> Result<(), ApiError> {
    match command {
        Command::Login { username, password } => {
            let resp = auth::login(client, username, password).await?;
            session.set_token(&resp.token);
            let profile = auth::get_profile(client).await?;
            session.set_user(&profile.username);
            let landed = navigator.navigate(Route::Dashboard);
            tracing::debug!(route = landed.path(), "navigated after login");
            println!("logged in as {}", profile.username);
            Ok(())
        }
        Command::Logout => {
            session.logout();
            navigator.force_login();
            println!("logged out");
            Ok(())
        }
        Command::Profile => print_json(&auth::get_profile(client).await?),
        Command::Password { old, new } => {
            auth::change_password(client, old, new).await?;
            println!("password changed");
            Ok(())
        }
        Command::Account(cmd) => run_account(&cmd.command, client).await,
        Command::Cron(cmd) => run_cron(&cmd.command, client).await,
        Command::Config(cmd) => run_config(&cmd.command, client).await,
        Command::Logs => print_json(&system::get_logs(client).await?),
    }
}

async fn run_account(command: &AccountSubcommand, client: &ApiClient) -> Result<(), ApiError> {
    match command {
        AccountSubcommand::List => print_json(&account::get_accounts(client).await?),
        AccountSubcommand::Create { name, session } => {
            print_json(&account::create_account(client, name, session).await?)
        }
        AccountSubcommand::Update { id, name, session } => {
            print_json(&account::update_account(client, *id, name, session).await?)
        }
        AccountSubcommand::Delete { id } => {
            account::delete_account(client, *id).await?;
            println!("deleted account {id}");
            Ok(())
        }
        AccountSubcommand::Checkin { id } => {
            print_json(&account::checkin_account(client, *id).await?)
        }
        AccountSubcommand::Verify { session } => {
            print_json(&account::verify_session(client, session).await?)
        }
    }
}

async fn run_cron(command: &CronSubcommand, client: &ApiClient) -> Result<(), ApiError> {
    match command {
        CronSubcommand::List => print_json(&cron::get_cron_tasks(client).await?),
        CronSubcommand::Create { name, cron_expr, task_type, account_ids } => {
            let input = cron::CronTaskInput {
                name: Some(name.clone()),
                cron_expr: Some(cron_expr.clone()),
                task_type: Some(task_type.clone()),
                account_ids: Some(account_ids.clone()),
                status: None,
            };
            print_json(&cron::create_cron_task(client, &input).await?)
        }
        CronSubcommand::Update { id, name, cron_expr, task_type, account_ids, status } => {
            let input = cron::CronTaskInput {
                name: name.clone(),
                cron_expr: cron_expr.clone(),
                task_type: task_type.clone(),
                account_ids: account_ids.clone(),
                status: *status,
            };
            print_json(&cron::update_cron_task(client, *id, &input).await?)
        }
        CronSubcommand::Delete { id } => {
            cron::delete_cron_task(client, *id).await?;
            println!("deleted cron task {id}");
            Ok(())
        }
        CronSubcommand::Trigger { id } => {
            cron::trigger_cron_task(client, *id).await?;
            println!("triggered cron task {id}");
            Ok(())
        }
    }
}

async fn run_config(command: &ConfigSubcommand, client: &ApiClient) -> Result<(), ApiError> {
    match command {
        ConfigSubcommand::Get { category } => {
            print_json(&system::get_configs(client, category).await?)
        }
        ConfigSubcommand::Set { category, entries } => {
            let mut values = HashMap::new();
            for entry in entries {
                let Some((key, value)) = entry.split_once('=') else {
                    tracing::warn!(entry = %entry, "skipping malformed key=value pair");
                    continue;
                };
                values.insert(key.to_owned(), value.to_owned());
            }
            system::update_configs(client, category, &values).await?;
            println!("updated {category} config");
            Ok(())
        }
        ConfigSubcommand::TestTelegram => print_json(&system::test_telegram(client).await?),
    }
}

fn print_json<T: Serialize>(value: &T) -> Result<(), ApiError> {
    let rendered = serde_json::to_string_pretty(value)?;
    println!("{rendered}");
    Ok(())
}
