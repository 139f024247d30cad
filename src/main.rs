use std::path::PathBuf;
use std::process::ExitCode;

use clap::{Parser, Subcommand};
use sequential_race_bot::api::server;
use sequential_race_bot::data::accounts::{AccountColor, NewAccount};
use sequential_race_bot::form::{AccountForm, FormField, Submission};
use sequential_race_bot::notify::NotificationLevel;
use sequential_race_bot::{default_data_dir, init_logging, App};

#[derive(Debug, Parser)]
#[command(name = "race-bot", version, about = "Manage accounts for the Sequential Race Bot")]
struct Cli {
    /// Directory holding the settings and storage files
    #[arg(long, global = true)]
    data_dir: Option<PathBuf>,

    /// Keep everything in memory
    #[arg(long, global = true)]
    ephemeral: bool,

    /// Increase log verbosity (-v debug, -vv trace)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Serve the accounts page over HTTP until Ctrl-C
    Serve {
        #[arg(long)]
        port: Option<u16>,
    },
    /// List accounts in display order
    List,
    /// Add an account
    Add {
        #[arg(long)]
        alias: String,
        #[arg(long)]
        email: String,
        #[arg(long)]
        password: String,
        #[arg(long)]
        color: Option<AccountColor>,
        #[arg(long)]
        token: Option<String>,
    },
    /// Edit an account; omitted fields are kept
    Edit {
        id: String,
        #[arg(long)]
        alias: Option<String>,
        #[arg(long)]
        email: Option<String>,
        #[arg(long)]
        password: Option<String>,
        #[arg(long)]
        color: Option<AccountColor>,
        #[arg(long)]
        token: Option<String>,
    },
    /// Delete an account
    Delete { id: String },
    /// Move an account to the position of another
    Move {
        id: String,
        #[arg(long)]
        over: String,
    },
    /// Print the color palette
    Colors,
}

#[tokio::main]
async fn main() -> ExitCode {
    let cli = Cli::parse();

    let app = if cli.ephemeral {
        App::ephemeral()
    } else {
        let data_dir = cli.data_dir.clone().unwrap_or_else(default_data_dir);
        App::open(&data_dir)
    };

    let level = match cli.verbose {
        0 => app.settings.log_level(),
        1 => tracing::Level::DEBUG,
        _ => tracing::Level::TRACE,
    };
    init_logging(level);

    let ok = match cli.command {
        Command::Serve { port } => serve(&app, port).await,
        Command::List => {
            list(&app);
            true
        }
        Command::Add {
            alias,
            email,
            password,
            color,
            token,
        } => add(&app, alias, email, password, color, token),
        Command::Edit {
            id,
            alias,
            email,
            password,
            color,
            token,
        } => edit(&app, &id, alias, email, password, color, token),
        Command::Delete { id } => app.dashboard.handle_delete_account(&id).is_ok(),
        Command::Move { id, over } => app.dashboard.handle_drag_end(&id, Some(over.as_str())).is_ok(),
        Command::Colors => {
            for color in AccountColor::ALL {
                println!("{color}");
            }
            true
        }
    };

    print_notifications(&app);

    if ok {
        ExitCode::SUCCESS
    } else {
        ExitCode::FAILURE
    }
}

async fn serve(app: &App, port: Option<u16>) -> bool {
    let port = port.unwrap_or_else(|| app.settings.web_server_port());
    match server::start(app.app_state(), port).await {
        Ok(port) => println!("Listening on port {port}, press Ctrl-C to stop"),
        Err(e) => {
            eprintln!("{e}");
            return false;
        }
    }

    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!(error = %e, "failed to listen for Ctrl-C");
    }
    server::stop().is_ok()
}

fn list(app: &App) {
    let mut accounts = app.dashboard.accounts();
    if accounts.is_empty() {
        if let Some(empty) = app.dashboard.status().empty_state {
            println!("{empty}");
        }
        return;
    }

    accounts.sort_by_key(|a| a.order);
    for account in accounts {
        println!(
            "{:>3}  {:<36}  {:<20}  {:<30}  {}",
            account.order, account.id, account.alias, account.email, account.color
        );
    }
}

fn add(
    app: &App,
    alias: String,
    email: String,
    password: String,
    color: Option<AccountColor>,
    token: Option<String>,
) -> bool {
    let mut form = AccountForm::new();
    form.handle_change(FormField::Alias, alias);
    form.handle_change(FormField::Email, email);
    form.handle_change(FormField::Password, password);
    form.set_color(color.unwrap_or_else(|| app.settings.default_color()));

    let Some(submission) = form.submit(None) else {
        print_form_errors(&form);
        return false;
    };

    let submission = match submission {
        Submission::Create(draft) => Submission::Create(NewAccount { token, ..draft }),
        other => other,
    };

    app.dashboard.handle_save_account(submission).is_ok()
}

fn edit(
    app: &App,
    id: &str,
    alias: Option<String>,
    email: Option<String>,
    password: Option<String>,
    color: Option<AccountColor>,
    token: Option<String>,
) -> bool {
    let Some(mut existing) = app.dashboard.find(id) else {
        eprintln!("Account not found");
        return false;
    };
    if token.is_some() {
        existing.token = token;
    }

    let mut form = AccountForm::for_account(&existing);
    if let Some(alias) = alias {
        form.handle_change(FormField::Alias, alias);
    }
    if let Some(email) = email {
        form.handle_change(FormField::Email, email);
    }
    if let Some(password) = password {
        form.handle_change(FormField::Password, password);
    }
    if let Some(color) = color {
        form.set_color(color);
    }

    let Some(submission) = form.submit(Some(&existing)) else {
        print_form_errors(&form);
        return false;
    };
    app.dashboard.handle_save_account(submission).is_ok()
}

fn print_form_errors(form: &AccountForm) {
    let errors = form.errors();
    for message in [&errors.alias, &errors.email, &errors.password]
        .into_iter()
        .flatten()
    {
        eprintln!("{message}");
    }
}

fn print_notifications(app: &App) {
    for note in app.dashboard.take_notifications() {
        let line = match &note.description {
            Some(description) => format!("{}: {}", note.title, description),
            None => note.title.clone(),
        };
        match note.level {
            NotificationLevel::Success => println!("{line}"),
            NotificationLevel::Error => eprintln!("{line}"),
        }
    }
}
