mod actions;

use anyhow::Context;
use clap::{Parser, Subcommand};
use simplelog::{ColorChoice, LevelFilter, TermLogger, TerminalMode};

use ctfctl::api::models::{MatchMode, MatchStatus};
use ctfctl::api::ApiClient;
use ctfctl::config::{get_config_path, load_config};

#[derive(Parser)]
#[command(name = "ctfctl", version, about = "Command-line client for the CTF match platform")]
pub struct Cli {
    /// Server base URL (overrides the configured value)
    #[arg(long)]
    server: Option<String>,

    /// Enable debug logging
    #[arg(short, long)]
    verbose: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
pub enum Command {
    /// Create a new account
    Register {
        username: String,
        password: String,
    },
    /// Log in and store the session in the config file
    Login {
        username: String,
        password: String,
    },
    /// Log out and clear the stored session
    Logout,
    /// Show the logged-in user
    Me,
    /// Show the player rating table
    Rating,
    /// List matches
    Matches {
        #[arg(long, value_enum)]
        status: Option<MatchStatus>,
    },
    /// Apply to a match (team matches need --team)
    Apply {
        match_id: i64,
        #[arg(long)]
        team: Option<i64>,
    },
    /// Show the status of your applications
    Applications,
    /// Show matches you took part in
    History,
    /// Team operations
    #[command(subcommand)]
    Team(TeamCommand),
    /// Administrative operations
    #[command(subcommand)]
    Admin(AdminCommand),
}

#[derive(Subcommand)]
pub enum TeamCommand {
    /// Create a team
    Create {
        name: String,
        /// Let anyone join the team
        #[arg(long)]
        open: bool,
    },
    /// List teams that accept new members
    Open,
    /// List teams you belong to
    Mine,
    /// Join an open team
    Join { team_id: i64 },
    /// Leave a team
    Leave { team_id: i64 },
}

#[derive(Subcommand)]
pub enum AdminCommand {
    /// Show the action log
    Logs,
    /// List all users
    Users,
    /// Delete a user
    DeleteUser { user_id: i64 },
    /// Set a user's points
    SetPoints { user_id: i64, points: i64 },
    /// Create a match
    CreateMatch {
        title: String,
        #[arg(long, value_enum, default_value_t = MatchMode::Solo)]
        mode: MatchMode,
    },
    /// Update a match
    UpdateMatch {
        match_id: i64,
        title: String,
        #[arg(long, value_enum)]
        mode: MatchMode,
        #[arg(long, value_enum)]
        status: MatchStatus,
    },
    /// Delete a match
    DeleteMatch { match_id: i64 },
    /// List all matches
    Matches {
        #[arg(long, value_enum)]
        status: Option<MatchStatus>,
    },
    /// Close a match without a winner
    CloseMatch { match_id: i64 },
    /// List applications
    Applications,
    /// Approve an application
    Approve { application_id: i64 },
    /// Reject an application
    Reject { application_id: i64 },
    /// Show participants of a match
    Participants { match_id: i64 },
    /// Finish a match with a manual winner
    SetWinner {
        match_id: i64,
        /// Winning user id (solo matches)
        #[arg(long, conflicts_with = "team")]
        user: Option<i64>,
        /// Winning team id (team matches)
        #[arg(long)]
        team: Option<i64>,
        /// Bonus points for the winner(s)
        #[arg(long, default_value_t = 0)]
        bonus: i64,
    },
    /// Show the text report of a match
    Report { match_id: i64 },
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    TermLogger::init(
        if cli.verbose {
            LevelFilter::Debug
        } else {
            LevelFilter::Warn
        },
        simplelog::Config::default(),
        TerminalMode::Stderr,
        ColorChoice::Auto,
    )
    .context("Failed to initialize logger")?;

    // Load configuration at startup
    let config_path = get_config_path().context("Failed to resolve config path")?;
    let mut config = load_config(&config_path).context("Failed to load configuration")?;
    if let Some(server) = cli.server {
        config.server_url = server;
    }

    let client = ApiClient::new(&config.server_url, config.session.as_deref())?;

    actions::run(cli.command, &client, &mut config, &config_path).await
}
