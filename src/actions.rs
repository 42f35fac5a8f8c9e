// src/actions.rs

// One handler per CLI command. Each issues the API call and renders the
// result for the terminal; session changes are written back to the
// config file.

use std::path::Path;

use anyhow::Result;

use ctfctl::api::models::{MatchParticipants, Winner};
use ctfctl::api::ApiClient;
use ctfctl::config::{save_config, Config};

use crate::{AdminCommand, Command, TeamCommand};

pub async fn run(
    command: Command,
    client: &ApiClient,
    config: &mut Config,
    config_path: &Path,
) -> Result<()> {
    match command {
        Command::Register { username, password } => {
            // The server asks for the password twice; the CLI takes it once.
            client.register(&username, &password, &password).await?;
            println!("Registered {}", username);
        }
        Command::Login { username, password } => {
            client.login(&username, &password).await?;
            config.session = client.session();
            save_config(config, config_path)?;
            println!("Logged in as {}", username);
        }
        Command::Logout => {
            client.logout().await?;
            config.session = None;
            save_config(config, config_path)?;
            println!("Logged out");
        }
        Command::Me => {
            let user = client.me().await?;
            println!(
                "#{} {} role={} points={}",
                user.id, user.username, user.role, user.points
            );
        }
        Command::Rating => {
            for (place, user) in client.rating().await?.iter().enumerate() {
                println!("{:>3}. {:<24} {:>6}", place + 1, user.username, user.points);
            }
        }
        Command::Matches { status } => {
            for m in client.matches(status).await? {
                println!("#{:<4} {:<32} {:<5} {}", m.id, m.title, m.mode, m.status);
            }
        }
        Command::Apply { match_id, team } => {
            client.apply_to_match(match_id, team).await?;
            println!("Applied to match #{}", match_id);
        }
        Command::Applications => {
            let mut applications: Vec<_> = client.my_applications().await?.into_iter().collect();
            applications.sort_unstable_by_key(|(match_id, _)| *match_id);
            for (match_id, status) in applications {
                println!("match #{}: {}", match_id, status);
            }
        }
        Command::History => {
            for m in client.history().await? {
                println!("#{:<4} {:<32} {:<5} {}", m.id, m.title, m.mode, m.status);
            }
        }
        Command::Team(command) => run_team(command, client).await?,
        Command::Admin(command) => run_admin(command, client).await?,
    }
    Ok(())
}

async fn run_team(command: TeamCommand, client: &ApiClient) -> Result<()> {
    match command {
        TeamCommand::Create { name, open } => {
            let team_id = client.create_team(&name, open).await?;
            println!("Created team {} (id={})", name, team_id);
        }
        TeamCommand::Open => {
            for team in client.open_teams().await? {
                println!("#{:<4} {}", team.id, team.name);
            }
        }
        TeamCommand::Mine => {
            for team in client.my_teams().await? {
                let access = if team.is_open { "open" } else { "closed" };
                println!("#{:<4} {:<24} {}", team.id, team.name, access);
            }
        }
        TeamCommand::Join { team_id } => {
            client.join_team(team_id).await?;
            println!("Joined team #{}", team_id);
        }
        TeamCommand::Leave { team_id } => {
            client.leave_team(team_id).await?;
            println!("Left team #{}", team_id);
        }
    }
    Ok(())
}

async fn run_admin(command: AdminCommand, client: &ApiClient) -> Result<()> {
    match command {
        AdminCommand::Logs => {
            for entry in client.admin_logs().await? {
                println!(
                    "#{:<5} {} {:<16} {:<24} {}",
                    entry.id, entry.created_at, entry.actor, entry.action, entry.details
                );
            }
        }
        AdminCommand::Users => {
            for user in client.admin_users().await? {
                println!(
                    "#{:<4} {:<24} {:<6} {:>6}",
                    user.id, user.username, user.role, user.points
                );
            }
        }
        AdminCommand::DeleteUser { user_id } => {
            client.admin_delete_user(user_id).await?;
            println!("Deleted user #{}", user_id);
        }
        AdminCommand::SetPoints { user_id, points } => {
            client.admin_set_points(user_id, points).await?;
            println!("Set points of user #{} to {}", user_id, points);
        }
        AdminCommand::CreateMatch { title, mode } => {
            client.admin_create_match(&title, mode).await?;
            println!("Created {} match: {}", mode, title);
        }
        AdminCommand::UpdateMatch {
            match_id,
            title,
            mode,
            status,
        } => {
            client
                .admin_update_match(match_id, &title, mode, status)
                .await?;
            println!("Updated match #{}", match_id);
        }
        AdminCommand::DeleteMatch { match_id } => {
            client.admin_delete_match(match_id).await?;
            println!("Deleted match #{}", match_id);
        }
        AdminCommand::Matches { status } => {
            for m in client.admin_matches(status).await? {
                println!("#{:<4} {:<32} {:<5} {}", m.id, m.title, m.mode, m.status);
            }
        }
        AdminCommand::CloseMatch { match_id } => {
            client.admin_close_match(match_id).await?;
            println!("Closed match #{}", match_id);
        }
        AdminCommand::Applications => {
            for a in client.admin_applications().await? {
                match a.team_id {
                    Some(team_id) => println!(
                        "#{:<4} match={} user={} team={} {}",
                        a.id, a.match_id, a.user_id, team_id, a.status
                    ),
                    None => println!(
                        "#{:<4} match={} user={} {}",
                        a.id, a.match_id, a.user_id, a.status
                    ),
                }
            }
        }
        AdminCommand::Approve { application_id } => {
            client.admin_approve_application(application_id).await?;
            println!("Approved application #{}", application_id);
        }
        AdminCommand::Reject { application_id } => {
            client.admin_reject_application(application_id).await?;
            println!("Rejected application #{}", application_id);
        }
        AdminCommand::Participants { match_id } => {
            let participants = client.admin_match_participants(match_id).await?;
            print_participants(&participants);
        }
        AdminCommand::SetWinner {
            match_id,
            user,
            team,
            bonus,
        } => {
            let winner = match (user, team) {
                (Some(user_id), None) => Winner::User(user_id),
                (None, Some(team_id)) => Winner::Team(team_id),
                _ => anyhow::bail!("choose exactly one winner: --user or --team"),
            };
            client.admin_set_winner(match_id, winner, bonus).await?;
            println!("Match #{} finished", match_id);
        }
        AdminCommand::Report { match_id } => {
            println!("{}", client.admin_match_report(match_id).await?);
        }
    }
    Ok(())
}

fn print_participants(participants: &MatchParticipants) {
    let m = &participants.details;
    println!("#{} {} [{} / {}]", m.id, m.title, m.mode, m.status);
    println!("Participants ({}):", participants.users.len());
    for user in &participants.users {
        println!("  {} (id={}, points={})", user.username, user.id, user.points);
    }
    for team in &participants.teams {
        println!("Team {} (id={}):", team.name, team.id);
        for member in &team.members {
            println!(
                "  {} (id={}, points={})",
                member.username, member.id, member.points
            );
        }
    }
}
