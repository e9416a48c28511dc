mod backlog_commands;
mod cli;
mod commands;
mod logger;
mod meeting_commands;
mod project_commands;
mod sprint_commands;
mod task_commands;
mod team_commands;
mod user_commands;

use std::process::ExitCode;

use chrono::{Local, Utc};
use clap::Parser;
use log::debug;
use serde::Serialize;
use serde_json::{Value, json};

use scrum_client::{ApiClient, ClientError};
use scrum_config::Config;
use scrum_core::{
    BacklogItemPatch, ItemStatus, MeetingPatch, NewBacklogItem, NewComment, NewMeeting, NewProject,
    NewSprint, NewTask, NewTeam, NewUser, ProjectPatch, SprintPatch, TaskPatch, TeamPatch,
    UserPatch,
};
use scrum_store::{AppStore, SessionStore, StoreError, StoreResult, view};

use crate::backlog_commands::BacklogCommands;
use crate::cli::Cli;
use crate::commands::Commands;
use crate::meeting_commands::MeetingCommands;
use crate::project_commands::ProjectCommands;
use crate::sprint_commands::SprintCommands;
use crate::task_commands::TaskCommands;
use crate::team_commands::TeamCommands;
use crate::user_commands::UserCommands;

#[tokio::main]
async fn main() -> ExitCode {
    let cli = Cli::parse();

    let config = match Config::load().and_then(|c| {
        c.validate()?;
        Ok(c)
    }) {
        Ok(config) => config,
        Err(e) => {
            eprintln!("Error: {e}");
            return ExitCode::FAILURE;
        }
    };

    if let Err(e) = logger::initialize(
        config.logging.level,
        config.logging.file.clone(),
        config.logging.colored,
    ) {
        eprintln!("Error: {e}");
        return ExitCode::FAILURE;
    }

    let server_url = cli.server.as_deref().unwrap_or(&config.server.base_url);
    debug!("Using server {server_url}");

    let session_path = match config.session_path() {
        Ok(path) => path,
        Err(e) => {
            eprintln!("Error: {e}");
            return ExitCode::FAILURE;
        }
    };

    let mut store = AppStore::new(ApiClient::new(server_url), SessionStore::new(session_path));
    if store.restore_session() {
        debug!("Restored persisted session");
    }

    match run(cli.command, &mut store).await {
        Ok(output) => {
            let rendered = if cli.pretty {
                serde_json::to_string_pretty(&output)
            } else {
                serde_json::to_string(&output)
            };
            match rendered {
                Ok(text) => {
                    println!("{text}");
                    ExitCode::SUCCESS
                }
                Err(e) => {
                    eprintln!("Error: {e}");
                    ExitCode::FAILURE
                }
            }
        }
        Err(e) => {
            eprintln!("Error: {e}");
            ExitCode::FAILURE
        }
    }
}

fn to_json<T: Serialize>(value: &T) -> StoreResult<Value> {
    Ok(serde_json::to_value(value).map_err(ClientError::from)?)
}

async fn run(command: Commands, store: &mut AppStore) -> StoreResult<Value> {
    match command {
        Commands::Login { email, password } => {
            if store.login(&email, &password).await? {
                to_json(&store.current_user())
            } else {
                Ok(json!({ "authenticated": false, "message": "Invalid credentials" }))
            }
        }

        Commands::Logout => {
            store.logout();
            Ok(json!({ "authenticated": false }))
        }

        Commands::Nav => {
            let entries: Vec<Value> = store
                .navigation()
                .iter()
                .map(|entry| json!({ "name": entry.name, "path": entry.path }))
                .collect();
            Ok(Value::Array(entries))
        }

        Commands::Board => {
            store.fetch_backlog_items().await?;
            store.fetch_users().await?;
            store.fetch_sprints().await?;

            let column = |status: ItemStatus| -> Vec<Value> {
                view::items_by_status(&store.backlog_items, status)
                    .iter()
                    .map(|item| {
                        json!({
                            "id": item.id,
                            "title": item.title,
                            "priority": item.priority,
                            "tier": view::priority_tier(item.priority),
                            "assignedTo": view::resolve_name(
                                &store.users,
                                item.assigned_to_id,
                                view::UNASSIGNED,
                            ),
                            "sprint": view::resolve_name(
                                &store.sprints,
                                item.sprint_id,
                                view::NO_SPRINT,
                            ),
                        })
                    })
                    .collect()
            };

            Ok(json!({
                "toDo": column(ItemStatus::ToDo),
                "inProgress": column(ItemStatus::InProgress),
                "done": column(ItemStatus::Done),
            }))
        }

        Commands::User { action } => match action {
            UserCommands::List => {
                store.fetch_users().await?;
                to_json(&store.users)
            }
            UserCommands::Create {
                name,
                email,
                password,
                role,
            } => {
                let user = store
                    .add_user(NewUser {
                        name,
                        email,
                        password,
                        role,
                    })
                    .await?;
                to_json(&user)
            }
            UserCommands::Update {
                id,
                name,
                email,
                password,
                role,
            } => {
                let user = store
                    .update_user(
                        id,
                        UserPatch {
                            name,
                            email,
                            password,
                            role,
                        },
                    )
                    .await?;
                to_json(&user)
            }
            UserCommands::Delete { id } => {
                store.delete_user(id).await?;
                Ok(json!({ "deleted": id }))
            }
        },

        Commands::Project { action } => match action {
            ProjectCommands::List => {
                store.fetch_projects().await?;
                to_json(&store.projects)
            }
            ProjectCommands::Create {
                name,
                description,
                start_date,
                expected_end_date,
            } => {
                let project = store
                    .add_project(NewProject {
                        name,
                        description,
                        start_date,
                        expected_end_date,
                    })
                    .await?;
                to_json(&project)
            }
            ProjectCommands::Update {
                id,
                name,
                description,
                start_date,
                expected_end_date,
            } => {
                let project = store
                    .update_project(
                        id,
                        ProjectPatch {
                            name,
                            description,
                            start_date,
                            expected_end_date,
                        },
                    )
                    .await?;
                to_json(&project)
            }
            ProjectCommands::Archive { id } => {
                store.archive_project(id).await?;
                Ok(json!({ "archived": id }))
            }
        },

        Commands::Team { action } => match action {
            TeamCommands::List => {
                store.fetch_teams().await?;
                to_json(&store.teams)
            }
            TeamCommands::Create { name, project_id } => {
                let team = store.add_team(NewTeam { name, project_id }).await?;
                to_json(&team)
            }
            TeamCommands::Update {
                id,
                name,
                project_id,
            } => {
                let team = store.update_team(id, TeamPatch { name, project_id }).await?;
                to_json(&team)
            }
            TeamCommands::AddMember { team_id, user_id } => {
                store.add_team_member(team_id, user_id).await?;
                Ok(json!({ "teamId": team_id, "userId": user_id }))
            }
            TeamCommands::RemoveMember { team_id, user_id } => {
                store.remove_team_member(team_id, user_id).await?;
                Ok(json!({ "teamId": team_id, "userId": user_id }))
            }
        },

        Commands::Sprint { action } => match action {
            SprintCommands::List { status } => {
                store.fetch_sprints().await?;
                match status {
                    Some(status) => to_json(&view::sprints_by_status(&store.sprints, status)),
                    None => to_json(&store.sprints),
                }
            }
            SprintCommands::Create {
                name,
                goal,
                start_date,
                end_date,
                project_id,
                team_id,
            } => {
                let sprint = store
                    .add_sprint(NewSprint {
                        name,
                        goal,
                        start_date,
                        end_date,
                        status: None,
                        project_id,
                        team_id,
                    })
                    .await?;
                to_json(&sprint)
            }
            SprintCommands::Update {
                id,
                name,
                goal,
                start_date,
                end_date,
                status,
                team_id,
            } => {
                let sprint = store
                    .update_sprint(
                        id,
                        SprintPatch {
                            name,
                            goal,
                            start_date,
                            end_date,
                            status,
                            team_id,
                        },
                    )
                    .await?;
                to_json(&sprint)
            }
            SprintCommands::Delete { id } => {
                store.delete_sprint(id).await?;
                Ok(json!({ "deleted": id }))
            }
        },

        Commands::Backlog { action } => match action {
            BacklogCommands::List { status } => {
                store.fetch_backlog_items().await?;
                match status {
                    Some(status) => to_json(&view::items_by_status(&store.backlog_items, status)),
                    None => to_json(&store.backlog_items),
                }
            }
            BacklogCommands::Create {
                title,
                description,
                priority,
                estimation,
                status,
                project_id,
                sprint_id,
                assigned_to_id,
            } => {
                let item = store
                    .add_backlog_item(NewBacklogItem {
                        title,
                        description,
                        priority,
                        estimation,
                        status,
                        project_id,
                        sprint_id,
                        assigned_to_id,
                    })
                    .await?;
                to_json(&item)
            }
            BacklogCommands::Update {
                id,
                title,
                description,
                priority,
                estimation,
                status,
                sprint_id,
                assigned_to_id,
            } => {
                let item = store
                    .update_backlog_item(
                        id,
                        BacklogItemPatch {
                            title,
                            description,
                            priority,
                            estimation,
                            status,
                            sprint_id,
                            assigned_to_id,
                        },
                    )
                    .await?;
                to_json(&item)
            }
            BacklogCommands::Delete { id } => {
                store.delete_backlog_item(id).await?;
                Ok(json!({ "deleted": id }))
            }
            BacklogCommands::Comment { id, text } => {
                let user_id = store
                    .current_user()
                    .map(|user| user.id)
                    .ok_or_else(|| StoreError::session("login required to comment"))?;
                let comment = store
                    .add_comment(
                        id,
                        NewComment {
                            text,
                            user_id,
                            created_at: Utc::now(),
                        },
                    )
                    .await?;
                to_json(&comment)
            }
        },

        Commands::Task { action } => match action {
            TaskCommands::List => {
                store.fetch_tasks().await?;
                to_json(&store.tasks)
            }
            TaskCommands::Create {
                description,
                points,
                status,
                item_backlog_id,
                assigned_to_id,
            } => {
                let task = store
                    .add_task(NewTask {
                        description,
                        points,
                        status,
                        item_backlog_id,
                        assigned_to_id,
                    })
                    .await?;
                to_json(&task)
            }
            TaskCommands::Update {
                id,
                description,
                points,
                status,
                assigned_to_id,
            } => {
                let task = store
                    .update_task(
                        id,
                        TaskPatch {
                            description,
                            points,
                            status,
                            assigned_to_id,
                        },
                    )
                    .await?;
                to_json(&task)
            }
        },

        Commands::Meeting { action } => match action {
            MeetingCommands::List => {
                store.fetch_meetings().await?;
                let buckets = view::meeting_buckets(&store.meetings, Local::now().naive_local());
                Ok(json!({
                    "upcoming": to_json(&buckets.upcoming)?,
                    "past": to_json(&buckets.past)?,
                }))
            }
            MeetingCommands::Create {
                title,
                meeting_type,
                date,
                duration,
                team_id,
                attendee_ids,
                notes,
            } => {
                let meeting = store
                    .add_meeting(NewMeeting {
                        title,
                        meeting_type,
                        date,
                        duration,
                        team_id,
                        attendee_ids,
                        notes,
                    })
                    .await?;
                to_json(&meeting)
            }
            MeetingCommands::Update {
                id,
                title,
                meeting_type,
                date,
                duration,
                attendee_ids,
                notes,
            } => {
                let meeting = store
                    .update_meeting(
                        id,
                        MeetingPatch {
                            title,
                            meeting_type,
                            date,
                            duration,
                            attendee_ids,
                            notes,
                        },
                    )
                    .await?;
                to_json(&meeting)
            }
            MeetingCommands::Delete { id } => {
                store.delete_meeting(id).await?;
                Ok(json!({ "deleted": id }))
            }
        },
    }
}
