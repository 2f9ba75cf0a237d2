use std::io::{BufRead, Write};
use std::net::SocketAddr;

use anyhow::{Context, Result};
use chrono::{DateTime, NaiveDate, Utc};
use clap::{Args, Parser, Subcommand};
use tower_http::{cors::CorsLayer, trace::TraceLayer};
use tracing::info;

use crate::backend::MockBackend;
use crate::config::Config;
use crate::context::TrackerContext;
use crate::models::{JobFields, JobStatus};
use crate::routes::build_router;
use crate::state::AppState;
use crate::validation::{first_error_message, validate_job_fields};
use crate::view;

#[derive(Parser)]
#[command(about = "Track job applications and prepare for interviews", version)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand)]
pub enum Command {
    /// Serve the in-memory mock API over HTTP
    Serve,
    Login {
        #[arg(long)]
        email: String,
        #[arg(long)]
        password: String,
    },
    Signup {
        #[arg(long)]
        name: String,
        #[arg(long)]
        email: String,
        #[arg(long)]
        password: String,
    },
    Logout,
    /// Show the signed-in user
    Whoami,
    /// Stats, status chart and the application list
    Dashboard,
    List,
    Add(JobArgs),
    Update {
        id: String,
        #[command(flatten)]
        fields: JobArgs,
    },
    Delete {
        id: String,
        /// Skip the confirmation prompt
        #[arg(long, short)]
        yes: bool,
    },
    Stats,
    /// Generate resume bullet points for a role
    Resume {
        #[arg(long)]
        role: String,
        #[arg(long)]
        experience: String,
    },
    /// Generate an interview preparation plan
    Prep {
        #[arg(long)]
        role: String,
        #[arg(long)]
        company: String,
    },
}

#[derive(Args, Default)]
pub struct JobArgs {
    #[arg(long)]
    pub company: Option<String>,
    #[arg(long)]
    pub title: Option<String>,
    #[arg(long)]
    pub status: Option<JobStatus>,
    /// Application date, YYYY-MM-DD
    #[arg(long, value_parser = parse_date)]
    pub date: Option<DateTime<Utc>>,
    #[arg(long)]
    pub url: Option<String>,
    #[arg(long)]
    pub notes: Option<String>,
}

impl From<JobArgs> for JobFields {
    fn from(args: JobArgs) -> Self {
        JobFields {
            company: args.company,
            title: args.title,
            status: args.status,
            applied_date: args.date,
            job_url: args.url,
            notes: args.notes,
        }
    }
}

fn parse_date(raw: &str) -> Result<DateTime<Utc>, String> {
    NaiveDate::parse_from_str(raw.trim(), "%Y-%m-%d")
        .ok()
        .and_then(|d| d.and_hms_opt(0, 0, 0))
        .map(|d| d.and_utc())
        .ok_or_else(|| format!("'{raw}' is not a date in YYYY-MM-DD form"))
}

pub async fn run(cli: Cli, config: Config) -> Result<()> {
    let command = match cli.command {
        Command::Serve => return serve(&config).await,
        command => command,
    };

    let ctx = TrackerContext::from_config(&config)?;
    ctx.bootstrap().await;

    match command {
        Command::Login { email, password } => match ctx.auth.login(&email, &password).await {
            Ok(user) => println!("Signed in as {} <{}>", user.name, user.email),
            Err(message) => eprintln!("Error: {message}"),
        },
        Command::Signup {
            name,
            email,
            password,
        } => match ctx.auth.signup(&name, &email, &password).await {
            Ok(user) => println!("Welcome, {}! Your account is ready.", user.name),
            Err(message) => eprintln!("Error: {message}"),
        },
        Command::Logout => {
            ctx.logout();
            println!("Signed out.");
        }
        Command::Whoami => match ctx.auth.current_user() {
            Some(user) => println!("{} <{}>", user.name, user.email),
            None => println!("Not signed in."),
        },
        command => {
            if !ctx.auth.is_authenticated() {
                eprintln!("Not signed in. Run `jobtracker login` first.");
                return Ok(());
            }
            run_authenticated(&ctx, command).await?;
        }
    }

    Ok(())
}

async fn run_authenticated(ctx: &TrackerContext, command: Command) -> Result<()> {
    match command {
        Command::Dashboard => {
            ctx.jobs.fetch_all().await;
            let user = ctx.auth.current_user();
            print!(
                "{}",
                view::render_dashboard(user.as_ref(), &ctx.jobs.jobs(), &ctx.jobs.stats())
            );
        }
        Command::List => {
            ctx.jobs.fetch_all().await;
            print!("{}", view::render_job_list(&ctx.jobs.jobs()));
        }
        Command::Stats => {
            ctx.jobs.fetch_all().await;
            let stats = ctx.jobs.stats();
            print!("{}", view::render_stats(&stats));
            println!();
            print!("{}", view::render_status_chart(&stats, 30));
        }
        Command::Add(args) => {
            let fields = JobFields::from(args);
            if let Some(message) = first_error_message(&validate_job_fields(&fields, true)) {
                eprintln!("Error: {message}");
                return Ok(());
            }
            match ctx.jobs.create(fields).await {
                Ok(job) => print!("Added:\n{}", view::render_job_card(&job)),
                Err(message) => eprintln!("Error: {message}"),
            }
        }
        Command::Update { id, fields } => {
            let fields = JobFields::from(fields);
            if let Some(message) = first_error_message(&validate_job_fields(&fields, false)) {
                eprintln!("Error: {message}");
                return Ok(());
            }
            match ctx.jobs.update(&id, fields).await {
                Ok(job) => print!("Updated:\n{}", view::render_job_card(&job)),
                Err(message) => eprintln!("Error: {message}"),
            }
        }
        Command::Delete { id, yes } => {
            if !yes && !confirm("Are you sure you want to delete this job application?")? {
                println!("Cancelled.");
                return Ok(());
            }
            match ctx.jobs.delete(&id).await {
                Ok(()) => println!("Deleted {id}."),
                Err(message) => eprintln!("Error: {message}"),
            }
        }
        Command::Resume { role, experience } => {
            match ctx.assistant.resume_bullets(&role, &experience).await {
                Ok(bullets) => {
                    for bullet in bullets {
                        println!("• {bullet}");
                    }
                }
                Err(message) => eprintln!("Error: {message}"),
            }
        }
        Command::Prep { role, company } => match ctx.assistant.prep_plan(&role, &company).await {
            Ok(plan) => println!("{plan}"),
            Err(message) => eprintln!("Error: {message}"),
        },
        Command::Serve
        | Command::Login { .. }
        | Command::Signup { .. }
        | Command::Logout
        | Command::Whoami => {}
    }

    Ok(())
}

fn confirm(prompt: &str) -> Result<bool> {
    print!("{prompt} [y/N] ");
    std::io::stdout().flush()?;

    let mut answer = String::new();
    std::io::stdin()
        .lock()
        .read_line(&mut answer)
        .context("Failed to read confirmation")?;
    Ok(matches!(answer.trim().to_ascii_lowercase().as_str(), "y" | "yes"))
}

/// Serves a fresh mock backend on `config.port`.
async fn serve(config: &Config) -> Result<()> {
    let state = AppState::new(MockBackend::new(config.mock_latency));

    let app = build_router(state)
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive());

    let addr: SocketAddr = format!("0.0.0.0:{}", config.port).parse()?;
    info!("Mock API listening on {addr}");

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
