//! `course-analyzer`: load a course-session CSV once and print the answer to
//! one query as JSON on stdout. Logs go to stderr and follow `RUST_LOG`.

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use course_analyzer::{Catalog, Gender};
use serde::Serialize;
use std::path::PathBuf;
use tracing::info;
use tracing_subscriber::{fmt, EnvFilter};

/// Aggregate, rank, search and recommend over a catalog of course sessions
#[derive(Parser)]
#[command(name = "course-analyzer")]
#[command(version, about, long_about = None)]
struct Cli {
    /// CSV file with one course session per line after the header
    #[arg(short, long, global = true, env = "COURSE_DATA", value_name = "FILE")]
    data: Option<PathBuf>,

    /// Pretty-print the JSON output
    #[arg(long, global = true)]
    pretty: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Total participants per institution
    #[command(name = "by-institution")]
    ByInstitution,

    /// Total participants per institution and subject, largest first
    #[command(name = "by-institution-subject")]
    ByInstitutionSubject,

    /// Solo and co-taught titles for every instructor
    Instructors,

    /// Top titles ranked by total hours or participants
    Top {
        /// Number of titles to return
        #[arg(short, long, default_value_t = 10)]
        k: usize,

        /// Ranking metric: `hours` or `participants`
        #[arg(long, default_value = "participants")]
        by: String,
    },

    /// Titles matching a subject fragment and two thresholds
    Search {
        /// Case-insensitive subject substring
        #[arg(long, default_value = "")]
        subject: String,

        /// Minimum percent audited (inclusive)
        #[arg(long, default_value_t = 0.0)]
        min_audited: f64,

        /// Maximum total course hours (inclusive)
        #[arg(long, default_value_t = f64::INFINITY)]
        max_hours: f64,
    },

    /// Ten titles whose audiences are closest to the given learner
    Recommend {
        #[arg(long)]
        age: i32,

        /// 0 = female, 1 = male
        #[arg(long, value_parser = clap::value_parser!(u8).range(0..=1))]
        gender: u8,

        /// 1 if the learner holds a bachelor's degree or higher
        #[arg(long, value_parser = clap::value_parser!(u8).range(0..=1))]
        degree: u8,
    },

    /// Session, institution, course-family and instructor counts
    Summary,
}

fn main() -> Result<()> {
    let env = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    fmt::Subscriber::builder()
        .with_env_filter(env)
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    let data = cli
        .data
        .context("no course data given; pass --data <FILE> or set COURSE_DATA")?;

    let catalog = Catalog::load(&data)
        .with_context(|| format!("failed to load course catalog from {}", data.display()))?;
    info!(sessions = catalog.len(), "catalog ready");

    match cli.command {
        Commands::ByInstitution => emit(&catalog.participants_by_institution(), cli.pretty),
        Commands::ByInstitutionSubject => {
            emit(&catalog.participants_by_institution_and_subject(), cli.pretty)
        }
        Commands::Instructors => emit(&catalog.courses_by_instructor(), cli.pretty),
        Commands::Top { k, by } => {
            let titles = catalog
                .top_courses(k, &by)
                .with_context(|| format!("cannot rank courses by `{}`", by))?;
            emit(&titles, cli.pretty)
        }
        Commands::Search {
            subject,
            min_audited,
            max_hours,
        } => emit(
            &catalog.search_courses(&subject, min_audited, max_hours),
            cli.pretty,
        ),
        Commands::Recommend {
            age,
            gender,
            degree,
        } => {
            let gender = Gender::from_flag(gender).context("gender must be 0 or 1")?;
            emit(&catalog.recommend_courses(age, gender, degree == 1), cli.pretty)
        }
        Commands::Summary => emit(&catalog.summary(), cli.pretty),
    }
}

fn emit<T: Serialize>(value: &T, pretty: bool) -> Result<()> {
    let out = if pretty {
        serde_json::to_string_pretty(value)
    } else {
        serde_json::to_string(value)
    }
    .context("serializing query result")?;
    println!("{}", out);
    Ok(())
}
