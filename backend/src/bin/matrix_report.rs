//! Performance-matrix report binary.
//!
//! Loads practice sets from the configured repository, applies filters read
//! from the environment and prints the result as JSON.
//!
//! # Usage
//!
//! ```bash
//! # Matrix over the built-in sample data
//! cargo run --bin matrix-report
//!
//! # Math only, hard questions, with the Algebra/Hard cell selected
//! FILTER_SUBJECT=Math FILTER_DIFFICULTIES=hard,very_hard \
//!   SELECT_TOPIC=Algebra SELECT_DIFFICULTY=hard cargo run --bin matrix-report
//!
//! # List practice sets from a JSON export
//! PRACTICE_DATA_PATH=sets.json cargo run --bin matrix-report -- sets
//! ```
//!
//! # Environment Variables
//!
//! - `REPOSITORY_TYPE`: `local`, `sample` or `json` (default: `review.toml`, then sample)
//! - `PRACTICE_DATA_PATH`: JSON dataset path
//! - `FILTER_SUBJECT`: Subject to keep
//! - `FILTER_DIFFICULTIES`: Comma-separated active difficulties (default: all)
//! - `FILTER_TOPICS`: Comma-separated topics to keep
//! - `FILTER_PERFORMANCE`: `low`, `medium` or `high`
//! - `TOPIC_SEARCH`: Case-insensitive topic substring search
//! - `SELECT_TOPIC` + `SELECT_DIFFICULTY`: Cell to select
//! - `RUST_LOG`: Log level (default: info)

use std::env;
use std::sync::Arc;

use anyhow::{bail, Context};
use tracing::{info, Level};
use tracing_subscriber::FmtSubscriber;

use practice_review::db::{self, RepositoryConfig};
use practice_review::models::{Difficulty, PerformanceBucket};
use practice_review::routes::landing::SETS_REPORT;
use practice_review::routes::matrix::MATRIX_REPORT;
use practice_review::services::{MatrixCache, MatrixSession, DEFAULT_CACHE_CAPACITY};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    FmtSubscriber::builder()
        .with_max_level(
            env::var("RUST_LOG")
                .ok()
                .and_then(|s| s.parse().ok())
                .unwrap_or(Level::INFO),
        )
        .with_target(true)
        .with_writer(std::io::stderr)
        .init();

    let report = parse_report(env::args().nth(1).as_deref())?;
    info!("Starting {:?} report", report);

    db::init_repository()?;
    let repository = Arc::clone(db::get_repository()?);
    info!("Repository initialized successfully");

    if report == Report::Sets {
        let infos = db::list_practice_set_infos(repository.as_ref())
            .await
            .context("Failed to list practice sets")?;
        println!("{}", serde_json::to_string_pretty(&infos)?);
        return Ok(());
    }

    let mut session = db::load_session(repository.as_ref())
        .await
        .context("Failed to load practice sets")?;
    apply_env_filters(&mut session)?;
    apply_env_selection(&mut session)?;

    let capacity = RepositoryConfig::from_default_location()
        .map(|c| c.cache.capacity)
        .unwrap_or(DEFAULT_CACHE_CAPACITY);
    let cache = MatrixCache::new(capacity);
    let data = session.data_cached(&cache);

    info!(
        "Matrix has {} rows x {} columns over {} questions",
        data.grid_rows.len(),
        data.difficulties.len(),
        data.grand_total.count
    );
    println!("{}", serde_json::to_string_pretty(&data)?);

    Ok(())
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Report {
    Matrix,
    Sets,
}

fn parse_report(arg: Option<&str>) -> anyhow::Result<Report> {
    match arg {
        None | Some(MATRIX_REPORT) => Ok(Report::Matrix),
        Some(SETS_REPORT) => Ok(Report::Sets),
        Some(other) => bail!(
            "Unknown report '{}'; expected '{}' or '{}'",
            other,
            MATRIX_REPORT,
            SETS_REPORT
        ),
    }
}

fn non_empty_var(key: &str) -> Option<String> {
    env::var(key).ok().filter(|v| !v.trim().is_empty())
}

fn split_list(raw: &str) -> Vec<String> {
    raw.split(',')
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(str::to_string)
        .collect()
}

fn parse_difficulties(raw: &str) -> anyhow::Result<Vec<Difficulty>> {
    split_list(raw)
        .iter()
        .map(|s| s.parse::<Difficulty>().map_err(anyhow::Error::msg))
        .collect()
}

fn apply_env_filters(session: &mut MatrixSession) -> anyhow::Result<()> {
    if let Some(subject) = non_empty_var("FILTER_SUBJECT") {
        session.set_filter_subject(Some(subject));
    }

    if let Some(raw) = non_empty_var("FILTER_DIFFICULTIES") {
        let active = parse_difficulties(&raw).context("Invalid FILTER_DIFFICULTIES")?;
        let difficulties = Difficulty::ALL
            .iter()
            .map(|d| (*d, active.contains(d)))
            .collect();
        session.set_filter_difficulties(difficulties);
    }

    if let Some(raw) = non_empty_var("FILTER_TOPICS") {
        session.set_filter_topics(split_list(&raw));
    }

    if let Some(raw) = non_empty_var("FILTER_PERFORMANCE") {
        let bucket: PerformanceBucket = raw
            .parse()
            .map_err(anyhow::Error::msg)
            .context("Invalid FILTER_PERFORMANCE")?;
        session.set_filter_performance(Some(bucket));
    }

    if let Some(search) = non_empty_var("TOPIC_SEARCH") {
        session.set_topic_search_input(search);
    }

    info!("Filters: {:?}", session.filters());
    Ok(())
}

fn apply_env_selection(session: &mut MatrixSession) -> anyhow::Result<()> {
    match (non_empty_var("SELECT_TOPIC"), non_empty_var("SELECT_DIFFICULTY")) {
        (Some(topic), Some(raw)) => {
            let difficulty: Difficulty = raw
                .parse()
                .map_err(anyhow::Error::msg)
                .context("Invalid SELECT_DIFFICULTY")?;
            session.handle_cell_click(&topic, difficulty);
            Ok(())
        }
        (None, None) => Ok(()),
        _ => bail!("SELECT_TOPIC and SELECT_DIFFICULTY must be set together"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_report_names() {
        assert_eq!(parse_report(None).unwrap(), Report::Matrix);
        assert_eq!(parse_report(Some("matrix")).unwrap(), Report::Matrix);
        assert_eq!(parse_report(Some("sets")).unwrap(), Report::Sets);

        let err = parse_report(Some("get_matrix_data")).unwrap_err();
        assert!(err.to_string().contains("expected 'matrix' or 'sets'"));
    }

    #[test]
    fn test_split_list_trims_and_drops_empty() {
        assert_eq!(
            split_list(" Algebra, ,Geometry ,"),
            vec!["Algebra".to_string(), "Geometry".to_string()]
        );
    }

    #[test]
    fn test_parse_difficulties() {
        assert_eq!(
            parse_difficulties("easy, Very Hard").unwrap(),
            vec![Difficulty::Easy, Difficulty::VeryHard]
        );
        assert!(parse_difficulties("easy,impossible").is_err());
    }
}
