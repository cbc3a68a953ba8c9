//! Interactive session: one action at a time, each run to completion.

use std::path::{Path, PathBuf};

use chrono::{DateTime, Local};
use inquire::{InquireError, MultiSelect, Select, Text};
use stateweather_core::{Config, Geocoder, HistoryRecord, Session, WeatherSource};

const GET_WEATHER: &str = "🔎 Get weather";
const CLEAR_RESULT: &str = "🧽 Clear result";
const SHOW_HISTORY: &str = "📜 Show history";
const DELETE_SELECTED: &str = "🗑 Delete selected";
const CLEAR_HISTORY: &str = "🧹 Clear history";
const SAVE_HISTORY: &str = "💾 Save history";
const EXIT: &str = "❌ Exit";

const ACTIONS: [&str; 7] = [
    GET_WEATHER,
    CLEAR_RESULT,
    SHOW_HISTORY,
    DELETE_SELECTED,
    CLEAR_HISTORY,
    SAVE_HISTORY,
    EXIT,
];

pub async fn run<G: Geocoder, W: WeatherSource>(
    session: &mut Session<G, W>,
    config: &Config,
) -> anyhow::Result<()> {
    println!("🌦 Smart Weather (India States Only)\n");
    let mut last_result: Option<String> = None;

    loop {
        if let Some(text) = &last_result {
            println!("\n{text}\n");
        }

        let action = match Select::new("What would you like to do?", ACTIONS.to_vec()).prompt() {
            Ok(action) => action,
            Err(InquireError::OperationCanceled | InquireError::OperationInterrupted) => break,
            Err(err) => return Err(err.into()),
        };

        match action {
            GET_WEATHER => {
                let Some(input) = optional(Text::new("Enter State Name:").prompt())? else {
                    continue;
                };

                match session.lookup(&input).await {
                    Ok(result) => last_result = Some(result.to_string()),
                    Err(err) => {
                        last_result = None;
                        eprintln!("\n{}: {}\n", err.kind().title(), err);
                    }
                }
            }
            CLEAR_RESULT => last_result = None,
            SHOW_HISTORY => println!("\n{}", render_table(session.history())),
            DELETE_SELECTED => delete_selected(session)?,
            CLEAR_HISTORY => {
                session.clear_history();
                println!("History cleared.");
            }
            SAVE_HISTORY => save_history(session, config)?,
            _ => break,
        }
    }

    Ok(())
}

fn delete_selected<G: Geocoder, W: WeatherSource>(
    session: &mut Session<G, W>,
) -> anyhow::Result<()> {
    if session.history().is_empty() {
        println!("History is empty.");
        return Ok(());
    }

    let rows: Vec<String> = session.history().iter().map(render_row).collect();
    let picked = optional(
        MultiSelect::new("Select rows to delete:", rows)
            .with_help_message("space to select, enter to confirm")
            .raw_prompt(),
    )?
    .unwrap_or_default();

    let positions: Vec<usize> = picked.iter().map(|option| option.index).collect();
    match session.delete(&positions) {
        Ok(removed) => println!("Deleted {removed} row(s)."),
        Err(err) => eprintln!("No Selection: {err}"),
    }

    Ok(())
}

fn save_history<G: Geocoder, W: WeatherSource>(
    session: &Session<G, W>,
    config: &Config,
) -> anyhow::Result<()> {
    let suggested = default_export_path(config.export_dir.as_deref(), Local::now());
    let suggested = suggested.display().to_string();

    let answer = optional(
        Text::new("Save history to:")
            .with_default(&suggested)
            .with_help_message("Esc to cancel")
            .prompt(),
    )?;

    let Some(path) = answer.map(|a| a.trim().to_string()).filter(|a| !a.is_empty()) else {
        println!("Save cancelled.");
        return Ok(());
    };

    let path = with_csv_extension(PathBuf::from(path));
    match session.export_history(&path) {
        Ok(()) => println!("Search history saved to {}", path.display()),
        Err(err) => eprintln!("IO Error: {err}"),
    }

    Ok(())
}

/// Esc means "never mind": map it to `None` instead of an error.
fn optional<T>(answer: Result<T, InquireError>) -> anyhow::Result<Option<T>> {
    match answer {
        Ok(value) => Ok(Some(value)),
        Err(InquireError::OperationCanceled) => Ok(None),
        Err(err) => Err(err.into()),
    }
}

fn default_export_path(dir: Option<&Path>, now: DateTime<Local>) -> PathBuf {
    let name = format!("weather_history_{}.csv", now.format("%Y%m%d_%H%M%S"));
    match dir {
        Some(dir) => dir.join(name),
        None => PathBuf::from(name),
    }
}

fn with_csv_extension(path: PathBuf) -> PathBuf {
    if path.extension().is_some() {
        path
    } else {
        path.with_extension("csv")
    }
}

fn render_row(record: &HistoryRecord) -> String {
    format!(
        "{:<20} {:<20} {:<10} {:<20} {}",
        record.state, record.capital, record.temperature, record.condition, record.time
    )
}

fn render_table(records: &[HistoryRecord]) -> String {
    let mut out = format!(
        "{:<4} {:<20} {:<20} {:<10} {:<20} {}",
        "#", "State", "Capital", "Temperature", "Condition", "Time"
    );

    if records.is_empty() {
        out.push_str("\n(no lookups yet)");
    }

    for (i, record) in records.iter().enumerate() {
        out.push_str(&format!("\n{:<4} {}", i + 1, render_row(record)));
    }

    out
}
