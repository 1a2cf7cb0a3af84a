use anyhow::*;
use directories_next::BaseDirs;
use log::warn;
use std::env;
use std::fmt::Display;
use std::path::PathBuf;
use std::str::FromStr;
use std::time::Duration;

use crate::game::quiz::settings::{Settings as QuizSettings, Viewport};

const LOCAL_QUIZ_DIR: &str = "quizzes";

#[derive(Clone, Debug)]
pub struct Settings {
    pub quiz_dir: PathBuf,
    pub tick_interval: Duration,
    pub quiz: QuizSettings,
}

impl Settings {
    pub fn from_env() -> Result<Settings> {
        Settings::from_vars(|name| env::var(name).ok())
    }

    pub fn from_vars<F: Fn(&str) -> Option<String>>(lookup: F) -> Result<Settings> {
        let defaults = QuizSettings::default();
        let default_viewport = Viewport::default();

        let quiz_dir = match lookup("QUIZ_DIR") {
            Some(dir) if !dir.trim().is_empty() => PathBuf::from(dir.trim()),
            _ => default_quiz_dir()?,
        };

        let review_mode = match lookup("QUIZ_REVIEW_MODE") {
            Some(value) => parse_bool("QUIZ_REVIEW_MODE", &value)?,
            None => defaults.review_mode,
        };

        let advance_delay = parse_var::<u64, _>(&lookup, "QUIZ_ADVANCE_DELAY_MS")?
            .map(Duration::from_millis)
            .unwrap_or(defaults.advance_delay);
        let celebration_duration = parse_var::<u64, _>(&lookup, "QUIZ_CELEBRATION_SECS")?
            .map(Duration::from_secs)
            .unwrap_or(defaults.celebration_duration);
        let tick_interval = parse_var::<u64, _>(&lookup, "QUIZ_TICK_MS")?
            .map(Duration::from_millis)
            .unwrap_or_else(|| Duration::from_millis(100));
        if tick_interval == Duration::default() {
            return Err(anyhow!("QUIZ_TICK_MS must be greater than zero"));
        }

        let requested_viewport = Viewport {
            width: parse_var(&lookup, "COLUMNS")?.unwrap_or(default_viewport.width),
            height: parse_var(&lookup, "LINES")?.unwrap_or(default_viewport.height),
        };
        let viewport = requested_viewport.clamped();
        if viewport != requested_viewport {
            warn!(
                "Terminal size {}x{} is too large, using {}x{}",
                requested_viewport.width, requested_viewport.height, viewport.width, viewport.height
            );
        }

        Ok(Settings {
            quiz_dir,
            tick_interval,
            quiz: QuizSettings {
                review_mode,
                advance_delay,
                celebration_duration,
                viewport,
            },
        })
    }
}

fn default_quiz_dir() -> Result<PathBuf> {
    let local = PathBuf::from(LOCAL_QUIZ_DIR);
    if local.is_dir() {
        return Ok(local);
    }
    let mut dir = BaseDirs::new()
        .context("could not locate system directories")?
        .data_dir()
        .to_path_buf();
    dir.push("class-quiz");
    dir.push(LOCAL_QUIZ_DIR);
    Ok(dir)
}

fn parse_var<T, F>(lookup: &F, name: &str) -> Result<Option<T>>
where
    T: FromStr,
    T::Err: Display,
    F: Fn(&str) -> Option<String>,
{
    match lookup(name) {
        Some(value) => value
            .trim()
            .parse::<T>()
            .map(Some)
            .map_err(|e| anyhow!("Invalid value `{}` for {}: {}", value, name, e)),
        None => Ok(None),
    }
}

fn parse_bool(name: &str, value: &str) -> Result<bool> {
    match value.trim().to_lowercase().as_ref() {
        "true" | "1" | "yes" | "on" => Ok(true),
        "false" | "0" | "no" | "off" => Ok(false),
        other => Err(anyhow!(
            "Invalid value `{}` for {}: expected true or false",
            other,
            name
        )),
    }
}
