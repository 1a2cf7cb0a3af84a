use anyhow::Result;
use log::{error, info, warn};
use std::io::{self, BufRead};
use std::sync::mpsc::{self, Receiver, RecvTimeoutError};
use std::thread;
use std::time::Instant;

mod commands;
mod game;
mod output;

use crate::commands::Flow;
use crate::game::catalog::Catalog;
use crate::game::clock::Clock;
use crate::game::settings::Settings;
use crate::game::Game;
use crate::output::terminal::TerminalOutput;

fn spawn_input_reader() -> Receiver<String> {
    let (sender, receiver) = mpsc::channel();
    thread::spawn(move || {
        let stdin = io::stdin();
        for line in stdin.lock().lines() {
            match line {
                Ok(line) => {
                    if sender.send(line).is_err() {
                        break;
                    }
                }
                Err(e) => {
                    error!("Could not read input: {}", e);
                    break;
                }
            }
        }
    });
    receiver
}

fn run() -> Result<()> {
    let settings = Settings::from_env()?;
    info!("Loading quizzes from {}", settings.quiz_dir.display());
    let catalog = Catalog::open(&settings.quiz_dir)?;
    if catalog.get_topics().is_empty() {
        warn!("No quizzes found in {}", settings.quiz_dir.display());
    }

    let mut game = Game::new(
        catalog,
        settings.quiz.clone(),
        Clock::System,
        TerminalOutput::new(),
    );
    game.list_topics();
    game.help();

    let input = spawn_input_reader();
    let mut last_tick = Instant::now();
    loop {
        match input.recv_timeout(settings.tick_interval) {
            Ok(line) => {
                if commands::handle_line(&mut game, &line) == Flow::Quit {
                    break;
                }
            }
            Err(RecvTimeoutError::Timeout) => (),
            Err(RecvTimeoutError::Disconnected) => break,
        }
        let now = Instant::now();
        game.tick(now.duration_since(last_tick));
        last_tick = now;
    }

    info!("Goodbye!");
    Ok(())
}

fn main() {
    dotenv::dotenv().ok();
    pretty_env_logger::init();

    if let Err(e) = run() {
        error!("{:#}", e);
        eprintln!("{:#}", e);
        std::process::exit(1);
    }
}
