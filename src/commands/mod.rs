use anyhow::*;
use lazy_static::lazy_static;
use log::debug;
use regex::Regex;

use crate::game::quiz::definition::Label;
use crate::game::Game;
use crate::output::GameOutput;


lazy_static! {
    static ref COMMAND_REGEX: Regex = Regex::new("^\\s*(\\S+)\\s*(.*?)\\s*$").unwrap();
    static ref LABEL_REGEX: Regex = Regex::new("^[a-z]$").unwrap();
}

#[derive(Clone, Debug, Eq, PartialEq)]
pub enum Command {
    Celebrate,
    Help,
    Leave,
    List,
    Quit,
    Review,
    Select(Label),
    Start(String),
    Status,
    Submit,
}

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum Flow {
    Continue,
    Quit,
}

fn parse_label(argument: &str) -> Result<Label> {
    let label = Label::new(argument);
    if LABEL_REGEX.is_match(label.as_str()) {
        Ok(label)
    } else {
        Err(anyhow!("`{}` is not an answer, use a letter such as `a`", argument))
    }
}

pub fn parse(line: &str) -> Result<Option<Command>> {
    let captures = match COMMAND_REGEX.captures(line) {
        Some(captures) => captures,
        None => return Ok(None),
    };
    let name = captures[1].to_lowercase();
    let argument = &captures[2];

    let command = match name.as_str() {
        "celebrate" | "congratulations" => Command::Celebrate,
        "help" | "?" => Command::Help,
        "leave" | "menu" => Command::Leave,
        "list" | "quizzes" => Command::List,
        "quit" | "exit" => Command::Quit,
        "review" => Command::Review,
        "status" | "progress" => Command::Status,
        "submit" => Command::Submit,
        "pick" | "select" => Command::Select(parse_label(argument)?),
        "start" => {
            if argument.is_empty() {
                return Err(anyhow!("Which quiz? Use `list` to see them all"));
            }
            Command::Start(argument.to_owned())
        }
        other if argument.is_empty() && LABEL_REGEX.is_match(other) => {
            Command::Select(Label::new(other))
        }
        other => return Err(anyhow!("Unknown command `{}`, use `help` to see commands", other)),
    };
    Ok(Some(command))
}

pub fn execute<O: GameOutput>(game: &mut Game<O>, command: Command) -> Result<Flow> {
    match command {
        Command::Celebrate => game.celebrate()?,
        Command::Help => game.help(),
        Command::Leave => game.leave()?,
        Command::List => game.list_topics(),
        Command::Quit => return Ok(Flow::Quit),
        Command::Review => game.review()?,
        Command::Select(label) => game.select(label)?,
        Command::Start(topic) => game.begin(&topic)?,
        Command::Status => game.status()?,
        Command::Submit => game.submit()?,
    };
    Ok(Flow::Continue)
}

/// Runs one line of user input. Failures are reported to the user, never fatal.
pub fn handle_line<O: GameOutput>(game: &mut Game<O>, line: &str) -> Flow {
    let result = || -> Result<Flow> {
        match parse(line)? {
            Some(command) => execute(game, command),
            None => Ok(Flow::Continue),
        }
    }();

    result.unwrap_or_else(|e| {
        debug!("{:#}", e);
        game.notify(&e);
        Flow::Continue
    })
}
