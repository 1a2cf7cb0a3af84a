use anyhow::*;
use itertools::Itertools;
use lazy_static::lazy_static;
use log::warn;
use regex::Regex;
use std::fs;
use std::path::{Path, PathBuf};
use unidecode::unidecode;


const QUIZ_EXTENSIONS: [&str; 2] = ["json", "csv"];

lazy_static! {
    static ref FORBIDDEN_SLUG_CHARACTERS_REGEX: Regex = Regex::new("[^a-z0-9]+").unwrap();
    static ref WORD_SEPARATORS_REGEX: Regex = Regex::new("[-_\\s]+").unwrap();
}

pub fn sanitize_slug(name: &str) -> Option<String> {
    let name = unidecode(name).to_lowercase();
    let slug: String = FORBIDDEN_SLUG_CHARACTERS_REGEX
        .replace_all(&name, "-")
        .trim_matches('-')
        .into();
    if slug.is_empty() {
        None
    } else {
        Some(slug)
    }
}

fn title_from_stem(stem: &str) -> String {
    WORD_SEPARATORS_REGEX
        .split(stem.trim())
        .filter(|word| !word.is_empty())
        .map(|word| {
            let mut chars = word.chars();
            match chars.next() {
                Some(first) => first.to_uppercase().chain(chars).collect::<String>(),
                None => String::new(),
            }
        })
        .join(" ")
}

#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Topic {
    pub slug: String,
    pub title: String,
    pub path: PathBuf,
}

impl Topic {
    fn from_path(path: &Path) -> Option<Topic> {
        let extension = path.extension()?.to_str()?.to_lowercase();
        if !QUIZ_EXTENSIONS.contains(&extension.as_str()) {
            return None;
        }
        let stem = path.file_stem()?.to_str()?;
        Some(Topic {
            slug: sanitize_slug(stem)?,
            title: title_from_stem(stem),
            path: path.to_path_buf(),
        })
    }
}

/// The quiz topics available in a directory, one question bank file per topic.
#[derive(Clone, Debug, Default)]
pub struct Catalog {
    topics: Vec<Topic>,
}

impl Catalog {
    pub fn new(topics: Vec<Topic>) -> Self {
        let topics = topics
            .into_iter()
            .sorted_by(|a, b| a.slug.cmp(&b.slug).then_with(|| a.path.cmp(&b.path)))
            .coalesce(|a, b| {
                if a.slug == b.slug {
                    warn!(
                        "Ignoring {} because {} has the same topic name",
                        b.path.display(),
                        a.path.display()
                    );
                    std::result::Result::Ok(a)
                } else {
                    std::result::Result::Err((a, b))
                }
            })
            .collect();
        Catalog { topics }
    }

    pub fn open(directory: &Path) -> Result<Catalog> {
        let entries = fs::read_dir(directory)
            .with_context(|| format!("Could not read quiz directory {}", directory.display()))?;
        let mut topics = Vec::new();
        for entry in entries {
            let path = entry?.path();
            if !path.is_file() {
                continue;
            }
            match Topic::from_path(&path) {
                Some(topic) => topics.push(topic),
                None => warn!("Skipping {}: not a quiz file", path.display()),
            }
        }
        Ok(Catalog::new(topics))
    }

    pub fn get_topics(&self) -> &Vec<Topic> {
        &self.topics
    }

    pub fn find(&self, name: &str) -> Result<&Topic> {
        let slug = sanitize_slug(name).context("Invalid quiz topic")?;
        self.topics
            .iter()
            .find(|topic| topic.slug == slug)
            .with_context(|| format!("Unknown quiz topic `{}`", name.trim()))
    }
}
