#![cfg(test)]

use crate::github::types::RepoCard;
use chrono::{Duration, Utc};

pub fn make_card(name: &str, stars: u32, pushed_days_ago: i64) -> RepoCard {
    RepoCard {
        name: name.to_string(),
        description: Some(format!("{name} does one thing")),
        language: Some("Rust".to_string()),
        stars,
        pushed_at: Utc::now() - Duration::days(pushed_days_ago),
        homepage: None,
        html_url: format!("https://github.com/someone/{name}"),
        fork: false,
        archived: false,
    }
}

pub fn make_flagged(
    name: &str,
    stars: u32,
    pushed_days_ago: i64,
    fork: bool,
    archived: bool,
) -> RepoCard {
    RepoCard {
        fork,
        archived,
        ..make_card(name, stars, pushed_days_ago)
    }
}
