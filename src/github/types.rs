use chrono::{DateTime, Utc};
use octocrab::models::Repository;

/// Snapshot of one repository, reduced to what a card needs.
/// Missing upstream fields collapse to zero/false/epoch here so the
/// rest of the crate never sees a partially-typed repository.
#[derive(Clone, Debug, PartialEq)]
pub struct RepoCard {
    pub name: String,
    pub description: Option<String>,
    pub language: Option<String>,
    pub stars: u32,
    pub pushed_at: DateTime<Utc>,
    pub homepage: Option<String>,
    pub html_url: String,
    pub fork: bool,
    pub archived: bool,
}

impl RepoCard {
    pub fn from_repo(repo: &Repository) -> Self {
        Self {
            name: repo.name.clone(),
            description: repo.description.clone().filter(|d| !d.is_empty()),
            language: repo
                .language
                .as_ref()
                .and_then(|v| v.as_str())
                .map(String::from),
            stars: repo.stargazers_count.unwrap_or(0),
            pushed_at: repo.pushed_at.unwrap_or_default(),
            homepage: repo.homepage.clone().filter(|h| !h.is_empty()),
            html_url: repo
                .html_url
                .as_ref()
                .map(|u| u.to_string())
                .unwrap_or_default(),
            fork: repo.fork.unwrap_or(false),
            archived: repo.archived.unwrap_or(false),
        }
    }

    pub fn pushed_date(&self) -> String {
        self.pushed_at.format("%Y-%m-%d").to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn missing_fields_default() {
        let repo: Repository =
            serde_json::from_value(json!({ "id": 1, "name": "bare", "url": "https://api.github.com/repos/me/bare" })).unwrap();
        let card = RepoCard::from_repo(&repo);
        assert_eq!(card.name, "bare");
        assert_eq!(card.stars, 0);
        assert!(!card.fork);
        assert!(!card.archived);
        assert!(card.description.is_none());
        assert!(card.language.is_none());
    }

    #[test]
    fn populated_fields_carry_over() {
        let repo: Repository = serde_json::from_value(json!({
            "id": 2,
            "name": "folio",
            "url": "https://api.github.com/repos/me/folio",
            "description": "portfolio viewer",
            "language": "Rust",
            "stargazers_count": 42,
            "pushed_at": "2026-01-03T10:00:00Z",
            "homepage": "https://example.dev",
            "html_url": "https://github.com/me/folio",
            "fork": true,
            "archived": true
        }))
        .unwrap();
        let card = RepoCard::from_repo(&repo);
        assert_eq!(card.stars, 42);
        assert_eq!(card.language.as_deref(), Some("Rust"));
        assert_eq!(card.homepage.as_deref(), Some("https://example.dev"));
        assert_eq!(card.html_url, "https://github.com/me/folio");
        assert!(card.fork);
        assert!(card.archived);
        assert_eq!(card.pushed_date(), "2026-01-03");
    }

    #[test]
    fn empty_strings_become_none() {
        let repo: Repository = serde_json::from_value(json!({
            "id": 3,
            "name": "quiet",
            "url": "https://api.github.com/repos/me/quiet",
            "description": "",
            "homepage": ""
        }))
        .unwrap();
        let card = RepoCard::from_repo(&repo);
        assert!(card.description.is_none());
        assert!(card.homepage.is_none());
    }
}
