use crate::error::{GitfolioError, Result};
use crate::github::types::RepoCard;
use octocrab::Octocrab;

const MAX_REPOS: usize = 300;

#[derive(Clone)]
pub struct GitHubClient {
    octo: Octocrab,
    username: String,
}

impl GitHubClient {
    pub fn new(username: &str, token: Option<&str>) -> Result<Self> {
        let mut builder = Octocrab::builder();
        if let Some(token) = token.filter(|t| !t.is_empty()) {
            builder = builder.personal_token(token.to_string());
        }
        let octo = builder
            .build()
            .map_err(|e| GitfolioError::GitHub(e.to_string()))?;

        Ok(Self {
            octo,
            username: username.to_string(),
        })
    }

    pub fn username(&self) -> &str {
        &self.username
    }

    pub async fn fetch_user_repos(&self) -> Result<Vec<RepoCard>> {
        let mut cards = Vec::new();
        let mut page = 1u32;

        loop {
            let result = self
                .octo
                .users(&*self.username)
                .repos()
                .per_page(100)
                .page(page)
                .send()
                .await
                .map_err(map_api_error)?;

            if result.items.is_empty() {
                break;
            }

            for repo in &result.items {
                cards.push(RepoCard::from_repo(repo));
                if cards.len() >= MAX_REPOS {
                    break;
                }
            }

            if cards.len() >= MAX_REPOS || result.next.is_none() {
                break;
            }
            page += 1;
        }

        tracing::debug!(user = %self.username, count = cards.len(), "fetched repositories");
        Ok(cards)
    }

    pub async fn rate_limit(&self) -> Option<u32> {
        self.octo
            .ratelimit()
            .get()
            .await
            .ok()
            .map(|r| r.rate.remaining as u32)
    }
}

fn map_api_error(e: octocrab::Error) -> GitfolioError {
    if let octocrab::Error::GitHub { source, .. } = &e {
        if source.status_code.as_u16() == 403
            && source.message.to_lowercase().contains("rate limit")
        {
            return GitfolioError::RateLimited(source.message.clone());
        }
    }
    GitfolioError::GitHub(e.to_string())
}
