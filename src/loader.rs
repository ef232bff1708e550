use crate::error::Result;
use crate::github::client::GitHubClient;
use crate::github::types::RepoCard;
use crate::pins;
use std::path::Path;

#[derive(Debug)]
pub struct PortfolioData {
    pub repos: Vec<RepoCard>,
    pub pins: Vec<String>,
    pub rate_limit: Option<u32>,
}

/// One full portfolio load. Repositories and pins are fetched
/// concurrently; a repository failure aborts the load, a pin failure
/// is already absorbed into an empty list by `load_pins`.
pub async fn load_portfolio(client: &GitHubClient, pins_path: &Path) -> Result<PortfolioData> {
    let (repos, pins) = tokio::join!(client.fetch_user_repos(), pins::load_pins(pins_path));
    let repos = repos?;
    let rate_limit = client.rate_limit().await;

    tracing::info!(
        user = %client.username(),
        repos = repos.len(),
        pins = pins.len(),
        "portfolio loaded"
    );

    Ok(PortfolioData {
        repos,
        pins,
        rate_limit,
    })
}
