use crate::github::types::RepoCard;
use itertools::Itertools;
use std::collections::HashMap;

/// Display order for the card grid: pinned repositories first (in pin
/// order), then the remaining ones by stars and recency. `pinned` is
/// the length of the pinned prefix of `cards`.
#[derive(Debug, Default)]
pub struct Portfolio {
    pub cards: Vec<RepoCard>,
    pub pinned: usize,
}

/// Pin matching is case-insensitive. A pin naming no fetched
/// repository is skipped, as is a duplicate pin. Forked and archived
/// repositories are dropped from the non-pinned remainder but kept
/// when pinned explicitly. Truncation to a display limit is the
/// caller's business.
pub fn prioritize(repos: Vec<RepoCard>, pins: &[String]) -> Portfolio {
    let by_name: HashMap<String, usize> = repos
        .iter()
        .enumerate()
        .map(|(idx, repo)| (repo.name.to_lowercase(), idx))
        .collect();

    let mut picked: Vec<usize> = Vec::new();
    for pin in pins {
        match by_name.get(&pin.to_lowercase()) {
            Some(&idx) if !picked.contains(&idx) => picked.push(idx),
            _ => {}
        }
    }
    let pinned = picked.len();

    let rest = (0..repos.len())
        .filter(|idx| !picked.contains(idx))
        .filter(|&idx| !repos[idx].fork && !repos[idx].archived)
        .sorted_by(|&a, &b| {
            repos[b]
                .stars
                .cmp(&repos[a].stars)
                .then_with(|| repos[b].pushed_at.cmp(&repos[a].pushed_at))
        });
    picked.extend(rest);

    let mut slots: Vec<Option<RepoCard>> = repos.into_iter().map(Some).collect();
    let cards = picked
        .into_iter()
        .filter_map(|idx| slots[idx].take())
        .collect();

    Portfolio { cards, pinned }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::*;

    fn names(portfolio: &Portfolio) -> Vec<&str> {
        portfolio.cards.iter().map(|c| c.name.as_str()).collect()
    }

    fn pin_list(pins: &[&str]) -> Vec<String> {
        pins.iter().map(|p| p.to_string()).collect()
    }

    #[test]
    fn pinned_come_first_in_pin_order() {
        let repos = vec![
            make_card("alpha", 100, 1),
            make_card("beta", 5, 2),
            make_card("gamma", 50, 3),
        ];
        let out = prioritize(repos, &pin_list(&["beta", "gamma"]));
        assert_eq!(names(&out), vec!["beta", "gamma", "alpha"]);
        assert_eq!(out.pinned, 2);
    }

    #[test]
    fn remainder_sorted_by_stars_then_recency() {
        let repos = vec![
            make_card("old-popular", 10, 30),
            make_card("new-popular", 10, 1),
            make_card("unpopular", 2, 1),
        ];
        let out = prioritize(repos, &[]);
        assert_eq!(names(&out), vec!["new-popular", "old-popular", "unpopular"]);
        assert_eq!(out.pinned, 0);
    }

    #[test]
    fn forked_and_archived_excluded_from_remainder() {
        let repos = vec![
            make_card("a", 5, 1),
            make_card("b", 10, 1),
            make_flagged("c", 1, 1, true, false),
            make_flagged("d", 99, 1, false, true),
        ];
        let out = prioritize(repos, &[]);
        assert_eq!(names(&out), vec!["b", "a"]);
    }

    #[test]
    fn pin_overrides_fork_and_archive_exclusion() {
        let repos = vec![
            make_card("kept", 1, 1),
            make_flagged("old-fork", 0, 400, true, true),
        ];
        let out = prioritize(repos, &pin_list(&["old-fork"]));
        assert_eq!(names(&out), vec!["old-fork", "kept"]);
        assert_eq!(out.pinned, 1);
    }

    #[test]
    fn pin_matching_is_case_insensitive() {
        let repos = vec![make_card("foo", 1, 1), make_card("bar", 2, 1)];
        let out = prioritize(repos, &pin_list(&["FOO"]));
        assert_eq!(names(&out), vec!["foo", "bar"]);
        assert_eq!(out.pinned, 1);
    }

    #[test]
    fn unknown_pin_is_skipped() {
        let repos = vec![make_card("real", 1, 1)];
        let out = prioritize(repos, &pin_list(&["ghost", "real"]));
        assert_eq!(names(&out), vec!["real"]);
        assert_eq!(out.pinned, 1);
    }

    #[test]
    fn duplicate_pin_added_once() {
        let repos = vec![make_card("solo", 1, 1), make_card("other", 9, 1)];
        let out = prioritize(repos, &pin_list(&["solo", "Solo", "solo"]));
        assert_eq!(names(&out), vec!["solo", "other"]);
        assert_eq!(out.pinned, 1);
    }

    #[test]
    fn no_card_appears_twice() {
        let repos = vec![
            make_card("a", 3, 1),
            make_card("b", 2, 2),
            make_card("c", 1, 3),
        ];
        let out = prioritize(repos, &pin_list(&["c", "a"]));
        let mut seen = names(&out);
        seen.sort_unstable();
        seen.dedup();
        assert_eq!(out.cards.len(), 3);
        assert_eq!(seen.len(), 3);
    }

    #[test]
    fn empty_repos_give_empty_portfolio() {
        let out = prioritize(Vec::new(), &pin_list(&["anything"]));
        assert!(out.cards.is_empty());
        assert_eq!(out.pinned, 0);
    }

    // The worked example: b pinned, c excluded as a fork.
    #[test]
    fn pinned_scenario() {
        let repos = vec![
            make_card("a", 5, 1),
            make_card("b", 10, 1),
            make_flagged("c", 1, 1, true, false),
        ];
        let out = prioritize(repos, &pin_list(&["b"]));
        assert_eq!(names(&out), vec!["b", "a"]);
    }

    #[test]
    fn unpinned_scenario() {
        let repos = vec![
            make_card("a", 5, 1),
            make_card("b", 10, 1),
            make_flagged("c", 1, 1, true, false),
        ];
        let out = prioritize(repos, &[]);
        assert_eq!(names(&out), vec!["b", "a"]);
    }

    #[test]
    fn pin_order_beats_star_count() {
        let repos = vec![make_card("tiny", 0, 500), make_card("huge", 9000, 1)];
        let out = prioritize(repos, &pin_list(&["tiny"]));
        assert_eq!(names(&out), vec!["tiny", "huge"]);
    }
}
