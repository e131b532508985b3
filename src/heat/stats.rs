use super::aggregate::Tally;
use crate::model::CommitterCount;

pub const TOP_COMMITTERS: usize = 5;

/// The `n` authors with the most counted events, ties broken by name.
pub fn top_committers(tally: &Tally, n: usize) -> Vec<CommitterCount> {
    let mut authors: Vec<_> = tally.authors.iter().collect();
    authors.sort_by(|a, b| b.1.cmp(a.1).then_with(|| a.0.cmp(b.0)));
    authors
        .into_iter()
        .take(n)
        .map(|(author, commits)| CommitterCount {
            author: author.clone(),
            commits: *commits,
        })
        .collect()
}
