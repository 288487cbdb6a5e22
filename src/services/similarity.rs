use std::cmp::Ordering;

use crate::{
    error::{AppError, AppResult},
    services::features::FeatureMatrix,
};

/// Peers consulted per recommendation by default
///
/// Chosen as "six nearest including the query user" minus the user
/// themselves, who is always filtered out.
pub const DEFAULT_NEIGHBOR_COUNT: usize = 5;

/// Cosine similarity between two feature rows
///
/// A zero-norm row (user with no normalized signal) compares as 0.0 instead
/// of dividing by zero.
fn cosine_similarity(a: &[f64], b: &[f64]) -> f64 {
    let dot: f64 = a.iter().zip(b).map(|(x, y)| x * y).sum();
    let norm_a = a.iter().map(|x| x * x).sum::<f64>().sqrt();
    let norm_b = b.iter().map(|x| x * x).sum::<f64>().sqrt();

    if norm_a > 0.0 && norm_b > 0.0 {
        dot / (norm_a * norm_b)
    } else {
        0.0
    }
}

/// Ranks the query user's nearest peers in feature space
///
/// Returns up to `k` user_ids ordered by descending cosine similarity, with
/// ties broken by row-index order. The query user is excluded by explicit
/// filtering rather than relying on self-similarity sorting first.
///
/// A query user absent from the matrix is an expected outcome (a brand-new
/// employee with no course history) and surfaces as `UnknownUser`.
pub fn rank_neighbors(
    matrix: &FeatureMatrix,
    query_user_id: &str,
    k: usize,
) -> AppResult<Vec<String>> {
    let query_index = matrix.user_index(query_user_id).ok_or_else(|| {
        AppError::UnknownUser(format!("no course history for user {}", query_user_id))
    })?;
    let query_row = matrix.row(query_index);

    let mut scored: Vec<(usize, f64)> = matrix
        .user_ids()
        .iter()
        .enumerate()
        .filter(|(index, _)| *index != query_index)
        .map(|(index, _)| (index, cosine_similarity(query_row, matrix.row(index))))
        .collect();

    scored.sort_by(|a, b| {
        b.1.partial_cmp(&a.1)
            .unwrap_or(Ordering::Equal)
            .then(a.0.cmp(&b.0))
    });

    Ok(scored
        .into_iter()
        .take(k)
        .map(|(index, _)| matrix.user_ids()[index].clone())
        .collect())
}
