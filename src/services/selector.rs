use std::collections::{BTreeSet, HashSet};

use crate::models::{Observation, RecommendationItem};

/// Courses returned per recommendation by default
pub const DEFAULT_RECOMMENDATION_LIMIT: usize = 3;

/// Picks candidate courses from the neighbor set
///
/// Candidates are the union of (course_id, course_title) pairs taken by any
/// neighbor, minus the pairs the query user has already taken, deduplicated
/// and ordered by ascending course_id for determinism, then truncated to
/// `limit`.
///
/// When the filtered set is empty (the query user already took everything
/// their peers took), the unfiltered neighbor union is returned instead:
/// "nothing new, here is what your peers studied" is a product decision,
/// not an error. Fewer available courses than `limit` yields a short list,
/// never padding.
pub fn select(
    observations: &[Observation],
    neighbor_ids: &[String],
    query_user_id: &str,
    limit: usize,
) -> Vec<RecommendationItem> {
    let neighbor_set: HashSet<&str> = neighbor_ids.iter().map(String::as_str).collect();

    let candidates: BTreeSet<(&str, &str)> = observations
        .iter()
        .filter(|obs| neighbor_set.contains(obs.user_id.as_str()))
        .map(|obs| (obs.course_id.as_str(), obs.course_title.as_str()))
        .collect();

    let taken: BTreeSet<(&str, &str)> = observations
        .iter()
        .filter(|obs| obs.user_id == query_user_id)
        .map(|obs| (obs.course_id.as_str(), obs.course_title.as_str()))
        .collect();

    let fresh: Vec<&(&str, &str)> = candidates.difference(&taken).collect();

    let pool: Vec<(&str, &str)> = if fresh.is_empty() {
        candidates.iter().copied().collect()
    } else {
        fresh.into_iter().copied().collect()
    };

    pool.into_iter()
        .take(limit)
        .map(|(course_id, course_title)| RecommendationItem {
            course_id: course_id.to_string(),
            course_title: course_title.to_string(),
        })
        .collect()
}
