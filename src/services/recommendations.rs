use crate::{
    error::AppResult,
    models::{EmployeeRecord, RecommendationItem},
    services::{features, ingest, selector, similarity},
};

/// Runs the full recommendation pipeline for one query user
///
/// ingest → normalize → build matrix → rank neighbors → select candidates,
/// all on this request's copy of the fetched data. The matrix is rebuilt
/// from scratch every call and discarded afterwards; keeping no model state
/// between requests means a change in the upstream source is picked up on
/// the very next request.
pub fn recommend_courses(
    employees: &[EmployeeRecord],
    user_id: &str,
    neighbor_count: usize,
    limit: usize,
) -> AppResult<Vec<RecommendationItem>> {
    let observations = ingest::ingest(employees)?;
    let observations = features::normalize(observations)?;
    let matrix = features::build_matrix(&observations);

    tracing::debug!(
        users = matrix.user_ids().len(),
        courses = matrix.course_titles().len(),
        observations = observations.len(),
        "Feature matrix built"
    );

    let neighbors = similarity::rank_neighbors(&matrix, user_id, neighbor_count)?;
    let recommendations = selector::select(&observations, &neighbors, user_id, limit);

    tracing::info!(
        user_id = %user_id,
        neighbors = neighbors.len(),
        recommendations = recommendations.len(),
        "Recommendation pipeline completed"
    );

    Ok(recommendations)
}
