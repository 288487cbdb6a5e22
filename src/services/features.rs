use std::collections::BTreeMap;

use crate::{
    error::{AppError, AppResult},
    models::Observation,
};

/// Dense user×course table of normalized scores
///
/// Rows are user_ids and columns are course_titles, both held in sorted
/// order so the same observation set always produces the same matrix
/// regardless of input order. A cell of 0.0 means "has not taken", not
/// "scored worst"; similarity is therefore biased toward co-absence, a
/// known property of the model.
#[derive(Debug, Clone, PartialEq)]
pub struct FeatureMatrix {
    users: Vec<String>,
    courses: Vec<String>,
    rows: Vec<Vec<f64>>,
}

impl FeatureMatrix {
    /// Ordered row index of user_ids
    pub fn user_ids(&self) -> &[String] {
        &self.users
    }

    /// Ordered column index of course_titles
    pub fn course_titles(&self) -> &[String] {
        &self.courses
    }

    /// Row position of a user, if present
    pub fn user_index(&self, user_id: &str) -> Option<usize> {
        self.users.binary_search_by(|u| u.as_str().cmp(user_id)).ok()
    }

    /// Feature row at a given position
    pub fn row(&self, index: usize) -> &[f64] {
        &self.rows[index]
    }
}

/// Rescales raw scores to [0, 1] against the batch-wide min and max
///
/// Normalization is batch-relative: 1.0 means "best outcome in this fetch",
/// not an absolute measure. A batch where every raw score is identical
/// (including a singleton batch) has no defined rescaling and is rejected
/// rather than allowed to divide by zero.
pub fn normalize(mut observations: Vec<Observation>) -> AppResult<Vec<Observation>> {
    let raw_min = observations
        .iter()
        .map(|o| o.raw_score)
        .fold(f64::INFINITY, f64::min);
    let raw_max = observations
        .iter()
        .map(|o| o.raw_score)
        .fold(f64::NEG_INFINITY, f64::max);

    if observations.is_empty() || raw_max == raw_min {
        return Err(AppError::DegenerateInput(format!(
            "cannot normalize {} observation(s) with uniform raw score",
            observations.len()
        )));
    }

    let range = raw_max - raw_min;
    for observation in &mut observations {
        observation.normalized_score = Some((observation.raw_score - raw_min) / range);
    }

    Ok(observations)
}

/// Aggregates normalized observations into the dense user×course matrix
///
/// Duplicate (user, course) observations collapse to their mean normalized
/// score; cells with no observation default to 0.0.
pub fn build_matrix(observations: &[Observation]) -> FeatureMatrix {
    // Mean per (user, course_id, title) first, so duplicate upstream rows
    // collapse deterministically before the pivot.
    let mut groups: BTreeMap<(&str, &str, &str), (f64, usize)> = BTreeMap::new();
    for obs in observations {
        let key = (
            obs.user_id.as_str(),
            obs.course_id.as_str(),
            obs.course_title.as_str(),
        );
        let entry = groups.entry(key).or_insert((0.0, 0));
        entry.0 += obs.normalized_score.unwrap_or_default();
        entry.1 += 1;
    }

    let mut cells: BTreeMap<&str, BTreeMap<&str, (f64, usize)>> = BTreeMap::new();
    for ((user_id, _course_id, course_title), (sum, count)) in groups {
        let entry = cells
            .entry(user_id)
            .or_default()
            .entry(course_title)
            .or_insert((0.0, 0));
        entry.0 += sum / count as f64;
        entry.1 += 1;
    }

    let courses: Vec<String> = {
        let mut titles: Vec<&str> = cells
            .values()
            .flat_map(|row| row.keys().copied())
            .collect();
        titles.sort_unstable();
        titles.dedup();
        titles.into_iter().map(String::from).collect()
    };

    let users: Vec<String> = cells.keys().map(|u| u.to_string()).collect();
    let rows: Vec<Vec<f64>> = cells
        .values()
        .map(|row| {
            courses
                .iter()
                .map(|title| {
                    row.get(title.as_str())
                        .map(|(sum, count)| sum / *count as f64)
                        .unwrap_or(0.0)
                })
                .collect()
        })
        .collect();

    FeatureMatrix { users, courses, rows }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn observation(user: &str, course: &str, raw: f64) -> Observation {
        Observation {
            user_id: user.to_string(),
            user_name: user.to_string(),
            designation: String::new(),
            course_id: course.to_string(),
            course_title: format!("Title {}", course),
            course_tag: String::new(),
            modules_completed: 0,
            total_modules: 0,
            completion_percentage: 0.0,
            raw_score: raw,
            normalized_score: None,
            performance_score: 0.0,
        }
    }

    #[test]
    fn test_normalize_range_and_endpoints() {
        let observations = vec![
            observation("u1", "c1", 10.0),
            observation("u1", "c2", 40.0),
            observation("u2", "c1", 70.0),
        ];

        let normalized = normalize(observations).unwrap();
        let scores: Vec<f64> = normalized
            .iter()
            .map(|o| o.normalized_score.unwrap())
            .collect();

        assert!(scores.iter().all(|s| (0.0..=1.0).contains(s)));
        assert_eq!(scores.iter().filter(|s| **s == 0.0).count(), 1);
        assert!(scores.iter().any(|s| *s == 1.0));
        assert_eq!(scores[1], 0.5);
    }

    #[test]
    fn test_normalize_rejects_uniform_scores() {
        let observations = vec![
            observation("u1", "c1", 5.0),
            observation("u2", "c2", 5.0),
        ];

        let result = normalize(observations);
        assert!(matches!(result, Err(AppError::DegenerateInput(_))));
    }

    #[test]
    fn test_normalize_rejects_singleton_batch() {
        let result = normalize(vec![observation("u1", "c1", 42.0)]);
        assert!(matches!(result, Err(AppError::DegenerateInput(_))));
    }

    #[test]
    fn test_normalize_rejects_empty_batch() {
        let result = normalize(vec![]);
        assert!(matches!(result, Err(AppError::DegenerateInput(_))));
    }

    #[test]
    fn test_matrix_shape_and_defaults() {
        let observations = normalize(vec![
            observation("u1", "c1", 10.0),
            observation("u2", "c1", 20.0),
            observation("u2", "c2", 30.0),
        ])
        .unwrap();

        let matrix = build_matrix(&observations);
        assert_eq!(matrix.user_ids(), ["u1", "u2"]);
        assert_eq!(matrix.course_titles(), ["Title c1", "Title c2"]);
        // u1 never took c2, so that cell defaults to 0
        assert_eq!(matrix.row(0)[1], 0.0);
        assert_eq!(matrix.row(1)[1], 1.0);
    }

    #[test]
    fn test_duplicate_observations_average() {
        let observations = normalize(vec![
            observation("u1", "c1", 0.0),
            observation("u1", "c1", 100.0),
            observation("u2", "c2", 50.0),
        ])
        .unwrap();

        let matrix = build_matrix(&observations);
        let row = matrix.user_index("u1").map(|i| matrix.row(i)).unwrap();
        // mean of 0.0 and 1.0
        assert_eq!(row[0], 0.5);
    }

    #[test]
    fn test_aggregation_is_order_independent() {
        let mut observations = vec![
            observation("u2", "c2", 30.0),
            observation("u1", "c1", 10.0),
            observation("u2", "c1", 20.0),
            observation("u1", "c1", 15.0),
        ];

        let forward = build_matrix(&normalize(observations.clone()).unwrap());
        observations.reverse();
        let reversed = build_matrix(&normalize(observations).unwrap());

        assert_eq!(forward, reversed);
    }

    #[test]
    fn test_user_index_lookup() {
        let observations = normalize(vec![
            observation("alice", "c1", 1.0),
            observation("bob", "c1", 2.0),
        ])
        .unwrap();

        let matrix = build_matrix(&observations);
        assert_eq!(matrix.user_index("alice"), Some(0));
        assert_eq!(matrix.user_index("bob"), Some(1));
        assert_eq!(matrix.user_index("carol"), None);
    }
}
