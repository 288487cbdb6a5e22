use serde::{Deserialize, Serialize};

// ============================================================================
// Employee Course API Types
// ============================================================================

/// Raw per-course progress entry as reported by the employee-courses endpoint
///
/// The two score fields are optional at the wire level: upstream omits them
/// for courses where no quiz attempt or progress snapshot was recorded.
/// Ingestion rejects records missing either one.
#[derive(Debug, Clone, Deserialize)]
pub struct CourseProgressRecord {
    pub course_id: String,
    pub course_title: String,
    pub course_tag: String,
    #[serde(rename = "modulesCompleted", default)]
    pub modules_completed: u32,
    #[serde(rename = "totalModules", default)]
    pub total_modules: u32,
    #[serde(default)]
    pub completion_percentage: Option<f64>,
    #[serde(default)]
    pub quiz_score: Option<f64>,
}

/// Raw employee record from the admin employee-courses endpoint
#[derive(Debug, Clone, Deserialize)]
pub struct EmployeeRecord {
    pub employee_id: String,
    pub name: String,
    #[serde(default)]
    pub designation: String,
    #[serde(rename = "performanceScore", default)]
    pub performance_score: f64,
    #[serde(default)]
    pub courses: Vec<CourseProgressRecord>,
}

// ============================================================================
// Engine Types
// ============================================================================

/// One flattened (user, course) outcome
///
/// The same (user, course) pair may recur when upstream reports duplicate
/// entries; aggregation in the feature builder averages them rather than
/// assuming uniqueness.
#[derive(Debug, Clone)]
pub struct Observation {
    pub user_id: String,
    pub user_name: String,
    pub designation: String,
    pub course_id: String,
    pub course_title: String,
    pub course_tag: String,
    pub modules_completed: u32,
    pub total_modules: u32,
    pub completion_percentage: f64,
    /// completion_percentage * quiz_score
    pub raw_score: f64,
    /// Batch-relative rescaling of raw_score to [0, 1], set by normalization
    pub normalized_score: Option<f64>,
    pub performance_score: f64,
}

/// A course proposed to the query user
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RecommendationItem {
    pub course_id: String,
    pub course_title: String,
}

/// Response body for the recommendation endpoint
///
/// Returns an explicit message instead of an empty array when there is
/// nothing to recommend, so clients can distinguish "no data" from
/// "zero items".
#[derive(Debug, Serialize)]
#[serde(untagged)]
pub enum RecommendationResponse {
    Items(Vec<RecommendationItem>),
    Message { message: String },
}
