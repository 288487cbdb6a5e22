use crate::{
    error::{AppError, AppResult},
    models::{EmployeeRecord, Observation},
};

/// Flattens employee records into one observation per (employee, course)
///
/// The raw score multiplies completion percentage by quiz score so that a
/// course finished with a weak quiz does not dominate a partially finished
/// course with a strong one. No filtering or deduplication happens here;
/// an employee with zero courses simply contributes zero observations.
pub fn ingest(employees: &[EmployeeRecord]) -> AppResult<Vec<Observation>> {
    let mut observations = Vec::new();

    for employee in employees {
        for course in &employee.courses {
            let completion_percentage = course.completion_percentage.ok_or_else(|| {
                AppError::DataFormat(format!(
                    "missing completion_percentage for employee {} on course {}",
                    employee.employee_id, course.course_id
                ))
            })?;
            let quiz_score = course.quiz_score.ok_or_else(|| {
                AppError::DataFormat(format!(
                    "missing quiz_score for employee {} on course {}",
                    employee.employee_id, course.course_id
                ))
            })?;

            observations.push(Observation {
                user_id: employee.employee_id.clone(),
                user_name: employee.name.clone(),
                designation: employee.designation.clone(),
                course_id: course.course_id.clone(),
                course_title: course.course_title.clone(),
                course_tag: course.course_tag.clone(),
                modules_completed: course.modules_completed,
                total_modules: course.total_modules,
                completion_percentage,
                raw_score: completion_percentage * quiz_score,
                normalized_score: None,
                performance_score: employee.performance_score,
            });
        }
    }

    Ok(observations)
}
