//! GitHub Actions build-matrix line emission.

use agp_matrix_core::tasks::{BASE_TEST_TASK, VerificationPlan};

use crate::{MatrixError, Result};

/// Marker prefix of the matrix output line, parsed by the workflow.
pub const MATRIX_OUTPUT_MARKER: &str = "::set-output name=matrix::";

/// The full ordered task-name list for a verification plan: the base test
/// task first, then the version-specific tasks in registry order.
#[must_use]
pub fn matrix_task_names(plan: &VerificationPlan) -> Vec<String> {
    let mut names = Vec::with_capacity(plan.tasks.len() + 1);
    names.push(BASE_TEST_TASK.to_string());
    names.extend(plan.tasks.iter().map(|t| t.name.clone()));
    names
}

/// Serialize the task names as the matrix output line.
///
/// # Errors
///
/// Returns [`MatrixError::EmptyMatrix`] if `task_names` is empty.
pub fn matrix_line(task_names: &[String]) -> Result<String> {
    if task_names.is_empty() {
        return Err(MatrixError::EmptyMatrix);
    }
    let json = serde_json::to_string(task_names)?;
    Ok(format!("{MATRIX_OUTPUT_MARKER}{json}"))
}
