use crate::errors::AppError;
use crate::models::JobApplication;

/// Company, title and location must be present; whitespace alone does not count.
pub fn validate_required(job: &JobApplication) -> Result<(), AppError> {
    let missing: Vec<&str> = [
        ("company", job.company.as_str()),
        ("title", job.title.as_str()),
        ("location", job.location.as_str()),
    ]
    .into_iter()
    .filter(|(_, value)| value.trim().is_empty())
    .map(|(field, _)| field)
    .collect();

    if missing.is_empty() {
        Ok(())
    } else {
        Err(AppError::Validation(format!(
            "Please fill in all required fields: {}",
            missing.join(", ")
        )))
    }
}
