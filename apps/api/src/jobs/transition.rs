//! Status transitions — the drag-and-drop path between board columns.
//!
//! Both this path and the edit form go through `JobStore::update`, which checks
//! the configured `TransitionPolicy` before applying a status change.

use std::str::FromStr;

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::errors::AppError;
use crate::jobs::store::JobStore;
use crate::models::{JobApplication, JobStatus, JobUpdate};

#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum TransitionPolicy {
    /// Any status may move to any other status.
    #[default]
    Unrestricted,
    /// applied → interviewing | rejected, interviewing → offer | rejected.
    /// Offer and rejected are terminal.
    Pipeline,
}

impl TransitionPolicy {
    pub fn allows(&self, from: JobStatus, to: JobStatus) -> bool {
        if from == to {
            return true;
        }
        match self {
            TransitionPolicy::Unrestricted => true,
            TransitionPolicy::Pipeline => matches!(
                (from, to),
                (JobStatus::Applied, JobStatus::Interviewing)
                    | (JobStatus::Applied, JobStatus::Rejected)
                    | (JobStatus::Interviewing, JobStatus::Offer)
                    | (JobStatus::Interviewing, JobStatus::Rejected)
            ),
        }
    }

    pub fn check(&self, from: JobStatus, to: JobStatus) -> Result<(), AppError> {
        if self.allows(from, to) {
            Ok(())
        } else {
            Err(AppError::InvalidTransition { from, to })
        }
    }
}

impl FromStr for TransitionPolicy {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "unrestricted" => Ok(TransitionPolicy::Unrestricted),
            "pipeline" => Ok(TransitionPolicy::Pipeline),
            other => Err(format!(
                "unknown transition policy '{other}' (expected 'unrestricted' or 'pipeline')"
            )),
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum MoveOutcome {
    /// Dropped onto the column it already sits in; nothing was written.
    Unchanged(JobApplication),
    Moved(JobApplication),
}

impl MoveOutcome {
    pub fn moved(&self) -> bool {
        matches!(self, MoveOutcome::Moved(_))
    }

    pub fn into_job(self) -> JobApplication {
        match self {
            MoveOutcome::Unchanged(job) | MoveOutcome::Moved(job) => job,
        }
    }
}

/// Moves application `id` into the `target` column.
pub fn move_job(store: &mut JobStore, id: Uuid, target: JobStatus) -> Result<MoveOutcome, AppError> {
    let current = store
        .get_by_id(id)
        .ok_or_else(|| AppError::NotFound(format!("Job application {id} not found")))?;

    if current.status == target {
        return Ok(MoveOutcome::Unchanged(current.clone()));
    }

    store
        .update(id, JobUpdate::status(target))?
        .map(MoveOutcome::Moved)
        .ok_or_else(|| AppError::NotFound(format!("Job application {id} not found")))
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use super::*;
    use crate::models::NewJobApplication;
    use crate::storage::memory::MemorySlots;

    fn store_with(policy: TransitionPolicy) -> JobStore {
        JobStore::load(Arc::new(MemorySlots::default()), false, policy).unwrap()
    }

    #[test]
    fn test_unrestricted_allows_any_move() {
        for from in JobStatus::ALL {
            for to in JobStatus::ALL {
                assert!(TransitionPolicy::Unrestricted.allows(from, to));
            }
        }
    }

    #[test]
    fn test_pipeline_edges() {
        let p = TransitionPolicy::Pipeline;
        assert!(p.allows(JobStatus::Applied, JobStatus::Interviewing));
        assert!(p.allows(JobStatus::Applied, JobStatus::Rejected));
        assert!(p.allows(JobStatus::Interviewing, JobStatus::Offer));
        assert!(p.allows(JobStatus::Interviewing, JobStatus::Rejected));
        assert!(!p.allows(JobStatus::Applied, JobStatus::Offer));
        assert!(!p.allows(JobStatus::Offer, JobStatus::Applied));
        assert!(!p.allows(JobStatus::Rejected, JobStatus::Interviewing));
        assert!(p.allows(JobStatus::Offer, JobStatus::Offer));
    }

    #[test]
    fn test_policy_from_str() {
        assert_eq!(
            "Pipeline".parse::<TransitionPolicy>().unwrap(),
            TransitionPolicy::Pipeline
        );
        assert!("strict".parse::<TransitionPolicy>().is_err());
    }

    #[test]
    fn test_move_to_new_column_refreshes_updated_at() {
        let mut store = store_with(TransitionPolicy::Unrestricted);
        let job = store
            .add(NewJobApplication::new("Acme", "Engineer", "Remote"))
            .unwrap();

        let outcome = move_job(&mut store, job.id, JobStatus::Interviewing).unwrap();
        assert!(outcome.moved());
        assert_eq!(store.list()[0].status, JobStatus::Interviewing);
        assert!(store.list()[0].updated_at > job.updated_at);
    }

    #[test]
    fn test_drop_on_same_column_is_noop() {
        let mut store = store_with(TransitionPolicy::Unrestricted);
        let job = store
            .add(NewJobApplication::new("Acme", "Engineer", "Remote"))
            .unwrap();
        let moved = move_job(&mut store, job.id, JobStatus::Interviewing)
            .unwrap()
            .into_job();

        let outcome = move_job(&mut store, job.id, JobStatus::Interviewing).unwrap();
        assert!(!outcome.moved());
        assert_eq!(store.list()[0].updated_at, moved.updated_at);
    }

    #[test]
    fn test_move_unknown_id_is_not_found() {
        let mut store = store_with(TransitionPolicy::Unrestricted);
        let err = move_job(&mut store, Uuid::new_v4(), JobStatus::Offer).unwrap_err();
        assert!(matches!(err, AppError::NotFound(_)));
    }

    #[test]
    fn test_pipeline_rejects_backwards_move_without_writing() {
        let mut store = store_with(TransitionPolicy::Pipeline);
        let mut new = NewJobApplication::new("Acme", "Engineer", "Remote");
        new.status = JobStatus::Offer;
        let job = store.add(new).unwrap();

        let err = move_job(&mut store, job.id, JobStatus::Applied).unwrap_err();
        assert!(matches!(
            err,
            AppError::InvalidTransition {
                from: JobStatus::Offer,
                to: JobStatus::Applied
            }
        ));
        assert_eq!(store.get_by_id(job.id), Some(&job));
    }
}
