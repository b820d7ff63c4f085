use std::collections::HashSet;
use std::sync::Arc;

use chrono::{DateTime, Duration, Utc};
use tracing::{debug, info, warn};
use uuid::Uuid;

use crate::errors::AppError;
use crate::jobs::seed::demo_jobs;
use crate::jobs::transition::TransitionPolicy;
use crate::jobs::validation::validate_required;
use crate::models::{JobApplication, JobUpdate, NewJobApplication};
use crate::storage::{write_json, SlotStorage, StorageError};

/// Slot holding the full job collection as a JSON array.
pub const JOBS_SLOT: &str = "job-applications";
/// Where an unreadable collection is copied before the store starts over.
pub const CORRUPT_JOBS_SLOT: &str = "job-applications.corrupt";

/// Owns the canonical job collection (newest first) and its durable slot.
///
/// Every mutation builds the next collection, persists it in full and only
/// then swaps it in, so memory and slot never disagree after a call returns.
pub struct JobStore {
    slots: Arc<dyn SlotStorage>,
    jobs: Vec<JobApplication>,
    seed_demo: bool,
    policy: TransitionPolicy,
}

impl JobStore {
    /// Loads the collection slot. An absent slot is a first run and gets the
    /// demo dataset (when enabled); an unreadable one is backed up and replaced
    /// by an empty collection.
    pub fn load(
        slots: Arc<dyn SlotStorage>,
        seed_demo: bool,
        policy: TransitionPolicy,
    ) -> Result<Self, StorageError> {
        let mut store = Self {
            slots,
            jobs: Vec::new(),
            seed_demo,
            policy,
        };
        store.jobs = store.initial_jobs()?;
        Ok(store)
    }

    fn initial_jobs(&self) -> Result<Vec<JobApplication>, StorageError> {
        let Some(raw) = self.slots.read(JOBS_SLOT)? else {
            if !self.seed_demo {
                info!("No saved applications; starting empty");
                return Ok(Vec::new());
            }
            let jobs = demo_jobs()?;
            write_json(self.slots.as_ref(), JOBS_SLOT, &jobs)?;
            info!("No saved applications; seeded {} demo records", jobs.len());
            return Ok(jobs);
        };

        match serde_json::from_str::<Vec<JobApplication>>(&raw) {
            Ok(mut jobs) => {
                let saved = jobs.len();
                let mut seen = HashSet::with_capacity(saved);
                jobs.retain(|j| seen.insert(j.id));
                if jobs.len() < saved {
                    warn!(
                        "Dropped {} saved applications with duplicate ids; original kept in '{CORRUPT_JOBS_SLOT}'",
                        saved - jobs.len()
                    );
                    self.slots.write(CORRUPT_JOBS_SLOT, &raw)?;
                    write_json(self.slots.as_ref(), JOBS_SLOT, &jobs)?;
                }
                info!("Loaded {} saved applications", jobs.len());
                Ok(jobs)
            }
            Err(e) => {
                warn!(
                    "Saved applications are unreadable ({e}); backing up to '{CORRUPT_JOBS_SLOT}' and starting empty"
                );
                self.slots.write(CORRUPT_JOBS_SLOT, &raw)?;
                Ok(Vec::new())
            }
        }
    }

    /// Newest add first.
    pub fn list(&self) -> &[JobApplication] {
        &self.jobs
    }

    pub fn get_by_id(&self, id: Uuid) -> Option<&JobApplication> {
        self.jobs.iter().find(|j| j.id == id)
    }

    pub fn add(&mut self, fields: NewJobApplication) -> Result<JobApplication, AppError> {
        let mut id = Uuid::new_v4();
        while self.get_by_id(id).is_some() {
            id = Uuid::new_v4();
        }
        let job = fields.into_record(id, Utc::now());
        validate_required(&job)?;

        let mut next = Vec::with_capacity(self.jobs.len() + 1);
        next.push(job.clone());
        next.extend(self.jobs.iter().cloned());
        self.commit(next)?;

        info!("Added application {} ({} / {})", job.id, job.company, job.title);
        Ok(job)
    }

    /// Replaces the given fields of `id`. Returns `Ok(None)` and leaves the
    /// collection untouched when no such record exists.
    pub fn update(
        &mut self,
        id: Uuid,
        changes: JobUpdate,
    ) -> Result<Option<JobApplication>, AppError> {
        let Some(index) = self.jobs.iter().position(|j| j.id == id) else {
            debug!("Update for unknown application {id} ignored");
            return Ok(None);
        };

        let current = &self.jobs[index];
        if let Some(target) = changes.status {
            self.policy.check(current.status, target)?;
        }

        let mut updated = current.clone();
        changes.apply_to(&mut updated);
        validate_required(&updated)?;
        updated.updated_at = advance(current.updated_at);

        let mut next = self.jobs.clone();
        next[index] = updated.clone();
        self.commit(next)?;

        debug!("Updated application {id}");
        Ok(Some(updated))
    }

    /// Removes `id`. Returns whether a record was removed.
    pub fn delete(&mut self, id: Uuid) -> Result<bool, AppError> {
        if self.get_by_id(id).is_none() {
            debug!("Delete for unknown application {id} ignored");
            return Ok(false);
        }

        let next: Vec<_> = self.jobs.iter().filter(|j| j.id != id).cloned().collect();
        self.commit(next)?;

        info!("Deleted application {id}");
        Ok(true)
    }

    /// Drops the saved collection and loads again as on a fresh start.
    pub fn reset(&mut self) -> Result<(), StorageError> {
        self.slots.remove(JOBS_SLOT)?;
        self.jobs = self.initial_jobs()?;
        Ok(())
    }

    fn commit(&mut self, next: Vec<JobApplication>) -> Result<(), StorageError> {
        write_json(self.slots.as_ref(), JOBS_SLOT, &next)?;
        self.jobs = next;
        Ok(())
    }
}

/// Current time, bumped past `previous` so each mutation strictly advances `updatedAt`.
fn advance(previous: DateTime<Utc>) -> DateTime<Utc> {
    let now = Utc::now();
    if now > previous {
        now
    } else {
        previous + Duration::microseconds(1)
    }
}
