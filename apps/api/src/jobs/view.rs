//! Filtering and presentation of the job collection.
//!
//! Filtering never changes order; grouping into board columns happens after it.

use serde::{Deserialize, Serialize};

use crate::errors::AppError;
use crate::models::{JobApplication, JobStatus};

#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum ViewMode {
    #[default]
    Board,
    Table,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum StatusFilter {
    #[default]
    All,
    Only(JobStatus),
}

impl StatusFilter {
    pub fn parse(raw: &str) -> Result<Self, AppError> {
        if raw == "all" {
            return Ok(StatusFilter::All);
        }
        JobStatus::parse(raw)
            .map(StatusFilter::Only)
            .ok_or_else(|| AppError::Validation(format!("Unknown status filter '{raw}'")))
    }

    pub fn matches(&self, status: JobStatus) -> bool {
        match self {
            StatusFilter::All => true,
            StatusFilter::Only(wanted) => *wanted == status,
        }
    }
}

/// Case-insensitive substring match on company, title or location.
/// An empty term matches everything.
pub fn matches_search(job: &JobApplication, term: &str) -> bool {
    if term.is_empty() {
        return true;
    }
    let term = term.to_lowercase();
    [&job.company, &job.title, &job.location]
        .iter()
        .any(|field| field.to_lowercase().contains(&term))
}

pub fn filter_by_search<'a>(jobs: &[&'a JobApplication], term: &str) -> Vec<&'a JobApplication> {
    jobs.iter().copied().filter(|j| matches_search(j, term)).collect()
}

pub fn filter_by_status<'a>(
    jobs: &[&'a JobApplication],
    status: StatusFilter,
) -> Vec<&'a JobApplication> {
    jobs.iter().copied().filter(|j| status.matches(j.status)).collect()
}

/// The subset shown on the dashboard, in collection order.
pub fn filter_jobs<'a>(
    jobs: &'a [JobApplication],
    term: &str,
    status: StatusFilter,
) -> Vec<&'a JobApplication> {
    let all: Vec<&JobApplication> = jobs.iter().collect();
    filter_by_status(&filter_by_search(&all, term), status)
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct BoardColumn {
    pub status: JobStatus,
    pub label: &'static str,
    pub color: &'static str,
    pub count: usize,
    pub jobs: Vec<JobApplication>,
}

/// Partitions into one column per status, always all four, in `JobStatus::ALL` order.
pub fn board_columns(jobs: &[&JobApplication]) -> Vec<BoardColumn> {
    JobStatus::ALL
        .into_iter()
        .map(|status| {
            let jobs: Vec<JobApplication> = jobs
                .iter()
                .filter(|j| j.status == status)
                .map(|j| (*j).clone())
                .collect();
            BoardColumn {
                status,
                label: status.label(),
                color: status.badge_color(),
                count: jobs.len(),
                jobs,
            }
        })
        .collect()
}

#[derive(Debug, Clone, Serialize)]
#[serde(tag = "mode", rename_all = "lowercase")]
pub enum DashboardView {
    Board { columns: Vec<BoardColumn> },
    Table { rows: Vec<JobApplication> },
}

pub fn render(mode: ViewMode, jobs: &[&JobApplication]) -> DashboardView {
    match mode {
        ViewMode::Board => DashboardView::Board {
            columns: board_columns(jobs),
        },
        ViewMode::Table => DashboardView::Table {
            rows: jobs.iter().map(|j| (*j).clone()).collect(),
        },
    }
}
