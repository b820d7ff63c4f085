use std::collections::BTreeMap;

use chrono::Datelike;
use serde::{Deserialize, Serialize};

use crate::models::{JobApplication, JobStatus, Priority};

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct StatusCount {
    pub status: JobStatus,
    pub label: String,
    pub color: String,
    pub count: usize,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct PriorityCount {
    pub priority: Priority,
    pub label: String,
    pub color: String,
    pub count: usize,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct MonthlyCount {
    /// `YYYY-MM` of `dateApplied`.
    pub month: String,
    pub applications: usize,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct FunnelReport {
    pub total: usize,
    pub by_status: Vec<StatusCount>,
    pub by_priority: Vec<PriorityCount>,
    /// Share of applications currently interviewing, whole percent.
    pub interview_rate: u32,
    /// Share of applications holding an offer, whole percent.
    pub offer_rate: u32,
    pub monthly: Vec<MonthlyCount>,
}

pub fn compute_funnel_report(jobs: &[JobApplication]) -> FunnelReport {
    let total = jobs.len();

    let by_status: Vec<StatusCount> = JobStatus::ALL
        .into_iter()
        .map(|status| StatusCount {
            status,
            label: status.label().to_string(),
            color: status.badge_color().to_string(),
            count: jobs.iter().filter(|j| j.status == status).count(),
        })
        .collect();

    let by_priority = Priority::ALL
        .into_iter()
        .map(|priority| PriorityCount {
            priority,
            label: priority.label().to_string(),
            color: priority.badge_color().to_string(),
            count: jobs.iter().filter(|j| j.priority == priority).count(),
        })
        .collect();

    let count_of = |status: JobStatus| {
        by_status
            .iter()
            .find(|c| c.status == status)
            .map_or(0, |c| c.count)
    };
    let interview_rate = percent(count_of(JobStatus::Interviewing), total);
    let offer_rate = percent(count_of(JobStatus::Offer), total);

    let mut months: BTreeMap<(i32, u32), usize> = BTreeMap::new();
    for job in jobs {
        *months
            .entry((job.date_applied.year(), job.date_applied.month()))
            .or_default() += 1;
    }
    let monthly = months
        .into_iter()
        .map(|((year, month), applications)| MonthlyCount {
            month: format!("{year:04}-{month:02}"),
            applications,
        })
        .collect();

    FunnelReport {
        total,
        by_status,
        by_priority,
        interview_rate,
        offer_rate,
        monthly,
    }
}

fn percent(part: usize, total: usize) -> u32 {
    if total == 0 {
        return 0;
    }
    ((part as f64 / total as f64) * 100.0).round() as u32
}
