//! Demonstration dataset written on first run, so a new dashboard is not empty.

use crate::models::JobApplication;

const DEMO_JOBS: &str = r#"[
  {
    "id": "6f1c2a4e-0b1d-4c55-9a51-000000000001",
    "company": "TechCorp",
    "title": "Senior Frontend Developer",
    "location": "San Francisco, CA",
    "dateApplied": "2024-06-15",
    "status": "interviewing",
    "salary": "$120,000 - $140,000",
    "notes": "Great company culture, 3 rounds of interviews scheduled",
    "interviewDate": "2024-06-25",
    "contactPerson": "Sarah Johnson",
    "priority": "high",
    "createdAt": "2024-06-15T10:00:00Z",
    "updatedAt": "2024-06-20T14:30:00Z"
  },
  {
    "id": "6f1c2a4e-0b1d-4c55-9a51-000000000002",
    "company": "StartupXYZ",
    "title": "Full Stack Engineer",
    "location": "New York, NY",
    "dateApplied": "2024-06-10",
    "status": "applied",
    "salary": "$100,000 - $130,000",
    "notes": "Interesting product, waiting for response",
    "priority": "medium",
    "createdAt": "2024-06-10T09:00:00Z",
    "updatedAt": "2024-06-10T09:00:00Z"
  },
  {
    "id": "6f1c2a4e-0b1d-4c55-9a51-000000000003",
    "company": "BigTech Inc",
    "title": "Software Engineer",
    "location": "Seattle, WA",
    "dateApplied": "2024-06-05",
    "status": "offer",
    "salary": "$150,000 - $180,000",
    "notes": "Received offer! Need to negotiate salary",
    "priority": "high",
    "createdAt": "2024-06-05T11:00:00Z",
    "updatedAt": "2024-06-18T16:00:00Z"
  },
  {
    "id": "6f1c2a4e-0b1d-4c55-9a51-000000000004",
    "company": "LocalCompany",
    "title": "React Developer",
    "location": "Austin, TX",
    "dateApplied": "2024-05-30",
    "status": "rejected",
    "salary": "$80,000 - $100,000",
    "notes": "Not a good fit for the role",
    "priority": "low",
    "createdAt": "2024-05-30T13:00:00Z",
    "updatedAt": "2024-06-08T10:00:00Z"
  }
]"#;

pub fn demo_jobs() -> Result<Vec<JobApplication>, serde_json::Error> {
    serde_json::from_str(DEMO_JOBS)
}

#[cfg(test)]
mod tests {
    use std::collections::HashSet;

    use super::*;
    use crate::models::JobStatus;

    #[test]
    fn test_demo_jobs_cover_every_status_once() {
        let jobs = demo_jobs().unwrap();
        assert_eq!(jobs.len(), 4);
        let statuses: HashSet<_> = jobs.iter().map(|j| j.status).collect();
        assert_eq!(statuses.len(), JobStatus::ALL.len());
    }

    #[test]
    fn test_demo_jobs_are_consistent() {
        let jobs = demo_jobs().unwrap();
        let ids: HashSet<_> = jobs.iter().map(|j| j.id).collect();
        assert_eq!(ids.len(), jobs.len());
        assert!(jobs.iter().all(|j| j.updated_at >= j.created_at));
    }
}
