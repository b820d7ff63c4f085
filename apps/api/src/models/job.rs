use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Deserializer, Serialize};
use uuid::Uuid;

/// Pipeline stage of an application. Board columns follow `JobStatus::ALL`.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "lowercase")]
pub enum JobStatus {
    #[default]
    Applied,
    Interviewing,
    Offer,
    Rejected,
}

impl JobStatus {
    pub const ALL: [JobStatus; 4] = [
        JobStatus::Applied,
        JobStatus::Interviewing,
        JobStatus::Offer,
        JobStatus::Rejected,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            JobStatus::Applied => "applied",
            JobStatus::Interviewing => "interviewing",
            JobStatus::Offer => "offer",
            JobStatus::Rejected => "rejected",
        }
    }

    pub fn parse(raw: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|s| s.as_str() == raw)
    }

    pub fn label(&self) -> &'static str {
        match self {
            JobStatus::Applied => "Applied",
            JobStatus::Interviewing => "Interviewing",
            JobStatus::Offer => "Offer",
            JobStatus::Rejected => "Rejected",
        }
    }

    pub fn badge_color(&self) -> &'static str {
        match self {
            JobStatus::Applied => "blue",
            JobStatus::Interviewing => "orange",
            JobStatus::Offer => "green",
            JobStatus::Rejected => "red",
        }
    }
}

impl std::fmt::Display for JobStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "lowercase")]
pub enum Priority {
    Low,
    #[default]
    Medium,
    High,
}

impl Priority {
    /// Highest first, matching the analytics breakdown.
    pub const ALL: [Priority; 3] = [Priority::High, Priority::Medium, Priority::Low];

    pub fn label(&self) -> &'static str {
        match self {
            Priority::Low => "Low",
            Priority::Medium => "Medium",
            Priority::High => "High",
        }
    }

    pub fn badge_color(&self) -> &'static str {
        match self {
            Priority::Low => "gray",
            Priority::Medium => "yellow",
            Priority::High => "red",
        }
    }
}

/// One tracked job application. Serialized in camelCase, which is also the
/// layout of the persisted collection slot.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct JobApplication {
    pub id: Uuid,
    pub company: String,
    pub title: String,
    pub location: String,
    pub date_applied: NaiveDate,
    pub status: JobStatus,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub salary: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub interview_date: Option<NaiveDate>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub contact_person: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub job_url: Option<String>,
    pub priority: Priority,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Caller-supplied fields for a new application. The store assigns `id`,
/// `createdAt` and `updatedAt`.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewJobApplication {
    pub company: String,
    pub title: String,
    pub location: String,
    #[serde(default)]
    pub date_applied: Option<NaiveDate>,
    #[serde(default)]
    pub status: JobStatus,
    #[serde(default)]
    pub priority: Priority,
    #[serde(default)]
    pub salary: Option<String>,
    #[serde(default)]
    pub notes: Option<String>,
    #[serde(default)]
    pub interview_date: Option<NaiveDate>,
    #[serde(default)]
    pub contact_person: Option<String>,
    #[serde(default)]
    pub job_url: Option<String>,
}

impl NewJobApplication {
    pub fn into_record(self, id: Uuid, now: DateTime<Utc>) -> JobApplication {
        JobApplication {
            id,
            company: self.company,
            title: self.title,
            location: self.location,
            date_applied: self.date_applied.unwrap_or_else(|| now.date_naive()),
            status: self.status,
            salary: non_blank(self.salary),
            notes: non_blank(self.notes),
            interview_date: self.interview_date,
            contact_person: non_blank(self.contact_person),
            job_url: non_blank(self.job_url),
            priority: self.priority,
            created_at: now,
            updated_at: now,
        }
    }
}

#[cfg(test)]
impl NewJobApplication {
    pub fn new(company: &str, title: &str, location: &str) -> Self {
        Self {
            company: company.to_string(),
            title: title.to_string(),
            location: location.to_string(),
            ..Default::default()
        }
    }
}

/// Partial replacement of a record's editable fields.
///
/// Optional fields distinguish "absent" (leave as is) from `null` (clear):
/// `None` keeps the current value, `Some(None)` clears it.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct JobUpdate {
    #[serde(default)]
    pub company: Option<String>,
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub location: Option<String>,
    #[serde(default)]
    pub date_applied: Option<NaiveDate>,
    #[serde(default)]
    pub status: Option<JobStatus>,
    #[serde(default)]
    pub priority: Option<Priority>,
    #[serde(default, deserialize_with = "double_option")]
    pub salary: Option<Option<String>>,
    #[serde(default, deserialize_with = "double_option")]
    pub notes: Option<Option<String>>,
    #[serde(default, deserialize_with = "double_option")]
    pub interview_date: Option<Option<NaiveDate>>,
    #[serde(default, deserialize_with = "double_option")]
    pub contact_person: Option<Option<String>>,
    #[serde(default, deserialize_with = "double_option")]
    pub job_url: Option<Option<String>>,
}

impl JobUpdate {
    pub fn status(status: JobStatus) -> Self {
        Self {
            status: Some(status),
            ..Default::default()
        }
    }

    /// Applies the given fields onto `job`. Timestamps are the store's concern.
    pub fn apply_to(self, job: &mut JobApplication) {
        if let Some(company) = self.company {
            job.company = company;
        }
        if let Some(title) = self.title {
            job.title = title;
        }
        if let Some(location) = self.location {
            job.location = location;
        }
        if let Some(date_applied) = self.date_applied {
            job.date_applied = date_applied;
        }
        if let Some(status) = self.status {
            job.status = status;
        }
        if let Some(priority) = self.priority {
            job.priority = priority;
        }
        if let Some(salary) = self.salary {
            job.salary = non_blank(salary);
        }
        if let Some(notes) = self.notes {
            job.notes = non_blank(notes);
        }
        if let Some(interview_date) = self.interview_date {
            job.interview_date = interview_date;
        }
        if let Some(contact_person) = self.contact_person {
            job.contact_person = non_blank(contact_person);
        }
        if let Some(job_url) = self.job_url {
            job.job_url = non_blank(job_url);
        }
    }
}

/// Forms submit empty strings for untouched optional inputs; store them as absent.
fn non_blank(value: Option<String>) -> Option<String> {
    value.filter(|v| !v.trim().is_empty())
}

fn double_option<'de, D, T>(deserializer: D) -> Result<Option<Option<T>>, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de>,
{
    Option::<T>::deserialize(deserializer).map(Some)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn sample() -> JobApplication {
        NewJobApplication::new("Acme", "Engineer", "Remote").into_record(Uuid::new_v4(), Utc::now())
    }

    #[test]
    fn test_status_serializes_lowercase() {
        assert_eq!(
            serde_json::to_value(JobStatus::Interviewing).unwrap(),
            json!("interviewing")
        );
        assert!(serde_json::from_value::<JobStatus>(json!("ghosted")).is_err());
    }

    #[test]
    fn test_status_parse_round_trips_as_str() {
        for status in JobStatus::ALL {
            assert_eq!(JobStatus::parse(status.as_str()), Some(status));
        }
        assert_eq!(JobStatus::parse("Applied"), None);
    }

    #[test]
    fn test_new_application_defaults() {
        let job = sample();
        assert_eq!(job.status, JobStatus::Applied);
        assert_eq!(job.priority, Priority::Medium);
        assert_eq!(job.created_at, job.updated_at);
        assert_eq!(job.date_applied, job.created_at.date_naive());
    }

    #[test]
    fn test_record_uses_camel_case_and_omits_absent_fields() {
        let job = sample();
        let value = serde_json::to_value(&job).unwrap();
        assert!(value.get("dateApplied").is_some());
        assert!(value.get("createdAt").is_some());
        assert!(value.get("salary").is_none());
        assert!(value.get("date_applied").is_none());
    }

    #[test]
    fn test_blank_optional_text_is_absent() {
        let mut new = NewJobApplication::new("Acme", "Engineer", "Remote");
        new.salary = Some("   ".to_string());
        new.notes = Some("Referral".to_string());
        let job = new.into_record(Uuid::new_v4(), Utc::now());
        assert_eq!(job.salary, None);
        assert_eq!(job.notes.as_deref(), Some("Referral"));
    }

    #[test]
    fn test_update_null_clears_and_absent_keeps() {
        let mut job = sample();
        job.notes = Some("keep me".to_string());
        job.salary = Some("$100k".to_string());

        let update: JobUpdate =
            serde_json::from_value(json!({ "salary": null, "title": "Staff Engineer" })).unwrap();
        update.apply_to(&mut job);

        assert_eq!(job.salary, None);
        assert_eq!(job.notes.as_deref(), Some("keep me"));
        assert_eq!(job.title, "Staff Engineer");
    }

    #[test]
    fn test_update_sets_interview_date() {
        let mut job = sample();
        let update: JobUpdate =
            serde_json::from_value(json!({ "interviewDate": "2024-06-25" })).unwrap();
        update.apply_to(&mut job);
        assert_eq!(job.interview_date, NaiveDate::from_ymd_opt(2024, 6, 25));
    }

    #[test]
    fn test_presentation_mappings() {
        assert_eq!(JobStatus::Offer.label(), "Offer");
        assert_eq!(JobStatus::Rejected.badge_color(), "red");
        assert_eq!(Priority::Low.badge_color(), "gray");
        assert_eq!(Priority::High.label(), "High");
    }
}
