//! Resume analysis — pluggable, trait-based reviewer for an uploaded resume.
//!
//! Default: `CannedAnalyzer`, which waits a fixed delay and returns one of two
//! fixed reports. The uploaded bytes are never inspected.
//!
//! `AppState` holds an `Arc<dyn ResumeAnalyzer>`.

pub mod handlers;
mod reports;

use std::time::Duration;

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use tracing::info;

use crate::errors::AppError;

/// Metadata of an uploaded resume file.
#[derive(Debug, Clone)]
pub struct ResumeUpload {
    pub file_name: String,
    pub content_type: Option<String>,
    pub size_bytes: usize,
}

impl ResumeUpload {
    /// PDF only, judged by content type or file extension.
    pub fn validate(&self) -> Result<(), AppError> {
        let pdf_type = self.content_type.as_deref() == Some("application/pdf");
        let pdf_name = self.file_name.to_ascii_lowercase().ends_with(".pdf");
        if pdf_type || pdf_name {
            Ok(())
        } else {
            Err(AppError::Validation(
                "Invalid file type: please upload a PDF file".to_string(),
            ))
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ResumeAnalysis {
    pub file_name: String,
    pub report: String,
    pub analyzed_at: DateTime<Utc>,
}

/// The analyzer trait. Implement this to swap backends without touching
/// the endpoint or handler.
#[async_trait]
pub trait ResumeAnalyzer: Send + Sync {
    async fn analyze(&self, upload: &ResumeUpload) -> Result<ResumeAnalysis, AppError>;
}

pub struct CannedAnalyzer {
    delay: Duration,
}

impl CannedAnalyzer {
    pub fn new(delay: Duration) -> Self {
        Self { delay }
    }
}

#[async_trait]
impl ResumeAnalyzer for CannedAnalyzer {
    async fn analyze(&self, upload: &ResumeUpload) -> Result<ResumeAnalysis, AppError> {
        upload.validate()?;
        tokio::time::sleep(self.delay).await;

        let analyzed_at = Utc::now();
        let (pick, report) = canned_report(analyzed_at.timestamp_subsec_nanos());
        info!(
            "Analyzed resume '{}' ({} bytes) with canned report #{pick}",
            upload.file_name, upload.size_bytes
        );

        Ok(ResumeAnalysis {
            file_name: upload.file_name.clone(),
            report: report.to_string(),
            analyzed_at,
        })
    }
}

/// Index and text of the canned report for `seed`.
fn canned_report(seed: u32) -> (usize, &'static str) {
    let pick = seed as usize % reports::CANNED_REPORTS.len();
    (pick, reports::CANNED_REPORTS[pick])
}

#[cfg(test)]
mod tests {
    use super::*;

    fn upload(name: &str, content_type: Option<&str>) -> ResumeUpload {
        ResumeUpload {
            file_name: name.to_string(),
            content_type: content_type.map(str::to_string),
            size_bytes: 2048,
        }
    }

    #[test]
    fn test_accepts_pdf_by_type_or_extension() {
        assert!(upload("resume.pdf", None).validate().is_ok());
        assert!(upload("RESUME.PDF", Some("application/octet-stream")).validate().is_ok());
        assert!(upload("resume", Some("application/pdf")).validate().is_ok());
    }

    #[test]
    fn test_rejects_other_files() {
        let err = upload("resume.docx", Some("application/msword"))
            .validate()
            .unwrap_err();
        assert!(matches!(err, AppError::Validation(_)));
    }

    #[test]
    fn test_canned_report_choice_covers_every_report() {
        let (first, _) = canned_report(0);
        let (second, _) = canned_report(1);
        assert_ne!(first, second);

        let picked: Vec<_> = (0..reports::CANNED_REPORTS.len() as u32)
            .map(|seed| canned_report(seed).1)
            .collect();
        assert_eq!(picked, reports::CANNED_REPORTS.to_vec());
        assert_eq!(canned_report(1_000_000_001), canned_report(1));
    }

    #[tokio::test(start_paused = true)]
    async fn test_analysis_waits_and_returns_canned_report() {
        let analyzer = CannedAnalyzer::new(Duration::from_secs(3));
        let started = tokio::time::Instant::now();

        let analysis = analyzer.analyze(&upload("cv.pdf", None)).await.unwrap();

        assert!(started.elapsed() >= Duration::from_secs(3));
        assert_eq!(analysis.file_name, "cv.pdf");
        assert!(reports::CANNED_REPORTS.contains(&analysis.report.as_str()));
    }

    #[tokio::test(start_paused = true)]
    async fn test_analysis_rejects_non_pdf_without_waiting() {
        let analyzer = CannedAnalyzer::new(Duration::from_secs(3));
        let started = tokio::time::Instant::now();
        assert!(analyzer.analyze(&upload("cv.txt", Some("text/plain"))).await.is_err());
        assert!(started.elapsed() < Duration::from_secs(3));
    }
}
