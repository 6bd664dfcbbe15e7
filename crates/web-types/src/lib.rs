//! Wire types for the job-application dashboard.
//!
//! This crate defines the JSON shapes exchanged with the backend REST
//! service. The backend serializes UTC timestamps without an offset
//! suffix, so all timestamp fields are [`NaiveDateTime`].

use std::collections::BTreeMap;

use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

/// Job portals the backend scrapes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum JobPortal {
    Linkedin,
    Laborum,
    Bne,
    Trabajando,
}

impl JobPortal {
    /// Wire name of the portal, as used in query parameters and stat keys.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Linkedin => "linkedin",
            Self::Laborum => "laborum",
            Self::Bne => "bne",
            Self::Trabajando => "trabajando",
        }
    }
}

/// Lifecycle states of a job application.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ApplicationStatus {
    Pending,
    Applied,
    Viewed,
    Rejected,
    Interview,
    Offer,
}

impl ApplicationStatus {
    /// Wire name of the status.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Pending => "pending",
            Self::Applied => "applied",
            Self::Viewed => "viewed",
            Self::Rejected => "rejected",
            Self::Interview => "interview",
            Self::Offer => "offer",
        }
    }

    /// Whether the backend counts this status toward the success rate.
    pub fn is_successful(&self) -> bool {
        matches!(self, Self::Interview | Self::Offer)
    }
}

/// Employment type of a job posting.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum JobType {
    FullTime,
    PartTime,
    Contract,
    Internship,
    Freelance,
}

/// Where the work happens.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum WorkMode {
    Remote,
    Onsite,
    Hybrid,
}

/// A user profile as stored by the backend.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UserProfile {
    pub id: String,
    pub name: String,
    pub email: String,
    pub phone: Option<String>,
    pub location: String,
    pub linkedin_url: Option<String>,
    pub created_at: NaiveDateTime,
    pub updated_at: NaiveDateTime,
}

/// Payload for creating or updating a user profile.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UserProfileCreate {
    pub name: String,
    pub email: String,
    #[serde(default)]
    pub phone: Option<String>,
    pub location: String,
    #[serde(default)]
    pub linkedin_url: Option<String>,
}

/// A stored CV, including the structured sections the AI services consume.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CvData {
    pub id: String,
    pub user_id: String,
    pub title: String,
    pub personal_info: serde_json::Value,
    pub experience: Vec<serde_json::Value>,
    pub education: Vec<serde_json::Value>,
    pub skills: Vec<String>,
    #[serde(default)]
    pub certifications: Vec<serde_json::Value>,
    #[serde(default)]
    pub languages: Vec<serde_json::Value>,
    pub raw_text: String,
    #[serde(default)]
    pub file_path: Option<String>,
    #[serde(default)]
    pub is_default: bool,
    pub created_at: NaiveDateTime,
    pub updated_at: NaiveDateTime,
}

/// Payload for creating or updating a CV.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CvDataCreate {
    pub title: String,
    pub personal_info: serde_json::Value,
    pub experience: Vec<serde_json::Value>,
    pub education: Vec<serde_json::Value>,
    pub skills: Vec<String>,
    #[serde(default)]
    pub certifications: Vec<serde_json::Value>,
    #[serde(default)]
    pub languages: Vec<serde_json::Value>,
    pub raw_text: String,
    #[serde(default)]
    pub is_default: bool,
}

/// Automated-search filters for a user.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SearchFilters {
    pub id: String,
    pub user_id: String,
    pub keywords: Vec<String>,
    #[serde(default)]
    pub excluded_keywords: Vec<String>,
    #[serde(default)]
    pub job_types: Vec<JobType>,
    #[serde(default)]
    pub work_modes: Vec<WorkMode>,
    #[serde(default)]
    pub locations: Vec<String>,
    #[serde(default)]
    pub salary_min: Option<i64>,
    #[serde(default)]
    pub salary_max: Option<i64>,
    #[serde(default)]
    pub experience_years_min: Option<u32>,
    #[serde(default)]
    pub experience_years_max: Option<u32>,
    #[serde(default)]
    pub company_size: Option<Vec<String>>,
    #[serde(default)]
    pub industries: Vec<String>,
    #[serde(default)]
    pub portals: Vec<JobPortal>,
    #[serde(default)]
    pub auto_apply: bool,
    #[serde(default)]
    pub max_applications_per_day: u32,
    #[serde(default)]
    pub is_active: bool,
    pub created_at: NaiveDateTime,
    pub updated_at: NaiveDateTime,
}

/// Payload for creating or updating search filters.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SearchFiltersCreate {
    pub keywords: Vec<String>,
    #[serde(default)]
    pub excluded_keywords: Vec<String>,
    #[serde(default)]
    pub job_types: Vec<JobType>,
    #[serde(default)]
    pub work_modes: Vec<WorkMode>,
    #[serde(default)]
    pub locations: Vec<String>,
    #[serde(default)]
    pub salary_min: Option<i64>,
    #[serde(default)]
    pub salary_max: Option<i64>,
    #[serde(default)]
    pub experience_years_min: Option<u32>,
    #[serde(default)]
    pub experience_years_max: Option<u32>,
    #[serde(default)]
    pub industries: Vec<String>,
    #[serde(default)]
    pub portals: Vec<JobPortal>,
    #[serde(default)]
    pub auto_apply: bool,
    #[serde(default)]
    pub max_applications_per_day: u32,
}

/// A job posting scraped from one of the portals.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct JobPosting {
    pub id: String,
    pub portal: JobPortal,
    pub external_id: String,
    pub url: String,
    pub title: String,
    pub company: String,
    #[serde(default)]
    pub company_url: Option<String>,
    pub location: String,
    #[serde(default)]
    pub work_mode: Option<WorkMode>,
    #[serde(default)]
    pub job_type: Option<JobType>,
    #[serde(default)]
    pub salary: Option<String>,
    pub description: String,
    #[serde(default)]
    pub requirements: Vec<String>,
    #[serde(default)]
    pub benefits: Vec<String>,
    #[serde(default)]
    pub posted_date: Option<NaiveDateTime>,
    #[serde(default)]
    pub deadline: Option<NaiveDateTime>,
    #[serde(default)]
    pub keywords_matched: Vec<String>,
    #[serde(default)]
    pub match_percentage: Option<f64>,
    pub scraped_at: NaiveDateTime,
    pub updated_at: NaiveDateTime,
}

/// An application submitted (or queued) for a job posting.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct JobApplication {
    pub id: String,
    pub user_id: String,
    pub job_id: String,
    pub cv_used: String,
    #[serde(default)]
    pub cover_letter: Option<String>,
    #[serde(default)]
    pub custom_message: Option<String>,
    #[serde(default)]
    pub portal_data: serde_json::Value,
    pub status: ApplicationStatus,
    #[serde(default)]
    pub applied_at: Option<NaiveDateTime>,
    pub last_update: NaiveDateTime,
    #[serde(default)]
    pub response_received: bool,
    #[serde(default)]
    pub interview_scheduled: Option<NaiveDateTime>,
    #[serde(default)]
    pub notes: Option<String>,
    pub created_at: NaiveDateTime,
}

/// Per-user AI personalization settings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AiConfig {
    pub id: String,
    pub user_id: String,
    #[serde(default)]
    pub gemini_api_key: Option<String>,
    #[serde(default)]
    pub personalization_enabled: bool,
    #[serde(default)]
    pub auto_cover_letter: bool,
    #[serde(default)]
    pub auto_form_fill: bool,
    pub response_style: String,
    pub cv_customization_level: String,
    pub created_at: NaiveDateTime,
    pub updated_at: NaiveDateTime,
}

/// Payload for replacing a user's AI configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AiConfigCreate {
    #[serde(default)]
    pub gemini_api_key: Option<String>,
    #[serde(default)]
    pub personalization_enabled: bool,
    #[serde(default)]
    pub auto_cover_letter: bool,
    #[serde(default)]
    pub auto_form_fill: bool,
    pub response_style: String,
    pub cv_customization_level: String,
}

/// Aggregate statistics for a user over a trailing window of days.
///
/// `success_rate` is already a percentage (0–100), not a fraction.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StatsSummary {
    pub period_days: u32,
    pub total_applications: u32,
    pub total_jobs_found: u32,
    #[serde(default)]
    pub applications_by_status: BTreeMap<String, u32>,
    #[serde(default)]
    pub applications_by_portal: BTreeMap<String, u32>,
    pub success_rate: f64,
}

impl StatsSummary {
    /// The zero-state rendered when a dashboard load fails.
    pub fn zero(period_days: u32) -> Self {
        Self {
            period_days,
            total_applications: 0,
            total_jobs_found: 0,
            applications_by_status: BTreeMap::new(),
            applications_by_portal: BTreeMap::new(),
            success_rate: 0.0,
        }
    }
}

/// Body of `GET /api/health`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HealthStatus {
    pub status: String,
    pub timestamp: NaiveDateTime,
    pub version: String,
}

/// A plain `{ message }` acknowledgement.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ApiMessage {
    pub message: String,
}

/// Response to `POST /api/user/:id/apply/:job_id`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ApplyResponse {
    pub message: String,
    pub application_id: String,
}
