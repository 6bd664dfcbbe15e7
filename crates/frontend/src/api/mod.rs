//! Typed client for the backend REST API.
//!
//! One async method per backend operation. Every method performs exactly
//! one HTTP request and either returns the parsed response body or
//! propagates the failure as an [`ApiError`]; recovery is the caller's
//! problem. A single send path acts as the response interceptor: it logs
//! each rejected request to the browser console and returns the error
//! unchanged.

mod error;

pub use error::ApiError;

use futures::future::{Either, select};
use futures::pin_mut;
use gloo_net::http::{Request, Response};
use gloo_timers::future::TimeoutFuture;
use serde::de::DeserializeOwned;
use web_types::{
    AiConfig, AiConfigCreate, ApiMessage, ApplicationStatus, ApplyResponse, CvData, CvDataCreate,
    HealthStatus, JobApplication, JobPortal, JobPosting, SearchFilters, SearchFiltersCreate,
    StatsSummary, UserProfile, UserProfileCreate,
};

/// Client-side cap on any single request.
pub const REQUEST_TIMEOUT_MS: u32 = 30_000;

/// Optional parameters for the job listing endpoint.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct JobQuery {
    pub portal: Option<JobPortal>,
    pub limit: Option<u32>,
    pub skip: Option<u32>,
}

impl JobQuery {
    fn to_query(&self) -> String {
        query_string(&[
            ("portal", self.portal.map(|p| p.as_str().to_string())),
            ("limit", self.limit.map(|n| n.to_string())),
            ("skip", self.skip.map(|n| n.to_string())),
        ])
    }
}

/// Optional parameters for the application listing endpoint.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ApplicationQuery {
    pub status: Option<ApplicationStatus>,
    pub limit: Option<u32>,
    pub skip: Option<u32>,
}

impl ApplicationQuery {
    fn to_query(&self) -> String {
        query_string(&[
            ("status", self.status.map(|s| s.as_str().to_string())),
            ("limit", self.limit.map(|n| n.to_string())),
            ("skip", self.skip.map(|n| n.to_string())),
        ])
    }
}

/// Optional parameters when applying to a job.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ApplyOptions {
    pub cv_id: Option<String>,
    pub custom_message: Option<String>,
}

impl ApplyOptions {
    fn to_query(&self) -> String {
        query_string(&[
            ("cv_id", self.cv_id.clone()),
            ("custom_message", self.custom_message.clone()),
        ])
    }
}

/// Client for the backend REST API.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApiClient {
    base: String,
}

impl ApiClient {
    /// Create a client for the given backend origin. The API itself is
    /// mounted under `/api`; an empty origin yields same-origin paths.
    pub fn new(backend_url: &str) -> Self {
        Self {
            base: format!("{}/api", backend_url.trim_end_matches('/')),
        }
    }

    fn url(&self, path: &str) -> String {
        format!("{}{path}", self.base)
    }

    // ---- user ----

    /// `POST /user` - create a user profile.
    pub async fn create_user(&self, user: &UserProfileCreate) -> Result<UserProfile, ApiError> {
        let request = Request::post(&self.url("/user")).json(user)?;
        self.fetch_json(request).await
    }

    /// `GET /user/:id` - fetch a user profile.
    pub async fn get_user(&self, user_id: &str) -> Result<UserProfile, ApiError> {
        self.get_json(&format!("/user/{user_id}")).await
    }

    /// `PUT /user/:id` - update a user profile.
    pub async fn update_user(
        &self,
        user_id: &str,
        user: &UserProfileCreate,
    ) -> Result<UserProfile, ApiError> {
        let request = Request::put(&self.url(&format!("/user/{user_id}"))).json(user)?;
        self.fetch_json(request).await
    }

    // ---- CVs ----

    /// `POST /user/:id/cv` - create a CV for a user.
    pub async fn create_cv(&self, user_id: &str, cv: &CvDataCreate) -> Result<CvData, ApiError> {
        let request = Request::post(&self.url(&format!("/user/{user_id}/cv"))).json(cv)?;
        self.fetch_json(request).await
    }

    /// `GET /user/:id/cvs` - list a user's CVs.
    pub async fn list_cvs(&self, user_id: &str) -> Result<Vec<CvData>, ApiError> {
        self.get_json(&format!("/user/{user_id}/cvs")).await
    }

    /// `GET /cv/:id` - fetch a single CV.
    pub async fn get_cv(&self, cv_id: &str) -> Result<CvData, ApiError> {
        self.get_json(&format!("/cv/{cv_id}")).await
    }

    /// `PUT /cv/:id` - update a CV.
    pub async fn update_cv(&self, cv_id: &str, cv: &CvDataCreate) -> Result<CvData, ApiError> {
        let request = Request::put(&self.url(&format!("/cv/{cv_id}"))).json(cv)?;
        self.fetch_json(request).await
    }

    /// `DELETE /cv/:id` - delete a CV.
    pub async fn delete_cv(&self, cv_id: &str) -> Result<ApiMessage, ApiError> {
        let request = Request::delete(&self.url(&format!("/cv/{cv_id}")))
            .header("Content-Type", "application/json")
            .build()?;
        self.fetch_json(request).await
    }

    // ---- search filters ----

    /// `POST /user/:id/search-filters` - create search filters.
    pub async fn create_search_filters(
        &self,
        user_id: &str,
        filters: &SearchFiltersCreate,
    ) -> Result<SearchFilters, ApiError> {
        let request =
            Request::post(&self.url(&format!("/user/{user_id}/search-filters"))).json(filters)?;
        self.fetch_json(request).await
    }

    /// `GET /user/:id/search-filters` - list a user's search filters.
    pub async fn list_search_filters(&self, user_id: &str) -> Result<Vec<SearchFilters>, ApiError> {
        self.get_json(&format!("/user/{user_id}/search-filters"))
            .await
    }

    /// `PUT /search-filters/:id` - update search filters.
    pub async fn update_search_filters(
        &self,
        filter_id: &str,
        filters: &SearchFiltersCreate,
    ) -> Result<SearchFilters, ApiError> {
        let request =
            Request::put(&self.url(&format!("/search-filters/{filter_id}"))).json(filters)?;
        self.fetch_json(request).await
    }

    // ---- jobs ----

    /// `GET /user/:id/jobs` - list jobs found for a user.
    pub async fn list_jobs(
        &self,
        user_id: &str,
        query: &JobQuery,
    ) -> Result<Vec<JobPosting>, ApiError> {
        self.get_json(&format!("/user/{user_id}/jobs{}", query.to_query()))
            .await
    }

    /// `GET /job/:id` - fetch a single job posting.
    pub async fn get_job(&self, job_id: &str) -> Result<JobPosting, ApiError> {
        self.get_json(&format!("/job/{job_id}")).await
    }

    // ---- applications ----

    /// `GET /user/:id/applications` - list a user's applications.
    pub async fn list_applications(
        &self,
        user_id: &str,
        query: &ApplicationQuery,
    ) -> Result<Vec<JobApplication>, ApiError> {
        self.get_json(&format!("/user/{user_id}/applications{}", query.to_query()))
            .await
    }

    /// `POST /user/:id/apply/:jobId` - queue an application for a job.
    pub async fn apply_to_job(
        &self,
        user_id: &str,
        job_id: &str,
        options: &ApplyOptions,
    ) -> Result<ApplyResponse, ApiError> {
        let path = format!("/user/{user_id}/apply/{job_id}{}", options.to_query());
        self.post_empty(&path).await
    }

    /// `POST /user/:id/start-search` - start the automatic job search.
    pub async fn start_search(&self, user_id: &str) -> Result<ApiMessage, ApiError> {
        self.post_empty(&format!("/user/{user_id}/start-search"))
            .await
    }

    /// `POST /user/:id/stop-search` - stop the automatic job search.
    pub async fn stop_search(&self, user_id: &str) -> Result<ApiMessage, ApiError> {
        self.post_empty(&format!("/user/{user_id}/stop-search"))
            .await
    }

    // ---- AI configuration ----

    /// `POST /user/:id/ai-config` - replace a user's AI configuration.
    pub async fn create_ai_config(
        &self,
        user_id: &str,
        config: &AiConfigCreate,
    ) -> Result<AiConfig, ApiError> {
        let request =
            Request::post(&self.url(&format!("/user/{user_id}/ai-config"))).json(config)?;
        self.fetch_json(request).await
    }

    /// `GET /user/:id/ai-config` - fetch a user's AI configuration.
    pub async fn get_ai_config(&self, user_id: &str) -> Result<AiConfig, ApiError> {
        self.get_json(&format!("/user/{user_id}/ai-config")).await
    }

    // ---- stats & health ----

    /// `GET /user/:id/stats?days=N` - aggregate statistics over a
    /// trailing window.
    pub async fn get_stats(&self, user_id: &str, days: u32) -> Result<StatsSummary, ApiError> {
        self.get_json(&format!("/user/{user_id}/stats?days={days}"))
            .await
    }

    /// `GET /health` - backend health check.
    pub async fn health(&self) -> Result<HealthStatus, ApiError> {
        self.get_json("/health").await
    }

    /// `GET /` - service banner.
    pub async fn service_banner(&self) -> Result<ApiMessage, ApiError> {
        self.get_json("/").await
    }

    // ---- plumbing ----

    async fn get_json<T: DeserializeOwned>(&self, path: &str) -> Result<T, ApiError> {
        let request = Request::get(&self.url(path))
            .header("Content-Type", "application/json")
            .build()?;
        self.fetch_json(request).await
    }

    async fn post_empty<T: DeserializeOwned>(&self, path: &str) -> Result<T, ApiError> {
        let request = Request::post(&self.url(path))
            .header("Content-Type", "application/json")
            .build()?;
        self.fetch_json(request).await
    }

    async fn fetch_json<T: DeserializeOwned>(&self, request: Request) -> Result<T, ApiError> {
        let response = self.send(request).await?;
        Ok(response.json::<T>().await?)
    }

    /// Send one request, racing it against the client timeout.
    ///
    /// This is the response interceptor: every rejection is logged to
    /// the console here and then returned unchanged.
    async fn send(&self, request: Request) -> Result<Response, ApiError> {
        let url = request.url();
        let result = dispatch(request).await;
        if let Err(error) = &result {
            web_sys::console::error_1(&format!("API request failed: {url}: {error}").into());
        }
        result
    }
}

async fn dispatch(request: Request) -> Result<Response, ApiError> {
    let pending = request.send();
    let timeout = TimeoutFuture::new(REQUEST_TIMEOUT_MS);
    pin_mut!(pending);
    pin_mut!(timeout);

    let response = match select(pending, timeout).await {
        Either::Left((result, _)) => result?,
        Either::Right(((), _)) => return Err(ApiError::Timeout(REQUEST_TIMEOUT_MS)),
    };

    if response.ok() {
        Ok(response)
    } else {
        Err(ApiError::Status {
            status: response.status(),
            url: response.url(),
        })
    }
}

/// Assemble a query string from optional parameters, skipping the `?`
/// entirely when none are present.
fn query_string(pairs: &[(&str, Option<String>)]) -> String {
    let joined = pairs
        .iter()
        .filter_map(|(key, value)| {
            value
                .as_ref()
                .map(|v| format!("{key}={}", urlencoding::encode(v)))
        })
        .collect::<Vec<_>>()
        .join("&");

    if joined.is_empty() {
        String::new()
    } else {
        format!("?{joined}")
    }
}
