//! Scheduled job endpoints.

use crate::error::Result;
use crate::pipeline::RequestPipeline;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::collections::HashMap;
use std::fmt;

const JOBS_ENDPOINT: &str = "/api/v1/jobs";

/// Lifecycle state of a scheduled job.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum JobStatus {
    Running,
    Paused,
    Error,
}

impl fmt::Display for JobStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            JobStatus::Running => write!(f, "running"),
            JobStatus::Paused => write!(f, "paused"),
            JobStatus::Error => write!(f, "error"),
        }
    }
}

/// A scheduled job as returned by the service.
#[derive(Debug, Clone, Deserialize)]
pub struct Job {
    pub id: i64,
    pub name: String,
    pub func: String,
    pub args: Option<Vec<Value>>,
    pub kwargs: Option<HashMap<String, Value>>,
    pub trigger: String,
    pub trigger_args: HashMap<String, Value>,
    pub max_instances: Option<i32>,
    pub misfire_grace_time: Option<i32>,
    pub coalesce: Option<bool>,
    pub description: Option<String>,
    pub next_run_time: Option<DateTime<Utc>>,
    pub status: JobStatus,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    pub created_by: i64,
}

/// Payload for creating a job.
#[derive(Debug, Clone, Serialize)]
pub struct JobCreate {
    pub name: String,
    pub func: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub args: Option<Vec<Value>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub kwargs: Option<HashMap<String, Value>>,
    /// Trigger kind: `cron`, `interval`, or `date`.
    pub trigger: String,
    pub trigger_args: HashMap<String, Value>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_instances: Option<i32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub misfire_grace_time: Option<i32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub coalesce: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

/// Partial update payload; unset fields are left untouched.
#[derive(Debug, Clone, Default, Serialize)]
pub struct JobUpdate {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub func: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub args: Option<Vec<Value>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub kwargs: Option<HashMap<String, Value>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub trigger: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub trigger_args: Option<HashMap<String, Value>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_instances: Option<i32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub misfire_grace_time: Option<i32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub coalesce: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<JobStatus>,
}

/// List filters; `None` fields are omitted from the query string.
#[derive(Debug, Clone, Default, Serialize)]
pub struct JobListQuery {
    pub skip: u32,
    pub limit: u32,
    pub status: Option<JobStatus>,
    pub name: Option<String>,
}

impl JobListQuery {
    pub fn page(skip: u32, limit: u32) -> Self {
        Self {
            skip,
            limit,
            ..Self::default()
        }
    }
}

#[derive(Serialize)]
struct StatusUpdate {
    status: JobStatus,
}

/// Client for the job endpoints.
#[derive(Clone)]
pub struct JobsApi {
    pipeline: RequestPipeline,
}

impl JobsApi {
    pub fn new(pipeline: RequestPipeline) -> Self {
        Self { pipeline }
    }

    pub async fn list(&self, query: &JobListQuery) -> Result<Vec<Job>> {
        self.pipeline.get_query(JOBS_ENDPOINT, query).await
    }

    pub async fn get(&self, id: i64) -> Result<Job> {
        self.pipeline.get(&format!("{}/{}", JOBS_ENDPOINT, id)).await
    }

    pub async fn create(&self, job: &JobCreate) -> Result<Job> {
        self.pipeline.post(JOBS_ENDPOINT, job).await
    }

    pub async fn update(&self, id: i64, update: &JobUpdate) -> Result<Job> {
        self.pipeline
            .put(&format!("{}/{}", JOBS_ENDPOINT, id), update)
            .await
    }

    /// Delete a job; the service returns the removed resource.
    pub async fn delete(&self, id: i64) -> Result<Job> {
        self.pipeline.delete(&format!("{}/{}", JOBS_ENDPOINT, id)).await
    }

    /// Pause or resume a job.
    pub async fn set_status(&self, id: i64, status: JobStatus) -> Result<Job> {
        self.pipeline
            .post(&format!("{}/{}/status", JOBS_ENDPOINT, id), &StatusUpdate { status })
            .await
    }

    /// Trigger an immediate run.
    pub async fn execute(&self, id: i64) -> Result<Job> {
        self.pipeline
            .post_empty(&format!("{}/{}/execute", JOBS_ENDPOINT, id))
            .await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::ClientConfig;
    use crate::credentials::CredentialStore;
    use crate::pipeline::NoopUnauthorizedHandler;
    use crate::session::SessionService;
    use crate::testutil::{MemoryStore, RecordingNotifier, ScriptedHttpClient};
    use bridge_traits::http::HttpMethod;
    use std::sync::Arc;

    const JOB: &str = r#"{
        "id": 3,
        "name": "nightly-report",
        "func": "reports.nightly:run",
        "args": null,
        "kwargs": null,
        "trigger": "cron",
        "trigger_args": {"hour": "2"},
        "max_instances": 1,
        "misfire_grace_time": 60,
        "coalesce": false,
        "description": null,
        "next_run_time": "2024-05-02T02:00:00Z",
        "status": "running",
        "created_at": "2024-05-01T08:00:00Z",
        "updated_at": "2024-05-01T08:00:00Z",
        "created_by": 1
    }"#;

    fn api(http: Arc<ScriptedHttpClient>) -> JobsApi {
        let session = SessionService::new(CredentialStore::new(Arc::new(MemoryStore::new())));
        JobsApi::new(RequestPipeline::new(
            http,
            session,
            Arc::new(RecordingNotifier::new()),
            Arc::new(NoopUnauthorizedHandler),
            ClientConfig::new("http://testserver").unwrap(),
        ))
    }

    #[tokio::test]
    async fn list_serializes_filters_into_the_query() {
        let http = Arc::new(ScriptedHttpClient::respond_with(200, "[]"));
        let jobs = api(http.clone());

        let query = JobListQuery {
            skip: 0,
            limit: 20,
            status: Some(JobStatus::Paused),
            name: None,
        };
        let result = jobs.list(&query).await.unwrap();

        assert!(result.is_empty());
        assert_eq!(
            http.last_request().url,
            "http://testserver/api/v1/jobs?skip=0&limit=20&status=paused"
        );
    }

    #[tokio::test]
    async fn get_decodes_the_job_payload() {
        let http = Arc::new(ScriptedHttpClient::respond_with(200, JOB));
        let job = api(http.clone()).get(3).await.unwrap();

        assert_eq!(job.id, 3);
        assert_eq!(job.status, JobStatus::Running);
        assert_eq!(job.trigger, "cron");
        assert_eq!(http.last_request().url, "http://testserver/api/v1/jobs/3");
    }

    #[tokio::test]
    async fn set_status_posts_to_the_status_endpoint() {
        let http = Arc::new(ScriptedHttpClient::respond_with(200, JOB));
        api(http.clone()).set_status(3, JobStatus::Paused).await.unwrap();

        let request = http.last_request();
        assert_eq!(request.method, HttpMethod::Post);
        assert_eq!(request.url, "http://testserver/api/v1/jobs/3/status");
        let body = String::from_utf8(request.body.unwrap().to_vec()).unwrap();
        assert_eq!(body, r#"{"status":"paused"}"#);
    }

    #[tokio::test]
    async fn execute_posts_without_a_body() {
        let http = Arc::new(ScriptedHttpClient::respond_with(200, JOB));
        api(http.clone()).execute(3).await.unwrap();

        let request = http.last_request();
        assert_eq!(request.url, "http://testserver/api/v1/jobs/3/execute");
        assert!(request.body.is_none());
    }

    #[tokio::test]
    async fn delete_returns_the_removed_job() {
        let http = Arc::new(ScriptedHttpClient::respond_with(200, JOB));
        let job = api(http.clone()).delete(3).await.unwrap();

        assert_eq!(job.name, "nightly-report");
        assert_eq!(http.last_request().method, HttpMethod::Delete);
    }
}
