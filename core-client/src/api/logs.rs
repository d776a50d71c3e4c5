//! Job execution log endpoints.

use crate::error::Result;
use crate::pipeline::RequestPipeline;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

const LOGS_ENDPOINT: &str = "/api/v1/logs";

/// One recorded job run.
#[derive(Debug, Clone, Deserialize)]
pub struct JobLog {
    pub id: i64,
    pub job_id: i64,
    pub status: String,
    pub start_time: DateTime<Utc>,
    pub end_time: Option<DateTime<Utc>>,
    /// Run duration in seconds.
    pub duration: Option<f64>,
    pub error_message: Option<String>,
    pub output: Option<String>,
}

/// List filters; `None` fields are omitted from the query string.
#[derive(Debug, Clone, Default, Serialize)]
pub struct LogListQuery {
    pub skip: u32,
    pub limit: u32,
    pub job_id: Option<i64>,
    pub status: Option<String>,
    pub start_date: Option<DateTime<Utc>>,
    pub end_date: Option<DateTime<Utc>>,
}

impl LogListQuery {
    pub fn page(skip: u32, limit: u32) -> Self {
        Self {
            skip,
            limit,
            ..Self::default()
        }
    }

    pub fn for_job(mut self, job_id: i64) -> Self {
        self.job_id = Some(job_id);
        self
    }
}

/// Client for the execution log endpoints.
#[derive(Clone)]
pub struct LogsApi {
    pipeline: RequestPipeline,
}

impl LogsApi {
    pub fn new(pipeline: RequestPipeline) -> Self {
        Self { pipeline }
    }

    pub async fn list(&self, query: &LogListQuery) -> Result<Vec<JobLog>> {
        self.pipeline.get_query(LOGS_ENDPOINT, query).await
    }

    pub async fn get(&self, id: i64) -> Result<JobLog> {
        self.pipeline.get(&format!("{}/{}", LOGS_ENDPOINT, id)).await
    }

    /// Delete one log entry; the service returns the removed resource.
    pub async fn delete(&self, id: i64) -> Result<JobLog> {
        self.pipeline.delete(&format!("{}/{}", LOGS_ENDPOINT, id)).await
    }

    /// Delete every log entry recorded for a job, returning the removed
    /// entries.
    pub async fn delete_for_job(&self, job_id: i64) -> Result<Vec<JobLog>> {
        self.pipeline
            .delete(&format!("{}/job/{}", LOGS_ENDPOINT, job_id))
            .await
    }
}
