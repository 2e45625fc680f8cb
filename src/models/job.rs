use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum JobStage {
    Prestart,
    InProgress,
    Snagging,
    Complete,
}

impl JobStage {
    pub fn as_str(&self) -> &'static str {
        match self {
            JobStage::Prestart => "prestart",
            JobStage::InProgress => "in_progress",
            JobStage::Snagging => "snagging",
            JobStage::Complete => "complete",
        }
    }

    pub fn from_db_str(s: &str) -> Option<Self> {
        match s {
            "prestart" => Some(JobStage::Prestart),
            "in_progress" => Some(JobStage::InProgress),
            "snagging" => Some(JobStage::Snagging),
            "complete" => Some(JobStage::Complete),
            _ => None,
        }
    }

    pub fn from_cli(s: &str) -> Option<Self> {
        JobStage::from_db_str(&s.trim().to_lowercase().replace(['-', ' '], "_"))
    }
}

impl fmt::Display for JobStage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Job {
    pub id: String,
    pub job_number: String, // human key, e.g. "CU-001"
    pub name: String,
    pub main_contractor: String,
    pub site_address: String,
    pub stage: JobStage,
    pub active: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Job {
    pub fn new(
        id: impl Into<String>,
        job_number: impl Into<String>,
        name: impl Into<String>,
        now: DateTime<Utc>,
    ) -> Self {
        Self {
            id: id.into(),
            job_number: job_number.into(),
            name: name.into(),
            main_contractor: String::new(),
            site_address: String::new(),
            stage: JobStage::Prestart,
            active: true,
            created_at: now,
            updated_at: now,
        }
    }
}
