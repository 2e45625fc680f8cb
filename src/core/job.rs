use crate::core::ids::IdGenerator;
use crate::db::store::JobStore;
use crate::errors::{AppError, AppResult};
use crate::models::{Job, JobStage};
use chrono::{DateTime, Utc};

/// Fields supplied when registering a job.
#[derive(Debug, Clone)]
pub struct NewJob {
    pub job_number: String,
    pub name: String,
    pub main_contractor: String,
    pub site_address: String,
    pub stage: JobStage,
}

pub struct JobLogic;

impl JobLogic {
    pub fn add<S, G>(store: &mut S, new: NewJob, now: DateTime<Utc>, ids: &mut G) -> AppResult<Job>
    where
        S: JobStore + ?Sized,
        G: IdGenerator + ?Sized,
    {
        let number = new.job_number.trim();
        if number.is_empty() {
            return Err(AppError::Other("job number must not be empty".into()));
        }
        if store.find_job_by_number(number)?.is_some() {
            return Err(AppError::DuplicateJobNumber(number.to_string()));
        }

        let mut job = Job::new(ids.next_id(), number, new.name.trim(), now);
        job.main_contractor = new.main_contractor;
        job.site_address = new.site_address;
        job.stage = new.stage;

        store.insert_job(&job)?;
        Ok(job)
    }

    pub fn list<S>(store: &mut S, include_inactive: bool) -> AppResult<Vec<Job>>
    where
        S: JobStore + ?Sized,
    {
        let mut jobs = store.list_jobs()?;
        if !include_inactive {
            jobs.retain(|j| j.active);
        }
        Ok(jobs)
    }

    /// Find a job by job number (case-insensitive) or by id.
    pub fn resolve<S>(store: &mut S, key: &str) -> AppResult<Job>
    where
        S: JobStore + ?Sized,
    {
        if let Some(job) = store.find_job_by_number(key.trim())? {
            return Ok(job);
        }
        store
            .get_job(key.trim())?
            .ok_or_else(|| AppError::JobNotFound(key.to_string()))
    }
}
