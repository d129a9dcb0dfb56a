use std::collections::HashSet;

use async_trait::async_trait;
use sqlx::PgPool;
use tracing::warn;
use uuid::Uuid;

use crate::models::application::ApplicationRecord;
use crate::models::job::{JobPosting, JobRow};
use crate::models::profile::{CandidateProfile, ProfileRow};
use crate::store::{RecommendationStore, StoreError};

const JOB_COLUMNS: &str = "id, title, description, skills, location, job_type, salary, \
                           status, posted_by, application_count, created_at";

/// PostgreSQL-backed collaborator. Issues reads only.
#[derive(Clone)]
pub struct PgStore {
    pool: PgPool,
}

impl PgStore {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

/// Rows with enum text no variant accepts are skipped and logged, so one bad
/// posting cannot empty a whole batch.
fn decode_jobs(rows: Vec<JobRow>) -> Vec<JobPosting> {
    rows.into_iter()
        .filter_map(|row| {
            let id = row.id;
            JobPosting::try_from(row)
                .map_err(|err| warn!("Skipping undecodable job {id}: {err}"))
                .ok()
        })
        .collect()
}

fn sql_limit(cap: usize) -> i64 {
    i64::try_from(cap).unwrap_or(i64::MAX)
}

#[async_trait]
impl RecommendationStore for PgStore {
    async fn get_profile(&self, candidate_id: Uuid) -> Result<Option<CandidateProfile>, StoreError> {
        let row = sqlx::query_as::<_, ProfileRow>(
            r#"
            SELECT user_id, skills, city, phone_number, bio, resume_url, experience, education,
                   preferred_job_type, expected_salary, remote_work_preference, willing_to_relocate
            FROM candidate_profiles
            WHERE user_id = $1
            "#,
        )
        .bind(candidate_id)
        .fetch_optional(&self.pool)
        .await?;

        Ok(row.map(CandidateProfile::try_from).transpose()?)
    }

    async fn get_application_job_ids(&self, candidate_id: Uuid) -> Result<HashSet<Uuid>, StoreError> {
        let records = sqlx::query_as::<_, ApplicationRecord>(
            "SELECT job_id, student_id FROM applications WHERE student_id = $1",
        )
        .bind(candidate_id)
        .fetch_all(&self.pool)
        .await?;

        Ok(records.into_iter().map(|record| record.job_id).collect())
    }

    async fn query_active_jobs(
        &self,
        exclude_ids: &HashSet<Uuid>,
        cap: usize,
    ) -> Result<Vec<JobPosting>, StoreError> {
        let excluded: Vec<Uuid> = exclude_ids.iter().copied().collect();
        let rows = sqlx::query_as::<_, JobRow>(&format!(
            r#"
            SELECT {JOB_COLUMNS}
            FROM jobs
            WHERE status = 'Active' AND NOT (id = ANY($1))
            ORDER BY created_at DESC, id
            LIMIT $2
            "#
        ))
        .bind(&excluded)
        .bind(sql_limit(cap))
        .fetch_all(&self.pool)
        .await?;

        Ok(decode_jobs(rows))
    }

    async fn get_job(&self, job_id: Uuid) -> Result<Option<JobPosting>, StoreError> {
        let row = sqlx::query_as::<_, JobRow>(&format!(
            "SELECT {JOB_COLUMNS} FROM jobs WHERE id = $1"
        ))
        .bind(job_id)
        .fetch_optional(&self.pool)
        .await?;

        Ok(row.map(JobPosting::try_from).transpose()?)
    }

    async fn query_related_jobs(
        &self,
        target: &JobPosting,
        exclude_id: Uuid,
        cap: usize,
    ) -> Result<Vec<JobPosting>, StoreError> {
        let rows = sqlx::query_as::<_, JobRow>(&format!(
            r#"
            SELECT {JOB_COLUMNS}
            FROM jobs
            WHERE status = 'Active'
              AND id <> $1
              AND (skills && $2 OR job_type = $3 OR location = $4)
            ORDER BY created_at DESC, id
            LIMIT $5
            "#
        ))
        .bind(exclude_id)
        .bind(&target.skills)
        .bind(target.job_type.as_str())
        .bind(&target.location)
        .bind(sql_limit(cap))
        .fetch_all(&self.pool)
        .await?;

        Ok(decode_jobs(rows))
    }
}
