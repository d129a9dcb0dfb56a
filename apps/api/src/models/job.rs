use std::fmt;
use std::str::FromStr;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

use super::UnknownVariant;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum JobType {
    #[serde(rename = "Full-time")]
    FullTime,
    #[serde(rename = "Part-time")]
    PartTime,
    Contract,
    Internship,
}

impl JobType {
    pub fn as_str(&self) -> &'static str {
        match self {
            JobType::FullTime => "Full-time",
            JobType::PartTime => "Part-time",
            JobType::Contract => "Contract",
            JobType::Internship => "Internship",
        }
    }
}

impl fmt::Display for JobType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for JobType {
    type Err = UnknownVariant;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "full-time" => Ok(JobType::FullTime),
            "part-time" => Ok(JobType::PartTime),
            "contract" => Ok(JobType::Contract),
            "internship" => Ok(JobType::Internship),
            _ => Err(UnknownVariant::new("job type", s)),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum JobStatus {
    Active,
    Closed,
}

impl FromStr for JobStatus {
    type Err = UnknownVariant;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "active" => Ok(JobStatus::Active),
            "closed" => Ok(JobStatus::Closed),
            _ => Err(UnknownVariant::new("job status", s)),
        }
    }
}

/// A recruiter-owned posting as seen by the ranking pipeline.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct JobPosting {
    pub id: Uuid,
    pub title: String,
    pub description: String,
    pub skills: Vec<String>,
    pub location: String,
    pub job_type: JobType,
    /// Free text such as "60k-80k" or "5-10 LPA".
    pub salary: Option<String>,
    pub status: JobStatus,
    pub posted_by: Uuid,
    pub application_count: i32,
    pub created_at: DateTime<Utc>,
}

impl JobPosting {
    pub fn is_active(&self) -> bool {
        self.status == JobStatus::Active
    }
}

/// Raw `jobs` row. Enum columns are stored as text and decoded on conversion.
#[derive(Debug, Clone, FromRow)]
pub struct JobRow {
    pub id: Uuid,
    pub title: String,
    pub description: String,
    pub skills: Vec<String>,
    pub location: String,
    pub job_type: String,
    pub salary: Option<String>,
    pub status: String,
    pub posted_by: Uuid,
    pub application_count: i32,
    pub created_at: DateTime<Utc>,
}

impl TryFrom<JobRow> for JobPosting {
    type Error = UnknownVariant;

    fn try_from(row: JobRow) -> Result<Self, Self::Error> {
        Ok(JobPosting {
            job_type: row.job_type.parse()?,
            status: row.status.parse()?,
            id: row.id,
            title: row.title,
            description: row.description,
            skills: row.skills,
            location: row.location,
            salary: row.salary,
            posted_by: row.posted_by,
            application_count: row.application_count,
            created_at: row.created_at,
        })
    }
}
