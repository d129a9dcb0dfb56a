//! Shared builders for recommendation tests.

use chrono::{DateTime, Duration, TimeZone, Utc};
use uuid::Uuid;

use crate::models::job::{JobPosting, JobStatus, JobType};
use crate::models::profile::CandidateProfile;

pub fn profile(skills: &[&str], city: Option<&str>) -> CandidateProfile {
    CandidateProfile {
        user_id: Uuid::new_v4(),
        skills: skills.iter().map(|s| s.to_string()).collect(),
        city: city.map(str::to_string),
        ..Default::default()
    }
}

/// An active full-time posting in Pune with no salary, posted at a fixed instant.
pub fn job(skills: &[&str]) -> JobPosting {
    JobPosting {
        id: Uuid::new_v4(),
        title: "Software Engineer".to_string(),
        description: "Build and run services".to_string(),
        skills: skills.iter().map(|s| s.to_string()).collect(),
        location: "Pune".to_string(),
        job_type: JobType::FullTime,
        salary: None,
        status: JobStatus::Active,
        posted_by: Uuid::new_v4(),
        application_count: 0,
        created_at: epoch(),
    }
}

/// A posting created `minutes` after the fixture epoch.
pub fn job_posted_at(skills: &[&str], minutes: i64) -> JobPosting {
    JobPosting {
        created_at: epoch() + Duration::minutes(minutes),
        ..job(skills)
    }
}

fn epoch() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2024, 1, 1, 9, 0, 0)
        .single()
        .unwrap_or_default()
}
