use std::str::FromStr;

use serde::{Deserialize, Serialize};
use sqlx::types::Json;
use sqlx::FromRow;
use uuid::Uuid;

use super::job::JobType;
use super::UnknownVariant;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum PreferredJobType {
    #[serde(rename = "Full-time")]
    FullTime,
    #[serde(rename = "Part-time")]
    PartTime,
    Internship,
    Contract,
    Any,
}

impl PreferredJobType {
    /// True when a posting of `job_type` satisfies this preference.
    pub fn accepts(&self, job_type: JobType) -> bool {
        match self {
            PreferredJobType::Any => true,
            PreferredJobType::FullTime => job_type == JobType::FullTime,
            PreferredJobType::PartTime => job_type == JobType::PartTime,
            PreferredJobType::Internship => job_type == JobType::Internship,
            PreferredJobType::Contract => job_type == JobType::Contract,
        }
    }
}

impl FromStr for PreferredJobType {
    type Err = UnknownVariant;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "full-time" => Ok(PreferredJobType::FullTime),
            "part-time" => Ok(PreferredJobType::PartTime),
            "internship" => Ok(PreferredJobType::Internship),
            "contract" => Ok(PreferredJobType::Contract),
            "any" => Ok(PreferredJobType::Any),
            _ => Err(UnknownVariant::new("preferred job type", s)),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum RemoteWorkPreference {
    Remote,
    Hybrid,
    #[serde(rename = "On-site")]
    OnSite,
    #[default]
    Any,
}

impl FromStr for RemoteWorkPreference {
    type Err = UnknownVariant;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "remote" => Ok(RemoteWorkPreference::Remote),
            "hybrid" => Ok(RemoteWorkPreference::Hybrid),
            "on-site" => Ok(RemoteWorkPreference::OnSite),
            "any" => Ok(RemoteWorkPreference::Any),
            _ => Err(UnknownVariant::new("remote work preference", s)),
        }
    }
}

/// Job-search preferences.
///
/// Defaults: no preferred job type, `expected_salary` of 0 (unset),
/// remote preference `Any`, not willing to relocate.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Preferences {
    pub preferred_job_type: Option<PreferredJobType>,
    pub expected_salary: f64,
    pub remote_work_preference: RemoteWorkPreference,
    pub willing_to_relocate: bool,
}

impl Preferences {
    /// The expected salary, or `None` when it was left at 0.
    pub fn expected_salary(&self) -> Option<f64> {
        (self.expected_salary > 0.0).then_some(self.expected_salary)
    }
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ExperienceEntry {
    pub job_title: Option<String>,
    pub company: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct EducationEntry {
    pub degree: Option<String>,
    pub college: Option<String>,
}

/// A candidate's profile. Skills are free text and compared case-insensitively.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CandidateProfile {
    pub user_id: Uuid,
    pub skills: Vec<String>,
    pub city: Option<String>,
    pub phone_number: Option<String>,
    pub bio: Option<String>,
    pub resume_url: Option<String>,
    pub experience: Vec<ExperienceEntry>,
    pub education: Vec<EducationEntry>,
    pub preferences: Preferences,
}

#[derive(Debug, Clone, FromRow)]
pub struct ProfileRow {
    pub user_id: Uuid,
    pub skills: Vec<String>,
    pub city: Option<String>,
    pub phone_number: Option<String>,
    pub bio: Option<String>,
    pub resume_url: Option<String>,
    pub experience: Json<Vec<ExperienceEntry>>,
    pub education: Json<Vec<EducationEntry>>,
    pub preferred_job_type: Option<String>,
    pub expected_salary: Option<f64>,
    pub remote_work_preference: Option<String>,
    pub willing_to_relocate: Option<bool>,
}

impl TryFrom<ProfileRow> for CandidateProfile {
    type Error = UnknownVariant;

    fn try_from(row: ProfileRow) -> Result<Self, Self::Error> {
        let preferred_job_type = row
            .preferred_job_type
            .as_deref()
            .filter(|s| !s.trim().is_empty())
            .map(str::parse::<PreferredJobType>)
            .transpose()?;
        let remote_work_preference = row
            .remote_work_preference
            .as_deref()
            .filter(|s| !s.trim().is_empty())
            .map(str::parse::<RemoteWorkPreference>)
            .transpose()?
            .unwrap_or_default();

        Ok(CandidateProfile {
            user_id: row.user_id,
            skills: row.skills,
            city: row.city,
            phone_number: row.phone_number,
            bio: row.bio,
            resume_url: row.resume_url,
            experience: row.experience.0,
            education: row.education.0,
            preferences: Preferences {
                preferred_job_type,
                expected_salary: row.expected_salary.unwrap_or(0.0),
                remote_work_preference,
                willing_to_relocate: row.willing_to_relocate.unwrap_or(false),
            },
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn row() -> ProfileRow {
        ProfileRow {
            user_id: Uuid::new_v4(),
            skills: vec!["Rust".to_string()],
            city: Some("Pune".to_string()),
            phone_number: None,
            bio: None,
            resume_url: None,
            experience: Json(vec![]),
            education: Json(vec![]),
            preferred_job_type: None,
            expected_salary: None,
            remote_work_preference: None,
            willing_to_relocate: None,
        }
    }

    #[test]
    fn test_missing_preferences_take_defaults() {
        let profile = CandidateProfile::try_from(row()).unwrap();
        assert_eq!(profile.preferences, Preferences::default());
        assert_eq!(profile.preferences.expected_salary(), None);
        assert_eq!(
            profile.preferences.remote_work_preference,
            RemoteWorkPreference::Any
        );
    }

    #[test]
    fn test_preferences_decode_case_insensitively() {
        let mut raw = row();
        raw.preferred_job_type = Some("full-time".to_string());
        raw.remote_work_preference = Some("On-site".to_string());
        raw.expected_salary = Some(45000.0);

        let profile = CandidateProfile::try_from(raw).unwrap();
        assert_eq!(
            profile.preferences.preferred_job_type,
            Some(PreferredJobType::FullTime)
        );
        assert_eq!(
            profile.preferences.remote_work_preference,
            RemoteWorkPreference::OnSite
        );
        assert_eq!(profile.preferences.expected_salary(), Some(45000.0));
    }

    #[test]
    fn test_any_preference_accepts_every_job_type() {
        for job_type in [
            JobType::FullTime,
            JobType::PartTime,
            JobType::Contract,
            JobType::Internship,
        ] {
            assert!(PreferredJobType::Any.accepts(job_type));
        }
        assert!(!PreferredJobType::Internship.accepts(JobType::FullTime));
    }
}
