use serde::{Deserialize, Serialize};

use crate::models::profile::CandidateProfile;

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum Impact {
    Critical,
    High,
    Medium,
    Low,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ProfileSuggestion {
    pub field: String,
    pub title: String,
    pub message: String,
    pub impact: Impact,
    pub priority: u8,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProfileInsights {
    pub profile_completeness: u8,
    pub suggestions: Vec<ProfileSuggestion>,
    pub suggested_skills: Vec<String>,
}

// Sums to 100.
const BASIC_INFO_WEIGHT: f64 = 20.0;
const CONTACT_WEIGHT: f64 = 10.0;
const BIO_WEIGHT: f64 = 10.0;
const SKILLS_WEIGHT: f64 = 20.0;
const EXPERIENCE_WEIGHT: f64 = 15.0;
const EDUCATION_WEIGHT: f64 = 15.0;
const RESUME_WEIGHT: f64 = 10.0;

const FULL_BIO_CHARS: usize = 50;
const FULL_SKILL_COUNT: usize = 5;
const MIN_SKILLS: usize = 3;

const GENERIC_SKILLS: &[&str] = &[
    "Communication",
    "Problem Solving",
    "Teamwork",
    "Time Management",
];

pub fn compute_profile_insights(profile: &CandidateProfile, has_account: bool) -> ProfileInsights {
    ProfileInsights {
        profile_completeness: profile_completeness(profile, has_account),
        suggestions: profile_suggestions(profile),
        suggested_skills: suggested_skills(profile),
    }
}

/// Weighted completeness in [0, 100]. `has_account` stands in for the basic
/// name/email block, which every registered user has.
pub fn profile_completeness(profile: &CandidateProfile, has_account: bool) -> u8 {
    let mut score = 0.0;

    if has_account {
        score += BASIC_INFO_WEIGHT;
    }

    if is_filled(profile.phone_number.as_deref()) {
        score += CONTACT_WEIGHT * 0.5;
    }
    if is_filled(profile.city.as_deref()) {
        score += CONTACT_WEIGHT * 0.5;
    }

    let bio_chars = profile.bio.as_deref().map_or(0, |b| b.chars().count());
    if bio_chars >= FULL_BIO_CHARS {
        score += BIO_WEIGHT;
    } else if bio_chars > 0 {
        score += BIO_WEIGHT * 0.5;
    }

    if !profile.skills.is_empty() {
        let coverage = (profile.skills.len() as f64 / FULL_SKILL_COUNT as f64).min(1.0);
        score += SKILLS_WEIGHT * coverage;
    }

    if !profile.experience.is_empty() {
        let has_complete = profile
            .experience
            .iter()
            .any(|e| is_filled(e.job_title.as_deref()) && is_filled(e.company.as_deref()));
        score += if has_complete {
            EXPERIENCE_WEIGHT
        } else {
            EXPERIENCE_WEIGHT * 0.5
        };
    }

    if !profile.education.is_empty() {
        let has_complete = profile
            .education
            .iter()
            .any(|e| is_filled(e.degree.as_deref()) && is_filled(e.college.as_deref()));
        score += if has_complete {
            EDUCATION_WEIGHT
        } else {
            EDUCATION_WEIGHT * 0.5
        };
    }

    if is_filled(profile.resume_url.as_deref()) {
        score += RESUME_WEIGHT;
    }

    (score.round() as u8).min(100)
}

/// Improvement suggestions, most important first.
pub fn profile_suggestions(profile: &CandidateProfile) -> Vec<ProfileSuggestion> {
    let bio_chars = profile.bio.as_deref().map_or(0, |b| b.chars().count());

    let checks: [(bool, &str, &str, &str, Impact); 9] = [
        (
            profile.skills.len() < MIN_SKILLS,
            "skills",
            "Add Your Skills",
            "Add at least 3 skills to get better job recommendations",
            Impact::Critical,
        ),
        (
            !is_filled(profile.resume_url.as_deref()),
            "resume",
            "Upload Your Resume",
            "Upload your resume to improve your chances",
            Impact::Critical,
        ),
        (
            !is_filled(profile.phone_number.as_deref()),
            "phoneNumber",
            "Add Contact Number",
            "Add your phone number so recruiters can reach you",
            Impact::High,
        ),
        (
            bio_chars < FULL_BIO_CHARS,
            "bio",
            "Write Professional Summary",
            "Add a compelling bio (minimum 50 characters) to stand out",
            Impact::High,
        ),
        (
            profile.experience.is_empty(),
            "experience",
            "Add Work Experience",
            "Add your work experience, internships, or projects",
            Impact::High,
        ),
        (
            !is_filled(profile.city.as_deref()),
            "city",
            "Add Your Location",
            "Add your city to get location-based job recommendations",
            Impact::Medium,
        ),
        (
            profile.education.is_empty(),
            "education",
            "Add Education Details",
            "Add your educational background",
            Impact::Medium,
        ),
        (
            profile.preferences.preferred_job_type.is_none(),
            "preferences.preferredJobType",
            "Set Job Type Preference",
            "Tell us if you prefer Full-time, Part-time, or Internship",
            Impact::Low,
        ),
        (
            profile.preferences.expected_salary().is_none(),
            "preferences.expectedSalary",
            "Set Salary Expectations",
            "Add your minimum salary expectation",
            Impact::Low,
        ),
    ];

    checks
        .into_iter()
        .zip(1u8..)
        .filter(|((missing, ..), _)| *missing)
        .map(|((_, field, title, message, impact), priority)| ProfileSuggestion {
            field: field.to_string(),
            title: title.to_string(),
            message: message.to_string(),
            impact,
            priority,
        })
        .collect()
}

/// Generic soft skills the profile lacks, offered only to thin profiles.
pub fn suggested_skills(profile: &CandidateProfile) -> Vec<String> {
    if profile.skills.len() >= FULL_SKILL_COUNT {
        return Vec::new();
    }
    GENERIC_SKILLS
        .iter()
        .filter(|generic| {
            !profile
                .skills
                .iter()
                .any(|owned| owned.trim().eq_ignore_ascii_case(generic))
        })
        .map(|generic| generic.to_string())
        .collect()
}

fn is_filled(value: Option<&str>) -> bool {
    value.is_some_and(|v| !v.trim().is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::profile::{EducationEntry, ExperienceEntry, PreferredJobType};

    fn complete_profile() -> CandidateProfile {
        let mut profile = CandidateProfile {
            skills: ["Rust", "SQL", "Docker", "Kafka", "Go"]
                .iter()
                .map(|s| s.to_string())
                .collect(),
            city: Some("Pune".to_string()),
            phone_number: Some("+91 90000 00000".to_string()),
            bio: Some("Backend engineer focused on data-heavy services and reliability.".to_string()),
            resume_url: Some("/uploads/resume.pdf".to_string()),
            experience: vec![ExperienceEntry {
                job_title: Some("Engineer".to_string()),
                company: Some("Acme".to_string()),
            }],
            education: vec![EducationEntry {
                degree: Some("B.Tech".to_string()),
                college: Some("COEP".to_string()),
            }],
            ..Default::default()
        };
        profile.preferences.preferred_job_type = Some(PreferredJobType::FullTime);
        profile.preferences.expected_salary = 60000.0;
        profile
    }

    #[test]
    fn test_complete_profile_scores_100_with_no_suggestions() {
        let profile = complete_profile();
        assert_eq!(profile_completeness(&profile, true), 100);
        assert!(profile_suggestions(&profile).is_empty());
        assert!(suggested_skills(&profile).is_empty());
    }

    #[test]
    fn test_empty_profile_scores_only_account() {
        let profile = CandidateProfile::default();
        assert_eq!(profile_completeness(&profile, true), 20);
        assert_eq!(profile_completeness(&profile, false), 0);
    }

    #[test]
    fn test_partial_credit() {
        let profile = CandidateProfile {
            skills: vec!["Rust".to_string(), "Go".to_string()],
            bio: Some("Short bio".to_string()),
            experience: vec![ExperienceEntry {
                job_title: Some("Intern".to_string()),
                company: None,
            }],
            ..Default::default()
        };
        // 20 + bio 5 + skills 20×2/5=8 + experience 7.5 = 40.5 → 41
        assert_eq!(profile_completeness(&profile, true), 41);
    }

    #[test]
    fn test_suggestions_ordered_by_priority() {
        let profile = CandidateProfile::default();
        let suggestions = profile_suggestions(&profile);
        let priorities: Vec<u8> = suggestions.iter().map(|s| s.priority).collect();
        assert_eq!(priorities, (1..=9).collect::<Vec<u8>>());
        assert_eq!(suggestions[0].field, "skills");
        assert_eq!(suggestions[0].impact, Impact::Critical);
        assert_eq!(suggestions[8].field, "preferences.expectedSalary");
    }

    #[test]
    fn test_priority_kept_when_earlier_checks_pass() {
        let mut profile = complete_profile();
        profile.city = None;
        let suggestions = profile_suggestions(&profile);
        assert_eq!(suggestions.len(), 1);
        assert_eq!(suggestions[0].field, "city");
        assert_eq!(suggestions[0].priority, 6);
    }

    #[test]
    fn test_suggested_skills_skip_owned_ones() {
        let profile = CandidateProfile {
            skills: vec!["teamwork".to_string(), "Rust".to_string()],
            ..Default::default()
        };
        assert_eq!(
            suggested_skills(&profile),
            vec!["Communication", "Problem Solving", "Time Management"]
        );
    }
}
