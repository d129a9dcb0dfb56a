use crate::models::job::JobPosting;
use crate::models::profile::{CandidateProfile, PreferredJobType};
use crate::recommendation::match_scoring::MatchBreakdown;

pub const FALLBACK_REASON: &str = "Based on your profile and job market trends";

const MAX_LISTED_SKILLS: usize = 3;

/// Human-readable reasons for a match, one per factor that scored, in the
/// fixed order skills, location, job type, salary.
///
/// Falls back to a single generic reason when nothing scored.
pub fn match_reasons(
    profile: &CandidateProfile,
    job: &JobPosting,
    breakdown: &MatchBreakdown,
) -> Vec<String> {
    let mut reasons = Vec::new();

    if breakdown.skills > 0 {
        let listed: Vec<String> = breakdown
            .matched_skills
            .iter()
            .take(MAX_LISTED_SKILLS)
            .map(|s| capitalize(s))
            .collect();
        reasons.push(format!(
            "Matches {} of your skills: {}",
            breakdown.matched_skills.len(),
            listed.join(", ")
        ));
    }

    if breakdown.location > 0 {
        reasons.push(format!("Located in your preferred area: {}", job.location));
    }

    if breakdown.job_type > 0 {
        match profile.preferences.preferred_job_type {
            Some(PreferredJobType::Any) => {
                reasons.push(format!("Open to any job type: {} position", job.job_type))
            }
            _ => reasons.push(format!("Matches your preference: {} position", job.job_type)),
        }
    }

    if breakdown.salary > 0 {
        match (profile.preferences.expected_salary(), job.salary.as_deref()) {
            (None, Some(salary)) => reasons.push(format!("Lists a salary of {salary}")),
            _ => reasons.push("Salary meets your expectations".to_string()),
        }
    }

    if reasons.is_empty() {
        reasons.push(FALLBACK_REASON.to_string());
    }

    reasons
}

fn capitalize(skill: &str) -> String {
    let mut chars = skill.chars();
    match chars.next() {
        None => String::new(),
        Some(first) => first.to_uppercase().collect::<String>() + chars.as_str(),
    }
}
