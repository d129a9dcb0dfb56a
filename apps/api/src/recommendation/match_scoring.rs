//! Match Scoring: how well a candidate profile fits a single job posting.
//!
//! Pure, deterministic, total: every absent input contributes zero to its factor.
//!
//! Factors (default weights, see `MatchWeights`):
//! - skills   70: share of the job's skills covered by the profile
//! - location 10: profile city and job location overlap
//! - job type 10: preferred job type accepts the posting
//! - salary   10: posted salary meets the expectation
//!
//! Skill matching is a two-way substring test on lower-cased, trimmed strings,
//! so "node" matches "node.js" and "react native" matches "react". It also
//! yields false positives such as "java" against "javascript". The loose test
//! is part of the scoring contract; tightening it changes published scores.

use std::collections::HashSet;

use crate::models::job::JobPosting;
use crate::models::profile::CandidateProfile;
use crate::recommendation::weights::MatchWeights;

// ────────────────────────────────────────────────────────────────────────────
// Breakdown
// ────────────────────────────────────────────────────────────────────────────

/// Per-factor points awarded for one (profile, job) pair.
///
/// The reason generator reads this instead of recomputing, so explanations
/// can never disagree with the score.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct MatchBreakdown {
    /// Normalized profile skills that matched at least one job skill, in profile order.
    pub matched_skills: Vec<String>,
    pub skills: u32,
    pub location: u32,
    pub job_type: u32,
    pub salary: u32,
}

impl MatchBreakdown {
    pub fn total(&self) -> u8 {
        let sum = self.skills + self.location + self.job_type + self.salary;
        sum.min(100) as u8
    }
}

// ────────────────────────────────────────────────────────────────────────────
// Scoring
// ────────────────────────────────────────────────────────────────────────────

pub fn score_breakdown(
    profile: &CandidateProfile,
    job: &JobPosting,
    weights: &MatchWeights,
) -> MatchBreakdown {
    let profile_skills = normalize_skills(&profile.skills, true);
    let job_skills = normalize_skills(&job.skills, false);
    let matched_skills = matching_skills(&profile_skills, &job_skills);
    let skills = skills_points(matched_skills.len(), job_skills.len(), weights.skills());

    let location = if location_matches(profile.city.as_deref(), &job.location) {
        weights.location()
    } else {
        0
    };

    let job_type = match profile.preferences.preferred_job_type {
        Some(preferred) if preferred.accepts(job.job_type) => weights.job_type(),
        _ => 0,
    };

    let salary = if salary_matches(profile.preferences.expected_salary(), job.salary.as_deref()) {
        weights.salary()
    } else {
        0
    };

    MatchBreakdown {
        matched_skills,
        skills,
        location,
        job_type,
        salary,
    }
}

/// Match score in [0, 100].
#[allow(dead_code)]
pub fn match_score(profile: &CandidateProfile, job: &JobPosting, weights: &MatchWeights) -> u8 {
    score_breakdown(profile, job, weights).total()
}

/// Lower-cases and trims, dropping blanks. Profile skills are a set, so
/// case variants of the same skill collapse into one.
fn normalize_skills(skills: &[String], dedupe: bool) -> Vec<String> {
    let mut seen = HashSet::new();
    skills
        .iter()
        .map(|s| s.trim().to_lowercase())
        .filter(|s| !s.is_empty())
        .filter(|s| !dedupe || seen.insert(s.clone()))
        .collect()
}

fn matching_skills(profile_skills: &[String], job_skills: &[String]) -> Vec<String> {
    profile_skills
        .iter()
        .filter(|candidate| {
            job_skills.iter().any(|required| {
                required.contains(candidate.as_str()) || candidate.contains(required.as_str())
            })
        })
        .cloned()
        .collect()
}

/// round(matched / required × weight). Several profile skills can land on the
/// same job skill, so the ratio is capped at 1.
fn skills_points(matched: usize, required: usize, weight: u32) -> u32 {
    if required == 0 {
        return 0;
    }
    let ratio = (matched as f64 / required as f64).min(1.0);
    (ratio * weight as f64).round() as u32
}

fn location_matches(city: Option<&str>, job_location: &str) -> bool {
    let Some(city) = city.map(|c| c.trim().to_lowercase()).filter(|c| !c.is_empty()) else {
        return false;
    };
    let job_location = job_location.trim().to_lowercase();
    if job_location.is_empty() {
        return false;
    }
    job_location.contains(&city) || city.contains(&job_location)
}

fn salary_matches(expected: Option<f64>, posted: Option<&str>) -> bool {
    let Some(offered) = posted.and_then(parse_salary) else {
        return false;
    };
    match expected {
        None => true,
        Some(expected) => offered as f64 >= expected,
    }
}

/// Reads the first run of ASCII digits and treats it as thousands:
/// "60k-80k" → 60_000, "$45,000" → 45_000, "5-10 LPA" → 5_000.
/// Returns `None` when the text has no digits.
pub fn parse_salary(salary: &str) -> Option<u64> {
    let start = salary.find(|c: char| c.is_ascii_digit())?;
    let digits: &str = {
        let rest = &salary[start..];
        let end = rest
            .find(|c: char| !c.is_ascii_digit())
            .unwrap_or(rest.len());
        &rest[..end]
    };
    let value = digits.parse::<u64>().unwrap_or(u64::MAX);
    Some(value.saturating_mul(1000))
}

// ────────────────────────────────────────────────────────────────────────────
// Tests
// ────────────────────────────────────────────────────────────────────────────
