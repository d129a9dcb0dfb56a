//! Job-to-job similarity, independent of any candidate.
//!
//! skills:   |A ∩ B| / max(|A|, |B|) × 50, on lower-cased skill sets
//! job type: +25 when equal
//! location: +25 when the strings are identical
//!
//! Location uses exact equality here, unlike candidate matching, so only
//! postings for the same office or city string count. Every term is
//! symmetric in its arguments, so `similarity_score(a, b) == similarity_score(b, a)`.

use std::collections::BTreeSet;

use crate::models::job::JobPosting;
use crate::recommendation::weights::SimilarityWeights;

pub fn similarity_score(a: &JobPosting, b: &JobPosting, weights: &SimilarityWeights) -> u8 {
    let mut score = skill_overlap(&a.skills, &b.skills) * weights.skills() as f64;

    if a.job_type == b.job_type {
        score += weights.job_type() as f64;
    }
    if a.location == b.location {
        score += weights.location() as f64;
    }

    score.round().min(100.0) as u8
}

/// Intersection over the larger set, in [0, 1]. Zero when either side is empty.
fn skill_overlap(a: &[String], b: &[String]) -> f64 {
    let a: BTreeSet<String> = a.iter().map(|s| s.to_lowercase()).collect();
    let b: BTreeSet<String> = b.iter().map(|s| s.to_lowercase()).collect();
    if a.is_empty() || b.is_empty() {
        return 0.0;
    }
    let common = a.intersection(&b).count();
    common as f64 / a.len().max(b.len()) as f64
}
