use std::cmp::Ordering;

use crate::models::job::JobPosting;

/// Total order for ranked output: higher score first, then the more recently
/// posted job, then the smaller id.
pub fn rank_order(a_score: u8, a: &JobPosting, b_score: u8, b: &JobPosting) -> Ordering {
    b_score
        .cmp(&a_score)
        .then_with(|| b.created_at.cmp(&a.created_at))
        .then_with(|| a.id.cmp(&b.id))
}
