use sqlx::FromRow;
use uuid::Uuid;

/// The slice of an application the recommendation service reads.
/// Only `job_id` feeds the exclusion set; `student_id` identifies the owner.
#[derive(Debug, Clone, PartialEq, Eq, FromRow)]
pub struct ApplicationRecord {
    pub job_id: Uuid,
    pub student_id: Uuid,
}
