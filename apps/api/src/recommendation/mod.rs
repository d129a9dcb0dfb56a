// Job recommendations: candidate-to-job matching with explanations, and
// job-to-job similarity. Scorers are pure; the engine and finder own all I/O.

pub mod collaborator;
pub mod engine;
pub mod handlers;
pub mod limits;
pub mod match_scoring;
pub mod observer;
pub mod ranking;
pub mod reasons;
pub mod similar_jobs;
pub mod similarity;
pub mod weights;

#[cfg(test)]
pub(crate) mod fixtures;
