#![allow(dead_code)]

use serde::Serialize;
use thiserror::Error;

const WEIGHT_TOTAL: u64 = 100;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum WeightsError {
    #[error("{kind} weights must sum to 100, got {total}")]
    BadTotal { kind: &'static str, total: u64 },
}

/// Point allocation for candidate-to-job scoring. Always sums to 100.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct MatchWeights {
    skills: u32,
    location: u32,
    job_type: u32,
    salary: u32,
}

pub const DEFAULT_MATCH_WEIGHTS: MatchWeights = MatchWeights {
    skills: 70,
    location: 10,
    job_type: 10,
    salary: 10,
};

impl MatchWeights {
    pub fn new(skills: u32, location: u32, job_type: u32, salary: u32) -> Result<Self, WeightsError> {
        let weights = Self {
            skills,
            location,
            job_type,
            salary,
        };
        match weights.total() {
            WEIGHT_TOTAL => Ok(weights),
            total => Err(WeightsError::BadTotal {
                kind: "match",
                total,
            }),
        }
    }

    pub fn skills(&self) -> u32 {
        self.skills
    }

    pub fn location(&self) -> u32 {
        self.location
    }

    pub fn job_type(&self) -> u32 {
        self.job_type
    }

    pub fn salary(&self) -> u32 {
        self.salary
    }

    /// Widened so oversized inputs cannot wrap back to 100.
    pub fn total(&self) -> u64 {
        [self.skills, self.location, self.job_type, self.salary]
            .into_iter()
            .map(u64::from)
            .sum()
    }
}

impl Default for MatchWeights {
    fn default() -> Self {
        DEFAULT_MATCH_WEIGHTS
    }
}

/// Point allocation for job-to-job similarity. Always sums to 100.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct SimilarityWeights {
    skills: u32,
    job_type: u32,
    location: u32,
}

pub const DEFAULT_SIMILARITY_WEIGHTS: SimilarityWeights = SimilarityWeights {
    skills: 50,
    job_type: 25,
    location: 25,
};

impl SimilarityWeights {
    pub fn new(skills: u32, job_type: u32, location: u32) -> Result<Self, WeightsError> {
        let weights = Self {
            skills,
            job_type,
            location,
        };
        match weights.total() {
            WEIGHT_TOTAL => Ok(weights),
            total => Err(WeightsError::BadTotal {
                kind: "similarity",
                total,
            }),
        }
    }

    pub fn skills(&self) -> u32 {
        self.skills
    }

    pub fn job_type(&self) -> u32 {
        self.job_type
    }

    pub fn location(&self) -> u32 {
        self.location
    }

    pub fn total(&self) -> u64 {
        [self.skills, self.job_type, self.location]
            .into_iter()
            .map(u64::from)
            .sum()
    }
}

impl Default for SimilarityWeights {
    fn default() -> Self {
        DEFAULT_SIMILARITY_WEIGHTS
    }
}
