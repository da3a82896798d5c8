use std::fmt;

use serde::{Deserialize, Serialize};

// --- Verdict ---

/// Categorical outcome assigned from the probability score.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Status {
    Approved,
    Risky,
    Rejected,
}

/// Above this probability a title is rejected outright.
pub const REJECTED_ABOVE: u8 = 70;
/// Above this probability (and not rejected) a title is flagged for review.
pub const RISKY_ABOVE: u8 = 40;

impl Status {
    pub fn from_probability(probability: u8) -> Self {
        if probability > REJECTED_ABOVE {
            Status::Rejected
        } else if probability > RISKY_ABOVE {
            Status::Risky
        } else {
            Status::Approved
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Status::Approved => "Approved",
            Status::Risky => "Risky",
            Status::Rejected => "Rejected",
        }
    }
}

impl fmt::Display for Status {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Risk label derived from a comparison title's score. Never stored.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum RiskLevel {
    High,
    Medium,
    Low,
}

impl RiskLevel {
    pub fn from_score(score: u8) -> Self {
        if score > 75 {
            RiskLevel::High
        } else if score > 40 {
            RiskLevel::Medium
        } else {
            RiskLevel::Low
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            RiskLevel::High => "High",
            RiskLevel::Medium => "Medium",
            RiskLevel::Low => "Low",
        }
    }
}

impl fmt::Display for RiskLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// --- Result payload ---

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TitleMatch {
    pub title: String,
    /// 0-100
    pub score: u8,
}

impl TitleMatch {
    pub fn new(title: impl Into<String>, score: u8) -> Self {
        Self {
            title: title.into(),
            score: score.min(100),
        }
    }

    pub fn risk_level(&self) -> RiskLevel {
        RiskLevel::from_score(self.score)
    }
}

/// The eight heuristic indicators reported alongside a verdict.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SignalSet {
    pub exact_match: bool,
    /// Scores are in [0, 1], rounded to two decimals.
    pub spelling: f64,
    pub phonetic: f64,
    pub semantic: f64,
    pub blacklist: bool,
    pub prefix_suffix: bool,
    pub combination: bool,
    pub periodicity: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VerificationResult {
    /// 0-100
    pub probability: u8,
    pub status: Status,
    pub signals: SignalSet,
    pub similar_titles: Vec<TitleMatch>,
}

impl VerificationResult {
    /// Build a result whose status is derived from `probability`.
    pub fn new(probability: u8, signals: SignalSet, similar_titles: Vec<TitleMatch>) -> Self {
        let probability = probability.min(100);
        Self {
            probability,
            status: Status::from_probability(probability),
            signals,
            similar_titles,
        }
    }
}
