//! Mock verdict generation. Nothing here compares the title against a real
//! registry; the verdict is random with a couple of substring biases.

use std::sync::Mutex;
use std::time::Duration;

use async_trait::async_trait;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use tracing::debug;

use crate::config::Config;
use crate::error::TitleCheckError;
use crate::types::{SignalSet, TitleMatch, VerificationResult};
use crate::validate::TitleSubmission;

/// Titles longer than this many characters get the high-probability draw.
pub const LONG_TITLE_ABOVE: usize = 20;

const EXACT_MATCH_TITLE: &str = "morning chronicle";
const BIAS_TERM: &str = "morning";
const PERIODICITY_TERMS: &[&str] = &["daily", "weekly", "monthly"];

/// Fixed comparison titles returned with every verdict.
const REGISTRY_SAMPLE: &[(&str, u8)] = &[
    ("The Morning Herald", 88),
    ("Sunrise Chronicle", 82),
    ("National Daily News", 45),
    ("Metro Times", 32),
    ("The Evening Post", 28),
];

/// Produces a verdict for a validated title.
#[async_trait]
pub trait VerdictSource: Send + Sync {
    async fn generate(&self, title: &TitleSubmission) -> Result<VerificationResult, TitleCheckError>;
}

/// Random verdicts after a fixed simulated round trip.
pub struct MockVerdictGenerator {
    delay: Duration,
    blacklist: Vec<String>,
    rng: Mutex<StdRng>,
}

impl MockVerdictGenerator {
    pub fn new(delay: Duration, blacklist: Vec<String>) -> Self {
        Self {
            delay,
            blacklist: normalize_terms(blacklist),
            rng: Mutex::new(StdRng::from_os_rng()),
        }
    }

    pub fn from_config(config: &Config) -> Self {
        Self::new(config.generator_delay, config.blacklist.clone())
    }

    /// Deterministic generator for tests and demos.
    pub fn seeded(delay: Duration, blacklist: Vec<String>, seed: u64) -> Self {
        Self {
            delay,
            blacklist: normalize_terms(blacklist),
            rng: Mutex::new(StdRng::seed_from_u64(seed)),
        }
    }
}

#[async_trait]
impl VerdictSource for MockVerdictGenerator {
    async fn generate(&self, title: &TitleSubmission) -> Result<VerificationResult, TitleCheckError> {
        let result = {
            let mut rng = self
                .rng
                .lock()
                .map_err(|_| TitleCheckError::Generator("rng lock poisoned".to_string()))?;
            draw(title, &self.blacklist, &mut *rng)
        };

        tokio::time::sleep(self.delay).await;

        debug!(
            probability = result.probability,
            status = %result.status,
            "Mock verdict generated"
        );
        Ok(result)
    }
}

/// Trim and lowercase blacklist terms, dropping blanks. An empty term would
/// match every title.
pub fn normalize_terms<I, S>(terms: I) -> Vec<String>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    terms
        .into_iter()
        .map(|t| t.as_ref().trim().to_lowercase())
        .filter(|t| !t.is_empty())
        .collect()
}

/// True when the title should get the high-probability draw.
pub fn is_biased(title: &TitleSubmission) -> bool {
    title.as_str().to_lowercase().contains(BIAS_TERM) || title.len() > LONG_TITLE_ABOVE
}

/// Draw one verdict. Biased titles land in [60, 100), everything else in [0, 30).
pub fn draw<R: Rng>(
    title: &TitleSubmission,
    blacklist: &[String],
    rng: &mut R,
) -> VerificationResult {
    let lower = title.as_str().to_lowercase();

    let probability: u8 = if is_biased(title) {
        rng.random_range(60..100)
    } else {
        rng.random_range(0..30)
    };

    let signals = SignalSet {
        exact_match: lower == EXACT_MATCH_TITLE,
        spelling: two_decimals(rng.random::<f64>()),
        phonetic: two_decimals(rng.random::<f64>()),
        semantic: two_decimals(rng.random::<f64>()),
        blacklist: blacklist.iter().any(|term| lower.contains(term.as_str())),
        prefix_suffix: rng.random::<f64>() > 0.8,
        combination: rng.random::<f64>() > 0.9,
        periodicity: PERIODICITY_TERMS.iter().any(|term| lower.contains(term)),
    };

    let similar_titles = REGISTRY_SAMPLE
        .iter()
        .map(|(t, score)| TitleMatch::new(*t, *score))
        .collect();

    VerificationResult::new(probability, signals, similar_titles)
}

fn two_decimals(x: f64) -> f64 {
    (x * 100.0).round() / 100.0
}
