//! Signal table: every indicator in a [`SignalSet`] maps to a label, a
//! description template and one uniform severity rule.

use serde::{Deserialize, Serialize};

use crate::types::SignalSet;

/// Scores above this count as a hit.
pub const SCORE_HIT_ABOVE: f64 = 0.5;
/// Scores above this are a hard failure rather than a warning.
pub const SCORE_FAIL_ABOVE: f64 = 0.8;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum SignalKind {
    ExactMatch,
    Spelling,
    Phonetic,
    Semantic,
    Blacklist,
    PrefixSuffix,
    Combination,
    Periodicity,
}

impl SignalKind {
    /// Display order.
    pub const ALL: [SignalKind; 8] = [
        SignalKind::ExactMatch,
        SignalKind::Spelling,
        SignalKind::Phonetic,
        SignalKind::Semantic,
        SignalKind::Blacklist,
        SignalKind::PrefixSuffix,
        SignalKind::Combination,
        SignalKind::Periodicity,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            SignalKind::ExactMatch => "Exact Match",
            SignalKind::Spelling => "Spelling Similarity",
            SignalKind::Phonetic => "Phonetic Similarity",
            SignalKind::Semantic => "Semantic Similarity",
            SignalKind::Blacklist => "Blacklist Check",
            SignalKind::PrefixSuffix => "Prefix/Suffix",
            SignalKind::Combination => "Combination Check",
            SignalKind::Periodicity => "Periodicity Check",
        }
    }

    /// Human-readable explanation of `value` for this signal.
    pub fn describe(&self, value: SignalValue) -> String {
        match (self, value) {
            (SignalKind::Spelling, SignalValue::Score(s)) => {
                format!("Spelling similarity is {}%.", percent(s))
            }
            (SignalKind::Phonetic, SignalValue::Score(s)) => {
                format!("Sounds {}% like existing titles.", percent(s))
            }
            (SignalKind::Semantic, SignalValue::Score(s)) => {
                format!("Meaning is {}% similar.", percent(s))
            }
            (_, SignalValue::Score(s)) => format!("{} scored {}%.", self.label(), percent(s)),
            (_, SignalValue::Flag(hit)) => {
                let (on, off) = self.flag_text();
                let text = if hit { on } else { off };
                text.to_string()
            }
        }
    }

    fn flag_text(&self) -> (&'static str, &'static str) {
        match self {
            SignalKind::ExactMatch => ("Found identical title.", "No identical match found."),
            SignalKind::Blacklist => ("Contains prohibited words.", "No prohibited words detected."),
            SignalKind::PrefixSuffix => ("Common prefix/suffix detected.", "Unique structure."),
            SignalKind::Combination => ("Possible title combination.", "Original phrasing."),
            SignalKind::Periodicity => ("Contains periodicity suffix.", "No common suffix added."),
            SignalKind::Spelling | SignalKind::Phonetic | SignalKind::Semantic => {
                ("Similarity detected.", "No similarity detected.")
            }
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", content = "value", rename_all = "camelCase")]
pub enum SignalValue {
    Flag(bool),
    Score(f64),
}

impl SignalValue {
    pub fn severity(&self) -> Severity {
        match *self {
            SignalValue::Flag(false) => Severity::Pass,
            SignalValue::Flag(true) => Severity::Fail,
            SignalValue::Score(s) if s > SCORE_FAIL_ABOVE => Severity::Fail,
            SignalValue::Score(s) if s > SCORE_HIT_ABOVE => Severity::Warning,
            SignalValue::Score(_) => Severity::Pass,
        }
    }
}

/// Outcome of one signal, driving the icon next to it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Severity {
    Pass,
    Warning,
    Fail,
}

impl Severity {
    pub fn is_favorable(&self) -> bool {
        matches!(self, Severity::Pass)
    }
}

/// One evaluated row of the signal table.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SignalEntry {
    pub kind: SignalKind,
    pub value: SignalValue,
}

impl SignalEntry {
    pub fn severity(&self) -> Severity {
        self.value.severity()
    }

    pub fn label(&self) -> &'static str {
        self.kind.label()
    }

    pub fn description(&self) -> String {
        self.kind.describe(self.value)
    }
}

impl SignalSet {
    pub fn value(&self, kind: SignalKind) -> SignalValue {
        match kind {
            SignalKind::ExactMatch => SignalValue::Flag(self.exact_match),
            SignalKind::Spelling => SignalValue::Score(self.spelling),
            SignalKind::Phonetic => SignalValue::Score(self.phonetic),
            SignalKind::Semantic => SignalValue::Score(self.semantic),
            SignalKind::Blacklist => SignalValue::Flag(self.blacklist),
            SignalKind::PrefixSuffix => SignalValue::Flag(self.prefix_suffix),
            SignalKind::Combination => SignalValue::Flag(self.combination),
            SignalKind::Periodicity => SignalValue::Flag(self.periodicity),
        }
    }

    /// All eight signals in display order.
    pub fn entries(&self) -> Vec<SignalEntry> {
        SignalKind::ALL
            .iter()
            .map(|&kind| SignalEntry {
                kind,
                value: self.value(kind),
            })
            .collect()
    }
}

fn percent(score: f64) -> u32 {
    (score.clamp(0.0, 1.0) * 100.0).round() as u32
}
