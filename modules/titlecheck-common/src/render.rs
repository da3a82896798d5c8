//! Verdict rendering into a toolkit-independent view model.

use serde::Serialize;

use crate::signals::{Severity, SignalEntry};
use crate::types::{RiskLevel, Status, TitleMatch, VerificationResult};

pub const GAUGE_TRACK_COLOR: &str = "#e2e8f0";

pub fn status_color(status: Status) -> &'static str {
    match status {
        Status::Approved => "#10b981",
        Status::Risky => "#f59e0b",
        Status::Rejected => "#ef4444",
    }
}

pub fn status_description(status: Status, probability: u8) -> String {
    match status {
        Status::Approved => format!(
            "Low similarity detected ({probability}%). This title is likely compliant with regulations."
        ),
        Status::Risky => format!(
            "Moderate similarity detected ({probability}%). Review is recommended to avoid potential conflicts."
        ),
        Status::Rejected => format!(
            "High similarity detected ({probability}%). This title is highly likely to be rejected due to non-compliance."
        ),
    }
}

// --- View Models ---

#[derive(Debug, Clone, PartialEq, Default, Serialize)]
pub struct Gauge {
    pub color: String,
    /// Sweep of the filled arc, 0-360.
    pub degrees: f64,
    pub label: String,
}

impl Gauge {
    /// CSS background for the ring.
    pub fn background(&self) -> String {
        format!(
            "conic-gradient({} {}deg, {} 0deg)",
            self.color, self.degrees, GAUGE_TRACK_COLOR
        )
    }
}

#[derive(Debug, Clone, PartialEq, Default, Serialize)]
pub struct Badge {
    pub text: String,
    pub class: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Icon {
    Pass,
    Warning,
    Fail,
}

impl Icon {
    pub fn from_severity(severity: Severity) -> Self {
        match severity {
            Severity::Pass => Icon::Pass,
            Severity::Warning => Icon::Warning,
            Severity::Fail => Icon::Fail,
        }
    }

    pub fn class(&self) -> &'static str {
        match self {
            Icon::Pass => "fa-circle-check text-success",
            Icon::Warning => "fa-circle-exclamation text-warning",
            Icon::Fail => "fa-circle-xmark text-danger",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FeedbackRow {
    pub icon: Icon,
    pub label: String,
    pub description: String,
}

impl From<&SignalEntry> for FeedbackRow {
    fn from(entry: &SignalEntry) -> Self {
        Self {
            icon: Icon::from_severity(entry.severity()),
            label: entry.label().to_string(),
            description: entry.description(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ComparisonRow {
    pub title: String,
    pub score_label: String,
    pub risk: RiskLevel,
}

impl From<&TitleMatch> for ComparisonRow {
    fn from(m: &TitleMatch) -> Self {
        Self {
            title: m.title.clone(),
            score_label: format!("{}%", m.score),
            risk: m.risk_level(),
        }
    }
}

/// Everything the result panel shows.
#[derive(Debug, Clone, PartialEq, Default, Serialize)]
pub struct ResultsView {
    pub gauge: Gauge,
    pub badge: Badge,
    pub description: String,
    pub feedback: Vec<FeedbackRow>,
    pub comparisons: Vec<ComparisonRow>,
}

/// Where the page should scroll after the last transition.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ScrollTarget {
    Top,
    Results,
}

/// Presentation state for the whole form, independent of any UI toolkit.
#[derive(Debug, Clone, PartialEq, Default, Serialize)]
pub struct ViewModel {
    pub input: String,
    /// Inline error under the input; the input is outlined while set.
    pub error: Option<String>,
    pub loading: bool,
    pub submit_disabled: bool,
    pub results_visible: bool,
    pub scroll: Option<ScrollTarget>,
    pub results: ResultsView,
}

/// Write `result` into the result panel of `view`, replacing whatever was there.
pub fn render(view: &mut ViewModel, result: &VerificationResult) {
    let panel = &mut view.results;
    let color = status_color(result.status);

    panel.gauge = Gauge {
        color: color.to_string(),
        degrees: f64::from(result.probability) * 360.0 / 100.0,
        label: format!("{}%", result.probability),
    };

    panel.badge = Badge {
        text: result.status.to_string(),
        class: format!("badge {}", result.status),
    };

    panel.description = status_description(result.status, result.probability);

    panel.feedback.clear();
    panel
        .feedback
        .extend(result.signals.entries().iter().map(FeedbackRow::from));

    panel.comparisons.clear();
    panel
        .comparisons
        .extend(result.similar_titles.iter().map(ComparisonRow::from));
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::SignalSet;

    fn signals() -> SignalSet {
        SignalSet {
            exact_match: false,
            spelling: 0.9,
            phonetic: 0.6,
            semantic: 0.2,
            blacklist: true,
            prefix_suffix: false,
            combination: false,
            periodicity: false,
        }
    }

    fn result(probability: u8) -> VerificationResult {
        VerificationResult::new(
            probability,
            signals(),
            vec![
                TitleMatch::new("The Morning Herald", 88),
                TitleMatch::new("National Daily News", 45),
                TitleMatch::new("Metro Times", 32),
            ],
        )
    }

    #[test]
    fn gauge_tracks_probability() {
        let mut view = ViewModel::default();
        render(&mut view, &result(65));
        assert_eq!(view.results.gauge.degrees, 234.0);
        assert_eq!(view.results.gauge.label, "65%");
        assert_eq!(view.results.gauge.color, "#f59e0b");
        assert_eq!(
            view.results.gauge.background(),
            "conic-gradient(#f59e0b 234deg, #e2e8f0 0deg)"
        );
    }

    #[test]
    fn badge_and_description_follow_status() {
        let mut view = ViewModel::default();
        render(&mut view, &result(85));
        assert_eq!(view.results.badge.text, "Rejected");
        assert_eq!(view.results.badge.class, "badge Rejected");
        assert!(view.results.description.starts_with("High similarity detected (85%)."));

        render(&mut view, &result(12));
        assert_eq!(view.results.badge.text, "Approved");
        assert!(view.results.description.starts_with("Low similarity detected (12%)."));
    }

    #[test]
    fn feedback_icons() {
        let mut view = ViewModel::default();
        render(&mut view, &result(50));
        let icons: Vec<Icon> = view.results.feedback.iter().map(|r| r.icon).collect();
        assert_eq!(
            icons,
            vec![
                Icon::Pass,    // exact match
                Icon::Fail,    // spelling 0.9
                Icon::Warning, // phonetic 0.6
                Icon::Pass,    // semantic 0.2
                Icon::Fail,    // blacklist
                Icon::Pass,
                Icon::Pass,
                Icon::Pass,
            ]
        );
        assert_eq!(view.results.feedback[1].label, "Spelling Similarity");
    }

    #[test]
    fn comparison_rows_carry_risk() {
        let mut view = ViewModel::default();
        render(&mut view, &result(50));
        let rows = &view.results.comparisons;
        assert_eq!(rows.len(), 3);
        assert_eq!(rows[0].score_label, "88%");
        assert_eq!(rows[0].risk, RiskLevel::High);
        assert_eq!(rows[1].risk, RiskLevel::Medium);
        assert_eq!(rows[2].risk, RiskLevel::Low);
    }

    #[test]
    fn render_is_idempotent() {
        let mut once = ViewModel::default();
        render(&mut once, &result(72));
        let mut twice = once.clone();
        render(&mut twice, &result(72));
        assert_eq!(once, twice);
        assert_eq!(twice.results.feedback.len(), 8);
    }

    #[test]
    fn render_replaces_prior_rows() {
        let mut view = ViewModel::default();
        render(&mut view, &result(72));

        let shorter = VerificationResult::new(10, signals(), vec![TitleMatch::new("Metro Times", 32)]);
        render(&mut view, &shorter);
        assert_eq!(view.results.comparisons.len(), 1);
        assert_eq!(view.results.comparisons[0].title, "Metro Times");
        assert_eq!(view.results.feedback.len(), 8);
    }
}
