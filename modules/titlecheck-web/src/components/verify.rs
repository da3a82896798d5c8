use dioxus::prelude::*;

use titlecheck_common::controller::visible_results;
use titlecheck_common::render::{ComparisonRow, FeedbackRow, Icon, ResultsView};
use titlecheck_common::{RiskLevel, ViewModel};

use super::layout::Layout;
use crate::templates::render_to_html;

/// Anchor the form posts to, so the browser lands on the results.
pub const RESULT_ANCHOR: &str = "result-section";

fn icon_color(icon: Icon) -> &'static str {
    match icon {
        Icon::Pass => "text-green-600",
        Icon::Warning => "text-amber-500",
        Icon::Fail => "text-red-600",
    }
}

fn risk_classes(risk: RiskLevel) -> &'static str {
    match risk {
        RiskLevel::High => "inline-block px-2 py-0.5 rounded-full text-xs font-semibold bg-red-50 text-red-800",
        RiskLevel::Medium => "inline-block px-2 py-0.5 rounded-full text-xs font-semibold bg-amber-50 text-amber-800",
        RiskLevel::Low => "inline-block px-2 py-0.5 rounded-full text-xs font-semibold bg-green-50 text-green-800",
    }
}

fn feedback_item(row: &FeedbackRow) -> Element {
    let icon_class = format!("fas {} {}", row.icon.class(), icon_color(row.icon));
    let label = row.label.clone();
    let description = row.description.clone();
    rsx! {
        div { class: "feedback-item flex gap-3 items-start bg-white border border-gray-200 rounded-lg p-3",
            div { class: "feedback-icon text-lg",
                i { class: "{icon_class}" }
            }
            div { class: "feedback-content",
                h4 { class: "text-sm font-semibold", "{label}" }
                p { class: "text-sm text-gray-500", "{description}" }
            }
        }
    }
}

fn comparison_row(row: &ComparisonRow) -> Element {
    let risk = row.risk.as_str();
    let class = format!("risk-level {risk} {}", risk_classes(row.risk));
    let title = row.title.clone();
    let score = row.score_label.clone();
    rsx! {
        tr { class: "border-t border-gray-100",
            td { class: "py-2", strong { "{title}" } }
            td { class: "py-2 text-right", "{score}" }
            td { class: "py-2 text-right", span { class: "{class}", "{risk}" } }
        }
    }
}

#[allow(non_snake_case)]
#[component]
fn ResultsPanel(results: ResultsView) -> Element {
    let ring_style = format!(
        "width:160px;height:160px;border-radius:50%;display:flex;align-items:center;justify-content:center;background:{};",
        results.gauge.background()
    );
    let value_style = format!(
        "width:124px;height:124px;border-radius:50%;background:#fff;display:flex;align-items:center;justify-content:center;font-size:28px;font-weight:700;color:{};",
        results.gauge.color
    );
    let badge_class = format!(
        "{} inline-block px-3 py-1 rounded-full text-sm font-semibold text-white",
        results.badge.class
    );
    let badge_style = format!("background:{};", results.gauge.color);
    let gauge_label = results.gauge.label.clone();
    let badge_text = results.badge.text.clone();
    let description = results.description.clone();

    rsx! {
        section { id: RESULT_ANCHOR, class: "mt-8",
            div { class: "bg-white border border-gray-200 rounded-lg p-6 flex gap-6 items-center mb-6",
                div { id: "circular-progress", style: "{ring_style}",
                    span { id: "progress-value", style: "{value_style}", "{gauge_label}" }
                }
                div {
                    span { id: "status-badge", class: "{badge_class}", style: "{badge_style}",
                        "{badge_text}"
                    }
                    p { id: "probability-desc", class: "text-sm text-gray-600 mt-3",
                        "{description}"
                    }
                }
            }

            h3 { class: "text-base font-semibold mb-3", "Detailed Feedback" }
            div { id: "feedback-grid", class: "grid grid-cols-2 gap-3 mb-6",
                for row in results.feedback.iter() {
                    {feedback_item(row)}
                }
            }

            h3 { class: "text-base font-semibold mb-3", "Similar Existing Titles" }
            div { class: "bg-white border border-gray-200 rounded-lg p-4",
                table { id: "similar-titles-table", class: "w-full text-sm",
                    thead {
                        tr {
                            th { class: "text-left", "Title" }
                            th { class: "text-right", "Similarity" }
                            th { class: "text-right", "Risk" }
                        }
                    }
                    tbody {
                        for row in results.comparisons.iter() {
                            {comparison_row(row)}
                        }
                    }
                }
            }
        }
    }
}

#[allow(non_snake_case)]
#[component]
fn VerifyPage(view: ViewModel) -> Element {
    let action = format!("/verify#{RESULT_ANCHOR}");
    let input_class = if view.error.is_some() {
        "flex-1 px-3 py-2.5 border border-red-500 rounded text-base border-danger"
    } else {
        "flex-1 px-3 py-2.5 border border-gray-300 rounded text-base"
    };
    let input = view.input.clone();
    let results = visible_results(&view).cloned();

    rsx! {
        Layout { title: "Verify a Title".to_string(),
            div { class: "bg-white border border-gray-200 rounded-lg p-6",
                form { method: "POST", action: "{action}",
                    label { r#for: "proposed-title", class: "block text-sm text-gray-500 mb-1",
                        "Proposed Title"
                    }
                    div { class: "flex gap-2",
                        input {
                            r#type: "text", name: "title", id: "proposed-title",
                            value: "{input}",
                            placeholder: "e.g. The Morning Chronicle",
                            class: input_class,
                            autofocus: true
                        }
                        button {
                            r#type: "submit", id: "verify-btn",
                            disabled: view.submit_disabled,
                            class: "px-4 py-2.5 bg-blue-600 text-white rounded text-sm font-medium cursor-pointer hover:bg-blue-800",
                            if view.loading {
                                span { id: "btn-spinner", i { class: "fas fa-spinner fa-spin" } }
                            } else {
                                span { id: "btn-text", "Verify" }
                            }
                        }
                        a { href: "/reset", id: "reset-btn",
                            class: "px-4 py-2.5 border border-gray-300 rounded text-sm text-gray-600 no-underline hover:bg-gray-100",
                            "Reset"
                        }
                    }
                    if let Some(err) = &view.error {
                        div { id: "error-message", class: "bg-red-50 border border-red-200 text-red-800 text-sm px-3 py-2 rounded mt-3",
                            "{err}"
                        }
                    }
                }
            }
            if view.loading {
                div { id: "loading-section", class: "text-center text-gray-400 py-10",
                    "Checking against registered titles..."
                }
            }
            if let Some(results) = results {
                ResultsPanel { results: results }
            }
        }
    }
}

pub fn render_verify_page(view: ViewModel) -> String {
    let mut dom = VirtualDom::new_with_props(VerifyPage, VerifyPageProps { view });
    dom.rebuild_in_place();
    render_to_html(&dom)
}
