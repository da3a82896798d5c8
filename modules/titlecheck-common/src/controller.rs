//! Submit/reset flow: Idle -> Loading -> ResultShown, with Error reachable
//! from Idle (bad input) or Loading (generator failure).

use serde::Serialize;
use tracing::{info, warn};

use crate::error::TitleCheckError;
use crate::generator::VerdictSource;
use crate::render::{render, ResultsView, ScrollTarget, ViewModel};
use crate::types::{Status, VerificationResult};
use crate::validate::TitleSubmission;

/// Shown when the generator fails for any reason.
pub const UNEXPECTED_ERROR_MESSAGE: &str = "An unexpected error occurred. Please try again.";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum UiState {
    Idle,
    Loading,
    ResultShown,
    Error,
}

#[derive(Debug, Clone)]
pub struct Controller {
    state: UiState,
    view: ViewModel,
}

impl Default for Controller {
    fn default() -> Self {
        Self::new()
    }
}

impl Controller {
    pub fn new() -> Self {
        Self {
            state: UiState::Idle,
            view: ViewModel::default(),
        }
    }

    pub fn state(&self) -> UiState {
        self.state
    }

    pub fn view(&self) -> &ViewModel {
        &self.view
    }

    pub fn into_view(self) -> ViewModel {
        self.view
    }

    /// Validate `raw` and enter Loading. On bad input the controller moves to
    /// Error with the inline message set and the error is returned.
    pub fn submit(&mut self, raw: &str) -> Result<TitleSubmission, TitleCheckError> {
        self.view.input = raw.to_string();

        let title = match TitleSubmission::parse(raw) {
            Ok(title) => title,
            Err(e) => {
                let message = match &e {
                    TitleCheckError::InvalidInput(msg) => msg.clone(),
                    other => other.to_string(),
                };
                self.show_error(message);
                return Err(e);
            }
        };

        self.view.error = None;
        self.set_loading(true);
        self.state = UiState::Loading;
        Ok(title)
    }

    /// Render a finished verdict and reveal the result panel.
    pub fn complete(&mut self, result: &VerificationResult) {
        render(&mut self.view, result);
        self.set_loading(false);
        self.view.results_visible = true;
        self.view.scroll = Some(ScrollTarget::Results);
        self.state = UiState::ResultShown;
    }

    /// Generator failure: generic message, loading cleared.
    pub fn fail(&mut self, err: &TitleCheckError) {
        warn!(error = %err, "Verification failed");
        self.show_error(UNEXPECTED_ERROR_MESSAGE.to_string());
        self.set_loading(false);
    }

    /// Full submission: validate, await `source`, then render or fail.
    pub async fn verify(
        &mut self,
        source: &dyn VerdictSource,
        raw: &str,
    ) -> Result<Status, TitleCheckError> {
        let title = self.submit(raw)?;

        match source.generate(&title).await {
            Ok(result) => {
                self.complete(&result);
                info!(
                    title_len = title.len(),
                    probability = result.probability,
                    status = %result.status,
                    "Title verified"
                );
                Ok(result.status)
            }
            Err(e) => {
                self.fail(&e);
                Err(e)
            }
        }
    }

    /// Clear the input, hide error and results, scroll to top.
    pub fn reset(&mut self) {
        self.view = ViewModel {
            scroll: Some(ScrollTarget::Top),
            ..ViewModel::default()
        };
        self.state = UiState::Idle;
    }

    /// True when the view shows nothing beyond the empty form.
    pub fn is_pristine(&self) -> bool {
        self.state == UiState::Idle
            && self.view.input.is_empty()
            && self.view.error.is_none()
            && !self.view.loading
            && !self.view.results_visible
            && self.view.results == ResultsView::default()
    }

    fn show_error(&mut self, message: String) {
        self.view.error = Some(message);
        self.state = UiState::Error;
    }

    fn set_loading(&mut self, loading: bool) {
        self.view.loading = loading;
        self.view.submit_disabled = loading;
        if loading {
            self.view.results_visible = false;
        }
    }
}

/// Results panel for an already-rendered controller, if shown.
pub fn visible_results(view: &ViewModel) -> Option<&ResultsView> {
    view.results_visible.then_some(&view.results)
}
