use std::sync::Arc;

use axum::{
    extract::State,
    response::{Html, IntoResponse, Redirect},
};
use serde::Deserialize;
use tracing::info;

use titlecheck_common::{Controller, TitleCheckError};

use crate::components::render_verify_page;
use crate::AppState;

#[derive(Deserialize)]
pub struct VerifyForm {
    #[serde(default)]
    pub title: String,
}

/// Empty form.
pub async fn index_page() -> impl IntoResponse {
    Html(render_verify_page(Controller::new().into_view()))
}

/// Form submission. Invalid input and generator failures both come back as
/// the same page with the message inline.
pub async fn verify_submit(
    State(state): State<Arc<AppState>>,
    axum::Form(form): axum::Form<VerifyForm>,
) -> impl IntoResponse {
    let mut controller = Controller::new();

    // Generator failures are logged by the controller.
    if let Err(TitleCheckError::InvalidInput(_)) =
        controller.verify(state.source.as_ref(), &form.title).await
    {
        info!(input_len = form.title.len(), "Rejected title submission");
    }

    Html(render_verify_page(controller.into_view()))
}

pub async fn reset() -> Redirect {
    Redirect::to("/")
}
