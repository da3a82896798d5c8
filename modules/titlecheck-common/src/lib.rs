pub mod types;
pub mod validate;
pub mod signals;
pub mod generator;
pub mod render;
pub mod controller;
pub mod config;
pub mod error;

pub use types::*;
pub use validate::{validate, TitleSubmission, INVALID_TITLE_MESSAGE};
pub use signals::{Severity, SignalEntry, SignalKind, SignalValue};
pub use generator::{MockVerdictGenerator, VerdictSource};
pub use render::{render, ViewModel};
pub use controller::{Controller, UiState, UNEXPECTED_ERROR_MESSAGE};
pub use config::Config;
pub use error::TitleCheckError;
