//! Form handlers for the organize page.

use axum::{extract::State, response::Html, Form};
use serde::Deserialize;
use std::path::PathBuf;
use std::sync::Arc;

use photokey_core::{event::render, run, Event, RunMode, RunOptions, RunRequest, Scope};

use super::view::{render_page, PageView};
use crate::state::AppState;

// ============================================================================
// Request Types
// ============================================================================

/// Submitted form fields. Checkboxes are present (`on`) only when ticked.
#[derive(Debug, Default, Deserialize)]
pub struct OrganizeForm {
    #[serde(default)]
    pub folder: String,
    pub copy: Option<String>,
    pub scope: Option<String>,
    pub extract_qr: Option<String>,
    pub action: Option<String>,
}

/// Which button was pressed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormAction {
    Preview,
    Execute,
    QrPreview,
    QrExecute,
}

impl FormAction {
    /// Unknown or missing actions fall back to a preview.
    pub fn parse(value: Option<&str>) -> Self {
        match value {
            Some("execute") => Self::Execute,
            Some("qr_preview") => Self::QrPreview,
            Some("qr_execute") => Self::QrExecute,
            _ => Self::Preview,
        }
    }

    pub fn is_dry_run(&self) -> bool {
        matches!(self, Self::Preview | Self::QrPreview)
    }

    pub fn mode(&self) -> RunMode {
        match self {
            Self::QrPreview | Self::QrExecute => RunMode::QrOnly,
            Self::Preview | Self::Execute => RunMode::Organize,
        }
    }
}

fn is_checked(value: &Option<String>) -> bool {
    value.as_deref() == Some("on")
}

// ============================================================================
// Handlers
// ============================================================================

/// Render the empty form with configured defaults
pub async fn show_form(State(state): State<Arc<AppState>>) -> Html<String> {
    let defaults = state.defaults();
    let view = PageView {
        folder: state.default_folder().display().to_string(),
        copy: defaults.copy,
        extract_qr: defaults.extract_qr,
        scope: defaults.scope.to_string(),
        output: None,
    };
    Html(render_page(&view).into_string())
}

/// Run the requested action and render its output below the form
pub async fn submit_form(
    State(state): State<Arc<AppState>>,
    Form(form): Form<OrganizeForm>,
) -> Html<String> {
    let folder = match form.folder.trim() {
        "" => state.default_folder().clone(),
        submitted => PathBuf::from(submitted),
    };
    let copy = is_checked(&form.copy);
    let extract_qr = is_checked(&form.extract_qr);
    let scope = form
        .scope
        .clone()
        .unwrap_or_else(|| Scope::default().to_string());
    let action = FormAction::parse(form.action.as_deref());

    tracing::info!(
        folder = %folder.display(),
        ?action,
        %scope,
        copy,
        extract_qr,
        "Form submitted"
    );

    let events = match scope.parse::<Scope>() {
        Ok(parsed) => {
            let request = RunRequest::new(folder.clone())
                .with_scope(parsed)
                .with_mode(action.mode())
                .with_options(RunOptions {
                    dry_run: action.is_dry_run(),
                    copy,
                    extract_qr,
                });
            execute(request).await
        }
        Err(e) => vec![Event::Error {
            message: e.to_string(),
        }],
    };

    let view = PageView {
        folder: folder.display().to_string(),
        copy,
        extract_qr,
        scope,
        output: Some(render(&events)),
    };
    Html(render_page(&view).into_string())
}

/// Runs the blocking filesystem work off the async runtime.
async fn execute(request: RunRequest) -> Vec<Event> {
    let result = tokio::task::spawn_blocking(move || {
        let mut events = Vec::new();
        let report = run(&request, &mut events);
        tracing::info!(?report, "Run finished");
        events
    })
    .await;

    match result {
        Ok(events) => events,
        Err(e) => {
            tracing::error!("Run task failed: {}", e);
            vec![Event::Error {
                message: format!("run aborted: {}", e),
            }]
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_form_action_parse() {
        assert_eq!(FormAction::parse(None), FormAction::Preview);
        assert_eq!(FormAction::parse(Some("preview")), FormAction::Preview);
        assert_eq!(FormAction::parse(Some("execute")), FormAction::Execute);
        assert_eq!(FormAction::parse(Some("qr_preview")), FormAction::QrPreview);
        assert_eq!(FormAction::parse(Some("qr_execute")), FormAction::QrExecute);
        assert_eq!(FormAction::parse(Some("delete")), FormAction::Preview);
    }

    #[test]
    fn test_form_action_semantics() {
        assert!(FormAction::Preview.is_dry_run());
        assert!(FormAction::QrPreview.is_dry_run());
        assert!(!FormAction::Execute.is_dry_run());
        assert!(!FormAction::QrExecute.is_dry_run());

        assert_eq!(FormAction::Execute.mode(), RunMode::Organize);
        assert_eq!(FormAction::QrExecute.mode(), RunMode::QrOnly);
    }

    #[test]
    fn test_checkbox_values() {
        assert!(is_checked(&Some("on".to_string())));
        assert!(!is_checked(&Some("off".to_string())));
        assert!(!is_checked(&None));
    }
}
