use axum::{extract::State, Json};

use crate::{dtos::DiagnosticsReport, AppState};

/// Longest error excerpt embedded in the report.
const ERROR_EXCERPT_CHARS: usize = 50;

fn excerpt(message: &str) -> String {
    message.chars().take(ERROR_EXCERPT_CHARS).collect()
}

/// Check backend and database availability
///
/// Never fails: every problem is folded into the report's strings.
#[utoipa::path(
    get,
    path = "/test",
    responses(
        (status = 200, description = "Diagnostic report", body = DiagnosticsReport)
    ),
    tag = "Observability"
)]
pub async fn test_database(State(state): State<AppState>) -> Json<DiagnosticsReport> {
    let mut report = DiagnosticsReport::default();

    let Some(store) = state.store.as_ref() else {
        report.database = "⚠️  Available but not initialized".to_string();
        return Json(report);
    };

    report.database = "✅ Available".to_string();
    report.database_url = Some(if state.config.database.url_is_set() {
        "✅ Set".to_string()
    } else {
        "❌ Not Set".to_string()
    });
    report.database_name = Some(
        store
            .database_name()
            .unwrap_or_else(|| "✅ Connected".to_string()),
    );
    report.connection_status = "Connected".to_string();

    match store.list_collections().await {
        Ok(collections) => {
            report.collections = collections;
            report.database = "✅ Connected & Working".to_string();
        }
        Err(e) => {
            // AppError's Display carries a kind prefix; report only the underlying cause.
            let cause = match &e {
                service_core::error::AppError::DatabaseError(inner) => inner.to_string(),
                other => other.to_string(),
            };
            tracing::warn!(error = %cause, "Database diagnostics failed");
            report.database = format!("⚠️  Connected but Error: {}", excerpt(&cause));
        }
    }

    Json(report)
}
