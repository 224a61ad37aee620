use actix_web::{get, web, Responder};
use serde::Serialize;

use crate::modules::content::application::ContentRepository;
use crate::modules::editor::application::CmsContext;
use crate::modules::editor::domain::{EditorTab, FormView, PendingDelete, SessionState};
use crate::shared::api::ApiResponse;
use crate::AppState;

//
// ──────────────────────────────────────────────────────────
// Response DTO
// ──────────────────────────────────────────────────────────
//

#[derive(Debug, Serialize)]
pub struct RecordSummary {
    pub id: String,
    pub label: String,
}

/// Everything the overlay needs to redraw after an action.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SessionView {
    pub tab: EditorTab,
    pub state: SessionState,
    pub pending_delete: Option<PendingDelete>,
    pub form: Option<FormView>,
    pub records: Vec<RecordSummary>,
    pub section_order: Vec<String>,
}

impl SessionView {
    pub fn of(cms: &CmsContext) -> Self {
        let session = &cms.session;
        let repo = &cms.repository;

        Self {
            tab: session.tab(),
            state: session.state().clone(),
            pending_delete: session.pending_delete().cloned(),
            form: session.form_view(repo),
            records: record_list(repo, session.tab()),
            section_order: repo.section_order().to_vec(),
        }
    }
}

fn label_or_untitled(title: &str) -> String {
    if title.is_empty() {
        "Untitled".to_string()
    } else {
        title.to_string()
    }
}

/// Sidebar entries for the active tab.
fn record_list(repo: &ContentRepository, tab: EditorTab) -> Vec<RecordSummary> {
    match tab {
        EditorTab::Projects => repo
            .projects()
            .iter()
            .map(|p| RecordSummary {
                id: p.id.clone(),
                label: label_or_untitled(&p.title),
            })
            .collect(),
        EditorTab::Timeline => repo
            .timeline()
            .iter()
            .map(|t| RecordSummary {
                id: t.id.clone(),
                label: format!("{} - {}", t.period, t.title),
            })
            .collect(),
        EditorTab::Gallery => repo
            .gallery()
            .iter()
            .map(|g| RecordSummary {
                id: g.id.clone(),
                label: label_or_untitled(&g.title),
            })
            .collect(),
        EditorTab::Settings => Vec::new(),
    }
}

//
// ──────────────────────────────────────────────────────────
// Handler
// ──────────────────────────────────────────────────────────
//

#[get("/admin/session")]
pub async fn get_session_handler(data: web::Data<AppState>) -> impl Responder {
    let cms = data.cms.lock().await;
    ApiResponse::success(SessionView::of(&cms))
}
