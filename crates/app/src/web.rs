use crate::page::{render, Outcome};
use crate::session::Session;
use axum::{
    extract::{Form, State},
    http::StatusCode,
    response::{Html, IntoResponse, Response},
    routing::{get, post},
    Router,
};
use pdf_qa_core::retrieve;
use serde::Deserialize;
use std::net::SocketAddr;
use std::sync::Arc;
use tracing::{debug, info, warn};

#[derive(Debug, Deserialize)]
pub struct AskForm {
    #[serde(default)]
    pub query: String,
}

pub fn router(session: Session) -> Router {
    Router::new()
        .route("/", get(handle_root))
        .route("/ask", post(handle_ask))
        .with_state(Arc::new(session))
}

pub async fn serve(session: Session, addr: SocketAddr) -> anyhow::Result<()> {
    let listener = tokio::net::TcpListener::bind(addr).await?;
    info!(addr = %listener.local_addr()?, "web ui listening");

    axum::serve(listener, router(session))
        .with_graceful_shutdown(async {
            if let Err(error) = tokio::signal::ctrl_c().await {
                warn!(error = %error, "failed to listen for shutdown signal");
            }
            debug!("shutdown requested");
        })
        .await?;

    Ok(())
}

async fn handle_root(State(session): State<Arc<Session>>) -> Response {
    page_response(&session, &Outcome::Prompt)
}

async fn handle_ask(
    State(session): State<Arc<Session>>,
    Form(form): Form<AskForm>,
) -> Response {
    let Some(store) = session.store() else {
        warn!("query rejected, document unavailable");
        return page_response(&session, &Outcome::Prompt);
    };

    if form.query.trim().is_empty() {
        debug!("empty query submitted");
        return page_response(&session, &Outcome::EmptyQuery);
    }

    let answer = retrieve(&form.query, store);
    info!(
        query_chars = form.query.chars().count(),
        answer_chars = answer.char_count(),
        "query answered"
    );

    page_response(
        &session,
        &Outcome::Answered {
            query: form.query,
            answer,
        },
    )
}

fn page_response(session: &Session, outcome: &Outcome) -> Response {
    let status = match session {
        Session::Ready { .. } => StatusCode::OK,
        Session::Halted { .. } => StatusCode::SERVICE_UNAVAILABLE,
    };
    (status, Html(render(&session.banner(), outcome))).into_response()
}
