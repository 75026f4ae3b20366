mod page;
mod session;
mod web;

use chrono::Utc;
use clap::{Parser, Subcommand};
use pdf_qa_core::{retrieve, DocumentCache, DEFAULT_DOCUMENT_PATH};
use session::Session;
use std::net::SocketAddr;
use std::path::PathBuf;
use tracing::{info, warn};
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

#[derive(Parser)]
#[command(name = "pdf-qa", version)]
struct Cli {
    #[command(subcommand)]
    command: Command,

    /// PDF to answer questions from, relative to the working directory.
    #[arg(long, env = "PDF_QA_DOCUMENT", default_value = DEFAULT_DOCUMENT_PATH, global = true)]
    document: PathBuf,
}

#[derive(Subcommand)]
enum Command {
    /// Serve the question page over HTTP.
    Serve {
        /// Address to bind the web UI to.
        #[arg(long, env = "PDF_QA_BIND", default_value = "127.0.0.1:8501")]
        bind: SocketAddr,
    },
    /// Answer a single question and print the retrieved text.
    Ask {
        /// Question text
        #[arg(long)]
        query: String,
    },
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let app_version = env!("CARGO_PKG_VERSION");

    tracing_subscriber::registry()
        .with(EnvFilter::from_default_env())
        .with(fmt::layer())
        .init();

    let cli = Cli::parse();
    info!(
        version = app_version,
        started_at = %Utc::now().to_rfc3339(),
        document = %cli.document.display(),
        "pdf-qa boot"
    );

    let cache = DocumentCache::new();
    let session = Session::from_load(&cli.document, cache.get_or_load(&cli.document));

    match cli.command {
        Command::Serve { bind } => {
            match &session {
                Session::Ready { store } => info!(
                    pages = store.len(),
                    checksum = store.fingerprint().map(|fingerprint| fingerprint.checksum.as_str()).unwrap_or_default(),
                    "document ready"
                ),
                Session::Halted { reason } => warn!(reason = %reason, "serving halted session"),
            }
            web::serve(session, bind).await?;
        }
        Command::Ask { query } => {
            println!("{}", answer_once(&session, &query)?);
        }
    }

    Ok(())
}

/// Runs one query against the session the way the web form does.
///
/// A halted session is an error. A blank query is answered with the warning
/// text instead of reaching the retriever.
fn answer_once(session: &Session, query: &str) -> anyhow::Result<String> {
    let store = match session {
        Session::Ready { store } => store,
        Session::Halted { reason } => anyhow::bail!("{reason}"),
    };

    if query.trim().is_empty() {
        warn!("empty query, nothing to answer");
        return Ok(page::EMPTY_QUERY_WARNING.to_string());
    }

    Ok(format!(
        "Loaded {} pages from PDF\n{}",
        store.len(),
        retrieve(query, store)
    ))
}
