//! `essentia` - runs one feedback session from the command line.
//!
//! ```text
//! essentia [disc=report.pdf] [anchors=anchors.pdf] [strengths=via.pdf] [values=values.pdf]
//! ```
//!
//! Restores the persisted session, extracts the profile if the session has
//! none yet, then prints the overview and every step's resolved callout as
//! JSON lines on stdout.

use std::path::{Path, PathBuf};
use std::sync::Arc;

use serde_json::json;
use thiserror::Error;
use tracing::{error, info};

use essentia::adapters::{extractor_for, FileSnapshotStorage};
use essentia::application::{
    ExtractProfileCommand, ExtractProfileHandler, RestoreSessionHandler, SessionCommandError,
};
use essentia::config::{AppConfig, ConfigError, ValidationError as ConfigValidationError};
use essentia::domain::foundation::ValidationError;
use essentia::domain::script::{resolve_display, StepSequence};
use essentia::ports::{DocumentLabel, DocumentSet, ExtractionFailed, SourceDocument, PDF_MEDIA_TYPE};

#[derive(Debug, Error)]
enum CliError {
    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error("Invalid configuration: {0}")]
    InvalidConfig(#[from] ConfigValidationError),

    #[error("Failed to initialize logging: {0}")]
    Logging(#[from] tracing_subscriber::util::TryInitError),

    #[error("Expected label=path, got '{0}'")]
    MalformedArgument(String),

    #[error("Failed to read {path}: {source}")]
    ReadDocument {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error(transparent)]
    Document(#[from] ValidationError),

    #[error(transparent)]
    Extraction(#[from] ExtractionFailed),

    #[error(transparent)]
    Session(#[from] SessionCommandError),

    #[error("Failed to render output: {0}")]
    Output(#[from] serde_json::Error),
}

#[tokio::main]
async fn main() {
    if let Err(e) = run().await {
        error!(error = %e, "essentia failed");
        eprintln!("error: {}", e);
        std::process::exit(1);
    }
}

async fn run() -> Result<(), CliError> {
    let config = AppConfig::load()?;
    config.logging.try_init()?;
    config.validate()?;

    let storage = Arc::new(FileSnapshotStorage::new(&config.session.snapshot_dir));
    let mut session = RestoreSessionHandler::new(storage.clone()).handle().await?;

    let documents = collect_documents(std::env::args().skip(1)).await?;
    let extractor = extractor_for(&config.ai)?;
    let handler = ExtractProfileHandler::new(extractor, storage);
    let result = handler
        .handle(&mut session, ExtractProfileCommand { documents })
        .await?;
    info!(outcome = ?result.outcome, "Session ready");

    println!(
        "{}",
        serde_json::to_string(&json!({ "screen": "overview", "overview": result.overview }))?
    );
    for step in StepSequence::all() {
        let line = json!({
            "screen": "step",
            "step": step.id,
            "phase": step.phase.numeral(),
            "title": step.title,
            "label": step.action.label,
            "say": step.action.say,
            "ask": step.action.ask,
            "callout": resolve_display(step, session.profile()),
        });
        println!("{}", serde_json::to_string(&line)?);
    }

    Ok(())
}

/// Reads `label=path` arguments into a document set.
async fn collect_documents(
    args: impl IntoIterator<Item = String>,
) -> Result<DocumentSet, CliError> {
    let mut documents = DocumentSet::new();

    for arg in args {
        let (label, path) = arg
            .split_once('=')
            .ok_or_else(|| CliError::MalformedArgument(arg.clone()))?;
        let label: DocumentLabel = label.parse()?;
        let path = Path::new(path);

        let bytes = tokio::fs::read(path)
            .await
            .map_err(|source| CliError::ReadDocument {
                path: path.to_path_buf(),
                source,
            })?;
        let file_name = path
            .file_name()
            .map(|name| name.to_string_lossy().into_owned())
            .unwrap_or_else(|| path.display().to_string());

        documents.attach(label, SourceDocument::new(file_name, media_type_for(path), bytes))?;
        info!(label = %label, path = %path.display(), "Attached document");
    }

    Ok(documents)
}

fn media_type_for(path: &Path) -> &'static str {
    match path.extension().and_then(|ext| ext.to_str()) {
        Some(ext) if ext.eq_ignore_ascii_case("pdf") => PDF_MEDIA_TYPE,
        _ => "application/octet-stream",
    }
}
