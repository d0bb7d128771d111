//! `nasa-tlx` - terminal front end for the workload instrument.

use std::error::Error;
use std::io;
use std::sync::Arc;

use clap::Parser;
use tracing::info;

use nasa_tlx::adapters::{FileResultExporter, FileSubmissionStore, SeededRandomSource};
use nasa_tlx::application::{ExportResultHandler, RecordSubmissionHandler};
use nasa_tlx::cli::{Args, TerminalWizard};
use nasa_tlx::config::AppConfig;
use nasa_tlx::domain::result::ResultArtifactBuilder;
use nasa_tlx::domain::session::SessionManager;
use nasa_tlx::logging::init_tracing;

#[tokio::main]
async fn main() -> Result<(), Box<dyn Error + Send + Sync>> {
    let args = Args::parse();

    let mut config = AppConfig::load()?;
    args.apply_to(&mut config);
    config.validate()?;

    init_tracing(&config.logging)?;

    let rng = match args.seed {
        Some(seed) => SeededRandomSource::from_seed(seed),
        None => SeededRandomSource::from_entropy(),
    };
    let instrument = config.instrument.info();

    info!(
        instrument = %instrument.name,
        version = %instrument.version,
        seed = ?rng.seed(),
        output_dir = %config.export.output_dir.display(),
        persistence = config.persistence.enabled,
        "Starting assessment"
    );

    let mut manager = SessionManager::new(ResultArtifactBuilder::new(instrument.clone()), Box::new(rng))
        .with_preserve_task_on_restart(config.session.preserve_task_on_restart);
    manager.set_participant_id(args.participant.as_deref())?;
    manager.set_task_id(args.task.as_deref())?;

    let exporter = ExportResultHandler::new(Arc::new(FileResultExporter::new(&config.export.output_dir)));
    let submissions = RecordSubmissionHandler::new(
        Arc::new(FileSubmissionStore::new(&config.persistence.directory)),
        config.persistence.storage_key.clone(),
        config.persistence.enabled,
    );

    let stdin = io::stdin();
    let mut wizard = TerminalWizard::new(
        stdin.lock(),
        io::stdout(),
        manager,
        exporter,
        submissions,
        instrument.name,
    );
    wizard.run().await?;

    Ok(())
}
