//! Line-oriented wizard driving a [`SessionManager`] over any reader/writer.

use std::io::{BufRead, Write};

use thiserror::Error;
use tracing::debug;

use crate::application::{
    ExportResultCommand, ExportResultHandler, RecordSubmissionCommand, RecordSubmissionHandler,
};
use crate::domain::analysis::ScoreEngine;
use crate::domain::catalog::DimensionKey;
use crate::domain::foundation::SessionId;
use crate::domain::result::ResultRecord;
use crate::domain::session::{PairwiseProgress, SessionError, SessionManager, WizardStage};

#[derive(Debug, Error)]
pub enum WizardError {
    #[error("Terminal I/O failed: {0}")]
    Io(#[from] std::io::Error),

    #[error(transparent)]
    Session(#[from] SessionError),
}

enum Flow {
    Continue,
    Quit,
}

/// Interactive front end. Reads one command per line.
pub struct TerminalWizard<R, W> {
    input: R,
    output: W,
    manager: SessionManager,
    exporter: ExportResultHandler,
    submissions: RecordSubmissionHandler,
    instrument_name: String,
    exported: Option<SessionId>,
}

impl<R: BufRead, W: Write> TerminalWizard<R, W> {
    pub fn new(
        input: R,
        output: W,
        manager: SessionManager,
        exporter: ExportResultHandler,
        submissions: RecordSubmissionHandler,
        instrument_name: impl Into<String>,
    ) -> Self {
        Self {
            input,
            output,
            manager,
            exporter,
            submissions,
            instrument_name: instrument_name.into(),
            exported: None,
        }
    }

    pub fn manager(&self) -> &SessionManager {
        &self.manager
    }

    /// Runs until the respondent quits or input ends.
    pub async fn run(&mut self) -> Result<(), WizardError> {
        loop {
            let flow = match self.manager.stage() {
                WizardStage::Welcome => self.welcome()?,
                WizardStage::Ratings => self.ratings()?,
                WizardStage::Pairwise => self.pairwise()?,
                WizardStage::Results => self.results().await?,
            };
            if let Flow::Quit = flow {
                writeln!(self.output, "Goodbye.")?;
                self.output.flush()?;
                return Ok(());
            }
        }
    }

    // ─────────────────────────────────────────────────────────────────────────
    // Stages
    // ─────────────────────────────────────────────────────────────────────────

    fn welcome(&mut self) -> Result<Flow, WizardError> {
        writeln!(self.output)?;
        writeln!(self.output, "=== {} ===", self.instrument_name)?;
        writeln!(self.output, "Step 1/4 - Welcome")?;
        writeln!(
            self.output,
            "You will rate six aspects of the task you just did, then pick the more \
             important aspect in 15 pairs."
        )?;

        let current = self.manager.metadata().participant_id.clone();
        let Some(line) = self.prompt(&format!(
            "Participant id [{}] ('-' clears): ",
            current.as_deref().unwrap_or("none")
        ))?
        else {
            return Ok(Flow::Quit);
        };
        if let Some(value) = identifier_edit(&line) {
            self.manager.set_participant_id(value)?;
        }

        let current = self.manager.metadata().task_id.clone();
        let Some(line) = self.prompt(&format!(
            "Task id [{}] ('-' clears): ",
            current.as_deref().unwrap_or("none")
        ))?
        else {
            return Ok(Flow::Quit);
        };
        if let Some(value) = identifier_edit(&line) {
            self.manager.set_task_id(value)?;
        }

        let Some(line) = self.prompt("I agree to take part (y/n, q to quit): ")? else {
            return Ok(Flow::Quit);
        };
        match line.to_ascii_lowercase().as_str() {
            "q" | "quit" => return Ok(Flow::Quit),
            "y" | "yes" => self.manager.set_consent(true)?,
            _ => self.manager.set_consent(false)?,
        }

        match self.manager.start() {
            Ok(()) => {
                writeln!(self.output, "Session {}", self.manager.metadata().session_id)?;
            }
            Err(err) if err.is_recoverable() => writeln!(self.output, "{}", err)?,
            Err(err) => return Err(err.into()),
        }
        Ok(Flow::Continue)
    }

    fn ratings(&mut self) -> Result<Flow, WizardError> {
        writeln!(self.output)?;
        writeln!(
            self.output,
            "Step 2/4 - Ratings (0-100). Enter keeps the shown value, b = back, r = restart."
        )?;

        for key in DimensionKey::ALL {
            let dimension = key.dimension();
            loop {
                let current = self.manager.ratings().rating(key);
                writeln!(self.output, "{} - {}", dimension.title, dimension.description)?;
                let Some(line) = self.prompt(&format!(
                    "  0 = {}, 100 = {} [{}]: ",
                    dimension.low_anchor, dimension.high_anchor, current
                ))?
                else {
                    return Ok(Flow::Quit);
                };

                match line.as_str() {
                    "b" => {
                        self.manager.back_to_welcome()?;
                        return Ok(Flow::Continue);
                    }
                    "r" => {
                        self.manager.restart();
                        return Ok(Flow::Continue);
                    }
                    "" => {
                        self.manager.set_rating(key, i64::from(current.value()))?;
                        break;
                    }
                    text => match text.parse::<i64>() {
                        Ok(value) => {
                            let stored = self.manager.set_rating(key, value)?;
                            if i64::from(stored.value()) != value {
                                writeln!(self.output, "  (recorded as {})", stored)?;
                            }
                            break;
                        }
                        Err(_) => {
                            writeln!(self.output, "  Please enter a whole number from 0 to 100.")?;
                        }
                    },
                }
            }
        }

        match self.manager.to_pairs() {
            Ok(_) => {}
            Err(err) if err.is_recoverable() => writeln!(self.output, "{}", err)?,
            Err(err) => return Err(err.into()),
        }
        Ok(Flow::Continue)
    }

    fn pairwise(&mut self) -> Result<Flow, WizardError> {
        let (Some(pair), Some(scheduler)) = (self.manager.current_pair(), self.manager.scheduler())
        else {
            return Err(SessionError::wrong_stage("show a comparison", self.manager.stage()).into());
        };
        let (position, total) = (scheduler.cursor() + 1, scheduler.total());

        writeln!(self.output)?;
        writeln!(
            self.output,
            "Step 3/4 - Comparison {}/{}: which contributed more to your workload?",
            position, total
        )?;
        writeln!(self.output, "  1) {}", pair.a().dimension().title)?;
        writeln!(self.output, "  2) {}", pair.b().dimension().title)?;

        let Some(line) = self.prompt("Choice (1/2, r = reset, b = back, restart): ")? else {
            return Ok(Flow::Quit);
        };

        let choice = match line.as_str() {
            "1" => pair.a(),
            "2" => pair.b(),
            "r" => {
                self.manager.reset_comparisons()?;
                writeln!(self.output, "Comparisons cleared.")?;
                return Ok(Flow::Continue);
            }
            "b" => {
                self.manager.back_to_ratings()?;
                return Ok(Flow::Continue);
            }
            "restart" => {
                self.manager.restart();
                return Ok(Flow::Continue);
            }
            text => match text.parse::<DimensionKey>() {
                Ok(key) => key,
                Err(_) => {
                    writeln!(self.output, "Please answer 1 or 2.")?;
                    return Ok(Flow::Continue);
                }
            },
        };

        match self.manager.choose(choice) {
            Ok(PairwiseProgress::Next(_)) => {}
            Ok(PairwiseProgress::Completed) => debug!("Comparison schedule complete"),
            Err(err) if err.is_recoverable() => writeln!(self.output, "{}", err)?,
            Err(err) => return Err(err.into()),
        }
        Ok(Flow::Continue)
    }

    async fn results(&mut self) -> Result<Flow, WizardError> {
        let Some(record) = self.manager.result().cloned() else {
            return Err(SessionError::wrong_stage("show results", self.manager.stage()).into());
        };

        if self.exported != Some(*record.session_id()) {
            writeln!(self.output)?;
            writeln!(self.output, "Step 4/4 - Results")?;
            writeln!(
                self.output,
                "{:<20} {:>6} {:>6} {:>12}",
                "Dimension", "Rating", "Weight", "Contribution"
            )?;
            for row in ScoreEngine::contributions(record.ratings(), record.weights()) {
                writeln!(
                    self.output,
                    "{:<20} {:>6} {:>6} {:>12}",
                    row.key.dimension().title,
                    row.rating.to_string(),
                    row.weight,
                    row.contribution.to_string()
                )?;
            }
            writeln!(self.output, "Weighted score: {}", record.score_weighted())?;
            writeln!(self.output, "Raw score:      {}", record.score_raw())?;

            self.submissions
                .handle(RecordSubmissionCommand {
                    record: record.clone(),
                })
                .await;
            self.export(&record).await?;
            self.exported = Some(*record.session_id());
        }

        let Some(line) = self.prompt("[e] export again, [r] restart, [q] quit: ")? else {
            return Ok(Flow::Quit);
        };
        match line.as_str() {
            "e" => self.export(&record).await?,
            "r" | "restart" => self.manager.restart(),
            "q" | "quit" => return Ok(Flow::Quit),
            _ => writeln!(self.output, "Please answer e, r or q.")?,
        }
        Ok(Flow::Continue)
    }

    // ─────────────────────────────────────────────────────────────────────────
    // Helpers
    // ─────────────────────────────────────────────────────────────────────────

    /// Export failures are shown and can be retried with `e`.
    async fn export(&mut self, record: &ResultRecord) -> Result<(), WizardError> {
        match self
            .exporter
            .handle(ExportResultCommand::all_formats(record.clone()))
            .await
        {
            Ok(result) => {
                for receipt in result.receipts {
                    match receipt.location {
                        Some(path) => writeln!(self.output, "Saved {}", path.display())?,
                        None => writeln!(self.output, "Exported {}", receipt.file_name)?,
                    }
                }
            }
            Err(err) => writeln!(self.output, "Export failed: {} (press e to retry)", err)?,
        }
        Ok(())
    }

    /// `None` once input is exhausted.
    ///
    /// Reads synchronously on the runtime thread. The wizard is the only task
    /// running, so nothing else is starved while the respondent types.
    fn prompt(&mut self, text: &str) -> Result<Option<String>, WizardError> {
        write!(self.output, "{}", text)?;
        self.output.flush()?;

        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Ok(None);
        }
        Ok(Some(line.trim().to_string()))
    }
}

/// Empty keeps the current value, `-` clears it.
fn identifier_edit(line: &str) -> Option<Option<&str>> {
    match line {
        "" => None,
        "-" => Some(None),
        value => Some(Some(value)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::{InMemoryResultExporter, InMemorySubmissionStore, SeededRandomSource};
    use crate::domain::result::{InstrumentInfo, ResultArtifactBuilder};
    use crate::ports::DEFAULT_STORAGE_KEY;
    use std::io::Cursor;
    use std::sync::Arc;

    struct Harness {
        exporter: Arc<InMemoryResultExporter>,
        store: Arc<InMemorySubmissionStore>,
    }

    fn wizard(script: &str) -> (TerminalWizard<Cursor<Vec<u8>>, Vec<u8>>, Harness) {
        let exporter = Arc::new(InMemoryResultExporter::new());
        let store = Arc::new(InMemorySubmissionStore::new());
        let manager = SessionManager::new(
            ResultArtifactBuilder::new(InstrumentInfo::new("NASA-TLX (full)", "test")),
            Box::new(SeededRandomSource::from_seed(11)),
        );
        let wizard = TerminalWizard::new(
            Cursor::new(script.as_bytes().to_vec()),
            Vec::new(),
            manager,
            ExportResultHandler::new(exporter.clone()),
            RecordSubmissionHandler::new(store.clone(), DEFAULT_STORAGE_KEY, true),
            "NASA-TLX (full)",
        );
        (wizard, Harness { exporter, store })
    }

    fn output(wizard: &TerminalWizard<Cursor<Vec<u8>>, Vec<u8>>) -> String {
        String::from_utf8_lossy(&wizard.output).into_owned()
    }

    #[test]
    fn identifier_edit_keeps_clears_or_sets() {
        assert_eq!(identifier_edit(""), None);
        assert_eq!(identifier_edit("-"), Some(None));
        assert_eq!(identifier_edit("P7"), Some(Some("P7")));
    }

    #[tokio::test]
    async fn full_walkthrough_exports_and_stores() {
        let script = format!(
            "P01\nT1\ny\n70\n10\n60\n20\n80\n30\n{}q\n",
            "1\n".repeat(15)
        );
        let (mut wizard, harness) = wizard(&script);

        wizard.run().await.unwrap();

        let text = output(&wizard);
        assert!(text.contains("Raw score:      45.00"));
        assert!(text.contains("Weighted score: "));
        assert_eq!(harness.exporter.payloads().await.len(), 2);
        assert_eq!(harness.store.count(DEFAULT_STORAGE_KEY).await, 1);

        let record = wizard.manager().result().unwrap();
        assert_eq!(record.participant_id(), Some("P01"));
        assert_eq!(record.task_id(), Some("T1"));
        assert_eq!(record.weights().total(), 15);
    }

    #[tokio::test(flavor = "multi_thread")]
    async fn closed_input_ends_the_run_on_the_binary_runtime() {
        let (mut wizard, harness) = wizard("");

        wizard.run().await.unwrap();

        assert!(output(&wizard).ends_with("Goodbye.\n"));
        assert_eq!(wizard.manager().stage(), WizardStage::Welcome);
        assert!(harness.exporter.payloads().await.is_empty());
    }

    #[tokio::test]
    async fn refusing_consent_stays_on_welcome() {
        let (mut wizard, _) = wizard("\n\nn\n");

        wizard.run().await.unwrap();

        assert_eq!(wizard.manager().stage(), WizardStage::Welcome);
        assert!(output(&wizard).contains("Consent is required"));
    }

    #[tokio::test]
    async fn out_of_range_rating_is_clamped() {
        let (mut wizard, _) = wizard("\n\ny\n-5\n500\n");

        wizard.run().await.unwrap();

        let ratings = wizard.manager().ratings();
        assert_eq!(ratings.rating(DimensionKey::MentalDemand).value(), 0);
        assert_eq!(ratings.rating(DimensionKey::PhysicalDemand).value(), 100);
        assert!(output(&wizard).contains("(recorded as 100)"));
    }

    #[tokio::test]
    async fn back_from_comparisons_returns_to_ratings() {
        let (mut wizard, _) = wizard("\n\ny\n\n\n\n\n\n\n1\nb\n");

        wizard.run().await.unwrap();

        assert_eq!(wizard.manager().stage(), WizardStage::Ratings);
        assert!(wizard.manager().ratings().is_complete());
    }

    #[tokio::test]
    async fn restart_after_results_begins_new_session() {
        let script = format!("P01\nT1\ny\n{}{}r\n", "50\n".repeat(6), "2\n".repeat(15));
        let (mut wizard, _) = wizard(&script);

        wizard.run().await.unwrap();

        let manager = wizard.manager();
        assert_eq!(manager.stage(), WizardStage::Welcome);
        assert!(manager.result().is_none());
        assert_eq!(manager.metadata().participant_id, None);
        assert_eq!(manager.metadata().task_id.as_deref(), Some("T1"));
    }
}
