//! Terminal front end: command-line flags and the line-oriented wizard.

mod args;
mod wizard;

pub use args::Args;
pub use wizard::{TerminalWizard, WizardError};
