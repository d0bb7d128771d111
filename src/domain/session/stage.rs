//! WizardStage - the four steps of an assessment.

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::domain::foundation::StateMachine;

/// Current step of the assessment wizard.
///
/// Valid transitions:
/// - Welcome -> Ratings (start)
/// - Ratings -> Pairwise (to pairs)
/// - Ratings -> Welcome (back to welcome)
/// - Pairwise -> Ratings (back)
/// - Pairwise -> Results (schedule complete)
/// - any -> Welcome (restart)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum WizardStage {
    #[default]
    Welcome,
    Ratings,
    Pairwise,
    Results,
}

impl WizardStage {
    /// Position in the wizard, starting at 1.
    pub fn step_number(&self) -> usize {
        match self {
            WizardStage::Welcome => 1,
            WizardStage::Ratings => 2,
            WizardStage::Pairwise => 3,
            WizardStage::Results => 4,
        }
    }
}

impl StateMachine for WizardStage {
    fn can_transition_to(&self, target: &Self) -> bool {
        use WizardStage::*;
        matches!(
            (self, target),
            (_, Welcome)
                | (Welcome, Ratings)
                | (Ratings, Pairwise)
                | (Pairwise, Ratings)
                | (Pairwise, Results)
        )
    }

    fn valid_transitions(&self) -> Vec<Self> {
        use WizardStage::*;
        match self {
            Welcome => vec![Welcome, Ratings],
            Ratings => vec![Welcome, Pairwise],
            Pairwise => vec![Welcome, Ratings, Results],
            Results => vec![Welcome],
        }
    }
}

impl fmt::Display for WizardStage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            WizardStage::Welcome => "Welcome",
            WizardStage::Ratings => "Ratings",
            WizardStage::Pairwise => "Pairwise",
            WizardStage::Results => "Results",
        };
        write!(f, "{}", s)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::foundation::ErrorCode;
    use WizardStage::*;

    const ALL: [WizardStage; 4] = [Welcome, Ratings, Pairwise, Results];

    #[test]
    fn default_is_welcome() {
        assert_eq!(WizardStage::default(), Welcome);
    }

    #[test]
    fn every_stage_can_restart_to_welcome() {
        for stage in ALL {
            assert!(stage.can_transition_to(&Welcome), "{stage} -> Welcome");
        }
    }

    #[test]
    fn no_stage_is_terminal() {
        for stage in ALL {
            assert!(!stage.is_terminal());
        }
    }

    #[test]
    fn forward_path_is_strictly_sequential() {
        assert!(Welcome.can_transition_to(&Ratings));
        assert!(Ratings.can_transition_to(&Pairwise));
        assert!(Pairwise.can_transition_to(&Results));

        assert!(!Welcome.can_transition_to(&Pairwise));
        assert!(!Welcome.can_transition_to(&Results));
        assert!(!Ratings.can_transition_to(&Results));
        assert!(!Results.can_transition_to(&Pairwise));
    }

    #[test]
    fn valid_transitions_agree_with_can_transition_to() {
        for from in ALL {
            for to in ALL {
                assert_eq!(
                    from.valid_transitions().contains(&to),
                    from.can_transition_to(&to),
                    "{from} -> {to}"
                );
            }
        }
    }

    #[test]
    fn invalid_transition_reports_code() {
        let err = Results.transition_to(Ratings).unwrap_err();
        assert_eq!(err.code, ErrorCode::InvalidStateTransition);
    }

    #[test]
    fn serializes_to_snake_case_json() {
        assert_eq!(serde_json::to_string(&Pairwise).unwrap(), "\"pairwise\"");
    }
}
