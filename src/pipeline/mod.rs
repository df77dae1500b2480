//! Pipeline orchestration for assessments.
//!
//! Shared logic for the load → score → gate → advise → report workflow,
//! used by every CLI command handler.

mod assess;
mod input;
mod output;
mod report_stage;

pub use assess::{
    AssessmentOptions, AssessmentReport, ENGINE_VERSION, assess_str, run_assessment,
};
pub use input::{AssessmentInput, parse_input_file, parse_profile_file};
pub use output::{OutputTarget, should_use_color, write_output};
pub use report_stage::{output_batch_report, output_report};

/// Exit codes for CI/CD integration
pub mod exit_codes {
    /// Assessment completed and no configured threshold was breached
    pub const SUCCESS: i32 = 0;
    /// Average maturity is below the configured minimum
    pub const BELOW_MIN_AVERAGE: i32 = 1;
    /// Gates fired while `fail_on_gates` is set
    pub const GATES_TRIGGERED: i32 = 2;
    /// An error occurred
    pub const ERROR: i32 = 3;
}

/// Map a finished assessment to a process exit code.
///
/// Triggered gates take precedence over a low average. An assessment with
/// no fully answered pillar never trips `min_average`.
#[must_use]
pub fn assessment_exit_code(
    report: &AssessmentReport,
    fail_on_gates: bool,
    min_average: Option<f64>,
) -> i32 {
    if fail_on_gates && report.has_gates() {
        return exit_codes::GATES_TRIGGERED;
    }
    if let Some(min) = min_average
        && report.analysis.has_data()
        && report.analysis.avg < min
    {
        return exit_codes::BELOW_MIN_AVERAGE;
    }
    exit_codes::SUCCESS
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{ContextProfile, PulseAnswer, PulseResponses};
    use crate::utils::Level;

    fn report(profile: Option<ContextProfile>, answer: PulseAnswer) -> AssessmentReport {
        let input = AssessmentInput::new(profile, PulseResponses::uniform(answer));
        run_assessment(&input, &AssessmentOptions::default())
    }

    #[test]
    fn test_exit_codes_values() {
        assert_eq!(exit_codes::SUCCESS, 0);
        assert_eq!(exit_codes::BELOW_MIN_AVERAGE, 1);
        assert_eq!(exit_codes::GATES_TRIGGERED, 2);
        assert_eq!(exit_codes::ERROR, 3);
    }

    #[test]
    fn test_gates_take_precedence() {
        let gated = report(Some(ContextProfile::uniform(Level::MAX)), PulseAnswer::No);
        assert!(gated.has_gates());
        assert_eq!(
            assessment_exit_code(&gated, true, Some(2.0)),
            exit_codes::GATES_TRIGGERED
        );
        assert_eq!(
            assessment_exit_code(&gated, false, Some(2.0)),
            exit_codes::BELOW_MIN_AVERAGE
        );
        assert_eq!(assessment_exit_code(&gated, false, None), exit_codes::SUCCESS);
    }

    #[test]
    fn test_min_average_needs_data() {
        let empty = run_assessment(&AssessmentInput::default(), &AssessmentOptions::default());
        assert_eq!(
            assessment_exit_code(&empty, true, Some(3.0)),
            exit_codes::SUCCESS
        );

        let strong = report(None, PulseAnswer::Yes);
        assert_eq!(
            assessment_exit_code(&strong, true, Some(3.0)),
            exit_codes::SUCCESS
        );
    }
}
