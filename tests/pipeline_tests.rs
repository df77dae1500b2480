//! Pipeline integration tests.
//!
//! These tests exercise the full load → score → gate → advise → report
//! pipeline against fixture documents.

use maturity_pulse::insights::{InsightKind, MAX_SELECTIONS};
use maturity_pulse::model::{
    ContextProfile, Dimension, Pillar, PulseAnswer, PulseResponses, ResponseParseMode,
};
use maturity_pulse::overlay::select_default_metrics;
use maturity_pulse::pipeline::{
    AssessmentInput, AssessmentOptions, AssessmentReport, parse_input_file, run_assessment,
};
use maturity_pulse::reports::{ReportFormat, ReportMetadata, create_reporter_with_options};
use maturity_pulse::utils::Level;
use std::path::{Path, PathBuf};

// ============================================================================
// Test Fixtures
// ============================================================================

const FIXTURES_DIR: &str = concat!(env!("CARGO_MANIFEST_DIR"), "/tests/fixtures");

fn fixture_path(name: &str) -> PathBuf {
    Path::new(FIXTURES_DIR).join(name)
}

fn assess_fixture(name: &str) -> AssessmentReport {
    let input = parse_input_file(&fixture_path(name), ResponseParseMode::Strict)
        .expect("fixture should parse");
    run_assessment(&input, &AssessmentOptions::default())
}

fn level(n: u8) -> Level {
    Level::new(n).expect("valid level")
}

// ============================================================================
// Scenarios
// ============================================================================

mod scenarios {
    use super::*;

    #[test]
    fn regulated_organization_gets_moderate_compliance_first() {
        let report = assess_fixture("scenario_a_regulated.json");

        let ids: Vec<&str> = report.gates.iter().map(|g| g.id.as_str()).collect();
        assert_eq!(ids, ["human_in_the_loop", "assurance_cadence"]);
        assert_eq!(report.analysis.avg, 1.0);

        let first = &report.insights[0];
        assert_eq!(first.kind, InsightKind::Compliance);
        assert_eq!(first.id, "moderate_compliance");
        assert_eq!(report.priorities[0].id, "moderate_compliance");
    }

    #[test]
    fn leader_gets_leadership_insight_without_band_priority() {
        let report = assess_fixture("scenario_b_leader.json");

        assert!(report.gates.is_empty());
        assert!(report.is_complete());
        for pillar in Pillar::ALL {
            assert_eq!(report.scores.get(pillar), Some(3.0));
        }
        assert_eq!(report.analysis.avg, 3.0);
        assert_eq!(report.insights[0].kind, InsightKind::Leadership);
        assert!(report.priorities.is_empty());
    }

    #[test]
    fn beginner_gets_foundation_guidance() {
        let report = assess_fixture("scenario_c_beginner.json");

        assert_eq!(report.analysis.avg, 0.0);
        assert!(report.gates.is_empty());
        assert!(report.value_overlay.is_none());
        assert_eq!(report.insights[0].kind, InsightKind::Foundation);
        assert_eq!(report.priorities[0].id, "build_foundations");
    }

    #[test]
    fn single_scored_pillar_drives_statistics() {
        let report = assess_fixture("scenario_d_operations_only.json");

        assert_eq!(report.scores.len(), 1);
        assert_eq!(report.scores.get(Pillar::Operations), Some(1.5));
        assert_eq!(report.analysis.pillar_count, 1);
        assert_eq!(report.analysis.min, 1.5);
        assert_eq!(report.analysis.max, 1.5);
        assert_eq!(report.analysis.variance, 0.0);
        assert!(report.missing_pillars.contains(&Pillar::Clarity));
        assert_eq!(report.missing_pillars.len(), 5);
        assert_eq!(report.insights[0].id, "systematic_development");
    }
}

// ============================================================================
// Cross-cutting properties
// ============================================================================

mod properties {
    use super::*;

    #[test]
    fn identical_inputs_give_identical_json() {
        let a = assess_fixture("scenario_a_regulated.json");
        let b = assess_fixture("scenario_a_regulated.json");
        assert_eq!(
            serde_json::to_string(&a).expect("json"),
            serde_json::to_string(&b).expect("json")
        );
        assert_eq!(a.input_fingerprint, b.input_fingerprint);
    }

    #[test]
    fn fingerprint_tracks_input_changes() {
        let a = assess_fixture("scenario_b_leader.json");
        let c = assess_fixture("scenario_c_beginner.json");
        assert_ne!(a.input_fingerprint, c.input_fingerprint);
    }

    #[test]
    fn compliance_leads_whenever_gates_fire() {
        for n in 0..=4 {
            let profile = ContextProfile::uniform(level(n));
            for answer in PulseAnswer::ALL {
                let input = AssessmentInput::new(Some(profile), PulseResponses::uniform(answer));
                let report = run_assessment(&input, &AssessmentOptions::default());
                if report.has_gates() {
                    assert_eq!(report.insights[0].kind, InsightKind::Compliance);
                }
                assert!(report.insights.len() <= MAX_SELECTIONS);
                assert!(report.priorities.len() <= MAX_SELECTIONS);
            }
        }
    }

    #[test]
    fn critical_compliance_at_three_gates() {
        let profile = ContextProfile::uniform(level(2))
            .with_level(Dimension::RegulatoryIntensity, level(4))
            .with_level(Dimension::DataSensitivity, level(3));
        let input = AssessmentInput::new(Some(profile), PulseResponses::uniform(PulseAnswer::Mostly));
        let report = run_assessment(&input, &AssessmentOptions::default());
        assert_eq!(report.gates.len(), 3);
        assert_eq!(report.insights[0].id, "critical_compliance");
    }

    #[test]
    fn overlay_ignores_responses() {
        let profile = ContextProfile::uniform(level(3));
        let expected = select_default_metrics(&profile);

        for answer in PulseAnswer::ALL {
            let input = AssessmentInput::new(Some(profile), PulseResponses::uniform(answer));
            let report = run_assessment(&input, &AssessmentOptions::default());
            let overlay = report.value_overlay.expect("profile present");
            for (pillar, metric_id) in &expected {
                assert_eq!(overlay.get(*pillar).map(|e| e.metric_id.as_str()), Some(*metric_id));
            }
        }
    }

    #[test]
    fn overlay_can_be_disabled() {
        let input = AssessmentInput::new(
            Some(ContextProfile::uniform(level(1))),
            PulseResponses::uniform(PulseAnswer::Yes),
        );
        let report = run_assessment(
            &input,
            &AssessmentOptions {
                include_overlay: false,
            },
        );
        assert!(report.value_overlay.is_none());
        let json = serde_json::to_value(&report).expect("json");
        assert!(json.get("value_overlay").is_none());
    }
}

// ============================================================================
// Parsing modes and errors
// ============================================================================

mod parsing {
    use super::*;

    #[test]
    fn strict_mode_rejects_drift() {
        let err = parse_input_file(&fixture_path("lenient_drift.json"), ResponseParseMode::Strict)
            .expect_err("unknown question should be rejected");
        assert!(err.is_response_error());
    }

    #[test]
    fn lenient_mode_skips_drift() {
        let input = parse_input_file(&fixture_path("lenient_drift.json"), ResponseParseMode::Lenient)
            .expect("lenient parse");
        let report = run_assessment(&input, &AssessmentOptions::default());
        assert_eq!(report.scores.len(), 1);
        assert_eq!(report.scores.get(Pillar::Clarity), Some(3.0));
        assert_eq!(input.responses.answered_in(Pillar::Talent), 0);
    }

    #[test]
    fn missing_file_is_io_error() {
        let err = parse_input_file(&fixture_path("nope.json"), ResponseParseMode::Strict)
            .expect_err("missing file");
        assert!(err.to_string().contains("nope.json"));
    }
}

// ============================================================================
// Report rendering
// ============================================================================

mod rendering {
    use super::*;

    #[test]
    fn every_format_renders_every_fixture() {
        let fixtures = [
            "scenario_a_regulated.json",
            "scenario_b_leader.json",
            "scenario_c_beginner.json",
            "scenario_d_operations_only.json",
        ];
        for name in fixtures {
            let report = assess_fixture(name);
            for format in [ReportFormat::Summary, ReportFormat::Json, ReportFormat::Markdown] {
                let text = create_reporter_with_options(format, false)
                    .generate_report(&report, &ReportMetadata::new().with_input_path(name))
                    .expect("render");
                assert!(!text.is_empty(), "{format} output for {name} is empty");
            }
        }
    }

    #[test]
    fn markdown_names_triggered_gates() {
        let report = assess_fixture("scenario_a_regulated.json");
        let text = create_reporter_with_options(ReportFormat::Markdown, false)
            .generate_report(&report, &ReportMetadata::new())
            .expect("render");
        assert!(text.contains("Human-in-the-loop review"));
        assert!(text.contains("Model assurance cadence"));
    }
}
