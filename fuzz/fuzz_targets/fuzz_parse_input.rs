#![no_main]
use libfuzzer_sys::fuzz_target;
use maturity_pulse::model::ResponseParseMode;
use maturity_pulse::pipeline::{AssessmentInput, AssessmentOptions, run_assessment};

/// Fuzz assessment document parsing in both response modes.
///
/// Any document that parses must also assess without panicking.
fuzz_target!(|data: &[u8]| {
    if let Ok(s) = std::str::from_utf8(data) {
        for mode in [ResponseParseMode::Strict, ResponseParseMode::Lenient] {
            if let Ok(input) = AssessmentInput::from_json_str(s, mode) {
                let _ = run_assessment(&input, &AssessmentOptions::default());
            }
        }
    }
});
