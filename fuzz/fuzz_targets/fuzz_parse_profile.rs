#![no_main]
use libfuzzer_sys::fuzz_target;
use maturity_pulse::gates::evaluate_gates;
use maturity_pulse::model::ContextProfile;

/// Fuzz context profile parsing and gate evaluation.
fuzz_target!(|data: &[u8]| {
    if let Ok(s) = std::str::from_utf8(data)
        && let Ok(profile) = ContextProfile::from_json_str(s)
    {
        let _ = evaluate_gates(&profile);
    }
});
