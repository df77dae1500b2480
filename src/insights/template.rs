//! Named-slot substitution for library text.

use std::collections::BTreeMap;

/// Every slot a library template may use.
pub const SLOTS: [&str; 8] = [
    "domain",
    "avg",
    "spread",
    "gate_count",
    "gate_titles",
    "min",
    "max",
    "strongest",
];

/// Values for template slots.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TemplateVars(BTreeMap<&'static str, String>);

impl TemplateVars {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Set a slot. Names outside [`SLOTS`] are ignored.
    #[must_use]
    pub fn with(mut self, slot: &str, value: impl Into<String>) -> Self {
        if let Some(known) = SLOTS.iter().find(|s| **s == slot) {
            self.0.insert(known, value.into());
        }
        self
    }

    #[must_use]
    pub fn get(&self, slot: &str) -> Option<&str> {
        self.0.get(slot).map(String::as_str)
    }

    /// Fill every `{slot}` that has a value.
    ///
    /// Braces around unknown or unset names are copied through unchanged.
    #[must_use]
    pub fn render(&self, template: &str) -> String {
        let mut out = String::with_capacity(template.len());
        let mut rest = template;
        while let Some(open) = rest.find('{') {
            out.push_str(&rest[..open]);
            let after = &rest[open + 1..];
            match after.find('}') {
                Some(close) => {
                    let name = &after[..close];
                    match self.get(name) {
                        Some(value) => out.push_str(value),
                        None => {
                            out.push('{');
                            out.push_str(name);
                            out.push('}');
                        }
                    }
                    rest = &after[close + 1..];
                }
                None => {
                    out.push_str(&rest[open..]);
                    rest = "";
                }
            }
        }
        out.push_str(rest);
        out
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_render_fills_known_slots() {
        let vars = TemplateVars::new()
            .with("domain", "Talent")
            .with("avg", "1.3");
        assert_eq!(
            vars.render("Strengthen {domain} (avg {avg}/3)"),
            "Strengthen Talent (avg 1.3/3)"
        );
    }

    #[test]
    fn test_unset_and_unknown_slots_pass_through() {
        let vars = TemplateVars::new().with("nonsense", "x").with("min", "0.5");
        assert_eq!(vars.get("nonsense"), None);
        assert_eq!(vars.render("{spread} and {nonsense} at {min}"), "{spread} and {nonsense} at 0.5");
    }

    #[test]
    fn test_unclosed_brace() {
        let vars = TemplateVars::new().with("max", "3.0");
        assert_eq!(vars.render("{max} then {open"), "3.0 then {open");
        assert_eq!(vars.render("no slots"), "no slots");
    }

    #[test]
    fn test_values_are_not_rescanned() {
        let vars = TemplateVars::new()
            .with("domain", "{avg}")
            .with("avg", "2.0");
        assert_eq!(vars.render("{domain}"), "{avg}");
    }
}
