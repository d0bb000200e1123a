// src/compare/verdict.rs
//
// Per-row advantage decision. Rules run in a fixed order and the first
// one that decides wins:
//   1. competitor value missing          → Baseline
//   2. both numeric + directional name   → larger / smaller wins
//   3. identical strings                 → Equal
//   4. "yes" on exactly one side         → that side
//   5. anything else                     → Equal
//
// Matching on spec names and on "yes" is plain substring containment.
// Ranges ("200 – 240 V") only contribute their first number.

use serde::{Deserialize, Serialize};

/// Placeholder used when the competitor has no value for a baseline attribute.
pub const NOT_SPECIFIED: &str = "Not specified";

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Verdict {
    Baseline,
    Competitor,
    Equal,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Direction {
    HigherIsBetter,
    LowerIsBetter,
}

const VFD_HIGHER_IS_BETTER: &[&str] = &[
    "Programmable digital inputs",
    "Programmable analogue outputs",
    "Programmable relay outputs",
    "Analogue inputs",
    "True Power Factor",
    "Displacement Power Factor",
    "Max. motor cable lengths",
    "Output frequency",
    "Overload capacity",
];

const VFD_LOWER_IS_BETTER: &[&str] = &["Ramp times (minimum)"];

/// Which spec names carry a numeric direction. Names are matched by
/// case-sensitive substring; the higher-is-better set is consulted first.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct DirectionalityPolicy {
    higher: Vec<String>,
    lower: Vec<String>,
}

impl DirectionalityPolicy {
    pub fn new<H, L>(higher: H, lower: L) -> Self
    where
        H: IntoIterator,
        H::Item: Into<String>,
        L: IntoIterator,
        L::Item: Into<String>,
    {
        Self {
            higher: higher.into_iter().map(Into::into).collect(),
            lower: lower.into_iter().map(Into::into).collect(),
        }
    }

    /// No directional names at all: numeric values fall straight through
    /// to the textual rules.
    pub fn none() -> Self {
        Self { higher: Vec::new(), lower: Vec::new() }
    }

    /// The drive-spec sets used by the bundled catalog.
    pub fn vfd() -> Self {
        Self::new(VFD_HIGHER_IS_BETTER.iter().copied(), VFD_LOWER_IS_BETTER.iter().copied())
    }

    pub fn higher_is_better(&self) -> &[String] { &self.higher }
    pub fn lower_is_better(&self) -> &[String] { &self.lower }

    pub fn direction_for(&self, spec_name: &str) -> Option<Direction> {
        if self.higher.iter().any(|n| spec_name.contains(n.as_str())) {
            Some(Direction::HigherIsBetter)
        } else if self.lower.iter().any(|n| spec_name.contains(n.as_str())) {
            Some(Direction::LowerIsBetter)
        } else {
            None
        }
    }
}

impl Default for DirectionalityPolicy {
    fn default() -> Self { Self::vfd() }
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct VerdictEngine {
    policy: DirectionalityPolicy,
}

impl VerdictEngine {
    pub fn new(policy: DirectionalityPolicy) -> Self {
        Self { policy }
    }

    pub fn policy(&self) -> &DirectionalityPolicy { &self.policy }

    pub fn judge(&self, spec_name: &str, baseline: &str, competitor: &str) -> Verdict {
        if competitor == NOT_SPECIFIED {
            return Verdict::Baseline;
        }

        if let (Some(b), Some(c)) = (extract_number(baseline), extract_number(competitor)) {
            match self.policy.direction_for(spec_name) {
                Some(Direction::HigherIsBetter) if b > c => return Verdict::Baseline,
                Some(Direction::HigherIsBetter) if c > b => return Verdict::Competitor,
                Some(Direction::LowerIsBetter) if b < c => return Verdict::Baseline,
                Some(Direction::LowerIsBetter) if c < b => return Verdict::Competitor,
                _ => {}
            }
        }

        if baseline == competitor {
            return Verdict::Equal;
        }

        let b_yes = baseline.to_lowercase().contains("yes");
        let c_yes = competitor.to_lowercase().contains("yes");
        match (b_yes, c_yes) {
            (true, false) => Verdict::Baseline,
            (false, true) => Verdict::Competitor,
            _ => Verdict::Equal,
        }
    }
}

/// First `[0-9]+(\.[0-9]+)?` run in `value`, parsed as f64.
/// `None` means "no number", which is different from a literal `0`.
pub fn extract_number(value: &str) -> Option<f64> {
    let b = value.as_bytes();
    let start = b.iter().position(u8::is_ascii_digit)?;

    let mut end = start;
    while end < b.len() && b[end].is_ascii_digit() { end += 1; }

    // Fraction only counts when at least one digit follows the dot.
    if end + 1 < b.len() && b[end] == b'.' && b[end + 1].is_ascii_digit() {
        end += 1;
        while end < b.len() && b[end].is_ascii_digit() { end += 1; }
    }

    value[start..end].parse().ok()
}
