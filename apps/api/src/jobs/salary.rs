//! Best-effort parsing of free-text salary ranges such as `"12 - 15 LPA"`.
//!
//! Every character other than an ASCII digit or `-` is dropped, the rest is
//! split on `-`, and each component is read as thousands. Text with no usable
//! number parses to `0 - 0` and is flagged as ambiguous so callers can decide
//! whether to accept it. A component too large for `u64` saturates at
//! `u64::MAX` and is flagged the same way.

/// Multiplier applied to every parsed component.
const SALARY_UNIT: u64 = 1000;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SalaryRange {
    pub min: u64,
    pub max: u64,
    /// No component could be read as a number, or one of them overflowed.
    pub ambiguous: bool,
}

pub fn parse_salary_range(text: &str) -> SalaryRange {
    let kept: String = text
        .chars()
        .filter(|c| c.is_ascii_digit() || *c == '-')
        .collect();

    let mut parts = kept.split('-').map(parse_component);
    let first = parts.next().unwrap_or(Component::Empty);
    let second = parts.next().unwrap_or(Component::Empty);

    // A zero component counts as missing, like an empty one.
    let min = first.value().filter(|v| *v > 0).unwrap_or(0);
    let max = second.value().filter(|v| *v > 0).unwrap_or(min);

    let overflowed = first == Component::Overflow || second == Component::Overflow;
    let unreadable = first == Component::Empty && second == Component::Empty;

    SalaryRange {
        min: min.min(max),
        max: min.max(max),
        ambiguous: overflowed || unreadable,
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Component {
    Empty,
    Value(u64),
    /// Digits that do not fit in `u64` once scaled.
    Overflow,
}

impl Component {
    fn value(self) -> Option<u64> {
        match self {
            Component::Empty => None,
            Component::Value(v) => Some(v),
            Component::Overflow => Some(u64::MAX),
        }
    }
}

fn parse_component(part: &str) -> Component {
    if part.is_empty() {
        return Component::Empty;
    }
    // `part` is all ASCII digits here, so parsing only fails on overflow.
    match part.parse::<u64>().ok().and_then(|v| v.checked_mul(SALARY_UNIT)) {
        Some(v) => Component::Value(v),
        None => Component::Overflow,
    }
}
