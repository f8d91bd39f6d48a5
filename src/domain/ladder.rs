//! Ordered scoring tables.
//!
//! Every sub-indicator maps its metric to a score in 1..=5 by walking an ordered
//! table and taking the first rung that admits the value. The floor applies when no
//! rung matches, including when the value is NaN.

/// A score together with its human-readable classification.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Grade {
    pub score: u8,
    pub signal: &'static str,
}

impl Grade {
    pub const fn new(score: u8, signal: &'static str) -> Self {
        Self { score, signal }
    }
}

/// Comparison applied by a threshold rung.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Bound {
    /// value < threshold
    Below(f64),
    /// value <= threshold
    AtMost(f64),
    /// value >= threshold
    AtLeast(f64),
}

impl Bound {
    pub fn admits(&self, value: f64) -> bool {
        match *self {
            Bound::Below(t) => value < t,
            Bound::AtMost(t) => value <= t,
            Bound::AtLeast(t) => value >= t,
        }
    }
}

#[derive(Debug, Clone, Copy)]
pub struct Rung {
    pub bound: Bound,
    pub grade: Grade,
}

impl Rung {
    pub const fn new(bound: Bound, score: u8, signal: &'static str) -> Self {
        Self {
            bound,
            grade: Grade::new(score, signal),
        }
    }
}

/// Ladder over a single numeric metric.
#[derive(Debug, Clone, Copy)]
pub struct ThresholdLadder {
    pub rungs: &'static [Rung],
    pub floor: Grade,
}

impl ThresholdLadder {
    pub fn grade(&self, value: f64) -> Grade {
        self.rungs
            .iter()
            .find(|rung| rung.bound.admits(value))
            .map(|rung| rung.grade)
            .unwrap_or(self.floor)
    }
}

/// A rung whose condition looks at several related values at once.
pub struct Rule<T: 'static> {
    pub when: fn(&T) -> bool,
    pub grade: Grade,
}

/// Ladder over a structured input, evaluated top to bottom.
pub struct RuleLadder<T: 'static> {
    pub rules: &'static [Rule<T>],
    pub floor: Grade,
}

impl<T> RuleLadder<T> {
    pub fn grade(&self, input: &T) -> Grade {
        self.rules
            .iter()
            .find(|rule| (rule.when)(input))
            .map(|rule| rule.grade)
            .unwrap_or(self.floor)
    }
}
