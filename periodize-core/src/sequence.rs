//! Week plan sequencing
//!
//! Turns a count of complete weeks into an ordered list of phases:
//!
//! ```text
//! Test Test [Filler] [bridge] (Recovery Build1 Build2 Key)* Taper Race
//! ```
//!
//! The optional filler week and bridge are chosen by the week count modulo
//! the 8-week super-cycle, via [`REMAINDER_RULES`].

use crate::error::{Error, Result};
use crate::phase::PhaseLabel;
use serde::Serialize;

/// Benchmark weeks opening every plan
pub const TEST_WEEKS: u32 = 2;
/// Taper weeks before the event
pub const TAPER_WEEKS: u32 = 1;
/// Event weeks closing every plan
pub const RACE_WEEKS: u32 = 1;
/// Weeks present in every plan regardless of length
pub const FIXED_WEEKS: u32 = TEST_WEEKS + TAPER_WEEKS + RACE_WEEKS;

/// The repeating main block cycle
pub const MAIN_BLOCK: [PhaseLabel; 4] = [
    PhaseLabel::Recovery,
    PhaseLabel::Build1,
    PhaseLabel::Build2,
    PhaseLabel::Key,
];
/// Weeks per main block cycle
pub const MAIN_BLOCK_WEEKS: u32 = MAIN_BLOCK.len() as u32;
/// Length of the super-cycle the remainder rules are keyed on
pub const SUPER_CYCLE_WEEKS: u32 = 8;
/// Shortest plan that can be sequenced
pub const MIN_WEEKS: u32 = FIXED_WEEKS + MAIN_BLOCK_WEEKS;

const SHORT_BRIDGE: &[PhaseLabel] = &[PhaseLabel::Build2, PhaseLabel::Key];
const LONG_BRIDGE: &[PhaseLabel] = &[PhaseLabel::Build1, PhaseLabel::Build2, PhaseLabel::Key];

/// What to insert between the test weeks and the main block for one
/// remainder of the super-cycle
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RemainderRule {
    /// Number of filler weeks (0 or 1)
    pub filler_weeks: u32,
    /// Partial main block placed before the full cycles
    pub bridge: &'static [PhaseLabel],
}

impl RemainderRule {
    const fn new(filler_weeks: u32, bridge: &'static [PhaseLabel]) -> Self {
        Self {
            filler_weeks,
            bridge,
        }
    }
}

/// Rules indexed by `total_weeks % SUPER_CYCLE_WEEKS`
pub const REMAINDER_RULES: [RemainderRule; SUPER_CYCLE_WEEKS as usize] = [
    RemainderRule::new(0, &[]),
    RemainderRule::new(1, &[]),
    RemainderRule::new(0, SHORT_BRIDGE),
    RemainderRule::new(0, LONG_BRIDGE),
    RemainderRule::new(0, &[]),
    RemainderRule::new(1, &[]),
    RemainderRule::new(0, SHORT_BRIDGE),
    RemainderRule::new(0, LONG_BRIDGE),
];

/// Arithmetic breakdown of a plan before its phases are expanded
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct PlanLayout {
    /// Complete weeks the plan covers
    pub total_weeks: u32,
    /// Filler weeks after the test weeks
    pub filler_weeks: u32,
    /// Bridge inserted before the main block cycles
    pub bridge: &'static [PhaseLabel],
    /// Full main block repetitions
    pub main_block_cycles: u32,
}

impl PlanLayout {
    /// Number of weeks the expanded layout produces
    pub fn week_count(&self) -> u32 {
        TEST_WEEKS
            + self.filler_weeks
            + self.bridge.len() as u32
            + self.main_block_cycles * MAIN_BLOCK_WEEKS
            + TAPER_WEEKS
            + RACE_WEEKS
    }

    /// Expand the layout into its ordered phases
    pub fn phases(&self) -> PhaseSequence {
        let phases: Vec<PhaseLabel> = std::iter::repeat(PhaseLabel::Test)
            .take(TEST_WEEKS as usize)
            .chain(std::iter::repeat(PhaseLabel::Filler).take(self.filler_weeks as usize))
            .chain(self.bridge.iter().copied())
            .chain(
                MAIN_BLOCK
                    .iter()
                    .copied()
                    .cycle()
                    .take((self.main_block_cycles * MAIN_BLOCK_WEEKS) as usize),
            )
            .chain(std::iter::repeat(PhaseLabel::Taper).take(TAPER_WEEKS as usize))
            .chain(std::iter::repeat(PhaseLabel::Race).take(RACE_WEEKS as usize))
            .collect();

        debug_assert_eq!(phases.len(), self.total_weeks as usize);
        PhaseSequence(phases)
    }
}

/// Ordered phases of a plan, one per week
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct PhaseSequence(Vec<PhaseLabel>);

impl PhaseSequence {
    /// The phases as a slice
    pub fn as_slice(&self) -> &[PhaseLabel] {
        &self.0
    }

    /// Number of weeks in the sequence
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Whether the sequence has no weeks
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Iterate over the phases in order
    pub fn iter(&self) -> std::slice::Iter<'_, PhaseLabel> {
        self.0.iter()
    }

    /// Count the weeks of a given phase
    pub fn count(&self, phase: PhaseLabel) -> usize {
        self.0.iter().filter(|p| **p == phase).count()
    }
}

impl AsRef<[PhaseLabel]> for PhaseSequence {
    fn as_ref(&self) -> &[PhaseLabel] {
        &self.0
    }
}

impl<'a> IntoIterator for &'a PhaseSequence {
    type Item = &'a PhaseLabel;
    type IntoIter = std::slice::Iter<'a, PhaseLabel>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

/// Compute the layout for a number of complete weeks
///
/// Fails with [`Error::InsufficientWeeks`] below [`MIN_WEEKS`].
pub fn layout(total_weeks: u32) -> Result<PlanLayout> {
    if total_weeks < MIN_WEEKS {
        return Err(Error::InsufficientWeeks {
            weeks: total_weeks,
            minimum: MIN_WEEKS,
        });
    }

    let rule = REMAINDER_RULES[(total_weeks % SUPER_CYCLE_WEEKS) as usize];
    let main_block_cycles = (total_weeks - rule.filler_weeks - FIXED_WEEKS) / MAIN_BLOCK_WEEKS;

    let layout = PlanLayout {
        total_weeks,
        filler_weeks: rule.filler_weeks,
        bridge: rule.bridge,
        main_block_cycles,
    };

    tracing::debug!(
        total_weeks,
        filler_weeks = layout.filler_weeks,
        bridge_weeks = layout.bridge.len(),
        main_block_cycles,
        "Computed plan layout"
    );

    Ok(layout)
}

/// Produce the phase of every week in a plan of `total_weeks` complete weeks
pub fn sequence(total_weeks: u32) -> Result<PhaseSequence> {
    Ok(layout(total_weeks)?.phases())
}
