//! Training phase definitions
//!
//! Each week of a plan is classified into exactly one phase:
//! - Test: benchmark weeks opening every plan
//! - Filler: a single bridging week absorbing an odd remainder
//! - Recovery, Build 1, Build 2, Key: the repeating main block
//! - Taper: reduced load before the event
//! - Race: the event week itself

use serde::{Deserialize, Serialize};
use std::fmt;

/// The phase a training week belongs to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PhaseLabel {
    /// Benchmark week
    Test,
    /// Bridging week for remainders of 1 or 5
    Filler,
    /// Unloading week opening each main block cycle
    Recovery,
    /// First loading week
    #[serde(rename = "Build 1")]
    Build1,
    /// Second loading week
    #[serde(rename = "Build 2")]
    Build2,
    /// Peak week closing each main block cycle
    Key,
    /// Reduced-load week before the event
    Taper,
    /// Event week
    Race,
}

impl PhaseLabel {
    /// Get all phases in training order
    pub fn all() -> &'static [PhaseLabel] {
        &[
            PhaseLabel::Test,
            PhaseLabel::Filler,
            PhaseLabel::Recovery,
            PhaseLabel::Build1,
            PhaseLabel::Build2,
            PhaseLabel::Key,
            PhaseLabel::Taper,
            PhaseLabel::Race,
        ]
    }

    /// Get the display name for this phase
    pub fn name(&self) -> &'static str {
        match self {
            PhaseLabel::Test => "Test",
            PhaseLabel::Filler => "Filler",
            PhaseLabel::Recovery => "Recovery",
            PhaseLabel::Build1 => "Build 1",
            PhaseLabel::Build2 => "Build 2",
            PhaseLabel::Key => "Key",
            PhaseLabel::Taper => "Taper",
            PhaseLabel::Race => "Race",
        }
    }

    /// Get a description of what happens in this phase
    pub fn description(&self) -> &'static str {
        match self {
            PhaseLabel::Test => "Benchmark current fitness",
            PhaseLabel::Filler => "Steady training to absorb a leftover week",
            PhaseLabel::Recovery => "Unload and adapt before the next block",
            PhaseLabel::Build1 => "Progressive load, first step",
            PhaseLabel::Build2 => "Progressive load, second step",
            PhaseLabel::Key => "Hardest week of the block",
            PhaseLabel::Taper => "Cut volume, keep intensity",
            PhaseLabel::Race => "Event week",
        }
    }

    /// Whether this phase is part of the repeating main block
    pub fn is_main_block(&self) -> bool {
        matches!(
            self,
            PhaseLabel::Recovery | PhaseLabel::Build1 | PhaseLabel::Build2 | PhaseLabel::Key
        )
    }
}

impl fmt::Display for PhaseLabel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

impl std::str::FromStr for PhaseLabel {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "test" => Ok(PhaseLabel::Test),
            "filler" => Ok(PhaseLabel::Filler),
            "recovery" => Ok(PhaseLabel::Recovery),
            "build 1" | "build1" => Ok(PhaseLabel::Build1),
            "build 2" | "build2" => Ok(PhaseLabel::Build2),
            "key" => Ok(PhaseLabel::Key),
            "taper" => Ok(PhaseLabel::Taper),
            "race" => Ok(PhaseLabel::Race),
            _ => Err(format!("Unknown phase: {}", s)),
        }
    }
}
