//! Navigation phases and the per-run summary.

use serde::{Deserialize, Serialize};

use crate::core::Cell;

/// Phase of a navigation run.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum NavigationPhase {
    /// Round 0, heading for the goal
    #[default]
    Seeking,
    /// Round 0, goal reached, improving the best path
    Mapping,
    /// Round 1, driving the committed path
    Replaying,
}

impl NavigationPhase {
    /// Round number reported to the simulator.
    pub fn round(self) -> u8 {
        match self {
            NavigationPhase::Seeking | NavigationPhase::Mapping => 0,
            NavigationPhase::Replaying => 1,
        }
    }

    /// Are sensor readings still folded into the map?
    pub fn is_exploring(self) -> bool {
        !matches!(self, NavigationPhase::Replaying)
    }

    /// Phase name for logging
    pub fn name(self) -> &'static str {
        match self {
            NavigationPhase::Seeking => "Seeking",
            NavigationPhase::Mapping => "Mapping",
            NavigationPhase::Replaying => "Replaying",
        }
    }
}

/// Why exploration ended.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ReplayTrigger {
    /// Round-0 step budget used up
    StepBudget,
    /// No open cell left to explore
    FrontierExhausted,
    /// Recent detours cost more than they shortened the best path
    CostExceedsGain,
}

impl ReplayTrigger {
    /// Reason for logging
    pub fn describe(self) -> &'static str {
        match self {
            ReplayTrigger::StepBudget => "step budget exhausted",
            ReplayTrigger::FrontierExhausted => "frontier exhausted",
            ReplayTrigger::CostExceedsGain => "route cost exceeds path gain",
        }
    }
}

/// Statistics of the exploration round.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RunSummary {
    /// Steps taken when the goal was first entered
    pub first_goal_steps: Option<u32>,
    /// Steps taken in round 0
    pub exploration_steps: u32,
    /// Routes computed while mapping
    pub routes_computed: usize,
    /// What ended round 0
    pub trigger: Option<ReplayTrigger>,
    /// Committed path, entrance first
    pub best_path: Vec<Cell>,
}

impl RunSummary {
    /// Legs on the committed path.
    pub fn path_legs(&self) -> usize {
        self.best_path.len().saturating_sub(1)
    }
}
