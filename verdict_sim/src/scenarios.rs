//! Comparative modeling scenarios.

/// Scenario identifiers
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScenarioId {
    /// VRD-001: ground truth, AI predictor and human judge
    Panel,

    /// VRD-002: a judge weighted against the truth
    Contrarian,

    /// VRD-003: ternary judges with increasing indecision
    IndecisiveJury,

    /// VRD-004: influence passed down a chain of judges
    Chain,

    /// VRD-005: an isolated ternary node hitting its indecision target
    Calibration,

    /// VRD-006: a two-node correlation loop must be refused
    CycleGuard,
}

impl ScenarioId {
    /// Returns a list of all scenarios.
    pub fn all() -> Vec<ScenarioId> {
        vec![
            ScenarioId::Panel,
            ScenarioId::Contrarian,
            ScenarioId::IndecisiveJury,
            ScenarioId::Chain,
            ScenarioId::Calibration,
            ScenarioId::CycleGuard,
        ]
    }

    /// Resolves a command-line selection: `all` or a single scenario.
    pub fn select(selection: &str) -> Result<Vec<ScenarioId>, String> {
        if selection.eq_ignore_ascii_case("all") {
            Ok(Self::all())
        } else {
            selection.parse().map(|scenario| vec![scenario])
        }
    }

    /// Returns the scenario name.
    pub fn name(&self) -> &'static str {
        match self {
            ScenarioId::Panel => "panel",
            ScenarioId::Contrarian => "contrarian",
            ScenarioId::IndecisiveJury => "indecisive_jury",
            ScenarioId::Chain => "chain",
            ScenarioId::Calibration => "calibration",
            ScenarioId::CycleGuard => "cycle_guard",
        }
    }

    /// Returns a description of the scenario.
    pub fn description(&self) -> &'static str {
        match self {
            ScenarioId::Panel => "Truth, AI (weight 2 on truth) and human (weight 1 on truth and AI)",
            ScenarioId::Contrarian => "Judge with weight -2 on truth must disagree with it",
            ScenarioId::IndecisiveJury => "Three ternary judges with p_neutral 0.1 / 0.25 / 0.4",
            ScenarioId::Chain => "Six binary judges, each weighted 3 on the previous one",
            ScenarioId::Calibration => "Isolated ternary node with p_neutral 0.3",
            ScenarioId::CycleGuard => "Binary nodes correlating with each other",
        }
    }

    /// Returns true if this scenario uses ternary nodes.
    pub fn is_ternary(&self) -> bool {
        matches!(self, ScenarioId::IndecisiveJury | ScenarioId::Calibration)
    }

    /// Stream index used to derive this scenario's node seeds.
    pub fn stream(&self) -> u64 {
        match self {
            ScenarioId::Panel => 1,
            ScenarioId::Contrarian => 2,
            ScenarioId::IndecisiveJury => 3,
            ScenarioId::Chain => 4,
            ScenarioId::Calibration => 5,
            ScenarioId::CycleGuard => 6,
        }
    }
}

impl std::fmt::Display for ScenarioId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.name())
    }
}

impl std::str::FromStr for ScenarioId {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "panel" | "vrd-001" => Ok(ScenarioId::Panel),
            "contrarian" | "vrd-002" => Ok(ScenarioId::Contrarian),
            "indecisive_jury" | "indecisivejury" | "jury" | "vrd-003" => {
                Ok(ScenarioId::IndecisiveJury)
            }
            "chain" | "vrd-004" => Ok(ScenarioId::Chain),
            "calibration" | "vrd-005" => Ok(ScenarioId::Calibration),
            "cycle_guard" | "cycleguard" | "cycle" | "vrd-006" => Ok(ScenarioId::CycleGuard),
            _ => Err(format!("Unknown scenario: {}", s)),
        }
    }
}
