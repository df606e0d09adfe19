//! The algorithm registry (§4.C): enumerated algorithm identifiers, each
//! tagged with whether it is approximate, and mapping (in `dispatch`) to a
//! solver implementation.
//!
//! Mirrors `pbalgorithm.py`'s `PBSingleAlgorithm`/`PBMultiAlgorithm`: two
//! separate enums carry the single/multi scope distinction implicitly
//! through their type rather than a runtime tag.

/// Whether an algorithm variant solves single- or multi-budget instances.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Scope {
    Single,
    Multi,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SingleAlgorithm {
    BruteForce,
    Memoization,
    DynamicProgramming,
    BranchAndBound,
    Ilp,
    Greedy,
    RatioGreedy,
    Fptas,
    SimulatedAnnealing,
    GeneticAlgorithm,
}

impl SingleAlgorithm {
    pub fn scope(self) -> Scope {
        Scope::Single
    }

    /// Human-readable name used as [`crate::SolveResult::algorithm`].
    pub fn name(self) -> &'static str {
        match self {
            Self::BruteForce => "brute_force",
            Self::Memoization => "memoization",
            Self::DynamicProgramming => "dynamic_programming",
            Self::BranchAndBound => "branch_and_bound",
            Self::Ilp => "ilp",
            Self::Greedy => "greedy",
            Self::RatioGreedy => "ratio_greedy",
            Self::Fptas => "fptas",
            Self::SimulatedAnnealing => "simulated_annealing",
            Self::GeneticAlgorithm => "genetic_algorithm",
        }
    }

    pub fn is_approximate(self) -> bool {
        matches!(
            self,
            Self::Greedy | Self::RatioGreedy | Self::Fptas | Self::SimulatedAnnealing | Self::GeneticAlgorithm
        )
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MultiAlgorithm {
    BruteForce,
    Memoization,
    DynamicProgramming,
    BranchAndBound,
    Ilp,
    Greedy,
    RatioGreedy,
    SimulatedAnnealing,
    GeneticAlgorithm,
}

impl MultiAlgorithm {
    pub fn scope(self) -> Scope {
        Scope::Multi
    }

    pub fn name(self) -> &'static str {
        match self {
            Self::BruteForce => "brute_force",
            Self::Memoization => "memoization",
            Self::DynamicProgramming => "dynamic_programming",
            Self::BranchAndBound => "branch_and_bound",
            Self::Ilp => "ilp",
            Self::Greedy => "greedy",
            Self::RatioGreedy => "ratio_greedy",
            Self::SimulatedAnnealing => "simulated_annealing",
            Self::GeneticAlgorithm => "genetic_algorithm",
        }
    }

    /// The multi-dimensional branch-and-bound bound is a heuristic greedy
    /// fractional relaxation, not a true LP relaxation, so it is approximate
    /// even though its single-budget counterpart is exact.
    pub fn is_approximate(self) -> bool {
        matches!(
            self,
            Self::BranchAndBound
                | Self::Greedy
                | Self::RatioGreedy
                | Self::SimulatedAnnealing
                | Self::GeneticAlgorithm
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn single_approximate_flags_match_registry() {
        assert!(!SingleAlgorithm::BruteForce.is_approximate());
        assert!(!SingleAlgorithm::Memoization.is_approximate());
        assert!(!SingleAlgorithm::DynamicProgramming.is_approximate());
        assert!(!SingleAlgorithm::BranchAndBound.is_approximate());
        assert!(!SingleAlgorithm::Ilp.is_approximate());
        assert!(SingleAlgorithm::Greedy.is_approximate());
        assert!(SingleAlgorithm::RatioGreedy.is_approximate());
        assert!(SingleAlgorithm::Fptas.is_approximate());
        assert!(SingleAlgorithm::SimulatedAnnealing.is_approximate());
        assert!(SingleAlgorithm::GeneticAlgorithm.is_approximate());
    }

    #[test]
    fn multi_branch_and_bound_is_approximate() {
        assert!(MultiAlgorithm::BranchAndBound.is_approximate());
        assert!(!MultiAlgorithm::BruteForce.is_approximate());
        assert!(!MultiAlgorithm::Ilp.is_approximate());
    }
}
