//! Random PB instance generation. Grounded in
//! `community_knapsack/generator/pbgenerator.py`'s `PBGenerator`.

use pbknapsack::{MultiProblem, SingleProblem};
use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};
use rand_distr::{Distribution, Normal};

use crate::error::BoundsError;

/// A validated inclusive `[min, max]` bound on a quantity to generate.
///
/// Mirrors the `(min, max)` tuples `pbgenerator.py` accepts everywhere,
/// made into a type so the negative/inverted checks happen once at
/// construction instead of being repeated at every call site.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Bound {
    min: i64,
    max: i64,
}

impl Bound {
    pub fn new(min: i64, max: i64) -> Result<Self, BoundsError> {
        if min < 0 || max < 0 {
            return Err(BoundsError::Negative { min, max });
        }
        if min > max {
            return Err(BoundsError::Inverted { min, max });
        }
        Ok(Self { min, max })
    }

    /// Like [`Self::new`], but additionally rejects a bound that contains
    /// zero — costs must be strictly positive (§3), matching
    /// `generate_single_problem`'s `if 0 in cost_bound: raise ValueError`.
    fn positive(min: i64, max: i64) -> Result<Self, BoundsError> {
        let bound = Self::new(min, max)?;
        if bound.min == 0 || bound.max == 0 {
            return Err(BoundsError::NonPositiveCost { min, max });
        }
        Ok(bound)
    }

    fn sample(self, rng: &mut impl Rng) -> i64 {
        rng.random_range(self.min..=self.max)
    }
}

/// Resolves a raw `vote_length_bound` tuple the way `_generate_utilities`
/// does before ever constructing a [`Bound`]: a negative lower bound
/// collapses to 0, and a negative upper bound collapses to `num_projects`
/// (the "no bound" sentinels `-1` conventionally carries throughout this
/// package, matching `ordinal_to_utility`'s own `-1` convention).
fn resolve_vote_length_bound(min: i64, max: i64, num_projects: usize) -> Result<Bound, BoundsError> {
    let min = min.max(0);
    let max = if max < 0 { num_projects as i64 } else { max };
    Bound::new(min, max)
}

/// Picks an index in `0..weights.len()` with probability proportional to
/// `weights`, falling back to a uniform choice if every weight collapsed
/// to zero. Equivalent to `random.choices(range(n), weightings, k=1)[0]`.
fn weighted_choice(rng: &mut impl Rng, weights: &[f64]) -> usize {
    let total: f64 = weights.iter().sum();
    if total <= 0.0 {
        return rng.random_range(0..weights.len());
    }
    let mut target = rng.random::<f64>() * total;
    for (index, &weight) in weights.iter().enumerate() {
        if target < weight {
            return index;
        }
        target -= weight;
    }
    weights.len() - 1
}

/// Generates a voter-by-project utility matrix: every project is given a
/// popularity weighting drawn from `Normal(0.5, 0.2)` clamped to `[0, 1]`
/// (so some projects are "more popular" than others, per the module
/// docstring this is grounded in), each voter casts the same number of
/// weighted-random votes, and every vote sets a utility drawn uniformly
/// from `utility_bound` (floored to at least 1, since a cast vote must
/// contribute positive utility).
fn generate_utilities(
    rng: &mut impl Rng,
    num_projects: usize,
    num_voters: usize,
    utility_bound: Bound,
    vote_length_bound: Bound,
) -> Vec<Vec<i64>> {
    let mut utilities = vec![vec![0i64; num_projects]; num_voters];
    if num_projects == 0 {
        return utilities;
    }

    let utility_bound = if utility_bound.min == 0 {
        Bound {
            min: 1,
            max: utility_bound.max.max(1),
        }
    } else {
        utility_bound
    };
    let num_votes = vote_length_bound.sample(rng) as usize;

    let popularity = Normal::new(0.5, 0.2).expect("Normal(0.5, 0.2) has fixed, always-valid parameters");
    let weights: Vec<f64> = (0..num_projects).map(|_| popularity.sample(rng).clamp(0.0, 1.0)).collect();

    for voter in utilities.iter_mut() {
        for _ in 0..num_votes {
            let project = weighted_choice(rng, &weights);
            voter[project] = utility_bound.sample(rng);
        }
    }
    utilities
}

/// Generates random [`SingleProblem`]/[`MultiProblem`] instances from
/// bounds on each of their parameters, with a seedable RNG so the same
/// seed always reproduces the same instance.
pub struct Generator {
    rng: SmallRng,
}

impl Generator {
    /// `seed = None` draws entropy from the OS; `Some(seed)` makes
    /// generation fully reproducible, matching `PBGenerator(seed=...)`.
    pub fn new(seed: Option<u64>) -> Self {
        let rng = match seed {
            Some(seed) => SmallRng::seed_from_u64(seed),
            None => SmallRng::seed_from_u64(rand::random()),
        };
        Self { rng }
    }

    /// Generates a random single-budget instance. `vote_length_bound`'s
    /// upper end may be `-1` to mean "up to `num_projects`", matching
    /// `generate_single_problem`'s own default of `(0, -1)`.
    #[allow(clippy::too_many_arguments)]
    pub fn generate_single_problem(
        &mut self,
        num_projects_bound: (i64, i64),
        num_voters_bound: (i64, i64),
        budget_bound: (i64, i64),
        cost_bound: (i64, i64),
        utility_bound: (i64, i64),
        vote_length_bound: (i64, i64),
    ) -> Result<SingleProblem<String>, BoundsError> {
        let num_projects_bound = Bound::new(num_projects_bound.0, num_projects_bound.1)?;
        let num_voters_bound = Bound::new(num_voters_bound.0, num_voters_bound.1)?;
        let budget_bound = Bound::new(budget_bound.0, budget_bound.1)?;
        let cost_bound = Bound::positive(cost_bound.0, cost_bound.1)?;
        let utility_bound = Bound::new(utility_bound.0, utility_bound.1)?;

        let num_projects = num_projects_bound.sample(&mut self.rng) as usize;
        let num_voters = num_voters_bound.sample(&mut self.rng) as usize;
        let budget = budget_bound.sample(&mut self.rng);
        let costs: Vec<i64> = (0..num_projects).map(|_| cost_bound.sample(&mut self.rng)).collect();

        let vote_length_bound = resolve_vote_length_bound(vote_length_bound.0, vote_length_bound.1, num_projects)?;
        let utilities = generate_utilities(&mut self.rng, num_projects, num_voters, utility_bound, vote_length_bound);

        Ok(SingleProblem::new(num_projects, num_voters, budget, costs, utilities, None, None)
            .expect("a generator-built instance always satisfies its own shape invariants"))
    }

    /// Generates a random multi-budget instance over `budget_bound.len()`
    /// dimensions; `cost_bound` must have the same length.
    #[allow(clippy::too_many_arguments)]
    pub fn generate_multi_problem(
        &mut self,
        num_projects_bound: (i64, i64),
        num_voters_bound: (i64, i64),
        budget_bound: &[(i64, i64)],
        cost_bound: &[(i64, i64)],
        utility_bound: (i64, i64),
        vote_length_bound: (i64, i64),
    ) -> Result<MultiProblem<String>, BoundsError> {
        let num_projects_bound = Bound::new(num_projects_bound.0, num_projects_bound.1)?;
        let num_voters_bound = Bound::new(num_voters_bound.0, num_voters_bound.1)?;
        let budget_bounds: Vec<Bound> = budget_bound
            .iter()
            .map(|&(min, max)| Bound::new(min, max))
            .collect::<Result<_, _>>()?;
        let cost_bounds: Vec<Bound> = cost_bound
            .iter()
            .map(|&(min, max)| Bound::positive(min, max))
            .collect::<Result<_, _>>()?;
        let utility_bound = Bound::new(utility_bound.0, utility_bound.1)?;

        let num_projects = num_projects_bound.sample(&mut self.rng) as usize;
        let num_voters = num_voters_bound.sample(&mut self.rng) as usize;
        let budget: Vec<i64> = budget_bounds.iter().map(|bound| bound.sample(&mut self.rng)).collect();
        let costs: Vec<Vec<i64>> = cost_bounds
            .iter()
            .map(|bound| (0..num_projects).map(|_| bound.sample(&mut self.rng)).collect())
            .collect();

        let vote_length_bound = resolve_vote_length_bound(vote_length_bound.0, vote_length_bound.1, num_projects)?;
        let utilities = generate_utilities(&mut self.rng, num_projects, num_voters, utility_bound, vote_length_bound);

        Ok(MultiProblem::new(num_projects, num_voters, budget, costs, utilities, None, None)
            .expect("a generator-built instance always satisfies its own shape invariants"))
    }
}
