/// Immutable outcome of a `solve` call.
///
/// `Cost` is `i64` for [`crate::SingleProblem`] and `Vec<i64>` for
/// [`crate::MultiProblem`] — the same shape the registry's `(budget(s),
/// cost(s), values)` convention uses throughout.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SolveResult<Id, Cost> {
    /// External ids of the selected projects, in ascending index order.
    pub allocation: Vec<Id>,
    pub value: i64,
    pub cost: Cost,
    /// Wall-clock runtime of the `solve` call, in milliseconds.
    pub runtime_ms: f64,
    /// Human-readable algorithm name, e.g. `"branch_and_bound"`.
    pub algorithm: &'static str,
    pub is_approximate: bool,
}

impl<Id, Cost: Default> SolveResult<Id, Cost> {
    /// The sentinel result for a zero-project instance, or for a solver that
    /// was cancelled on timeout: empty allocation, zero value, the runtime
    /// the caller observed.
    pub fn empty(algorithm: &'static str, is_approximate: bool, runtime_ms: f64) -> Self {
        Self {
            allocation: Vec::new(),
            value: 0,
            cost: Cost::default(),
            runtime_ms,
            algorithm,
            is_approximate,
        }
    }
}
