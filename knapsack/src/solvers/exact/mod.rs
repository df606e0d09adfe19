pub mod branch_and_bound;
pub mod brute_force;
pub mod dynamic_programming;
pub mod ilp;
pub mod memoization;

pub use branch_and_bound::{branch_and_bound, multi_branch_and_bound};
pub use brute_force::{brute_force, multi_brute_force};
pub use dynamic_programming::{dynamic_programming, dynamic_programming_min_cost, multi_dynamic_programming};
pub use ilp::{ilp, multi_ilp};
pub use memoization::{memoization, multi_memoization};
