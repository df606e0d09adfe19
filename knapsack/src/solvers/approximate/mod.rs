pub mod fptas;
pub mod genetic_algorithm;
pub mod greedy;
pub mod simulated_annealing;

pub use fptas::fptas;
pub use genetic_algorithm::{genetic_algorithm, multi_genetic_algorithm};
pub use greedy::{greedy, multi_greedy, multi_ratio_greedy, ratio_greedy};
pub use simulated_annealing::{multi_simulated_annealing, simulated_annealing};
