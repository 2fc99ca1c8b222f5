pub mod fitness;
pub mod launcher;
pub mod options;
pub mod progress;

pub use fitness::{BenchmarkFunction, FitnessFunction};
pub use launcher::{EvolutionLauncher, LauncherState};
pub use options::{EvolutionOptions, EvolutionOptionsBuilder};
pub use progress::ProgressRow;
