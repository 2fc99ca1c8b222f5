use tracing::{debug, info, info_span};

use super::{
    fitness::{BenchmarkFunction, FitnessFunction},
    options::EvolutionOptions,
    progress::ProgressRow,
};
use crate::{
    error::{GeneticError, OptionExt, Result},
    population::Population,
    rng::RandomNumberGenerator,
    selection::is_better,
};

/// Where a launcher is in its run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LauncherState {
    /// Constructed, no epoch executed yet.
    Idle,
    /// Between epochs; `next_epoch` is the 0-based index of the next one.
    Running { next_epoch: usize },
    /// Every configured epoch has been executed.
    Completed,
}

/// Drives the generational loop over one population.
///
/// Each epoch runs, in order: fitness evaluation, reporting, elite snapshot,
/// selection, crossover, mutation, inversion and elite integration. The
/// launcher can run all epochs at once with [`EvolutionLauncher::run`] or be
/// stepped one epoch at a time with [`EvolutionLauncher::iteration`], for
/// example from a UI timer.
///
/// # Example
///
/// ```rust
/// use genalg_bits::evolution::{EvolutionLauncher, EvolutionOptions};
/// use genalg_bits::evolution::fitness::BenchmarkFunction;
/// use genalg_bits::rng::RandomNumberGenerator;
///
/// let options = EvolutionOptions::builder()
///     .fitness_function(BenchmarkFunction::Hypersphere)
///     .bounds(-10.0, 10.0)
///     .precision(0.1)
///     .num_epochs(5)
///     .build()
///     .unwrap();
///
/// let mut launcher = EvolutionLauncher::new(options, RandomNumberGenerator::from_seed(1)).unwrap();
/// let progress = launcher.run().unwrap();
///
/// assert_eq!(progress.len(), 5);
/// assert_eq!(progress[4].epoch, 5);
/// ```
#[derive(Debug, Clone)]
pub struct EvolutionLauncher<F>
where
    F: FitnessFunction,
{
    options: EvolutionOptions,
    fitness_function: F,
    population: Population,
    rng: RandomNumberGenerator,
    optimum: f64,
    optimum_variables: Option<Vec<f64>>,
    progress: Vec<ProgressRow>,
    epochs_completed: usize,
    state: LauncherState,
}

impl EvolutionLauncher<BenchmarkFunction> {
    /// Creates a launcher scoring with the benchmark function named in `options`.
    pub fn new(options: EvolutionOptions, rng: RandomNumberGenerator) -> Result<Self> {
        let fitness_function = options.get_fitness_function();
        Self::with_fitness_function(options, fitness_function, rng)
    }
}

impl<F> EvolutionLauncher<F>
where
    F: FitnessFunction,
{
    /// Creates a launcher scoring with a caller-supplied fitness function.
    ///
    /// The options are validated and the initial population is seeded here.
    ///
    /// # Arguments
    ///
    /// * `options` - The run configuration.
    /// * `fitness_function` - Scores a decoded variable vector; any
    ///   `Fn(&[f64]) -> f64` closure qualifies.
    /// * `rng` - The single random source for the whole run.
    ///
    /// # Returns
    ///
    /// An idle launcher holding a freshly seeded population.
    ///
    /// # Errors
    ///
    /// Returns `GeneticError::Configuration` for invalid options.
    pub fn with_fitness_function(
        options: EvolutionOptions,
        fitness_function: F,
        mut rng: RandomNumberGenerator,
    ) -> Result<Self> {
        options.validate()?;

        let population = Population::new(
            options.get_population_size(),
            options.get_chromosome_length(),
            options.get_num_variables(),
            options.get_lower_bound(),
            options.get_upper_bound(),
            &mut rng,
        );
        let optimum = if options.is_maximization() {
            f64::NEG_INFINITY
        } else {
            f64::INFINITY
        };

        debug!(
            chromosome_length = options.get_chromosome_length(),
            population = options.get_population_size(),
            "launcher initialised"
        );

        Ok(Self {
            options,
            fitness_function,
            population,
            rng,
            optimum,
            optimum_variables: None,
            progress: Vec::new(),
            epochs_completed: 0,
            state: LauncherState::Idle,
        })
    }

    /// Executes exactly one epoch and appends its progress row.
    ///
    /// `epoch` is the 0-based index of the epoch and must be the next one due,
    /// as reported by [`EvolutionLauncher::state`]; the row records it 1-based.
    ///
    /// # Errors
    ///
    /// Returns `Evolution` once the configured number of epochs has run or
    /// when `epoch` is not the next epoch, and propagates any fitness or
    /// operator failure, which leaves the run unusable.
    pub fn iteration(&mut self, epoch: usize) -> Result<&ProgressRow> {
        if self.epochs_completed >= self.options.get_num_epochs() {
            self.state = LauncherState::Completed;
            return Err(GeneticError::Evolution(format!(
                "All {} epochs have already run",
                self.options.get_num_epochs()
            )));
        }
        if epoch != self.epochs_completed {
            return Err(GeneticError::Evolution(format!(
                "Expected epoch {}, got {}",
                self.epochs_completed, epoch
            )));
        }

        let _span = info_span!("epoch", epoch = epoch + 1).entered();
        let maximize = self.options.is_maximization();
        let elite_count = self.options.get_elite_count();

        self.population.evaluate_fitness(&self.fitness_function)?;
        self.report(epoch)?;

        if elite_count > 0 {
            self.population.elitism(elite_count, maximize)?;
        }

        self.population.selection(
            self.options.get_selection_method(),
            self.options.get_select_count(),
            self.options.get_tournament_size(),
            maximize,
            &mut self.rng,
        )?;
        self.population.crossover(
            self.options.get_crossover_method(),
            self.options.get_crossover_probability(),
            &mut self.rng,
        )?;
        self.population.mutate(
            self.options.get_mutation_method(),
            self.options.get_mutation_probability(),
            &mut self.rng,
        )?;
        self.population
            .apply_inversion(self.options.get_inversion_probability(), &mut self.rng);

        if elite_count > 0 {
            self.population.integrate_elites();
        }

        self.epochs_completed += 1;
        self.state = if self.epochs_completed >= self.options.get_num_epochs() {
            LauncherState::Completed
        } else {
            LauncherState::Running {
                next_epoch: self.epochs_completed,
            }
        };

        self.progress
            .last()
            .ok_or_else_genetic(|| GeneticError::Evolution("No progress recorded".to_string()))
    }

    /// Runs every remaining epoch and returns the whole progress history.
    pub fn run(&mut self) -> Result<&[ProgressRow]> {
        while self.epochs_completed < self.options.get_num_epochs() {
            self.iteration(self.epochs_completed)?;
        }
        self.state = LauncherState::Completed;

        info!(
            optimum = self.optimum,
            variables = ?self.optimum_variables,
            epochs = self.epochs_completed,
            "run finished"
        );
        Ok(&self.progress)
    }

    /// Records the current best individual and updates the all-time optimum
    /// when it strictly improves on it.
    fn report(&mut self, epoch: usize) -> Result<()> {
        let num_variables = self.options.get_num_variables();
        let lower = self.options.get_lower_bound();
        let upper = self.options.get_upper_bound();
        let maximize = self.options.is_maximization();

        let best = self.population.best(maximize)?;
        let current_best_fitness = best
            .fitness()
            .ok_or_else_genetic(|| GeneticError::Evolution("Best individual is unevaluated".to_string()))?;
        let current_best_variables = best.decode(num_variables, lower, upper)?;

        if is_better(current_best_fitness, self.optimum, maximize) {
            self.optimum = current_best_fitness;
            self.optimum_variables = Some(current_best_variables.clone());
        }

        let best_variables = self
            .optimum_variables
            .clone()
            .ok_or_else_genetic(|| GeneticError::Evolution("No optimum recorded".to_string()))?;

        info!(
            population = self.population.len(),
            best_fitness = current_best_fitness,
            "epoch evaluated"
        );

        self.progress.push(ProgressRow {
            epoch: epoch + 1,
            population_size: self.population.len(),
            current_best_fitness,
            current_best_variables,
            best_fitness: self.optimum,
            best_variables,
        });
        Ok(())
    }

    /// Best fitness seen so far; `+inf` (minimizing) or `-inf` (maximizing)
    /// before the first epoch.
    pub fn optimum(&self) -> f64 {
        self.optimum
    }

    /// Decoded variables of the best individual seen so far.
    pub fn optimum_variables(&self) -> Option<&[f64]> {
        self.optimum_variables.as_deref()
    }

    pub fn progress(&self) -> &[ProgressRow] {
        &self.progress
    }

    pub fn population(&self) -> &Population {
        &self.population
    }

    pub fn options(&self) -> &EvolutionOptions {
        &self.options
    }

    pub fn state(&self) -> LauncherState {
        self.state
    }

    pub fn chromosome_length(&self) -> usize {
        self.options.get_chromosome_length()
    }
}
