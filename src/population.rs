//! # Population
//!
//! An ordered collection of [`Individual`]s plus an elite snapshot.
//!
//! The collection size floats within an epoch: selection shrinks it to the
//! selected count, crossover appends offspring while keeping the parents, and
//! only the next selection brings it back to the configured size.

use tracing::{debug, warn};

use crate::{
    breeding::{inversion, CrossoverMethod, MutationMethod},
    chromosome::Chromosome,
    error::{GeneticError, OptionExt, Result},
    evolution::fitness::FitnessFunction,
    individual::Individual,
    rng::RandomNumberGenerator,
    selection::{best_index, ElitistSelection, SelectionMethod},
};

/// Smallest number of individuals kept when no selection count is given.
const MIN_DEFAULT_SELECTION: usize = 2;

#[derive(Debug, Clone)]
pub struct Population {
    individuals: Vec<Individual>,
    elites: Vec<Individual>,
    num_variables: usize,
    lower_bound: f64,
    upper_bound: f64,
}

impl Population {
    /// Seeds `size` individuals with random chromosomes of `chromosome_length` genes.
    pub fn new(
        size: usize,
        chromosome_length: usize,
        num_variables: usize,
        lower_bound: f64,
        upper_bound: f64,
        rng: &mut RandomNumberGenerator,
    ) -> Self {
        let individuals = (0..size)
            .map(|_| Individual::new(Chromosome::random(chromosome_length, rng)))
            .collect();

        Self::from_individuals(individuals, num_variables, lower_bound, upper_bound)
    }

    pub fn from_individuals(
        individuals: Vec<Individual>,
        num_variables: usize,
        lower_bound: f64,
        upper_bound: f64,
    ) -> Self {
        Self {
            individuals,
            elites: Vec::new(),
            num_variables,
            lower_bound,
            upper_bound,
        }
    }

    pub fn individuals(&self) -> &[Individual] {
        &self.individuals
    }

    pub fn elites(&self) -> &[Individual] {
        &self.elites
    }

    pub fn len(&self) -> usize {
        self.individuals.len()
    }

    pub fn is_empty(&self) -> bool {
        self.individuals.is_empty()
    }

    /// Decodes every individual with this population's bounds and caches the
    /// score `fitness_function` gives it.
    ///
    /// # Errors
    ///
    /// The first failing evaluation aborts the pass and is returned.
    pub fn evaluate_fitness<F>(&mut self, fitness_function: &F) -> Result<()>
    where
        F: FitnessFunction + ?Sized,
    {
        for individual in &mut self.individuals {
            individual.evaluate(
                fitness_function,
                self.num_variables,
                self.lower_bound,
                self.upper_bound,
            )?;
        }
        Ok(())
    }

    /// Cached fitness of every individual, in collection order.
    ///
    /// # Errors
    ///
    /// Returns `Evolution` if any individual has not been evaluated.
    pub fn fitness_values(&self) -> Result<Vec<f64>> {
        self.individuals
            .iter()
            .enumerate()
            .map(|(idx, individual)| {
                individual.fitness().ok_or_else_genetic(|| {
                    GeneticError::Evolution(format!("Individual {} has not been evaluated", idx))
                })
            })
            .collect()
    }

    /// The best evaluated individual; the first one wins ties.
    pub fn best(&self, maximize: bool) -> Result<&Individual> {
        if self.individuals.is_empty() {
            return Err(GeneticError::EmptyPopulation);
        }
        let fitness = self.fitness_values()?;
        let idx = best_index(&fitness, maximize).ok_or_else_genetic(|| GeneticError::EmptyPopulation)?;
        Ok(&self.individuals[idx])
    }

    /// Replaces the collection with the `count` individuals chosen by `method`.
    ///
    /// Without a count, half of the current collection is kept, but never
    /// fewer than two individuals (or all of them when fewer exist).
    ///
    /// # Arguments
    ///
    /// * `method` - The selection operator to apply.
    /// * `count` - The number of individuals to keep.
    /// * `tournament_size` - Subset size for tournament selection; ignored by
    ///   the other methods.
    /// * `maximize` - Whether higher fitness is better.
    /// * `rng` - The run's random source.
    ///
    /// # Errors
    ///
    /// Returns `Configuration` when `count` exceeds the collection size.
    pub fn selection(
        &mut self,
        method: SelectionMethod,
        count: Option<usize>,
        tournament_size: usize,
        maximize: bool,
        rng: &mut RandomNumberGenerator,
    ) -> Result<()> {
        let count = count.unwrap_or_else(|| {
            (self.individuals.len() / 2)
                .max(MIN_DEFAULT_SELECTION)
                .min(self.individuals.len())
        });
        let fitness = self.fitness_values()?;
        let chosen = method.select(&fitness, count, tournament_size, maximize, rng)?;

        let mut slots: Vec<Option<Individual>> =
            std::mem::take(&mut self.individuals).into_iter().map(Some).collect();
        self.individuals = chosen
            .into_iter()
            .filter_map(|idx| slots[idx].take())
            .collect();

        debug!(
            method = %method,
            before = slots.len(),
            after = self.individuals.len(),
            "selection applied"
        );
        Ok(())
    }

    /// Runs `floor(len / 2)` crossover attempts. Each attempt succeeds with
    /// `probability`, draws two distinct parents and appends both children;
    /// parents stay in the collection.
    ///
    /// Collections with fewer than two individuals are left unchanged.
    ///
    /// # Arguments
    ///
    /// * `method` - The crossover operator producing each pair of children.
    /// * `probability` - Chance that a single attempt breeds.
    /// * `rng` - The run's random source.
    ///
    /// # Returns
    ///
    /// `Ok(())` once the offspring are appended, or the operator's error for
    /// chromosomes it cannot split.
    pub fn crossover(
        &mut self,
        method: CrossoverMethod,
        probability: f64,
        rng: &mut RandomNumberGenerator,
    ) -> Result<()> {
        let size = self.individuals.len();
        if size < 2 {
            warn!(size, "not enough individuals to form a crossover pair");
            return Ok(());
        }

        let mut offspring = Vec::new();
        for _ in 0..size / 2 {
            if !rng.chance(probability) {
                continue;
            }
            let parents = rng.sample_indices(size, 2);
            let (first, second) = method.crossover(
                self.individuals[parents[0]].chromosome(),
                self.individuals[parents[1]].chromosome(),
                rng,
            )?;
            offspring.push(Individual::new(first));
            offspring.push(Individual::new(second));
        }

        debug!(method = %method, children = offspring.len(), "crossover applied");
        self.individuals.extend(offspring);
        Ok(())
    }

    /// Mutates each individual in place with `probability`.
    pub fn mutate(
        &mut self,
        method: MutationMethod,
        probability: f64,
        rng: &mut RandomNumberGenerator,
    ) -> Result<()> {
        for individual in &mut self.individuals {
            if rng.chance(probability) {
                method.mutate(individual.chromosome_mut(), rng)?;
            }
        }
        Ok(())
    }

    /// Inverts each individual in place with `probability`.
    pub fn apply_inversion(&mut self, probability: f64, rng: &mut RandomNumberGenerator) {
        for individual in &mut self.individuals {
            if rng.chance(probability) {
                inversion(individual.chromosome_mut(), rng);
            }
        }
    }

    /// Stores deep copies of the `count` best individuals as the elite
    /// snapshot; the live collection is not touched.
    pub fn elitism(&mut self, count: usize, maximize: bool) -> Result<()> {
        let fitness = self.fitness_values()?;
        self.elites = ElitistSelection::new(maximize)
            .rank(&fitness)
            .into_iter()
            .take(count)
            .map(|idx| self.individuals[idx].clone())
            .collect();

        debug!(elites = self.elites.len(), "elite snapshot taken");
        Ok(())
    }

    /// Overwrites the first slots of the collection with the elite snapshot.
    pub fn integrate_elites(&mut self) {
        for (slot, elite) in self.individuals.iter_mut().zip(&self.elites) {
            *slot = elite.clone();
        }
    }
}
