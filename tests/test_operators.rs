use genalg_bits::{
    breeding::{crossover, inversion, CrossoverMethod, MutationMethod},
    chromosome::Chromosome,
    error::GeneticError,
    individual::Individual,
    population::Population,
    rng::RandomNumberGenerator,
    selection::SelectionMethod,
};

const CROSSOVERS: [CrossoverMethod; 4] = [
    CrossoverMethod::SinglePoint,
    CrossoverMethod::TwoPoint,
    CrossoverMethod::Uniform,
    CrossoverMethod::Granular,
];

#[test]
fn test_decode_within_bounds_for_random_chromosomes() {
    let mut rng = RandomNumberGenerator::from_seed(100);

    for num_variables in 1..=4 {
        for _ in 0..25 {
            let individual = Individual::new(Chromosome::random(num_variables * 9, &mut rng));
            let decoded = individual.decode(num_variables, -3.5, 12.25).unwrap();

            assert_eq!(decoded.len(), num_variables);
            assert!(decoded.iter().all(|x| (-3.5..=12.25).contains(x)));
        }
    }
}

#[test]
fn test_decode_all_zero_and_all_one() {
    for num_variables in 1..=3 {
        let length = num_variables * 7;
        let zeros = Individual::new(Chromosome::from_genes(vec![false; length]));
        let ones = Individual::new(Chromosome::from_genes(vec![true; length]));

        assert_eq!(
            zeros.decode(num_variables, -65.536, 65.536).unwrap(),
            vec![-65.536; num_variables]
        );
        assert_eq!(
            ones.decode(num_variables, -65.536, 65.536).unwrap(),
            vec![65.536; num_variables]
        );
    }
}

#[test]
fn test_crossover_children_only_carry_parent_genes() {
    let mut rng = RandomNumberGenerator::from_seed(101);

    for method in CROSSOVERS {
        for _ in 0..40 {
            let first = Chromosome::random(23, &mut rng);
            let second = Chromosome::random(23, &mut rng);
            let (a, b) = method.crossover(&first, &second, &mut rng).unwrap();

            assert_eq!(a.len(), 23);
            assert_eq!(b.len(), 23);
            for i in 0..23 {
                let parents = [first.genes()[i], second.genes()[i]];
                assert!(parents.contains(&a.genes()[i]), "{} introduced a gene", method);
                assert!(parents.contains(&b.genes()[i]), "{} introduced a gene", method);
                // Together the children hold both parental genes at each position
                assert_eq!(
                    a.genes()[i] as u8 + b.genes()[i] as u8,
                    first.genes()[i] as u8 + second.genes()[i] as u8
                );
            }
        }
    }
}

#[test]
fn test_granular_with_custom_block_size() {
    let mut rng = RandomNumberGenerator::from_seed(102);
    let zeros = Chromosome::from_genes(vec![false; 10]);
    let ones = Chromosome::from_genes(vec![true; 10]);

    let (a, _) = crossover::granular(&zeros, &ones, 3, &mut rng).unwrap();
    for block in a.genes().chunks(3) {
        assert!(block.iter().all(|&g| g == block[0]));
    }
}

#[test]
fn test_mutations_preserve_length() {
    let mut rng = RandomNumberGenerator::from_seed(103);

    for method in [
        MutationMethod::SinglePoint,
        MutationMethod::TwoPoint,
        MutationMethod::Boundary,
    ] {
        let mut chromosome = Chromosome::random(16, &mut rng);
        let before = chromosome.clone();
        method.mutate(&mut chromosome, &mut rng).unwrap();

        assert_eq!(chromosome.len(), 16);
        assert_ne!(chromosome, before);
    }
}

#[test]
fn test_inversion_minimum_length() {
    let mut rng = RandomNumberGenerator::from_seed(104);
    let mut three = Chromosome::from_number(0b101, 3).unwrap();

    // The only cut pair is (1, 2), which reverses a single gene
    assert!(inversion(&mut three, &mut rng));
    assert_eq!(three.to_string(), "101");
}

fn evaluated_population(fitness: &[f64]) -> Population {
    // Chromosome i decodes to the value i, and fitness is looked up from it
    let individuals = (0..fitness.len())
        .map(|i| Individual::new(Chromosome::from_number(i as u64, 8).unwrap()))
        .collect();
    let mut population = Population::from_individuals(individuals, 1, 0.0, 255.0);
    let lookup = |x: &[f64]| fitness[x[0].round() as usize];
    population.evaluate_fitness(&lookup).unwrap();
    population
}

#[test]
fn test_best_selection_full_size_sorts() {
    let fitness = [4.0, -1.0, 7.5, 0.0, 7.5, 2.25, -3.0];
    let mut rng = RandomNumberGenerator::from_seed(105);

    for maximize in [false, true] {
        let mut population = evaluated_population(&fitness);
        population
            .selection(SelectionMethod::Best, Some(fitness.len()), 3, maximize, &mut rng)
            .unwrap();

        let scores: Vec<f64> = population
            .individuals()
            .iter()
            .map(|i| i.fitness().unwrap())
            .collect();
        assert_eq!(scores.len(), fitness.len());
        if maximize {
            assert!(scores.windows(2).all(|w| w[0] >= w[1]));
        } else {
            assert!(scores.windows(2).all(|w| w[0] <= w[1]));
        }
    }
}

#[test]
fn test_random_selections_respect_count() {
    let fitness = [4.0, 1.0, 7.5, 0.5, 3.0, 2.25, 6.0, 5.0];
    let mut rng = RandomNumberGenerator::from_seed(106);

    for method in [SelectionMethod::Roulette, SelectionMethod::Tournament] {
        for count in 1..=fitness.len() {
            let mut population = evaluated_population(&fitness);
            population
                .selection(method, Some(count), 3, false, &mut rng)
                .unwrap();
            assert_eq!(population.len(), count);
        }

        let mut population = evaluated_population(&fitness);
        let result = population.selection(method, Some(fitness.len() + 1), 3, false, &mut rng);
        assert!(matches!(result, Err(GeneticError::Configuration(_))));
    }
}

#[test]
fn test_selection_returns_population_members() {
    let fitness = [4.0, 1.0, 7.5, 0.5, 3.0, 2.25];
    let mut rng = RandomNumberGenerator::from_seed(107);
    let original = evaluated_population(&fitness);

    for method in [
        SelectionMethod::Best,
        SelectionMethod::Roulette,
        SelectionMethod::Tournament,
    ] {
        let mut population = original.clone();
        population.selection(method, Some(4), 2, true, &mut rng).unwrap();

        for survivor in population.individuals() {
            assert!(original.individuals().contains(survivor));
        }
        let mut seen: Vec<String> = population
            .individuals()
            .iter()
            .map(|i| i.chromosome().to_string())
            .collect();
        seen.sort();
        seen.dedup();
        assert_eq!(seen.len(), 4);
    }
}
