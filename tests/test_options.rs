use genalg_bits::{
    breeding::{CrossoverMethod, MutationMethod},
    error::GeneticError,
    evolution::{BenchmarkFunction, EvolutionLauncher, EvolutionOptions},
    rng::RandomNumberGenerator,
    selection::SelectionMethod,
};

#[test]
fn test_identifiers_parse_from_names() {
    let options = EvolutionOptions::builder()
        .fitness_function("rosenbrock".parse::<BenchmarkFunction>().unwrap())
        .selection_method("roulette".parse::<SelectionMethod>().unwrap())
        .crossover_method("granular".parse::<CrossoverMethod>().unwrap())
        .mutation_method("boundary".parse::<MutationMethod>().unwrap())
        .build()
        .unwrap();

    assert_eq!(options.get_fitness_function(), BenchmarkFunction::Rosenbrock);
    assert_eq!(options.get_selection_method(), SelectionMethod::Roulette);
    assert_eq!(options.get_crossover_method(), CrossoverMethod::Granular);
    assert_eq!(options.get_mutation_method(), MutationMethod::Boundary);
}

#[test]
fn test_unknown_identifiers_are_configuration_errors() {
    for result in [
        "sphere".parse::<BenchmarkFunction>().map(|_| ()),
        "rank".parse::<SelectionMethod>().map(|_| ()),
        "blend".parse::<CrossoverMethod>().map(|_| ()),
        "gaussian".parse::<MutationMethod>().map(|_| ()),
    ] {
        assert!(matches!(result, Err(GeneticError::Configuration(_))));
    }
}

#[test]
fn test_chromosome_length_from_precision() {
    let options = EvolutionOptions::builder()
        .bounds(-10.0, 10.0)
        .precision(0.1)
        .num_variables(3)
        .build()
        .unwrap();
    assert_eq!(options.get_segment_length(), 8);
    assert_eq!(options.get_chromosome_length(), 24);

    let launcher = EvolutionLauncher::new(options, RandomNumberGenerator::from_seed(0)).unwrap();
    assert_eq!(launcher.chromosome_length(), 24);
    assert!(launcher
        .population()
        .individuals()
        .iter()
        .all(|i| i.chromosome().len() == 24));
}

#[cfg(feature = "serde")]
mod serde_options {
    use super::*;

    #[test]
    fn test_options_round_trip_through_json() {
        let options = EvolutionOptions::builder()
            .fitness_function(BenchmarkFunction::Hypersphere)
            .bounds(-8.0, 8.0)
            .precision(0.5)
            .crossover_probability(0.75)
            .mutation_probability(0.25)
            .inversion_probability(0.125)
            .selection_method(SelectionMethod::Best)
            .select_count(None)
            .build()
            .unwrap();

        let json = serde_json::to_string(&options).unwrap();
        assert!(json.contains("\"hypersphere\""));
        assert!(json.contains("\"single_point\""));

        let restored: EvolutionOptions = serde_json::from_str(&json).unwrap();
        assert_eq!(restored, options);
    }

    #[test]
    fn test_unknown_method_fails_to_load() {
        let mut value = serde_json::to_value(EvolutionOptions::default()).unwrap();
        value["selection_method"] = serde_json::Value::String("rank".to_string());

        assert!(serde_json::from_value::<EvolutionOptions>(value).is_err());
    }

    #[test]
    fn test_loaded_options_are_validated_by_launcher() {
        let mut value = serde_json::to_value(EvolutionOptions::default()).unwrap();
        value["select_count"] = serde_json::json!(500);

        let options: EvolutionOptions = serde_json::from_value(value).unwrap();
        let result = EvolutionLauncher::new(options, RandomNumberGenerator::from_seed(0));
        assert!(matches!(result, Err(GeneticError::Configuration(_))));
    }
}
