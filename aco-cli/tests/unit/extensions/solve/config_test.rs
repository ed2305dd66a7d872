use super::*;
use crate::helpers::*;

fn read_config_from_str(content: &str) -> Config {
    read_config(BufReader::new(content.as_bytes())).unwrap()
}

#[test]
fn can_read_full_config() {
    let config = read_config(BufReader::new(get_test_resource(FULL_CONFIG_PATH).unwrap())).unwrap();

    let colony = config.colony.expect("no colony config");
    assert_eq!(colony.alpha, Some(1.));
    assert_eq!(colony.beta, Some(3.));
    assert_eq!(colony.rho, Some(0.3));
    assert_eq!(colony.init_pheromone, Some(0.5));
    assert_eq!(colony.pheromone_q, Some(2.));
    assert_eq!(colony.agents, Some(8));
    assert!(matches!(colony.variant, Some(VariantType::MaxMin { p_best: Some(p_best) }) if p_best == 0.1));

    let termination = config.termination.expect("no termination config");
    assert_eq!(termination.max_iterations, Some(50));
    assert_eq!(termination.max_time, Some(300));
    let convergence = termination.convergence.expect("no convergence config");
    assert_eq!(convergence.is_enabled, Some(true));
    assert_eq!(convergence.iterations, Some(10));

    let environment = config.environment.expect("no environment config");
    assert_eq!(environment.seed, Some(42));
    assert_eq!(environment.threads, Some(2));
    assert_eq!(environment.log_best, Some(5));
}

#[test]
fn can_read_empty_config() {
    let config = read_config_from_str("{}");

    assert!(config.colony.is_none());
    assert!(config.termination.is_none());
    assert!(config.environment.is_none());
}

#[test]
fn can_reject_unknown_variant() {
    let result = read_config(BufReader::new(r#"{ "colony": { "variant": { "type": "rank" } } }"#.as_bytes()));

    assert!(result.unwrap_err().starts_with("cannot deserialize config"));
}

#[test]
fn can_create_builder_from_full_config() {
    let config = read_config(BufReader::new(get_test_resource(FULL_CONFIG_PATH).unwrap())).unwrap();

    let colony_config = create_builder_from_config(&config, 100).build().unwrap();

    assert_eq!(colony_config.beta, 3.);
    assert_eq!(colony_config.rho, 0.3);
    assert_eq!(colony_config.init_pheromone, 0.5);
    assert_eq!(colony_config.pheromone_q, 2.);
    assert_eq!(colony_config.agent_count, 8);
    assert_eq!(colony_config.variant, Variant::MaxMin { p_best: 0.1 });
    assert_eq!(colony_config.max_iterations, 50);
    assert_eq!(colony_config.convergence_threshold(), Some(10));
    assert!(matches!(colony_config.telemetry, TelemetryMode::OnlyLogging { log_best: 5 }));
}

#[test]
fn can_use_defaults_for_empty_config() {
    let colony_config = create_builder_from_config(&Config::default(), 7).build().unwrap();

    assert_eq!(colony_config.agent_count, 7);
    assert_eq!(colony_config.variant, Variant::Plain);
    assert_eq!(colony_config.max_iterations, 100);
    assert_eq!(colony_config.convergence_threshold(), None);
    assert!(matches!(colony_config.telemetry, TelemetryMode::None));
}

#[test]
fn can_use_default_p_best_and_enabled_convergence() {
    let config = read_config_from_str(
        r#"{ "colony": { "variant": { "type": "max-min" } }, "termination": { "convergence": { "iterations": 3 } } }"#,
    );

    let colony_config = create_builder_from_config(&config, 5).build().unwrap();

    assert_eq!(colony_config.variant, Variant::MaxMin { p_best: DEFAULT_P_BEST });
    assert_eq!(colony_config.convergence_threshold(), Some(3));
}

#[test]
fn can_detect_convergence_without_iterations() {
    let config = read_config_from_str(r#"{ "termination": { "convergence": { "isEnabled": true } } }"#);

    let result = create_builder_from_config(&config, 5).build();

    assert!(matches!(result, Err(ColonyError::ConvergenceMisconfiguration)));
}

#[test]
fn can_create_environment_from_config() {
    let config = read_config_from_str(r#"{ "environment": { "seed": 7, "threads": 1 } }"#);

    let environment = create_environment_from_config(&config);

    assert_eq!(environment.seed, Some(7));
    assert!(environment.thread_pool.is_some());
    assert!(environment.quota.is_none());
}

parameterized_test! {can_parse_variant, (name, expected), {
    can_parse_variant_impl(name, expected);
}}

can_parse_variant! {
    case01_plain: ("plain", Some(Variant::Plain)),
    case02_elitist: ("elitist", Some(Variant::Elitist)),
    case03_max_min: ("max-min", Some(Variant::MaxMin { p_best: DEFAULT_P_BEST })),
    case04_unknown: ("rank", None),
}

fn can_parse_variant_impl(name: &str, expected: Option<Variant>) {
    let result = parse_variant(name).map(|variant| create_variant(&variant)).ok();

    assert_eq!(result, expected);
}
