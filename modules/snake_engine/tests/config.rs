use snake_engine::GameConfig;

#[test]
fn partial_config_falls_back_to_defaults() {
    let config: GameConfig = serde_json::from_str(r#"{ "grid_width": 30, "seed": 99 }"#).unwrap();

    assert_eq!(config.grid_width, 30);
    assert_eq!(config.seed, 99);
    assert_eq!(config.grid_height, GameConfig::default().grid_height);
    assert_eq!(config.initial_length, GameConfig::default().initial_length);
    assert!(config.validate().is_ok());
}

#[test]
fn unknown_fields_are_tolerated() {
    let config: GameConfig = serde_json::from_str(r#"{ "tick_ms": 120 }"#).unwrap();
    assert_eq!(config, GameConfig::default());
}
