use docchat::presentation::Environment;

#[test]
fn given_known_names_when_parsing_then_maps_to_environment() {
    assert_eq!(Environment::try_from("prod".to_string()), Ok(Environment::Prod));
    assert_eq!(Environment::try_from("Production".to_string()), Ok(Environment::Prod));
    assert_eq!(Environment::try_from(" TEST ".to_string()), Ok(Environment::Test));
    assert_eq!(Environment::try_from("dev".to_string()), Ok(Environment::Local));
}

#[test]
fn given_unknown_name_when_parsing_then_returns_error() {
    let error = Environment::try_from("staging".to_string()).unwrap_err();
    assert!(error.contains("staging"));
}

#[test]
fn given_environment_when_formatting_then_matches_settings_file_suffix() {
    assert_eq!(Environment::Local.to_string(), "Local");
    assert_eq!(Environment::Prod.as_str(), "Prod");
    assert!(Environment::Prod.is_production());
    assert!(!Environment::default().is_production());
}
