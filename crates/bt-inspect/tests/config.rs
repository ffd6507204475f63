use bt_inspect::InspectConfig;
use bt_model::NodeType;

#[test]
fn missing_config_falls_back_to_defaults() {
    let dir = tempfile::tempdir().unwrap();
    let config = InspectConfig::load_from_project(dir.path()).unwrap();

    assert_eq!(config.indent, 4);
    assert_eq!(config.uid_start, 1000);
    assert!(!config.strict);
    assert!(config.models.is_empty());
}

#[test]
fn project_config_sets_fields_and_adds_models() {
    let dir = tempfile::tempdir().unwrap();
    std::fs::create_dir_all(dir.path().join(".bt")).unwrap();
    std::fs::write(
        dir.path().join(".bt/config.yaml"),
        r#"
version: "1"
indent: 2
strict: true
models:
  MoveBase:
    node_type: Action
    params:
      - label: goal
        default_value: "0;0;0"
  Sequence:
    node_type: Control
    params:
      - label: note
"#,
    )
    .unwrap();

    let config = InspectConfig::load_from_project(dir.path()).unwrap();
    assert_eq!(config.version.as_deref(), Some("1"));
    assert_eq!(config.indent, 2);
    assert_eq!(config.uid_start, 1000);
    assert!(config.strict);

    let registry = config.registry();
    let node = registry.instantiate("MoveBase", "go").unwrap();
    assert_eq!(node.node_type, NodeType::Action);
    assert_eq!(node.param("goal"), Some("0;0;0"));
    // Project models win over builtins of the same name.
    assert_eq!(registry.get("Sequence").unwrap().params.len(), 1);
    assert!(registry.contains("Inverter"));
}

#[test]
fn malformed_config_is_an_error_with_context() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("config.yaml");
    std::fs::write(&path, "indent: [not a number]\n").unwrap();

    let err = InspectConfig::load(&path).unwrap_err();
    assert!(err.to_string().contains("Failed to parse config"));
}
