use std::path::Path;

use bt_inspect::{load_tree, read_snapshot, write_snapshot, SnapshotFormat};
use bt_model::{NodeType, TreeSnapshot, UidGenerator};

const YAML: &str = r#"
nodes:
  - uid: 1000
    registration_name: Root
    instance_name: root
    type: Root
    children: [1]
  - uid: 1001
    registration_name: Fallback
    instance_name: choose
    type: Control
    children: [2, 3]
  - registration_name: IsDoorOpen
    instance_name: door_open
    type: Condition
  - registration_name: OpenDoor
    instance_name: open_door
    type: Action
    status: Running
    parameters:
      - [force, "true"]
"#;

#[test]
fn format_is_picked_by_extension() {
    assert_eq!(
        SnapshotFormat::from_path(Path::new("a.json")).unwrap(),
        SnapshotFormat::Json
    );
    assert_eq!(
        SnapshotFormat::from_path(Path::new("a.yml")).unwrap(),
        SnapshotFormat::Yaml
    );
    assert!(SnapshotFormat::from_path(Path::new("a.xml")).is_err());
}

#[test]
fn yaml_snapshot_loads_and_converts_to_json() {
    let dir = tempfile::tempdir().unwrap();
    let yaml = dir.path().join("tree.yaml");
    std::fs::write(&yaml, YAML).unwrap();

    let uids = UidGenerator::starting_at(5000);
    let tree = load_tree(&yaml, &uids).unwrap();
    assert_eq!(tree.nodes_count(), 4);
    assert_eq!(tree.root_node().unwrap().node_type, NodeType::Root);
    assert_eq!(tree.find_node("open_door").unwrap().param("force"), Some("true"));
    assert_eq!(tree.uid_to_index(bt_model::Uid::new(5000)), Some(2));

    let json = dir.path().join("tree.json");
    write_snapshot(&json, &TreeSnapshot::from_tree(&tree)).unwrap();
    let reloaded = load_tree(&json, &UidGenerator::default()).unwrap();
    assert_eq!(reloaded, tree);
    assert_eq!(read_snapshot(&json).unwrap().nodes[2].uid, Some(bt_model::Uid::new(5000)));
}

#[test]
fn unreadable_snapshot_reports_path() {
    let err = read_snapshot(Path::new("/definitely/not/here.json")).unwrap_err();
    assert!(err.to_string().contains("/definitely/not/here.json"));
}
