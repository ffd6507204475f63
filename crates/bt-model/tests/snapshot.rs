#![cfg(feature = "serde")]

use bt_model::{
    AbsBehaviorTree, AbstractTreeNode, NodeStatus, NodeType, Point, TreeSnapshot, Uid,
    UidGenerator,
};

fn sample() -> AbsBehaviorTree {
    let mut tree = AbsBehaviorTree::new();
    tree.push_back(
        Uid::new(1000),
        AbstractTreeNode::new("Fallback", "fb", NodeType::Control).with_children([1, 2]),
    )
    .unwrap();
    tree.push_back(
        Uid::new(1001),
        AbstractTreeNode::new("Repeat", "again", NodeType::Decorator)
            .with_param("num_cycles", "3")
            .with_children([2]),
    )
    .unwrap();
    let mut leaf = AbstractTreeNode::new("Say", "hello", NodeType::Action)
        .with_param("text", "hi")
        .with_param("text", "there");
    leaf.status = NodeStatus::Running;
    leaf.pos = Point::new(1.5, -2.0);
    tree.push_back(Uid::new(1002), leaf).unwrap();
    tree.update_root_index();
    tree
}

#[test]
fn snapshot_json_roundtrip_rebuilds_an_equal_tree() {
    let tree = sample();
    let json = serde_json::to_string(&TreeSnapshot::from_tree(&tree)).expect("serialize");
    let snapshot: TreeSnapshot = serde_json::from_str(&json).expect("deserialize");
    let rebuilt = snapshot.into_tree(&UidGenerator::default()).expect("rebuild");

    assert_eq!(rebuilt, tree);
    assert_eq!(rebuilt.root_index(), Some(0));
    let leaf = rebuilt.node_at_uid(Uid::new(1002)).unwrap();
    assert_eq!(leaf.status, NodeStatus::Running);
    assert_eq!(leaf.pos, Point::new(1.5, -2.0));
    assert_eq!(leaf.instance_name, "hello");
}

#[test]
fn missing_uids_are_minted_on_rebuild() {
    let json = r#"{
        "nodes": [
            { "instance_name": "root", "type": "Root", "children": [1] },
            { "uid": 7, "instance_name": "leaf", "type": "Action" }
        ]
    }"#;
    let snapshot: TreeSnapshot = serde_json::from_str(json).unwrap();
    let uids = UidGenerator::starting_at(500);
    let tree = snapshot.into_tree(&uids).unwrap();

    assert_eq!(tree.node_at_uid(Uid::new(500)).unwrap().instance_name, "root");
    assert_eq!(tree.node_at_uid(Uid::new(7)).unwrap().instance_name, "leaf");
    assert_eq!(tree.root_node().unwrap().node_type, NodeType::Root);
    assert_eq!(tree.node_at(1).unwrap().status, NodeStatus::Idle);
}
