use bt_model::{AbsBehaviorTree, AbstractTreeNode, NodeType, Uid};

fn node(name: &str, node_type: NodeType, children: &[i16]) -> AbstractTreeNode {
    AbstractTreeNode::new(name, name, node_type).with_children(children.iter().copied())
}

fn abc(a_children: &[i16]) -> AbsBehaviorTree {
    let mut tree = AbsBehaviorTree::new();
    tree.push_back(Uid::new(1), node("A", NodeType::Control, a_children)).unwrap();
    tree.push_back(Uid::new(2), node("B", NodeType::Action, &[])).unwrap();
    tree.push_back(Uid::new(3), node("C", NodeType::Action, &[])).unwrap();
    tree
}

#[test]
fn unreferenced_first_node_is_root() {
    let mut tree = abc(&[1, 2]);
    assert_eq!(tree.root_index(), None);
    assert!(tree.root_node().is_none());

    assert_eq!(tree.update_root_index(), Some(0));
    assert_eq!(tree.root_index(), Some(0));
    assert_eq!(tree.root_node().unwrap().instance_name, "A");
    assert_eq!(tree.root_candidates(), vec![0]);
}

#[test]
fn dropping_a_child_reference_makes_the_first_unreferenced_node_win() {
    // A only references C now; both A and B are unreferenced.
    let mut tree = abc(&[2]);
    assert_eq!(tree.root_candidates(), vec![0, 1]);
    assert_eq!(tree.update_root_index(), Some(0));

    // Re-point A at B: C becomes the only other candidate, A still wins.
    tree.node_at_mut(0).unwrap().children_index = vec![1];
    assert_eq!(tree.update_root_index(), Some(0));
    assert_eq!(tree.root_candidates(), vec![0, 2]);
}

#[test]
fn root_moves_when_earlier_nodes_are_children() {
    let mut tree = AbsBehaviorTree::new();
    tree.push_back(Uid::new(1), node("leaf", NodeType::Action, &[])).unwrap();
    tree.push_back(Uid::new(2), node("top", NodeType::Control, &[0])).unwrap();

    assert_eq!(tree.update_root_index(), Some(1));
    assert_eq!(tree.root_node().unwrap().instance_name, "top");
}

#[test]
fn empty_and_cyclic_trees_have_no_root() {
    let mut empty = AbsBehaviorTree::new();
    assert_eq!(empty.update_root_index(), None);
    assert!(empty.root_node().is_none());

    let mut cyclic = AbsBehaviorTree::new();
    cyclic.push_back(Uid::new(1), node("a", NodeType::Control, &[1])).unwrap();
    cyclic.push_back(Uid::new(2), node("b", NodeType::Control, &[0])).unwrap();
    assert_eq!(cyclic.update_root_index(), None);
    assert!(cyclic.root_node().is_none());
}

#[test]
fn appending_invalidates_the_cached_root() {
    let mut tree = abc(&[1, 2]);
    tree.update_root_index();
    assert_eq!(tree.root_index(), Some(0));

    tree.push_back(Uid::new(4), node("D", NodeType::Action, &[])).unwrap();
    assert_eq!(tree.root_index(), None);
    assert_eq!(tree.update_root_index(), Some(0));
}

#[test]
fn out_of_range_child_positions_do_not_affect_candidates() {
    let mut tree = abc(&[1, 2, 40, -3]);
    assert_eq!(tree.update_root_index(), Some(0));
}

#[test]
fn a_node_referencing_itself_is_still_a_root_candidate() {
    let mut tree = AbsBehaviorTree::new();
    tree.push_back(Uid::new(1), node("loop", NodeType::Control, &[0, 1])).unwrap();
    tree.push_back(Uid::new(2), node("leaf", NodeType::Action, &[])).unwrap();

    assert_eq!(tree.root_candidates(), vec![0]);
    assert_eq!(tree.update_root_index(), Some(0));
    assert_eq!(tree.root_node().unwrap().instance_name, "loop");
}

#[test]
fn a_self_reference_does_not_hide_a_node_referenced_elsewhere() {
    let mut tree = AbsBehaviorTree::new();
    tree.push_back(Uid::new(1), node("top", NodeType::Control, &[1])).unwrap();
    tree.push_back(Uid::new(2), node("retry", NodeType::Decorator, &[1])).unwrap();

    assert_eq!(tree.root_candidates(), vec![0]);
    assert_eq!(tree.update_root_index(), Some(0));
}

#[test]
fn a_shared_child_is_not_a_candidate() {
    let mut tree = AbsBehaviorTree::new();
    tree.push_back(Uid::new(1), node("root", NodeType::Control, &[1, 2])).unwrap();
    tree.push_back(Uid::new(2), node("a", NodeType::Decorator, &[3])).unwrap();
    tree.push_back(Uid::new(3), node("b", NodeType::Decorator, &[3])).unwrap();
    tree.push_back(Uid::new(4), node("shared", NodeType::Action, &[])).unwrap();

    assert_eq!(tree.root_candidates(), vec![0]);
    assert_eq!(tree.update_root_index(), Some(0));
}
