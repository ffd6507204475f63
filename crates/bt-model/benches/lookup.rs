use bt_model::{AbsBehaviorTree, AbstractTreeNode, NodeType, Uid};
use criterion::{black_box, criterion_group, criterion_main, Criterion};

/// Complete binary tree laid out breadth-first.
fn binary_tree(len: usize) -> AbsBehaviorTree {
    let mut tree = AbsBehaviorTree::new();
    for i in 0..len {
        let children = [2 * i + 1, 2 * i + 2]
            .into_iter()
            .filter(|&c| c < len)
            .map(|c| c as i16);
        let node = AbstractTreeNode::new("Sequence", format!("n{i}"), NodeType::Control)
            .with_children(children);
        tree.push_back(Uid::new(1000 + i as u16), node).unwrap();
    }
    tree
}

fn bench_lookup(c: &mut Criterion) {
    let mut tree = binary_tree(1023);

    c.bench_function("bt-model/update_root_index(nodes=1023)", |b| {
        b.iter(|| black_box(tree.update_root_index()))
    });

    let mut uid: u16 = 1000;
    c.bench_function("bt-model/node_at_uid(nodes=1023)", |b| {
        b.iter(|| {
            black_box(tree.node_at_uid(Uid::new(uid)));
            uid = 1000 + (uid - 999) % 1023;
        })
    });

    c.bench_function("bt-model/eq(nodes=1023)", |b| {
        let other = tree.clone();
        b.iter(|| black_box(tree == other))
    });
}

criterion_group!(benches, bench_lookup);
criterion_main!(benches);
