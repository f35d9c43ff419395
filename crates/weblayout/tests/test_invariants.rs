//! Property tests over random sequences of container operations.

#[cfg(test)]
mod tests {
    use std::collections::HashSet;

    use proptest::prelude::*;
    use weblayout::{
        Alignment, IdFactory, LayoutContainer, LayoutType, MemoryTree, NodeId, VisualTree,
        testing::seed,
    };

    /// Ids with a node in the document.
    const PRESENT: [&str; 4] = ["a", "b", "c", "d"];
    /// Ids with no node anywhere.
    const ABSENT: [&str; 2] = ["x", "y"];

    #[derive(Debug, Clone)]
    enum Op {
        Add(usize, Alignment),
        Remove(usize),
        Align(usize, Alignment),
        Destroy(usize),
        Type(LayoutType),
        Spacing(u16),
        Apply,
        Clear,
    }

    fn id_at(i: usize) -> &'static str {
        let all: Vec<&str> = PRESENT.iter().chain(ABSENT.iter()).copied().collect();
        all[i % all.len()]
    }

    fn alignment() -> impl Strategy<Value = Alignment> {
        prop::sample::select(Alignment::ALL.to_vec())
    }

    fn layout_type() -> impl Strategy<Value = LayoutType> {
        prop::sample::select(vec![
            LayoutType::Free,
            LayoutType::Horizontal,
            LayoutType::Vertical,
            LayoutType::Grid,
        ])
    }

    fn op() -> impl Strategy<Value = Op> {
        prop_oneof![
            4 => (0..6usize, alignment()).prop_map(|(i, a)| Op::Add(i, a)),
            2 => (0..6usize).prop_map(Op::Remove),
            2 => (0..6usize, alignment()).prop_map(|(i, a)| Op::Align(i, a)),
            1 => (0..4usize).prop_map(Op::Destroy),
            1 => layout_type().prop_map(Op::Type),
            1 => any::<u16>().prop_map(Op::Spacing),
            2 => Just(Op::Apply),
            1 => Just(Op::Clear),
        ]
    }

    fn check_model(c: &LayoutContainer<MemoryTree>) {
        let unique: HashSet<&String> = c.children().iter().collect();
        assert_eq!(unique.len(), c.children().len(), "duplicate child");
        for (key, _) in c.alignments() {
            assert!(c.children().iter().any(|c| c == key), "stray alignment {key}");
        }
        assert_eq!(c.alignments().count(), c.len());
    }

    fn run(ops: &[Op]) -> (MemoryTree, LayoutContainer<MemoryTree>, Vec<NodeId>) {
        let mut tree = MemoryTree::new();
        let nodes = seed(&mut tree, &PRESENT).unwrap();
        let mut c = LayoutContainer::create(&mut tree, &mut IdFactory::default(), None).unwrap();
        for op in ops {
            match op {
                Op::Add(i, a) => {
                    let before = c.children().to_vec();
                    let added = c.add_child(&mut tree, id_at(*i), *a).unwrap();
                    if before.iter().any(|b| b == id_at(*i)) {
                        assert!(added);
                        assert_eq!(c.children(), before.as_slice());
                    }
                }
                Op::Remove(i) => {
                    let was = c.contains(id_at(*i));
                    assert_eq!(c.remove_child(&mut tree, id_at(*i)).unwrap(), was);
                    assert!(!c.contains(id_at(*i)));
                }
                Op::Align(i, a) => c.set_alignment(id_at(*i), *a),
                Op::Destroy(i) => {
                    if tree.contains(nodes[*i]) {
                        tree.destroy(nodes[*i]).unwrap();
                    }
                }
                Op::Type(t) => c.set_layout_type(*t),
                Op::Spacing(s) => c.set_spacing(i32::from(*s)),
                Op::Apply => c.apply(&mut tree).unwrap(),
                Op::Clear => c.clear(&mut tree).unwrap(),
            }
            check_model(&c);
        }
        (tree, c, nodes)
    }

    proptest! {
        #[test]
        fn model_invariants_hold(ops in prop::collection::vec(op(), 0..40)) {
            run(&ops);
        }

        #[test]
        fn apply_converges_to_model_order(ops in prop::collection::vec(op(), 0..40)) {
            let (mut tree, c, _) = run(&ops);
            c.apply(&mut tree).unwrap();

            let expected: Vec<String> = c
                .children()
                .iter()
                .filter(|id| tree.find_node_by_id(id).is_some())
                .cloned()
                .collect();
            let actual = tree.child_ids(*c.root());
            prop_assert!(actual.ends_with(&expected));
            prop_assert_eq!(actual.len(), expected.len());

            let once = tree.dump_document().unwrap();
            c.apply(&mut tree).unwrap();
            prop_assert_eq!(tree.dump_document().unwrap(), once);
        }
    }
}
