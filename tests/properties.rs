use delta_stepping::{bucket_index_for, delta_stepping, dijkstra, DeltaSteppingConfig, Graph, RunState};
use proptest::prelude::*;

fn graph_strategy() -> impl Strategy<Value = (usize, Vec<(u32, u32, u64)>)> {
    (1usize..40).prop_flat_map(|n| {
        let edge = (0..n as u32, 0..n as u32, 0u64..30);
        (Just(n), proptest::collection::vec(edge, 0..120))
    })
}

proptest! {
    #[test]
    fn matches_dijkstra((n, edges) in graph_strategy(), delta in 1u64..40, src in any::<prop::sample::Index>()) {
        let g = Graph::from_edges(n, edges).unwrap();
        let source = src.index(n) as u32;
        let cfg = DeltaSteppingConfig::default().with_delta(delta).with_source(source);
        let sp = delta_stepping(&g, cfg).unwrap();
        let (expected, _) = dijkstra(&g, source);
        for (v, exp) in expected.iter().enumerate() {
            prop_assert_eq!(sp.distance(v as u32), exp.unwrap_or(cfg.infinity), "vertex {}", v);
        }
    }

    #[test]
    fn relax_is_monotone_and_keeps_buckets_consistent(
        delta in 1u64..10,
        ops in proptest::collection::vec((0u32..8, 0u64..60), 1..80),
    ) {
        let mut state = RunState::new(8, delta);
        for (v, candidate) in ops {
            let before = state.distances().get(v);
            let changed = state.relax(v, candidate);
            let after = state.distances().get(v);
            match before {
                Some(b) => {
                    prop_assert!(after.unwrap() <= b);
                    prop_assert_eq!(changed, candidate < b);
                }
                None => prop_assert!(changed),
            }
            // offering the current value again changes nothing
            prop_assert!(!state.relax(v, after.unwrap()));
            prop_assert!(state.check_bucket_invariant());
            for (u, d) in state.distances().iter() {
                prop_assert_eq!(state.bucket_of(u), d.map(|d| bucket_index_for(d, delta)));
            }
        }
    }
}
