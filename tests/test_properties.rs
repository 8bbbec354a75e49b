use balanced_trees::avl_tree::AvlMap;
use balanced_trees::red_black_tree::RedBlackMap;
use balanced_trees::{Entry, OrderedEngine};
use proptest::prelude::*;
use std::collections::BTreeSet;

const MAP_SIZE: usize = 200;

fn replay<E>(mut map: E, inserts: &[i64], removes: &[i64]) -> E
where
    E: OrderedEngine<Entry<i64>>,
{
    for key in inserts {
        map.insert(Entry::new(*key, -key));
    }
    for key in removes {
        map.remove(*key);
    }
    map
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(64))]

    #[test]
    fn prop_membership(
        inserts in proptest::collection::vec(-1000..1000i64, 0..MAP_SIZE),
        removes in proptest::collection::vec(-1000..1000i64, 0..MAP_SIZE),
    ) {
        let expected: BTreeSet<i64> = inserts
            .iter()
            .filter(|key| !removes.contains(key))
            .cloned()
            .collect();

        let avl = replay(AvlMap::new(), &inserts, &removes);
        let red_black = replay(RedBlackMap::new(), &inserts, &removes);

        let maps: [&dyn OrderedEngine<Entry<i64>>; 2] = [&avl, &red_black];
        for map in maps.iter() {
            prop_assert_eq!(map.validate(), Ok(()));
            prop_assert_eq!(map.len(), expected.len());
            for key in -1000..1000i64 {
                let found = map.search(key);
                prop_assert_eq!(found.is_some(), expected.contains(&key));
                if let Some(entry) = found {
                    prop_assert_eq!(entry.value, -key);
                }
            }
        }
    }

    #[test]
    fn prop_order_independence(
        keys in proptest::collection::hash_set(0..5000i64, 0..MAP_SIZE),
        removes in proptest::collection::hash_set(0..5000i64, 0..MAP_SIZE),
    ) {
        let forward: Vec<i64> = keys.iter().cloned().collect();
        let backward: Vec<i64> = forward.iter().rev().cloned().collect();
        let mut sorted_removes: Vec<i64> = removes.iter().cloned().collect();
        sorted_removes.sort();
        let reversed_removes: Vec<i64> = sorted_removes.iter().rev().cloned().collect();

        let avl_forward = replay(AvlMap::new(), &forward, &sorted_removes);
        let avl_backward = replay(AvlMap::new(), &backward, &reversed_removes);
        let red_black_forward = replay(RedBlackMap::new(), &forward, &sorted_removes);
        let red_black_backward = replay(RedBlackMap::new(), &backward, &reversed_removes);

        prop_assert_eq!(avl_forward.keys(), avl_backward.keys());
        prop_assert_eq!(red_black_forward.keys(), red_black_backward.keys());
        prop_assert_eq!(avl_forward.keys(), red_black_forward.keys());
        prop_assert_eq!(avl_backward.validate(), Ok(()));
        prop_assert_eq!(red_black_backward.validate(), Ok(()));
    }

    #[test]
    fn prop_insert_then_remove_restores_empty(key in any::<i64>()) {
        let mut avl = AvlMap::new();
        let mut red_black = RedBlackMap::new();
        avl.insert(key);
        red_black.insert(key);
        prop_assert_eq!(avl.remove(key), Some(key));
        prop_assert_eq!(red_black.remove(key), Some(key));
        prop_assert!(avl.is_empty() && red_black.is_empty());
        prop_assert_eq!(avl.height(), 0);
        prop_assert_eq!(red_black.height(), 0);
    }
}
