use balanced_trees::avl_tree::AvlMap;
use balanced_trees::error::Error;
use balanced_trees::layout;
use balanced_trees::red_black_tree::RedBlackMap;
use balanced_trees::source::{self, User};
use balanced_trees::Record;
use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::SeedableRng;

#[test]
fn int_test_sample_users_round() {
    let mut users = source::load_users("data/users.json").unwrap();
    assert!(!users.is_empty());
    users.shuffle(&mut StdRng::seed_from_u64(5));

    let mut avl = AvlMap::new();
    let mut red_black = RedBlackMap::new();
    for user in &users {
        assert!(avl.insert(user.clone()).is_none());
        assert!(red_black.insert(user.clone()).is_none());
    }

    let primes = source::prime_keys(&users);
    assert!(!primes.is_empty());
    for key in &primes {
        let removed: User = avl.remove(*key).unwrap();
        assert_eq!(removed.key(), *key);
        assert_eq!(red_black.remove(*key), Some(removed));
    }

    let survivors: Vec<i64> = {
        let mut keys: Vec<i64> = users
            .iter()
            .map(Record::key)
            .filter(|key| !source::is_prime(*key))
            .collect();
        keys.sort();
        keys
    };
    assert_eq!(avl.keys(), survivors);
    assert_eq!(red_black.keys(), survivors);
    assert_eq!(avl.validate(), Ok(()));
    assert_eq!(red_black.validate(), Ok(()));

    let text = layout::render("AVL TREE", &avl.layout());
    assert_eq!(text.lines().count(), survivors.len() + 2);
    for key in &survivors {
        assert!(text.contains(&key.to_string()));
    }
}

#[test]
fn int_test_missing_source_is_io_error() {
    match source::load_users("data/does-not-exist.json") {
        Err(Error::IOError(_)) => {},
        other => panic!("expected an io error, got {:?}", other),
    }
}
