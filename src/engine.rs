//! The contract shared by both trees.

use crate::avl_tree::AvlMap;
use crate::entry::{Key, Record};
use crate::error::InvariantError;
use crate::layout::Placement;
use crate::red_black_tree::RedBlackMap;

/// An ordered map of records keyed by integer.
///
/// Both [`AvlMap`] and [`RedBlackMap`] implement this trait so that the same sequence of
/// operations can be replayed against either of them.
///
/// # Examples
///
/// ```
/// use balanced_trees::avl_tree::AvlMap;
/// use balanced_trees::red_black_tree::RedBlackMap;
/// use balanced_trees::OrderedEngine;
///
/// let mut engines: Vec<Box<dyn OrderedEngine<i64>>> =
///     vec![Box::new(AvlMap::new()), Box::new(RedBlackMap::new())];
///
/// for engine in engines.iter_mut() {
///     for key in &[5, 3, 8, 1] {
///         engine.insert(*key);
///     }
///     engine.remove(3);
///     assert_eq!(engine.keys(), vec![1, 5, 8]);
///     assert!(engine.validate().is_ok());
/// }
/// ```
pub trait OrderedEngine<R: Record> {
    /// Stores `record`, or hands it back if its key is already present.
    fn insert(&mut self, record: R) -> Option<R>;

    /// Removes and returns the record with `key`, if any.
    fn remove(&mut self, key: Key) -> Option<R>;

    fn search(&self, key: Key) -> Option<&R>;

    fn len(&self) -> usize;

    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    fn height(&self) -> usize;

    /// Returns the keys in ascending order.
    fn keys(&self) -> Vec<Key>;

    /// Returns the position of every key in display order.
    fn layout(&self) -> Vec<Placement>;

    fn validate(&self) -> Result<(), InvariantError>;
}

macro_rules! impl_ordered_engine {
    ($($type_name:ident,)*) => {
        $(
            impl<R: Record> OrderedEngine<R> for $type_name<R> {
                fn insert(&mut self, record: R) -> Option<R> {
                    $type_name::insert(self, record)
                }

                fn remove(&mut self, key: Key) -> Option<R> {
                    $type_name::remove(self, key)
                }

                fn search(&self, key: Key) -> Option<&R> {
                    $type_name::search(self, key)
                }

                fn len(&self) -> usize {
                    $type_name::len(self)
                }

                fn height(&self) -> usize {
                    $type_name::height(self)
                }

                fn keys(&self) -> Vec<Key> {
                    $type_name::keys(self)
                }

                fn layout(&self) -> Vec<Placement> {
                    $type_name::layout(self)
                }

                fn validate(&self) -> Result<(), InvariantError> {
                    $type_name::validate(self)
                }
            }
        )*
    };
}

impl_ordered_engine!(AvlMap, RedBlackMap,);
