use crate::arena::NodeId;
use crate::entry::{Key, Record};
use crate::error::InvariantError;
use crate::layout::Placement;
use crate::red_black_tree::node::Color;
use crate::red_black_tree::tree;

/// An ordered map implemented using a red black tree.
///
/// A red black tree is a self-balancing binary search tree that colors every node red or black.
/// The root is black, no red node has a red child, and every path from a node down to an empty
/// child slot passes through the same number of black nodes, which bounds the height of the tree
/// by twice the logarithm of its size. Records are ordered by their key and each key is stored at
/// most once.
///
/// # Examples
///
/// ```
/// use balanced_trees::red_black_tree::RedBlackMap;
/// use balanced_trees::Entry;
///
/// let mut map = RedBlackMap::new();
/// map.insert(Entry::new(0, "a"));
/// map.insert(Entry::new(3, "b"));
///
/// assert_eq!(map.search(0).map(|entry| entry.value), Some("a"));
/// assert!(map.search(1).is_none());
/// assert_eq!(map.len(), 2);
///
/// assert_eq!(map.max().map(|entry| entry.key), Some(3));
///
/// assert_eq!(map.remove(0).map(|entry| entry.value), Some("a"));
/// assert!(map.remove(1).is_none());
/// ```
pub struct RedBlackMap<R> {
    tree: tree::Tree<R>,
}

impl<R> RedBlackMap<R> {
    /// Constructs a new, empty `RedBlackMap<R>`.
    ///
    /// # Examples
    ///
    /// ```
    /// use balanced_trees::red_black_tree::RedBlackMap;
    ///
    /// let map: RedBlackMap<i64> = RedBlackMap::new();
    /// ```
    pub fn new() -> Self {
        RedBlackMap {
            tree: tree::Tree::new(),
        }
    }

    /// Returns the number of records in the map.
    pub fn len(&self) -> usize {
        self.tree.len()
    }

    /// Returns `true` if the map is empty.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Clears the map, dropping every record.
    pub fn clear(&mut self) {
        self.tree.clear();
    }

    /// Returns the number of nodes on the longest path from the root to a leaf.
    pub fn height(&self) -> usize {
        self.tree.height(self.tree.root)
    }

    /// Returns the record with the smallest key. Returns `None` if the map is empty.
    pub fn min(&self) -> Option<&R> {
        self.tree.min()
    }

    /// Returns the record with the largest key. Returns `None` if the map is empty.
    pub fn max(&self) -> Option<&R> {
        self.tree.max()
    }

    /// Returns an iterator over the map. The iterator will yield records using in-order
    /// traversal.
    ///
    /// # Examples
    ///
    /// ```
    /// use balanced_trees::red_black_tree::RedBlackMap;
    ///
    /// let mut map = RedBlackMap::new();
    /// map.insert(2i64);
    /// map.insert(1);
    ///
    /// let mut iterator = map.iter();
    /// assert_eq!(iterator.next(), Some(&1));
    /// assert_eq!(iterator.next(), Some(&2));
    /// assert_eq!(iterator.next(), None);
    /// ```
    pub fn iter(&self) -> RedBlackMapIter<'_, R> {
        RedBlackMapIter {
            tree: &self.tree,
            current: self.tree.root,
            stack: Vec::new(),
        }
    }
}

impl<R: Record> RedBlackMap<R> {
    /// Inserts a record into the map. If a record with the same key already exists, the map is
    /// left unchanged and the new record is handed back.
    ///
    /// # Examples
    ///
    /// ```
    /// use balanced_trees::red_black_tree::RedBlackMap;
    ///
    /// let mut map = RedBlackMap::new();
    /// assert_eq!(map.insert(1i64), None);
    /// assert_eq!(map.insert(1), Some(1));
    /// assert_eq!(map.len(), 1);
    /// ```
    pub fn insert(&mut self, record: R) -> Option<R> {
        self.tree.insert(record)
    }

    /// Removes the record with a particular key and returns it. Returns `None` and leaves the map
    /// untouched if no such record exists.
    pub fn remove(&mut self, key: Key) -> Option<R> {
        self.tree.remove(key)
    }

    /// Returns a reference to the record with a particular key, or `None` if the key does not
    /// exist in the map.
    pub fn search(&self, key: Key) -> Option<&R> {
        self.tree.get(key)
    }

    /// Checks if a key exists in the map.
    pub fn contains_key(&self, key: Key) -> bool {
        self.tree.find(key).is_some()
    }

    /// Returns the color of the node holding a particular key.
    ///
    /// # Examples
    ///
    /// ```
    /// use balanced_trees::red_black_tree::{Color, RedBlackMap};
    ///
    /// let mut map = RedBlackMap::new();
    /// map.insert(1i64);
    /// map.insert(2);
    /// assert_eq!(map.color(1), Some(Color::Black));
    /// assert_eq!(map.color(2), Some(Color::Red));
    /// assert_eq!(map.color(3), None);
    /// ```
    pub fn color(&self, key: Key) -> Option<Color> {
        self.tree.find(key).map(|id| self.tree.arena[id].color)
    }

    /// Returns the keys of the map in ascending order.
    pub fn keys(&self) -> Vec<Key> {
        self.iter().map(Record::key).collect()
    }

    /// Exports the shape of the tree in display order: right subtree, node, left subtree.
    pub fn layout(&self) -> Vec<Placement> {
        let mut placements = Vec::with_capacity(self.len());
        self.tree.layout(self.tree.root, &mut Vec::new(), &mut placements);
        placements
    }

    /// Walks the whole tree and verifies key order, parent links, the coloring rules and the
    /// recorded length.
    pub fn validate(&self) -> Result<(), InvariantError> {
        self.tree.validate()
    }
}

impl<'a, R> IntoIterator for &'a RedBlackMap<R>
where
    R: 'a,
{
    type IntoIter = RedBlackMapIter<'a, R>;
    type Item = &'a R;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

/// An iterator for `RedBlackMap<R>`.
///
/// This iterator traverses the records of the map in-order and yields immutable references.
pub struct RedBlackMapIter<'a, R>
where
    R: 'a,
{
    tree: &'a tree::Tree<R>,
    current: Option<NodeId>,
    stack: Vec<NodeId>,
}

impl<'a, R> Iterator for RedBlackMapIter<'a, R>
where
    R: 'a,
{
    type Item = &'a R;

    fn next(&mut self) -> Option<Self::Item> {
        let tree = self.tree;
        while let Some(id) = self.current {
            self.stack.push(id);
            self.current = tree.arena[id].left;
        }
        self.stack.pop().map(|id| {
            let node = &tree.arena[id];
            self.current = node.right;
            &node.record
        })
    }
}

impl<R> Default for RedBlackMap<R> {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::RedBlackMap;
    use crate::entry::Entry;
    use crate::layout::Side::{Left, Right};
    use crate::red_black_tree::node::Color;

    fn from_keys(keys: &[i64]) -> RedBlackMap<i64> {
        let mut map = RedBlackMap::new();
        for key in keys {
            assert_eq!(map.insert(*key), None);
            assert_eq!(map.validate(), Ok(()));
        }
        map
    }

    fn shape(map: &RedBlackMap<i64>) -> Vec<(i64, Vec<crate::layout::Side>)> {
        map.layout()
            .into_iter()
            .map(|placement| (placement.key, placement.path))
            .collect()
    }

    #[test]
    fn test_len_empty() {
        let map: RedBlackMap<i64> = RedBlackMap::new();
        assert_eq!(map.len(), 0);
        assert!(map.is_empty());
        assert_eq!(map.height(), 0);
        assert_eq!(map.validate(), Ok(()));
    }

    #[test]
    fn test_min_max_empty() {
        let map: RedBlackMap<i64> = RedBlackMap::new();
        assert_eq!(map.min(), None);
        assert_eq!(map.max(), None);
    }

    #[test]
    fn test_insert() {
        let mut map = RedBlackMap::new();
        assert_eq!(map.insert(1i64), None);
        assert!(map.contains_key(1));
        assert_eq!(map.search(1), Some(&1));
        assert_eq!(map.color(1), Some(Color::Black));
    }

    #[test]
    fn test_insert_duplicate_is_rejected() {
        let mut map = RedBlackMap::new();
        assert!(map.insert(Entry::new(1, 'a')).is_none());
        assert!(map.insert(Entry::new(2, 'b')).is_none());
        let rejected = map.insert(Entry::new(1, 'c'));
        assert_eq!(rejected.map(|entry| entry.value), Some('c'));
        assert_eq!(map.len(), 2);
        assert_eq!(map.search(1).map(|entry| entry.value), Some('a'));
        assert_eq!(map.validate(), Ok(()));
    }

    #[test]
    fn test_insert_ascending_triple() {
        let map = from_keys(&[10, 20, 30]);
        assert_eq!(
            shape(&map),
            vec![(30, vec![Right]), (20, vec![]), (10, vec![Left])],
        );
        assert_eq!(map.color(20), Some(Color::Black));
        assert_eq!(map.color(10), Some(Color::Red));
        assert_eq!(map.color(30), Some(Color::Red));
    }

    #[test]
    fn test_insert_recolors_through_red_uncle() {
        let map = from_keys(&[10, 20, 30, 40, 50, 25]);
        assert_eq!(
            shape(&map),
            vec![
                (50, vec![Right, Right]),
                (40, vec![Right]),
                (30, vec![Right, Left]),
                (25, vec![Right, Left, Left]),
                (20, vec![]),
                (10, vec![Left]),
            ],
        );
        assert_eq!(map.color(40), Some(Color::Red));
        assert_eq!(map.color(30), Some(Color::Black));
        assert_eq!(map.color(50), Some(Color::Black));
        assert_eq!(map.color(25), Some(Color::Red));
    }

    #[test]
    fn test_remove_node_with_single_child() {
        let mut map = from_keys(&[10, 20, 30, 40, 50, 25]);
        assert_eq!(map.remove(30), Some(30));
        assert_eq!(map.validate(), Ok(()));
        assert_eq!(
            shape(&map),
            vec![
                (50, vec![Right, Right]),
                (40, vec![Right]),
                (25, vec![Right, Left]),
                (20, vec![]),
                (10, vec![Left]),
            ],
        );
        assert_eq!(map.color(25), Some(Color::Black));
    }

    #[test]
    fn test_remove_node_with_two_children() {
        let mut map = from_keys(&[10, 20, 30, 40, 50, 25]);
        assert_eq!(map.remove(40), Some(40));
        assert_eq!(map.validate(), Ok(()));
        assert_eq!(
            shape(&map),
            vec![
                (50, vec![Right, Right]),
                (30, vec![Right]),
                (25, vec![Right, Left]),
                (20, vec![]),
                (10, vec![Left]),
            ],
        );
        assert_eq!(map.color(30), Some(Color::Red));
        assert_eq!(map.color(25), Some(Color::Black));
        assert_eq!(map.color(50), Some(Color::Black));
    }

    #[test]
    fn test_remove_root_promotes_successor_payload() {
        let mut map = RedBlackMap::new();
        for key in &[20, 10, 30, 25, 35] {
            map.insert(Entry::new(*key, key * 100));
        }

        assert_eq!(map.remove(20).map(|entry| entry.value), Some(2000));
        assert_eq!(map.search(25).map(|entry| entry.value), Some(2500));
        assert_eq!(map.validate(), Ok(()));
    }

    #[test]
    fn test_remove_missing() {
        let mut map = from_keys(&[1, 2, 3]);
        let before = shape(&map);
        assert_eq!(map.remove(4), None);
        assert_eq!(shape(&map), before);
        assert_eq!(map.len(), 3);
    }

    #[test]
    fn test_insert_remove_round_trip() {
        let mut map = RedBlackMap::new();
        map.insert(7i64);
        assert_eq!(map.remove(7), Some(7));
        assert!(map.is_empty());
        assert!(map.layout().is_empty());
        assert_eq!(map.validate(), Ok(()));
    }

    #[test]
    fn test_min_max() {
        let map = from_keys(&[3, 1, 5]);
        assert_eq!(map.min(), Some(&1));
        assert_eq!(map.max(), Some(&5));
    }

    #[test]
    fn test_clear() {
        let mut map = from_keys(&[1, 2, 3]);
        map.clear();
        assert!(map.is_empty());
        assert_eq!(map.iter().next(), None);
        assert_eq!(map.insert(4), None);
        assert_eq!(map.keys(), vec![4]);
    }

    #[test]
    fn test_iter() {
        let map = from_keys(&[1, 5, 3]);
        assert_eq!(map.iter().collect::<Vec<&i64>>(), vec![&1, &3, &5]);
        assert_eq!((&map).into_iter().count(), 3);
    }
}
