use crate::avl_tree::node::Node;
use crate::avl_tree::tree;
use crate::entry::{Key, Record};
use crate::error::InvariantError;
use crate::layout::Placement;

/// An ordered map implemented using an avl tree.
///
/// An avl tree is a self-balancing binary search tree that maintains the invariant that the
/// heights of two child subtrees of any node differ by at most one. Records are ordered by their
/// key and each key is stored at most once.
///
/// # Examples
///
/// ```
/// use balanced_trees::avl_tree::AvlMap;
/// use balanced_trees::Entry;
///
/// let mut map = AvlMap::new();
/// map.insert(Entry::new(0, "a"));
/// map.insert(Entry::new(3, "b"));
///
/// assert_eq!(map.search(0).map(|entry| entry.value), Some("a"));
/// assert!(map.search(1).is_none());
/// assert_eq!(map.len(), 2);
///
/// assert_eq!(map.min().map(|entry| entry.key), Some(0));
///
/// assert_eq!(map.remove(0).map(|entry| entry.value), Some("a"));
/// assert!(map.remove(1).is_none());
/// ```
pub struct AvlMap<R> {
    tree: tree::Tree<R>,
    len: usize,
}

impl<R> AvlMap<R> {
    /// Constructs a new, empty `AvlMap<R>`.
    ///
    /// # Examples
    ///
    /// ```
    /// use balanced_trees::avl_tree::AvlMap;
    ///
    /// let map: AvlMap<i64> = AvlMap::new();
    /// ```
    pub fn new() -> Self {
        AvlMap { tree: None, len: 0 }
    }

    /// Returns the number of records in the map.
    pub fn len(&self) -> usize {
        self.len
    }

    /// Returns `true` if the map is empty.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Clears the map, dropping every record.
    pub fn clear(&mut self) {
        self.tree = None;
        self.len = 0;
    }

    /// Returns the number of nodes on the longest path from the root to a leaf.
    ///
    /// # Examples
    ///
    /// ```
    /// use balanced_trees::avl_tree::AvlMap;
    ///
    /// let mut map = AvlMap::new();
    /// assert_eq!(map.height(), 0);
    /// for key in 0..7i64 {
    ///     map.insert(key);
    /// }
    /// assert_eq!(map.height(), 3);
    /// ```
    pub fn height(&self) -> usize {
        tree::height(&self.tree)
    }

    /// Returns the record with the smallest key. Returns `None` if the map is empty.
    pub fn min(&self) -> Option<&R> {
        tree::min(&self.tree)
    }

    /// Returns the record with the largest key. Returns `None` if the map is empty.
    pub fn max(&self) -> Option<&R> {
        tree::max(&self.tree)
    }

    /// Returns an iterator over the map. The iterator will yield records using in-order
    /// traversal.
    ///
    /// # Examples
    ///
    /// ```
    /// use balanced_trees::avl_tree::AvlMap;
    ///
    /// let mut map = AvlMap::new();
    /// map.insert(2i64);
    /// map.insert(1);
    ///
    /// let mut iterator = map.iter();
    /// assert_eq!(iterator.next(), Some(&1));
    /// assert_eq!(iterator.next(), Some(&2));
    /// assert_eq!(iterator.next(), None);
    /// ```
    pub fn iter(&self) -> AvlMapIter<'_, R> {
        AvlMapIter {
            current: &self.tree,
            stack: Vec::new(),
        }
    }
}

impl<R: Record> AvlMap<R> {
    /// Inserts a record into the map. If a record with the same key already exists, the map is
    /// left unchanged and the new record is handed back.
    ///
    /// # Examples
    ///
    /// ```
    /// use balanced_trees::avl_tree::AvlMap;
    /// use balanced_trees::Entry;
    ///
    /// let mut map = AvlMap::new();
    /// assert!(map.insert(Entry::new(1, "first")).is_none());
    /// assert_eq!(map.insert(Entry::new(1, "second")).map(|entry| entry.value), Some("second"));
    /// assert_eq!(map.search(1).map(|entry| entry.value), Some("first"));
    /// ```
    pub fn insert(&mut self, record: R) -> Option<R> {
        let ret = tree::insert(&mut self.tree, record);
        if ret.is_none() {
            self.len += 1;
        }
        ret
    }

    /// Removes the record with a particular key and returns it. Returns `None` and leaves the map
    /// untouched if no such record exists.
    pub fn remove(&mut self, key: Key) -> Option<R> {
        let ret = tree::remove(&mut self.tree, key);
        if ret.is_some() {
            self.len -= 1;
        }
        ret
    }

    /// Returns a reference to the record with a particular key, or `None` if the key does not
    /// exist in the map.
    pub fn search(&self, key: Key) -> Option<&R> {
        tree::get(&self.tree, key)
    }

    /// Checks if a key exists in the map.
    pub fn contains_key(&self, key: Key) -> bool {
        self.search(key).is_some()
    }

    /// Returns the keys of the map in ascending order.
    pub fn keys(&self) -> Vec<Key> {
        self.iter().map(Record::key).collect()
    }

    /// Exports the shape of the tree in display order: right subtree, node, left subtree.
    ///
    /// # Examples
    ///
    /// ```
    /// use balanced_trees::avl_tree::AvlMap;
    /// use balanced_trees::layout::Side;
    ///
    /// let mut map = AvlMap::new();
    /// map.insert(10i64);
    /// map.insert(20);
    /// map.insert(30);
    ///
    /// let layout = map.layout();
    /// assert_eq!(layout.iter().map(|p| p.key).collect::<Vec<_>>(), vec![30, 20, 10]);
    /// assert_eq!(layout[0].side(), Some(Side::Right));
    /// assert_eq!(layout[1].depth(), 0);
    /// ```
    pub fn layout(&self) -> Vec<Placement> {
        let mut placements = Vec::with_capacity(self.len);
        tree::layout(&self.tree, &mut Vec::new(), &mut placements);
        placements
    }

    /// Walks the whole tree and verifies key order, stored heights, balance factors and the
    /// recorded length.
    pub fn validate(&self) -> Result<(), InvariantError> {
        let actual = tree::validate(&self.tree, None, None)?;
        if actual != self.len {
            return Err(InvariantError::LengthMismatch {
                expected: self.len,
                actual,
            });
        }
        Ok(())
    }
}

impl<'a, R> IntoIterator for &'a AvlMap<R>
where
    R: 'a,
{
    type IntoIter = AvlMapIter<'a, R>;
    type Item = &'a R;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

/// An iterator for `AvlMap<R>`.
///
/// This iterator traverses the records of the map in-order and yields immutable references.
pub struct AvlMapIter<'a, R>
where
    R: 'a,
{
    current: &'a tree::Tree<R>,
    stack: Vec<&'a Node<R>>,
}

impl<'a, R> Iterator for AvlMapIter<'a, R>
where
    R: 'a,
{
    type Item = &'a R;

    fn next(&mut self) -> Option<Self::Item> {
        while let Some(ref node) = self.current {
            self.current = &node.left;
            self.stack.push(node);
        }
        self.stack.pop().map(|node| {
            let Node {
                ref record,
                ref right,
                ..
            } = node;
            self.current = right;
            record
        })
    }
}

impl<R> Default for AvlMap<R> {
    fn default() -> Self {
        Self::new()
    }
}
