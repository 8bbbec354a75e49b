use crate::arena::{Arena, NodeId};
use crate::entry::{Key, Record};
use crate::error::InvariantError;
use crate::layout::{Placement, Side};
use crate::red_black_tree::node::{Color, Node};
use std::cmp::{self, Ordering};

/// The nodes of a red black tree and a handle to its root.
///
/// Every node lives in the arena and is reachable from the root through child links; parent
/// links only ever point back along those edges.
pub struct Tree<R> {
    pub arena: Arena<Node<R>>,
    pub root: Option<NodeId>,
}

impl<R> Tree<R> {
    pub fn new() -> Self {
        Tree {
            arena: Arena::new(),
            root: None,
        }
    }

    pub fn len(&self) -> usize {
        self.arena.len()
    }

    pub fn clear(&mut self) {
        self.arena.clear();
        self.root = None;
    }

    fn is_red(&self, link: Option<NodeId>) -> bool {
        match link {
            None => false,
            Some(id) => self.arena[id].color == Color::Red,
        }
    }

    // precondition: `parent` is the parent of `child`
    fn side_of(&self, child: NodeId, parent: NodeId) -> Side {
        if self.arena[parent].left == Some(child) {
            Side::Left
        } else {
            Side::Right
        }
    }

    /// Puts `replacement` into the slot `node` occupies in its parent, or makes it the root.
    fn transplant(&mut self, node: NodeId, replacement: Option<NodeId>) {
        let parent = self.arena[node].parent;
        match parent {
            None => self.root = replacement,
            Some(parent) => {
                let side = self.side_of(node, parent);
                self.arena[parent].set_child(side, replacement);
            },
        }
        if let Some(replacement) = replacement {
            self.arena[replacement].parent = parent;
        }
    }

    /// Rotates `node` down towards `side`; its child on the opposite side takes its place.
    fn rotate(&mut self, node: NodeId, side: Side) {
        let child = match self.arena[node].child(side.opposite()) {
            Some(child) => child,
            None => unreachable!(),
        };
        let inner = self.arena[child].child(side);

        self.arena[node].set_child(side.opposite(), inner);
        if let Some(inner) = inner {
            self.arena[inner].parent = Some(node);
        }

        self.transplant(node, Some(child));
        self.arena[child].set_child(side, Some(node));
        self.arena[node].parent = Some(child);
    }

    fn min_node(&self, mut node: NodeId) -> NodeId {
        while let Some(left) = self.arena[node].left {
            node = left;
        }
        node
    }

    fn max_node(&self, mut node: NodeId) -> NodeId {
        while let Some(right) = self.arena[node].right {
            node = right;
        }
        node
    }

    pub fn min(&self) -> Option<&R> {
        self.root.map(|root| &self.arena[self.min_node(root)].record)
    }

    pub fn max(&self) -> Option<&R> {
        self.root.map(|root| &self.arena[self.max_node(root)].record)
    }

    pub fn height(&self, link: Option<NodeId>) -> usize {
        match link {
            None => 0,
            Some(id) => {
                let node = &self.arena[id];
                cmp::max(self.height(node.left), self.height(node.right)) + 1
            },
        }
    }
}

impl<R: Record> Tree<R> {
    fn key(&self, id: NodeId) -> Key {
        self.arena[id].record.key()
    }

    pub fn find(&self, key: Key) -> Option<NodeId> {
        let mut curr = self.root;
        while let Some(id) = curr {
            let node = &self.arena[id];
            curr = match key.cmp(&node.record.key()) {
                Ordering::Less => node.left,
                Ordering::Greater => node.right,
                Ordering::Equal => return Some(id),
            };
        }
        None
    }

    pub fn get(&self, key: Key) -> Option<&R> {
        self.find(key).map(|id| &self.arena[id].record)
    }

    /// Inserts `record` unless its key is already present, in which case the record is handed back
    /// and the tree is left untouched.
    pub fn insert(&mut self, record: R) -> Option<R> {
        let key = record.key();
        let mut parent = None;
        let mut side = Side::Left;
        let mut curr = self.root;

        while let Some(id) = curr {
            let node = &self.arena[id];
            side = match key.cmp(&node.record.key()) {
                Ordering::Less => Side::Left,
                Ordering::Greater => Side::Right,
                Ordering::Equal => return Some(record),
            };
            parent = Some(id);
            curr = node.child(side);
        }

        let id = self.arena.allocate(Node::new(record, parent));
        match parent {
            None => self.root = Some(id),
            Some(parent) => self.arena[parent].set_child(side, Some(id)),
        }

        self.fix_insert(id);
        None
    }

    fn fix_insert(&mut self, mut node: NodeId) {
        while let Some(parent) = self.arena[node].parent {
            if self.arena[parent].color == Color::Black {
                break;
            }
            // a red parent is never the root
            let grandparent = match self.arena[parent].parent {
                Some(grandparent) => grandparent,
                None => unreachable!(),
            };

            let side = self.side_of(parent, grandparent);
            let uncle = self.arena[grandparent].child(side.opposite());
            match uncle {
                Some(uncle) if self.arena[uncle].color == Color::Red => {
                    trace!("red black: recoloring below {}", self.key(grandparent));
                    self.arena[parent].color = Color::Black;
                    self.arena[uncle].color = Color::Black;
                    self.arena[grandparent].color = Color::Red;
                    node = grandparent;
                },
                _ => {
                    let parent = if self.arena[parent].child(side.opposite()) == Some(node) {
                        self.rotate(parent, side);
                        node
                    } else {
                        parent
                    };
                    trace!(
                        "red black: rotating {} under {}",
                        self.key(parent),
                        self.key(grandparent)
                    );
                    self.arena[parent].color = Color::Black;
                    self.arena[grandparent].color = Color::Red;
                    self.rotate(grandparent, side.opposite());
                    break;
                },
            }
        }

        if let Some(root) = self.root {
            self.arena[root].color = Color::Black;
        }
    }

    pub fn remove(&mut self, key: Key) -> Option<R> {
        let target = self.find(key)?;
        let Node {
            color, left, right, ..
        } = self.arena[target];

        let removed_color;
        let fix_node;
        let fix_parent;

        match (left, right) {
            (None, child) | (child, None) => {
                removed_color = color;
                fix_node = child;
                fix_parent = self.arena[target].parent;
                self.transplant(target, child);
            },
            (Some(left), Some(right)) => {
                let successor = self.min_node(right);
                removed_color = self.arena[successor].color;
                fix_node = self.arena[successor].right;

                if successor == right {
                    fix_parent = Some(successor);
                } else {
                    fix_parent = self.arena[successor].parent;
                    self.transplant(successor, fix_node);
                    self.arena[successor].right = Some(right);
                    self.arena[right].parent = Some(successor);
                }

                self.transplant(target, Some(successor));
                self.arena[successor].left = Some(left);
                self.arena[left].parent = Some(successor);
                self.arena[successor].color = color;
            },
        }

        let node = self.arena.free(target);
        if removed_color == Color::Black {
            self.fix_remove(fix_node, fix_parent);
        }
        Some(node.record)
    }

    // `node` carries an extra black; `parent` is tracked separately because `node` may be absent.
    fn fix_remove(&mut self, mut node: Option<NodeId>, mut parent: Option<NodeId>) {
        while node != self.root && !self.is_red(node) {
            let curr_parent = match parent {
                Some(parent) => parent,
                None => break,
            };
            let side = if self.arena[curr_parent].left == node {
                Side::Left
            } else {
                Side::Right
            };

            // the sibling subtree has black height at least one, so it is never empty
            let mut sibling = match self.arena[curr_parent].child(side.opposite()) {
                Some(sibling) => sibling,
                None => unreachable!(),
            };

            if self.arena[sibling].color == Color::Red {
                trace!("red black: sibling {} is red", self.key(sibling));
                self.arena[sibling].color = Color::Black;
                self.arena[curr_parent].color = Color::Red;
                self.rotate(curr_parent, side);
                sibling = match self.arena[curr_parent].child(side.opposite()) {
                    Some(sibling) => sibling,
                    None => unreachable!(),
                };
            }

            let near = self.arena[sibling].child(side);
            let far = self.arena[sibling].child(side.opposite());

            if !self.is_red(near) && !self.is_red(far) {
                self.arena[sibling].color = Color::Red;
                node = Some(curr_parent);
                parent = self.arena[curr_parent].parent;
            } else {
                if !self.is_red(far) {
                    if let Some(near) = near {
                        self.arena[near].color = Color::Black;
                    }
                    self.arena[sibling].color = Color::Red;
                    self.rotate(sibling, side.opposite());
                    sibling = match self.arena[curr_parent].child(side.opposite()) {
                        Some(sibling) => sibling,
                        None => unreachable!(),
                    };
                }

                trace!("red black: rotating {} towards its deficit", self.key(curr_parent));
                self.arena[sibling].color = self.arena[curr_parent].color;
                self.arena[curr_parent].color = Color::Black;
                if let Some(far) = self.arena[sibling].child(side.opposite()) {
                    self.arena[far].color = Color::Black;
                }
                self.rotate(curr_parent, side);
                node = self.root;
                parent = None;
            }
        }

        if let Some(node) = node {
            self.arena[node].color = Color::Black;
        }
    }

    pub fn layout(
        &self,
        link: Option<NodeId>,
        path: &mut Vec<Side>,
        placements: &mut Vec<Placement>,
    ) {
        if let Some(id) = link {
            let node = &self.arena[id];

            path.push(Side::Right);
            self.layout(node.right, path, placements);
            path.pop();

            placements.push(Placement {
                key: node.record.key(),
                path: path.clone(),
            });

            path.push(Side::Left);
            self.layout(node.left, path, placements);
            path.pop();
        }
    }

    pub fn validate(&self) -> Result<(), InvariantError> {
        let root = match self.root {
            Some(root) => root,
            None if self.len() == 0 => return Ok(()),
            None => {
                return Err(InvariantError::LengthMismatch {
                    expected: self.len(),
                    actual: 0,
                })
            },
        };

        if self.arena[root].parent.is_some() {
            return Err(InvariantError::BrokenParentLink {
                key: self.key(root),
            });
        }
        if self.arena[root].color == Color::Red {
            return Err(InvariantError::RedRoot {
                key: self.key(root),
            });
        }

        let (_, actual) = self.validate_node(root, None, None)?;
        if actual != self.len() {
            return Err(InvariantError::LengthMismatch {
                expected: self.len(),
                actual,
            });
        }
        Ok(())
    }

    // Returns the black height below `id` and the number of nodes in its subtree.
    fn validate_node(
        &self,
        id: NodeId,
        lower: Option<Key>,
        upper: Option<Key>,
    ) -> Result<(usize, usize), InvariantError> {
        let node = &self.arena[id];
        let key = node.record.key();
        if lower.map_or(false, |lower| key <= lower) || upper.map_or(false, |upper| key >= upper) {
            return Err(InvariantError::Unordered { key });
        }

        let mut black_heights = [0, 0];
        let mut count = 1;
        let children = [(node.left, lower, Some(key)), (node.right, Some(key), upper)];
        for (index, (child, lower, upper)) in children.iter().enumerate() {
            if let Some(child) = *child {
                let child_node = &self.arena[child];
                if child_node.parent != Some(id) {
                    return Err(InvariantError::BrokenParentLink {
                        key: child_node.record.key(),
                    });
                }
                if node.color == Color::Red && child_node.color == Color::Red {
                    return Err(InvariantError::RedViolation {
                        parent: key,
                        child: child_node.record.key(),
                    });
                }

                let (black_height, child_count) = self.validate_node(child, *lower, *upper)?;
                black_heights[index] = black_height;
                count += child_count;
            }
        }

        if black_heights[0] != black_heights[1] {
            return Err(InvariantError::BlackHeightMismatch {
                key,
                left: black_heights[0],
                right: black_heights[1],
            });
        }

        let own = if node.color == Color::Black { 1 } else { 0 };
        Ok((black_heights[0] + own, count))
    }
}
