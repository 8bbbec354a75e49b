use crate::avl_tree::node::Node;
use crate::entry::{Key, Record};
use crate::error::InvariantError;
use crate::layout::{Placement, Side};
use std::cmp::{self, Ordering};

pub type Tree<R> = Option<Box<Node<R>>>;

pub fn height<R>(tree: &Tree<R>) -> usize {
    match tree {
        None => 0,
        Some(ref node) => node.height,
    }
}

fn balance_factor<R>(tree: &Tree<R>) -> i64 {
    match tree {
        None => 0,
        Some(ref node) => node.balance(),
    }
}

fn rotate_left<R: Record>(mut node: Box<Node<R>>) -> Box<Node<R>> {
    trace!("avl: rotating {} left", node.key());
    let mut child = match node.right.take() {
        Some(child) => child,
        None => unreachable!(),
    };
    node.right = child.left.take();
    node.update();
    child.left = Some(node);
    child.update();
    child
}

fn rotate_right<R: Record>(mut node: Box<Node<R>>) -> Box<Node<R>> {
    trace!("avl: rotating {} right", node.key());
    let mut child = match node.left.take() {
        Some(child) => child,
        None => unreachable!(),
    };
    node.left = child.right.take();
    node.update();
    child.right = Some(node);
    child.update();
    child
}

// Only one subtree grew, and it grew towards `key`, so the key alone picks the rotation.
fn balance_inserted<R: Record>(tree: &mut Tree<R>, key: Key) {
    let mut node = match tree.take() {
        Some(node) => node,
        None => return,
    };

    node.update();
    let balance = node.balance();

    if balance > 1 {
        let inner = node.left.as_ref().map_or(false, |child| key > child.key());
        if inner {
            node.left = node.left.take().map(rotate_left);
        }
        node = rotate_right(node);
    } else if balance < -1 {
        let inner = node.right.as_ref().map_or(false, |child| key < child.key());
        if inner {
            node.right = node.right.take().map(rotate_right);
        }
        node = rotate_left(node);
    }

    *tree = Some(node);
}

// After a removal both subtrees may have shrunk along the way, so the rotation is chosen by the
// balance factor of the taller child.
fn balance<R: Record>(tree: &mut Tree<R>) {
    let mut node = match tree.take() {
        Some(node) => node,
        None => return,
    };

    node.update();
    let balance = node.balance();

    if balance > 1 {
        if balance_factor(&node.left) < 0 {
            node.left = node.left.take().map(rotate_left);
        }
        node = rotate_right(node);
    } else if balance < -1 {
        if balance_factor(&node.right) > 0 {
            node.right = node.right.take().map(rotate_right);
        }
        node = rotate_left(node);
    }

    *tree = Some(node);
}

// precondition: there exists a minimum node in the tree
fn remove_min<R: Record>(tree: &mut Tree<R>) -> Box<Node<R>> {
    let has_left = match tree {
        Some(ref node) => node.left.is_some(),
        None => unreachable!(),
    };

    if has_left {
        let min = match tree {
            Some(ref mut node) => remove_min(&mut node.left),
            None => unreachable!(),
        };
        balance(tree);
        return min;
    }

    match tree.take() {
        Some(mut node) => {
            *tree = node.right.take();
            node
        },
        None => unreachable!(),
    }
}

/// Inserts `record` unless its key is already present, in which case the record is handed back
/// and the tree is left untouched.
pub fn insert<R: Record>(tree: &mut Tree<R>, record: R) -> Option<R> {
    let key = record.key();
    let ret = match tree {
        Some(ref mut node) => match key.cmp(&node.key()) {
            Ordering::Less => insert(&mut node.left, record),
            Ordering::Greater => insert(&mut node.right, record),
            Ordering::Equal => return Some(record),
        },
        None => {
            *tree = Some(Box::new(Node::new(record)));
            return None;
        },
    };

    if ret.is_none() {
        balance_inserted(tree, key);
    }
    ret
}

pub fn remove<R: Record>(tree: &mut Tree<R>, key: Key) -> Option<R> {
    let ret = match tree.take() {
        Some(mut node) => match key.cmp(&node.key()) {
            Ordering::Less => {
                let ret = remove(&mut node.left, key);
                *tree = Some(node);
                ret
            },
            Ordering::Greater => {
                let ret = remove(&mut node.right, key);
                *tree = Some(node);
                ret
            },
            Ordering::Equal => {
                let Node {
                    record,
                    left,
                    right,
                    ..
                } = *node;
                match (left, right) {
                    (None, right) => *tree = right,
                    (left, None) => *tree = left,
                    (left, mut right) => {
                        let mut successor = remove_min(&mut right);
                        successor.left = left;
                        successor.right = right;
                        *tree = Some(successor);
                    },
                }
                Some(record)
            },
        },
        None => return None,
    };

    if ret.is_some() {
        balance(tree);
    }
    ret
}

pub fn get<R: Record>(tree: &Tree<R>, key: Key) -> Option<&R> {
    tree.as_ref().and_then(|node| match key.cmp(&node.key()) {
        Ordering::Less => get(&node.left, key),
        Ordering::Greater => get(&node.right, key),
        Ordering::Equal => Some(&node.record),
    })
}

pub fn min<R>(tree: &Tree<R>) -> Option<&R> {
    tree.as_ref().map(|node| {
        let mut curr = node;
        while let Some(ref left_node) = curr.left {
            curr = left_node;
        }
        &curr.record
    })
}

pub fn max<R>(tree: &Tree<R>) -> Option<&R> {
    tree.as_ref().map(|node| {
        let mut curr = node;
        while let Some(ref right_node) = curr.right {
            curr = right_node;
        }
        &curr.record
    })
}

pub fn layout<R: Record>(tree: &Tree<R>, path: &mut Vec<Side>, placements: &mut Vec<Placement>) {
    if let Some(ref node) = tree {
        path.push(Side::Right);
        layout(&node.right, path, placements);
        path.pop();

        placements.push(Placement {
            key: node.key(),
            path: path.clone(),
        });

        path.push(Side::Left);
        layout(&node.left, path, placements);
        path.pop();
    }
}

/// Checks ordering, stored heights and balance factors below `tree`, returning the number of
/// nodes visited.
pub fn validate<R: Record>(
    tree: &Tree<R>,
    lower: Option<Key>,
    upper: Option<Key>,
) -> Result<usize, InvariantError> {
    let node = match tree {
        Some(ref node) => node,
        None => return Ok(0),
    };

    let key = node.key();
    if lower.map_or(false, |lower| key <= lower) || upper.map_or(false, |upper| key >= upper) {
        return Err(InvariantError::Unordered { key });
    }

    let left_count = validate(&node.left, lower, Some(key))?;
    let right_count = validate(&node.right, Some(key), upper)?;

    let actual = cmp::max(height(&node.left), height(&node.right)) + 1;
    if node.height != actual {
        return Err(InvariantError::HeightMismatch {
            key,
            stored: node.height,
            actual,
        });
    }

    let balance = node.balance();
    if balance.abs() > 1 {
        return Err(InvariantError::Unbalanced { key, balance });
    }

    Ok(left_count + right_count + 1)
}

#[cfg(test)]
mod tests {
    use super::{insert, remove, validate, Tree};

    fn keys(tree: &Tree<i64>) -> Vec<i64> {
        let mut ret = Vec::new();
        if let Some(ref node) = tree {
            ret.extend(keys(&node.left));
            ret.push(node.record);
            ret.extend(keys(&node.right));
        }
        ret
    }

    #[test]
    fn test_left_right_rotation() {
        let mut tree: Tree<i64> = None;
        insert(&mut tree, 30);
        insert(&mut tree, 10);
        insert(&mut tree, 20);

        let root = tree.as_ref().unwrap();
        assert_eq!(root.record, 20);
        assert_eq!(root.height, 2);
        assert_eq!(validate(&tree, None, None), Ok(3));
    }

    #[test]
    fn test_right_left_rotation() {
        let mut tree: Tree<i64> = None;
        insert(&mut tree, 10);
        insert(&mut tree, 30);
        insert(&mut tree, 20);

        assert_eq!(tree.as_ref().unwrap().record, 20);
        assert_eq!(validate(&tree, None, None), Ok(3));
    }

    #[test]
    fn test_remove_rebalances_through_successor_path() {
        let mut tree: Tree<i64> = None;
        for key in &[50, 30, 70, 20, 40, 60, 80, 65] {
            insert(&mut tree, *key);
        }

        assert_eq!(remove(&mut tree, 50), Some(50));
        assert_eq!(tree.as_ref().unwrap().record, 60);
        assert_eq!(validate(&tree, None, None), Ok(7));

        assert_eq!(remove(&mut tree, 20), Some(20));
        assert_eq!(remove(&mut tree, 40), Some(40));
        assert_eq!(validate(&tree, None, None), Ok(5));
        assert_eq!(keys(&tree), vec![30, 60, 65, 70, 80]);
    }

    #[test]
    fn test_remove_missing_leaves_tree_untouched() {
        let mut tree: Tree<i64> = None;
        insert(&mut tree, 1);
        insert(&mut tree, 2);
        assert_eq!(remove(&mut tree, 3), None);
        assert_eq!(keys(&tree), vec![1, 2]);
        assert_eq!(tree.as_ref().unwrap().height, 2);
    }
}
