//! Read-only export of a tree's shape and the sideways text view built from it.

use crate::entry::Key;

/// Which child slot of its parent a node occupies.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub enum Side {
    Left,
    Right,
}

impl Side {
    pub fn opposite(self) -> Side {
        match self {
            Side::Left => Side::Right,
            Side::Right => Side::Left,
        }
    }
}

/// The position of a single key in a snapshot of a tree.
///
/// `path` lists the child sides taken from the root down to the node and is empty for the root.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Placement {
    pub key: Key,
    pub path: Vec<Side>,
}

impl Placement {
    pub fn depth(&self) -> usize {
        self.path.len()
    }

    /// Returns `None` for the root.
    pub fn side(&self) -> Option<Side> {
        self.path.last().cloned()
    }
}

const EMPTY_RULE: &str = "----------------------------------------------";
const RULE: &str = "----------------------------------";

/// Renders placements given in display order (right subtree, node, left subtree) as a tree lying
/// on its side, with the root in the leftmost column.
///
/// # Examples
///
/// ```
/// use balanced_trees::avl_tree::AvlMap;
/// use balanced_trees::layout;
///
/// let mut map = AvlMap::new();
/// map.insert(2i64);
/// map.insert(1);
/// map.insert(3);
///
/// let text = layout::render("AVL TREE", &map.layout());
/// assert_eq!(
///     text,
///     "------------ AVL TREE ------------\n\
///      ┌── 3\n\
///      2\n\
///      └── 1\n\
///      ----------------------------------\n",
/// );
/// ```
pub fn render(title: &str, placements: &[Placement]) -> String {
    let mut ret = format!("------------ {} ------------\n", title);
    if placements.is_empty() {
        ret.push_str("Tree is empty.\n");
        ret.push_str(EMPTY_RULE);
        ret.push('\n');
        return ret;
    }

    for placement in placements {
        ret.push_str(&render_row(placement));
        ret.push('\n');
    }
    ret.push_str(RULE);
    ret.push('\n');
    ret
}

fn render_row(placement: &Placement) -> String {
    let path = &placement.path;
    let side = match path.last() {
        Some(side) => *side,
        None => return placement.key.to_string(),
    };

    let mut row = String::new();
    for pair in path.windows(2) {
        if pair[0] == pair[1] {
            row.push_str("    ");
        } else {
            row.push_str("│   ");
        }
    }
    row.push_str(match side {
        Side::Left => "└── ",
        Side::Right => "┌── ",
    });
    row.push_str(&placement.key.to_string());
    row
}
