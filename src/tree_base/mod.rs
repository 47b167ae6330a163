pub mod iter;
mod macros;
mod node;
mod removal;
pub mod tree;
pub mod tree_stats;
pub mod tree_traits;

use self::{tree::Tree, tree_traits::DefaultComparator};

pub type DefaultTree<T> = Tree<T, DefaultComparator<T>>;
