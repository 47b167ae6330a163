use std::{
    collections::VecDeque,
    fmt::{self, Debug, Display},
    io::{self, Write},
    marker::PhantomData,
    mem,
    ptr::NonNull,
};

use super::{
    iter::{Cursor, IntoIter, Iter, ReverseCursor},
    node::{free_subtree, Link, Node},
    removal::{RemovalFlags, RemovalResult},
    tree_stats::TreeStats,
    tree_traits::{Comparator, DefaultComparator},
};

/// An unbalanced binary search tree.
///
/// Elements smaller than a node go to its left, everything else (including
/// equal elements) goes to its right, so duplicates come out of an in-order
/// walk in insertion order.
pub struct Tree<T, C = DefaultComparator<T>> {
    root: Link<T>,
    comparator: C,
    marker: PhantomData<Box<Node<T>>>,
}

// SAFETY: the raw links only point into nodes owned by the same tree, so
// sending or sharing the tree is exactly as safe as for its elements.
unsafe impl<T: Send, C: Send> Send for Tree<T, C> {}
unsafe impl<T: Sync, C: Sync> Sync for Tree<T, C> {}

/// Convenient comparison functions generated from the comparator
impl<T, C: Comparator<T>> Tree<T, C> {
    pub fn comparator(&self) -> &C {
        &self.comparator
    }

    fn less(&self, a: &T, b: &T) -> bool {
        self.comparator.less(a, b)
    }

    fn equal(&self, a: &T, b: &T) -> bool {
        self.comparator.equal(a, b)
    }
}

impl<T, C> Drop for Tree<T, C> {
    fn drop(&mut self) {
        // SAFETY: the root link owns every node of the tree.
        unsafe { free_subtree(self.root.take()) };
    }
}

/// Construction
impl<T, C: Comparator<T>> Tree<T, C> {
    pub fn new() -> Self {
        Self::with_comparator(C::new())
    }

    pub fn with_comparator(comparator: C) -> Self {
        Self {
            root: None,
            comparator,
            marker: PhantomData,
        }
    }
}

/// Item count and shape, computed on demand
impl<T, C> Tree<T, C> {
    #[inline]
    pub(crate) fn root_node(&self) -> Option<&Node<T>> {
        // SAFETY: the root is alive for as long as the tree is borrowed.
        self.root.map(|p| unsafe { p.as_ref() })
    }

    pub fn size(&self) -> usize {
        let mut count = 0;
        self.preorder(|_| count += 1);
        count
    }

    pub fn len(&self) -> usize {
        self.size()
    }

    pub fn is_empty(&self) -> bool {
        self.root.is_none()
    }

    /// Number of nodes on the longest root-to-leaf path; 0 for an empty tree.
    pub fn height(&self) -> usize {
        let mut height = 0;
        let mut level: Vec<&Node<T>> = self.root_node().into_iter().collect();
        while !level.is_empty() {
            height += 1;
            level = level
                .into_iter()
                .flat_map(|n| n.left().into_iter().chain(n.right()))
                .collect();
        }
        height
    }

    pub fn stats(&self) -> TreeStats {
        let mut stats = TreeStats::new();
        let mut pending: Vec<(&Node<T>, usize)> =
            self.root_node().map(|n| (n, 1)).into_iter().collect();
        while let Some((node, depth)) = pending.pop() {
            stats.size += 1;
            stats.height = stats.height.max(depth);
            if node.is_leaf() {
                stats.leaves += 1;
            }
            pending.extend(node.right().map(|n| (n, depth + 1)));
            pending.extend(node.left().map(|n| (n, depth + 1)));
        }
        stats
    }

    pub fn first(&self) -> Option<&T> {
        self.root_node().map(|n| n.leftmost().value())
    }

    pub fn last(&self) -> Option<&T> {
        self.root_node().map(|n| n.rightmost().value())
    }
}

/// Lookup by descending from the root
impl<T, C: Comparator<T>> Tree<T, C> {
    pub fn contains(&self, value: &T) -> bool {
        self.find_node(value).is_some()
    }

    /// Number of elements equal to `value`. Equal elements all sit on the
    /// search path, so this stays O(height).
    pub fn count(&self, value: &T) -> usize {
        let mut num = 0;
        let mut curr = self.root_node();
        while let Some(node) = curr {
            if self.equal(value, &node.value) {
                num += 1;
            }
            curr = self.child_towards(node, value);
        }
        num
    }

    /// Cursor on the first element equal to `value`, or end.
    pub fn find(&self, value: &T) -> Cursor<'_, T> {
        match self.find_node(value) {
            Some(node) => Cursor::at(self.root_node(), node),
            None => self.end(),
        }
    }

    fn find_node(&self, value: &T) -> Option<&Node<T>> {
        let mut curr = self.root_node();
        while let Some(node) = curr {
            if self.equal(value, &node.value) {
                return Some(node);
            }
            curr = self.child_towards(node, value);
        }
        None
    }

    #[inline]
    fn child_towards<'a>(&self, node: &'a Node<T>, value: &T) -> Option<&'a Node<T>> {
        if self.less(value, &node.value) {
            node.left()
        } else {
            node.right()
        }
    }
}

/// Insertion
impl<T, C: Comparator<T>> Tree<T, C> {
    /// Attach `value` at the first empty slot on its search path. Never
    /// rebalances, so sorted input degrades the tree into a chain.
    pub fn insert(&mut self, value: T) {
        let mut parent: Link<T> = None;
        let mut curr = self.root;
        let mut go_left = false;
        let mut depth = 0usize;

        while let Some(node) = curr {
            // SAFETY: every link of this tree points to a live node.
            let node_ref = unsafe { node.as_ref() };
            go_left = self.less(&value, &node_ref.value);
            curr = if go_left { node_ref.left } else { node_ref.right };
            parent = Some(node);
            depth += 1;
        }

        log::debug!("BinaryTree::insert at depth {}", depth);
        let new_node = Node::new_leaked(value, parent);
        match parent {
            None => self.root = Some(new_node),
            // SAFETY: `parent` is a live node of this tree and `&mut self`
            // rules out any outstanding borrow of it.
            Some(p) => unsafe {
                if go_left {
                    (*p.as_ptr()).left = Some(new_node);
                } else {
                    (*p.as_ptr()).right = Some(new_node);
                }
            },
        }
    }
}

/// Removal
impl<T, C: Comparator<T>> Tree<T, C> {
    /// Removes one element equal to `value`. Returns false when there was
    /// none, in which case the tree is untouched.
    pub fn remove(&mut self, value: &T) -> bool {
        self.remove_one(value).found()
    }

    /// Removes one element equal to `value` and hands it back.
    pub fn take(&mut self, value: &T) -> Option<T> {
        self.remove_one(value).value
    }

    fn remove_one(&mut self, value: &T) -> RemovalResult<T> {
        let target = match self.find_ptr(value) {
            Some(target) => target,
            None => {
                log::debug!("Could not find value to remove.");
                return RemovalResult::not_found();
            }
        };

        // SAFETY: `target` is a live node of this tree and `&mut self` rules
        // out any other borrow of the node graph.
        let (left, right) = unsafe { ((*target.as_ptr()).left, (*target.as_ptr()).right) };

        let result = match (left, right) {
            (Some(_), Some(right)) => {
                // SAFETY: `right` is a live child of `target`.
                let successor = unsafe { Node::leftmost_ptr(right) };
                // SAFETY: the successor has no left child and is a strict
                // descendant of `target`, which therefore stays in the tree.
                unsafe {
                    let (flags, spliced) = self.splice_out(successor);
                    let old = mem::replace(&mut (*target.as_ptr()).value, spliced.value);
                    RemovalResult::new_with_value(flags | RemovalFlags::Successor, old)
                }
            }
            _ => {
                // SAFETY: `target` has at most one child.
                let (flags, spliced) = unsafe { self.splice_out(target) };
                RemovalResult::new_with_value(flags, spliced.value)
            }
        };

        log::debug!(
            "BinaryTree::remove spliced: {}, pulled successor: {}, new root link: {}",
            result.has(RemovalFlags::Splice),
            result.has(RemovalFlags::Successor),
            result.has(RemovalFlags::Root)
        );
        result
    }

    fn find_ptr(&self, value: &T) -> Link<T> {
        let mut curr = self.root;
        while let Some(node) = curr {
            // SAFETY: every link of this tree points to a live node.
            let node_ref = unsafe { node.as_ref() };
            if self.equal(value, &node_ref.value) {
                return Some(node);
            }
            curr = if self.less(value, &node_ref.value) {
                node_ref.left
            } else {
                node_ref.right
            };
        }
        None
    }
}

/// Node graph surgery
impl<T, C> Tree<T, C> {
    /// Replaces `node` in its parent (or the root link) by its only child, or
    /// by nothing, and hands back the detached node.
    ///
    /// # Safety
    ///
    /// `node` must be a live node of this tree with at most one child.
    unsafe fn splice_out(&mut self, node: NonNull<Node<T>>) -> (RemovalFlags, Box<Node<T>>) {
        let n = node.as_ptr();
        debug_assert!((*n).left.is_none() || (*n).right.is_none());
        let parent = (*n).parent;
        let child = (*n).left.or((*n).right);

        if let Some(c) = child {
            (*c.as_ptr()).parent = parent;
        }

        let flags = match parent {
            None => {
                self.root = child;
                RemovalFlags::Splice | RemovalFlags::Root
            }
            Some(p) => {
                let p = p.as_ptr();
                if (*p).left == Some(node) {
                    (*p).left = child;
                } else {
                    (*p).right = child;
                }
                RemovalFlags::Splice
            }
        };

        let mut detached = Node::into_boxed(node);
        detached.left = None;
        detached.right = None;
        detached.parent = None;
        (flags, detached)
    }
}

/// Traversals. Each walk keeps its own stack or queue, so degenerate trees
/// are as safe to visit as balanced ones.
impl<T, C> Tree<T, C> {
    pub fn inorder<F: FnMut(&T)>(&self, mut visit: F) {
        let mut stack: Vec<&Node<T>> = Vec::new();
        let mut curr = self.root_node();
        loop {
            while let Some(node) = curr {
                stack.push(node);
                curr = node.left();
            }
            match stack.pop() {
                Some(node) => {
                    visit(&node.value);
                    curr = node.right();
                }
                None => break,
            }
        }
    }

    pub fn preorder<F: FnMut(&T)>(&self, mut visit: F) {
        let mut stack: Vec<&Node<T>> = self.root_node().into_iter().collect();
        while let Some(node) = stack.pop() {
            visit(&node.value);
            stack.extend(node.right());
            stack.extend(node.left());
        }
    }

    pub fn postorder<F: FnMut(&T)>(&self, mut visit: F) {
        // (node, children already pushed)
        let mut stack: Vec<(&Node<T>, bool)> =
            self.root_node().map(|n| (n, false)).into_iter().collect();
        while let Some((node, expanded)) = stack.pop() {
            if expanded {
                visit(&node.value);
            } else {
                stack.push((node, true));
                stack.extend(node.right().map(|n| (n, false)));
                stack.extend(node.left().map(|n| (n, false)));
            }
        }
    }

    pub fn levelorder<F: FnMut(&T)>(&self, mut visit: F) {
        let mut queue: VecDeque<&Node<T>> = self.root_node().into_iter().collect();
        while let Some(node) = queue.pop_front() {
            visit(&node.value);
            queue.extend(node.left());
            queue.extend(node.right());
        }
    }
}

/// Cursors and iterators
impl<T, C> Tree<T, C> {
    pub fn begin(&self) -> Cursor<'_, T> {
        Cursor::new(self.root_node())
    }

    pub fn end(&self) -> Cursor<'_, T> {
        Cursor::end(self.root_node())
    }

    pub fn rbegin(&self) -> ReverseCursor<'_, T> {
        ReverseCursor::new(Cursor::last(self.root_node()))
    }

    pub fn rend(&self) -> ReverseCursor<'_, T> {
        ReverseCursor::new(self.end())
    }

    pub fn iter(&self) -> Iter<'_, T> {
        Iter::new(self.root_node())
    }
}

/// Lifecycle
impl<T, C> Tree<T, C> {
    pub fn clear(&mut self) {
        // SAFETY: the root link owns every node of the tree.
        let freed = unsafe { free_subtree(self.root.take()) };
        log::debug!("BinaryTree::clear freed {} nodes", freed);
    }

    /// Exchanges the contents of two trees without touching any node.
    pub fn swap(&mut self, other: &mut Self) {
        mem::swap(&mut self.root, &mut other.root);
        mem::swap(&mut self.comparator, &mut other.comparator);
    }

    /// Checks the ordering and parent-link invariants of the whole tree.
    pub fn verify(&self) -> bool
    where
        C: Comparator<T>,
    {
        let root = match self.root_node() {
            Some(root) => root,
            None => return true,
        };
        if root.parent.is_some() {
            return false;
        }

        let mut stack = vec![root];
        while let Some(node) = stack.pop() {
            if let Some(l) = node.left() {
                if !l.parent().map_or(false, |p| std::ptr::eq(p, node))
                    || !self.less(&l.value, &node.value)
                {
                    return false;
                }
                stack.push(l);
            }
            if let Some(r) = node.right() {
                if !r.parent().map_or(false, |p| std::ptr::eq(p, node))
                    || self.less(&r.value, &node.value)
                {
                    return false;
                }
                stack.push(r);
            }
        }

        let mut prev: Option<&T> = None;
        self.iter().all(|value| {
            let ordered = prev.map_or(true, |p| !self.less(value, p));
            prev = Some(value);
            ordered
        })
    }
}

impl<T: Clone, C: Clone> Clone for Tree<T, C> {
    /// Deep copy with fresh parent links, built without recursion.
    fn clone(&self) -> Self {
        let mut tree = Self {
            root: None,
            comparator: self.comparator.clone(),
            marker: PhantomData,
        };

        let mut pending: Vec<(&Node<T>, NonNull<Node<T>>)> = Vec::new();
        if let Some(src) = self.root_node() {
            let dst = Node::new_leaked(src.value.clone(), None);
            tree.root = Some(dst);
            pending.push((src, dst));
        }

        while let Some((src, dst)) = pending.pop() {
            // SAFETY: `dst` is a node of `tree`, which nothing else can see
            // yet. Each child is linked before the next clone can panic, so
            // dropping `tree` mid-copy frees everything built so far.
            if let Some(l) = src.left() {
                let child = Node::new_leaked(l.value.clone(), Some(dst));
                unsafe { (*dst.as_ptr()).left = Some(child) };
                pending.push((l, child));
            }
            if let Some(r) = src.right() {
                let child = Node::new_leaked(r.value.clone(), Some(dst));
                unsafe { (*dst.as_ptr()).right = Some(child) };
                pending.push((r, child));
            }
        }

        tree
    }

    /// Copy-assignment: build the copy first, then swap it in.
    fn clone_from(&mut self, source: &Self) {
        let mut copy = source.clone();
        self.swap(&mut copy);
    }
}

impl<T, C: Comparator<T>> Default for Tree<T, C> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T, C: Comparator<T>> FromIterator<T> for Tree<T, C> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let mut tree = Self::new();
        tree.extend(iter);
        tree
    }
}

impl<T, C: Comparator<T>> Extend<T> for Tree<T, C> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        for value in iter {
            self.insert(value);
        }
    }
}

impl<T, C: Comparator<T>, const N: usize> From<[T; N]> for Tree<T, C> {
    fn from(values: [T; N]) -> Self {
        values.into_iter().collect()
    }
}

impl<'a, T, C> IntoIterator for &'a Tree<T, C> {
    type Item = &'a T;
    type IntoIter = Iter<'a, T>;

    fn into_iter(self) -> Iter<'a, T> {
        self.iter()
    }
}

impl<T, C> IntoIterator for Tree<T, C> {
    type Item = T;
    type IntoIter = IntoIter<T>;

    fn into_iter(mut self) -> IntoIter<T> {
        IntoIter::new(self.root.take())
    }
}

impl<T: PartialEq, C> PartialEq for Tree<T, C> {
    fn eq(&self, other: &Self) -> bool {
        self.iter().eq(other.iter())
    }
}

impl<T: Eq, C> Eq for Tree<T, C> {}

/// Debug
impl<T: Display, C> Tree<T, C> {
    /// Writes the in-order elements, space separated, followed by a newline.
    pub fn write_tree<W: Write>(&self, out: &mut W) -> io::Result<()> {
        writeln!(out, "{}", self)
    }

    pub fn print_tree(&self) -> io::Result<()> {
        let stdout = io::stdout();
        let mut out = stdout.lock();
        self.write_tree(&mut out)
    }
}

/// Display
impl<T: Display, C> Display for Tree<T, C> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut values = self.iter();
        if let Some(first) = values.next() {
            write!(f, "{}", first)?;
            for value in values {
                write!(f, " {}", value)?;
            }
        }
        Ok(())
    }
}

impl<T: Debug, C> Debug for Tree<T, C> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.iter()).finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tree_base::{iter::TreeCursor, tree_traits::ReverseComparator, DefaultTree};

    fn init_logger() {
        let _ = env_logger::builder().is_test(true).try_init();
    }

    fn scenario_a() -> DefaultTree<i32> {
        [5, 3, 8, 1, 4, 7, 9].into()
    }

    fn inorder_vec<T: Clone, C>(tree: &Tree<T, C>) -> Vec<T> {
        let mut out = Vec::new();
        tree.inorder(|v| out.push(v.clone()));
        out
    }

    #[test]
    fn inorder_is_sorted() {
        let tree = scenario_a();
        assert_eq!(inorder_vec(&tree), vec![1, 3, 4, 5, 7, 8, 9]);
        assert!(tree.verify());
    }

    #[test]
    fn traversal_orders() {
        let tree = scenario_a();

        let mut pre = Vec::new();
        tree.preorder(|v| pre.push(*v));
        assert_eq!(pre, vec![5, 3, 1, 4, 8, 7, 9]);

        let mut post = Vec::new();
        tree.postorder(|v| post.push(*v));
        assert_eq!(post, vec![1, 4, 3, 7, 9, 8, 5]);

        let mut level = Vec::new();
        tree.levelorder(|v| level.push(*v));
        assert_eq!(level, vec![5, 3, 8, 1, 4, 7, 9]);
    }

    #[test]
    fn traversals_of_empty_tree_visit_nothing() {
        let tree = DefaultTree::<i32>::new();
        let mut visited = 0;
        tree.inorder(|_| visited += 1);
        tree.preorder(|_| visited += 1);
        tree.postorder(|_| visited += 1);
        tree.levelorder(|_| visited += 1);
        assert_eq!(visited, 0);
    }

    #[test]
    fn remove_with_two_children_pulls_successor() {
        init_logger();
        let mut tree = scenario_a();

        let result = tree.remove_one(&5);
        assert!(result.found());
        assert!(result.has(RemovalFlags::Successor));
        assert!(result.has(RemovalFlags::Splice));
        assert!(!result.has(RemovalFlags::Root));
        assert_eq!(result.value, Some(5));

        assert_eq!(inorder_vec(&tree), vec![1, 3, 4, 7, 8, 9]);
        // the root node kept its place and now holds the successor
        assert_eq!(tree.root_node().map(Node::value), Some(&7));
        assert!(tree.verify());
    }

    #[test]
    fn remove_leaf_and_single_child() {
        let mut tree = scenario_a();

        assert!(tree.remove(&1));
        assert_eq!(inorder_vec(&tree), vec![3, 4, 5, 7, 8, 9]);

        // 3 now has only its right child
        assert!(tree.remove(&3));
        assert_eq!(inorder_vec(&tree), vec![4, 5, 7, 8, 9]);
        assert!(tree.verify());
    }

    #[test]
    fn remove_root_with_one_child_rewrites_root() {
        let mut tree: DefaultTree<i32> = [1, 2, 3].into();
        let result = tree.remove_one(&1);
        assert!(result.has(RemovalFlags::Root));
        assert_eq!(tree.root_node().map(Node::value), Some(&2));
        assert!(tree.root_node().unwrap().parent.is_none());
        assert!(tree.verify());

        assert!(tree.remove(&2));
        assert!(tree.remove(&3));
        assert!(tree.is_empty());
    }

    #[test]
    fn remove_absent_is_a_no_op() {
        let mut tree = scenario_a();
        let result = tree.remove_one(&6);
        assert!(!result.found());
        assert!(result.value.is_none());
        assert_eq!(tree.size(), 7);

        let mut empty = DefaultTree::<i32>::new();
        assert!(!empty.remove(&1));
    }

    #[test]
    fn duplicates_go_right_and_keep_insertion_order() {
        #[derive(Clone, Debug)]
        struct Tagged(i32, &'static str);
        impl PartialEq for Tagged {
            fn eq(&self, other: &Self) -> bool {
                self.0 == other.0
            }
        }
        impl PartialOrd for Tagged {
            fn partial_cmp(&self, other: &Self) -> Option<std::cmp::Ordering> {
                self.0.partial_cmp(&other.0)
            }
        }

        let mut tree = DefaultTree::new();
        tree.insert(Tagged(5, "first"));
        tree.insert(Tagged(5, "second"));

        let root = tree.root_node().unwrap();
        assert_eq!(root.value().1, "first");
        assert!(root.left().is_none());
        assert_eq!(root.right().map(|n| n.value().1), Some("second"));

        let tags: Vec<_> = tree.iter().map(|t| t.1).collect();
        assert_eq!(tags, vec!["first", "second"]);
        assert_eq!(tree.count(&Tagged(5, "")), 2);
    }

    #[test]
    fn count_follows_search_path() {
        let tree: DefaultTree<i32> = [5, 7, 5, 5, 3].into();
        assert_eq!(tree.count(&5), 3);
        assert_eq!(tree.count(&7), 1);
        assert_eq!(tree.count(&4), 0);
    }

    #[test]
    fn size_and_height() {
        let mut tree = DefaultTree::new();
        assert_eq!(tree.size(), 0);
        assert_eq!(tree.height(), 0);

        tree.insert(1);
        assert_eq!(tree.size(), 1);
        assert_eq!(tree.height(), 1);

        let tree = scenario_a();
        assert_eq!(tree.size(), 7);
        assert_eq!(tree.height(), 3);
        assert_eq!(
            tree.stats(),
            TreeStats {
                size: 7,
                height: 3,
                leaves: 4
            }
        );
        assert!(tree.stats().is_minimal_height());
    }

    #[test]
    #[cfg_attr(miri, ignore)]
    fn degenerate_chain_does_not_recurse() {
        init_logger();
        let n = 10_000;
        let mut tree: DefaultTree<u32> = (0..n).collect();
        assert_eq!(tree.height(), n as usize);
        assert_eq!(tree.size(), n as usize);
        assert!(tree.stats().is_degenerate());

        let copy = tree.clone();
        assert_eq!(copy.height(), n as usize);

        let mut post = 0;
        copy.postorder(|_| post += 1);
        assert_eq!(post, n as usize);

        tree.clear();
        assert!(tree.is_empty());
        drop(copy);
    }

    #[test]
    fn clone_is_independent() {
        let mut original = scenario_a();
        let mut copy = original.clone();
        assert_eq!(copy, original);
        assert!(copy.verify());

        copy.insert(6);
        copy.remove(&1);
        assert_eq!(inorder_vec(&original), vec![1, 3, 4, 5, 7, 8, 9]);

        original.remove(&9);
        assert_eq!(inorder_vec(&copy), vec![3, 4, 5, 6, 7, 8, 9]);
    }

    #[test]
    fn clone_from_replaces_contents() {
        let source = scenario_a();
        let mut target: DefaultTree<i32> = [100, 200].into();
        target.clone_from(&source);
        assert_eq!(target, source);
        assert!(target.verify());
    }

    #[test]
    fn take_leaves_source_empty() {
        let mut source = scenario_a();
        let moved = mem::take(&mut source);

        assert_eq!(source.size(), 0);
        assert!(source.begin() == source.end());
        assert_eq!(inorder_vec(&moved), vec![1, 3, 4, 5, 7, 8, 9]);

        // the emptied tree is still usable
        source.insert(42);
        assert_eq!(inorder_vec(&source), vec![42]);
    }

    #[test]
    fn swap_exchanges_contents() {
        let mut a = scenario_a();
        let mut b: DefaultTree<i32> = [10].into();
        a.swap(&mut b);
        assert_eq!(inorder_vec(&a), vec![10]);
        assert_eq!(inorder_vec(&b), vec![1, 3, 4, 5, 7, 8, 9]);
        assert!(a.verify() && b.verify());
    }

    #[test]
    fn clear_resets_to_empty() {
        let mut tree = scenario_a();
        tree.clear();
        assert_eq!(tree.size(), 0);
        assert!(tree.begin() == tree.end());
        assert_eq!(tree.first(), None);
    }

    #[test]
    fn take_returns_removed_element() {
        let mut tree: DefaultTree<String> = ["m", "c", "x"].iter().map(|s| s.to_string()).collect();
        assert_eq!(tree.take(&"m".to_string()), Some("m".to_string()));
        assert_eq!(tree.take(&"m".to_string()), None);
        assert_eq!(tree.to_string(), "c x");
    }

    #[test]
    fn find_positions_cursor() {
        let tree = scenario_a();
        let mut cursor = tree.find(&4);
        assert_eq!(cursor.get(), Some(&4));
        cursor.forward();
        assert_eq!(cursor.get(), Some(&5));
        assert!(tree.find(&6) == tree.end());
    }

    #[test]
    fn first_and_last() {
        let tree = scenario_a();
        assert_eq!(tree.first(), Some(&1));
        assert_eq!(tree.last(), Some(&9));
    }

    #[test]
    fn custom_comparator_orders_descending() {
        let mut tree: Tree<i32, ReverseComparator<DefaultComparator<i32>>> = Tree::new();
        tree.extend([5, 3, 8, 1]);
        assert_eq!(inorder_vec(&tree), vec![8, 5, 3, 1]);
        assert!(tree.contains(&3));
        assert!(tree.remove(&5));
        assert_eq!(inorder_vec(&tree), vec![8, 3, 1]);
        assert!(tree.verify());
    }

    #[test]
    fn write_tree_to_sink() {
        let tree = scenario_a();
        let mut out = Vec::new();
        tree.write_tree(&mut out).unwrap();
        assert_eq!(String::from_utf8(out).unwrap(), "1 3 4 5 7 8 9\n");

        let mut out = Vec::new();
        DefaultTree::<i32>::new().write_tree(&mut out).unwrap();
        assert_eq!(out, b"\n");

        assert_eq!(format!("{:?}", tree), "[1, 3, 4, 5, 7, 8, 9]");
    }
}
