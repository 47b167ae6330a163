use std::ptr::{self, NonNull};

pub(crate) type Link<T> = Option<NonNull<Node<T>>>;

/// A single element of the tree. Every link is a raw pointer into a node
/// allocated by [`Node::new_leaked`]; the owning tree frees them through
/// [`free_subtree`] or [`Node::into_boxed`].
pub struct Node<T> {
    pub(crate) value: T,
    pub(crate) left: Link<T>,
    pub(crate) right: Link<T>,
    pub(crate) parent: Link<T>,
}

impl<T> Node<T> {
    pub(crate) fn new_leaked(value: T, parent: Link<T>) -> NonNull<Self> {
        let node = Box::new(Self {
            value,
            left: None,
            right: None,
            parent,
        });
        // SAFETY: `Box::into_raw` never returns null.
        unsafe { NonNull::new_unchecked(Box::into_raw(node)) }
    }

    /// Takes back ownership of a node allocated by [`Node::new_leaked`].
    ///
    /// # Safety
    ///
    /// `node` must be live, unlinked from any tree, and not borrowed.
    pub(crate) unsafe fn into_boxed(node: NonNull<Self>) -> Box<Self> {
        Box::from_raw(node.as_ptr())
    }

    #[inline]
    pub fn value(&self) -> &T {
        &self.value
    }

    // SAFETY for the three accessors below: links are only written by the
    // owning tree under `&mut`, so while `self` is borrowed every node it links
    // to is alive and not mutated.

    #[inline]
    pub fn left(&self) -> Option<&Node<T>> {
        self.left.map(|p| unsafe { p.as_ref() })
    }

    #[inline]
    pub fn right(&self) -> Option<&Node<T>> {
        self.right.map(|p| unsafe { p.as_ref() })
    }

    #[inline]
    pub fn parent(&self) -> Option<&Node<T>> {
        self.parent.map(|p| unsafe { p.as_ref() })
    }

    #[inline]
    pub fn is_leaf(&self) -> bool {
        self.left.is_none() && self.right.is_none()
    }

    #[inline]
    pub(crate) fn is_left_child_of(&self, parent: &Node<T>) -> bool {
        parent.left().map_or(false, |l| ptr::eq(l, self))
    }

    #[inline]
    pub(crate) fn is_right_child_of(&self, parent: &Node<T>) -> bool {
        parent.right().map_or(false, |r| ptr::eq(r, self))
    }

    pub fn leftmost(&self) -> &Node<T> {
        let mut n = self;
        while let Some(l) = n.left() {
            n = l;
        }
        n
    }

    pub fn rightmost(&self) -> &Node<T> {
        let mut n = self;
        while let Some(r) = n.right() {
            n = r;
        }
        n
    }

    /// In-order predecessor, walking up through parent links when there is
    /// no left subtree.
    pub fn predecessor(&self) -> Option<&Node<T>> {
        if let Some(l) = self.left() {
            return Some(l.rightmost());
        }
        let mut child = self;
        while let Some(parent) = child.parent() {
            if child.is_right_child_of(parent) {
                return Some(parent);
            }
            child = parent;
        }
        None
    }

    /// Leftmost node of the subtree rooted at `node`.
    ///
    /// # Safety
    ///
    /// `node` must point to a live node that is not borrowed elsewhere.
    pub(crate) unsafe fn leftmost_ptr(node: NonNull<Node<T>>) -> NonNull<Node<T>> {
        let mut n = node;
        while let Some(l) = (*n.as_ptr()).left {
            n = l;
        }
        n
    }
}

/// Frees a subtree without recursing, so long chains cannot exhaust the call
/// stack.
///
/// # Safety
///
/// `link` must own its subtree: no other tree links into it and nothing
/// borrows any of its nodes.
pub(crate) unsafe fn free_subtree<T>(link: Link<T>) -> usize {
    let mut freed = 0;
    let mut pending: Vec<NonNull<Node<T>>> = link.into_iter().collect();
    while let Some(node) = pending.pop() {
        let node = Node::into_boxed(node);
        pending.extend(node.left);
        pending.extend(node.right);
        freed += 1;
    }
    freed
}
