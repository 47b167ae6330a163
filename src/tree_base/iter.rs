use std::fmt::{self, Debug};
use std::iter::FusedIterator;
use std::marker::PhantomData;
use std::ptr::{self, NonNull};

use super::node::{Link, Node};

pub trait TreeCursor<'a, T: 'a>: Clone {
    fn get(&self) -> Option<&'a T>;
    fn forward(&mut self) -> &mut Self;
    fn backward(&mut self) -> &mut Self;
    fn equals(&self, other: &Self) -> bool;

    fn is_end(&self) -> bool {
        self.get().is_none()
    }
}

/// In-order cursor over a tree.
///
/// The cursor keeps the node it points at plus a stack of ancestors whose
/// right subtree is still owed a visit. Moving forward pops that stack;
/// moving backward follows parent links to the predecessor and rebuilds the
/// stack for the new position. A cursor without a current node is the "end"
/// cursor.
///
/// End sits between the last and the first element, so the positions form a
/// ring when walked backward: `backward` from the first element lands on end,
/// and `backward` from end lands on the last element. `forward` does not wrap
/// and stays at end. Use `is_end` to stop a backward walk before it comes
/// around again.
pub struct Cursor<'a, T> {
    root: Option<&'a Node<T>>,
    current: Option<&'a Node<T>>,
    stack: Vec<&'a Node<T>>,
}

impl<'a, T> Cursor<'a, T> {
    /// Cursor on the smallest element, or end for an empty tree.
    pub(crate) fn new(root: Option<&'a Node<T>>) -> Self {
        let mut cursor = Self::end(root);
        cursor.push_left(root);
        cursor.advance();
        cursor
    }

    pub(crate) fn end(root: Option<&'a Node<T>>) -> Self {
        Self {
            root,
            current: None,
            stack: Vec::new(),
        }
    }

    /// Cursor on the largest element, or end for an empty tree.
    pub(crate) fn last(root: Option<&'a Node<T>>) -> Self {
        let mut cursor = Self::end(root);
        cursor.seek(root.map(Node::rightmost));
        cursor
    }

    /// Cursor on `node`, which must belong to the tree rooted at `root`.
    pub(crate) fn at(root: Option<&'a Node<T>>, node: &'a Node<T>) -> Self {
        let mut cursor = Self::end(root);
        cursor.seek(Some(node));
        cursor
    }

    fn push_left(&mut self, mut node: Option<&'a Node<T>>) {
        while let Some(n) = node {
            self.stack.push(n);
            node = n.left();
        }
    }

    fn advance(&mut self) {
        match self.stack.pop() {
            Some(n) => {
                self.current = Some(n);
                self.push_left(n.right());
            }
            None => self.current = None,
        }
    }

    /// Positions the cursor on `target` with the same stack a forward walk
    /// would have built to get there.
    fn seek(&mut self, target: Option<&'a Node<T>>) {
        self.stack.clear();
        self.current = target;

        if let Some(node) = target {
            let mut pending = Vec::new();
            let mut child = node;
            while let Some(parent) = child.parent() {
                if child.is_left_child_of(parent) {
                    pending.push(parent);
                }
                child = parent;
            }
            self.stack.extend(pending.into_iter().rev());
            self.push_left(node.right());
        }
    }
}

impl<'a, T: 'a> TreeCursor<'a, T> for Cursor<'a, T> {
    #[inline]
    fn get(&self) -> Option<&'a T> {
        self.current.map(Node::value)
    }

    /// Stays at end once there.
    fn forward(&mut self) -> &mut Self {
        if self.current.is_some() {
            self.advance();
        }
        self
    }

    /// Steps to the predecessor; see the type docs for how end is handled.
    fn backward(&mut self) -> &mut Self {
        let target = match self.current {
            Some(n) => n.predecessor(),
            None => self.root.map(Node::rightmost),
        };
        self.seek(target);
        self
    }

    fn equals(&self, other: &Self) -> bool {
        match (self.current, other.current) {
            (Some(a), Some(b)) => ptr::eq(a, b),
            (None, None) => true,
            _ => false,
        }
    }
}

impl<'a, T> Clone for Cursor<'a, T> {
    fn clone(&self) -> Self {
        Self {
            root: self.root,
            current: self.current,
            stack: self.stack.clone(),
        }
    }
}

impl<'a, T: 'a> PartialEq for Cursor<'a, T> {
    fn eq(&self, other: &Self) -> bool {
        self.equals(other)
    }
}

impl<'a, T: 'a> Eq for Cursor<'a, T> {}

impl<'a, T: Debug + 'a> Debug for Cursor<'a, T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Cursor")
            .field("current", &self.get())
            .field("pending", &self.stack.len())
            .finish()
    }
}

/// Walks a `Cursor` in the opposite direction: `forward` visits the next
/// smaller element.
pub struct ReverseCursor<'a, T> {
    base: Cursor<'a, T>,
}

impl<'a, T> ReverseCursor<'a, T> {
    pub(crate) fn new(base: Cursor<'a, T>) -> Self {
        Self { base }
    }

    pub fn base(&self) -> &Cursor<'a, T> {
        &self.base
    }

    pub fn into_base(self) -> Cursor<'a, T> {
        self.base
    }
}

impl<'a, T: 'a> TreeCursor<'a, T> for ReverseCursor<'a, T> {
    #[inline]
    fn get(&self) -> Option<&'a T> {
        self.base.get()
    }

    fn forward(&mut self) -> &mut Self {
        if !self.base.is_end() {
            self.base.backward();
        }
        self
    }

    fn backward(&mut self) -> &mut Self {
        match self.base.current {
            Some(_) => {
                self.base.forward();
            }
            None => {
                let first = self.base.root.map(Node::leftmost);
                self.base.seek(first);
            }
        }
        self
    }

    fn equals(&self, other: &Self) -> bool {
        self.base.equals(&other.base)
    }
}

impl<'a, T> Clone for ReverseCursor<'a, T> {
    fn clone(&self) -> Self {
        Self {
            base: self.base.clone(),
        }
    }
}

impl<'a, T: 'a> PartialEq for ReverseCursor<'a, T> {
    fn eq(&self, other: &Self) -> bool {
        self.equals(other)
    }
}

impl<'a, T: 'a> Eq for ReverseCursor<'a, T> {}

impl<'a, T: Debug + 'a> Debug for ReverseCursor<'a, T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("ReverseCursor").field(&self.base).finish()
    }
}

/// Borrowing in-order iterator. Read-only; both ends delegate to cursors.
pub struct Iter<'a, T> {
    front: Cursor<'a, T>,
    back: ReverseCursor<'a, T>,
    exhausted: bool,
}

impl<'a, T> Iter<'a, T> {
    pub(crate) fn new(root: Option<&'a Node<T>>) -> Self {
        Self {
            front: Cursor::new(root),
            back: ReverseCursor::new(Cursor::last(root)),
            exhausted: root.is_none(),
        }
    }
}

impl<'a, T: 'a> Iterator for Iter<'a, T> {
    type Item = &'a T;

    fn next(&mut self) -> Option<&'a T> {
        if self.exhausted {
            return None;
        }
        let value = self.front.get()?;
        if self.front.equals(self.back.base()) {
            self.exhausted = true;
        } else {
            self.front.forward();
        }
        Some(value)
    }
}

impl<'a, T: 'a> DoubleEndedIterator for Iter<'a, T> {
    fn next_back(&mut self) -> Option<&'a T> {
        if self.exhausted {
            return None;
        }
        let value = self.back.get()?;
        if self.back.base().equals(&self.front) {
            self.exhausted = true;
        } else {
            self.back.forward();
        }
        Some(value)
    }
}

impl<'a, T: 'a> FusedIterator for Iter<'a, T> {}

impl<'a, T> Clone for Iter<'a, T> {
    fn clone(&self) -> Self {
        Self {
            front: self.front.clone(),
            back: self.back.clone(),
            exhausted: self.exhausted,
        }
    }
}

impl<'a, T: Debug + 'a> Debug for Iter<'a, T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.clone()).finish()
    }
}

/// Owning in-order iterator. Nodes are freed as they are yielded, and
/// whatever remains is released on drop.
pub struct IntoIter<T> {
    stack: Vec<NonNull<Node<T>>>,
    marker: PhantomData<Box<Node<T>>>,
}

// SAFETY: the iterator exclusively owns the nodes left on its stack.
unsafe impl<T: Send> Send for IntoIter<T> {}
unsafe impl<T: Sync> Sync for IntoIter<T> {}

impl<T> IntoIter<T> {
    /// `root` must own its subtree; the iterator takes over freeing it.
    pub(crate) fn new(root: Link<T>) -> Self {
        let mut iter = Self {
            stack: Vec::new(),
            marker: PhantomData,
        };
        iter.push_left(root);
        iter
    }

    fn push_left(&mut self, mut link: Link<T>) {
        while let Some(node) = link {
            self.stack.push(node);
            // SAFETY: nodes below the stack top have not been freed yet.
            link = unsafe { node.as_ref() }.left;
        }
    }
}

impl<T> Iterator for IntoIter<T> {
    type Item = T;

    fn next(&mut self) -> Option<T> {
        let node = self.stack.pop()?;
        // SAFETY: the left subtree of a popped node has been yielded already
        // and nothing else links to it, so the node can be taken back.
        let node = unsafe { Node::into_boxed(node) };
        self.push_left(node.right);
        Some(node.value)
    }
}

impl<T> FusedIterator for IntoIter<T> {}

impl<T> Drop for IntoIter<T> {
    fn drop(&mut self) {
        for _ in self.by_ref() {}
    }
}
