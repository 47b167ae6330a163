/// Shape of a tree, gathered by a single traversal.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct TreeStats {
    pub size: usize,
    pub height: usize,
    pub leaves: usize,
}

impl TreeStats {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn inner_nodes(&self) -> usize {
        self.size - self.leaves
    }

    /// True when every level is as full as it can be for this size, i.e. the
    /// height is the minimal `ceil(log2(size + 1))`.
    pub fn is_minimal_height(&self) -> bool {
        let mut minimal = 0;
        while (1usize << minimal) - 1 < self.size {
            minimal += 1;
        }
        self.height == minimal
    }

    /// Insertion order produced a linked list: every node has one child.
    pub fn is_degenerate(&self) -> bool {
        self.size > 0 && self.height == self.size
    }
}

#[cfg(test)]
#[test]
fn test_tree_stats() {
    let empty = TreeStats::new();
    assert_eq!(empty.inner_nodes(), 0);
    assert!(empty.is_minimal_height());
    assert!(!empty.is_degenerate());

    let full = TreeStats {
        size: 7,
        height: 3,
        leaves: 4,
    };
    assert_eq!(full.inner_nodes(), 3);
    assert!(full.is_minimal_height());

    let chain = TreeStats {
        size: 4,
        height: 4,
        leaves: 1,
    };
    assert!(chain.is_degenerate());
    assert!(!chain.is_minimal_height());
}
