/// Builds a tree by inserting each element in order, like `vec!`.
///
/// ```
/// let tree = binary_tree::bintree![5, 3, 8];
/// assert_eq!(tree.to_string(), "3 5 8");
/// ```
#[macro_export]
macro_rules! bintree {
    () => {
        $crate::BinaryTree::new()
    };
    ($($value:expr),+ $(,)?) => {{
        let mut tree = $crate::BinaryTree::new();
        $(tree.insert($value);)+
        tree
    }};
}
