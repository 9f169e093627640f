/// Tree node stored in an arena and addressed by `u32` index.
///
/// `red` is the color of the link from the parent. The plain BST leaves
/// it at its insertion value and never reads it; the red-black tree's
/// whole balancing scheme lives in this one extra bit.
#[derive(Clone, Debug)]
pub struct Node<K, V> {
    pub key: K,
    pub val: V,
    pub left: Option<u32>,
    pub right: Option<u32>,
    pub red: bool,
}

impl<K, V> Node<K, V> {
    pub fn new(key: K, val: V, red: bool) -> Self {
        Self {
            key,
            val,
            left: None,
            right: None,
            red,
        }
    }
}
