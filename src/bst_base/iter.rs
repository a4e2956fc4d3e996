use std::iter::FusedIterator;

use super::node::Node;

/// In-order iterator over a tree. The pending left spine is kept on an
/// explicit stack, so a degenerate tree costs heap, not call stack.
#[derive(Debug)]
pub struct BstIterator<'a, V> {
    stack: Vec<&'a Node<V>>,
    remaining: usize,
}

impl<'a, V> BstIterator<'a, V> {
    pub(crate) fn new(root: Option<&'a Node<V>>, len: usize) -> Self {
        let mut it = Self {
            stack: Vec::new(),
            remaining: len,
        };
        it.push_left_spine(root);
        it
    }

    fn push_left_spine(&mut self, mut n: Option<&'a Node<V>>) {
        while let Some(node) = n {
            self.stack.push(node);
            n = node.left.as_deref();
        }
    }
}

impl<V> Clone for BstIterator<'_, V> {
    fn clone(&self) -> Self {
        Self {
            stack: self.stack.clone(),
            remaining: self.remaining,
        }
    }
}

impl<'a, V> Iterator for BstIterator<'a, V> {
    type Item = &'a V;

    fn next(&mut self) -> Option<Self::Item> {
        let node = self.stack.pop()?;
        self.push_left_spine(node.right.as_deref());
        self.remaining -= 1;
        Some(&node.value)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl<V> ExactSizeIterator for BstIterator<'_, V> {}

impl<V> FusedIterator for BstIterator<'_, V> {}
