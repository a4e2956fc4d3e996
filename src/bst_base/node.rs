pub type Link<V> = Option<Box<Node<V>>>;

#[derive(Debug)]
pub struct Node<V> {
    pub value: V,
    pub left: Link<V>,
    pub right: Link<V>,
}

impl<V> Node<V> {
    pub fn new_leaf(value: V) -> Box<Self> {
        Box::new(Self {
            value,
            left: None,
            right: None,
        })
    }

    #[inline]
    pub fn is_leafnode(&self) -> bool {
        self.left.is_none() && self.right.is_none()
    }

    /// Detach both children, leaving this node a leaf.
    #[inline]
    pub fn take_children(&mut self) -> (Link<V>, Link<V>) {
        (self.left.take(), self.right.take())
    }
}
