#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct TreeStats {
    pub size: usize,
    pub height: usize,
}

impl TreeStats {
    pub fn new() -> Self {
        Self { size: 0, height: 0 }
    }

    /// True when every node has at most one child, which is what sorted
    /// insertion produces.
    pub fn is_degenerate(&self) -> bool {
        self.size > 0 && self.height == self.size
    }
}
