use super::{
    bst_traits::{BstParams, KeyComparator, KeyOfValue},
    iter::BstIterator,
    node::{Link, Node},
    tree_stats::TreeStats,
};

/// Unbalanced binary search tree. Keys that compare equal to an existing
/// key are routed to its right subtree, so duplicates become distinct nodes
/// and a search returns the earliest-inserted one.
pub struct Bst<T: BstParams> {
    root_: Link<T::ValueType>,
    stats_: TreeStats,
    key_less: T::KeyCompareType,
}

/// Convenient Key Comparison Functions Generated From key_less
impl<T: BstParams> Bst<T> {
    fn key_less(&self, a: &T::KeyType, b: &T::KeyType) -> bool {
        self.key_less.less(a, b)
    }

    fn key_lessequal(&self, a: &T::KeyType, b: &T::KeyType) -> bool {
        !self.key_less.less(b, a)
    }

    fn key_equal(&self, a: &T::KeyType, b: &T::KeyType) -> bool {
        !self.key_less.less(a, b) && !self.key_less.less(b, a)
    }

    #[inline]
    fn key_of(value: &T::ValueType) -> &T::KeyType {
        T::KeyOfValueType::get(value)
    }
}

impl<T: BstParams> Drop for Bst<T> {
    fn drop(&mut self) {
        self.clear_iterative();
        debug_assert!(self.stats_.size == 0);
    }
}

/// node deallocation
impl<T: BstParams> Bst<T> {
    /// Release every node without recursing. Dropping a `Box<Node>` directly
    /// would recurse once per level, which a sorted load makes as deep as the
    /// tree is large.
    fn clear_iterative(&mut self) {
        let mut pending: Vec<Box<Node<T::ValueType>>> = Vec::new();
        pending.extend(self.root_.take());

        while let Some(mut node) = pending.pop() {
            let (left, right) = node.take_children();
            pending.extend(left);
            pending.extend(right);
            // node is a leaf now and drops here
        }

        self.stats_ = TreeStats::new();
    }
}

/// Access Functions to the item count
impl<T: BstParams> Bst<T> {
    pub fn size(&self) -> usize {
        self.stats_.size
    }

    pub fn empty(&self) -> bool {
        self.size() == 0
    }

    pub fn height(&self) -> usize {
        self.stats_.height
    }

    pub fn get_stats(&self) -> &TreeStats {
        &self.stats_
    }
}

/// Access function querying the tree by descending from the root
impl<T: BstParams> Bst<T> {
    pub fn exists(&self, key: &T::KeyType) -> bool {
        self.find(key).is_some()
    }

    /// Descend towards `key` and return the first value whose key is equal.
    /// Lookup stops at that node, so of several equal keys the one nearest
    /// the root, which is also the one inserted first, wins.
    pub fn find(&self, key: &T::KeyType) -> Option<&T::ValueType> {
        let mut n = self.root_.as_deref();

        while let Some(node) = n {
            let node_key = Self::key_of(&node.value);
            if self.key_equal(key, node_key) {
                return Some(&node.value);
            }
            n = if self.key_less(key, node_key) {
                node.left.as_deref()
            } else {
                node.right.as_deref()
            };
        }

        None
    }

    /// Values in ascending key order. Restartable, the tree is not touched.
    pub fn iter(&self) -> BstIterator<'_, T::ValueType> {
        BstIterator::new(self.root_.as_deref(), self.stats_.size)
    }
}

/// Insertion
impl<T: BstParams> Bst<T> {
    /// Attach `x` as a new leaf. Never fails and never replaces an existing
    /// value: strictly smaller keys go left, everything else goes right.
    pub fn insert(&mut self, x: T::ValueType) {
        let mut depth: usize = 1;
        let mut link = &mut self.root_;

        while let Some(node) = link {
            let go_left = self
                .key_less
                .less(T::KeyOfValueType::get(&x), T::KeyOfValueType::get(&node.value));
            link = if go_left {
                &mut node.left
            } else {
                &mut node.right
            };
            depth += 1;
        }

        log::debug!(
            "Bst::insert key {:?} at depth {}",
            T::KeyOfValueType::get(&x),
            depth
        );

        *link = Some(Node::new_leaf(x));

        self.stats_.size += 1;
        if depth > self.stats_.height {
            self.stats_.height = depth;
        }

        if T::SELF_VERIFY {
            self.verify();
        }
    }
}

/// Verification
impl<T: BstParams> Bst<T> {
    /// Walk the whole tree and assert the search-tree invariant: every key in
    /// a left subtree is strictly less than its ancestor, every key in a
    /// right subtree is greater or equal. Also cross-checks the statistics.
    pub fn verify(&self) {
        let mut count: usize = 0;
        let mut height: usize = 0;

        // (node, inclusive lower bound, exclusive upper bound, depth)
        let mut stack: Vec<(&Node<T::ValueType>, Option<&T::KeyType>, Option<&T::KeyType>, usize)> =
            Vec::new();
        if let Some(root) = self.root_.as_deref() {
            stack.push((root, None, None, 1));
        }

        while let Some((node, lower, upper, depth)) = stack.pop() {
            let key = Self::key_of(&node.value);
            if let Some(lo) = lower {
                assert!(
                    self.key_lessequal(lo, key),
                    "key {:?} in right subtree of {:?}",
                    key,
                    lo
                );
            }
            if let Some(hi) = upper {
                assert!(
                    self.key_less(key, hi),
                    "key {:?} in left subtree of {:?}",
                    key,
                    hi
                );
            }

            count += 1;
            height = height.max(depth);

            if let Some(left) = node.left.as_deref() {
                stack.push((left, lower, Some(key), depth + 1));
            }
            if let Some(right) = node.right.as_deref() {
                stack.push((right, Some(key), upper, depth + 1));
            }
        }

        assert_eq!(count, self.stats_.size, "node count disagrees with stats");
        assert_eq!(height, self.stats_.height, "height disagrees with stats");
    }
}

/// Debug
impl<T: BstParams> Bst<T> {
    fn print_nodes(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let mut stack: Vec<(&Node<T::ValueType>, usize, &str)> = Vec::new();
        if let Some(root) = self.root_.as_deref() {
            stack.push((root, 0, "root"));
        }

        while let Some((node, depth, side)) = stack.pop() {
            for _ in 0..depth {
                write!(f, "  ")?;
            }
            writeln!(
                f,
                "{} {:?}{}",
                side,
                Self::key_of(&node.value),
                if node.is_leafnode() { " (leaf)" } else { "" }
            )?;

            // right first so the left child prints first
            if let Some(right) = node.right.as_deref() {
                stack.push((right, depth + 1, "R"));
            }
            if let Some(left) = node.left.as_deref() {
                stack.push((left, depth + 1, "L"));
            }
        }

        Ok(())
    }
}

/// Display
impl<T: BstParams> std::fmt::Debug for Bst<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        writeln!(
            f,
            "size {} height {}",
            self.stats_.size, self.stats_.height
        )?;
        self.print_nodes(f)
    }
}

impl<T: BstParams> Default for Bst<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: BstParams> Bst<T> {
    pub fn new() -> Self {
        Self {
            root_: None,
            stats_: TreeStats::new(),
            key_less: T::KeyCompareType::new(),
        }
    }
}
