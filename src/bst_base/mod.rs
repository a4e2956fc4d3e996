pub mod bst;
pub mod bst_traits;
pub mod iter;
mod node;
mod tree_stats;

pub use self::tree_stats::TreeStats;

use self::bst_traits::KeyComparator;
use std::{fmt::Debug, marker::PhantomData};

#[derive(Debug)]
pub struct DefaultKeyComparator<T: ?Sized> {
    _t: PhantomData<T>,
}
impl<T> KeyComparator<T> for DefaultKeyComparator<T>
where
    T: Ord + Debug + ?Sized,
{
    fn new() -> Self {
        Self { _t: PhantomData }
    }
    fn less(&self, lhs: &T, rhs: &T) -> bool {
        lhs < rhs
    }
}

#[cfg(test)]
#[test]
fn default_comparator_is_strict() {
    let cmp = DefaultKeyComparator::<str>::new();
    assert!(cmp.less("CSCI100", "CSCI101"));
    assert!(!cmp.less("CSCI101", "CSCI101"));
    // byte-wise ordering, uppercase sorts before lowercase
    assert!(cmp.less("MATH201", "csci100"));
}
