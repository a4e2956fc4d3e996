use std::fmt::Debug;
use std::marker::PhantomData;

// Traits bound
pub trait KeyOfValue<K: ?Sized, V>: Debug {
    fn get(value: &V) -> &K;
}
pub trait KeyComparator<T: ?Sized>: Debug {
    fn new() -> Self;
    fn less(&self, lhs: &T, rhs: &T) -> bool;
}

pub trait BstParams: Debug {
    type KeyType: Debug + ?Sized;
    type ValueType: Debug;
    type KeyCompareType: KeyComparator<Self::KeyType>;
    type KeyOfValueType: KeyOfValue<Self::KeyType, Self::ValueType>;
    /// Re-check the whole search-tree invariant after every insert.
    const SELF_VERIFY: bool;
}

/// Compile-time tree configuration. Keys are borrowed out of the stored
/// values through `TKeyOf`, so the key type may be unsized (`str`).
#[derive(Debug)]
pub struct _Bst<TKey: ?Sized, TValue, TCompare, TKeyOf, const VERIFY: bool = false> {
    _phantom_key: PhantomData<TKey>,
    _phantom_value: PhantomData<TValue>,
    _phantom_compare: PhantomData<TCompare>,
    _phantom_key_of: PhantomData<TKeyOf>,
}

impl<TKey, TValue, TCompare, TKeyOf, const VERIFY: bool> BstParams
    for _Bst<TKey, TValue, TCompare, TKeyOf, VERIFY>
where
    TKey: Debug + ?Sized,
    TValue: Debug,
    TCompare: KeyComparator<TKey>,
    TKeyOf: KeyOfValue<TKey, TValue>,
{
    type KeyType = TKey;
    type ValueType = TValue;
    type KeyCompareType = TCompare;
    type KeyOfValueType = TKeyOf;
    const SELF_VERIFY: bool = VERIFY;
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::bst_base::DefaultKeyComparator;

    #[derive(Debug)]
    struct Identity;
    impl KeyOfValue<u32, u32> for Identity {
        fn get(value: &u32) -> &u32 {
            value
        }
    }

    #[test]
    fn test_bst_params() {
        type Plain = _Bst<u32, u32, DefaultKeyComparator<u32>, Identity>;
        type Checked = _Bst<u32, u32, DefaultKeyComparator<u32>, Identity, true>;
        assert!(!Plain::SELF_VERIFY);
        assert!(Checked::SELF_VERIFY);
        assert_eq!(Identity::get(&7), &7);
    }
}
