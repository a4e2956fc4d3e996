use crate::{
    bst_base::{
        bst::Bst, bst_traits::BstParams, bst_traits::_Bst, iter::BstIterator, DefaultKeyComparator,
        TreeStats,
    },
    course::{Course, CourseKey},
};

/// Course catalog ordered by identifier.
///
/// `insert` never rejects or overwrites: a repeated identifier is stored as
/// a second node and shows up twice in `iter`, while `find` keeps returning
/// the course that was inserted first under that identifier.
pub struct CourseStore<T>
where
    T: BstParams<KeyType = str, ValueType = Course>,
{
    _tree: Bst<T>,
}

impl<T> CourseStore<T>
where
    T: BstParams<KeyType = str, ValueType = Course>,
{
    pub fn new() -> Self {
        Self { _tree: Bst::new() }
    }

    pub fn is_empty(&self) -> bool {
        self._tree.empty()
    }

    pub fn len(&self) -> usize {
        self._tree.size()
    }

    pub fn contains_key(&self, identifier: &str) -> bool {
        self._tree.exists(identifier)
    }

    pub fn insert(&mut self, course: Course) {
        debug_assert!(
            !course.identifier.is_empty(),
            "course identifier must not be empty"
        );
        self._tree.insert(course);
    }

    /// Exact, case-sensitive lookup. Callers fold case before asking.
    pub fn find(&self, identifier: &str) -> Option<&Course> {
        self._tree.find(identifier)
    }

    /// Every stored course in ascending identifier order.
    pub fn iter(&self) -> BstIterator<'_, Course> {
        self._tree.iter()
    }

    pub fn height(&self) -> usize {
        self._tree.height()
    }

    pub fn stats(&self) -> &TreeStats {
        self._tree.get_stats()
    }

    pub fn verify(&self) {
        self._tree.verify()
    }
}

impl<T> Default for CourseStore<T>
where
    T: BstParams<KeyType = str, ValueType = Course>,
{
    fn default() -> Self {
        Self::new()
    }
}

impl<T> std::fmt::Debug for CourseStore<T>
where
    T: BstParams<KeyType = str, ValueType = Course>,
{
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        std::fmt::Debug::fmt(&self._tree, f)
    }
}

impl<'a, T> IntoIterator for &'a CourseStore<T>
where
    T: BstParams<KeyType = str, ValueType = Course>,
{
    type Item = &'a Course;
    type IntoIter = BstIterator<'a, Course>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<T> Extend<Course> for CourseStore<T>
where
    T: BstParams<KeyType = str, ValueType = Course>,
{
    fn extend<I: IntoIterator<Item = Course>>(&mut self, iter: I) {
        for course in iter {
            self.insert(course);
        }
    }
}

pub type DefaultCourseConfig = _Bst<str, Course, DefaultKeyComparator<str>, CourseKey>;
/// Same tree, re-verified after every insert.
pub type VerifiedCourseConfig = _Bst<str, Course, DefaultKeyComparator<str>, CourseKey, true>;

pub type OrderedCourseStore = CourseStore<DefaultCourseConfig>;
pub type VerifiedCourseStore = CourseStore<VerifiedCourseConfig>;
