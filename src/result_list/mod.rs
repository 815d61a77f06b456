//! Append-ordered result sequences populated by filtered tree traversals.

mod list;

pub use self::list::{ResultList, ResultListIter};

/// The boundary a filtered traversal writes through.
///
/// `append` is called once per matching value, in traversal order; an
/// implementation borrows the values and must preserve call order. The
/// container that runs the traversal keeps ownership of every value.
pub trait Collector<'a, T> {
    fn append(&mut self, value: &'a T);
}

impl<'a, T> Collector<'a, T> for Vec<&'a T> {
    fn append(&mut self, value: &'a T) {
        self.push(value);
    }
}
