//! Conversions back and forth between flat tuples and their corresponding inductive lists.
//!
//! Lists are stored inductively, but arguments are far more readable written as tuples: the
//! factories and [`concat`](fn@crate::concat) all take their operands as a flat tuple and
//! convert it with the traits here.
//!
//! At present, tuples up to size 64 are supported.

use crate::list::{Cons, Nil, TypeList};

/// Convert a tuple into its corresponding inductive list.
///
/// # Examples
///
/// ```
/// use tuplex::{tuple::Tuple, tuplex};
///
/// assert_eq!((1, 'a', "b").into_list(), tuplex!(1, 'a', "b"));
/// ```
pub trait Tuple: Sized {
    /// The corresponding inductive list.
    type AsList: List<AsTuple = Self>;

    /// Move every element of the tuple into the corresponding list.
    fn into_list(self) -> Self::AsList;
}

/// Convert an inductive list into its corresponding tuple.
///
/// # Examples
///
/// ```
/// use tuplex::{tuple::List, tuplex};
///
/// let (a, b) = tuplex!(String::from("moved"), 2u8).into_tuple();
/// assert_eq!(a, "moved");
/// assert_eq!(b, 2);
/// ```
pub trait List: TypeList {
    /// The corresponding tuple.
    type AsTuple: Tuple<AsList = Self>;

    /// Move every element of the list into the corresponding tuple.
    fn into_tuple(self) -> Self::AsTuple;
}

tuplex_macro::impl_tuples!(64);
