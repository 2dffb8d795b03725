//! The storage layer: inductive heterogeneous lists built from [`Cons`] cells ending in [`Nil`].
//!
//! A list of the types `A`, `B` and `C` is the type `Cons<A, Cons<B, Cons<C, Nil>>>`, which is
//! more comfortably written [`Tuplex![A, B, C]`](crate::Tuplex). Each cell owns its value by
//! composition and owns the rest of the list the same way, so the whole list is laid out like a
//! nested struct: no indirection and no bytes beyond those of the values themselves.
//!
//! The algorithms in this crate only ever look at a list through the [`TypeList`] and
//! [`NonEmpty`] shape traits, which are also implemented for the inductive pair lists `()` and
//! `(T, Ts)`.

use crate::unary::*;

/// The empty list.
///
/// There is nothing to access in an empty list: none of the accessor traits are implemented for
/// it, so any attempt to take its front is a type error.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct Nil;

/// A single cell of a list, holding a `T` followed by the rest of the list `Ts`.
///
/// # Examples
///
/// ```
/// use tuplex::{tuplex, Cons, Nil};
///
/// let list = Cons::new(1, Cons::new("two", Nil));
/// assert_eq!(list, tuplex!(1, "two"));
/// assert_eq!(list.value(), &1);
/// assert_eq!(list.rest().value(), &"two");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct Cons<T, Ts> {
    head: T,
    tail: Ts,
}

impl<T, Ts> Cons<T, Ts> {
    /// Construct a cell from its value and the rest of the list.
    pub const fn new(head: T, tail: Ts) -> Self {
        Cons { head, tail }
    }

    /// A shared reference to the value held in this cell.
    pub fn value(&self) -> &T {
        &self.head
    }

    /// A unique reference to the value held in this cell.
    pub fn value_mut(&mut self) -> &mut T {
        &mut self.head
    }

    /// Take the value held in this cell, dropping the rest of the list.
    pub fn into_value(self) -> T {
        self.head
    }

    /// A shared reference to the rest of the list.
    pub fn rest(&self) -> &Ts {
        &self.tail
    }

    /// A unique reference to the rest of the list.
    pub fn rest_mut(&mut self) -> &mut Ts {
        &mut self.tail
    }

    /// Split a shared reference to the cell into shared references to its value and the rest.
    pub fn parts(&self) -> (&T, &Ts) {
        (&self.head, &self.tail)
    }

    /// Split a unique reference to the cell into unique references to its value and the rest.
    pub fn parts_mut(&mut self) -> (&mut T, &mut Ts) {
        (&mut self.head, &mut self.tail)
    }

    /// Split the cell into its value and the rest of the list.
    pub fn into_parts(self) -> (T, Ts) {
        (self.head, self.tail)
    }
}

/// The shape shared by every type-level list: it has a length, known from its type alone.
///
/// # Examples
///
/// ```
/// use tuplex::{list::TypeList, Tuplex};
///
/// assert_eq!(<Tuplex![]>::LEN, 0);
/// assert_eq!(<Tuplex![i32, f32, String, f64]>::LEN, 4);
/// assert_eq!(<(u8, (u16, ()))>::LEN, 2);
/// ```
pub trait TypeList: Sized {
    /// The number of elements in the list, as a unary number.
    type Length: Unary;

    /// The number of elements in the list.
    const LEN: usize = <Self::Length as Unary>::VALUE;
}

impl TypeList for Nil {
    type Length = Z;
}

impl<T, Ts: TypeList> TypeList for Cons<T, Ts> {
    type Length = S<Ts::Length>;
}

impl TypeList for () {
    type Length = Z;
}

impl<T, Ts: TypeList> TypeList for (T, Ts) {
    type Length = S<Ts::Length>;
}

/// A list with at least one element, which can be taken apart into its front type and the list
/// of the remaining types.
pub trait NonEmpty: TypeList {
    /// The type of the first element.
    type Front;
    /// The list with its first element removed.
    type PopFront: TypeList;
}

impl<T, Ts: TypeList> NonEmpty for Cons<T, Ts> {
    type Front = T;
    type PopFront = Ts;
}

impl<T, Ts: TypeList> NonEmpty for (T, Ts) {
    type Front = T;
    type PopFront = Ts;
}

/// The type of the first element of a non-empty list.
pub type Front<L> = <L as NonEmpty>::Front;

/// A non-empty list with its first element removed.
pub type PopFront<L> = <L as NonEmpty>::PopFront;

/// The number of elements in the list `L`.
///
/// # Examples
///
/// ```
/// use tuplex::{size, Tuplex};
///
/// const WIDTH: usize = size::<Tuplex![u8, u8, u8]>();
/// assert_eq!(WIDTH, 3);
/// ```
pub const fn size<L: TypeList>() -> usize {
    L::LEN
}

static_assertions::assert_eq_size!(Nil, ());
static_assertions::assert_eq_size!(Cons<u64, Nil>, u64);
static_assertions::assert_eq_size!(Cons<u32, Cons<u32, Cons<u32, Nil>>>, [u32; 3]);
static_assertions::assert_eq_size!(Cons<(), Cons<Nil, Nil>>, ());
