//! Concatenation of lists, both of their types and of their values.
//!
//! At the type level, [`Append`] concatenates two lists and [`Concat`] concatenates any non-zero
//! number of them, given as a tuple of list types. Order is preserved and duplicate types are
//! kept.
//!
//! At the value level, [`concat`](fn@concat) takes a tuple of operands, each of which is a
//! container passed by value, by shared reference or by unique reference, independently of the
//! others. Each operand is first turned into a [`Forward`] view, the views are folded together
//! from the left with [`Append`], and the single view that remains is materialized into the
//! result. Elements that were forwarded by value are moved into the result, and elements that
//! were forwarded by reference are cloned into it, each exactly once.

use call_by::{Convert, Mut, Ref, Val};

use crate::{forward::Forward, list::*, tuple::Tuple};

/// Concatenate two lists.
///
/// # Examples
///
/// ```
/// use tuplex::{concat::Append, tuplex};
///
/// let joined = tuplex!(1, 'b').append(tuplex!("c"));
/// assert_eq!(joined, tuplex!(1, 'b', "c"));
/// ```
pub trait Append<Rhs: TypeList>: TypeList {
    /// The concatenation of `Self` followed by `Rhs`.
    type Output: TypeList;

    /// Move the elements of `self` and then of `rhs` into a single list.
    fn append(self, rhs: Rhs) -> Self::Output;
}

impl<Rhs: TypeList> Append<Rhs> for Nil {
    type Output = Rhs;

    fn append(self, rhs: Rhs) -> Rhs {
        rhs
    }
}

impl<T, Ts, Rhs> Append<Rhs> for Cons<T, Ts>
where
    Ts: Append<Rhs>,
    Rhs: TypeList,
{
    type Output = Cons<T, Ts::Output>;

    fn append(self, rhs: Rhs) -> Self::Output {
        let (head, tail) = self.into_parts();
        Cons::new(head, tail.append(rhs))
    }
}

impl<Rhs: TypeList> Append<Rhs> for () {
    type Output = Rhs;

    fn append(self, rhs: Rhs) -> Rhs {
        rhs
    }
}

impl<T, Ts, Rhs> Append<Rhs> for (T, Ts)
where
    Ts: Append<Rhs>,
    Rhs: TypeList,
{
    type Output = (T, Ts::Output);

    fn append(self, rhs: Rhs) -> Self::Output {
        let (head, tail) = self;
        (head, tail.append(rhs))
    }
}

/// Concatenate a non-empty list of lists into one, from left to right.
///
/// One list concatenates to itself. Two or more are reduced by appending the first two and
/// concatenating the result with the rest. There is no impl for the empty list of lists.
pub trait ConcatTypes {
    /// The concatenated list.
    type Output: TypeList;
}

impl<L: TypeList> ConcatTypes for Cons<L, Nil> {
    type Output = L;
}

impl<A, B, Rest> ConcatTypes for Cons<A, Cons<B, Rest>>
where
    A: Append<B>,
    B: TypeList,
    Cons<A::Output, Rest>: ConcatTypes,
{
    type Output = <Cons<A::Output, Rest> as ConcatTypes>::Output;
}

/// The concatenation of a tuple of list types.
///
/// # Examples
///
/// ```
/// use tuplex::{Concat, Tuplex};
/// use static_assertions::assert_type_eq_all;
///
/// assert_type_eq_all!(
///     Concat<(Tuplex![u8, u16], Tuplex![], Tuplex![u8])>,
///     Tuplex![u8, u16, u8]
/// );
/// ```
pub type Concat<Lists> = <<Lists as Tuple>::AsList as ConcatTypes>::Output;

/// Strip the calling convention from every operand, leaving the list types they refer to.
pub trait Operands {
    /// The list types of the operands, in order.
    type Lists;
}

impl Operands for Nil {
    type Lists = Nil;
}

impl<Op: Forward, Rest: Operands> Operands for Cons<Op, Rest> {
    type Lists = Cons<Op::List, Rest::Lists>;
}

/// Fold a non-empty list of operands into a single view, appending from the left.
pub trait Accumulate {
    /// The view of every element of every operand, in order.
    type View: TypeList;

    /// Forward every operand and append the views together.
    fn accumulate(self) -> Self::View;
}

impl<Op: Forward> Accumulate for Cons<Op, Nil> {
    type View = Op::View;

    fn accumulate(self) -> Self::View {
        self.into_value().forward()
    }
}

impl<A, B, Rest> Accumulate for Cons<A, Cons<B, Rest>>
where
    A: Forward,
    B: Forward,
    A::View: Append<B::View>,
    Cons<<A::View as Append<B::View>>::Output, Rest>: Accumulate,
{
    type View = <Cons<<A::View as Append<B::View>>::Output, Rest> as Accumulate>::View;

    fn accumulate(self) -> Self::View {
        let (a, rest) = self.into_parts();
        let (b, rest) = rest.into_parts();
        Cons::new(a.forward().append(b.forward()), rest).accumulate()
    }
}

/// Produce an owned `T` from a forwarded element: move it if it was forwarded by value, or clone
/// it if it was forwarded by reference.
///
/// The three impls are the [`call_by`] conversions from [`Val`], [`Ref`] and [`Mut`] into
/// [`Val`]. They never overlap, because `T` can be neither `&T` nor `&mut T`.
pub trait Materialize<T> {
    /// Produce the owned element.
    fn materialize(self) -> T;
}

impl<T> Materialize<T> for T {
    fn materialize(self) -> T {
        <T as Convert<'_, Val, Val>>::convert(self)
    }
}

impl<'a, T: Clone + 'a> Materialize<T> for &'a T {
    fn materialize(self) -> T {
        <T as Convert<'a, Ref, Val>>::convert(self)
    }
}

impl<'a, T: Clone + 'a> Materialize<T> for &'a mut T {
    fn materialize(self) -> T {
        <T as Convert<'a, Mut, Val>>::convert(self)
    }
}

/// Materialize every element of a view into the owning list `Target`.
pub trait MaterializeAll<Target: TypeList> {
    /// Produce the owning list.
    fn materialize_all(self) -> Target;
}

impl MaterializeAll<Nil> for Nil {
    fn materialize_all(self) -> Nil {
        self
    }
}

impl<V, Vs, T, Ts> MaterializeAll<Cons<T, Ts>> for Cons<V, Vs>
where
    V: Materialize<T>,
    Vs: MaterializeAll<Ts>,
    Ts: TypeList,
{
    fn materialize_all(self) -> Cons<T, Ts> {
        let (head, tail) = self.into_parts();
        Cons::new(head.materialize(), tail.materialize_all())
    }
}

/// Concatenate a non-empty list of operands into one owning list.
///
/// This is implemented for every list of operands that [`concat`](fn@concat) accepts; the free
/// function is usually more convenient.
pub trait ConcatAll {
    /// The concatenation of the list types of the operands.
    type Output: TypeList;

    /// Concatenate the operands.
    fn concat(self) -> Self::Output;
}

impl<Ops> ConcatAll for Ops
where
    Ops: Operands + Accumulate,
    Ops::Lists: ConcatTypes,
    Ops::View: MaterializeAll<<Ops::Lists as ConcatTypes>::Output>,
{
    type Output = <Ops::Lists as ConcatTypes>::Output;

    fn concat(self) -> Self::Output {
        self.accumulate().materialize_all()
    }
}

/// The result of [`concat`](fn@concat) applied to the operand tuple `Ops`.
pub type Concatenated<Ops> = <<Ops as Tuple>::AsList as ConcatAll>::Output;

/// Concatenate any non-zero number of containers, each given by value, by shared reference or by
/// unique reference.
///
/// Elements of operands given by value are moved into the result; elements of operands given by
/// reference are cloned into it.
///
/// # Examples
///
/// ```
/// use tuplex::{concat, tuplex, Tuplex};
///
/// let first = tuplex!(1, String::from("two"));
/// let mut second = tuplex!(3.0);
/// let third = tuplex!('4', vec![5]);
///
/// let all: Tuplex![i32, String, f64, char, Vec<i32>] = concat((&first, &mut second, third));
/// assert_eq!(all, tuplex!(1, String::from("two"), 3.0, '4', vec![5]));
///
/// // The borrowed operands are untouched.
/// assert_eq!(first.get::<1>(), "two");
/// ```
///
/// Elements that are themselves references keep their kind in the result, so an operand holding
/// a `&mut T` can be moved in but not borrowed, since a unique reference cannot be cloned:
///
/// ```
/// use tuplex::{concat, tuplex, Tuplex};
///
/// let mut count = 0;
/// let holder = tuplex!(&mut count);
/// let all: Tuplex![&mut i32, char] = concat((holder, tuplex!('x')));
/// *all.take::<0>() += 1;
/// assert_eq!(count, 1);
/// ```
///
/// ```compile_fail
/// use tuplex::{concat, tuplex};
///
/// let mut count = 0;
/// let holder = tuplex!(&mut count);
/// let _ = concat((&holder, tuplex!('x')));
/// ```
///
/// There must be at least one operand:
///
/// ```compile_fail
/// let _ = tuplex::concat(());
/// ```
pub fn concat<Ops>(ops: Ops) -> Concatenated<Ops>
where
    Ops: Tuple,
    Ops::AsList: ConcatAll,
{
    ops.into_list().concat()
}
