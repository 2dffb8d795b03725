//! Type-level natural numbers, built from [`Z`] and [`S`].
//!
//! Positions in a list and lengths of lists are both unary numbers: indexing recurses on the
//! number the same way the list recurses on its cells. Const-generic indices such as the `I` in
//! [`Cons::get`](crate::Cons::get) are turned into unary numbers with [`UnaryOf`].

/// Index zero, and the length of [`Nil`](crate::Nil).
///
/// ```
/// use tuplex::{unary::Z, Nil, TypeList};
/// static_assertions::assert_type_eq_all!(<Nil as TypeList>::Length, Z);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct Z;

/// One more than `N`: the next index, or the length of a list with one more cell.
///
/// ```
/// use tuplex::{unary::{S, Z}, TypeList, Tuplex};
/// static_assertions::assert_type_eq_all!(<Tuplex![char] as TypeList>::Length, S<Z>);
/// ```
#[repr(transparent)]
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct S<N>(pub N);

/// The unary number for the constant `N`.
pub type UnaryOf<const N: usize> = <Number<N> as ToUnary>::AsUnary;

/// A unary number, readable back as a `usize` through [`VALUE`](Unary::VALUE).
///
/// # Examples
///
/// ```
/// # #![recursion_limit = "256"]
/// use tuplex::unary::*;
///
/// assert_eq!(Z::VALUE, 0);
/// assert_eq!(<S<S<Z>>>::VALUE, 2);
/// assert_eq!(<UnaryOf<128>>::VALUE, 128);
/// ```
pub trait Unary: sealed::Unary + Sized + Sync + Send + 'static {
    /// How many [`S`] wrap the innermost [`Z`].
    const VALUE: usize;
}

impl Unary for Z {
    const VALUE: usize = 0;
}

impl<N: Unary> Unary for S<N> {
    const VALUE: usize = N::VALUE + 1;
}

/// Holds when `Self` is strictly smaller than `N`.
///
/// Indexing checks `I: LessThan<Length>` before the list is touched, so an index past the end
/// is reported against the bound rather than deep inside the recursion.
///
/// # Examples
///
/// Index 1 of a two-element list is in range:
///
/// ```
/// use tuplex::unary::*;
///
/// fn in_range() where UnaryOf<1>: LessThan<UnaryOf<2>> {}
/// ```
///
/// Index 2 is not:
///
/// ```compile_fail
/// # use tuplex::unary::*;
/// fn past_the_end() where UnaryOf<2>: LessThan<UnaryOf<2>> {}
/// ```
///
/// Nothing is smaller than zero, so an empty list has no valid index:
///
/// ```compile_fail
/// # use tuplex::unary::*;
/// fn empty() where Z: LessThan<Z> {}
/// ```
pub trait LessThan<N: Unary>
where
    Self: Unary,
{
}

impl<N: Unary> LessThan<S<N>> for Z {}

impl<N: Unary, M: LessThan<N>> LessThan<S<N>> for S<M> {}

/// The sum of the two numbers in a pair.
///
/// Used for the length of a concatenation.
///
/// # Examples
///
/// ```
/// use tuplex::unary::*;
/// use static_assertions::assert_type_eq_all;
///
/// assert_type_eq_all!(<(UnaryOf<0>, UnaryOf<3>) as Add>::Result, UnaryOf<3>);
/// assert_type_eq_all!(<(UnaryOf<4>, UnaryOf<9>) as Add>::Result, UnaryOf<13>);
/// ```
pub trait Add: sealed::Add {
    /// `Self.0 + Self.1`.
    type Result: Unary;
}

impl<N: Unary> Add for (N, Z) {
    type Result = N;
}

// Peel one successor off the right operand per step.
impl<N: Unary, M: Unary> Add for (N, S<M>)
where
    (N, M): Add,
{
    type Result = S<<(N, M) as Add>::Result>;
}

/// Implemented only by [`Number`].
pub trait Constant: sealed::Constant {}

/// Lifts a const generic `usize` into a type, so that it can be mapped to its unary number.
#[allow(missing_debug_implementations)]
pub struct Number<const N: usize>;

impl<const N: usize> Constant for Number<N> {}

/// Maps [`Number<N>`] to the unary number with `N` successors.
///
/// Implemented for every `N` up to 128.
pub trait ToUnary {
    /// The unary number.
    type AsUnary: Unary + ToConstant<AsConstant = Self>;
}

/// The inverse of [`ToUnary`].
pub trait ToConstant: Unary {
    /// The wrapped constant.
    type AsConstant: Constant + ToUnary<AsUnary = Self>;
}

tuplex_macro::generate_unary_conversion_impls!(128);

mod sealed {
    use super::{Number, S, Z};

    pub trait Unary: 'static {}
    impl Unary for Z {}
    impl<N: Unary> Unary for S<N> {}

    pub trait Constant: 'static {}
    impl<const N: usize> Constant for Number<N> {}

    pub trait Add {}
    impl<N: super::Unary, M: super::Unary> Add for (N, M) {}
}
