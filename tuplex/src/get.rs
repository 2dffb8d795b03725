//! Positional access into a list, by a statically known index.
//!
//! Access follows the way the list itself is given, as with the calling conventions of the
//! [`call_by`] crate:
//!
//! | Given       | Convention            | Element at `I`  |
//! |-------------|-----------------------|-----------------|
//! | `L` (owned) | [`Val`](call_by::Val) | `T` (moved out) |
//! | `&'a L`     | [`Ref`](call_by::Ref) | `&'a T`         |
//! | `&'a mut L` | [`Mut`](call_by::Mut) | `&'a mut T`     |
//!
//! The element type `T` is reported exactly as it is stored, so a list holding a `&str` yields a
//! `&&str` when accessed by shared reference.
//!
//! Indexing recurses on the unary index alongside the list: index zero is the front of the list
//! and index `S<N>` is index `N` of the rest. An index past the end has no [`Get`] impl, so it is
//! rejected when the program is compiled.

use crate::{list::*, unary::*};

/// Take apart a list, or a reference to one, into its front and the rest.
///
/// The parts are moved out of an owned list, and borrowed from a borrowed one.
pub trait Uncons: Sized {
    /// The front element, owned or borrowed.
    type Front;
    /// The rest of the list, owned or borrowed.
    type Rest;

    /// Split into the front element and the rest of the list.
    fn uncons(self) -> (Self::Front, Self::Rest);
}

impl<T, Ts> Uncons for Cons<T, Ts> {
    type Front = T;
    type Rest = Ts;

    fn uncons(self) -> (T, Ts) {
        self.into_parts()
    }
}

impl<'a, T, Ts> Uncons for &'a Cons<T, Ts> {
    type Front = &'a T;
    type Rest = &'a Ts;

    fn uncons(self) -> (&'a T, &'a Ts) {
        self.parts()
    }
}

impl<'a, T, Ts> Uncons for &'a mut Cons<T, Ts> {
    type Front = &'a mut T;
    type Rest = &'a mut Ts;

    fn uncons(self) -> (&'a mut T, &'a mut Ts) {
        self.parts_mut()
    }
}

impl<T, Ts> Uncons for (T, Ts) {
    type Front = T;
    type Rest = Ts;

    fn uncons(self) -> (T, Ts) {
        self
    }
}

impl<'a, T, Ts> Uncons for &'a (T, Ts) {
    type Front = &'a T;
    type Rest = &'a Ts;

    fn uncons(self) -> (&'a T, &'a Ts) {
        (&self.0, &self.1)
    }
}

impl<'a, T, Ts> Uncons for &'a mut (T, Ts) {
    type Front = &'a mut T;
    type Rest = &'a mut Ts;

    fn uncons(self) -> (&'a mut T, &'a mut Ts) {
        (&mut self.0, &mut self.1)
    }
}

/// Access the element at the unary index `N`.
///
/// This is implemented for owned lists and for shared and unique references to lists, and the
/// [`Output`](Get::Output) follows suit. Most of the time the free function [`get`](fn@get) or
/// the inherent [`Cons::get`] are more convenient than naming this trait.
pub trait Get<N: Unary>: Uncons {
    /// The element at index `N`, by the calling convention of `Self`.
    type Output;

    /// Access the element at index `N`, discarding the rest.
    fn element(self) -> Self::Output;
}

impl<L: Uncons> Get<Z> for L {
    type Output = L::Front;

    fn element(self) -> Self::Output {
        self.uncons().0
    }
}

impl<N: Unary, L: Uncons> Get<S<N>> for L
where
    L::Rest: Get<N>,
{
    type Output = <L::Rest as Get<N>>::Output;

    fn element(self) -> Self::Output {
        self.uncons().1.element()
    }
}

/// Access the element at index `I` of a list, an owned list or a reference to one.
///
/// # Examples
///
/// ```
/// use tuplex::{get, tuplex};
///
/// let mut list = tuplex!(1, String::from("two"), 3.0);
///
/// assert_eq!(get::<1, _>(&list), "two");
/// *get::<0, _>(&mut list) += 10;
/// assert_eq!(get::<0, _>(&list), &11);
///
/// let two: String = get::<1, _>(list);
/// assert_eq!(two, "two");
/// ```
///
/// An index past the end of the list is a compile error:
///
/// ```compile_fail
/// use tuplex::{get, tuplex};
///
/// let list = tuplex!(1, 2);
/// let _ = get::<2, _>(&list);
/// ```
pub fn get<const I: usize, L>(list: L) -> <L as Get<UnaryOf<I>>>::Output
where
    Number<I>: ToUnary,
    L: Get<UnaryOf<I>>,
{
    list.element()
}

impl<T, Ts: TypeList> Cons<T, Ts> {
    /// A shared reference to the element at index `I`.
    ///
    /// # Examples
    ///
    /// ```
    /// use tuplex::tuplex;
    ///
    /// let list = tuplex!(1, "two", 3.0);
    /// assert_eq!(list.get::<0>(), &1);
    /// assert_eq!(list.get::<2>(), &3.0);
    /// ```
    ///
    /// ```compile_fail
    /// use tuplex::tuplex;
    ///
    /// let list = tuplex!(1, "two", 3.0);
    /// let _ = list.get::<3>();
    /// ```
    pub fn get<'a, const I: usize>(&'a self) -> <&'a Self as Get<UnaryOf<I>>>::Output
    where
        Number<I>: ToUnary,
        UnaryOf<I>: LessThan<<Self as TypeList>::Length>,
        &'a Self: Get<UnaryOf<I>>,
    {
        self.element()
    }

    /// A unique reference to the element at index `I`.
    ///
    /// # Examples
    ///
    /// ```
    /// use tuplex::tuplex;
    ///
    /// let mut list = tuplex!(1, vec!['a']);
    /// list.get_mut::<1>().push('b');
    /// assert_eq!(list.get::<1>(), &['a', 'b']);
    /// ```
    pub fn get_mut<'a, const I: usize>(&'a mut self) -> <&'a mut Self as Get<UnaryOf<I>>>::Output
    where
        Number<I>: ToUnary,
        UnaryOf<I>: LessThan<<Self as TypeList>::Length>,
        &'a mut Self: Get<UnaryOf<I>>,
    {
        self.element()
    }

    /// Move the element at index `I` out of the list, dropping every other element.
    ///
    /// # Examples
    ///
    /// ```
    /// use tuplex::tuplex;
    ///
    /// let list = tuplex!(1, String::from("kept"), 3.0);
    /// let kept: String = list.take::<1>();
    /// assert_eq!(kept, "kept");
    /// ```
    pub fn take<const I: usize>(self) -> <Self as Get<UnaryOf<I>>>::Output
    where
        Number<I>: ToUnary,
        UnaryOf<I>: LessThan<<Self as TypeList>::Length>,
        Self: Get<UnaryOf<I>>,
    {
        self.element()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use static_assertions::{assert_impl_all, assert_not_impl_any, assert_type_eq_all};

    type Ints = Tuplex![i32, f32, &'static str];

    assert_type_eq_all!(<Ints as Get<UnaryOf<0>>>::Output, i32);
    assert_type_eq_all!(<&'static Ints as Get<UnaryOf<2>>>::Output, &'static &'static str);
    assert_type_eq_all!(<&'static mut Ints as Get<UnaryOf<1>>>::Output, &'static mut f32);
    assert_type_eq_all!(<&'static Ints as Uncons>::Rest, &'static Tuplex![f32, &'static str]);
    assert_type_eq_all!(<&'static mut (u8, ()) as Uncons>::Front, &'static mut u8);

    assert_impl_all!(Ints: Get<UnaryOf<2>>);
    assert_not_impl_any!(Ints: Get<UnaryOf<3>>);
    assert_not_impl_any!(Nil: Get<Z>);
    assert_not_impl_any!(&'static Nil: Get<Z>);

    #[test]
    fn every_index_by_every_convention() {
        let mut list = tuplex!(1, 2.0f32, "three");
        assert_eq!(*get::<0, _>(&list), 1);
        assert_eq!(*get::<1, _>(&list), 2.0);
        assert_eq!(*get::<2, _>(&list), "three");

        *get::<0, _>(&mut list) = 10;
        *get::<1, _>(&mut list) = 20.0;
        *get::<2, _>(&mut list) = "thirty";
        assert_eq!(list, tuplex!(10, 20.0, "thirty"));

        assert_eq!(get::<0, _>(list), 10);
        assert_eq!(get::<1, _>(list), 20.0);
        assert_eq!(get::<2, _>(list), "thirty");
    }

    #[test]
    fn stored_references_are_reached_through() {
        let mut target = 5;
        let mut list = tuplex!(&mut target, 'x');
        **list.get_mut::<0>() += 1;
        let stored: &mut i32 = list.take::<0>();
        *stored += 1;
        assert_eq!(target, 7);
    }

    #[test]
    fn pair_lists_are_indexable() {
        let mut pairs = (1u8, ("two", (3.0f64, ())));
        assert_eq!(*get::<1, _>(&pairs), "two");
        *get::<2, _>(&mut pairs) *= 2.0;
        assert_eq!(get::<2, _>(pairs), 6.0);
    }

    #[test]
    fn element_is_address_of_storage() {
        let list = tuplex!(1u64, 2u64);
        let via_get: *const u64 = list.get::<1>();
        let via_rest: *const u64 = list.rest().value();
        assert_eq!(via_get, via_rest);
    }
}
