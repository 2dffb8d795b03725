//! Reference-preserving construction: containers that hold their arguments exactly as passed.

use crate::{list::*, tuple::Tuple};

/// Build a container holding every argument exactly as it was passed.
///
/// Arguments passed by value are moved in; arguments passed as `&T` or `&mut T` are stored as
/// those references. Nothing is cloned and nothing is converted, so the element types are
/// precisely the argument types.
///
/// # Examples
///
/// ```
/// use tuplex::{forward_as_tuplex, Tuplex};
///
/// let name = String::from("shared");
/// let mut count = 0;
///
/// let view: Tuplex![&String, &mut i32, char] = forward_as_tuplex((&name, &mut count, 'c'));
/// assert!(std::ptr::eq(*view.get::<0>(), &name));
///
/// *view.take::<1>() += 1;
/// assert_eq!(count, 1);
/// ```
pub fn forward_as_tuplex<Args: Tuple>(args: Args) -> Args::AsList {
    args.into_list()
}

/// Make a view of a container in which each element is forwarded the way the container itself
/// was passed.
///
/// - A container passed by value is its own view, with every element moved along.
/// - A container passed by `&'a` becomes a container of `&'a T` for each of its `T`.
/// - A container passed by `&'a mut` becomes a container of `&'a mut T` for each of its `T`.
///
/// Views are what [`concat`](fn@crate::concat) splices together before materializing the result.
///
/// # Examples
///
/// ```
/// use tuplex::{forward::Forward, tuplex, Tuplex};
///
/// let mut list = tuplex!(1, String::from("two"));
///
/// let shared: Tuplex![&i32, &String] = (&list).forward();
/// assert_eq!(shared.get::<1>().as_str(), "two");
///
/// let unique: Tuplex![&mut i32, &mut String] = (&mut list).forward();
/// unique.take::<1>().push('!');
/// assert_eq!(list.get::<1>(), "two!");
/// ```
pub trait Forward: Sized {
    /// The container being viewed, with references stripped from the receiver.
    type List: TypeList;
    /// The container of forwarded elements.
    type View: TypeList;

    /// Forward each element into the view.
    fn forward(self) -> Self::View;
}

impl Forward for Nil {
    type List = Nil;
    type View = Nil;

    fn forward(self) -> Nil {
        self
    }
}

impl<T, Ts: TypeList> Forward for Cons<T, Ts> {
    type List = Self;
    type View = Self;

    fn forward(self) -> Self {
        self
    }
}

impl<'a, L> Forward for &'a L
where
    L: TypeList + ForwardRef<'a>,
{
    type List = L;
    type View = L::View;

    fn forward(self) -> L::View {
        L::forward_ref(self)
    }
}

impl<'a, L> Forward for &'a mut L
where
    L: TypeList + ForwardMut<'a>,
{
    type List = L;
    type View = L::View;

    fn forward(self) -> L::View {
        L::forward_mut(self)
    }
}

/// The view of a list borrowed for `'a`: a list of `&'a T` for each of its `T`.
///
/// Implemented on the list itself, and each cell needs exactly one bound on its tail.
pub trait ForwardRef<'a> {
    /// The list of shared references.
    type View: TypeList;

    /// Borrow every element.
    fn forward_ref(&'a self) -> Self::View;
}

impl<'a> ForwardRef<'a> for Nil {
    type View = Nil;

    fn forward_ref(&'a self) -> Nil {
        Nil
    }
}

impl<'a, T: 'a, Ts: ForwardRef<'a>> ForwardRef<'a> for Cons<T, Ts> {
    type View = Cons<&'a T, Ts::View>;

    fn forward_ref(&'a self) -> Self::View {
        let (head, tail) = self.parts();
        Cons::new(head, tail.forward_ref())
    }
}

/// The view of a list mutably borrowed for `'a`: a list of `&'a mut T` for each of its `T`.
pub trait ForwardMut<'a> {
    /// The list of unique references.
    type View: TypeList;

    /// Mutably borrow every element.
    fn forward_mut(&'a mut self) -> Self::View;
}

impl<'a> ForwardMut<'a> for Nil {
    type View = Nil;

    fn forward_mut(&'a mut self) -> Nil {
        Nil
    }
}

impl<'a, T: 'a, Ts: ForwardMut<'a>> ForwardMut<'a> for Cons<T, Ts> {
    type View = Cons<&'a mut T, Ts::View>;

    fn forward_mut(&'a mut self) -> Self::View {
        let (head, tail) = self.parts_mut();
        Cons::new(head, tail.forward_mut())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use static_assertions::assert_type_eq_all;

    type Pair = Tuplex![u8, String];

    assert_type_eq_all!(<Pair as Forward>::View, Pair);
    assert_type_eq_all!(<&'static Pair as Forward>::View, Tuplex![&'static u8, &'static String]);
    assert_type_eq_all!(
        <&'static mut Pair as Forward>::View,
        Tuplex![&'static mut u8, &'static mut String]
    );
    assert_type_eq_all!(<&'static mut Pair as Forward>::List, Pair);
    assert_type_eq_all!(<&'static Nil as Forward>::View, Nil);

    #[test]
    fn arguments_are_stored_as_passed() {
        let owned = String::from("owned");
        let borrowed = String::from("borrowed");
        let mut unique = vec![1];

        let list: Tuplex![String, &String, &mut Vec<i32>] =
            forward_as_tuplex((owned, &borrowed, &mut unique));
        let (owned, shared, unique_ref) = {
            let (a, rest) = list.into_parts();
            let (b, rest) = rest.into_parts();
            (a, b, rest.into_value())
        };
        unique_ref.push(2);

        assert_eq!(owned, "owned");
        assert!(std::ptr::eq(shared, &borrowed));
        assert_eq!(unique, [1, 2]);
    }

    #[test]
    fn shared_view_points_into_the_list() {
        let list = tuplex!(1u32, 2u64);
        let view = (&list).forward();
        assert!(std::ptr::eq(*view.value(), list.value()));
        assert!(std::ptr::eq(*view.rest().value(), list.rest().value()));
    }

    #[test]
    fn empty_views() {
        assert_eq!(forward_as_tuplex(()), Nil);
        assert_eq!((&Nil).forward(), Nil);
        assert_eq!((&mut Nil).forward(), Nil);
    }
}
