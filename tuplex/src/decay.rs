//! Value-decaying construction: containers that own a copy of everything they are given.
//!
//! [`make_tuplex`] passes each argument through [`Decay`]. A borrowed argument is cloned into an
//! owned value, a value is moved in unchanged, and the wrappers [`ByRef`] and [`ByMut`] are the
//! way to ask for a reference to be stored after all. [`ByVal`] moves in a value of a type which
//! has no [`Decay`] impl of its own.
//!
//! Borrowed string slices, slices and other unsized values cannot be stored by value, so they
//! decay to the reference itself, the way an array decays to a pointer to its first element.
//! Decaying allocates only where cloning a referent does.

use std::{
    any::{Any, TypeId},
    borrow::Cow,
    cell::{Cell, RefCell},
    cmp::{Ordering, Reverse},
    collections::{BTreeMap, BTreeSet, BinaryHeap, HashMap, HashSet, LinkedList, VecDeque},
    error::Error,
    ffi::{CStr, CString, OsStr, OsString},
    fmt,
    marker::{PhantomData, PhantomPinned},
    mem::ManuallyDrop,
    net::{IpAddr, Ipv4Addr, Ipv6Addr, SocketAddr, SocketAddrV4, SocketAddrV6},
    num::{
        NonZeroI128, NonZeroI16, NonZeroI32, NonZeroI64, NonZeroI8, NonZeroIsize, NonZeroU128,
        NonZeroU16, NonZeroU32, NonZeroU64, NonZeroU8, NonZeroUsize, Wrapping,
    },
    ops::{Range, RangeFrom, RangeFull, RangeInclusive, RangeTo, RangeToInclusive},
    path::{Path, PathBuf},
    pin::Pin,
    rc::{self, Rc},
    sync::{self, Arc, Mutex, RwLock},
    time::{Duration, Instant, SystemTime},
};

use derivative::Derivative;

use crate::{list::*, tuple::Tuple};

/// Convert an argument into the form in which [`make_tuplex`] stores it.
///
/// - `&T` and `&mut T` decay to a clone of the `T` they point to.
/// - `&str`, `&[T]`, `&Path`, `&OsStr`, `&CStr` and references to the common std trait objects
///   decay to themselves, since what they point to has no size known at compile time.
/// - Values decay to themselves. This is implemented for the std value types, native tuples up
///   to arity 64 and function pointers, and `#[derive(Decay)]` provides it for your own types.
/// - [`ByRef`] and [`ByMut`] decay to the reference they hold, and [`ByVal`] to the value.
pub trait Decay: Sized {
    /// The stored form of the argument.
    type Decayed;

    /// Convert the argument into its stored form.
    fn decay(self) -> Self::Decayed;
}

// `T` is implicitly `Sized` in both of these, which keeps them apart from the unsized referents
// below.
impl<'a, T: Clone> Decay for &'a T {
    type Decayed = T;

    fn decay(self) -> T {
        T::clone(self)
    }
}

impl<'a, T: Clone> Decay for &'a mut T {
    type Decayed = T;

    fn decay(self) -> T {
        T::clone(self)
    }
}

macro_rules! decay_by_reference {
    ($([$($generics:tt)*] $ty:ty),* $(,)?) => {
        $(
            impl<'a, $($generics)*> Decay for &'a $ty {
                type Decayed = Self;

                #[inline]
                fn decay(self) -> Self {
                    self
                }
            }

            impl<'a, $($generics)*> Decay for &'a mut $ty {
                type Decayed = Self;

                #[inline]
                fn decay(self) -> Self {
                    self
                }
            }
        )*
    };
}

decay_by_reference! {
    [] str,
    [T] [T],
    [] Path,
    [] OsStr,
    [] CStr,
    [] dyn Any,
    [] dyn Any + Send,
    [] dyn Any + Send + Sync,
    [] dyn Error,
    [] dyn Error + Send + Sync,
    [] dyn fmt::Debug,
    [] dyn fmt::Display,
}

/// A shared reference which [`make_tuplex`] stores as a reference, rather than copying what it
/// points to. Build one with [`by_ref`].
#[derive(Derivative)]
#[derivative(Debug(bound = "T: fmt::Debug"), Clone(bound = ""), Copy(bound = ""))]
pub struct ByRef<'a, T: ?Sized>(pub &'a T);

/// A unique reference which [`make_tuplex`] stores as a reference, rather than copying what it
/// points to. Build one with [`by_mut`].
#[derive(Derivative)]
#[derivative(Debug(bound = "T: fmt::Debug"))]
pub struct ByMut<'a, T: ?Sized>(pub &'a mut T);

/// A value which [`make_tuplex`] moves in as it is, whatever its type. Build one with [`by_val`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct ByVal<T>(pub T);

/// Mark a shared reference to be stored as-is by [`make_tuplex`].
pub fn by_ref<T: ?Sized>(reference: &T) -> ByRef<'_, T> {
    ByRef(reference)
}

/// Mark a unique reference to be stored as-is by [`make_tuplex`].
pub fn by_mut<T: ?Sized>(reference: &mut T) -> ByMut<'_, T> {
    ByMut(reference)
}

/// Mark a value to be moved in as-is by [`make_tuplex`], for types without a [`Decay`] impl.
///
/// # Examples
///
/// ```
/// use tuplex::{by_val, make_tuplex, Tuplex};
///
/// struct Opaque(u8);
///
/// let list: Tuplex![Opaque, u8] = make_tuplex((by_val(Opaque(1)), 2u8));
/// assert_eq!(list.value().0, 1);
/// ```
pub fn by_val<T>(value: T) -> ByVal<T> {
    ByVal(value)
}

impl<'a, T: ?Sized> Decay for ByRef<'a, T> {
    type Decayed = &'a T;

    fn decay(self) -> &'a T {
        self.0
    }
}

impl<'a, T: ?Sized> Decay for ByMut<'a, T> {
    type Decayed = &'a mut T;

    fn decay(self) -> &'a mut T {
        self.0
    }
}

impl<T> Decay for ByVal<T> {
    type Decayed = T;

    fn decay(self) -> T {
        self.0
    }
}

macro_rules! decay_by_value {
    ($([$($generics:tt)*] $ty:ty),* $(,)?) => {
        $(
            impl<$($generics)*> Decay for $ty {
                type Decayed = Self;

                #[inline]
                fn decay(self) -> Self {
                    self
                }
            }
        )*
    };
}

decay_by_value! {
    [] bool, [] char,
    [] u8, [] u16, [] u32, [] u64, [] u128, [] usize,
    [] i8, [] i16, [] i32, [] i64, [] i128, [] isize,
    [] f32, [] f64,
    [] NonZeroU8, [] NonZeroU16, [] NonZeroU32, [] NonZeroU64, [] NonZeroU128, [] NonZeroUsize,
    [] NonZeroI8, [] NonZeroI16, [] NonZeroI32, [] NonZeroI64, [] NonZeroI128, [] NonZeroIsize,
    [T] Wrapping<T>,
    [] Ordering,
    [T] Reverse<T>,
    [] Duration, [] Instant, [] SystemTime,
    [] TypeId,
    [] String, [] PathBuf, [] OsString, [] CString,
    [] IpAddr, [] Ipv4Addr, [] Ipv6Addr, [] SocketAddr, [] SocketAddrV4, [] SocketAddrV6,
    [T, const N: usize] [T; N],
    [T] Vec<T>,
    [T] VecDeque<T>,
    [T] LinkedList<T>,
    [T] BinaryHeap<T>,
    [K, V, H] HashMap<K, V, H>,
    [T, H] HashSet<T, H>,
    [K, V] BTreeMap<K, V>,
    [T] BTreeSet<T>,
    [T: ?Sized] Box<T>,
    [T: ?Sized] Rc<T>,
    [T: ?Sized] rc::Weak<T>,
    [T: ?Sized] Arc<T>,
    [T: ?Sized] sync::Weak<T>,
    ['a, T: ?Sized + ToOwned] Cow<'a, T>,
    [T] Option<T>,
    [T, E] Result<T, E>,
    [T] Cell<T>,
    [T] RefCell<T>,
    [T] Mutex<T>,
    [T] RwLock<T>,
    [T] ManuallyDrop<T>,
    [P] Pin<P>,
    [T] Range<T>,
    [T] RangeInclusive<T>,
    [T] RangeFrom<T>,
    [T] RangeTo<T>,
    [T] RangeToInclusive<T>,
    [] RangeFull,
    [T: ?Sized] PhantomData<T>,
    [] PhantomPinned,
    [R] fn() -> R,
    [A, R] fn(A) -> R,
    [A, B, R] fn(A, B) -> R,
    [A, B, C, R] fn(A, B, C) -> R,
    [A, B, C, D, R] fn(A, B, C, D) -> R,
    [] Nil,
    [T, Ts] Cons<T, Ts>,
}

tuplex_macro::impl_decay_tuples!(64);

/// Decay every element of a list.
pub trait DecayAll: TypeList {
    /// The list of decayed elements.
    type Decayed: TypeList;

    /// Decay every element, front to back.
    fn decay_all(self) -> Self::Decayed;
}

impl DecayAll for Nil {
    type Decayed = Nil;

    fn decay_all(self) -> Nil {
        self
    }
}

impl<T: Decay, Ts: DecayAll> DecayAll for Cons<T, Ts> {
    type Decayed = Cons<T::Decayed, Ts::Decayed>;

    fn decay_all(self) -> Self::Decayed {
        let (head, tail) = self.into_parts();
        Cons::new(head.decay(), tail.decay_all())
    }
}

/// The container that [`make_tuplex`] builds from the argument tuple `Args`.
pub type Decayed<Args> = <<Args as Tuple>::AsList as DecayAll>::Decayed;

/// Build a container which owns a decayed copy of every argument.
///
/// # Examples
///
/// ```
/// use tuplex::{by_mut, by_ref, make_tuplex, Tuplex};
///
/// let name = String::from("copied");
/// let limit = 10;
/// let mut total = 0;
///
/// let list: Tuplex![String, i32, &i32, &mut i32, &str] =
///     make_tuplex((&name, 5_i32, by_ref(&limit), by_mut(&mut total), "kept"));
///
/// let (copy, rest) = list.into_parts();
/// assert_eq!(copy, name);
/// assert!(!std::ptr::eq(&copy, &name));
///
/// let (five, rest) = rest.into_parts();
/// let (limit_ref, rest) = rest.into_parts();
/// let (total_ref, rest) = rest.into_parts();
/// *total_ref += five + limit_ref;
/// assert_eq!(total, 15);
/// assert_eq!(rest.into_value(), "kept");
/// ```
pub fn make_tuplex<Args>(args: Args) -> Decayed<Args>
where
    Args: Tuple,
    Args::AsList: DecayAll,
{
    args.into_list().decay_all()
}

#[cfg(test)]
mod tests {
    use super::*;
    use static_assertions::{assert_impl_all, assert_type_eq_all};

    assert_type_eq_all!(<&'static String as Decay>::Decayed, String);
    assert_type_eq_all!(<&'static mut Vec<u8> as Decay>::Decayed, Vec<u8>);
    assert_type_eq_all!(<&'static &'static str as Decay>::Decayed, &'static str);
    assert_type_eq_all!(<&'static str as Decay>::Decayed, &'static str);
    assert_type_eq_all!(<&'static [u8] as Decay>::Decayed, &'static [u8]);
    assert_type_eq_all!(<&'static mut [u8] as Decay>::Decayed, &'static mut [u8]);
    assert_type_eq_all!(<&'static Path as Decay>::Decayed, &'static Path);
    assert_type_eq_all!(<&'static dyn fmt::Debug as Decay>::Decayed, &'static dyn fmt::Debug);
    assert_type_eq_all!(<&'static [u8; 3] as Decay>::Decayed, [u8; 3]);
    assert_type_eq_all!(<ByRef<'static, str> as Decay>::Decayed, &'static str);
    assert_type_eq_all!(<ByMut<'static, u8> as Decay>::Decayed, &'static mut u8);
    assert_type_eq_all!(<ByVal<std::thread::ThreadId> as Decay>::Decayed, std::thread::ThreadId);
    assert_type_eq_all!(<(u8, &'static str) as Decay>::Decayed, (u8, &'static str));
    assert_type_eq_all!(<&'static (u8, char) as Decay>::Decayed, (u8, char));
    assert_type_eq_all!(<fn(u8) -> bool as Decay>::Decayed, fn(u8) -> bool);
    assert_type_eq_all!(
        Decayed<(&'static u8, Option<i8>, ByRef<'static, u16>)>,
        Tuplex![u8, Option<i8>, &'static u16]
    );
    assert_type_eq_all!(
        Decayed<(Duration, NonZeroU32, Ordering, ())>,
        Tuplex![Duration, NonZeroU32, Ordering, ()]
    );
    assert_impl_all!(ByRef<'static, String>: Copy, Clone, fmt::Debug);

    #[test]
    fn references_are_cloned() {
        let text = String::from("text");
        let numbers = [1, 2];
        let list = make_tuplex((&text, &numbers, &mut 3));
        let (a, rest) = list.into_parts();
        let (b, rest) = rest.into_parts();
        assert_eq!(a, text);
        assert!(!std::ptr::eq(&a, &text));
        assert_eq!(b, [1, 2]);
        assert_eq!(rest.into_value(), 3);
    }

    #[test]
    fn unsized_referents_are_kept_in_place() {
        let text = String::from("text");
        let numbers = vec![1, 2, 3];
        let list = make_tuplex((text.as_str(), &numbers[1..], Path::new("a/b")));
        let (a, rest) = list.into_parts();
        let (b, rest) = rest.into_parts();
        assert!(std::ptr::eq(a, text.as_str()));
        assert!(std::ptr::eq(b, &numbers[1..]));
        assert_eq!(rest.into_value(), Path::new("a/b"));
    }

    #[test]
    fn trait_objects_are_kept_in_place() {
        let value = 7u8;
        let shown: &dyn fmt::Display = &value;
        let list = make_tuplex((shown, 'c'));
        assert_eq!(list.value().to_string(), "7");
    }

    #[test]
    fn std_values_and_tuples_are_moved() {
        let pair = (1u8, String::from("pair"));
        let list = make_tuplex((pair, Duration::from_secs(2), 1u8.cmp(&2)));
        let (pair, rest) = list.into_parts();
        assert_eq!(pair, (1, String::from("pair")));
        assert_eq!(rest, tuplex!(Duration::from_secs(2), Ordering::Less));
    }

    #[test]
    fn function_pointers_are_stored() {
        fn double(x: u8) -> u8 {
            x * 2
        }
        let list = make_tuplex((double as fn(u8) -> u8, 4u8));
        let (f, rest) = list.into_parts();
        assert_eq!(f(rest.into_value()), 8);
    }

    #[test]
    fn wrappers_keep_references() {
        let shared = 1;
        let mut unique = 2;
        let list = make_tuplex((by_ref(&shared), by_mut(&mut unique)));
        let (shared_ref, rest) = list.into_parts();
        assert!(std::ptr::eq(shared_ref, &shared));
        *rest.into_value() += 1;
        assert_eq!(unique, 3);
    }

    #[test]
    fn empty_arguments() {
        assert_eq!(make_tuplex(()), Nil);
    }
}
