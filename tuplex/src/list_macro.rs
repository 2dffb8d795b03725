/// Construct a container from a comma-separated list of values, in order.
///
/// Each value is moved into its cell and stored with exactly the type it has: write `&x` or
/// `&mut x` to store a reference. An empty invocation is [`Nil`](crate::Nil).
///
/// # Examples
///
/// ```
/// use tuplex::{tuplex, Cons, Nil, Tuplex};
///
/// let empty: Tuplex![] = tuplex!();
/// assert_eq!(empty, Nil);
///
/// let x = 5;
/// let list: Tuplex![i32, &i32, &str] = tuplex!(1, &x, "three");
/// assert_eq!(list, Cons::new(1, Cons::new(&5, Cons::new("three", Nil))));
/// ```
#[macro_export]
macro_rules! tuplex {
    () => {
        $crate::Nil
    };
    ($head:expr $(, $tail:expr)* $(,)?) => {
        $crate::Cons::new($head, $crate::tuplex!($($tail),*))
    };
}

/// The type of a container holding the given comma-separated list of types, in order.
///
/// # Examples
///
/// ```
/// use tuplex::{Cons, Nil, Tuplex};
/// use static_assertions::assert_type_eq_all;
///
/// assert_type_eq_all!(Tuplex![], Nil);
/// assert_type_eq_all!(Tuplex![u8, &str], Cons<u8, Cons<&str, Nil>>);
/// ```
#[macro_export]
macro_rules! Tuplex {
    () => {
        $crate::Nil
    };
    ($head:ty $(, $tail:ty)* $(,)?) => {
        $crate::Cons<$head, $crate::Tuplex![$($tail),*]>
    };
}
