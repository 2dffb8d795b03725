/*!
![license: MIT](https://img.shields.io/badge/license-MIT-blue)

> **tuplex (noun):** A tuple whose every element, every access and every rearrangement is settled
> by the compiler.

This crate provides a heterogeneous container of values, [`Cons`]/[`Nil`], together with a small
library of compile-time algorithms over it. Such a container:

- has **no runtime cost** in time or memory: it is laid out as the nested values themselves;
- is indexed by **compile-time positions only**, so an out-of-range index does not compile;
- preserves **how each element is accessed**, whether moved out, borrowed or mutably borrowed;
- can be **concatenated** with any number of others, each given by value or by reference.

## Quick reference

| Operation | Written as | Result |
| :-------- | :--------- | :----- |
| Construct | [`tuplex!(a, b, c)`](tuplex!) or [`Cons::new`] | [`Tuplex![A, B, C]`](Tuplex!) |
| Access | [`list.get::<I>()`](Cons::get), [`get_mut`](Cons::get_mut), [`take`](Cons::take), or [`get::<I, _>(list)`](fn@get) for any receiver | `&T`, `&mut T` or `T` |
| Size | [`size::<L>()`](size) or [`L::LEN`](TypeList::LEN) | `usize` known at compile time |
| Hold arguments as passed | [`forward_as_tuplex((a, &b, &mut c))`](forward_as_tuplex) | `Tuplex![A, &B, &mut C]` |
| Hold decayed copies of arguments | [`make_tuplex((&a, b, by_ref(&c)))`](make_tuplex) | `Tuplex![A, B, &C]` |
| Concatenate two | [`l.append(r)`](Append::append) | [`<L as Append<R>>::Output`](Append) |
| Concatenate many | [`concat((l1, &l2, &mut l3))`](fn@concat) | [`Concat<(L1, L2, L3)>`](Concat) |

Access follows the calling convention of the container it is given to, named after the
[`call_by`] conventions [`Val`](call_by::Val), [`Ref`](call_by::Ref) and [`Mut`](call_by::Mut):

```
use tuplex::{get, tuplex};

let mut list = tuplex!(1, String::from("two"));

let two: &String = get::<1, _>(&list);
assert_eq!(two, "two");

let one: &mut i32 = get::<0, _>(&mut list);
*one += 1;

let owned: String = get::<1, _>(list);
assert_eq!(owned, "two");
```

Positions are checked against the length of the container when the program is compiled:

```compile_fail
use tuplex::tuplex;

let list = tuplex!(1, 2, 3);
let _ = list.get::<3>();
```

Most programs should `use tuplex::prelude::*;`.
*/

#![recursion_limit = "256"]
#![allow(clippy::type_complexity)]
#![warn(missing_docs)]
#![warn(missing_copy_implementations, missing_debug_implementations)]
#![warn(unused_qualifications, unused_results)]
#![warn(future_incompatible)]
#![warn(unused)]
#![deny(rustdoc::broken_intra_doc_links)]

#[macro_use]
mod list_macro;

pub mod concat;
pub mod decay;
pub mod forward;
pub mod get;
pub mod list;
pub mod tuple;
pub mod unary;

pub use concat::{concat, Append, Concat, ConcatAll, ConcatTypes, Concatenated};
pub use decay::{by_mut, by_ref, by_val, make_tuplex, ByMut, ByRef, ByVal, Decay, Decayed};
pub use forward::{forward_as_tuplex, Forward};
pub use get::{get, Get};
pub use list::{size, Cons, Nil, TypeList};

/// Derive the by-value [`Decay`](trait@Decay) impl for a type, so that [`make_tuplex`] stores it
/// as itself.
pub use tuplex_macro::Decay;

/// The prelude module for quickly getting started with tuplex.
///
/// This module is designed to be imported as `use tuplex::prelude::*;`, which brings into scope
/// the container, its macros, the factories, and the traits whose methods they use.
pub mod prelude {
    #[doc(no_inline)]
    pub use crate::concat::Append;
    #[doc(no_inline)]
    pub use crate::forward::Forward;
    #[doc(no_inline)]
    pub use crate::list::TypeList;
    #[doc(no_inline)]
    pub use crate::tuple::{List, Tuple};
    #[doc(no_inline)]
    pub use crate::{
        by_mut, by_ref, by_val, concat, forward_as_tuplex, get, make_tuplex, size, tuplex, Cons,
        Nil, Tuplex,
    };
}
