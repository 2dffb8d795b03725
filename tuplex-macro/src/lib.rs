//! Procedural macros used by and exported from the [`tuplex`](https://docs.rs/tuplex) crate.
//!
//! Most of what lives here generates the long, mechanical runs of trait impls which the type-level
//! machinery of `tuplex` relies on: conversions between flat tuples and inductive lists and
//! between `usize` constants and unary numbers, plus the by-value `Decay` impls for tuples. The
//! only macro meant for direct use is `#[derive(Decay)]`, which `tuplex` re-exports.

#![warn(missing_docs)]
#![warn(unused_qualifications, unused_results)]
#![warn(future_incompatible)]
#![warn(unused)]

extern crate proc_macro;

use {proc_macro::TokenStream, syn::parse_macro_input};

mod decay;
mod error;
mod tuples;
mod unary;

/// Generate the [`Tuple`] and [`List`] impls converting between flat tuples and their inductive
/// `Cons`/`Nil` lists, for every arity from `0` up to and including the given bound.
///
/// The invocation site must have `Cons`, `Nil`, `Tuple` and `List` in scope.
///
/// [`Tuple`]: https://docs.rs/tuplex/latest/tuplex/tuple/trait.Tuple.html
/// [`List`]: https://docs.rs/tuplex/latest/tuplex/tuple/trait.List.html
#[proc_macro]
pub fn impl_tuples(input: TokenStream) -> TokenStream {
    let arity = parse_macro_input!(input as syn::LitInt);
    tuples::impl_tuples(&arity)
        .unwrap_or_else(|err| err.to_compile_error())
        .into()
}

/// Generate the by-value `Decay` impls for flat tuples of every arity from `0` up to and including
/// the given bound, so that `make_tuplex` moves a tuple argument in whole.
///
/// The invocation site must have `Decay` in scope.
#[proc_macro]
pub fn impl_decay_tuples(input: TokenStream) -> TokenStream {
    let arity = parse_macro_input!(input as syn::LitInt);
    tuples::impl_decay_tuples(&arity)
        .unwrap_or_else(|err| err.to_compile_error())
        .into()
}

/// Generate the `ToUnary` and `ToConstant` impls relating `Number<N>` to the unary number `N`, for
/// every `N` from `0` up to and including the given bound.
///
/// The invocation site must have `Number`, `Z`, `S`, `ToUnary` and `ToConstant` in scope.
#[proc_macro]
pub fn generate_unary_conversion_impls(input: TokenStream) -> TokenStream {
    let bound = parse_macro_input!(input as syn::LitInt);
    unary::generate_conversion_impls(&bound)
        .unwrap_or_else(|err| err.to_compile_error())
        .into()
}

/// Derive `Decay` for a type which should be stored by value when passed to `make_tuplex`.
///
/// The derived impl decays the type to itself, so that owned arguments of this type are moved
/// into the resulting container unchanged.
///
/// # Examples
///
/// ```
/// use tuplex::{make_tuplex, Decay, Tuplex};
///
/// #[derive(Debug, Clone, PartialEq, Decay)]
/// struct Point {
///     x: i32,
///     y: i32,
/// }
///
/// let origin = Point { x: 0, y: 0 };
/// let list: Tuplex![Point, Point] = make_tuplex((origin.clone(), &origin));
/// assert_eq!(list.value(), &origin);
/// ```
#[proc_macro_derive(Decay)]
pub fn derive_decay(input: TokenStream) -> TokenStream {
    let input = parse_macro_input!(input as syn::DeriveInput);
    decay::derive(&input).into()
}
