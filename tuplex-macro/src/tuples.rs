use {
    proc_macro2::TokenStream,
    quote::{format_ident, quote},
    syn::{Ident, LitInt},
};

use crate::error::parse_bound;

/// Tuples longer than this aren't worth the compile time spent on their impls.
const MAX_ARITY: usize = 128;

pub fn impl_tuples(arity: &LitInt) -> syn::Result<TokenStream> {
    let max = parse_bound(arity, MAX_ARITY)?;
    Ok((0..=max).map(impl_tuple).collect())
}

/// The `Tuple` and `List` impls for a single arity.
fn impl_tuple(arity: usize) -> TokenStream {
    let tys: Vec<Ident> = (0..arity).map(|i| format_ident!("T{}", i)).collect();
    let vars: Vec<Ident> = (0..arity).map(|i| format_ident!("t{}", i)).collect();

    // Folding from the back builds `Cons<T0, Cons<T1, ... Nil>>` and its value counterpart.
    let list_ty = tys
        .iter()
        .rev()
        .fold(quote!(Nil), |rest, t| quote!(Cons<#t, #rest>));
    let list_val = vars
        .iter()
        .rev()
        .fold(quote!(Nil), |rest, v| quote!(Cons::new(#v, #rest)));

    quote! {
        impl<#(#tys),*> Tuple for (#(#tys,)*) {
            type AsList = #list_ty;

            #[allow(clippy::unused_unit)]
            fn into_list(self) -> Self::AsList {
                let (#(#vars,)*) = self;
                #list_val
            }
        }

        impl<#(#tys),*> List for #list_ty {
            type AsTuple = (#(#tys,)*);

            #[allow(clippy::unused_unit)]
            fn into_tuple(self) -> Self::AsTuple {
                let rest = self;
                #(let (#vars, rest) = rest.into_parts();)*
                let Nil = rest;
                (#(#vars,)*)
            }
        }
    }
}

pub fn impl_decay_tuples(arity: &LitInt) -> syn::Result<TokenStream> {
    let max = parse_bound(arity, MAX_ARITY)?;
    Ok((0..=max).map(impl_decay_tuple).collect())
}

/// A tuple is stored as it is, like any other value.
fn impl_decay_tuple(arity: usize) -> TokenStream {
    let tys: Vec<Ident> = (0..arity).map(|i| format_ident!("T{}", i)).collect();

    quote! {
        impl<#(#tys),*> Decay for (#(#tys,)*) {
            type Decayed = Self;

            #[inline]
            fn decay(self) -> Self {
                self
            }
        }
    }
}
