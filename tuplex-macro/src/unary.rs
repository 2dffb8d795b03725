use {
    proc_macro2::{Literal, TokenStream},
    quote::quote,
    syn::LitInt,
};

use crate::error::parse_bound;

/// Deeper unary numbers run into the compiler's recursion limit when their value is computed.
const MAX_BOUND: usize = 256;

pub fn generate_conversion_impls(bound: &LitInt) -> syn::Result<TokenStream> {
    let max = parse_bound(bound, MAX_BOUND)?;

    let mut unary = quote!(Z);
    let mut impls = TokenStream::new();
    for n in 0..=max {
        let constant = Literal::usize_unsuffixed(n);
        impls.extend(quote! {
            impl ToUnary for Number<#constant> {
                type AsUnary = #unary;
            }

            impl ToConstant for #unary {
                type AsConstant = Number<#constant>;
            }
        });
        unary = quote!(S<#unary>);
    }
    Ok(impls)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn one_pair_of_impls_per_number() {
        let bound: LitInt = syn::parse_str("3").unwrap();
        let impls = generate_conversion_impls(&bound).unwrap().to_string();
        assert_eq!(impls.matches("impl ToUnary for").count(), 4);
        assert_eq!(impls.matches("impl ToConstant for").count(), 4);
        assert!(impls.contains("type AsUnary = S < S < S < Z > > >"));
    }

    #[test]
    fn oversized_bound_is_an_error() {
        let bound: LitInt = syn::parse_str("100000").unwrap();
        assert!(generate_conversion_impls(&bound).is_err());
    }
}
