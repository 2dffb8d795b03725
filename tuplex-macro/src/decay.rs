use {
    proc_macro2::{Span, TokenStream},
    proc_macro_crate::{crate_name, FoundCrate},
    quote::quote,
    syn::{DeriveInput, Ident},
};

pub fn derive(input: &DeriveInput) -> TokenStream {
    let krate = tuplex_crate();
    let name = &input.ident;
    let (impl_generics, ty_generics, where_clause) = input.generics.split_for_impl();

    quote! {
        impl #impl_generics #krate::Decay for #name #ty_generics #where_clause {
            type Decayed = Self;

            #[inline]
            fn decay(self) -> Self {
                self
            }
        }
    }
}

/// The path to the `tuplex` crate as seen from the invocation site, even if it was renamed.
fn tuplex_crate() -> TokenStream {
    let name = match crate_name("tuplex") {
        Ok(FoundCrate::Name(name)) => name,
        Ok(FoundCrate::Itself) | Err(_) => "tuplex".to_owned(),
    };
    let ident = Ident::new(&name, Span::call_site());
    quote!(::#ident)
}
