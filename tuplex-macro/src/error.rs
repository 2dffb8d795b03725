use {proc_macro2::Span, thiserror::Error};

/// Errors in the arguments given to the impl-generating macros.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum MacroError {
    /// The requested bound is larger than the macro is willing to generate impls for.
    #[error("cannot generate impls up to {requested}: the largest supported bound is {max}")]
    BoundTooLarge {
        /// The bound given in the invocation.
        requested: usize,
        /// The largest bound the macro accepts.
        max: usize,
    },
}

impl MacroError {
    /// Attach this error to a location in the macro's input.
    pub fn at(self, span: Span) -> syn::Error {
        syn::Error::new(span, self)
    }
}

/// Parse an integer literal bound, rejecting anything above `max`.
pub fn parse_bound(lit: &syn::LitInt, max: usize) -> syn::Result<usize> {
    let requested = lit.base10_parse::<usize>()?;
    if requested > max {
        return Err(MacroError::BoundTooLarge { requested, max }.at(lit.span()));
    }
    Ok(requested)
}
