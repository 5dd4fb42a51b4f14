//! Procedural macros for the `seqview` sequence-view library.

use proc_macro::TokenStream;
use proc_macro2::TokenStream as TokenStream2;
use quote::quote;
use syn::{parse_macro_input, parse_quote, DeriveInput};

/// Derive the `View` marker together with the identity `IntoView` impl.
///
/// A view is a sequence with lightweight-handle semantics: O(1) copy/move
/// and no deep storage of elements. Deriving `View` asserts that contract
/// and wires the type into the `IntoView` deduction rule, so a view passes
/// through adaptor constructors unchanged instead of being rewrapped.
///
/// Both generated impls are bounded on `Self: Sequence`; the derive can
/// therefore sit on a generic wrapper whose `Sequence` impl is itself
/// conditional on the wrapped type's capabilities.
#[proc_macro_derive(View)]
pub fn derive_view(input: TokenStream) -> TokenStream {
    let input = parse_macro_input!(input as DeriveInput);
    expand_view(&input).into()
}

fn expand_view(input: &DeriveInput) -> TokenStream2 {
    let name = &input.ident;
    let (_, ty_generics, _) = input.generics.split_for_impl();
    let self_ty: syn::Type = parse_quote!(#name #ty_generics);

    let mut generics = input.generics.clone();
    generics
        .make_where_clause()
        .predicates
        .push(parse_quote!(#self_ty: ::seqview::Sequence));
    let (impl_generics, _, where_clause) = generics.split_for_impl();

    quote! {
        impl #impl_generics ::seqview::View for #self_ty #where_clause {}

        impl #impl_generics ::seqview::IntoView for #self_ty #where_clause {
            type View = Self;

            #[inline]
            fn into_view(self) -> Self {
                self
            }
        }
    }
}
