use proc_macro2::TokenStream;
use quote::quote;
use syn::spanned::Spanned as _;

use crate::tokens;

pub(crate) fn identified(item: TokenStream) -> syn::Result<TokenStream> {
    let input: syn::DeriveInput = syn::parse2(item)?;

    let mut id: Option<syn::LitStr> = None;
    for attr in &input.attrs {
        if !attr.path().is_ident("identified") {
            continue;
        }

        let value: syn::LitStr = attr.parse_args()?;
        if id.is_some() {
            return Err(syn::Error::new(attr.span(), "identifier is already set"));
        }
        if value.value().is_empty() {
            return Err(syn::Error::new(value.span(), "identifier must not be empty"));
        }
        id = Some(value);
    }

    let Some(id) = id else {
        return Err(syn::Error::new(
            input.ident.span(),
            "missing identifier, add `#[identified(\"...\")]`",
        ));
    };

    let crate_path = tokens::crate_path();
    let ident = &input.ident;
    let (impl_generics, type_generics, where_clause) = input.generics.split_for_impl();

    Ok(quote! {
        impl #impl_generics #crate_path::Identified for #ident #type_generics #where_clause {
            const ID: &'static str = #id;
        }
    })
}

#[cfg(test)]
mod test {
    use quote::quote;

    #[test]
    fn emits_id() {
        let tokens = super::identified(quote! {
            #[identified("DDR3")]
            struct MemSpecDdr3 {
                memory_id: String,
            }
        })
        .unwrap();

        let text = tokens.to_string();
        assert!(text.contains("Identified for MemSpecDdr3"));
        assert!(text.contains("\"DDR3\""));
    }

    #[test]
    fn rejects_missing_and_empty_ids() {
        assert!(super::identified(quote!(struct Unnamed;)).is_err());
        assert!(super::identified(quote!(#[identified("")] struct Empty;)).is_err());
        assert!(
            super::identified(quote!(#[identified("A")] #[identified("B")] struct Twice;)).is_err()
        );
    }
}
