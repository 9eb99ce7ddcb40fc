mod identified;
mod parsing;
mod tokens;
mod variant;

#[proc_macro_attribute]
pub fn id_variant(
    attr: proc_macro::TokenStream,
    item: proc_macro::TokenStream,
) -> proc_macro::TokenStream {
    let options = parsing::MacroOptions::new(proc_macro2::Span::call_site(), true);
    let (Ok(tokens) | Err(tokens)) =
        variant::variant(attr.into(), item.into(), options).map_err(|e| e.into_compile_error());
    tokens.into()
}

#[proc_macro_attribute]
pub fn plain_variant(
    attr: proc_macro::TokenStream,
    item: proc_macro::TokenStream,
) -> proc_macro::TokenStream {
    let options = parsing::MacroOptions::new(proc_macro2::Span::call_site(), false);
    let (Ok(tokens) | Err(tokens)) =
        variant::variant(attr.into(), item.into(), options).map_err(|e| e.into_compile_error());
    tokens.into()
}

#[proc_macro_derive(Identified, attributes(identified))]
pub fn derive_identified(item: proc_macro::TokenStream) -> proc_macro::TokenStream {
    let (Ok(tokens) | Err(tokens)) =
        identified::identified(item.into()).map_err(|e| e.into_compile_error());
    tokens.into()
}
