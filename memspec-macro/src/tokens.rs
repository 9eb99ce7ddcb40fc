use syn::parse_quote;

pub(crate) fn crate_path() -> syn::Path {
    parse_quote!(::memspec)
}

pub(crate) fn private_module() -> syn::Path {
    parse_quote!(::memspec::__private)
}

pub(crate) fn kind_enum_ident(struct_ident: &syn::Ident) -> syn::Ident {
    quote::format_ident!("{struct_ident}Kind")
}
