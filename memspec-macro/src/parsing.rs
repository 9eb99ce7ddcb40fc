use proc_macro2::{Span, TokenStream};
use quote::quote;
use syn::spanned::Spanned as _;

type CommaList<T> = syn::punctuated::Punctuated<T, syn::Token![,]>;

mod kw {
    syn::custom_keyword!(key);
    syn::custom_keyword!(derive);
}

#[derive(Clone)]
pub(crate) struct MacroOptions {
    pub(crate) tagged: syn::LitBool,
}

impl MacroOptions {
    pub fn new(span: Span, tagged: bool) -> Self {
        Self {
            tagged: syn::LitBool::new(tagged, span),
        }
    }

    pub(crate) fn is_tagged(&self) -> bool {
        self.tagged.value
    }

    pub(crate) fn attr_ident(&self) -> &'static str {
        if self.is_tagged() {
            "id_variant"
        } else {
            "plain_variant"
        }
    }
}

/// Collects errors so a single expansion can report every bad attribute.
#[derive(Default)]
pub(crate) struct Diagnostics {
    error: Option<syn::Error>,
}

impl Diagnostics {
    pub(crate) fn record(&mut self, error: syn::Error) {
        match self.error.as_mut() {
            Some(es) => es.combine(error),
            None => self.error = Some(error),
        }
    }

    pub(crate) fn into_result(self) -> syn::Result<()> {
        match self.error {
            Some(e) => Err(e),
            None => Ok(()),
        }
    }
}

#[derive(Clone, Default)]
pub(crate) struct Parened<T> {
    paren: syn::token::Paren,
    pub element: T,
}

impl<T: syn::parse::Parse> Parened<CommaList<T>> {
    fn parse_terminated(input: syn::parse::ParseStream) -> syn::Result<Self> {
        let content;

        Ok(Self {
            paren: syn::parenthesized!(content in input),
            element: CommaList::parse_terminated(&content)?,
        })
    }
}

impl<T: quote::ToTokens> quote::ToTokens for Parened<T> {
    fn to_tokens(&self, tokens: &mut TokenStream) {
        let Self { paren, element } = self;

        paren.surround(tokens, |tokens| tokens.extend(quote!(#element)));
    }
}

/// `key = "memoryType"`
pub(crate) struct AttrKey {
    key_token: kw::key,
    eq_token: syn::Token![=],
    pub(crate) value: syn::LitStr,
}

impl syn::parse::Parse for AttrKey {
    fn parse(input: syn::parse::ParseStream) -> syn::Result<Self> {
        Ok(Self {
            key_token: input.parse()?,
            eq_token: input.parse()?,
            value: input.parse()?,
        })
    }
}

impl quote::ToTokens for AttrKey {
    fn to_tokens(&self, tokens: &mut TokenStream) {
        let Self {
            key_token,
            eq_token,
            value,
        } = self;

        tokens.extend(quote!(#key_token #eq_token #value));
    }
}

/// `derive(Debug, Clone)`
pub(crate) struct AttrDerive {
    derive_token: kw::derive,
    pub(crate) paths: Parened<CommaList<syn::Path>>,
}

impl AttrDerive {
    pub(crate) fn push_derives(&self, derives: &mut Vec<syn::Path>) {
        derives.extend(self.paths.element.iter().cloned());
    }
}

impl syn::parse::Parse for AttrDerive {
    fn parse(input: syn::parse::ParseStream) -> syn::Result<Self> {
        Ok(Self {
            derive_token: input.parse()?,
            paths: Parened::parse_terminated(input)?,
        })
    }
}

impl quote::ToTokens for AttrDerive {
    fn to_tokens(&self, tokens: &mut TokenStream) {
        let Self {
            derive_token,
            paths,
        } = self;

        tokens.extend(quote!(#derive_token #paths));
    }
}

/// A registered type, optionally named: `path::Type` or `Name = path::Type`.
#[derive(Clone)]
pub(crate) struct Member {
    pub(crate) name: Option<(syn::Ident, syn::Token![=])>,
    pub(crate) ty: syn::Type,
}

impl Member {
    pub(crate) fn variant_ident(&self) -> syn::Result<syn::Ident> {
        if let Some((ident, _)) = &self.name {
            return Ok(ident.clone());
        }

        if let syn::Type::Path(type_path) = &self.ty {
            if type_path.qself.is_none() {
                if let Some(segment) = type_path.path.segments.last() {
                    return Ok(segment.ident.clone());
                }
            }
        }

        Err(syn::Error::new(
            self.ty.span(),
            "cannot name a variant after this type, use `Name = Type`",
        ))
    }
}

impl syn::parse::Parse for Member {
    fn parse(input: syn::parse::ParseStream) -> syn::Result<Self> {
        let name = if input.peek(syn::Ident) && input.peek2(syn::Token![=]) {
            Some((input.parse()?, input.parse()?))
        } else {
            None
        };

        Ok(Self {
            name,
            ty: input.parse()?,
        })
    }
}

impl quote::ToTokens for Member {
    fn to_tokens(&self, tokens: &mut TokenStream) {
        let Self { name, ty } = self;

        if let Some((ident, eq_token)) = name {
            tokens.extend(quote!(#ident #eq_token));
        }
        tokens.extend(quote!(#ty));
    }
}

pub(crate) enum Attr {
    Key(AttrKey),
    Derive(AttrDerive),
    Member(Member),
}

impl syn::parse::Parse for Attr {
    fn parse(input: syn::parse::ParseStream) -> syn::Result<Self> {
        let attr = if input.peek(kw::key) && input.peek2(syn::Token![=]) {
            Self::Key(input.parse()?)
        } else if input.peek(kw::derive) && input.peek2(syn::token::Paren) {
            Self::Derive(input.parse()?)
        } else {
            Self::Member(input.parse()?)
        };

        if !input.is_empty() {
            return Err(input.error("unexpected tokens after variant attribute"));
        }

        Ok(attr)
    }
}

impl quote::ToTokens for Attr {
    fn to_tokens(&self, tokens: &mut TokenStream) {
        tokens.extend(match self {
            Attr::Key(attr_key) => quote!(#attr_key),
            Attr::Derive(attr_derive) => quote!(#attr_derive),
            Attr::Member(member) => quote!(#member),
        });
    }
}

pub(crate) struct VariantInput {
    pub(crate) options: MacroOptions,
    pub(crate) item: syn::ItemStruct,
    pub(crate) key: Option<syn::LitStr>,
    pub(crate) derives: Vec<syn::Path>,
    pub(crate) members: Vec<Member>,
}

impl VariantInput {
    /// `first_attr` is the argument of the attribute being expanded; the remaining
    /// attributes of the same name are still on `item` and are consumed here.
    pub(crate) fn from_item(
        options: MacroOptions,
        first_attr: TokenStream,
        item: syn::Item,
    ) -> syn::Result<Self> {
        let mut item = match item {
            syn::Item::Struct(
                item @ syn::ItemStruct {
                    fields: syn::Fields::Unit,
                    ..
                },
            ) => item,
            item => {
                return Err(syn::Error::new(
                    item.span(),
                    "variants must be declared on a unit struct (contents are generated by the attribute)",
                ));
            }
        };

        if !item.generics.params.is_empty() || item.generics.where_clause.is_some() {
            return Err(syn::Error::new(item.generics.span(), "generic variants are not supported"));
        }

        let attr_ident = options.attr_ident();
        let mut attrs = vec![syn::parse2::<Attr>(first_attr)?];
        let item_attrs = std::mem::take(&mut item.attrs);
        for attr in item_attrs {
            if attr.path().is_ident(attr_ident) {
                attrs.push(attr.parse_args()?);
            } else {
                item.attrs.push(attr);
            }
        }

        let mut diagnostics = Diagnostics::default();
        let mut key: Option<syn::LitStr> = None;
        let mut derives = vec![];
        let mut members: Vec<Member> = vec![];
        let mut variant_idents: Vec<syn::Ident> = vec![];

        for attr in attrs {
            match attr {
                Attr::Key(attr_key) => {
                    if !options.is_tagged() {
                        diagnostics.record(syn::Error::new(
                            attr_key.span(),
                            "untagged variants do not take a discriminator key",
                        ));
                    } else if key.is_some() {
                        diagnostics.record(syn::Error::new(
                            attr_key.value.span(),
                            "discriminator key is already set",
                        ));
                    } else if attr_key.value.value().is_empty() {
                        diagnostics.record(syn::Error::new(
                            attr_key.value.span(),
                            "discriminator key must not be empty",
                        ));
                    } else {
                        key = Some(attr_key.value);
                    }
                }
                Attr::Derive(attr_derive) => attr_derive.push_derives(&mut derives),
                Attr::Member(member) => match member.variant_ident() {
                    Ok(ident) => {
                        if variant_idents.contains(&ident) {
                            diagnostics.record(syn::Error::new(
                                ident.span(),
                                format!("`{ident}` is registered more than once"),
                            ));
                        } else {
                            variant_idents.push(ident);
                            members.push(member);
                        }
                    }
                    Err(e) => diagnostics.record(e),
                },
            }
        }

        if options.is_tagged() && key.is_none() {
            diagnostics.record(syn::Error::new(
                item.ident.span(),
                "missing discriminator key, add `#[id_variant(key = \"...\")]`",
            ));
        }

        if members.is_empty() {
            diagnostics.record(syn::Error::new(
                item.ident.span(),
                format!("no types registered, add `#[{attr_ident}(path::Type)]`"),
            ));
        }

        diagnostics.into_result()?;

        Ok(Self {
            options,
            item,
            key,
            derives,
            members,
        })
    }
}
