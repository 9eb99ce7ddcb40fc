use proc_macro2::{Span, TokenStream};
use quote::quote;

use crate::{
    parsing::{self, MacroOptions},
    tokens,
};

pub(crate) fn variant(
    attr: TokenStream,
    item: TokenStream,
    options: MacroOptions,
) -> syn::Result<TokenStream> {
    let item: syn::Item = syn::parse2(item)?;
    let input = parsing::VariantInput::from_item(options, attr, item)?;

    let parsing::VariantInput {
        options,
        item,
        key,
        derives,
        members,
    } = input;

    let crate_path = tokens::crate_path();
    let private_module = tokens::private_module();

    let syn::ItemStruct {
        attrs, vis, ident, ..
    } = item;
    let kind_ident = tokens::kind_enum_ident(&ident);

    // The wrapper always derives Default (the empty state); the enum cannot.
    let derives: Vec<_> = derives
        .into_iter()
        .filter(|path| !path.is_ident("Default"))
        .collect();

    let mut arms = vec![];
    let mut member_impls = vec![];
    let mut types = vec![];
    let mut variant_idents = vec![];

    for member in &members {
        let ty = &member.ty;
        let variant_ident = member.variant_ident()?;

        arms.push(quote!(#variant_ident(#ty)));

        member_impls.push(quote! {
            impl #private_module::From<#ty> for #kind_ident {
                fn from(value: #ty) -> Self {
                    Self::#variant_ident(value)
                }
            }

            impl #private_module::From<#ty> for #ident {
                fn from(value: #ty) -> Self {
                    Self(#private_module::Option::Some(#kind_ident::#variant_ident(value)))
                }
            }

            impl #crate_path::VariantMember<#ident> for #ty {}

            impl #private_module::TryFrom<#ident> for #ty {
                type Error = #ident;

                fn try_from(value: #ident) -> #private_module::Result<Self, Self::Error> {
                    if let #private_module::Option::Some(#kind_ident::#variant_ident(value)) = value.0 {
                        #private_module::Result::Ok(value)
                    } else {
                        #private_module::Result::Err(value)
                    }
                }
            }

            impl<'__a> #private_module::TryFrom<&'__a #ident> for &'__a #ty {
                type Error = ();

                fn try_from(value: &'__a #ident) -> #private_module::Result<Self, Self::Error> {
                    if let #private_module::Option::Some(#kind_ident::#variant_ident(value)) = &value.0 {
                        #private_module::Result::Ok(value)
                    } else {
                        #private_module::Result::Err(())
                    }
                }
            }

            impl<'__a> #private_module::TryFrom<&'__a mut #ident> for &'__a mut #ty {
                type Error = ();

                fn try_from(value: &'__a mut #ident) -> #private_module::Result<Self, Self::Error> {
                    if let #private_module::Option::Some(#kind_ident::#variant_ident(value)) = &mut value.0 {
                        #private_module::Result::Ok(value)
                    } else {
                        #private_module::Result::Err(())
                    }
                }
            }
        });

        types.push(ty);
        variant_idents.push(variant_ident);
    }

    let document_impls = match (options.is_tagged(), key) {
        (true, Some(key)) => id_variant_impls(&ident, &kind_ident, &key, &types, &variant_idents),
        (true, None) => {
            return Err(syn::Error::new(Span::call_site(), "missing discriminator key"));
        }
        (false, _) => plain_variant_impls(&ident, &kind_ident, &types, &variant_idents),
    };

    let kind_doc = format!("The types registered in [`{ident}`], in registry order.");

    Ok(quote! {
        #(#attrs)*
        #[derive(::core::default::Default, #(#derives),*)]
        #vis struct #ident(#private_module::Option<#kind_ident>);

        #[doc = #kind_doc]
        #[derive(#(#derives),*)]
        #vis enum #kind_ident {
            #(#arms),*
        }

        const _: () = {
            impl #private_module::From<#kind_ident> for #ident {
                fn from(kind: #kind_ident) -> Self {
                    Self(#private_module::Option::Some(kind))
                }
            }

            impl #crate_path::Variant for #ident {
                type Kind = #kind_ident;

                fn from_kind(kind: Self::Kind) -> Self {
                    Self(#private_module::Option::Some(kind))
                }

                fn into_kind(self) -> #private_module::Option<Self::Kind> {
                    self.0
                }

                fn get_variant(&self) -> #private_module::Option<&Self::Kind> {
                    self.0.as_ref()
                }

                fn get_variant_mut(&mut self) -> #private_module::Option<&mut Self::Kind> {
                    self.0.as_mut()
                }
            }

            #document_impls

            #(#member_impls)*
        };
    })
}

fn id_variant_impls(
    ident: &syn::Ident,
    kind_ident: &syn::Ident,
    key: &syn::LitStr,
    types: &[&syn::Type],
    variant_idents: &[syn::Ident],
) -> TokenStream {
    let crate_path = tokens::crate_path();
    let private_module = tokens::private_module();
    let serde_crate = quote!(#private_module::serde_crate);
    let value = quote!(#private_module::serde_json::Value);

    quote! {
        const _: () = ::core::assert!(
            #private_module::ids_unique(&[#(<#types as #crate_path::Identified>::ID),*]),
            "two types registered in this variant share an identifier"
        );

        impl #crate_path::IdVariant for #ident {
            const ID_FIELD: &'static str = #key;

            const IDS: &'static [&'static str] = &[#(<#types as #crate_path::Identified>::ID),*];

            fn id(&self) -> #private_module::Option<&'static str> {
                match &self.0 {
                    #(
                        #private_module::Option::Some(#kind_ident::#variant_idents(_)) => {
                            #private_module::Option::Some(<#types as #crate_path::Identified>::ID)
                        }
                    )*
                    #private_module::Option::None => #private_module::Option::None,
                }
            }

            fn to_document(&self) -> #private_module::Result<#value, #crate_path::Error> {
                match &self.0 {
                    #(
                        #private_module::Option::Some(#kind_ident::#variant_idents(value)) => {
                            #private_module::tagged_document(
                                <Self as #crate_path::IdVariant>::ID_FIELD,
                                <#types as #crate_path::Identified>::ID,
                                value,
                            )
                        }
                    )*
                    #private_module::Option::None => {
                        #private_module::Result::Err(#crate_path::Error::EmptyVariant)
                    }
                }
            }

            fn from_document(document: &#value) -> #private_module::Result<Self, #crate_path::Error> {
                let id = #private_module::discriminator(
                    document,
                    <Self as #crate_path::IdVariant>::ID_FIELD,
                )?;

                #(
                    if id == <#types as #crate_path::Identified>::ID {
                        return #private_module::member_from_document::<#types>(document, id)
                            .map(|value| Self(#private_module::Option::Some(#kind_ident::#variant_idents(value))));
                    }
                )*

                #private_module::Result::Err(#private_module::no_matching_type(
                    <Self as #crate_path::IdVariant>::ID_FIELD,
                    id,
                ))
            }
        }

        impl #serde_crate::Serialize for #ident {
            fn serialize<__S>(&self, serializer: __S) -> #private_module::Result<__S::Ok, __S::Error>
            where
                __S: #serde_crate::Serializer,
            {
                let document = <Self as #crate_path::IdVariant>::to_document(self)
                    .map_err(<__S::Error as #serde_crate::ser::Error>::custom)?;
                #serde_crate::Serialize::serialize(&document, serializer)
            }
        }

        impl<'de> #serde_crate::Deserialize<'de> for #ident {
            fn deserialize<__D>(deserializer: __D) -> #private_module::Result<Self, __D::Error>
            where
                __D: #serde_crate::Deserializer<'de>,
            {
                let document = <#value as #serde_crate::Deserialize>::deserialize(deserializer)?;
                <Self as #crate_path::IdVariant>::from_document(&document)
                    .map_err(<__D::Error as #serde_crate::de::Error>::custom)
            }
        }
    }
}

fn plain_variant_impls(
    ident: &syn::Ident,
    kind_ident: &syn::Ident,
    types: &[&syn::Type],
    variant_idents: &[syn::Ident],
) -> TokenStream {
    let crate_path = tokens::crate_path();
    let private_module = tokens::private_module();
    let serde_crate = quote!(#private_module::serde_crate);
    let value = quote!(#private_module::serde_json::Value);

    quote! {
        impl #crate_path::PlainVariant for #ident {
            fn to_document(&self) -> #private_module::Result<#value, #crate_path::Error> {
                match &self.0 {
                    #(
                        #private_module::Option::Some(#kind_ident::#variant_idents(value)) => {
                            #private_module::untagged_document(value)
                        }
                    )*
                    #private_module::Option::None => #private_module::Result::Ok(#value::Null),
                }
            }

            fn from_document(document: &#value) -> Self {
                #(
                    if let #private_module::Option::Some(value) = #private_module::try_member::<#types>(document) {
                        return Self(#private_module::Option::Some(#kind_ident::#variant_idents(value)));
                    }
                )*

                Self(#private_module::Option::None)
            }
        }

        impl #serde_crate::Serialize for #ident {
            fn serialize<__S>(&self, serializer: __S) -> #private_module::Result<__S::Ok, __S::Error>
            where
                __S: #serde_crate::Serializer,
            {
                let document = <Self as #crate_path::PlainVariant>::to_document(self)
                    .map_err(<__S::Error as #serde_crate::ser::Error>::custom)?;
                #serde_crate::Serialize::serialize(&document, serializer)
            }
        }

        impl<'de> #serde_crate::Deserialize<'de> for #ident {
            fn deserialize<__D>(deserializer: __D) -> #private_module::Result<Self, __D::Error>
            where
                __D: #serde_crate::Deserializer<'de>,
            {
                let document = <#value as #serde_crate::Deserialize>::deserialize(deserializer)?;
                #private_module::Result::Ok(<Self as #crate_path::PlainVariant>::from_document(&document))
            }
        }
    }
}

#[cfg(test)]
mod test {
    use quote::quote;

    use crate::parsing::MacroOptions;

    #[test]
    fn tagged_expansion() {
        let tokens = super::variant(
            quote!(key = "memoryType"),
            quote! {
                #[id_variant(derive(Debug, Default))]
                #[id_variant(standards::MemSpecDdr4)]
                pub struct MemSpecVariant;
            },
            MacroOptions::new(proc_macro2::Span::call_site(), true),
        )
        .unwrap();

        let text = tokens.to_string();
        assert!(text.contains("pub enum MemSpecVariantKind"));
        assert!(text.contains("IdVariant for MemSpecVariant"));
        assert!(text.contains("ids_unique"));
        // Default is reserved for the wrapper.
        assert_eq!(text.matches("Default").count(), 1);
    }

    #[test]
    fn untagged_expansion() {
        let tokens = super::variant(
            quote!(Inline = Value),
            quote! {
                #[plain_variant(File = std::path::PathBuf)]
                pub struct Source;
            },
            MacroOptions::new(proc_macro2::Span::call_site(), false),
        )
        .unwrap();

        let text = tokens.to_string();
        assert!(text.contains("PlainVariant for Source"));
        assert!(text.contains("try_member"));
        assert!(!text.contains("ids_unique"));
    }
}
