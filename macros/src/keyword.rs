use proc_macro2::TokenStream;
use quote::quote;
use syn::{Data, DeriveInput, Fields, Ident, LitStr};

pub struct KeywordInput {
    pub name: Ident,
    pub ignore_case: bool,
    pub variants: Vec<KeywordVariant>,
}

pub struct KeywordVariant {
    pub name: Ident,
    pub text: String,
}

impl TryFrom<DeriveInput> for KeywordInput {
    type Error = syn::Error;

    fn try_from(input: DeriveInput) -> syn::Result<Self> {
        let mut ignore_case = false;
        for attr in &input.attrs {
            if attr.path().is_ident("keyword") {
                attr.parse_nested_meta(|meta| {
                    if meta.path.is_ident("ignore_case") {
                        ignore_case = true;
                        Ok(())
                    } else {
                        Err(meta.error("expected `ignore_case`"))
                    }
                })?;
            }
        }

        let Data::Enum(data) = input.data else {
            return Err(syn::Error::new(
                input.ident.span(),
                "`Keyword` can only be derived for enums",
            ));
        };

        let mut variants = Vec::with_capacity(data.variants.len());
        for variant in data.variants {
            if !matches!(variant.fields, Fields::Unit) {
                return Err(syn::Error::new(
                    variant.ident.span(),
                    "`Keyword` variants must not carry data",
                ));
            }

            let mut text = None;
            for attr in &variant.attrs {
                if attr.path().is_ident("keyword") {
                    text = Some(attr.parse_args::<LitStr>()?.value());
                }
            }

            variants.push(KeywordVariant {
                text: text.unwrap_or_else(|| variant.ident.to_string()),
                name: variant.ident,
            });
        }

        Ok(Self {
            name: input.ident,
            ignore_case,
            variants,
        })
    }
}

pub fn expand(input: KeywordInput) -> syn::Result<TokenStream> {
    let KeywordInput {
        name,
        ignore_case,
        variants,
    } = input;

    let names: Vec<_> = variants.iter().map(|v| &v.name).collect();
    let texts: Vec<_> = variants.iter().map(|v| v.text.as_str()).collect();

    let lookup = if ignore_case {
        quote! {
            #(
                if ident.eq_ignore_ascii_case(#texts) {
                    return ::core::option::Option::Some(Self::#names);
                }
            )*
            ::core::option::Option::None
        }
    } else {
        quote! {
            match ident {
                #( #texts => ::core::option::Option::Some(Self::#names), )*
                _ => ::core::option::Option::None,
            }
        }
    };

    Ok(quote! {
        impl #name {
            /// Every keyword, in declaration order.
            pub const ALL: &'static [Self] = &[#( Self::#names ),*];

            /// The source text of this keyword.
            pub const fn as_str(&self) -> &'static str {
                match self {
                    #( Self::#names => #texts, )*
                }
            }

            /// Looks up a keyword by its source text.
            pub fn from_ident(ident: &str) -> ::core::option::Option<Self> {
                #lookup
            }
        }

        impl ::core::fmt::Display for #name {
            fn fmt(&self, f: &mut ::core::fmt::Formatter<'_>) -> ::core::fmt::Result {
                f.write_str(self.as_str())
            }
        }
    })
}
