use proc_macro::TokenStream;
use quote::quote;
use syn::parse::Parser;

/// Generate a color model from a struct with named fields that all share one
/// component type. The fields are made public and the model gets `new`,
/// `to_components`, `From<[T; N]>` and a conversion into the matching
/// `crate::color::Color` variant, which must carry the same name as the
/// struct.
#[proc_macro]
pub fn gen_model(input: TokenStream) -> TokenStream {
    let mut input = syn::parse_macro_input!(input as syn::ItemStruct);

    if !input.generics.params.is_empty() {
        return quote! {
            compile_error!("Models can not be generic.")
        }
        .into();
    }

    let syn::Fields::Named(ref mut named) = input.fields else {
        return quote! {
            compile_error!("Models must have named fields, one for each component of the color.")
        }
        .into();
    };

    if named.named.is_empty() {
        return quote! {
            compile_error!("Models must have at least one component.")
        }
        .into();
    }

    let component_ty = named.named[0].ty.clone();
    let component_ty_str = quote!(#component_ty).to_string();
    if named.named.iter().any(|f| {
        let ty = &f.ty;
        quote!(#ty).to_string() != component_ty_str
    }) {
        return quote! {
            compile_error!("All components of a model must have the same type.")
        }
        .into();
    }

    // Make sure all the components are public.
    named.named.iter_mut().for_each(|f| {
        f.vis = syn::Visibility::Public(Default::default());
    });

    let field_names = named
        .named
        .iter()
        .map(|f| f.ident.clone())
        .collect::<Vec<_>>();
    let count = field_names.len();
    let indices = (0..count).map(syn::Index::from).collect::<Vec<_>>();

    let attrs = match syn::Attribute::parse_outer.parse2(quote! {
        #[derive(Clone, Copy, Debug, PartialEq)]
        #[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
    }) {
        Ok(attrs) => attrs,
        Err(err) => return err.to_compile_error().into(),
    };
    input.attrs.extend(attrs);

    let struct_name = input.ident.clone();

    let model_impl = quote! {
        impl #struct_name {
            /// Create a new color in this model.
            pub const fn new(#(#field_names: #component_ty),*) -> Self {
                Self { #(#field_names),* }
            }

            /// Return the components of this model in declaration order.
            pub fn to_components(&self) -> [#component_ty; #count] {
                [#(self.#field_names),*]
            }
        }

        impl From<[#component_ty; #count]> for #struct_name {
            fn from(value: [#component_ty; #count]) -> Self {
                Self::new(#(value[#indices]),*)
            }
        }

        impl From<#struct_name> for crate::color::Color {
            fn from(value: #struct_name) -> Self {
                crate::color::Color::#struct_name(value)
            }
        }
    };

    quote! {
        #input
        #model_impl
    }
    .into()
}
