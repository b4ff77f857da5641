use proc_macro::TokenStream;
use proc_macro2::Span;
use quote::quote;
use syn::{
    parse::{Parse, ParseStream},
    parse_macro_input, Ident, LitInt, Token,
};

extern crate proc_macro;

/// `N` or `N, format`
struct GoldenCase {
    index: LitInt,
    format: Option<Ident>,
}

impl Parse for GoldenCase {
    fn parse(input: ParseStream) -> syn::Result<Self> {
        let index = input.parse()?;
        let format = if input.peek(Token![,]) {
            input.parse::<Token![,]>()?;
            Some(input.parse()?)
        } else {
            None
        };
        Ok(GoldenCase { index, format })
    }
}

/// Expands to a `#[test]` that feeds `input_N.txt` to the CLI and compares the
/// output with the golden file for the requested format (`plain` by default).
#[proc_macro]
pub fn integration_test(tokens: TokenStream) -> TokenStream {
    let GoldenCase { index, format } = parse_macro_input!(tokens as GoldenCase);
    let format = format.unwrap_or_else(|| Ident::new("plain", Span::call_site()));
    let (variant, extension) = match format.to_string().as_str() {
        "plain" => (Ident::new("Plain", Span::call_site()), "txt"),
        "json" => (Ident::new("Json", Span::call_site()), "json"),
        other => {
            return syn::Error::new(format.span(), format!("unknown output format `{other}`"))
                .to_compile_error()
                .into()
        }
    };
    let test_function_name = Ident::new(
        &format!("integration_test_{}_{}", index.base10_digits(), format),
        Span::call_site(),
    );
    let tokens = quote! {
        #[test]
        fn #test_function_name () {
            integration_test( #index, nondec_cli::Format::#variant, #extension );
        }
    };
    tokens.into()
}
