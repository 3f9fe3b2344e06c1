//! Procedural macros shared by the tilepress crates.
//!
//! The only macro is [`macro@context`], an attribute that attaches a formatted
//! message to any error returned from the annotated function:
//!
//! ```ignore
//! #[context("writing feature collection to {:?}", path)]
//! fn write(path: &Path) -> anyhow::Result<()> { ... }
//! ```

mod args;

use args::ContextArgs;
use proc_macro::TokenStream;
use proc_macro2::{Ident, Span, TokenStream as TokenStream2};
use quote::{ToTokens, quote};
use syn::{ItemFn, ReturnType, parse_macro_input};

/// Wraps the body of a function returning `anyhow::Result<T>` so that an error
/// leaving the function carries the given message as context.
///
/// Works on sync and async functions. Prefix the arguments with `move,` when
/// the body must be moved into the wrapping closure or async block.
#[proc_macro_attribute]
pub fn context(args: TokenStream, input: TokenStream) -> TokenStream {
	let args = parse_macro_input!(args as ContextArgs);
	let mut function = parse_macro_input!(input as ItemFn);

	let wrapped = if function.sig.asyncness.is_some() {
		match wrap_async(&function, &args) {
			Ok(tokens) => tokens,
			Err(err) => return err.to_compile_error().into(),
		}
	} else {
		wrap_sync(&function, &args)
	};

	function.block.stmts = vec![syn::Stmt::Expr(syn::Expr::Verbatim(wrapped), None)];
	function.into_token_stream().into()
}

fn wrap_async(function: &ItemFn, args: &ContextArgs) -> syn::Result<TokenStream2> {
	let ReturnType::Type(_, return_type) = &function.sig.output else {
		return Err(syn::Error::new_spanned(
			&function.sig,
			"#[context] requires the function to return a Result",
		));
	};

	let body = &function.block;
	let move_token = &args.move_token;
	let message = &args.message;
	let result = Ident::new("result", Span::mixed_site());
	let err = Ident::new("err", Span::mixed_site());

	Ok(quote! {
		let #result: #return_type = async #move_token { #body }.await;
		#result.map_err(|#err| #err.context(format!(#message)).into())
	})
}

fn wrap_sync(function: &ItemFn, args: &ContextArgs) -> TokenStream2 {
	let body = &function.block;
	let return_type = &function.sig.output;
	let move_token = &args.move_token;
	let message = &args.message;
	let err = Ident::new("err", Span::mixed_site());
	let once = Ident::new("once", Span::mixed_site());

	// `once` is not `Copy`; dropping it inside the closure makes the closure `FnOnce`,
	// so a body that consumes its arguments still borrow-checks.
	quote! {
		let #once = ::core::iter::empty::<()>();
		(#move_token || #return_type {
			::core::mem::drop(#once);
			#body
		})().map_err(|#err| #err.context(format!(#message)).into())
	}
}
