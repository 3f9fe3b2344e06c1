use proc_macro2::TokenStream as TokenStream2;
use syn::{
	Token,
	parse::{Parse, ParseStream, Result},
};

/// Arguments of `#[context(...)]`: an optional leading `move,` followed by
/// `format!`-style arguments.
#[derive(Debug)]
pub struct ContextArgs {
	pub move_token: Option<Token![move]>,
	pub message: TokenStream2,
}

impl Parse for ContextArgs {
	fn parse(input: ParseStream<'_>) -> Result<Self> {
		let move_token = if input.peek(Token![move]) {
			let token = input.parse()?;
			input.parse::<Token![,]>()?;
			Some(token)
		} else {
			None
		};

		if input.is_empty() {
			return Err(input.error("#[context] expects a message"));
		}

		Ok(Self {
			move_token,
			message: input.parse()?,
		})
	}
}
