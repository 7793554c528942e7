// © 2022-2024 Jacob Riddle (ElementalAlchemist)
//
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

use std::fmt::Display;
use sycamore::prelude::*;

#[derive(Clone)]
pub struct ErrorData {
	message: &'static str,
	error_display: String,
}

impl ErrorData {
	pub fn new_with_error(message: &'static str, error: impl Display) -> Self {
		let error_display = format!("{}", error);
		Self { message, error_display }
	}
}

#[derive(Prop)]
pub struct ErrorViewProps {
	error: ErrorData,
}

#[component]
pub fn ErrorView<G: Html>(ctx: Scope, props: ErrorViewProps) -> View<G> {
	let ErrorData { message, error_display } = props.error;

	view! {
		ctx,
		div(id="app_error") {
			(message)
			br {}
			(error_display)
		}
	}
}
