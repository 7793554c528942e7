// © 2022-2024 Jacob Riddle (ElementalAlchemist)
//
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

use sycamore::prelude::*;

#[derive(Prop)]
pub struct FieldErrorProps<'a> {
	message: &'a ReadSignal<String>,
}

#[component]
pub fn FieldError<'a, G: Html>(ctx: Scope<'a>, props: FieldErrorProps<'a>) -> View<G> {
	view! {
		ctx,
		(if props.message.get().is_empty() {
			view! { ctx, }
		} else {
			let message = (*props.message.get()).clone();
			view! {
				ctx,
				p(class="input_error") {
					span(class="input_error_icon") { "✕" }
					(message)
				}
			}
		})
	}
}
