// © 2022-2024 Jacob Riddle (ElementalAlchemist)
//
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

use crate::components::bindings::use_session;
use crate::dom::set_page_title;
use sycamore::prelude::*;
use web_sys::Event as WebEvent;

#[component]
pub fn RegistrationCompleteView<G: Html>(ctx: Scope<'_>) -> View<G> {
	set_page_title("Registration Successful");

	let session = use_session(ctx);
	let summary = match session.get().submitted() {
		Some(data) => View::new_fragment(
			data.summary_entries()
				.into_iter()
				.map(|entry| {
					let label = format!("{}:", entry.label);
					let value = entry.value;
					view! {
						ctx,
						div(class="summary_row") {
							span(class="summary_label") { (label) }
							span(class="summary_value") { (value) }
						}
					}
				})
				.collect(),
		),
		None => {
			log::warn!("Success page shown without a submitted registration");
			view! { ctx, }
		}
	};

	let register_another_handler = move |_event: WebEvent| {
		if let Err(error) = session.modify().reset_and_return_to_form() {
			log::warn!("Couldn't return to the registration form: {}", error);
		}
	};

	view! {
		ctx,
		div(id="register_complete") {
			div(class="success_icon") { "✓" }
			h1 { "Registration Successful!" }
			p { "Your information has been submitted successfully." }
			div(id="registration_summary") {
				h2 { "Submitted Information:" }
				(summary)
			}
			button(type="button", on:click=register_another_handler) { "Register Another User" }
		}
	}
}
