// © 2022-2024 Jacob Riddle (ElementalAlchemist)
//
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

use crate::components::bindings::use_session;
use crate::components::location_fields::{CityField, CountryField};
use crate::components::password_field::PasswordField;
use crate::components::phone_field::PhoneField;
use crate::components::text_field::TextField;
use crate::dom::set_page_title;
use registration_form_shared::registration::FormField;
use sycamore::prelude::*;
use web_sys::Event as WebEvent;

#[component]
pub fn RegistrationView<G: Html>(ctx: Scope<'_>) -> View<G> {
	set_page_title("User Registration");

	let session = use_session(ctx);
	let form_valid = create_selector(ctx, move || session.get().form().is_form_valid());

	let submit_handler = move |event: WebEvent| {
		event.prevent_default();
		if let Err(error) = session.modify().submit() {
			log::debug!("Submission not accepted: {}", error);
		}
	};

	view! {
		ctx,
		div(id="registration") {
			h1 { "User Registration" }
			form(id="registration_form", on:submit=submit_handler) {
				div(class="registration_row") {
					TextField(field=FormField::FirstName, input_type="text", placeholder="Enter first name")
					TextField(field=FormField::LastName, input_type="text", placeholder="Enter last name")
				}
				TextField(field=FormField::Username, input_type="text", placeholder="Enter username")
				TextField(field=FormField::Email, input_type="email", placeholder="Enter email address")
				PasswordField {}
				PhoneField {}
				div(class="registration_row") {
					CountryField {}
					CityField {}
				}
				div(class="registration_row") {
					TextField(field=FormField::PanNo, input_type="text", placeholder="ABCDE1234F")
					TextField(field=FormField::AadharNo, input_type="text", placeholder="123456789012")
				}
				button(type="submit", id="registration_submit", disabled=!*form_valid.get()) {
					(if *form_valid.get() { "Submit Registration" } else { "Complete all fields to submit" })
				}
			}
		}
	}
}
