// © 2022-2024 Jacob Riddle (ElementalAlchemist)
//
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

use super::bindings::{blur_handler, change_handler, error_class, field_error, field_value, input_id, use_session};
use super::field_error::FieldError;
use registration_form_shared::registration::{Catalog, FormField};
use sycamore::prelude::*;

/// One entry of the dial code selector
#[derive(Debug, Eq, PartialEq)]
struct DialCodeChoice {
	code: String,
	label: String,
	selected: bool,
}

/// The dial code options, with the stored code marked as selected wherever it appears in the list
fn dial_code_choices(catalog: &Catalog, selected_code: &str) -> Vec<DialCodeChoice> {
	catalog
		.country_codes()
		.iter()
		.map(|country_code| DialCodeChoice {
			code: country_code.code.clone(),
			label: country_code.option_label(),
			selected: country_code.code == selected_code,
		})
		.collect()
}

/// Dial code selector and phone number input
#[component]
pub fn PhoneField<G: Html>(ctx: Scope<'_>) -> View<G> {
	let session = use_session(ctx);
	let country_code = field_value(ctx, session, FormField::CountryCode);
	let phone_number = field_value(ctx, session, FormField::PhoneNumber);
	let error = field_error(ctx, session, FormField::PhoneNumber);

	// The select's value is applied before its options exist, so the stored code is marked on its option
	let code_options = View::new_fragment(
		dial_code_choices(session.get().catalog(), &country_code.get())
			.into_iter()
			.map(|DialCodeChoice { code, label, selected }| {
				view! { ctx, option(value=code, selected=selected) { (label) } }
			})
			.collect(),
	);

	let id = input_id(FormField::PhoneNumber);
	let id_for = id.clone();
	view! {
		ctx,
		div(class="registration_field") {
			label(for=id_for) { "Phone Number *" }
			div(class="phone_input") {
				select(
					name=FormField::CountryCode.name(),
					prop:value=(*country_code.get()).clone(),
					on:change=change_handler(session, FormField::CountryCode)
				) {
					(code_options)
				}
				input(
					id=id,
					type="tel",
					name=FormField::PhoneNumber.name(),
					placeholder="1234567890",
					class=error_class(error),
					prop:value=(*phone_number.get()).clone(),
					on:input=change_handler(session, FormField::PhoneNumber),
					on:blur=blur_handler(session, FormField::PhoneNumber)
				)
			}
			FieldError(message=error)
		}
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn stored_code_is_selected_even_when_not_listed_first() {
		let contents = r#"
			default-country-code "+44"
			country "UK" { city "London"; }
			country-code "+91" country="India"
			country-code "+44" country="UK"
		"#;
		let catalog = Catalog::parse("test.kdl", contents).unwrap();
		let choices = dial_code_choices(&catalog, catalog.default_country_code());
		assert_eq!(
			choices,
			vec![
				DialCodeChoice {
					code: String::from("+91"),
					label: String::from("+91 (India)"),
					selected: false,
				},
				DialCodeChoice {
					code: String::from("+44"),
					label: String::from("+44 (UK)"),
					selected: true,
				},
			]
		);
	}
}
