// © 2022-2024 Jacob Riddle (ElementalAlchemist)
//
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

use super::bindings::{blur_handler, change_handler, error_class, field_error, field_value, input_id, use_session};
use super::field_error::FieldError;
use registration_form_shared::registration::FormField;
use sycamore::prelude::*;

#[component]
pub fn CountryField<G: Html>(ctx: Scope<'_>) -> View<G> {
	let session = use_session(ctx);
	let field = FormField::Country;
	let value = field_value(ctx, session, field);
	let error = field_error(ctx, session, field);

	let country_options = View::new_fragment(
		session
			.get()
			.catalog()
			.countries()
			.iter()
			.map(|country| {
				let name = country.name.clone();
				let label = country.name.clone();
				view! { ctx, option(value=name) { (label) } }
			})
			.collect(),
	);

	let id = input_id(field);
	let id_for = id.clone();
	view! {
		ctx,
		div(class="registration_field") {
			label(for=id_for) { "Country *" }
			select(
				id=id,
				name=field.name(),
				class=error_class(error),
				prop:value=(*value.get()).clone(),
				on:change=change_handler(session, field),
				on:blur=blur_handler(session, field)
			) {
				option(value="") { "Select Country" }
				(country_options)
			}
			FieldError(message=error)
		}
	}
}

/// City selector; its options come from the selected country and it's disabled until one is chosen
#[component]
pub fn CityField<G: Html>(ctx: Scope<'_>) -> View<G> {
	let session = use_session(ctx);
	let field = FormField::City;
	let value = field_value(ctx, session, field);
	let error = field_error(ctx, session, field);
	let enabled = create_selector(ctx, move || session.get().form().city_selector_enabled());
	let cities = create_selector(ctx, move || session.get().city_options().to_vec());

	let id = input_id(field);
	let id_for = id.clone();
	view! {
		ctx,
		div(class="registration_field") {
			label(for=id_for) { "City *" }
			select(
				id=id,
				name=field.name(),
				class=if *enabled.get() { error_class(error) } else { "disabled" },
				disabled=!*enabled.get(),
				prop:value=(*value.get()).clone(),
				on:change=change_handler(session, field),
				on:blur=blur_handler(session, field)
			) {
				option(value="") { "Select City" }
				Indexed(
					iterable=cities,
					view=|ctx, city| {
						let label = city.clone();
						view! { ctx, option(value=city) { (label) } }
					}
				)
			}
			FieldError(message=error)
		}
	}
}
