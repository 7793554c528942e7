// © 2022-2024 Jacob Riddle (ElementalAlchemist)
//
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

use super::bindings::{blur_handler, change_handler, error_class, field_error, field_value, input_id, use_session};
use super::field_error::FieldError;
use registration_form_shared::registration::FormField;
use sycamore::prelude::*;
use web_sys::Event as WebEvent;

#[component]
pub fn PasswordField<G: Html>(ctx: Scope<'_>) -> View<G> {
	let session = use_session(ctx);
	let field = FormField::Password;
	let value = field_value(ctx, session, field);
	let error = field_error(ctx, session, field);
	let show_password = create_selector(ctx, move || session.get().form().show_password());
	let input_type = create_selector(ctx, move || session.get().form().password_input_type());

	let toggle_handler = move |_event: WebEvent| {
		session.modify().form_mut().toggle_password_visibility();
	};

	let id = input_id(field);
	let id_for = id.clone();
	view! {
		ctx,
		div(class="registration_field") {
			label(for=id_for) { "Password *" }
			div(class="password_input") {
				input(
					id=id,
					type=*input_type.get(),
					name=field.name(),
					placeholder="Enter password",
					class=error_class(error),
					prop:value=(*value.get()).clone(),
					on:input=change_handler(session, field),
					on:blur=blur_handler(session, field)
				)
				button(type="button", class="password_visibility_toggle", on:click=toggle_handler) {
					(if *show_password.get() { "Hide" } else { "Show" })
				}
			}
			FieldError(message=error)
		}
	}
}
