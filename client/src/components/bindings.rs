// © 2022-2024 Jacob Riddle (ElementalAlchemist)
//
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Signals and event handlers connecting a form input to the registration session.

use crate::dom::event_value;
use registration_form_shared::registration::{FormField, RegistrationSession};
use sycamore::prelude::*;
use web_sys::Event as WebEvent;

pub fn use_session(ctx: Scope<'_>) -> &Signal<RegistrationSession> {
	use_context(ctx)
}

/// The field's current value
pub fn field_value<'a>(
	ctx: Scope<'a>,
	session: &'a Signal<RegistrationSession>,
	field: FormField,
) -> &'a ReadSignal<String> {
	create_selector(ctx, move || session.get().form().value(field).to_string())
}

/// The error message shown for the field, empty if there isn't one
pub fn field_error<'a>(
	ctx: Scope<'a>,
	session: &'a Signal<RegistrationSession>,
	field: FormField,
) -> &'a ReadSignal<String> {
	create_selector(ctx, move || session.get().form().errors().message(field))
}

/// The class for an input, marking it when its field shows an error
pub fn error_class(error: &ReadSignal<String>) -> &'static str {
	if error.get().is_empty() {
		""
	} else {
		"error"
	}
}

pub fn change_handler(session: &Signal<RegistrationSession>, field: FormField) -> impl Fn(WebEvent) + '_ {
	move |event: WebEvent| {
		let Some(value) = event_value(&event) else {
			log::warn!("Change event for {} didn't come from a form control", field);
			return;
		};
		session.modify().form_mut().on_change(field, value);
	}
}

pub fn blur_handler(session: &Signal<RegistrationSession>, field: FormField) -> impl Fn(WebEvent) + '_ {
	move |event: WebEvent| {
		let Some(value) = event_value(&event) else {
			log::warn!("Blur event for {} didn't come from a form control", field);
			return;
		};
		session.modify().form_mut().on_blur(field, &value);
	}
}

/// The id given to the field's input element
pub fn input_id(field: FormField) -> String {
	format!("registration_{}", field.name())
}
