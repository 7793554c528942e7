// © 2022-2024 Jacob Riddle (ElementalAlchemist)
//
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

use super::bindings::{blur_handler, change_handler, error_class, field_error, field_value, input_id, use_session};
use super::field_error::FieldError;
use registration_form_shared::registration::FormField;
use sycamore::prelude::*;

#[derive(Prop)]
pub struct TextFieldProps {
	field: FormField,
	input_type: &'static str,
	placeholder: &'static str,
}

/// A labeled single-line input with its error message
#[component]
pub fn TextField<G: Html>(ctx: Scope<'_>, props: TextFieldProps) -> View<G> {
	let session = use_session(ctx);
	let field = props.field;
	let value = field_value(ctx, session, field);
	let error = field_error(ctx, session, field);

	// PAN numbers are shown upper-case without changing what's stored
	let style = if field == FormField::PanNo {
		"text-transform: uppercase"
	} else {
		""
	};

	let id = input_id(field);
	let id_for = id.clone();
	let label = format!("{} *", field.label());
	view! {
		ctx,
		div(class="registration_field") {
			label(for=id_for) { (label) }
			input(
				id=id,
				type=props.input_type,
				name=field.name(),
				placeholder=props.placeholder,
				style=style,
				class=error_class(error),
				prop:value=(*value.get()).clone(),
				on:input=change_handler(session, field),
				on:blur=blur_handler(session, field)
			)
			FieldError(message=error)
		}
	}
}
