// © 2022-2024 Jacob Riddle (ElementalAlchemist)
//
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

use crate::pages::register::RegistrationView;
use crate::pages::register_complete::RegistrationCompleteView;
use registration_form_shared::registration::{RegistrationSession, Route};
use sycamore::prelude::*;

#[component]
pub fn App<G: Html>(ctx: Scope<'_>) -> View<G> {
	let session: &Signal<RegistrationSession> = use_context(ctx);
	// Only a route change swaps the page; edits within the form keep the same view mounted
	let route = create_selector(ctx, move || session.get().route());

	view! {
		ctx,
		(match *route.get() {
			Route::Form => view! { ctx, RegistrationView {} },
			Route::Success => view! { ctx, RegistrationCompleteView {} },
		})
	}
}
