// © 2022-2024 Jacob Riddle (ElementalAlchemist)
//
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

use registration_form_shared::registration::{Catalog, RegistrationSession};
use sycamore::prelude::*;

mod app;
mod components;
mod dom;
mod pages;
use app::App;
use pages::error::{ErrorData, ErrorView};

fn main() {
	console_error_panic_hook::set_once();
	wasm_logger::init(wasm_logger::Config::default());

	let catalog = match Catalog::builtin() {
		Ok(catalog) => catalog,
		Err(error) => {
			log::error!("Failed to load the country catalog: {}", error);
			let error_data = ErrorData::new_with_error("Unable to load the registration form.", error);
			sycamore::render(|ctx| view! { ctx, ErrorView(error=error_data) });
			return;
		}
	};

	sycamore::render(|ctx| {
		let session = create_signal(ctx, RegistrationSession::new(catalog));
		provide_context_ref(ctx, session);
		view! { ctx, App {} }
	});
}
