// © 2022-2024 Jacob Riddle (ElementalAlchemist)
//
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

use super::catalog::Catalog;
use super::field::FormField;
use super::form_data::FormData;
use super::state::FormState;
use std::error::Error;
use std::fmt;
use std::rc::Rc;

/// The page being shown
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
pub enum Route {
	#[default]
	Form,
	Success,
}

impl fmt::Display for Route {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		match self {
			Self::Form => write!(f, "form"),
			Self::Success => write!(f, "success"),
		}
	}
}

#[derive(Debug, Eq, PartialEq)]
pub enum SessionError {
	/// The submission was refused; these fields failed validation.
	InvalidFields(Vec<FormField>),
	/// The requested transition isn't available from the current page.
	WrongRoute { expected: Route, actual: Route },
}

impl fmt::Display for SessionError {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		match self {
			Self::InvalidFields(fields) => {
				let names: Vec<&str> = fields.iter().map(|field| field.name()).collect();
				write!(f, "registration has invalid fields: {}", names.join(", "))
			}
			Self::WrongRoute { expected, actual } => {
				write!(
					f,
					"expected to be on the {} page but was on the {} page",
					expected, actual
				)
			}
		}
	}
}

impl Error for SessionError {}

/// One visitor's registration session: the form being edited and the page being shown.
///
/// Clones share the catalog.
#[derive(Clone, Debug)]
pub struct RegistrationSession {
	catalog: Rc<Catalog>,
	route: Route,
	form: FormState,
	submitted: Option<FormData>,
}

impl RegistrationSession {
	pub fn new(catalog: impl Into<Rc<Catalog>>) -> Self {
		let catalog = catalog.into();
		let form = FormState::new(&catalog);
		Self {
			catalog,
			route: Route::Form,
			form,
			submitted: None,
		}
	}

	pub fn catalog(&self) -> &Catalog {
		&self.catalog
	}

	pub fn route(&self) -> Route {
		self.route
	}

	pub fn form(&self) -> &FormState {
		&self.form
	}

	pub fn form_mut(&mut self) -> &mut FormState {
		&mut self.form
	}

	/// The accepted registration; only present on the success page.
	pub fn submitted(&self) -> Option<&FormData> {
		self.submitted.as_ref()
	}

	/// Cities offered for the currently selected country
	pub fn city_options(&self) -> &[String] {
		self.form.city_options(&self.catalog)
	}

	/// Validates every field and, if all pass, keeps a copy of the record and moves to the success page.
	///
	/// A refused submission leaves the form page in place with every failing field showing its error.
	pub fn submit(&mut self) -> Result<&FormData, SessionError> {
		if self.route != Route::Form {
			return Err(SessionError::WrongRoute {
				expected: Route::Form,
				actual: self.route,
			});
		}

		if !self.form.validate_form() {
			let failing_fields = self.form.errors().failing_fields();
			log::warn!(
				"Registration refused; {} fields failed validation",
				failing_fields.len()
			);
			return Err(SessionError::InvalidFields(failing_fields));
		}

		self.route = Route::Success;
		log::info!("Registration accepted; showing the {} page", self.route);
		Ok(&*self.submitted.insert(self.form.data().clone()))
	}

	/// Discards the accepted registration and returns to a blank form.
	pub fn reset_and_return_to_form(&mut self) -> Result<(), SessionError> {
		if self.route != Route::Success {
			return Err(SessionError::WrongRoute {
				expected: Route::Success,
				actual: self.route,
			});
		}

		self.submitted = None;
		self.form = FormState::new(&self.catalog);
		self.route = Route::Form;
		log::info!("Returned to the {} page for a new registration", self.route);
		Ok(())
	}
}
