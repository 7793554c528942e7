// © 2022-2024 Jacob Riddle (ElementalAlchemist)
//
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

use super::catalog::Catalog;
use super::field::FormField;
use super::form_data::FormData;
use super::validation::{self, ValidationError};
use std::collections::{HashMap, HashSet};

/// Errors from the most recent validation of each field.
///
/// A field is only present once it has been validated; `None` means it was validated and passed.
#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub struct FieldErrors {
	entries: HashMap<FormField, Option<ValidationError>>,
}

impl FieldErrors {
	pub fn get(&self, field: FormField) -> Option<ValidationError> {
		self.entries.get(&field).copied().flatten()
	}

	/// The message shown next to a field; empty when there's nothing to show.
	pub fn message(&self, field: FormField) -> String {
		self.get(field).map(|error| error.to_string()).unwrap_or_default()
	}

	pub fn was_validated(&self, field: FormField) -> bool {
		self.entries.contains_key(&field)
	}

	pub fn has_errors(&self) -> bool {
		self.entries.values().any(Option::is_some)
	}

	/// Fields currently showing an error, in form order
	pub fn failing_fields(&self) -> Vec<FormField> {
		FormField::ALL
			.into_iter()
			.filter(|field| self.get(*field).is_some())
			.collect()
	}

	fn record(&mut self, field: FormField, result: Result<(), ValidationError>) {
		self.entries.insert(field, result.err());
	}
}

/// Values, touched fields and displayed errors of the form being edited
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct FormState {
	data: FormData,
	touched: HashSet<FormField>,
	errors: FieldErrors,
	show_password: bool,
}

impl FormState {
	/// Creates a blank form with the catalog's default dial code selected
	pub fn new(catalog: &Catalog) -> Self {
		Self {
			data: FormData::with_country_code(catalog.default_country_code()),
			touched: HashSet::new(),
			errors: FieldErrors::default(),
			show_password: false,
		}
	}

	pub fn data(&self) -> &FormData {
		&self.data
	}

	pub fn value(&self, field: FormField) -> &str {
		self.data.value(field)
	}

	pub fn errors(&self) -> &FieldErrors {
		&self.errors
	}

	pub fn is_touched(&self, field: FormField) -> bool {
		self.touched.contains(&field)
	}

	pub fn show_password(&self) -> bool {
		self.show_password
	}

	/// The `type` to give the password input
	pub fn password_input_type(&self) -> &'static str {
		if self.show_password {
			"text"
		} else {
			"password"
		}
	}

	/// Stores a new value as the user edits a field.
	///
	/// Fields the user has already left are checked again immediately; others wait for a blur or submit.
	pub fn on_change(&mut self, field: FormField, value: impl Into<String>) {
		let value = value.into();
		if self.touched.contains(&field) {
			self.errors.record(field, validation::validate(field, &value));
		}
		self.data.set_value(field, value);
		log::debug!("Field {} changed", field);
	}

	/// Marks a field as touched and checks the value it was left with.
	pub fn on_blur(&mut self, field: FormField, value: &str) {
		self.touched.insert(field);
		self.errors.record(field, validation::validate(field, value));
		log::debug!("Field {} left; valid: {}", field, self.errors.get(field).is_none());
	}

	pub fn toggle_password_visibility(&mut self) {
		self.show_password = !self.show_password;
	}

	/// Checks every field, replacing all displayed errors with the result.
	///
	/// Returns whether every field passed. Fields that were never touched show their errors afterward too.
	pub fn validate_form(&mut self) -> bool {
		let mut errors = FieldErrors::default();
		for field in FormField::ALL {
			if let Err(error) = validation::validate(field, self.data.value(field)) {
				errors.record(field, Err(error));
			}
		}
		self.errors = errors;
		!self.errors.has_errors()
	}

	/// Whether the submit button should be enabled.
	///
	/// This re-checks the current values and can disagree with the displayed errors for fields that haven't been
	/// validated since their last edit.
	pub fn is_form_valid(&self) -> bool {
		validation::is_form_valid(&self.data)
	}

	/// Whether the city selector accepts input
	pub fn city_selector_enabled(&self) -> bool {
		!self.data.country.is_empty()
	}

	/// Cities offered for the selected country
	pub fn city_options<'a>(&self, catalog: &'a Catalog) -> &'a [String] {
		catalog.cities_of(&self.data.country)
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use pretty_assertions::assert_eq;

	fn new_state() -> (Catalog, FormState) {
		let catalog = Catalog::builtin().unwrap();
		let state = FormState::new(&catalog);
		(catalog, state)
	}

	#[test]
	fn starts_blank_with_default_dial_code() {
		let (_, state) = new_state();
		for field in FormField::ALL {
			let expected = if field == FormField::CountryCode { "+91" } else { "" };
			assert_eq!(state.value(field), expected);
			assert!(!state.is_touched(field));
			assert!(!state.errors().was_validated(field));
		}
		assert!(!state.show_password());
		assert!(!state.is_form_valid());
	}

	#[test]
	fn untouched_field_is_not_checked_while_typing() {
		let (_, mut state) = new_state();
		state.on_change(FormField::Email, "jane");
		assert_eq!(state.value(FormField::Email), "jane");
		assert!(!state.errors().was_validated(FormField::Email));
		assert_eq!(state.errors().message(FormField::Email), "");
	}

	#[test]
	fn blur_checks_and_enables_live_checking() {
		let (_, mut state) = new_state();
		state.on_change(FormField::Email, "jane");
		state.on_blur(FormField::Email, "jane");
		assert!(state.is_touched(FormField::Email));
		assert_eq!(state.errors().message(FormField::Email), "Invalid email format");

		state.on_change(FormField::Email, "jane@doe.com");
		assert_eq!(state.errors().message(FormField::Email), "");
		assert!(state.errors().was_validated(FormField::Email));

		state.on_change(FormField::Email, "jane@");
		assert_eq!(
			state.errors().get(FormField::Email),
			Some(ValidationError::InvalidEmail)
		);
	}

	#[test]
	fn blur_on_empty_field_reports_it() {
		let (_, mut state) = new_state();
		state.on_blur(FormField::Country, "");
		assert_eq!(state.errors().message(FormField::Country), "Please select a country");
	}

	#[test]
	fn country_change_resets_city() {
		let (catalog, mut state) = new_state();
		assert!(!state.city_selector_enabled());
		assert!(state.city_options(&catalog).is_empty());

		state.on_change(FormField::Country, "USA");
		state.on_change(FormField::City, "Chicago");
		state.on_change(FormField::Country, "India");

		assert_eq!(state.value(FormField::City), "");
		assert!(state.city_selector_enabled());
		assert_eq!(
			state.city_options(&catalog),
			&["Mumbai", "Delhi", "Bangalore", "Chennai", "Kolkata", "Hyderabad"]
		);
	}

	#[test]
	fn country_change_leaves_city_error_alone() {
		let (_, mut state) = new_state();
		state.on_change(FormField::Country, "USA");
		state.on_change(FormField::City, "Chicago");
		state.on_blur(FormField::City, "Chicago");
		state.on_change(FormField::Country, "UK");
		// Only the edited field is checked again; the city message updates on its next blur or submit
		assert_eq!(state.value(FormField::City), "");
		assert_eq!(state.errors().message(FormField::City), "");
		assert!(!state.is_form_valid());
	}

	#[test]
	fn dial_code_starts_at_the_catalog_default() {
		let contents = r#"
			default-country-code "+44"
			country "UK" { city "London"; }
			country-code "+91" country="India"
			country-code "+44" country="UK"
		"#;
		let catalog = Catalog::parse("test.kdl", contents).unwrap();
		let state = FormState::new(&catalog);
		assert_eq!(state.value(FormField::CountryCode), "+44");
	}

	#[test]
	fn password_visibility_toggles() {
		let (_, mut state) = new_state();
		assert_eq!(state.password_input_type(), "password");
		state.toggle_password_visibility();
		assert!(state.show_password());
		assert_eq!(state.password_input_type(), "text");
		state.toggle_password_visibility();
		assert_eq!(state.password_input_type(), "password");
		assert!(!state.errors().was_validated(FormField::Password));
	}

	#[test]
	fn validate_form_reports_untouched_fields() {
		let (_, mut state) = new_state();
		state.on_change(FormField::FirstName, "Jane");
		assert!(!state.validate_form());
		assert_eq!(state.errors().message(FormField::FirstName), "");
		assert_eq!(state.errors().message(FormField::AadharNo), "Aadhar must be 12 digits");
		assert_eq!(
			state.errors().failing_fields(),
			vec![
				FormField::LastName,
				FormField::Username,
				FormField::Email,
				FormField::Password,
				FormField::PhoneNumber,
				FormField::Country,
				FormField::City,
				FormField::PanNo,
				FormField::AadharNo,
			]
		);
		// Validating the whole form doesn't mark anything as touched
		assert!(!state.is_touched(FormField::AadharNo));
	}

	#[test]
	fn validate_form_replaces_previous_errors() {
		let (_, mut state) = new_state();
		state.on_blur(FormField::FirstName, "");
		state.on_change(FormField::FirstName, "Jane");
		state.on_change(FormField::FirstName, "J");
		assert_eq!(
			state.errors().message(FormField::FirstName),
			"Must be at least 2 characters"
		);

		state.on_change(FormField::FirstName, "Jane");
		state.validate_form();
		assert!(!state.errors().was_validated(FormField::FirstName));
		assert!(state.errors().was_validated(FormField::LastName));
	}

	#[test]
	fn submit_button_state_ignores_displayed_errors() {
		let (_, mut state) = new_state();
		for (field, value) in [
			(FormField::FirstName, "Jane"),
			(FormField::LastName, "Doe"),
			(FormField::Username, "janedoe"),
			(FormField::Email, "jane"),
			(FormField::Password, "Abcdef1!"),
			(FormField::PhoneNumber, "9876543210"),
			(FormField::Country, "India"),
			(FormField::City, "Mumbai"),
			(FormField::PanNo, "ABCDE1234F"),
			(FormField::AadharNo, "123456789012"),
		] {
			state.on_change(field, value);
		}
		assert!(!state.validate_form());
		assert_eq!(state.errors().message(FormField::Email), "Invalid email format");

		// The email was never blurred, so fixing it doesn't clear the message but does enable submitting
		state.on_change(FormField::Email, "jane@doe.com");
		assert_eq!(state.errors().message(FormField::Email), "Invalid email format");
		assert!(state.is_form_valid());

		assert!(state.validate_form());
		assert!(!state.errors().has_errors());
	}
}
