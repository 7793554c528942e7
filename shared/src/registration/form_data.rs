// © 2022-2024 Jacob Riddle (ElementalAlchemist)
//
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

use super::field::FormField;
use serde::{Deserialize, Serialize};

/// Current values of every registration input
#[derive(Clone, Debug, Default, Deserialize, Eq, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FormData {
	pub first_name: String,
	pub last_name: String,
	pub username: String,
	pub email: String,
	pub password: String,
	pub country_code: String,
	pub phone_number: String,
	pub country: String,
	pub city: String,
	pub pan_no: String,
	pub aadhar_no: String,
}

impl FormData {
	/// Creates an empty record with the dial code preselected
	pub fn with_country_code(country_code: impl Into<String>) -> Self {
		Self {
			country_code: country_code.into(),
			..Self::default()
		}
	}

	pub fn value(&self, field: FormField) -> &str {
		match field {
			FormField::FirstName => &self.first_name,
			FormField::LastName => &self.last_name,
			FormField::Username => &self.username,
			FormField::Email => &self.email,
			FormField::Password => &self.password,
			FormField::CountryCode => &self.country_code,
			FormField::PhoneNumber => &self.phone_number,
			FormField::Country => &self.country,
			FormField::City => &self.city,
			FormField::PanNo => &self.pan_no,
			FormField::AadharNo => &self.aadhar_no,
		}
	}

	/// Stores a new value for a field.
	///
	/// The city list depends on the country, so setting the country always clears the city.
	pub fn set_value(&mut self, field: FormField, value: String) {
		let slot = match field {
			FormField::FirstName => &mut self.first_name,
			FormField::LastName => &mut self.last_name,
			FormField::Username => &mut self.username,
			FormField::Email => &mut self.email,
			FormField::Password => &mut self.password,
			FormField::CountryCode => &mut self.country_code,
			FormField::PhoneNumber => &mut self.phone_number,
			FormField::Country => &mut self.country,
			FormField::City => &mut self.city,
			FormField::PanNo => &mut self.pan_no,
			FormField::AadharNo => &mut self.aadhar_no,
		};
		*slot = value;

		if field == FormField::Country {
			self.city.clear();
		}
	}

	/// Labeled rows shown on the registration summary, in display order
	pub fn summary_entries(&self) -> Vec<SummaryEntry> {
		vec![
			SummaryEntry::new(FormField::FirstName.label(), self.first_name.clone()),
			SummaryEntry::new(FormField::LastName.label(), self.last_name.clone()),
			SummaryEntry::new(FormField::Username.label(), self.username.clone()),
			SummaryEntry::new(FormField::Email.label(), self.email.clone()),
			SummaryEntry::new("Phone", format!("{} {}", self.country_code, self.phone_number)),
			SummaryEntry::new(FormField::Country.label(), self.country.clone()),
			SummaryEntry::new(FormField::City.label(), self.city.clone()),
			SummaryEntry::new(FormField::PanNo.label(), self.pan_no.clone()),
			SummaryEntry::new(FormField::AadharNo.label(), self.aadhar_no.clone()),
		]
	}
}

#[derive(Clone, Debug, Eq, PartialEq)]
pub struct SummaryEntry {
	pub label: &'static str,
	pub value: String,
}

impl SummaryEntry {
	fn new(label: &'static str, value: String) -> Self {
		Self { label, value }
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use pretty_assertions::assert_eq;

	#[test]
	fn set_value_reaches_the_matching_field() {
		let mut data = FormData::default();
		for field in FormField::ALL {
			data.set_value(field, format!("{}-value", field.name()));
		}
		// City comes after country in form order, so it survives the country reset
		for field in FormField::ALL {
			assert_eq!(data.value(field), format!("{}-value", field.name()));
		}
	}

	#[test]
	fn changing_country_clears_city() {
		let mut data = FormData::default();
		data.set_value(FormField::Country, String::from("USA"));
		data.set_value(FormField::City, String::from("Chicago"));
		data.set_value(FormField::Country, String::from("India"));
		assert_eq!(data.city, "");

		// Reselecting the same country still clears
		data.set_value(FormField::City, String::from("Delhi"));
		data.set_value(FormField::Country, String::from("India"));
		assert_eq!(data.city, "");
	}

	#[test]
	fn serializes_with_input_names() {
		let data = FormData::with_country_code("+44");
		let json = serde_json::to_value(&data).unwrap();
		let object = json.as_object().unwrap();
		assert_eq!(object.len(), FormField::ALL.len());
		for field in FormField::ALL {
			assert!(object.contains_key(field.name()), "missing key {}", field.name());
		}
		assert_eq!(object["countryCode"], "+44");
	}

	#[test]
	fn summary_joins_phone_with_dial_code() {
		let mut data = FormData::with_country_code("+1");
		data.phone_number = String::from("5551234567");
		data.pan_no = String::from("abcde1234f");
		let entries = data.summary_entries();
		let labels: Vec<&str> = entries.iter().map(|entry| entry.label).collect();
		assert_eq!(
			labels,
			vec![
				"First Name",
				"Last Name",
				"Username",
				"Email",
				"Phone",
				"Country",
				"City",
				"PAN Number",
				"Aadhar Number"
			]
		);
		assert_eq!(entries[4].value, "+1 5551234567");
		// The summary shows what was stored, not an upper-cased copy
		assert_eq!(entries[7].value, "abcde1234f");
	}
}
