// © 2022-2024 Jacob Riddle (ElementalAlchemist)
//
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

use serde::{Deserialize, Serialize};
use std::error::Error;
use std::fmt;
use std::str::FromStr;

/// Identifies one input of the registration form.
#[derive(Clone, Copy, Debug, Deserialize, Eq, Hash, Ord, PartialEq, PartialOrd, Serialize)]
#[serde(rename_all = "camelCase")]
pub enum FormField {
	FirstName,
	LastName,
	Username,
	Email,
	Password,
	CountryCode,
	PhoneNumber,
	Country,
	City,
	PanNo,
	AadharNo,
}

impl FormField {
	/// Every field, in form order.
	pub const ALL: [FormField; 11] = [
		Self::FirstName,
		Self::LastName,
		Self::Username,
		Self::Email,
		Self::Password,
		Self::CountryCode,
		Self::PhoneNumber,
		Self::Country,
		Self::City,
		Self::PanNo,
		Self::AadharNo,
	];

	/// The name used for the field's input element and its serialized key
	pub fn name(self) -> &'static str {
		match self {
			Self::FirstName => "firstName",
			Self::LastName => "lastName",
			Self::Username => "username",
			Self::Email => "email",
			Self::Password => "password",
			Self::CountryCode => "countryCode",
			Self::PhoneNumber => "phoneNumber",
			Self::Country => "country",
			Self::City => "city",
			Self::PanNo => "panNo",
			Self::AadharNo => "aadharNo",
		}
	}

	pub fn label(self) -> &'static str {
		match self {
			Self::FirstName => "First Name",
			Self::LastName => "Last Name",
			Self::Username => "Username",
			Self::Email => "Email",
			Self::Password => "Password",
			Self::CountryCode => "Country Code",
			Self::PhoneNumber => "Phone Number",
			Self::Country => "Country",
			Self::City => "City",
			Self::PanNo => "PAN Number",
			Self::AadharNo => "Aadhar Number",
		}
	}
}

impl fmt::Display for FormField {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		write!(f, "{}", self.name())
	}
}

/// A field name that doesn't belong to the registration form
#[derive(Debug, Eq, PartialEq)]
pub struct UnknownField(pub String);

impl fmt::Display for UnknownField {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		let Self(name) = self;
		write!(f, "no registration field is named \"{}\"", name)
	}
}

impl Error for UnknownField {}

impl FromStr for FormField {
	type Err = UnknownField;

	fn from_str(name: &str) -> Result<Self, Self::Err> {
		Self::ALL
			.into_iter()
			.find(|field| field.name() == name)
			.ok_or_else(|| UnknownField(name.to_string()))
	}
}
