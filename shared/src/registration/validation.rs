// © 2022-2024 Jacob Riddle (ElementalAlchemist)
//
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Per-field validation rules.
//!
//! The rules match what a browser's regular expression engine does with the same patterns: `\s` is the
//! ECMAScript whitespace set, `\d` only matches ASCII digits, and lengths are counted in UTF-16 code units.

use super::field::FormField;
use super::form_data::FormData;
use once_cell::sync::Lazy;
use regex::Regex;
use std::error::Error;
use std::fmt;

/// Any character outside the ECMAScript whitespace set other than `@`
const EMAIL_PART: &str = r"[^\t\n\x0B\x0C\r \x{A0}\x{1680}\x{2000}-\x{200A}\x{2028}\x{2029}\x{202F}\x{205F}\x{3000}\x{FEFF}@]+";

static EMAIL_PATTERN: Lazy<Regex> = Lazy::new(|| pattern(&format!(r"^{0}@{0}\.{0}$", EMAIL_PART)));
static PASSWORD_CHARACTERS_PATTERN: Lazy<Regex> = Lazy::new(|| pattern(r"^[A-Za-z0-9@$!%*?&]{8,}$"));
static PHONE_NUMBER_PATTERN: Lazy<Regex> = Lazy::new(|| pattern(r"^[0-9]{10}$"));
static PAN_NUMBER_PATTERN: Lazy<Regex> = Lazy::new(|| pattern(r"^[A-Z]{5}[0-9]{4}[A-Z]{1}$"));
static AADHAR_PATTERN: Lazy<Regex> = Lazy::new(|| pattern(r"^[0-9]{12}$"));

const PASSWORD_SPECIAL_CHARACTERS: &str = "@$!%*?&";

/// Why a field's value was rejected. The display text is the message shown next to the field.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub enum ValidationError {
	TooShort { min_length: usize },
	InvalidEmail,
	WeakPassword,
	InvalidPhoneNumber,
	MissingCountry,
	MissingCity,
	InvalidPan,
	InvalidAadhar,
}

impl fmt::Display for ValidationError {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		match self {
			Self::TooShort { min_length } => write!(f, "Must be at least {} characters", min_length),
			Self::InvalidEmail => write!(f, "Invalid email format"),
			Self::WeakPassword => write!(
				f,
				"Password must be 8+ chars with uppercase, lowercase, number, and special character"
			),
			Self::InvalidPhoneNumber => write!(f, "Phone number must be 10 digits"),
			Self::MissingCountry => write!(f, "Please select a country"),
			Self::MissingCity => write!(f, "Please select a city"),
			Self::InvalidPan => write!(f, "PAN format: AAAAA9999A"),
			Self::InvalidAadhar => write!(f, "Aadhar must be 12 digits"),
		}
	}
}

impl Error for ValidationError {}

/// The check applied to a field's value
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum FieldRule {
	MinTrimmedLength(usize),
	Email,
	Password,
	PhoneNumber,
	Selected(ValidationError),
	Pan,
	Aadhar,
	Unchecked,
}

impl FieldRule {
	pub fn for_field(field: FormField) -> Self {
		match field {
			FormField::FirstName | FormField::LastName => Self::MinTrimmedLength(2),
			FormField::Username => Self::MinTrimmedLength(3),
			FormField::Email => Self::Email,
			FormField::Password => Self::Password,
			FormField::CountryCode => Self::Unchecked,
			FormField::PhoneNumber => Self::PhoneNumber,
			FormField::Country => Self::Selected(ValidationError::MissingCountry),
			FormField::City => Self::Selected(ValidationError::MissingCity),
			FormField::PanNo => Self::Pan,
			FormField::AadharNo => Self::Aadhar,
		}
	}

	pub fn check(self, value: &str) -> Result<(), ValidationError> {
		let (valid, error) = match self {
			Self::MinTrimmedLength(min_length) => (
				trimmed_length(value) >= min_length,
				ValidationError::TooShort { min_length },
			),
			Self::Email => (EMAIL_PATTERN.is_match(value), ValidationError::InvalidEmail),
			Self::Password => (is_strong_password(value), ValidationError::WeakPassword),
			Self::PhoneNumber => (
				PHONE_NUMBER_PATTERN.is_match(value),
				ValidationError::InvalidPhoneNumber,
			),
			Self::Selected(error) => (!value.is_empty(), error),
			Self::Pan => (
				PAN_NUMBER_PATTERN.is_match(&value.to_uppercase()),
				ValidationError::InvalidPan,
			),
			Self::Aadhar => (AADHAR_PATTERN.is_match(value), ValidationError::InvalidAadhar),
			Self::Unchecked => return Ok(()),
		};

		if valid {
			Ok(())
		} else {
			Err(error)
		}
	}
}

/// Runs the rule for the given field against a candidate value.
pub fn validate(field: FormField, value: &str) -> Result<(), ValidationError> {
	FieldRule::for_field(field).check(value)
}

/// The message to show for a field; empty when the value is valid.
pub fn validation_message(field: FormField, value: &str) -> String {
	match validate(field, value) {
		Ok(()) => String::new(),
		Err(error) => error.to_string(),
	}
}

/// Whether the whole record could be submitted right now.
///
/// Every field must be filled in and pass its rule. This is computed from the values alone and doesn't consult
/// any errors already shown to the user.
pub fn is_form_valid(data: &FormData) -> bool {
	FormField::ALL.into_iter().all(|field| {
		let value = data.value(field);
		!value.is_empty() && validate(field, value).is_ok()
	})
}

fn is_ecmascript_whitespace(c: char) -> bool {
	c == '\u{FEFF}' || (c != '\u{85}' && c.is_whitespace())
}

fn pattern(source: &str) -> Regex {
	Regex::new(source).expect("validation patterns should compile")
}

fn trimmed_length(value: &str) -> usize {
	value.trim_matches(is_ecmascript_whitespace).encode_utf16().count()
}

fn is_strong_password(value: &str) -> bool {
	PASSWORD_CHARACTERS_PATTERN.is_match(value)
		&& value.chars().any(|c| c.is_ascii_lowercase())
		&& value.chars().any(|c| c.is_ascii_uppercase())
		&& value.chars().any(|c| c.is_ascii_digit())
		&& value.chars().any(|c| PASSWORD_SPECIAL_CHARACTERS.contains(c))
}
