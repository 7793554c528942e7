// © 2022-2024 Jacob Riddle (ElementalAlchemist)
//
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Reference data for the country, city and dial code selectors.
//!
//! The data ships inside the build as `catalog.kdl`:
//!
//! ```kdl
//! default-country-code "+91"
//! country "India" {
//!     city "Mumbai"
//! }
//! country-code "+91" country="India"
//! ```

use knuffel::Decode;
use std::collections::HashSet;
use std::error::Error;
use std::fmt;

const BUILTIN_CATALOG: &str = include_str!("../../catalog.kdl");

#[derive(Debug, Decode)]
struct CatalogDocument {
	#[knuffel(child, unwrap(argument))]
	default_country_code: String,
	#[knuffel(children(name = "country"))]
	countries: Vec<Country>,
	#[knuffel(children(name = "country-code"))]
	country_codes: Vec<CountryCode>,
}

#[derive(Clone, Debug, Decode, Eq, PartialEq)]
pub struct Country {
	#[knuffel(argument)]
	pub name: String,
	#[knuffel(children(name = "city"), unwrap(argument))]
	pub cities: Vec<String>,
}

#[derive(Clone, Debug, Decode, Eq, PartialEq)]
pub struct CountryCode {
	#[knuffel(argument)]
	pub code: String,
	#[knuffel(property)]
	pub country: String,
}

impl CountryCode {
	/// Text shown for this code in the dial code selector, e.g. `+91 (India)`
	pub fn option_label(&self) -> String {
		format!("{} ({})", self.code, self.country)
	}
}

#[derive(Debug)]
pub enum CatalogError {
	Parse(knuffel::Error),
	NoCountries,
	DuplicateCountry(String),
	DuplicateCountryCode(String),
	UnlistedDefaultCountryCode(String),
}

impl fmt::Display for CatalogError {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		match self {
			Self::Parse(error) => write!(f, "could not read the country catalog: {}", error),
			Self::NoCountries => write!(f, "the country catalog doesn't list any countries"),
			Self::DuplicateCountry(name) => write!(f, "country \"{}\" is listed more than once", name),
			Self::DuplicateCountryCode(code) => write!(f, "country code \"{}\" is listed more than once", code),
			Self::UnlistedDefaultCountryCode(code) => {
				write!(f, "default country code \"{}\" isn't a listed country code", code)
			}
		}
	}
}

impl Error for CatalogError {}

impl From<knuffel::Error> for CatalogError {
	fn from(error: knuffel::Error) -> Self {
		Self::Parse(error)
	}
}

/// Read-only country, city and dial code lists
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Catalog {
	default_country_code: String,
	countries: Vec<Country>,
	country_codes: Vec<CountryCode>,
}

impl Catalog {
	/// Loads the catalog compiled into the build
	pub fn builtin() -> Result<Self, CatalogError> {
		Self::parse("catalog.kdl", BUILTIN_CATALOG)
	}

	pub fn parse(file_name: &str, contents: &str) -> Result<Self, CatalogError> {
		let document: CatalogDocument = knuffel::parse(file_name, contents)?;

		if document.countries.is_empty() {
			return Err(CatalogError::NoCountries);
		}

		let mut country_names = HashSet::new();
		for country in document.countries.iter() {
			if !country_names.insert(country.name.as_str()) {
				return Err(CatalogError::DuplicateCountry(country.name.clone()));
			}
		}

		let mut codes = HashSet::new();
		for country_code in document.country_codes.iter() {
			if !codes.insert(country_code.code.as_str()) {
				return Err(CatalogError::DuplicateCountryCode(country_code.code.clone()));
			}
		}

		if !codes.contains(document.default_country_code.as_str()) {
			return Err(CatalogError::UnlistedDefaultCountryCode(document.default_country_code));
		}

		log::debug!(
			"Loaded catalog {} with {} countries and {} country codes",
			file_name,
			document.countries.len(),
			document.country_codes.len()
		);

		Ok(Self {
			default_country_code: document.default_country_code,
			countries: document.countries,
			country_codes: document.country_codes,
		})
	}

	pub fn default_country_code(&self) -> &str {
		&self.default_country_code
	}

	pub fn countries(&self) -> &[Country] {
		&self.countries
	}

	pub fn country_codes(&self) -> &[CountryCode] {
		&self.country_codes
	}

	/// Cities of the named country. Unknown and empty names have no cities.
	pub fn cities_of(&self, country_name: &str) -> &[String] {
		self.countries
			.iter()
			.find(|country| country.name == country_name)
			.map(|country| country.cities.as_slice())
			.unwrap_or(&[])
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use pretty_assertions::assert_eq;

	#[test]
	fn builtin_catalog_loads_in_order() {
		let catalog = Catalog::builtin().unwrap();
		let names: Vec<&str> = catalog
			.countries()
			.iter()
			.map(|country| country.name.as_str())
			.collect();
		assert_eq!(names, vec!["India", "USA", "UK", "Canada"]);
		assert_eq!(catalog.default_country_code(), "+91");

		let labels: Vec<String> = catalog.country_codes().iter().map(CountryCode::option_label).collect();
		assert_eq!(
			labels,
			vec![
				"+91 (India)",
				"+1 (USA/Canada)",
				"+44 (UK)",
				"+61 (Australia)",
				"+49 (Germany)"
			]
		);
	}

	#[test]
	fn cities_follow_the_country() {
		let catalog = Catalog::builtin().unwrap();
		assert_eq!(
			catalog.cities_of("India"),
			&["Mumbai", "Delhi", "Bangalore", "Chennai", "Kolkata", "Hyderabad"]
		);
		assert_eq!(
			catalog.cities_of("USA"),
			&["New York", "Los Angeles", "Chicago", "Houston", "Phoenix"]
		);
		assert_eq!(
			catalog.cities_of("UK"),
			&["London", "Birmingham", "Manchester", "Glasgow", "Liverpool"]
		);
		assert_eq!(
			catalog.cities_of("Canada"),
			&["Toronto", "Vancouver", "Montreal", "Calgary", "Ottawa"]
		);
		assert!(catalog.cities_of("").is_empty());
		assert!(catalog.cities_of("Australia").is_empty());
	}

	#[test]
	fn duplicate_country_is_rejected() {
		let contents = r#"
			default-country-code "+1"
			country "USA" { city "Chicago"; }
			country "USA" { city "Houston"; }
			country-code "+1" country="USA"
		"#;
		let error = Catalog::parse("test.kdl", contents).unwrap_err();
		assert_eq!(error.to_string(), "country \"USA\" is listed more than once");
	}

	#[test]
	fn duplicate_country_code_is_rejected() {
		let contents = r#"
			default-country-code "+1"
			country "USA" { city "Chicago"; }
			country-code "+1" country="USA"
			country-code "+1" country="Canada"
		"#;
		let error = Catalog::parse("test.kdl", contents).unwrap_err();
		assert_eq!(error.to_string(), "country code \"+1\" is listed more than once");
	}

	#[test]
	fn default_code_must_be_listed() {
		let contents = r#"
			default-country-code "+7"
			country "USA" { city "Chicago"; }
			country-code "+1" country="USA"
		"#;
		let error = Catalog::parse("test.kdl", contents).unwrap_err();
		assert_eq!(
			error.to_string(),
			"default country code \"+7\" isn't a listed country code"
		);
	}

	#[test]
	fn empty_country_list_is_rejected() {
		let contents = r#"
			default-country-code "+1"
			country-code "+1" country="USA"
		"#;
		let error = Catalog::parse("test.kdl", contents).unwrap_err();
		assert!(matches!(error, CatalogError::NoCountries));
	}

	#[test]
	fn malformed_document_is_a_parse_error() {
		let error = Catalog::parse("test.kdl", "country {").unwrap_err();
		assert!(matches!(error, CatalogError::Parse(_)));
	}
}
