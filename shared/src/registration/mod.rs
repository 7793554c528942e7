// © 2022-2024 Jacob Riddle (ElementalAlchemist)
//
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

pub mod catalog;
pub mod field;
pub mod form_data;
pub mod session;
pub mod state;
pub mod validation;

pub use catalog::{Catalog, CatalogError, Country, CountryCode};
pub use field::{FormField, UnknownField};
pub use form_data::{FormData, SummaryEntry};
pub use session::{RegistrationSession, Route, SessionError};
pub use state::{FieldErrors, FormState};
pub use validation::{is_form_valid, validate, validation_message, FieldRule, ValidationError};
