//! Form validation for the marketplace: category, subcategory, store,
//! product and shipping-address submissions.

pub mod config;
pub mod error;
pub mod forms;
pub mod types;
pub mod validation;
