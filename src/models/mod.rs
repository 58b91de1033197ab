//! Data models for address book entities.
//!
//! This module contains the contact record enumerated from the device and
//! the labeled phone numbers it carries.

pub mod contact;

pub use contact::{ContactRecord, LabeledNumber};
