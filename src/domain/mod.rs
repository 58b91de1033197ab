//! Domain value objects and types.
//!
//! Type-safe wrappers for contact identifiers, phone numbers, number labels
//! and recipient tokens. Values are validated at construction time so the
//! matching and token layers never see malformed input.

pub mod contact_id;
pub mod errors;
pub mod label;
pub mod phone;
pub mod token;

pub use contact_id::ContactId;
pub use errors::ValidationError;
pub use label::PhoneLabel;
pub use phone::PhoneNumber;
pub use token::Token;
