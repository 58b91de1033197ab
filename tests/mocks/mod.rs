//! Test doubles shared by the integration tests.

pub mod mock_contacts_provider;

pub use mock_contacts_provider::MockContactsProvider;
