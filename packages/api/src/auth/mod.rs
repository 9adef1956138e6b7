//! Session handling for the auth client.

mod session;

pub use session::Session;
