//! # API crate — client for the remote auth service
//!
//! Everything the frontend needs to talk to the auth API lives here, independent
//! of any rendering code so it can be unit-tested on the host.
//!
//! ## Modules
//!
//! | Module | Purpose |
//! |--------|---------|
//! | [`auth`] | [`Session`]: the bearer token, in memory and mirrored to a [`store::TokenStore`] |
//! | [`client`] | [`AuthClient`]: request building, `login`, `signup`, `logout`, `get_profile` |
//! | [`result`] | [`ApiResult`]: the uniform success/failure shape every call returns |
//! | [`models`] | [`UserProfile`] parsed from the profile endpoint |
//!
//! ## Endpoints
//!
//! - `POST /auth/login` — `{ email, password }`
//! - `POST /auth/signup` — `{ name, email, password }`
//! - `POST /auth/logout`
//! - `GET /auth/profile`
//!
//! Authenticated calls carry `Authorization: Bearer <token>` whenever the
//! session holds one.

pub mod auth;
pub mod client;
pub mod error;
pub mod models;
mod request;
pub mod result;

pub use auth::Session;
pub use client::AuthClient;
pub use error::ApiError;
pub use models::UserProfile;
pub use request::RequestOptions;
pub use result::{ApiResult, Rejection, GENERIC_ERROR};
