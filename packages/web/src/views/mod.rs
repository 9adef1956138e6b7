mod auth;
pub use auth::Auth;

mod home;
pub use home::Home;
