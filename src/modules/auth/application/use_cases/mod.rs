pub mod fetch_user;
pub mod login_user;
pub mod oauth_sign_in;
pub mod register_user;
