mod fetch_user;
mod login_user;
mod oauth_callback;
mod register_user;

pub use fetch_user::get_user_handler;
pub use login_user::login_user_handler;
pub use oauth_callback::oauth_callback_handler;
pub use register_user::register_user_handler;

pub use fetch_user::__path_get_user_handler;
pub use login_user::__path_login_user_handler;
pub use oauth_callback::__path_oauth_callback_handler;
pub use register_user::__path_register_user_handler;

pub use fetch_user::UserProfileResponse;
pub use login_user::{LoginRequestDto, LoginResponse, LoginUserInfo};
pub use register_user::{RegisterRequestDto, RegisterResponse};
