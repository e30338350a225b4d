mod get_user;
mod login;
mod signup;
mod update_user;

pub use get_user::*;
pub use login::*;
pub use signup::*;
pub use update_user::*;
