pub mod errors;
pub mod db;
pub mod invite_code;
pub mod user_role;
