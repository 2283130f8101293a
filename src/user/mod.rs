mod manager;
mod types;

pub use manager::AccountManager;
pub use types::AuthResult;
