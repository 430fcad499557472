pub mod credential;
pub mod errors;
pub mod scrypt;

pub use credential::StoredCredential;
pub use errors::PasswordError;
pub use scrypt::PasswordHasher;
