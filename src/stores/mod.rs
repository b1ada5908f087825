pub mod auth_store;
pub mod kv_store;
pub mod user_store;

pub use auth_store::AuthStore;
pub use kv_store::KvStore;
pub use user_store::UserStore;
