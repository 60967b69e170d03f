pub mod middleware;
pub mod request_id;

pub use middleware::{credential_middleware, X_API_KEY};
pub use request_id::request_id_middleware;
