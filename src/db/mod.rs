mod pool;

pub use pool::{AsyncDbPool, establish_connection_pool};
