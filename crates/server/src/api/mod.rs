pub mod departments;
pub mod handlers;
pub mod middleware;
pub mod routes;
pub mod tickets;
pub mod timeline;

pub use routes::create_router;
