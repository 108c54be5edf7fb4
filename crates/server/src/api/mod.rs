pub mod handlers;
pub mod organize;
pub mod routes;
pub mod view;

pub use routes::create_router;
