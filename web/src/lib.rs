//! HTML front end of the analyzer over plain HTTP/1.1.

mod assets;
pub mod http;
pub mod page;
mod routes;
mod server;

pub use assets::Background;
pub use routes::App;
pub use server::{Server, serve_connection};
