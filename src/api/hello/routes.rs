// Start of file: /src/api/hello/routes.rs

/*
    * Registers the root route. `get` also answers HEAD; any other method
    * gets axum's default 405, and unknown paths its default 404.
*/

use axum::{routing::get, Router};

use crate::api::hello::handler::hello_handler;
pub fn hello_routes() -> Router {
    Router::new().route("/", get(hello_handler))
}

// End of file: /src/api/hello/routes.rs
