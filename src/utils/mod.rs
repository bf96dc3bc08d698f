// Start of file: /src/utils/mod.rs

/*
    * Cross-cutting helpers shared by the router: global error mapping
    * and request logging.
*/

pub mod error_handler;
pub mod request_logger;

// End of file: /src/utils/mod.rs
