// Start of file: /src/core/mod.rs

/*
    * Process-level plumbing: tracing setup, router assembly, listener and shutdown.
*/

pub mod logging;
pub mod server;

// End of file: /src/core/mod.rs
