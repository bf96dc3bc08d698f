// Start of file: /src/config/mod.rs

/*
* Re-export submodules related to configuration and environment variables.
*/

pub mod environment;

// End of file: /src/config/mod.rs
