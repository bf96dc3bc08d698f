// Start of file: /src/api/mod.rs

/*
    * The api module organizes logical route groupings.
    * Each sub-module defines and registers its own endpoints.
*/

pub mod hello;

// End of file: /src/api/mod.rs
