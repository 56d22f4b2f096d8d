// ABOUTME: API module containing the HTTP handler functions for the textlog route.
// ABOUTME: All handlers live in the log sub-module.

pub mod log;
