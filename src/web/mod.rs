//! Web server for browser-based reference lookups.
//!
//! Serves a single search page. The catalog is loaded once at startup and
//! shared read-only by every request.
//!
//! ## Starting the Server
//!
//! ```text
//! # Start on default port 8080
//! fo-lookup serve
//!
//! # Custom port and auto-open browser
//! fo-lookup serve --port 3000 --open
//! ```
//!
//! ## API Endpoints
//!
//! - `GET /` - Search page
//! - `GET /api/search?q=FO%20371/15/12` - Look up a reference string
//! - `GET /api/dataset` - Summary of the loaded catalog

pub mod server;
