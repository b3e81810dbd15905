//! Launcher startup and the background static file server.
mod startup;
mod static_files;

pub use startup::{launch_browser, run_frontend_build, run_launcher, RuntimeExit};
pub use static_files::{bind_listener, listen_addr, router, spawn_static_server};
