//! External dependency implementations (ports + adapters)

pub mod announcer;
pub mod clock;
pub mod ports;
pub mod settings;
