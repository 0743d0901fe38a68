//! Castle Kilmere Engine library.
//!
//! ## Structure
//!
//! - `use_cases/` - Learn, cast, befriend, grade and report, one struct per action
//! - `infrastructure/` - Ports (clock, announcer) and their implementations, settings
//! - `app` - Application composition

pub mod app;
pub mod infrastructure;
pub mod use_cases;

pub use app::App;
