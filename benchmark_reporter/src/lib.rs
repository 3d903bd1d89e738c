//!
//! The benchmark reporter library.
//!

pub mod input;
pub mod kind;
pub mod model;
pub mod output;
pub mod report;
pub mod runner;

pub use crate::input::error::Error as InputError;
pub use crate::input::parser::Parser;
pub use crate::input::Input;
pub use crate::kind::Kind;
pub use crate::model::record::Record;
pub use crate::model::result_set::ResultSet;
pub use crate::output::format::Format as OutputFormat;
pub use crate::output::Output;
pub use crate::report::generate as generate_report;
pub use crate::report::settings::Settings as ReportSettings;
pub use crate::report::speedup::Speedup;
pub use crate::runner::error::Error as RunnerError;
pub use crate::runner::Runner;
