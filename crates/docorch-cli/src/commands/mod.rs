//! Command implementations.

pub mod extract;
pub mod run;
pub mod text;

pub use self::extract::execute_extract;
pub use self::run::execute_run;
pub use self::text::execute_text;
