pub mod logging;
pub mod project;
pub mod prompt;
