pub mod macros;
pub mod reactive;
pub mod schedule;
pub mod validators;
