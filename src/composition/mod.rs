pub mod builtin;
pub(crate) mod dsl;
pub(crate) mod model;
