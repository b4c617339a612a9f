// Core modules implementing the wrapper type and error modeling.
pub mod error;
pub mod maybe;
