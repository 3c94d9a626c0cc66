pub mod config;
pub mod consts;
pub mod error;
pub mod input;
pub mod labels;
pub mod model;
pub mod prediction;
pub mod session;
