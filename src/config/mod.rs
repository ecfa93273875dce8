//! Configuration model for kublo.
//!
//! Every setting has a default, so the tool runs without any config file.
//! A YAML file passed with `--config` overrides individual fields; unknown
//! fields are ignored for forward compatibility.

mod model;
mod operations;


pub use model::Config;
