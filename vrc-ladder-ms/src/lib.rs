#[macro_use]
extern crate error_chain;

#[macro_use]
extern crate log;

#[macro_use]
extern crate serde_derive;
extern crate serde;
extern crate serde_json;

#[macro_use]
extern crate derive_new;

extern crate chrono;

extern crate vrc_ladder_common;

pub mod engine;
