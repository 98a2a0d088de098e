//! One module per `configkit` subcommand.

pub mod copy;
pub mod path;
pub mod show;
