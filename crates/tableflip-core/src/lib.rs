//! tableflip-core: argument parsing and response composition for the
//! `flip` / `unflip` slash commands.
//!
//! A command is a verb followed by a flat list of flags and free text:
//!
//! - `flip Thanks Obama` flips the phrase: `(╯°□°)╯︵ɐɯɐqO sʞuɐɥ┴`
//! - `flip -table -rage` flips a table in anger: `(╯ಠ益ಠ)╯彡┻━┻`
//! - `unflip -table` puts it back: `┳━┳ノ(º _ ºノ)`
//!
//! # Grammar
//!
//! - Tokens starting with `-` are flags (`-table`, `-rage`, `-right`, ...)
//! - The last flag setting a field wins
//! - Everything else is phrase text, ignored once `-table` is given
//! - `-help` or an unknown flag yields a [`CommandError`]

pub mod command;
pub mod compose;
pub mod error;
pub mod face;
pub mod flipper;
pub mod parse;
pub mod router;

pub use command::*;
pub use compose::*;
pub use error::*;
pub use face::*;
pub use flipper::*;
pub use parse::*;
pub use router::*;
