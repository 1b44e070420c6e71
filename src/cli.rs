//! CLI domain: parse, route, help, output, picker and presentation only.
//! No kubeconfig logic; the route table dispatches to the context services.

mod help;
mod output;
mod parse;
mod picker;
mod presentation;
mod route;

pub use help::{command_name, reserved_word, ReservedWord};
pub use output::map_error;
pub use parse::Cli;
pub use picker::{ContextPicker, DialoguerPicker};
pub use presentation::Palette;
pub use route::RunContext;
