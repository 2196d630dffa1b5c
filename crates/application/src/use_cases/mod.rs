pub mod echo;

pub use echo::{EchoClientSubnetHandler, RespondHandler};
