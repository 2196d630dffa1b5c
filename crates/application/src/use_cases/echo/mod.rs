mod echo_client_subnet;
mod respond;

pub use echo_client_subnet::EchoClientSubnetHandler;
pub use respond::RespondHandler;
