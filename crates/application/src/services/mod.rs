mod handler_chain;

pub use handler_chain::HandlerChain;
