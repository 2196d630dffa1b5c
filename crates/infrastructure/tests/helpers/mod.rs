#![allow(dead_code, unused_imports)]

pub mod builders;
pub mod echo_server;

pub use builders::{
    query_message, raw_query_with_options, subnet_option, subnet_option_bytes, with_edns,
};
pub use echo_server::EchoServer;
