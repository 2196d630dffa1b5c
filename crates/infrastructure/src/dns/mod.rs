pub mod reply_builder;
pub mod request_mapper;
pub mod server;

pub use reply_builder::ReplyBuilder;
pub use request_mapper::RequestMapper;
pub use server::DnsServerHandler;
