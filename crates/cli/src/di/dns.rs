use subnet_echo_application::services::HandlerChain;
use subnet_echo_domain::Config;
use subnet_echo_infrastructure::dns::DnsServerHandler;
use tracing::info;

pub fn build_dns_handler(config: &Config) -> anyhow::Result<DnsServerHandler> {
    let directives = config.chain.directives()?;
    let chain = HandlerChain::from_directives(&directives)?;

    info!(handlers = ?chain.names(), "Handler chain ready");

    Ok(DnsServerHandler::new(chain))
}
