use hickory_proto::op::Message;
use hickory_server::ServerFuture;
use subnet_echo_application::services::HandlerChain;
use subnet_echo_domain::{HandlerDirective, ResponseCode};
use subnet_echo_infrastructure::dns::DnsServerHandler;
use std::net::SocketAddr;
use std::time::Duration;
use tokio::io::{AsyncReadExt, AsyncWriteExt};
use tokio::net::{TcpListener, TcpStream, UdpSocket};
use tokio::task::JoinHandle;

/// Echo chain served over UDP and TCP on loopback.
pub struct EchoServer {
    udp_addr: SocketAddr,
    tcp_addr: SocketAddr,
    task: JoinHandle<()>,
}

impl EchoServer {
    pub async fn start() -> Self {
        Self::start_with(&[
            HandlerDirective::EchoClientSubnet,
            HandlerDirective::Respond(ResponseCode::Refused),
        ])
        .await
    }

    pub async fn start_with(directives: &[HandlerDirective]) -> Self {
        let chain = HandlerChain::from_directives(directives).unwrap();
        let udp = UdpSocket::bind("127.0.0.1:0").await.unwrap();
        let tcp = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let udp_addr = udp.local_addr().unwrap();
        let tcp_addr = tcp.local_addr().unwrap();

        let mut server = ServerFuture::new(DnsServerHandler::new(chain));
        server.register_socket(udp);
        server.register_listener(tcp, Duration::from_secs(5));

        let task = tokio::spawn(async move {
            let _ = server.block_until_done().await;
        });

        Self {
            udp_addr,
            tcp_addr,
            task,
        }
    }

    /// Send `query` over UDP; returns the reply and the client's own address.
    pub async fn exchange_udp(&self, query: &Message) -> (Message, SocketAddr) {
        self.exchange_udp_wire(&query.to_vec().unwrap()).await
    }

    /// Send already-encoded bytes over UDP.
    pub async fn exchange_udp_wire(&self, wire: &[u8]) -> (Message, SocketAddr) {
        let client = UdpSocket::bind("127.0.0.1:0").await.unwrap();
        let local = client.local_addr().unwrap();
        client.send_to(wire, self.udp_addr).await.unwrap();

        let mut buf = vec![0u8; 4096];
        let (len, _) = tokio::time::timeout(Duration::from_secs(5), client.recv_from(&mut buf))
            .await
            .expect("timed out waiting for UDP reply")
            .unwrap();

        (Message::from_vec(&buf[..len]).unwrap(), local)
    }

    /// Same as `exchange_udp`, framed with the two-byte TCP length prefix.
    pub async fn exchange_tcp(&self, query: &Message) -> (Message, SocketAddr) {
        let mut stream = TcpStream::connect(self.tcp_addr).await.unwrap();
        let local = stream.local_addr().unwrap();

        let wire = query.to_vec().unwrap();
        stream.write_u16(wire.len() as u16).await.unwrap();
        stream.write_all(&wire).await.unwrap();

        let reply = tokio::time::timeout(Duration::from_secs(5), async {
            let len = stream.read_u16().await.unwrap() as usize;
            let mut buf = vec![0u8; len];
            stream.read_exact(&mut buf).await.unwrap();
            buf
        })
        .await
        .expect("timed out waiting for TCP reply");

        (Message::from_vec(&reply).unwrap(), local)
    }
}

impl Drop for EchoServer {
    fn drop(&mut self) {
        self.task.abort();
    }
}
