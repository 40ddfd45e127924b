use pocket_dns_infrastructure::dns::DnsServerHandler;
use socket2::{Domain, Protocol, Socket, Type};
use std::io;
use std::net::SocketAddr;
use std::sync::Arc;
use tokio::net::UdpSocket;
use tokio::task::JoinSet;
use tracing::{debug, error, info};

/// Classic DNS over UDP without EDNS(0).
const RECV_BUFFER_SIZE: usize = 512;

pub async fn start_dns_server(
    socket_addr: SocketAddr,
    handler: DnsServerHandler,
    num_workers: usize,
) -> anyhow::Result<()> {
    let domain = if socket_addr.is_ipv4() {
        Domain::IPV4
    } else {
        Domain::IPV6
    };

    info!(bind_address = %socket_addr, num_workers, "Starting DNS server with SO_REUSEPORT");

    let handler = Arc::new(handler);
    let mut join_set: JoinSet<()> = JoinSet::new();

    for i in 0..num_workers {
        let udp_socket = create_udp_socket(domain, socket_addr)?;
        let handler_udp = handler.clone();
        join_set.spawn(async move {
            run_udp_worker(udp_socket, handler_udp, i).await;
        });
    }

    info!("DNS server ready: {} workers on {}", num_workers, socket_addr);

    while join_set.join_next().await.is_some() {}
    anyhow::bail!("all DNS workers on {} stopped", socket_addr)
}

/// Receive, answer, send. Undecodable datagrams are dropped (the handler logs
/// them); send failures are logged and never retried. A receive error that is
/// not transient stops the worker.
async fn run_udp_worker(socket: UdpSocket, handler: Arc<DnsServerHandler>, worker_id: usize) {
    let mut recv_buf = [0u8; RECV_BUFFER_SIZE];

    loop {
        let (n, from) = match socket.recv_from(&mut recv_buf).await {
            Ok(received) => received,
            Err(e) if is_transient_recv_error(&e) => {
                debug!(worker = worker_id, error = %e, "Transient UDP recv error");
                continue;
            }
            Err(e) => {
                error!(worker = worker_id, error = %e, "UDP recv failed, stopping worker");
                break;
            }
        };

        debug!(worker = worker_id, client = %from, bytes = n, "Received DNS datagram");

        let response = match handler.handle_datagram(&recv_buf[..n]) {
            Ok(response) => response,
            Err(_) => continue,
        };

        if let Err(e) = socket.send_to(&response, from).await {
            error!(worker = worker_id, client = %from, error = %e, "Error sending response");
        }
    }
}

/// Errors a UDP socket can report on `recv_from` while staying usable: a signal
/// interruption, or an ICMP error left over from an earlier `send_to`.
fn is_transient_recv_error(e: &io::Error) -> bool {
    matches!(
        e.kind(),
        io::ErrorKind::Interrupted
            | io::ErrorKind::WouldBlock
            | io::ErrorKind::ConnectionReset
            | io::ErrorKind::ConnectionRefused
    )
}

fn create_udp_socket(domain: Domain, socket_addr: SocketAddr) -> anyhow::Result<UdpSocket> {
    let socket = Socket::new(domain, Type::DGRAM, Some(Protocol::UDP))?;
    if socket_addr.is_ipv6() {
        socket.set_only_v6(false)?;
    }
    socket.set_reuse_address(true)?;
    #[cfg(unix)]
    socket.set_reuse_port(true)?;
    socket.bind(&socket_addr.into())?;
    socket.set_nonblocking(true)?;
    let std_socket: std::net::UdpSocket = socket.into();
    Ok(UdpSocket::from_std(std_socket)?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use pocket_dns_application::use_cases::HandleDnsQueryUseCase;
    use pocket_dns_domain::config::ZoneConfig;
    use pocket_dns_infrastructure::dns::ZoneTable;
    use std::time::Duration;

    fn make_handler() -> Arc<DnsServerHandler> {
        let zone = ZoneTable::from_config(&ZoneConfig::default()).unwrap();
        let use_case = HandleDnsQueryUseCase::new(Arc::new(zone));
        Arc::new(DnsServerHandler::new(Arc::new(use_case)))
    }

    fn localhost_query(id: u16) -> Vec<u8> {
        let mut buf = id.to_be_bytes().to_vec();
        buf.extend_from_slice(&[0x01, 0x00, 0x00, 0x01, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00]);
        buf.push(9);
        buf.extend_from_slice(b"localhost");
        buf.extend_from_slice(&[0x00, 0x00, 0x01, 0x00, 0x01]);
        buf
    }

    async fn spawn_worker() -> SocketAddr {
        let addr: SocketAddr = "127.0.0.1:0".parse().unwrap();
        let socket = create_udp_socket(Domain::IPV4, addr).unwrap();
        let local_addr = socket.local_addr().unwrap();
        tokio::spawn(run_udp_worker(socket, make_handler(), 0));
        local_addr
    }

    #[test]
    fn test_recv_error_classification() {
        for kind in [
            io::ErrorKind::Interrupted,
            io::ErrorKind::WouldBlock,
            io::ErrorKind::ConnectionReset,
            io::ErrorKind::ConnectionRefused,
        ] {
            assert!(is_transient_recv_error(&io::Error::from(kind)), "{kind:?}");
        }
        for kind in [
            io::ErrorKind::PermissionDenied,
            io::ErrorKind::InvalidInput,
            io::ErrorKind::Other,
        ] {
            assert!(!is_transient_recv_error(&io::Error::from(kind)), "{kind:?}");
        }
    }

    #[tokio::test]
    async fn test_worker_answers_query() {
        let server_addr = spawn_worker().await;
        let client = UdpSocket::bind("127.0.0.1:0").await.unwrap();

        let query = localhost_query(0x0A0B);
        client.send_to(&query, server_addr).await.unwrap();

        let mut buf = [0u8; 512];
        let (n, _) = tokio::time::timeout(Duration::from_secs(2), client.recv_from(&mut buf))
            .await
            .unwrap()
            .unwrap();
        let response = &buf[..n];

        assert_eq!(n, 12 + (query.len() - 12) + 16);
        assert_eq!(&response[0..2], &[0x0A, 0x0B]);
        assert_eq!(&response[n - 4..], &[127, 0, 0, 1]);
    }

    #[tokio::test]
    async fn test_worker_drops_short_packet_and_keeps_serving() {
        let server_addr = spawn_worker().await;
        let client = UdpSocket::bind("127.0.0.1:0").await.unwrap();

        client.send_to(&[0x00, 0x01, 0x02], server_addr).await.unwrap();

        let mut buf = [0u8; 512];
        let silent =
            tokio::time::timeout(Duration::from_millis(200), client.recv_from(&mut buf)).await;
        assert!(silent.is_err(), "no reply expected for a short packet");

        client.send_to(&localhost_query(7), server_addr).await.unwrap();
        let (n, _) = tokio::time::timeout(Duration::from_secs(2), client.recv_from(&mut buf))
            .await
            .unwrap()
            .unwrap();
        assert_eq!(&buf[0..2], &[0x00, 0x07]);
        assert_eq!(&buf[n - 4..n], &[127, 0, 0, 1]);
    }
}
