use std::io;
use std::net::{IpAddr, SocketAddr};
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};
use tokio::io::{AsyncReadExt, AsyncWriteExt};
use tokio::net::{TcpListener, UdpSocket};
use tokio::sync::watch;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Protocol {
    Udp,
    Tcp,
}

/// The question of a received query.
#[derive(Debug, Clone)]
pub struct MockQuery {
    pub id: [u8; 2],
    /// Lowercase dotted name with a trailing dot.
    pub name: String,
    pub qtype: u16,
    question: Vec<u8>,
}

impl MockQuery {
    fn parse(bytes: &[u8]) -> Option<Self> {
        if bytes.len() < 12 {
            return None;
        }
        let mut pos = 12;
        let mut labels = Vec::new();
        loop {
            let len = *bytes.get(pos)? as usize;
            pos += 1;
            if len == 0 {
                break;
            }
            labels.push(String::from_utf8_lossy(bytes.get(pos..pos + len)?).to_lowercase());
            pos += len;
        }
        let qtype = u16::from_be_bytes([*bytes.get(pos)?, *bytes.get(pos + 1)?]);
        let question = bytes.get(12..pos + 4)?.to_vec();

        Some(Self {
            id: [bytes[0], bytes[1]],
            name: format!("{}.", labels.join(".")),
            qtype,
            question,
        })
    }
}

/// A response to encode for a [`MockQuery`].
#[derive(Debug, Clone, Default)]
pub struct MockResponse {
    rcode: u8,
    truncated: bool,
    answers: Vec<(u16, Vec<u8>)>,
}

impl MockResponse {
    pub fn noerror() -> Self {
        Self::default()
    }

    pub fn nxdomain() -> Self {
        Self::rcode(3)
    }

    pub fn servfail() -> Self {
        Self::rcode(2)
    }

    pub fn rcode(rcode: u8) -> Self {
        Self {
            rcode,
            ..Self::default()
        }
    }

    pub fn truncated() -> Self {
        Self {
            truncated: true,
            ..Self::default()
        }
    }

    /// Adds an answer owned by the query name.
    pub fn answer(mut self, type_code: u16, rdata: Vec<u8>) -> Self {
        self.answers.push((type_code, rdata));
        self
    }

    pub fn encode(&self, query: &MockQuery) -> Vec<u8> {
        let mut out = Vec::with_capacity(512);
        out.extend_from_slice(&query.id);
        out.push(if self.truncated { 0x83 } else { 0x81 });
        out.push(0x80 | (self.rcode & 0x0f));
        out.extend_from_slice(&[0x00, 0x01]);
        out.extend_from_slice(&(self.answers.len() as u16).to_be_bytes());
        out.extend_from_slice(&[0x00, 0x00, 0x00, 0x00]);
        out.extend_from_slice(&query.question);

        for (type_code, rdata) in &self.answers {
            out.extend_from_slice(&[0xc0, 0x0c]);
            out.extend_from_slice(&type_code.to_be_bytes());
            out.extend_from_slice(&[0x00, 0x01]);
            out.extend_from_slice(&[0x00, 0x00, 0x01, 0x2c]);
            out.extend_from_slice(&(rdata.len() as u16).to_be_bytes());
            out.extend_from_slice(rdata);
        }
        out
    }
}

type Responder = dyn Fn(&MockQuery, Protocol) -> Option<MockResponse> + Send + Sync;

/// UDP and TCP DNS server on one loopback port, answering with a script.
///
/// The responder returning `None` leaves the query unanswered.
pub struct MockDnsServer {
    addr: SocketAddr,
    udp_queries: Arc<AtomicUsize>,
    tcp_queries: Arc<AtomicUsize>,
    names: Arc<Mutex<Vec<String>>>,
    shutdown_tx: Option<watch::Sender<bool>>,
}

impl MockDnsServer {
    pub async fn start<F>(responder: F) -> Result<Self, io::Error>
    where
        F: Fn(&MockQuery, Protocol) -> Option<MockResponse> + Send + Sync + 'static,
    {
        Self::start_on(IpAddr::from([127, 0, 0, 1]), 0, responder).await
    }

    pub async fn start_on<F>(ip: IpAddr, port: u16, responder: F) -> Result<Self, io::Error>
    where
        F: Fn(&MockQuery, Protocol) -> Option<MockResponse> + Send + Sync + 'static,
    {
        let socket = UdpSocket::bind(SocketAddr::new(ip, port)).await?;
        let addr = socket.local_addr()?;
        let listener = TcpListener::bind(addr).await?;

        let responder: Arc<Responder> = Arc::new(responder);
        let udp_queries = Arc::new(AtomicUsize::new(0));
        let tcp_queries = Arc::new(AtomicUsize::new(0));
        let names = Arc::new(Mutex::new(Vec::new()));
        let (shutdown_tx, shutdown_rx) = watch::channel(false);

        {
            let responder = Arc::clone(&responder);
            let counter = Arc::clone(&udp_queries);
            let names = Arc::clone(&names);
            let mut shutdown_rx = shutdown_rx.clone();
            tokio::spawn(async move {
                let mut buf = vec![0u8; 4096];
                loop {
                    tokio::select! {
                        _ = shutdown_rx.changed() => break,
                        result = socket.recv_from(&mut buf) => {
                            let Ok((len, peer)) = result else { continue };
                            let Some(query) = MockQuery::parse(&buf[..len]) else { continue };
                            counter.fetch_add(1, Ordering::SeqCst);
                            names.lock().unwrap().push(query.name.clone());
                            if let Some(response) = responder(&query, Protocol::Udp) {
                                let _ = socket.send_to(&response.encode(&query), peer).await;
                            }
                        }
                    }
                }
            });
        }

        {
            let counter = Arc::clone(&tcp_queries);
            let names = Arc::clone(&names);
            let mut shutdown_rx = shutdown_rx;
            tokio::spawn(async move {
                loop {
                    tokio::select! {
                        _ = shutdown_rx.changed() => break,
                        result = listener.accept() => {
                            let Ok((mut stream, _)) = result else { continue };
                            let responder = Arc::clone(&responder);
                            let counter = Arc::clone(&counter);
                            let names = Arc::clone(&names);
                            tokio::spawn(async move {
                                let mut len_buf = [0u8; 2];
                                if stream.read_exact(&mut len_buf).await.is_err() {
                                    return;
                                }
                                let mut message = vec![0u8; u16::from_be_bytes(len_buf) as usize];
                                if stream.read_exact(&mut message).await.is_err() {
                                    return;
                                }
                                let Some(query) = MockQuery::parse(&message) else { return };
                                counter.fetch_add(1, Ordering::SeqCst);
                                names.lock().unwrap().push(query.name.clone());
                                if let Some(response) = responder(&query, Protocol::Tcp) {
                                    let bytes = response.encode(&query);
                                    let _ = stream.write_all(&(bytes.len() as u16).to_be_bytes()).await;
                                    let _ = stream.write_all(&bytes).await;
                                }
                            });
                        }
                    }
                }
            });
        }

        Ok(Self {
            addr,
            udp_queries,
            tcp_queries,
            names,
            shutdown_tx: Some(shutdown_tx),
        })
    }

    pub fn addr(&self) -> SocketAddr {
        self.addr
    }

    pub fn port(&self) -> u16 {
        self.addr.port()
    }

    pub fn udp_queries(&self) -> usize {
        self.udp_queries.load(Ordering::SeqCst)
    }

    pub fn tcp_queries(&self) -> usize {
        self.tcp_queries.load(Ordering::SeqCst)
    }

    /// Query names in the order they arrived.
    pub fn queried_names(&self) -> Vec<String> {
        self.names.lock().unwrap().clone()
    }

    pub fn shutdown(mut self) {
        if let Some(tx) = self.shutdown_tx.take() {
            let _ = tx.send(true);
        }
    }
}

impl Drop for MockDnsServer {
    fn drop(&mut self) {
        if let Some(tx) = self.shutdown_tx.take() {
            let _ = tx.send(true);
        }
    }
}
