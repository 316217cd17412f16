#![allow(dead_code)]
use super::builders::{parse_question, WireResponse, RCODE_REFUSED};
use std::collections::HashMap;
use std::net::{SocketAddr, UdpSocket};
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Arc, Mutex};
use std::thread::JoinHandle;
use std::time::Duration;

#[derive(Debug, Clone)]
pub enum MockReply {
    Respond(WireResponse),
    /// Respond with a transaction id that does not match the query.
    WrongId(WireResponse),
    Silent,
}

/// Authoritative-looking UDP server on 127.0.0.1 that answers from a table
/// keyed by (question name, question type). Unknown questions are refused.
pub struct MockDnsServer {
    addr: SocketAddr,
    queries: Arc<Mutex<Vec<(String, u16)>>>,
    shutdown: Arc<AtomicBool>,
    handle: Option<JoinHandle<()>>,
}

impl MockDnsServer {
    pub fn start(replies: HashMap<(String, u16), MockReply>) -> std::io::Result<Self> {
        let socket = UdpSocket::bind("127.0.0.1:0")?;
        socket.set_read_timeout(Some(Duration::from_millis(50)))?;
        let addr = socket.local_addr()?;

        let queries = Arc::new(Mutex::new(Vec::new()));
        let shutdown = Arc::new(AtomicBool::new(false));

        let log = Arc::clone(&queries);
        let stop = Arc::clone(&shutdown);
        let handle = std::thread::spawn(move || {
            let mut buf = vec![0u8; 512];
            while !stop.load(Ordering::Relaxed) {
                let Ok((len, peer)) = socket.recv_from(&mut buf) else {
                    continue;
                };
                let Some((id, qname, qtype)) = parse_question(&buf[..len]) else {
                    continue;
                };
                log.lock().unwrap().push((qname.clone(), qtype));

                let reply = replies
                    .get(&(qname.clone(), qtype))
                    .cloned()
                    .unwrap_or_else(|| MockReply::Respond(WireResponse::new().rcode(RCODE_REFUSED)));

                let bytes = match reply {
                    MockReply::Respond(response) => {
                        response.id(id).question(&qname, qtype).to_bytes()
                    }
                    MockReply::WrongId(response) => response
                        .id(id.wrapping_add(1))
                        .question(&qname, qtype)
                        .to_bytes(),
                    MockReply::Silent => continue,
                };
                let _ = socket.send_to(&bytes, peer);
            }
        });

        Ok(Self {
            addr,
            queries,
            shutdown,
            handle: Some(handle),
        })
    }

    pub fn addr(&self) -> SocketAddr {
        self.addr
    }

    pub fn port(&self) -> u16 {
        self.addr.port()
    }

    pub fn queries(&self) -> Vec<(String, u16)> {
        self.queries.lock().unwrap().clone()
    }
}

impl Drop for MockDnsServer {
    fn drop(&mut self) {
        self.shutdown.store(true, Ordering::Relaxed);
        if let Some(handle) = self.handle.take() {
            let _ = handle.join();
        }
    }
}

/// Convenience for building a reply table.
#[derive(Default)]
pub struct ReplyTable {
    replies: HashMap<(String, u16), MockReply>,
}

impl ReplyTable {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn on(mut self, name: &str, qtype: u16, reply: MockReply) -> Self {
        self.replies.insert((name.to_string(), qtype), reply);
        self
    }

    pub fn respond(self, name: &str, qtype: u16, response: WireResponse) -> Self {
        self.on(name, qtype, MockReply::Respond(response))
    }

    pub fn start(self) -> MockDnsServer {
        MockDnsServer::start(self.replies).unwrap()
    }
}
