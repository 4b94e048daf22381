//! WHOIS transport over plain TCP.

mod tcp_client;

pub use tcp_client::TcpWhoisClient;
