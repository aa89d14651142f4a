use std::net::SocketAddr;
use hyper::{Method, StatusCode, Uri, Version};
use crate::config::Config;

pub fn log_server_start(addr: &SocketAddr, config: &Config) {
    println!("======================================");
    println!("Campus site started successfully");
    println!("Listening on: http://{addr}");
    println!("Environment: {}", config.server.environment.as_str());
    println!("Log level: {}", config.logging.level);
    if let Some(workers) = config.server.workers {
        println!("Worker threads: {workers}");
    }
    println!("======================================\n");
}

pub fn log_connection_accepted(peer_addr: &SocketAddr) {
    println!("[Connection] Accepted from: {peer_addr}");
}

pub fn log_connection_error(err: &impl std::fmt::Debug) {
    eprintln!("[Error] Failed to serve connection: {err:?}");
}

pub fn log_request(method: &Method, uri: &Uri, version: Version) {
    println!("[Request] {method} {uri} {version:?}");
}

pub fn log_response(status: StatusCode) {
    println!("[Response] {status}\n");
}

pub fn log_registration_rejected(reason: &str) {
    println!("[Registration] Submission rejected: {reason}");
}

pub fn log_warning(msg: &str) {
    eprintln!("[WARN] {msg}");
}

pub fn log_error(msg: &str) {
    eprintln!("[ERROR] {msg}");
}
