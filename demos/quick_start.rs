use feer::prelude::*;

fn parse_port(raw: &str) -> Outcome<u16> {
    match raw.parse::<u16>() {
        Ok(port) => Outcome::<u16>::ok(port),
        Err(e) => Outcome::err(fail!("invalid port {:?}: {}", raw, e)),
    }
}

fn read_config() -> Outcome<String> {
    match std::fs::read_to_string("config.toml") {
        Ok(text) => Outcome::<String>::ok(text),
        Err(e) => Outcome::err(Error::new(format!("loading configuration: {e}"))),
    }
}

fn check_ready(port: u16) -> Status {
    if port < 1024 {
        return Outcome::err(fail!("port {} requires elevated privileges", port));
    }
    ok()
}

fn main() {
    println!("Running Quick Start examples...");

    // 1. Owned payloads
    println!("\n1. Owned payloads:");
    for raw in ["8080", "http"] {
        let port = parse_port(raw);
        let line = port.match_with(
            |port| format!("parsed {port}"),
            |err| format!("Error: {err:#}"),
        );
        println!("{line}");
    }

    // 2. Fallbacks
    println!("\n2. Fallbacks:");
    let config = read_config().into_value_or("# defaults");
    println!("Config starts with: {}", config.lines().next().unwrap_or_default());

    // 3. Payload-free outcomes
    println!("\n3. Payload-free outcomes:");
    for port in [80, 8080] {
        let status = check_ready(port);
        if bool::from(&status) {
            println!("port {port} ready");
        } else {
            println!("port {port} not ready: {}", status.error());
        }
    }
}
