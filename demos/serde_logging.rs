//! Example: Structured Logging with Serde
//!
//! Outcomes and errors serialize into externally tagged JSON, which makes
//! them easy to ship to log pipelines that index on fields.

use feer::{fail, Outcome};

fn connect(host: &str) -> Outcome<u16> {
    if host.starts_with("db-") {
        return Outcome::err(fail!("connection to {} timed out", host));
    }
    Outcome::<u16>::ok(5432)
}

fn main() {
    for host in ["localhost", "db-primary-01"] {
        let outcome = connect(host);
        match serde_json::to_string_pretty(&outcome) {
            Ok(json) => println!("{json}"),
            Err(e) => eprintln!("Failed to serialize outcome: {e}"),
        }
    }
}
