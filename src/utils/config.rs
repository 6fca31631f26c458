use log::warn;
use std::env;

pub struct ServerConfig {
    pub bind_address: String,
    pub workers: usize,
}

impl ServerConfig {
    /// Reads `BIND_ADDRESS` and `WORKERS` from the environment.
    pub fn from_env() -> Self {
        let bind_address = env::var("BIND_ADDRESS").unwrap_or_else(|_| "127.0.0.1:8080".to_string());
        let workers = parse_workers(env::var("WORKERS").ok().as_deref());

        Self { bind_address, workers }
    }
}

fn parse_workers(raw: Option<&str>) -> usize {
    match raw.map(|value| value.trim().parse::<usize>()) {
        None => num_cpus::get(),
        Some(Ok(workers)) if workers > 0 => workers,
        Some(_) => {
            warn!("Ignoring invalid WORKERS value {:?}, using CPU count", raw.unwrap_or_default());
            num_cpus::get()
        }
    }
}
