use std::env;
use std::fs;
use std::path::Path;

use serde::Deserialize;

const SITE_CONFIG: &str = "site.yaml";
const RELAY_ENV_OVERRIDES: [&str; 3] = [
    "FOLIO_RELAY_SERVICE_ID",
    "FOLIO_RELAY_TEMPLATE_ID",
    "FOLIO_RELAY_PUBLIC_KEY",
];

#[derive(Debug, Deserialize)]
struct SiteSpec {
    services: Vec<ServiceSpec>,
    relay: RelaySpec,
}

#[derive(Debug, Deserialize)]
struct ServiceSpec {
    title: String,
}

#[derive(Debug, Deserialize)]
struct RelaySpec {
    endpoint: String,
    service_id: String,
    template_id: String,
    public_key: String,
    to_email: String,
}

fn main() {
    println!("cargo:rerun-if-changed={}", SITE_CONFIG);
    for var in RELAY_ENV_OVERRIDES {
        println!("cargo:rerun-if-env-changed={}", var);
    }

    let path = Path::new(SITE_CONFIG);
    let contents = fs::read_to_string(path).unwrap_or_else(|e| {
        panic!("Failed to read {}: {}", path.display(), e)
    });

    // fail the build early, the same file is parsed again at runtime
    let spec: SiteSpec = serde_yaml::from_str(&contents).unwrap_or_else(|e| {
        panic!("Failed to parse {}: {}", path.display(), e)
    });

    let mut titles = std::collections::HashSet::new();
    for service in &spec.services {
        if !titles.insert(service.title.as_str()) {
            panic!("Duplicate service title in {}: {}", SITE_CONFIG, service.title);
        }
    }

    let relay = &spec.relay;
    for (key, value, env_override) in [
        ("relay.endpoint", &relay.endpoint, None),
        ("relay.service_id", &relay.service_id, Some(RELAY_ENV_OVERRIDES[0])),
        ("relay.template_id", &relay.template_id, Some(RELAY_ENV_OVERRIDES[1])),
        ("relay.public_key", &relay.public_key, Some(RELAY_ENV_OVERRIDES[2])),
        ("relay.to_email", &relay.to_email, None),
    ] {
        // an empty value is fine when the environment supplies it
        let overridden = env_override.is_some_and(|var| {
            env::var_os(var).is_some_and(|value| !value.is_empty())
        });
        if value.trim().is_empty() && !overridden {
            panic!("{} must not be empty in {}", key, SITE_CONFIG);
        }
    }
}
