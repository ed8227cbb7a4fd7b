//! Run one function invocation locally and print the HTTP answer.
//!
//! Usage: `orbit-function [cloudinary-random | cloudinary-random-exif | hello]`

use orbit_function::handler::{config_error_response, upstream_error_response};
use orbit_function::{handle, hello, CloudinaryClient, FunctionConfig, FunctionResponse, Variant};

fn invoke(name: &str) -> anyhow::Result<FunctionResponse> {
    if name == "hello" {
        return Ok(hello());
    }
    let variant = Variant::from_name(name)
        .ok_or_else(|| anyhow::anyhow!("unknown function {name:?}"))?;

    let config = match FunctionConfig::from_env() {
        Ok(c) => c,
        Err(e) => return Ok(config_error_response(&e)),
    };
    let client = match CloudinaryClient::new(&config) {
        Ok(c) => c,
        Err(e) => return Ok(upstream_error_response(&e)),
    };
    Ok(handle(variant, &config, &client, &mut rand::thread_rng()))
}

fn main() -> anyhow::Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let name = std::env::args()
        .nth(1)
        .unwrap_or_else(|| Variant::Plain.name().to_string());
    let response = invoke(&name)?;

    eprintln!("HTTP {}", response.status);
    for (k, v) in &response.headers {
        eprintln!("{k}: {v}");
    }
    println!("{}", response.body);

    if response.status >= 400 {
        std::process::exit(1);
    }
    Ok(())
}
