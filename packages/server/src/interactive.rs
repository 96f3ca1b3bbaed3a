//! Interactive mode for the server.
//!
//! Prompts the user for bind address, port and dataset path before
//! starting the server.

use dialoguer::{Confirm, Input};
use hospital_fragility_dataset::DEFAULT_DATA_PATH;

use crate::config::{BIND_ADDR_VAR, DATA_PATH_VAR, PORT_VAR};

/// Runs the server in interactive mode, prompting for configuration.
///
/// Asks the user for a bind address, port and dataset path, sets the
/// corresponding environment variables, and delegates to
/// [`super::run_server`].
///
/// # Errors
///
/// Returns an `std::io::Result` error if the underlying server fails to
/// start.
#[allow(clippy::future_not_send)]
pub async fn run() -> std::io::Result<()> {
    println!("Hospital Fragility Server");
    println!();

    let bind_addr: String = Input::new()
        .with_prompt("Bind address")
        .default("127.0.0.1".to_string())
        .interact_text()
        .unwrap_or_else(|_| "127.0.0.1".to_string());

    let port_str: String = Input::new()
        .with_prompt("Port")
        .default("8080".to_string())
        .validate_with(|input: &String| -> Result<(), &str> {
            input
                .trim()
                .parse::<u16>()
                .map(|_| ())
                .map_err(|_| "Port must be a number between 0 and 65535")
        })
        .interact_text()
        .unwrap_or_else(|_| "8080".to_string());

    let data_path: String = Input::new()
        .with_prompt("Hospitals dataset")
        .default(DEFAULT_DATA_PATH.to_string())
        .interact_text()
        .unwrap_or_else(|_| DEFAULT_DATA_PATH.to_string());

    // SAFETY: We are single-threaded at this point (before server starts) and
    // these variables are only read once during server initialisation.
    unsafe {
        std::env::set_var(BIND_ADDR_VAR, &bind_addr);
        std::env::set_var(PORT_VAR, &port_str);
        std::env::set_var(DATA_PATH_VAR, &data_path);
    }

    if !Confirm::new()
        .with_prompt(format!("Start server on {bind_addr}:{port_str}?"))
        .default(true)
        .interact()
        .unwrap_or(true)
    {
        println!("Cancelled.");
        return Ok(());
    }

    super::run_server().await
}
