//! # OnlyPets Storefront Entry Point
//!
//! Loads one storefront session and reports it.
//!
//! ## Usage
//! ```text
//! onlypets-storefront [OPTIONS]
//!
//!   -c, --config <PATH>   storefront.toml to load
//!   -n, --pets <N>        number of generated pets
//!   -s, --snapshot        print the loaded session as JSON
//!   -w, --write-config    save the effective config to the config path
//!   -h, --help            show this help message
//! ```

use std::env;
use std::path::PathBuf;

use onlypets_storefront_lib::{init_tracing, run, RunOptions};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args: Vec<String> = env::args().collect();
    let mut options = RunOptions::default();

    let mut i = 1;
    while i < args.len() {
        match args[i].as_str() {
            "--config" | "-c" => {
                if i + 1 < args.len() {
                    options.config_path = Some(PathBuf::from(&args[i + 1]));
                    i += 1;
                }
            }
            "--pets" | "-n" => {
                if i + 1 < args.len() {
                    options.pet_count = args[i + 1].parse().ok();
                    i += 1;
                }
            }
            "--snapshot" | "-s" => options.print_snapshot = true,
            "--write-config" | "-w" => options.write_config = true,
            "--help" | "-h" => {
                println!("OnlyPets Storefront");
                println!();
                println!("Usage: onlypets-storefront [OPTIONS]");
                println!();
                println!("Options:");
                println!("  -c, --config <PATH>  storefront.toml to load");
                println!("  -n, --pets <N>       Number of generated pets");
                println!("  -s, --snapshot       Print the loaded session as JSON");
                println!("  -w, --write-config   Save the effective config to the config path");
                println!("  -h, --help           Show this help message");
                return Ok(());
            }
            _ => {}
        }
        i += 1;
    }

    init_tracing();
    run(options).await
}
