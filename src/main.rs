//! Runtime shim entry point.
//!
//! `runtime-shim <PROFILE>` serves one profile; `runtime-shim profiles`
//! lists the built-in ones.

mod cli;
mod server;

use clap::Parser;

use shim_config::ConfigLoader;

use crate::cli::{profile_table, Cli, Commands};
use crate::server::{init_tracing, run_server};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();

    match cli.command {
        Some(Commands::Profiles) => {
            for line in profile_table() {
                println!("{}", line);
            }
            Ok(())
        }
        None => {
            let profile = cli
                .run
                .profile
                .ok_or("missing profile; run `runtime-shim profiles` to list them")?;

            let mut config = ConfigLoader::load_for_profile(cli.config.as_deref(), &profile)?;
            cli.run.apply(&mut config);

            init_tracing(&config.logging)?;
            run_server(profile, config).await
        }
    }
}
