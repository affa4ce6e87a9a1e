//! CLI definitions for the runtime shim.

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};

use shim_config::{ServiceProfile, ShimConfig};

/// Runtime shim CLI.
#[derive(Parser)]
#[command(name = "runtime-shim")]
#[command(about = "Minimal HTTP runtime shims for agent-orchestration frameworks")]
#[command(version)]
#[command(args_conflicts_with_subcommands = true)]
pub(crate) struct Cli {
    /// Configuration file path
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Option<Commands>,

    #[command(flatten)]
    pub run: RunArgs,
}

#[derive(Subcommand)]
pub(crate) enum Commands {
    /// List the built-in service profiles
    Profiles,
}

/// Serve one profile in the foreground.
#[derive(Args)]
pub(crate) struct RunArgs {
    /// Service profile (langgraph, agno, crewai, n8n)
    pub profile: Option<ServiceProfile>,

    /// Override the bind host
    #[arg(long)]
    pub host: Option<String>,

    /// Override the bind port
    #[arg(long)]
    pub port: Option<u16>,
}

impl RunArgs {
    /// Apply flag overrides; they win over file and environment.
    pub fn apply(&self, config: &mut ShimConfig) {
        if let Some(host) = &self.host {
            config.server.host = host.clone();
        }
        if let Some(port) = self.port {
            config.server.port = Some(port);
        }
    }
}

/// One line per built-in profile, for `runtime-shim profiles`.
pub(crate) fn profile_table() -> Vec<String> {
    ServiceProfile::BUILTIN
        .iter()
        .map(|p| {
            format!(
                "{:<10} {:<18} port {:<5} /{}",
                p.slug,
                p.service_name(),
                p.default_port,
                p.resource_collection()
            )
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_profile_with_overrides() {
        let cli = Cli::try_parse_from(["runtime-shim", "crewai", "--host", "127.0.0.1", "--port", "9100"])
            .unwrap();
        assert!(cli.command.is_none());
        assert_eq!(cli.run.profile, Some(ServiceProfile::CREWAI));
        assert_eq!(cli.run.host.as_deref(), Some("127.0.0.1"));
        assert_eq!(cli.run.port, Some(9100));
    }

    #[test]
    fn test_parse_profile_case_insensitive() {
        let cli = Cli::try_parse_from(["runtime-shim", "LangGraph"]).unwrap();
        assert_eq!(cli.run.profile, Some(ServiceProfile::LANGGRAPH));
    }

    #[test]
    fn test_parse_unknown_profile() {
        assert!(Cli::try_parse_from(["runtime-shim", "autogen"]).is_err());
    }

    #[test]
    fn test_parse_profiles_command() {
        let cli = Cli::try_parse_from(["runtime-shim", "profiles"]).unwrap();
        assert!(matches!(cli.command, Some(Commands::Profiles)));
    }

    #[test]
    fn test_parse_config_flag() {
        let cli = Cli::try_parse_from(["runtime-shim", "--config", "shim.toml", "agno"]).unwrap();
        assert_eq!(cli.config, Some(PathBuf::from("shim.toml")));
        assert_eq!(cli.run.profile, Some(ServiceProfile::AGNO));
    }

    #[test]
    fn test_flags_override_config() {
        let mut config = ShimConfig::default();
        config.server.port = Some(7000);
        let args = RunArgs {
            profile: Some(ServiceProfile::N8N),
            host: Some("localhost".to_string()),
            port: Some(7001),
        };
        args.apply(&mut config);
        assert_eq!(config.server.host, "localhost");
        assert_eq!(config.port_for(&ServiceProfile::N8N), 7001);
    }

    #[test]
    fn test_absent_flags_keep_config() {
        let mut config = ShimConfig::default();
        let args = RunArgs {
            profile: None,
            host: None,
            port: None,
        };
        args.apply(&mut config);
        assert_eq!(config.server.host, "0.0.0.0");
        assert_eq!(config.port_for(&ServiceProfile::AGNO), 8002);
    }

    #[test]
    fn test_flags_override_config_file() {
        use shim_config::ConfigLoader;
        use std::io::Write;

        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "[server]\nhost = \"10.0.0.5\"\nport = 9300").unwrap();

        let cli = Cli::try_parse_from(["runtime-shim", "langgraph", "--port", "9400"]).unwrap();
        let mut config = ConfigLoader::load(file.path()).unwrap();
        cli.run.apply(&mut config);

        assert_eq!(config.server.host, "10.0.0.5");
        assert_eq!(config.port_for(&ServiceProfile::LANGGRAPH), 9400);
    }

    #[test]
    fn test_profile_table() {
        let table = profile_table();
        assert_eq!(table.len(), 4);
        assert!(table[2].starts_with("crewai"));
        assert!(table[2].contains("crewai-runtime"));
        assert!(table[2].contains("8003"));
        assert!(table[2].ends_with("/crews"));
    }
}
