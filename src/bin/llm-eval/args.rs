use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};
use llm_eval::api::ServerConfig;
use llm_eval::grading::GraderKind;

#[derive(Parser, Debug)]
#[command(
    name = "llm-eval",
    about = "Serve and run factuality/relevance evaluations of LLM responses"
)]
pub struct CliArgs {
    /// Path to a TOML configuration file
    #[arg(long, short = 'c', global = true)]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Option<Command>,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Run the HTTP server (default)
    Serve(ServeArgs),
    /// Score a single response and print the result as JSON
    Evaluate {
        /// Generated text to evaluate
        #[arg(long)]
        response: String,
        /// Reference text to compare against
        #[arg(long)]
        reference: Option<String>,
    },
    /// Grade an actual output against an expected one
    Grade {
        #[arg(long)]
        expected: String,
        #[arg(long)]
        actual: String,
        /// exactMatch or partialMatch
        #[arg(long, default_value = "exactMatch")]
        grader: GraderKind,
    },
}

#[derive(Args, Debug, Default)]
pub struct ServeArgs {
    /// Interface to bind
    #[arg(long)]
    pub host: Option<String>,
    /// Port to bind
    #[arg(long, short = 'p')]
    pub port: Option<u16>,
    /// Enable debug logging
    #[arg(long)]
    pub debug: bool,
    /// Disable the CORS layer
    #[arg(long)]
    pub no_cors: bool,
}

impl ServeArgs {
    /// Overrides file configuration with explicitly passed flags.
    pub fn apply(&self, config: &mut ServerConfig) {
        if let Some(host) = &self.host {
            config.host = host.clone();
        }
        if let Some(port) = self.port {
            config.port = port;
        }
        if self.debug {
            config.debug = true;
        }
        if self.no_cors {
            config.cors = false;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn no_subcommand_parses() {
        let args = CliArgs::try_parse_from(["llm-eval"]).unwrap();
        assert!(args.command.is_none());
        assert!(args.config.is_none());
    }

    #[test]
    fn serve_flags_override_config() {
        let args =
            CliArgs::try_parse_from(["llm-eval", "serve", "--port", "8080", "--debug"]).unwrap();
        let Some(Command::Serve(serve)) = args.command else {
            panic!("expected serve command");
        };
        let mut config = ServerConfig::default();
        serve.apply(&mut config);
        assert_eq!(config.port, 8080);
        assert_eq!(config.host, "0.0.0.0");
        assert!(config.debug);
        assert!(config.cors);
    }

    #[test]
    fn grade_parses_grader_kind() {
        let args = CliArgs::try_parse_from([
            "llm-eval", "grade", "--expected", "a", "--actual", "ab", "--grader", "partialMatch",
        ])
        .unwrap();
        assert!(matches!(
            args.command,
            Some(Command::Grade { grader: GraderKind::PartialMatch, .. })
        ));
    }

    #[test]
    fn unknown_grader_is_rejected() {
        let result = CliArgs::try_parse_from([
            "llm-eval", "grade", "--expected", "a", "--actual", "a", "--grader", "fuzzy",
        ]);
        assert!(result.is_err());
    }
}
