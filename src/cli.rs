use crate::config::RunConfig;
use clap::Parser;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "assetrank")]
#[command(
    about = "Score and rank discovered web assets",
    long_about = "Reads httpx.json from OUTPUT_DIR, scores every asset by keyword, \
                  status code and technology signals, and writes the ranking to \
                  OUTPUT_DIR/prioritized_assets.json."
)]
#[command(version)]
pub struct Cli {
    /// Working directory holding httpx.json; the ranking is written here too
    pub output_dir: PathBuf,

    /// Increase verbosity level (can be repeated: -v, -vv, -vvv)
    /// -v: Show skipped lines count and top score
    /// -vv: Log every skipped line
    /// -vvv: Trace logging
    #[arg(short = 'v', long = "verbose", action = clap::ArgAction::Count)]
    pub verbosity: u8,
}

impl Cli {
    pub fn into_config(self) -> RunConfig {
        RunConfig::new(self.output_dir).with_verbosity(self.verbosity)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_definition_is_valid() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_parses_output_dir_and_verbosity() {
        let cli = Cli::try_parse_from(["assetrank", "out/example.com", "-vv"]).unwrap();
        let config = cli.into_config();
        assert_eq!(config.output_dir, PathBuf::from("out/example.com"));
        assert_eq!(config.verbosity, 2);
    }

    #[test]
    fn test_missing_output_dir_is_usage_error() {
        let err = Cli::try_parse_from(["assetrank"]).unwrap_err();
        assert_eq!(
            err.kind(),
            clap::error::ErrorKind::MissingRequiredArgument
        );
    }

    #[test]
    fn test_rejects_extra_positional() {
        assert!(Cli::try_parse_from(["assetrank", "a", "b"]).is_err());
    }
}
