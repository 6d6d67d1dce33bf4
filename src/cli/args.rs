//! Command-line argument parsing.

/// Overrides given on the command line. Unset fields fall through to the
/// environment and config file.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct CliOptions {
    pub url: Option<String>,
    pub sort: Option<String>,
    pub token: Option<String>,
}

/// Parsed CLI command to execute.
#[derive(Debug, Clone, PartialEq)]
pub enum CliCommand {
    /// Show version information
    Version,
    /// Run the TUI with the given overrides (default)
    Run(CliOptions),
    /// Arguments could not be parsed
    Invalid(String),
}

/// Parse command-line arguments, skipping the program name.
///
/// Flags taking a value accept both `--flag value` and `--flag=value`.
///
/// ```
/// use discuss::cli::args::{parse_args, CliCommand};
///
/// let args = vec!["discuss".to_string(), "--version".to_string()];
/// assert_eq!(parse_args(args.into_iter()), CliCommand::Version);
/// ```
pub fn parse_args<I>(args: I) -> CliCommand
where
    I: Iterator<Item = String>,
{
    let mut options = CliOptions::default();
    let mut args = args.skip(1);

    while let Some(arg) = args.next() {
        let (flag, inline) = match arg.split_once('=') {
            Some((flag, value)) if flag.starts_with("--") => (flag.to_string(), Some(value.to_string())),
            _ => (arg.clone(), None),
        };

        let slot = match flag.as_str() {
            "--version" | "-V" => return CliCommand::Version,
            "--url" => &mut options.url,
            "--sort" => &mut options.sort,
            "--token" => &mut options.token,
            _ => return CliCommand::Invalid(format!("unknown argument: {}", arg)),
        };

        match inline.or_else(|| args.next()) {
            Some(value) if !value.is_empty() => *slot = Some(value),
            _ => return CliCommand::Invalid(format!("{} requires a value", flag)),
        }
    }

    CliCommand::Run(options)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(args: &[&str]) -> CliCommand {
        let mut all = vec!["discuss".to_string()];
        all.extend(args.iter().map(|s| s.to_string()));
        parse_args(all.into_iter())
    }

    #[test]
    fn test_parse_version_flag() {
        assert_eq!(parse(&["--version"]), CliCommand::Version);
        assert_eq!(parse(&["-V"]), CliCommand::Version);
    }

    #[test]
    fn test_parse_no_args() {
        assert_eq!(parse(&[]), CliCommand::Run(CliOptions::default()));
    }

    #[test]
    fn test_parse_value_flags() {
        let command = parse(&["--url", "https://forum.test", "--sort=newest", "--token", "abc"]);
        assert_eq!(
            command,
            CliCommand::Run(CliOptions {
                url: Some("https://forum.test".to_string()),
                sort: Some("newest".to_string()),
                token: Some("abc".to_string()),
            })
        );
    }

    #[test]
    fn test_parse_missing_value() {
        assert!(matches!(parse(&["--url"]), CliCommand::Invalid(_)));
        assert!(matches!(parse(&["--sort="]), CliCommand::Invalid(_)));
    }

    #[test]
    fn test_parse_unknown_flag() {
        assert_eq!(
            parse(&["--unknown"]),
            CliCommand::Invalid("unknown argument: --unknown".to_string())
        );
    }
}
