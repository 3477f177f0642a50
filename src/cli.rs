//! CLI argument definitions

use clap::Parser;
use std::path::PathBuf;

/// Mentoring center simulator
#[derive(Parser)]
#[command(
    name = "msim",
    about = "Simulates a mentoring center with priority-scheduled tutoring",
    version
)]
pub struct Cli {
    /// Number of students
    #[arg(value_name = "STUDENTS")]
    pub students: u32,

    /// Number of tutors
    #[arg(value_name = "TUTORS")]
    pub tutors: u32,

    /// Number of waiting-room chairs
    #[arg(value_name = "CHAIRS")]
    pub chairs: u32,

    /// Helps each student must receive before it finishes
    #[arg(value_name = "HELPS")]
    pub helps: u32,

    /// Path to config file
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Enable verbose diagnostics on stderr
    #[arg(short, long)]
    pub verbose: bool,

    /// Output format for the final summary
    #[arg(short, long, default_value = "text")]
    pub format: OutputFormat,
}

/// Output format for the final summary
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}

impl std::str::FromStr for OutputFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "text" | "plain" => Ok(Self::Text),
            "json" => Ok(Self::Json),
            _ => Err(format!("Unknown format: {}. Use: text or json", s)),
        }
    }
}

impl std::fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Text => write!(f, "text"),
            Self::Json => write!(f, "json"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cli_parse_positional_counts() {
        let cli = Cli::parse_from(["msim", "10", "3", "4", "5"]);
        assert_eq!(cli.students, 10);
        assert_eq!(cli.tutors, 3);
        assert_eq!(cli.chairs, 4);
        assert_eq!(cli.helps, 5);
        assert!(!cli.verbose);
        assert_eq!(cli.format, OutputFormat::Text);
    }

    #[test]
    fn test_cli_requires_all_four_counts() {
        assert!(Cli::try_parse_from(["msim", "10", "3", "4"]).is_err());
    }

    #[test]
    fn test_cli_rejects_negative_counts() {
        assert!(Cli::try_parse_from(["msim", "10", "-3", "4", "5"]).is_err());
    }

    #[test]
    fn test_cli_with_config_and_format() {
        let cli = Cli::parse_from(["msim", "1", "1", "1", "1", "-c", "/tmp/sim.yml", "--format", "json"]);
        assert_eq!(cli.config, Some(PathBuf::from("/tmp/sim.yml")));
        assert_eq!(cli.format, OutputFormat::Json);
    }

    #[test]
    fn test_output_format_from_str() {
        assert_eq!("text".parse::<OutputFormat>(), Ok(OutputFormat::Text));
        assert_eq!("JSON".parse::<OutputFormat>(), Ok(OutputFormat::Json));
        assert!("table".parse::<OutputFormat>().is_err());
    }
}
