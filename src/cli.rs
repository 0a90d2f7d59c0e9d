use std::path::PathBuf;

use clap::Parser;

/// Export the KDE color scheme to CSS and app theme files, and keep them in
/// sync when the scheme changes.
#[derive(Parser, Debug)]
#[command(name = "kolor-export", version, about)]
pub struct Args {
    /// User kdeglobals file (defaults to <config-dir>/kdeglobals)
    #[arg(long)]
    pub kdeglobals: Option<PathBuf>,

    /// Override the per-user config directory
    #[arg(long)]
    pub config_dir: Option<PathBuf>,

    /// Override the per-user data directory
    #[arg(long)]
    pub data_dir: Option<PathBuf>,

    /// Override the home directory
    #[arg(long)]
    pub home_dir: Option<PathBuf>,

    /// Export once and exit instead of watching for changes
    #[arg(long)]
    pub once: bool,

    /// Print one mapping to stdout and exit
    #[arg(long, value_enum, conflicts_with = "once")]
    pub print: Option<PrintMapping>,

    /// Enable debug logging
    #[arg(short, long)]
    pub verbose: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
pub enum PrintMapping {
    General,
    Secondary,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_to_resident_mode() {
        let args = Args::parse_from(["kolor-export"]);
        assert!(!args.once);
        assert!(args.print.is_none());
        assert!(args.kdeglobals.is_none());
    }

    #[test]
    fn parses_overrides() {
        let args = Args::parse_from([
            "kolor-export",
            "--once",
            "--kdeglobals",
            "/tmp/kdeglobals",
            "--config-dir",
            "/tmp/cfg",
            "-v",
        ]);
        assert!(args.once);
        assert!(args.verbose);
        assert_eq!(args.kdeglobals, Some(PathBuf::from("/tmp/kdeglobals")));
        assert_eq!(args.config_dir, Some(PathBuf::from("/tmp/cfg")));
    }

    #[test]
    fn print_conflicts_with_once() {
        assert!(Args::try_parse_from(["kolor-export", "--once", "--print", "general"]).is_err());
        let args = Args::try_parse_from(["kolor-export", "--print", "secondary"]).unwrap();
        assert_eq!(args.print, Some(PrintMapping::Secondary));
    }
}
