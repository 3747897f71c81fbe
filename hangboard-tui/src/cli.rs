use clap::{Args, Parser, Subcommand};

#[derive(Debug, Parser)]
#[command(name = "hangboard-tui")]
#[command(about = "Interval timer for hang-board training")]
pub struct Cli {
    /// Keep protocols and history in memory only
    #[arg(long, global = true)]
    pub ephemeral: bool,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Open the timer (default)
    Run,
    /// Print built-in and custom protocols with their durations
    List,
    /// Print past sessions
    History,
    /// Print the planned duration of a protocol without saving it
    Estimate(EstimateArgs),
    /// Print config path and create default file if missing
    ConfigPath,
}

#[derive(Debug, Args)]
pub struct EstimateArgs {
    /// Seconds per hang
    #[arg(long)]
    pub hang: u32,
    /// Seconds of rest between hangs
    #[arg(long, default_value_t = 0)]
    pub rest: u32,
    /// Hangs per set
    #[arg(long)]
    pub reps: u32,
    /// Number of sets
    #[arg(long, default_value_t = 1)]
    pub sets: u32,
    /// Seconds of rest between sets
    #[arg(long, default_value_t = 0)]
    pub set_rest: u32,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn no_subcommand_means_run() {
        let cli = Cli::try_parse_from(["hangboard-tui"]).unwrap();
        assert!(cli.command.is_none());
        assert!(!cli.ephemeral);
    }

    #[test]
    fn estimate_uses_defaults() {
        let cli =
            Cli::try_parse_from(["hangboard-tui", "estimate", "--hang", "10", "--reps", "5"])
                .unwrap();
        match cli.command {
            Some(Commands::Estimate(args)) => {
                assert_eq!((args.hang, args.rest, args.reps), (10, 0, 5));
                assert_eq!((args.sets, args.set_rest), (1, 0));
            }
            other => panic!("unexpected command: {other:?}"),
        }
    }

    #[test]
    fn ephemeral_is_global() {
        let cli = Cli::try_parse_from(["hangboard-tui", "list", "--ephemeral"]).unwrap();
        assert!(cli.ephemeral);
        assert!(matches!(cli.command, Some(Commands::List)));
    }
}
