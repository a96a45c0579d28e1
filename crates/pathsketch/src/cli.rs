use clap::{ArgAction, Parser, Subcommand, ValueEnum};

use crate::theme::NodeColor;

#[derive(Parser)]
#[command(name = "pathsketch")]
#[command(author, version, about)]
#[command(long_about = "Sketch a weighted graph with the mouse and run Dijkstra between two nodes.\n\n\
    Examples:\n  \
    pathsketch                                   Open the editor\n  \
    pathsketch --color yellow --theme dark       Open with custom colors\n  \
    pathsketch path --node 0,0 --node 1,1 --edge 1-2:3 --from 1 --to 2\n  \
    pathsketch config set defaults.node_color red")]
#[command(propagate_version = true)]
#[command(args_conflicts_with_subcommands = true)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,

    /// Initial node color (overrides config)
    #[arg(long, value_enum)]
    pub color: Option<NodeColor>,

    /// Color theme (overrides config)
    #[arg(long, value_parser = ["light", "dark"])]
    pub theme: Option<String>,

    /// Increase output verbosity (-v for debug, -vv for trace)
    #[arg(short, long, action = ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Suppress non-essential output
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Disable colored output
    #[arg(long, global = true)]
    pub no_color: bool,
}

#[derive(Subcommand)]
pub enum Commands {
    /// View and modify configuration
    Config {
        #[command(subcommand)]
        command: ConfigCommands,
    },

    /// Generate shell completions
    Completion {
        /// Target shell
        #[arg(value_enum)]
        shell: Shell,
    },

    /// Build a graph from arguments and print the shortest path, without opening a window
    Path {
        /// Node position as X,Y in [0,1]; nodes are numbered from 1 in the order given
        #[arg(long = "node", value_name = "X,Y")]
        nodes: Vec<String>,

        /// Weighted edge as U-V:WEIGHT
        #[arg(long = "edge", value_name = "U-V:W")]
        edges: Vec<String>,

        /// Start node
        #[arg(long)]
        from: String,

        /// End node
        #[arg(long)]
        to: String,
    },

    /// Show version information
    Version,
}

#[derive(Subcommand)]
pub enum ConfigCommands {
    /// Display current configuration
    Show,

    /// Set a configuration value
    Set {
        /// Configuration key (e.g. defaults.node_color, defaults.theme, defaults.window_width)
        key: String,

        /// Value to set
        value: String,
    },
}

#[derive(Clone, ValueEnum)]
pub enum Shell {
    Bash,
    Zsh,
    Fish,
    Powershell,
}

impl Cli {
    pub fn run(self) -> anyhow::Result<()> {
        match self.command {
            Some(Commands::Config { command }) => crate::commands::config::run(command),
            Some(Commands::Completion { shell }) => {
                crate::commands::completion::run(shell);
                Ok(())
            }
            Some(Commands::Path {
                nodes,
                edges,
                from,
                to,
            }) => crate::commands::path::run(&nodes, &edges, &from, &to),
            Some(Commands::Version) => {
                println!("pathsketch {}", env!("CARGO_PKG_VERSION"));
                Ok(())
            }
            None => crate::app::run(self.color, self.theme),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn cli_definition_is_valid() {
        Cli::command().debug_assert();
    }

    #[test]
    fn bare_invocation_opens_editor() {
        let cli = Cli::try_parse_from(["pathsketch"]).unwrap();
        assert!(cli.command.is_none());
        assert!(cli.color.is_none());
    }

    #[test]
    fn color_flag_maps_to_node_color() {
        let cli = Cli::try_parse_from(["pathsketch", "--color", "yellow"]).unwrap();
        assert_eq!(cli.color, Some(NodeColor::Yellow));
    }

    #[test]
    fn theme_flag_is_restricted() {
        assert!(Cli::try_parse_from(["pathsketch", "--theme", "sepia"]).is_err());
    }

    #[test]
    fn path_subcommand_collects_repeated_flags() {
        let cli = Cli::try_parse_from([
            "pathsketch",
            "path",
            "--node",
            "0,0",
            "--node",
            "1,1",
            "--edge",
            "1-2:3",
            "--from",
            "1",
            "--to",
            "2",
        ])
        .unwrap();
        match cli.command {
            Some(Commands::Path { nodes, edges, from, to }) => {
                assert_eq!(nodes, vec!["0,0", "1,1"]);
                assert_eq!(edges, vec!["1-2:3"]);
                assert_eq!(from, "1");
                assert_eq!(to, "2");
            }
            _ => panic!("expected path subcommand"),
        }
    }
}
