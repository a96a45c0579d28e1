use tracing_subscriber::EnvFilter;

/// Default filter directive for the given `-v` count and `-q` flag.
pub fn default_directive(verbose: u8, quiet: bool) -> &'static str {
    if quiet {
        return "error";
    }
    match verbose {
        0 => "warn",
        1 => "pathsketch=debug,warn",
        _ => "pathsketch=trace,info",
    }
}

/// Install the global stderr subscriber. `RUST_LOG` takes precedence over the CLI flags.
pub fn init(verbose: u8, quiet: bool, no_color: bool) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(default_directive(verbose, quiet)));

    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(verbose > 1)
        .with_ansi(!no_color)
        .try_init();
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn quiet_wins_over_verbose() {
        assert_eq!(default_directive(2, true), "error");
    }

    #[test]
    fn verbosity_raises_level() {
        assert_eq!(default_directive(0, false), "warn");
        assert!(default_directive(1, false).contains("debug"));
        assert!(default_directive(3, false).contains("trace"));
    }

    #[test]
    fn directives_parse() {
        for v in 0..3 {
            assert!(default_directive(v, false).parse::<EnvFilter>().is_ok());
        }
    }
}
