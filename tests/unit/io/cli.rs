//! Tests for command-line interface parsing

#[cfg(test)]
mod tests {
    use clap::Parser;
    use gridstack::io::cli::{Cli, Command};
    use std::path::PathBuf;

    // Tests tilt parsing with only the required target argument
    // Verified by changing default values to ensure defaults are used
    #[test]
    fn test_tilt_defaults() {
        let cli = Cli::parse_from(["gridstack", "tilt", "board.txt"]);
        assert_eq!(cli.delimiter, ',');
        assert_eq!(cli.kind, "int");
        assert!(!cli.quiet);

        let Command::Tilt {
            target,
            directions,
            png,
            no_skip,
            ..
        } = cli.command
        else {
            panic!("expected the tilt subcommand");
        };
        assert_eq!(target, PathBuf::from("board.txt"));
        assert_eq!(directions, vec!["north", "west", "south", "east"]);
        assert!(!png);
        assert!(!no_skip);
    }

    // Tests the comma-delimited direction list
    // Verified by dropping the value delimiter
    #[test]
    fn test_tilt_direction_list() {
        let cli = Cli::parse_from(["gridstack", "tilt", "b.txt", "-D", "north,east"]);
        let Command::Tilt { directions, .. } = cli.command else {
            panic!("expected the tilt subcommand");
        };
        assert_eq!(directions, vec!["north", "east"]);
    }

    // Tests mark parsing takes the start coordinate as two values
    // Verified by collapsing start into a single argument
    #[test]
    fn test_mark_arguments() {
        let cli = Cli::parse_from([
            "gridstack", "mark", "b.txt", "--start", "4", "4", "--range", "6", "--mark", "5",
            "--exact",
        ]);
        let Command::Mark {
            start,
            range,
            mark,
            exact,
            ..
        } = cli.command
        else {
            panic!("expected the mark subcommand");
        };
        assert_eq!(start, vec![4, 4]);
        assert_eq!(range, 6);
        assert_eq!(mark, "5");
        assert!(exact);
    }

    // Tests scatter defaults match the fixture configuration constants
    // Verified by overriding the seed default
    #[test]
    fn test_scatter_defaults() {
        let cli = Cli::parse_from(["gridstack", "scatter", "out.txt"]);
        let Command::Scatter {
            rows,
            cols,
            tokens,
            obstacles,
            seed,
            ..
        } = cli.command
        else {
            panic!("expected the scatter subcommand");
        };
        assert_eq!((rows, cols), (10, 10));
        assert_eq!(tokens, 24);
        assert_eq!(obstacles, 12);
        assert_eq!(seed, 7);
    }

    // Tests global flags parse after the subcommand
    // Verified by removing the global attribute
    #[test]
    fn test_global_flags() {
        let cli = Cli::parse_from(["gridstack", "render", "b.txt", "--kind", "text", "-q"]);
        assert_eq!(cli.kind, "text");
        assert!(cli.quiet);
    }
}
