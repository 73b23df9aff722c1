use clap::builder::NonEmptyStringValueParser;
use clap::Parser;

/// Interactive file manager
#[derive(Parser, Debug)]
#[command(name = "file-manager")]
#[command(about = "Navigate and manage files from an interactive prompt", long_about = None)]
pub struct Args {
    /// Session username, passed as --name=<value>
    #[arg(long, value_parser = NonEmptyStringValueParser::new())]
    pub name: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_name_flag() {
        let args = Args::try_parse_from(["file-manager", "--name=ada"]).unwrap();
        assert_eq!(args.name, "ada");
    }

    #[test]
    fn name_is_required() {
        assert!(Args::try_parse_from(["file-manager"]).is_err());
        assert!(Args::try_parse_from(["file-manager", "--name="]).is_err());
    }
}
