use clap::Parser;
use clap_complete::Shell;
use url::Url;

use std::path::PathBuf;

/// Download the current Bing homepage wallpaper
#[derive(Debug, Parser)]
#[command(version, flatten_help = true)]
pub struct Opt {
    /// Directory to save the wallpaper into (must already exist)
    #[arg(short, long)]
    pub output_dir: Option<PathBuf>,

    /// Base name for the saved file; the extension from the wallpaper link
    /// is kept
    #[arg(short, long)]
    pub filename: Option<String>,

    /// Convert a webp wallpaper to png after downloading
    #[arg(long)]
    pub convert_png: bool,

    /// Provider origin to scrape for the wallpaper link
    #[arg(long)]
    pub base_url: Option<Url>,

    /// Path to a JSON config file
    #[arg(long, default_value = None)]
    pub config_path: Option<PathBuf>,

    #[arg(long, exclusive = true)]
    pub completion: Option<Shell>,
}

impl Opt {
    pub fn print_completion(writer: &mut impl std::io::Write, shell: Shell) {
        use clap::CommandFactory;
        clap_complete::generate(
            shell,
            &mut Self::command(),
            option_env!("CARGO_BIN_NAME").unwrap_or(env!("CARGO_PKG_NAME")),
            writer,
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn check_arg_sanity() {
        Opt::command().debug_assert();
    }

    #[test]
    fn completion_writes_something() {
        let mut buf = Vec::new();
        Opt::print_completion(&mut buf, Shell::Bash);
        assert!(!buf.is_empty());
    }
}
