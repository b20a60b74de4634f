use clap::{Parser, Subcommand, ValueEnum};
use std::fmt::{Display, Formatter};
use std::path::PathBuf;
use tinylink_shortener::LinkStyle;
use url::Url;

pub const STORE_PATH_ENV: &str = "TINYLINK_STORE";
pub const BASE_URL_ENV: &str = "TINYLINK_BASE_URL";
pub const LINK_STYLE_ENV: &str = "TINYLINK_LINK_STYLE";

pub const DEFAULT_STORE_PATH: &str = "tinylink-store.json";
pub const DEFAULT_BASE_URL: &str = "http://localhost:8080/";

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum LinkStyleArg {
    #[value(name = "fragment")]
    Fragment,
    #[value(name = "origin")]
    Origin,
}

impl Display for LinkStyleArg {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            LinkStyleArg::Fragment => write!(f, "fragment"),
            LinkStyleArg::Origin => write!(f, "origin"),
        }
    }
}

#[derive(Debug, Parser)]
#[command(name = "tinylink", about = "Shorten URLs into a local history file")]
pub struct CLI {
    /// JSON file holding the history.
    #[arg(long, env = STORE_PATH_ENV, default_value = DEFAULT_STORE_PATH)]
    pub store: PathBuf,

    /// Base address for fragment-style links.
    #[arg(long, env = BASE_URL_ENV, default_value = DEFAULT_BASE_URL)]
    pub base_url: Url,

    #[arg(
        long,
        env = LINK_STYLE_ENV,
        value_enum,
        default_value_t = LinkStyleArg::Fragment
    )]
    pub link_style: LinkStyleArg,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Shorten a URL and print the short link.
    Shorten {
        url: String,
        /// Custom alias: 2-20 letters, digits or hyphens.
        #[arg(long, short)]
        alias: Option<String>,
    },
    /// Print the original URL behind a short link or code.
    Resolve { link: String },
    /// List the stored history, newest first.
    History,
    /// Forget every stored link.
    Clear,
}

impl CLI {
    pub fn link_style(&self) -> LinkStyle {
        match self.link_style {
            LinkStyleArg::Fragment => LinkStyle::fragment(self.base_url.clone()),
            LinkStyleArg::Origin => LinkStyle::Origin,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults() {
        let cli = CLI::try_parse_from(["tinylink", "history"]).unwrap();

        assert_eq!(cli.store, PathBuf::from(DEFAULT_STORE_PATH));
        assert_eq!(cli.link_style, LinkStyleArg::Fragment);
        assert_eq!(
            cli.link_style(),
            LinkStyle::fragment(Url::parse(DEFAULT_BASE_URL).unwrap())
        );
    }

    #[test]
    fn shorten_with_alias() {
        let cli = CLI::try_parse_from([
            "tinylink",
            "--link-style",
            "origin",
            "shorten",
            "https://example.com",
            "--alias",
            "my-link",
        ])
        .unwrap();

        assert_eq!(cli.link_style(), LinkStyle::Origin);
        assert!(matches!(
            cli.command,
            Command::Shorten { ref url, alias: Some(ref alias) }
                if url == "https://example.com" && alias == "my-link"
        ));
    }

    #[test]
    fn rejects_bad_base_url() {
        assert!(CLI::try_parse_from(["tinylink", "--base-url", "nope", "history"]).is_err());
    }
}
