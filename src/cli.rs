use clap::Parser;
use std::path::PathBuf;

#[derive(Parser, Debug, Default)]
#[command(author, version, about = "Bilingual coffee recommendation client", long_about = None)]
pub struct Cli {
    /// Configuration file path (default: config/recommender.toml)
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Base URL of the recommendation server
    #[arg(short, long)]
    pub url: Option<String>,

    /// Interface language: zh-TW or en
    #[arg(short, long)]
    pub lang: Option<String>,

    /// Ask once without the interactive screen and print the recommendation
    #[arg(short, long, value_name = "TEXT")]
    pub ask: Option<String>,

    /// Skip fetching the index page for the csrftoken cookie
    #[arg(long)]
    pub no_bootstrap: bool,
}
