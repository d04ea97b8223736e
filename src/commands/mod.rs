pub mod books;
pub mod grades;
pub mod init;
pub mod profile;

use clap::{Parser, Subcommand};

#[derive(Debug, Subcommand)]
enum Commands {
    #[command(about = "Configuration initialization")]
    Init(init::InitArgs),
    #[command(about = "Run the Student Grade Analyzer menu")]
    Grades,
    #[command(about = "Build a short personal profile")]
    Profile,
    #[command(about = "Book catalog: serve the API or browse the stored books", arg_required_else_help = true)]
    Books(books::BooksArgs),
}

#[derive(Debug, Parser)]
#[command(author, version, about, long_about = None)]
#[command(arg_required_else_help(true))]
pub struct Cli {
    #[command(subcommand)]
    command: Commands,
}

impl Cli {
    pub async fn menu() -> anyhow::Result<()> {
        let cli = Self::parse();
        match cli.command {
            Commands::Init(args) => init::cmd(args),
            Commands::Grades => grades::cmd(),
            Commands::Profile => profile::cmd(),
            Commands::Books(args) => books::cmd(args).await,
        }
    }
}
