use crate::{
    db::books::Books,
    libs::{book::BookQuery, config::Config, messages::Message, view::View},
    msg_info, msg_print,
    server::start_server,
};
use anyhow::Result;
use clap::{Args, Subcommand};

#[derive(Debug, Args)]
pub struct BooksArgs {
    #[command(subcommand)]
    command: BooksCommand,
}

#[derive(Debug, Subcommand)]
enum BooksCommand {
    /// Serve the book catalog HTTP API
    Serve {
        /// Host to bind to (overrides the configuration)
        #[arg(long)]
        host: Option<String>,
        /// Port to bind to (overrides the configuration)
        #[arg(short, long)]
        port: Option<u16>,
    },
    /// List all stored books
    List,
    /// Search books by title, author or year
    Search {
        #[arg(short, long)]
        title: Option<String>,
        #[arg(short, long)]
        author: Option<String>,
        #[arg(short, long)]
        year: Option<i32>,
    },
}

pub async fn cmd(args: BooksArgs) -> Result<()> {
    match args.command {
        BooksCommand::Serve { host, port } => handle_serve(host, port).await,
        BooksCommand::List => handle_list(),
        BooksCommand::Search { title, author, year } => handle_search(BookQuery { title, author, year }),
    }
}

async fn handle_serve(host: Option<String>, port: Option<u16>) -> Result<()> {
    let mut server = Config::read()?.server.unwrap_or_default();
    if let Some(host) = host {
        server.host = host;
    }
    if let Some(port) = port {
        server.port = port;
    }

    start_server(&server, Books::new()?).await
}

fn handle_list() -> Result<()> {
    let books = Books::new()?.list()?;

    if books.is_empty() {
        msg_info!(Message::BooksNotFound);
        return Ok(());
    }

    msg_print!(Message::BooksHeader, true);
    View::books(&books)
}

fn handle_search(query: BookQuery) -> Result<()> {
    let books = Books::new()?.search(&query)?;

    if books.is_empty() {
        msg_info!(Message::BooksNotFound);
        return Ok(());
    }

    View::books(&books)
}
