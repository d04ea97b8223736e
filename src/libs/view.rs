use super::book::Book;
use anyhow::Result;
use prettytable::{row, Table};

pub struct View {}

impl View {
    pub fn books(books: &[Book]) -> Result<()> {
        let mut table = Table::new();

        table.add_row(row!["ID", "TITLE", "AUTHOR", "YEAR"]);
        for book in books {
            let year = book.year.map(|y| y.to_string()).unwrap_or_default();
            table.add_row(row![book.id, book.title, book.author, year]);
        }
        table.printstd();

        Ok(())
    }
}
