#[cfg(test)]
mod tests {
    use classwork::db::books::Books;
    use classwork::libs::book::{BookInput, BookQuery};
    use tempfile::TempDir;
    use test_context::{test_context, TestContext};

    struct BooksTestContext {
        _temp_dir: TempDir,
        books: Books,
    }

    impl TestContext for BooksTestContext {
        fn setup() -> Self {
            let temp_dir = tempfile::tempdir().unwrap();
            let books = Books::open(temp_dir.path().join("books.db")).unwrap();
            BooksTestContext {
                _temp_dir: temp_dir,
                books,
            }
        }
    }

    fn seed(books: &Books) {
        books.create(&BookInput::new("Dune", "Frank Herbert", Some(1965))).unwrap();
        books.create(&BookInput::new("Dune Messiah", "Frank Herbert", Some(1969))).unwrap();
        books.create(&BookInput::new("Emma", "Jane Austen", Some(1815))).unwrap();
        books.create(&BookInput::new("Untitled Draft", "Anonymous", None)).unwrap();
    }

    fn titles(books: &[classwork::libs::book::Book]) -> Vec<&str> {
        books.iter().map(|b| b.title.as_str()).collect()
    }

    #[test_context(BooksTestContext)]
    #[test]
    fn test_empty_catalog_lists_nothing(ctx: &mut BooksTestContext) {
        assert!(ctx.books.list().unwrap().is_empty());
    }

    #[test_context(BooksTestContext)]
    #[test]
    fn test_create_assigns_ids(ctx: &mut BooksTestContext) {
        let first = ctx.books.create(&BookInput::new("Dune", "Frank Herbert", Some(1965))).unwrap();
        let second = ctx.books.create(&BookInput::new("Emma", "Jane Austen", None)).unwrap();

        assert!(second.id > first.id);
        assert_eq!(ctx.books.get(first.id).unwrap(), Some(first));
        assert_eq!(ctx.books.get(second.id).unwrap().unwrap().year, None);
        assert_eq!(ctx.books.list().unwrap().len(), 2);
    }

    #[test_context(BooksTestContext)]
    #[test]
    fn test_update_replaces_all_fields(ctx: &mut BooksTestContext) {
        let book = ctx.books.create(&BookInput::new("Dun", "F. Herbert", Some(1964))).unwrap();

        let updated = ctx
            .books
            .update(book.id, &BookInput::new("Dune", "Frank Herbert", None))
            .unwrap()
            .unwrap();
        assert_eq!(updated.id, book.id);

        let stored = ctx.books.get(book.id).unwrap().unwrap();
        assert_eq!(stored.title, "Dune");
        assert_eq!(stored.author, "Frank Herbert");
        assert_eq!(stored.year, None);
    }

    #[test_context(BooksTestContext)]
    #[test]
    fn test_update_and_delete_missing_book(ctx: &mut BooksTestContext) {
        assert_eq!(ctx.books.update(42, &BookInput::new("X", "Y", None)).unwrap(), None);
        assert!(!ctx.books.delete(42).unwrap());
    }

    #[test_context(BooksTestContext)]
    #[test]
    fn test_delete(ctx: &mut BooksTestContext) {
        let book = ctx.books.create(&BookInput::new("Emma", "Jane Austen", Some(1815))).unwrap();

        assert!(ctx.books.delete(book.id).unwrap());
        assert_eq!(ctx.books.get(book.id).unwrap(), None);
        assert!(ctx.books.list().unwrap().is_empty());
    }

    #[test_context(BooksTestContext)]
    #[test]
    fn test_search_filters(ctx: &mut BooksTestContext) {
        seed(&ctx.books);

        let by_title = ctx
            .books
            .search(&BookQuery {
                title: Some("dune".to_string()),
                ..Default::default()
            })
            .unwrap();
        assert_eq!(titles(&by_title), vec!["Dune", "Dune Messiah"]);

        let by_author_and_year = ctx
            .books
            .search(&BookQuery {
                author: Some("Herbert".to_string()),
                year: Some(1969),
                ..Default::default()
            })
            .unwrap();
        assert_eq!(titles(&by_author_and_year), vec!["Dune Messiah"]);

        let no_match = ctx
            .books
            .search(&BookQuery {
                title: Some("Emma".to_string()),
                year: Some(1965),
                ..Default::default()
            })
            .unwrap();
        assert!(no_match.is_empty());
    }

    #[test_context(BooksTestContext)]
    #[test]
    fn test_search_ignores_empty_filters(ctx: &mut BooksTestContext) {
        seed(&ctx.books);

        let all = ctx
            .books
            .search(&BookQuery {
                title: Some(String::new()),
                author: Some(String::new()),
                year: None,
            })
            .unwrap();
        assert_eq!(all.len(), 4);
    }

    #[test]
    fn test_catalog_survives_reopen() {
        let temp_dir = tempfile::tempdir().unwrap();
        let path = temp_dir.path().join("books.db");

        {
            let books = Books::open(&path).unwrap();
            books.create(&BookInput::new("Emma", "Jane Austen", Some(1815))).unwrap();
        }

        let reopened = Books::open(&path).unwrap();
        assert_eq!(titles(&reopened.list().unwrap()), vec!["Emma"]);
    }
}
