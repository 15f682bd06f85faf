use std::fmt::Display;
use std::io;
use std::io::{BufRead, Write};

use crossterm::style::Stylize;
use tracing::error;

use crate::books::domain::Book;
use crate::books::domain::model::BookEntity;
use crate::catalog::command::add_book_cmd::{AddBookCommand, AddBookCommandRequest};
use crate::catalog::command::change_status_cmd::{ChangeStatusCommand, ChangeStatusCommandRequest};
use crate::catalog::command::get_book_cmd::{GetBookCommand, GetBookCommandRequest};
use crate::catalog::command::list_books_cmd::ListBooksCommand;
use crate::catalog::command::remove_book_cmd::{RemoveBookCommand, RemoveBookCommandRequest};
use crate::catalog::command::search_books_cmd::{SearchBooksCommand, SearchBooksCommandRequest};
use crate::catalog::domain::CatalogService;
use crate::core::command::{Command, CommandError};
use crate::core::controller::ConsoleError;
use crate::core::domain::DisplaySettings;
use crate::core::library::BookStatus;

const SAMPLE_BOOKS: [(&str, &str, &str); 10] = [
    ("1984", "George Orwell", "1949"),
    ("The Master and Margarita", "Mikhail Bulgakov", "1967"),
    ("Crime and Punishment", "Fyodor Dostoevsky", "1866"),
    ("Harry Potter and the Philosopher's Stone", "J. K. Rowling", "1997"),
    ("War and Peace", "Leo Tolstoy", "1869"),
    ("Three Comrades", "Erich Maria Remarque", "1936"),
    ("The Little Prince", "Antoine de Saint-Exupery", "1943"),
    ("The Lord of the Rings", "J. R. R. Tolkien", "1954"),
    ("Anna Karenina", "Leo Tolstoy", "1877"),
    ("The Picture of Dorian Gray", "Oscar Wilde", "1890"),
];

#[derive(Debug, Clone, Copy, PartialEq)]
enum MenuAction {
    AddBook,
    DeleteBook,
    SearchBooks,
    ShowAllBooks,
    ChangeStatus,
    AddSampleData,
    Exit,
}

const MENU: [(&str, &str, MenuAction); 7] = [
    ("1", "Add a book", MenuAction::AddBook),
    ("2", "Delete a book", MenuAction::DeleteBook),
    ("3", "Search books", MenuAction::SearchBooks),
    ("4", "Show all books", MenuAction::ShowAllBooks),
    ("5", "Change book status", MenuAction::ChangeStatus),
    ("6", "Add sample data", MenuAction::AddSampleData),
    ("0", "Exit", MenuAction::Exit),
];

// ConsoleApp is the interactive menu over the catalog. It reads commands line by line
// from `input` and renders everything to `output`.
pub struct ConsoleApp<R, W> {
    catalog_service: Box<dyn CatalogService>,
    display: DisplaySettings,
    input: R,
    output: W,
}

impl<R: BufRead, W: Write> ConsoleApp<R, W> {
    pub fn new(catalog_service: Box<dyn CatalogService>, display: DisplaySettings, input: R, output: W) -> Self {
        Self {
            catalog_service,
            display,
            input,
            output,
        }
    }

    // run loops until the user exits or the input ends. A failing command is reported
    // and the loop carries on.
    pub fn run(&mut self) -> io::Result<()> {
        loop {
            self.display_menu()?;
            let Some(choice) = self.get_input("Choose an action")? else {
                break;
            };
            let Some(action) = MENU.iter().find(|(key, _, _)| *key == choice).map(|(_, _, action)| *action) else {
                self.notice("Invalid choice. Please try again.")?;
                continue;
            };
            if action == MenuAction::Exit {
                break;
            }
            self.dispatch(action)?;
        }
        writeln!(self.output, "\n{}", "Shutting down...".blue())?;
        self.output.flush()
    }

    fn dispatch(&mut self, action: MenuAction) -> io::Result<()> {
        match action {
            MenuAction::AddBook => self.add_book(),
            MenuAction::DeleteBook => self.delete_book(),
            MenuAction::SearchBooks => self.search_books(),
            MenuAction::ShowAllBooks => self.show_all_books(),
            MenuAction::ChangeStatus => self.change_book_status(),
            MenuAction::AddSampleData => self.add_sample_data(),
            MenuAction::Exit => Ok(()),
        }
    }

    fn display_menu(&mut self) -> io::Result<()> {
        writeln!(self.output, "\n{}", "=== Library system ===".bold())?;
        for (key, description, _) in MENU.iter() {
            writeln!(self.output, "{} {}", format!("{}.", key).blue(), description)?;
        }
        Ok(())
    }

    // get_input returns the trimmed line, or None once the input is exhausted
    fn get_input(&mut self, prompt: &str) -> io::Result<Option<String>> {
        write!(self.output, "\n{}: ", prompt.bold())?;
        self.output.flush()?;
        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Ok(None);
        }
        Ok(Some(line.trim().to_string()))
    }

    fn success<T: Display>(&mut self, message: T) -> io::Result<()> {
        writeln!(self.output, "\n{}", message.to_string().green())
    }

    fn notice<T: Display>(&mut self, message: T) -> io::Result<()> {
        writeln!(self.output, "\n{}", message.to_string().yellow())
    }

    fn report(&mut self, err: CommandError) -> io::Result<()> {
        let err = ConsoleError::from(err);
        if err.recoverable {
            writeln!(self.output, "\n{}", format!("Error: {}", err.message).red())
        } else {
            error!("command failed: {}", err.message);
            writeln!(self.output, "\n{}", format!("Unexpected error: {}", err.message).red())
        }
    }

    // ensure_not_empty prints a hint and returns false when there is nothing to act on
    fn ensure_not_empty(&mut self) -> io::Result<bool> {
        if self.catalog_service.get_all_books().is_empty() {
            self.notice("The library is empty. Add some books first.")?;
            return Ok(false);
        }
        Ok(true)
    }

    fn add_book(&mut self) -> io::Result<()> {
        let Some(title) = self.get_input("Enter the book title")? else { return Ok(()) };
        let Some(author) = self.get_input("Enter the book author")? else { return Ok(()) };
        let Some(year) = self.get_input("Enter the publication year")? else { return Ok(()) };

        let req = AddBookCommandRequest::new(title.as_str(), author.as_str(), year.as_str());
        let res = AddBookCommand::new(self.catalog_service.as_mut()).execute(req);
        match res {
            Ok(res) => self.success(format!("Book added successfully (ID: {})", format_id(&res.book))),
            Err(err) => self.report(err),
        }
    }

    fn delete_book(&mut self) -> io::Result<()> {
        if !self.ensure_not_empty()? {
            return Ok(());
        }
        let Some(book_id) = self.get_input("Enter the ID of the book to delete")? else { return Ok(()) };
        let res = RemoveBookCommand::new(self.catalog_service.as_mut()).execute(RemoveBookCommandRequest::new(book_id.as_str()));
        match res {
            Ok(res) if res.removed => self.success("Book deleted successfully"),
            Ok(_) => self.notice("No book with the given ID was found"),
            Err(err) => self.report(err),
        }
    }

    fn search_books(&mut self) -> io::Result<()> {
        if !self.ensure_not_empty()? {
            return Ok(());
        }
        let Some(query) = self.get_input("Enter a search query")? else { return Ok(()) };
        let res = SearchBooksCommand::new(self.catalog_service.as_ref()).execute(SearchBooksCommandRequest { query });
        match res {
            Ok(res) if res.books.is_empty() => self.notice("No books found"),
            Ok(res) => self.display_books(&res.books),
            Err(err) => self.report(err),
        }
    }

    fn show_all_books(&mut self) -> io::Result<()> {
        let res = ListBooksCommand::new(self.catalog_service.as_ref()).execute(());
        match res {
            Ok(res) if res.books.is_empty() => self.notice("The library is empty"),
            Ok(res) => self.display_books(&res.books),
            Err(err) => self.report(err),
        }
    }

    fn change_book_status(&mut self) -> io::Result<()> {
        if !self.ensure_not_empty()? {
            return Ok(());
        }
        let Some(book_id) = self.get_input("Enter the book ID")? else { return Ok(()) };
        let res = GetBookCommand::new(self.catalog_service.as_ref())
            .execute(GetBookCommandRequest { book_id: book_id.clone() });
        let book = match res {
            Ok(res) => res.book,
            Err(err) => return self.report(err),
        };
        let Some(book) = book else {
            return self.notice(format!("No book with ID {} was found", book_id));
        };

        writeln!(self.output, "\n{} {}", "Current book status:".blue(), book.status().as_str().bold())?;
        writeln!(self.output, "\n{}", "Available statuses:".blue())?;
        for status in BookStatus::valid_statuses() {
            writeln!(self.output, "- {}", status)?;
        }

        let Some(new_status) = self.get_input("Enter the new status")? else { return Ok(()) };
        if new_status == book.status().as_str() {
            return self.notice(format!("The book already has status '{}'", new_status));
        }

        let req = ChangeStatusCommandRequest::new(book_id.as_str(), new_status.as_str());
        let res = ChangeStatusCommand::new(self.catalog_service.as_mut()).execute(req);
        match res {
            Ok(res) => match res.book {
                Some(updated) => self.success(format!("Book status changed from '{}' to '{}'",
                                                      book.status(), updated.status())),
                None => self.notice(format!("No book with ID {} was found", book_id)),
            },
            Err(err) => self.report(err),
        }
    }

    fn add_sample_data(&mut self) -> io::Result<()> {
        writeln!(self.output, "\n{}", "Adding sample data...".blue())?;
        let mut added = 0;
        for (title, author, year) in SAMPLE_BOOKS {
            let res = AddBookCommand::new(self.catalog_service.as_mut()).execute(AddBookCommandRequest::new(title, author, year));
            match res {
                Ok(_) => {
                    added += 1;
                    writeln!(self.output, "{}", format!("Added book '{}'", title).green())?;
                }
                Err(CommandError::Validation { message }) => {
                    writeln!(self.output, "{}", format!("Skipped book '{}': {}", title, message).yellow())?;
                }
                Err(err) => return self.report(err),
            }
        }
        if added > 0 {
            self.success(format!("Added {} sample books!", added))
        } else {
            self.notice("No sample data could be added")
        }
    }

    fn display_books(&mut self, books: &[BookEntity]) -> io::Result<()> {
        let d = self.display;
        writeln!(self.output, "\n{}", "Book list:".bold())?;
        let header = format!("{:^iw$} | {:^tw$} | {:^aw$} | {:^yw$} | {:^sw$}",
                             "ID", "Title", "Author", "Year", "Status",
                             iw = d.id_width, tw = d.title_width, aw = d.author_width,
                             yw = d.year_width, sw = d.status_width);
        let separator = "-".repeat(header.chars().count());

        writeln!(self.output, "{}", separator.as_str().blue())?;
        writeln!(self.output, "{}", header.as_str().bold())?;
        writeln!(self.output, "{}", separator.as_str().blue())?;
        for book in books {
            writeln!(self.output, "{:^iw$} | {:^tw$} | {:^aw$} | {:^yw$} | {:^sw$}",
                     format_id(book),
                     truncate_text(&book.title, d.title_width),
                     truncate_text(&book.author, d.author_width),
                     book.year,
                     book.status().as_str(),
                     iw = d.id_width, tw = d.title_width, aw = d.author_width,
                     yw = d.year_width, sw = d.status_width)?;
        }
        writeln!(self.output, "{}", separator.as_str().blue())
    }
}

fn format_id(book: &BookEntity) -> String {
    book.id.map(|id| id.to_string()).unwrap_or_else(|| "-".to_string())
}

// truncate_text shortens text to max_len characters, ending it with "..."
fn truncate_text(text: &str, max_len: usize) -> String {
    if text.chars().count() <= max_len {
        return text.to_string();
    }
    let kept: String = text.chars().take(max_len.saturating_sub(3)).collect();
    format!("{}...", kept)
}
