// Pure field and duplicate checks. validate_book_data applies the title, author, year
// and duplicate rules in that order and stops at the first failure.

use crate::books::domain::model::BookEntity;
use crate::core::library::{BookStatus, LibraryError, LibraryResult};
use crate::utils::date::current_year;

pub const MAX_TITLE_LEN: usize = 200;
pub const MAX_AUTHOR_LEN: usize = 100;

pub fn validate_title(title: &str) -> LibraryResult<()> {
    let title = title.trim();
    if title.is_empty() {
        return Err(LibraryError::invalid_input("Book title cannot be empty"));
    }
    if title.chars().count() > MAX_TITLE_LEN {
        return Err(LibraryError::invalid_input(
            format!("Book title is too long (maximum {} characters)", MAX_TITLE_LEN).as_str()));
    }
    Ok(())
}

pub fn validate_author(author: &str) -> LibraryResult<()> {
    let author = author.trim();
    if author.is_empty() {
        return Err(LibraryError::invalid_input("Author name cannot be empty"));
    }
    if author.chars().count() > MAX_AUTHOR_LEN {
        return Err(LibraryError::invalid_input(
            format!("Author name is too long (maximum {} characters)", MAX_AUTHOR_LEN).as_str()));
    }
    Ok(())
}

pub fn validate_year(year: i32) -> LibraryResult<()> {
    let current_year = current_year();
    if year > current_year {
        return Err(LibraryError::invalid_input(
            format!("Publication year cannot be greater than the current year ({})", current_year).as_str()));
    }
    Ok(())
}

pub fn validate_id(id: i64) -> LibraryResult<()> {
    if id < 1 {
        return Err(LibraryError::invalid_input("Book ID must be a positive number"));
    }
    Ok(())
}

pub fn validate_status(status: &str) -> LibraryResult<()> {
    if !BookStatus::is_valid(status) {
        return Err(LibraryError::invalid_input(
            format!("Invalid status. Valid values: {}", BookStatus::valid_statuses().join(", ")).as_str()));
    }
    Ok(())
}

pub fn check_duplicate(title: &str, author: &str, year: i32, existing: &[BookEntity]) -> LibraryResult<()> {
    let title = normalize(title);
    let author = normalize(author);
    let duplicate = existing.iter().any(|book| {
        book.year == year && normalize(&book.title) == title && normalize(&book.author) == author
    });
    if duplicate {
        return Err(LibraryError::invalid_input(
            format!("Book '{}' ({}, {}) already exists in the library", title, author, year).as_str()));
    }
    Ok(())
}

pub fn validate_book_data(title: &str, author: &str, year: i32, existing: &[BookEntity]) -> LibraryResult<()> {
    validate_title(title)?;
    validate_author(author)?;
    validate_year(year)?;
    check_duplicate(title, author, year, existing)
}

// parse_year parses a year typed by the user
pub fn parse_year(raw: &str) -> LibraryResult<i32> {
    raw.trim().parse::<i32>().map_err(|_| LibraryError::invalid_input("Year must be an integer"))
}

// parse_book_id parses a book id typed by the user and checks it is positive
pub fn parse_book_id(raw: &str) -> LibraryResult<i64> {
    let id = raw.trim().parse::<i64>().map_err(|_| LibraryError::invalid_input("Book ID must be an integer"))?;
    validate_id(id)?;
    Ok(id)
}

fn normalize(value: &str) -> String {
    value.trim().to_lowercase()
}
