// console book catalog persisted to a JSON file

pub mod books;
pub mod catalog;
pub mod core;
pub mod utils;
