//! Data models for Bibliotheque

pub mod author;
pub mod book;

mod form;

pub use author::{Author, AuthorForm, AuthorInput};
pub use book::{Book, BookForm, BookInput, BookWithAuthor};
