pub mod content;
pub mod list_entry;

pub use content::{Content, ContentType, Episode, Genre, Movie, TvShow};
pub use list_entry::{ListEntry, ListItem, PageResult, Pagination};
