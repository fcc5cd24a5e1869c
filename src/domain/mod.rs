mod pagination;
mod required_text;

pub use pagination::{decode_cursor, encode_cursor, Page, PageRequest, PageWindow};
pub use required_text::RequiredText;
