pub mod bookmarks;
pub mod errors;
pub mod kv;
pub mod models;
pub mod pager;
pub mod source;

pub use bookmarks::*;
pub use errors::*;
pub use kv::*;
pub use models::*;
pub use pager::*;
pub use source::*;
