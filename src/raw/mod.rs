mod arena;
mod cursor;
mod handle;
mod node;
mod raw_nav_tree;

pub(crate) use cursor::Cursor;
pub(crate) use raw_nav_tree::RawNavTree;
