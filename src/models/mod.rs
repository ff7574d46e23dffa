pub mod items;
pub mod pagination;
