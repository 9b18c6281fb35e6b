pub mod nav;
pub mod page_outlet;
pub mod reveal;
