pub mod use_remote_list;
pub mod use_scroll_reveal;

pub use use_remote_list::use_remote_list;
pub use use_scroll_reveal::use_scroll_reveal;
