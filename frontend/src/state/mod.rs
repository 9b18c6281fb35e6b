pub mod contact;
pub mod content;
pub mod navigation;
pub mod reveal;
