pub mod api;
pub mod mount_guard;
