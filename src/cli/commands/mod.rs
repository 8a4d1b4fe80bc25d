mod command_result;
pub mod compare;
pub mod context;
pub mod init;

pub use command_result::*;
