//! Process-wide logging setup.

mod init;

pub use init::init_logging;
