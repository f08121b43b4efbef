pub mod init;
pub mod strided;

pub use init::Initializer;
