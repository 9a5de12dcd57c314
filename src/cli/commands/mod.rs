pub mod codemod;
pub mod init;
