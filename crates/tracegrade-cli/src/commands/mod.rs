pub mod grade;
pub mod init;
pub mod syllables;
pub mod trace;
pub mod validate;
pub mod word;
