pub const PROMPT: &str = "> ";
pub const USAGE: &str = "Usage: corgy [script]";
pub const ERROR_PREAMBLE: &str = "RIP my dude, it looks like there's an error!";

// sysexits.h
pub const EX_USAGE: i32 = 64;
pub const EX_DATAERR: i32 = 65;
pub const EX_IOERR: i32 = 74;
