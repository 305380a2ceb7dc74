pub const UNRESOLVED_IMPORT: &str = "UNRESOLVED_IMPORT";
pub const READ_FILE_FAILED: &str = "READ_FILE_FAILED";
pub const WRITE_FILE_FAILED: &str = "WRITE_FILE_FAILED";
pub const ENGINE_INIT_FAILED: &str = "ENGINE_INIT_FAILED";
pub const INVALID_BUILD_CONFIG: &str = "INVALID_BUILD_CONFIG";
pub const BUILD_FAILED: &str = "BUILD_FAILED";
pub const PANIC: &str = "PANIC";
