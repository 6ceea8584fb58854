// Route path constants - single source of truth for all API paths

pub const ROOT: &str = "/";
pub const HEALTH: &str = "/health";
pub const METADATA: &str = "/metadata";
pub const SET: &str = "/set";
pub const GET: &str = "/get";
