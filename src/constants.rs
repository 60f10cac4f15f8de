pub mod header {
    pub const ACCEPT: &str = "Accept";
    pub const LOCATION: &str = "Location";
    pub const VARY: &str = "Vary";
}

pub mod media_type {
    pub const TEXT_MARKDOWN: &str = "text/markdown";
}
