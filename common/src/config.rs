pub struct Config {
    /// Skips the banner printed before the first section.
    pub no_banner: bool,
    /// Quiet level.
    ///
    /// Anything above `0` hides the banner and the section headers, and turns the
    /// demo's closing summary into a single log line.
    pub quiet: u8,
}
