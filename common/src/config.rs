/// Run options shared by every command.
#[derive(Clone, Debug, Default)]
pub struct Config {
    /// Skips the banner printed before the first header.
    pub no_banner: bool,
    /// Each level hides more decoration.
    ///
    /// `1` drops banners and headers, `2` also drops the order listing.
    pub quiet: u8,
    /// Disables ANSI colours in every output line.
    pub no_color: bool,
}

impl Config {
    pub fn is_quiet(&self) -> bool {
        self.quiet > 0
    }
}
