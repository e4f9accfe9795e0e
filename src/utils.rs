pub trait NonBlankExtension<'a> {
    /// Trimmed value, or `None` when missing or blank.
    fn non_blank(self) -> Option<&'a str>;
}

impl <'a> NonBlankExtension<'a> for Option<&'a str> {
    fn non_blank(self) -> Option<&'a str> {
        self.map(str::trim).filter(|s| !s.is_empty())
    }
}
