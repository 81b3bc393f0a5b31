#[derive(Debug, Clone)]
pub struct Options {
    /// Spaces per nesting level; 0 means compact output.
    pub indent: usize,
    /// Sanitize first, replacing non-finite numbers with `nullval`, and
    /// encode strictly. Off reproduces the permissive non-standard output
    /// (bare NaN / Infinity tokens) as an explicit opt-out.
    pub convert_nans: bool,
    /// Placeholder string substituted for non-finite numbers when
    /// `convert_nans` is active.
    pub nullval: String,
    /// Collapse integer lists the pretty-printer split across lines.
    pub unsplit_int_lists: bool,
    /// Emit object keys in lexicographic order instead of insertion order.
    pub sort_keys: bool,
}

impl Default for Options {
    fn default() -> Self {
        Self {
            indent: 2,
            convert_nans: false,
            nullval: String::from("NaN"),
            unsplit_int_lists: false,
            sort_keys: false,
        }
    }
}
