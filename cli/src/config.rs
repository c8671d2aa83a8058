use maskarray::io::MaskFormat;

#[derive(Debug)]
pub struct Config {
    /// Format used for output files whose extension is not recognized.
    pub default_format: MaskFormat,
    /// Character `render` prints for set cells.
    pub render_set: char,
    /// Character `render` prints for clear cells.
    pub render_clear: char,
    /// Whether to release unused row patterns after combining masks.
    pub gc_after_combine: bool,
}
impl Default for Config {
    fn default() -> Self {
        Self {
            default_format: MaskFormat::Pages,
            render_set: '#',
            render_clear: '.',
            gc_after_combine: true,
        }
    }
}
