/// Key names of the configuration record, in the order [`ContextConfig::entries`] yields them.
pub const FIELD_NAMES: [&str; 8] = [
    "WasmInputBufferType",
    "node",
    "grid_width",
    "grid_height",
    "font_family",
    "font_size",
    "cell_width_px",
    "cell_height_px",
];

/// Grid and font geometry handed to the rendering context.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GridLayout {
    /// Columns, in cells.
    pub grid_width: u32,
    /// Rows, in cells.
    pub grid_height: u32,
    pub font_family: String,
    /// CSS length, e.g. `"24px"`.
    pub font_size: String,
    pub cell_width_px: u32,
    pub cell_height_px: u32,
}

impl Default for GridLayout {
    fn default() -> Self {
        Self {
            grid_width: 80,
            grid_height: 40,
            font_family: "Hack".to_string(),
            font_size: "24px".to_string(),
            cell_width_px: 14,
            cell_height_px: 28,
        }
    }
}

/// The record consumed once by [`RenderContext::create`](crate::RenderContext::create).
///
/// `T` is the module's exported input buffer type handle, `N` the target node.
#[derive(Debug, Clone, PartialEq)]
pub struct ContextConfig<T, N> {
    pub input_buffer_type: T,
    pub node: N,
    pub layout: GridLayout,
}

/// One value of the configuration record, borrowed from it.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ConfigValue<'a, T, N> {
    InputBufferType(&'a T),
    Node(&'a N),
    Integer(u32),
    Text(&'a str),
}

impl<T, N> ContextConfig<T, N> {
    pub fn new(input_buffer_type: T, node: N, layout: GridLayout) -> Self {
        Self {
            input_buffer_type,
            node,
            layout,
        }
    }

    /// All eight fields as `(key, value)` pairs, keyed by [`FIELD_NAMES`].
    pub fn entries(&self) -> [(&'static str, ConfigValue<'_, T, N>); 8] {
        let layout = &self.layout;
        [
            (FIELD_NAMES[0], ConfigValue::InputBufferType(&self.input_buffer_type)),
            (FIELD_NAMES[1], ConfigValue::Node(&self.node)),
            (FIELD_NAMES[2], ConfigValue::Integer(layout.grid_width)),
            (FIELD_NAMES[3], ConfigValue::Integer(layout.grid_height)),
            (FIELD_NAMES[4], ConfigValue::Text(&layout.font_family)),
            (FIELD_NAMES[5], ConfigValue::Text(&layout.font_size)),
            (FIELD_NAMES[6], ConfigValue::Integer(layout.cell_width_px)),
            (FIELD_NAMES[7], ConfigValue::Integer(layout.cell_height_px)),
        ]
    }
}
