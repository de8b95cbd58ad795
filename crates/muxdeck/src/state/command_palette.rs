//! Command Palette State

/// Command palette state
///
/// `session` increments on every open; execution results carry the session
/// they were started in, so results from an earlier session are ignored.
#[derive(Debug, Clone)]
pub struct CommandPaletteState {
    pub query: String,
    pub selected_index: usize,
    pub session: u64,
    /// Entry currently running in this session
    pub running_id: Option<String>,
    /// `true` while the query input has focus, `false` when the result list does
    pub input_focused: bool,
}

impl Default for CommandPaletteState {
    fn default() -> Self {
        Self {
            query: String::new(),
            selected_index: 0,
            session: 0,
            running_id: None,
            input_focused: true,
        }
    }
}
