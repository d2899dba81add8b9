use yew::prelude::*;

/// Shared scroll state published by the snap page to its descendants.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct SnapScrollState {
    pub active_section: usize,
}

/// Current active section, or section 0 outside a snap page.
#[hook]
pub fn use_snap_scroll() -> SnapScrollState {
    use_context::<SnapScrollState>().unwrap_or_default()
}
