use leptos::prelude::*;

#[derive(Clone, Debug)]
pub struct SupertagListState {
    pub sort_field: String,
    pub sort_ascending: bool,
}

impl Default for SupertagListState {
    fn default() -> Self {
        Self {
            sort_field: "mac_address".to_string(),
            sort_ascending: true,
        }
    }
}

pub fn create_state() -> RwSignal<SupertagListState> {
    RwSignal::new(SupertagListState::default())
}
