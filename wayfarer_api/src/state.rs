use wayfarer_core::wayfarer::Wayfarer;

pub struct AppState {
    pub wayfarer: Wayfarer,
}
