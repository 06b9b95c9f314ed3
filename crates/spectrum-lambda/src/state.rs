use std::sync::Arc;

use spectrum_profiles::QuestionBank;

/// Shared application state, injected into all route handlers via Axum state.
pub struct AppState<S> {
    pub store: Arc<S>,
    pub questions: Arc<QuestionBank>,
}

// Manual impl: cloning shares the store, so `S` itself need not be `Clone`.
impl<S> Clone for AppState<S> {
    fn clone(&self) -> Self {
        Self {
            store: Arc::clone(&self.store),
            questions: Arc::clone(&self.questions),
        }
    }
}
