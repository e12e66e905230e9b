use crate::pipeline::SummaryPipeline;
use std::sync::Arc;

#[derive(Clone)]
pub struct AppState {
    pub pipeline: Arc<SummaryPipeline>,
}

impl AppState {
    pub fn new(pipeline: SummaryPipeline) -> Self {
        Self {
            pipeline: Arc::new(pipeline),
        }
    }
}
