use std::sync::Arc;

use fridgechef_core::application::FridgeChefService;

use crate::{application::views::Views, args::Args};

#[derive(Clone)]
pub struct AppState {
    pub args: Arc<Args>,
    pub service: FridgeChefService,
    pub views: Arc<Views>,
}

impl AppState {
    pub fn new(args: Arc<Args>, service: FridgeChefService, views: Views) -> Self {
        Self {
            args,
            service,
            views: Arc::new(views),
        }
    }
}
