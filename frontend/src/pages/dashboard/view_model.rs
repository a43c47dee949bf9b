use super::repository::DashboardRepository;
use crate::{
    api::{use_api_client, ApiError, DashboardStats},
    utils::fallback::Feed,
};
use leptos::*;
use std::rc::Rc;

#[derive(Clone, Copy)]
pub struct DashboardViewModel {
    pub reload: RwSignal<u32>,
    pub stats_resource: Resource<u32, Result<Feed<DashboardStats>, ApiError>>,
}

impl DashboardViewModel {
    pub fn refresh(&self) {
        self.reload.update(|value| *value = value.wrapping_add(1));
    }

    pub fn refreshing(&self) -> Signal<bool> {
        self.stats_resource.loading().into()
    }

    pub fn stats(&self) -> Option<DashboardStats> {
        self.stats_resource
            .get()
            .and_then(|result| result.ok())
            .map(Feed::into_data)
    }

    pub fn warning(&self) -> Option<&'static str> {
        self.stats_resource
            .get()
            .and_then(|result| result.ok())
            .and_then(|feed| feed.warning())
    }
}

pub fn use_dashboard_view_model() -> DashboardViewModel {
    let repository = DashboardRepository::new_with_client(Rc::new(use_api_client()));
    let reload = create_rw_signal(0u32);

    let stats_resource = create_resource(
        move || reload.get(),
        move |_| {
            let repo = repository.clone();
            async move { repo.load_stats().await }
        },
    );

    DashboardViewModel {
        reload,
        stats_resource,
    }
}
