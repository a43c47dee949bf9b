use super::repository::CasesRepository;
use crate::{
    api::{use_api_client, ApiError, MedicalCase},
    utils::fallback::Feed,
};
use leptos::*;
use std::rc::Rc;

#[derive(Clone, Copy)]
pub struct CasesViewModel {
    pub reload: RwSignal<u32>,
    pub cases_resource: Resource<u32, Result<Feed<Vec<MedicalCase>>, ApiError>>,
    pub selected: RwSignal<Option<MedicalCase>>,
}

impl CasesViewModel {
    pub fn refresh(&self) {
        self.reload.update(|value| *value = value.wrapping_add(1));
    }

    pub fn cases(&self) -> Vec<MedicalCase> {
        self.cases_resource
            .get()
            .and_then(|result| result.ok())
            .map(Feed::into_data)
            .unwrap_or_default()
    }

    pub fn warning(&self) -> Option<&'static str> {
        self.cases_resource
            .get()
            .and_then(|result| result.ok())
            .and_then(|feed| feed.warning())
    }
}

pub fn use_cases_view_model() -> CasesViewModel {
    let repository = CasesRepository::new_with_client(Rc::new(use_api_client()));
    let reload = create_rw_signal(0u32);

    let cases_resource = create_resource(
        move || reload.get(),
        move |_| {
            let repo = repository.clone();
            async move { repo.load_cases().await }
        },
    );

    CasesViewModel {
        reload,
        cases_resource,
        selected: create_rw_signal(None),
    }
}

#[cfg(all(test, not(target_arch = "wasm32")))]
mod host_tests {
    use super::*;
    use crate::pages::cases::repository::demo_cases;
    use crate::test_support::ssr::with_runtime;

    #[test]
    fn starts_empty_and_tracks_selection() {
        with_runtime(|| {
            leptos_reactive::suppress_resource_load(true);
            let vm = use_cases_view_model();
            assert!(vm.cases().is_empty());
            assert!(vm.warning().is_none());

            vm.selected.set(Some(demo_cases()[0].clone()));
            assert_eq!(vm.selected.get_untracked().map(|case| case.id), Some(1));

            vm.refresh();
            assert_eq!(vm.reload.get_untracked(), 1);
            leptos_reactive::suppress_resource_load(false);
        });
    }
}
