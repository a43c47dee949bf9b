use super::{
    repository::UsersRepository,
    utils::{apply_activation, PendingAction, ACTION_FAILED},
};
use crate::{
    api::{use_api_client, AdminUser, ApiError},
    utils::fallback::Feed,
};
use leptos::*;
use log::warn;
use std::rc::Rc;

#[derive(Clone, Copy)]
pub struct UsersViewModel {
    pub reload: RwSignal<u32>,
    pub users_resource: Resource<u32, Result<Feed<Vec<AdminUser>>, ApiError>>,
    pub users: RwSignal<Vec<AdminUser>>,
    pub pending: RwSignal<Option<PendingAction>>,
    pub action_error: RwSignal<Option<String>>,
    pub activation_action: Action<PendingAction, Result<PendingAction, ApiError>>,
}

impl UsersViewModel {
    pub fn refresh(&self) {
        self.reload.update(|value| *value = value.wrapping_add(1));
    }

    pub fn warning(&self) -> Option<&'static str> {
        self.users_resource
            .get()
            .and_then(|result| result.ok())
            .and_then(|feed| feed.warning())
    }

    pub fn request_action(&self, user: AdminUser) {
        self.action_error.set(None);
        self.pending.set(Some(PendingAction::for_user(user)));
    }

    pub fn cancel(&self) {
        self.pending.set(None);
    }

    pub fn confirm(&self) {
        if self.activation_action.pending().get_untracked() {
            return;
        }
        if let Some(pending) = self.pending.get_untracked() {
            self.activation_action.dispatch(pending);
        }
    }

    pub fn apply_result(&self, result: Result<PendingAction, ApiError>) {
        self.pending.set(None);
        match result {
            Ok(done) => {
                self.users
                    .update(|users| {
                        apply_activation(users, done.user.id, done.action);
                    });
            }
            // The session guard handles rejected credentials.
            Err(err) if err.is_auth_rejected() => {}
            Err(err) => {
                warn!("User activation failed: {}", err);
                self.action_error.set(Some(ACTION_FAILED.to_string()));
            }
        }
    }
}

pub fn use_users_view_model() -> UsersViewModel {
    let repository = UsersRepository::new_with_client(Rc::new(use_api_client()));
    let reload = create_rw_signal(0u32);
    let users = create_rw_signal(Vec::<AdminUser>::new());
    let pending = create_rw_signal(None::<PendingAction>);
    let action_error = create_rw_signal(None::<String>);

    let repo_for_resource = repository.clone();
    let users_resource = create_resource(
        move || reload.get(),
        move |_| {
            let repo = repo_for_resource.clone();
            async move { repo.load_users().await }
        },
    );

    let activation_action = create_action(move |pending: &PendingAction| {
        let repo = repository.clone();
        let pending = pending.clone();
        async move {
            repo.set_activation(pending.user.id, pending.action)
                .await
                .map(|_| pending)
        }
    });

    let vm = UsersViewModel {
        reload,
        users_resource,
        users,
        pending,
        action_error,
        activation_action,
    };

    create_effect(move |_| {
        if let Some(Ok(feed)) = users_resource.get() {
            users.set(feed.into_data());
        }
    });

    create_effect(move |_| {
        if let Some(result) = activation_action.value().get() {
            vm.apply_result(result);
        }
    });

    vm
}
