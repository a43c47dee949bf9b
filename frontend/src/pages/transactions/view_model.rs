use super::{repository::TransactionsRepository, utils::TransactionSummary};
use crate::{
    api::{use_api_client, ApiError, Transaction},
    utils::fallback::Feed,
};
use leptos::*;
use std::rc::Rc;

#[derive(Clone, Copy)]
pub struct TransactionsViewModel {
    pub reload: RwSignal<u32>,
    pub transactions_resource: Resource<u32, Result<Feed<Vec<Transaction>>, ApiError>>,
    pub transactions: Memo<Vec<Transaction>>,
    pub summary: Memo<TransactionSummary>,
}

impl TransactionsViewModel {
    pub fn refresh(&self) {
        self.reload.update(|value| *value = value.wrapping_add(1));
    }

    pub fn warning(&self) -> Option<&'static str> {
        self.transactions_resource
            .get()
            .and_then(|result| result.ok())
            .and_then(|feed| feed.warning())
    }
}

pub fn use_transactions_view_model() -> TransactionsViewModel {
    let repository = TransactionsRepository::new_with_client(Rc::new(use_api_client()));
    let reload = create_rw_signal(0u32);

    let transactions_resource = create_resource(
        move || reload.get(),
        move |_| {
            let repo = repository.clone();
            async move { repo.load_transactions().await }
        },
    );
    let transactions = create_memo(move |_| {
        transactions_resource
            .get()
            .and_then(|result| result.ok())
            .map(Feed::into_data)
            .unwrap_or_default()
    });
    let summary = create_memo(move |_| {
        transactions.with(|transactions| TransactionSummary::from_transactions(transactions))
    });

    TransactionsViewModel {
        reload,
        transactions_resource,
        transactions,
        summary,
    }
}
