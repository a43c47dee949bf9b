use crate::{
    api::{ApiClient, ApiError, Transaction},
    utils::fallback::{live_or_demo, Feed},
};
use std::rc::Rc;

#[derive(Clone)]
pub struct TransactionsRepository {
    client: Rc<ApiClient>,
}

impl TransactionsRepository {
    pub fn new_with_client(client: Rc<ApiClient>) -> Self {
        Self { client }
    }

    pub async fn load_transactions(&self) -> Result<Feed<Vec<Transaction>>, ApiError> {
        live_or_demo(self.client.list_transactions().await, demo_transactions)
    }
}

pub fn demo_transactions() -> Vec<Transaction> {
    let payment = Transaction {
        id: 1,
        kind: "payment".into(),
        case_id: Some(1),
        patient_id: Some(1),
        doctor_id: Some(2),
        amount: 200.0,
        platform_share: Some(120.0),
        status: "completed".into(),
        created_at: "2024-08-25T10:30:00Z".into(),
        payment_method: Some("Plutu".into()),
    };
    vec![
        payment.clone(),
        Transaction {
            id: 2,
            kind: "payout".into(),
            amount: 80.0,
            platform_share: None,
            created_at: "2024-08-26T15:45:00Z".into(),
            payment_method: Some("Bank Transfer".into()),
            ..payment.clone()
        },
        Transaction {
            id: 3,
            case_id: Some(3),
            status: "pending".into(),
            created_at: "2024-08-31T09:15:00Z".into(),
            ..payment
        },
    ]
}

#[cfg(all(test, not(target_arch = "wasm32")))]
mod host_tests {
    use super::*;
    use crate::utils::storage::SessionStore;
    use crate::test_support::helpers::{admin_store, signed_in_guard, ADMIN_TOKEN};
    use httpmock::prelude::*;
    use leptos::create_runtime;

    #[tokio::test]
    async fn unreachable_server_yields_demo_ledger() {
        let runtime = create_runtime();
        let store = admin_store();
        let client = ApiClient::new_with_base_url("http://127.0.0.1:9", signed_in_guard(&store));
        let repo = TransactionsRepository::new_with_client(Rc::new(client));

        let feed = repo.load_transactions().await.unwrap();
        assert!(feed.is_demo());
        assert_eq!(feed.data(), &demo_transactions());
        runtime.dispose();
    }

    #[tokio::test]
    async fn unauthorized_clears_session_instead_of_demo() {
        let server = MockServer::start_async().await;
        let mock = server.mock(|when, then| {
            when.method(GET)
                .path("/api/admin/transactions")
                .header("authorization", format!("Bearer {}", ADMIN_TOKEN));
            then.status(401);
        });

        let runtime = create_runtime();
        let store = admin_store();
        let client = ApiClient::new_with_base_url(server.base_url(), signed_in_guard(&store));
        let repo = TransactionsRepository::new_with_client(Rc::new(client));

        let err = repo.load_transactions().await.unwrap_err();
        mock.assert();
        assert!(err.is_auth_rejected());
        assert!(store.load().is_empty());
        runtime.dispose();
    }
}
