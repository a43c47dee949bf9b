use crate::{
    api::{AdminUser, ApiClient, ApiError, UserActivation},
    utils::fallback::{live_or_demo, Feed},
};
use std::rc::Rc;

#[derive(Clone)]
pub struct UsersRepository {
    client: Rc<ApiClient>,
}

impl UsersRepository {
    pub fn new_with_client(client: Rc<ApiClient>) -> Self {
        Self { client }
    }

    pub async fn load_users(&self) -> Result<Feed<Vec<AdminUser>>, ApiError> {
        live_or_demo(self.client.list_users().await, demo_users)
    }

    pub async fn set_activation(&self, user_id: i64, action: UserActivation) -> Result<(), ApiError> {
        self.client.set_user_activation(user_id, action).await
    }
}

pub fn demo_users() -> Vec<AdminUser> {
    vec![
        AdminUser {
            id: 1,
            role: "patient".into(),
            email: None,
            mobile_number: Some("+218912345678".into()),
            is_active: true,
            created_at: "2024-01-15T10:30:00Z".into(),
            last_login: Some("2024-08-30T14:20:00Z".into()),
        },
        AdminUser {
            id: 2,
            role: "doctor".into(),
            email: Some("dr.smith@globalclinic.com".into()),
            mobile_number: Some("+218987654321".into()),
            is_active: true,
            created_at: "2024-01-10T09:15:00Z".into(),
            last_login: Some("2024-08-31T08:45:00Z".into()),
        },
        AdminUser {
            id: 3,
            role: "patient".into(),
            email: None,
            mobile_number: Some("+218555123456".into()),
            is_active: false,
            created_at: "2024-02-20T16:45:00Z".into(),
            last_login: None,
        },
    ]
}
