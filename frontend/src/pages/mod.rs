pub mod cases;
pub mod dashboard;
pub mod login;
pub mod transactions;
pub mod users;

pub use cases::CasesPage;
pub use dashboard::DashboardPage;
pub use login::LoginPage;
pub use transactions::TransactionsPage;
pub use users::UsersPage;
