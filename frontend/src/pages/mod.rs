pub mod admin_expenses;
pub mod admin_issue_detail;
pub mod home;

pub use admin_expenses::AdminExpensesPage;
pub use admin_issue_detail::AdminIssueDetailPage;
pub use home::HomePage;
