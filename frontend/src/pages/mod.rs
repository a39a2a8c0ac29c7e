pub mod admin;
pub mod dashboard;
pub mod history;
pub mod home;
pub mod login;
pub mod schedule;

pub use admin::AdminPage;
pub use dashboard::DashboardPage;
pub use history::HistoryPage;
pub use home::HomePage;
pub use login::LoginPage;
pub use schedule::SchedulePage;
