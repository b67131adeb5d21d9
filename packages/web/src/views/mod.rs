mod home;
pub use home::Home;

mod loans;
pub use loans::Loans;

mod contact;
pub use contact::Contact;

mod admin_login;
pub use admin_login::AdminLogin;

mod admin_dashboard;
pub use admin_dashboard::AdminDashboard;
