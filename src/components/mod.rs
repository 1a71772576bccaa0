pub mod app;
pub mod login_screen;
pub mod router_outlet;
pub mod tasks_page;
pub mod theme_toggle;

pub use app::{App, AppProps};
pub use login_screen::LoginScreen;
pub use router_outlet::{use_navigator, Navigator, RouterOutlet};
pub use tasks_page::TasksPage;
pub use theme_toggle::ThemeToggle;
