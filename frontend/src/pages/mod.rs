pub mod disease;
pub mod feed;
pub mod home;
pub mod monitoring;
pub mod vitals;

pub use disease::DiseasePage;
pub use feed::FeedPage;
pub use home::HomePage;
pub use monitoring::MonitoringPage;
pub use vitals::VitalsPage;
