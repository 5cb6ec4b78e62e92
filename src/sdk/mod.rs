pub mod config;
pub mod routing;
pub mod trip;
pub mod util;
pub mod vehicle;
