pub mod database;

pub use database::PortfolioDb;
