pub mod d100_sales_performance;
pub mod d101_sales_overview;

pub use d100_sales_performance::ui::SalesPerformanceDashboard;
pub use d101_sales_overview::ui::SalesOverviewDashboard;
