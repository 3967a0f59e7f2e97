mod dashboard;

pub use dashboard::SalesPerformanceDashboard;
