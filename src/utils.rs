pub mod rounded_percentage;
pub use rounded_percentage::rounded_percentage;
