mod category_resolver;
mod hydrator;
mod rating_aggregator;

pub use category_resolver::CategoryResolver;
pub use hydrator::Hydrator;
pub use rating_aggregator::RatingAggregator;
