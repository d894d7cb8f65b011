pub mod aggregation;
pub mod detail;

#[cfg(test)]
pub(crate) mod test_support;

pub use aggregation::AggregationService;
pub use detail::DetailService;
