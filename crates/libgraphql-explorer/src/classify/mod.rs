mod connection_detection;
mod field_class;
mod field_classifier;

pub use connection_detection::ConnectionDetection;
pub use field_class::FieldClass;
pub use field_classifier::FieldClassifier;
