pub mod analysis;
pub mod category;
pub mod types;

pub use analysis::{AnalysisResult, CategoryBucket, CoverageAmount, PolicyMatch};
pub use category::{BenefitKind, Category, ExclusionKind, FeatureKind, SubKind, Subcategory};
pub use types::{KeywordCount, PolicyDocument, RenderedReport, VisualizationInput};
