mod filters;
mod plan;
mod timestamp;

pub use filters::FilterSet;
pub use plan::{
    AccessPlan, CategoryIndex, DatePredicate, FilterPlanner, CREATED_AT_ATTRIBUTE,
    END_PLACEHOLDER, START_PLACEHOLDER,
};
pub use timestamp::{normalize, Boundary};
