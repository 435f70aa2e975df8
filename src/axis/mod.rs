//! Parallel-coordinate axis construction
//!
//! Turns completed trials into one axis for the target value followed by
//! one axis per parameter. Each parameter is classified once:
//!
//! | Scale         | Values              | Ticks                          |
//! |---------------|---------------------|--------------------------------|
//! | `Log`         | `log10(v)`          | integer decades, `%.3g` labels |
//! | `Categorical` | first-seen codes    | one per category               |
//! | `Numeric`     | as recorded         | none                           |

mod builder;
mod descriptor;
mod format;
mod scale;
mod vocabulary;

pub use builder::{AxisBuilder, AxisSet, Target, TargetFn};
pub use descriptor::{
    truncate_label, value_range, AxisDescriptor, AxisTicks, LABEL_KEEP_CHARS, LABEL_MAX_CHARS,
};
pub use format::format_general;
pub use scale::AxisScale;
pub use vocabulary::CategoryVocabulary;
