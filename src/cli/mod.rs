pub mod args;

pub use args::{parse_margins, parse_plan_scale, Args, Orientation, PageSize};
