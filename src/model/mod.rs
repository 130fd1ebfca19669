pub mod furniture;
pub mod home;
pub mod level;
pub mod view3d;

pub use furniture::Furniture;
pub use home::{Home, HomeModelSnapshot};
pub use level::{Level, Room, Wall};
pub use view3d::{ProjectedPolygon, ViewSnapshot};
