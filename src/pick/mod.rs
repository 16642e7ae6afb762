// pick/ - Screen-space object picking
//
// Pointer -> NDC -> camera ray -> nearest tagged bounding box.

mod camera;
mod picker;
mod ray;
mod scene;

pub use camera::*;
pub use picker::*;
pub use ray::*;
pub use scene::*;
