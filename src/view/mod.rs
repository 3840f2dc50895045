// view/ - Viewer state
//
// Pointer input, the parallax filter that follows it, and the camera the
// page renders through. Updated by input events and once per frame.

mod camera;
mod parallax;
mod pointer;

pub use camera::Camera;
pub use parallax::Parallax;
pub use pointer::Pointer;
