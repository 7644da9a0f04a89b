//! Scene plumbing shared by every animated surface: time, cameras, the
//! software canvas, the render loop driver and the scene registry.

pub mod camera;
pub mod canvas;
pub mod clock;
pub mod color;
pub mod compositor;
pub mod frame;
pub mod geometry;
pub mod gpu_context;
pub mod input_adapter;
pub mod registry;
pub mod resize;
pub mod rng;
pub mod scheduler;
pub mod surface;
pub mod surface_renderer;
pub mod transform;
pub mod viewport;

pub use camera::{PerspectiveCamera, Projected};
pub use canvas::{Canvas, DrawOp};
pub use clock::{Clock, ManualClock, TimeSource};
pub use color::Color;
pub use compositor::{Compositor, Layer};
pub use frame::{FpsCounter, FrameInfo};
pub use geometry::{GeometryKind, Wireframe};
pub use gpu_context::GpuContext;
pub use input_adapter::{InputAdapter, PageEvent};
pub use registry::{SceneName, SceneRegistry, SurfaceHost};
pub use resize::resize_scenes;
pub use rng::SceneRng;
pub use scheduler::{LoopState, RenderLoop, SceneController};
pub use surface::SurfaceSize;
pub use surface_renderer::SurfaceRenderer;
pub use transform::Transform;
pub use viewport::Viewport;
