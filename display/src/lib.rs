pub mod raster;
pub mod text;
#[cfg(feature = "sdl")]
pub mod window;

#[cfg(feature = "sdl")]
pub use window::Window;
