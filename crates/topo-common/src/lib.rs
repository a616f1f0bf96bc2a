//! Common types shared by the topographic background renderer and its services.

pub mod color;
pub mod error;
pub mod theme;
pub mod viewport;

pub use color::Rgb;
pub use error::{TopoError, TopoResult};
pub use theme::Theme;
pub use viewport::Viewport;
