//! Station globe engine: projection, markers, picking, selection effects,
//! camera flights and the per-frame update that ties them together.

pub mod camera;
pub mod catalog;
pub mod config;
pub mod constants;
pub mod easing;
pub mod error;
pub mod flight;
pub mod geo;
pub mod globe;
pub mod halo;
pub mod highlight;
pub mod library;
pub mod markers;
pub mod picking;
pub mod regions;
pub mod resources;
pub mod scale;
pub mod scene;
pub mod selection;
pub mod tasks;
pub mod trail;

pub use camera::{Camera, OrbitControls, Ray};
pub use catalog::{demo_stations, parse_directory, Genre, Station, StationId};
pub use config::GlobeConfig;
pub use error::{GlobeError, Result};
pub use geo::{project, GeoCoord};
pub use globe::{Command, GlobeEngine, GlobeEvent};
pub use library::{Favorites, RouletteHistory};
pub use picking::{PointerEvent, Viewport};
pub use regions::{Region, RegionTable};
pub use scene::{FrameUniforms, RingInstance, SceneSnapshot, SphereInstance};
pub use selection::SelectionState;
