#![deny(unsafe_code)]

pub mod aliases;
pub mod engine;
pub mod overrides;
pub mod repository;
pub mod utils;

pub use aliases::{AliasGroup, AliasTable};
pub use engine::{Resolver, resolve};
pub use overrides::{Overrides, SOURCE_HEADER, TARGET_HEADER, load_overrides};
pub use repository::{mapping_to_overrides, save_mapping};
pub use utils::{normalize, similarity};
