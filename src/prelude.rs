pub use crate::base::{
    config::Settings,
    types::{Err, Res, Void},
};
pub use anyhow::anyhow;
pub use tracing::{debug, info, instrument, warn};
