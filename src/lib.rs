pub mod cli;
pub mod io;
pub mod logging;
pub mod model;
pub mod ops;
pub mod router;
pub mod tui;
pub mod util;
pub mod view;
