mod app;
mod dom;
mod geometry;
mod net;
mod render;
mod session;
mod ws;

pub use app::run;
