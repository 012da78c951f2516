// Presentation layer: a server-rendered page that posts to /api/analyze
// through `ProxyClient` and renders the normalized result.

pub mod client;
pub mod example;
pub mod handlers;
pub mod render;
pub mod session;
