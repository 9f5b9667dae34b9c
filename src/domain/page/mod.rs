//! Static pages served by the gateway

mod render;
mod source;

pub use render::render_key_page;
pub use source::{Page, PageSource};

#[cfg(test)]
pub use source::MockPageSource;
