//! Presentation: themes, status messages and the terminal and HTML result formats.

pub mod highlight_view;
pub mod html;
pub mod output_format;
pub mod theme;
