pub mod confidence;
pub mod html;
pub mod json;
pub mod samples;
pub mod terminal;
pub mod theme;
