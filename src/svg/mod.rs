//! Import von Vektorpfaden aus SVG-Dateien.

mod fit;
mod parser;

pub use fit::fit_into_rect;
pub use parser::{extract_path_data, load_svg_file, parse_path_data, parse_svg};
