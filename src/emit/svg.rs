//! SVG rendering of traced contours.
//!
//! One `<path>` per contour: an absolute move followed by the full point
//! list as space-separated `x y` pairs, stroked blue with no fill. Empty
//! and single-point contours still emit their (degenerate) path element.
use crate::error::Error;
use crate::types::Contour;
use std::fmt::Write as _;
use std::fs;
use std::path::Path;

/// Render the document; the root element is sized `width` × `height`.
pub fn render_svg(width: usize, height: usize, contours: &[Contour]) -> String {
    let mut doc = String::new();
    let _ = write!(
        doc,
        "<svg width=\"{width}\" height=\"{height}\" xmlns=\"http://www.w3.org/2000/svg\">"
    );

    for contour in contours {
        doc.push_str("<path d=\"M");
        for p in contour {
            let _ = write!(doc, "{} {} ", p.x, p.y);
        }
        doc.push_str("\" style=\"stroke:blue\"/>");
    }

    doc.push_str("</svg>");
    doc
}

/// Render and persist the document at `path`.
pub fn write_svg(
    path: &Path,
    width: usize,
    height: usize,
    contours: &[Contour],
) -> Result<(), Error> {
    fs::write(path, render_svg(width, height, contours)).map_err(|source| Error::Io {
        path: path.to_path_buf(),
        source,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::Point;

    #[test]
    fn header_carries_dimensions() {
        let doc = render_svg(640, 480, &[]);
        assert!(doc.starts_with("<svg width=\"640\" height=\"480\""));
        assert!(doc.ends_with("</svg>"));
    }

    #[test]
    fn path_lists_every_point_in_order() {
        let contour = vec![Point::new(1, 2), Point::new(3, 4), Point::new(5, 6)];
        let doc = render_svg(10, 10, &[contour]);
        assert!(doc.contains("<path d=\"M1 2 3 4 5 6 \" style=\"stroke:blue\"/>"));
    }

    #[test]
    fn degenerate_contours_still_emit_paths() {
        let contours = vec![vec![], vec![Point::new(7, 8)]];
        let doc = render_svg(10, 10, &contours);
        assert!(doc.contains("<path d=\"M\" style=\"stroke:blue\"/>"));
        assert!(doc.contains("<path d=\"M7 8 \" style=\"stroke:blue\"/>"));
        assert_eq!(doc.matches("<path").count(), 2);
    }
}
