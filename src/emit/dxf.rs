//! Minimal ASCII DXF rendering of traced contours.
//!
//! The document declares a single layer `LINES` and emits one `LINE`
//! entity per consecutive point pair of every contour with at least two
//! points, all colored with index 7. Coordinates are integral pixel
//! positions. Only the TABLES and ENTITIES sections the entities need are
//! written.
use crate::error::Error;
use crate::types::Contour;
use std::fmt::Write as _;
use std::fs;
use std::path::Path;

const LAYER: &str = "LINES";
const COLOR_INDEX: i32 = 7;

/// Render the drafting-exchange document.
pub fn render_dxf(contours: &[Contour]) -> String {
    let mut doc = String::new();

    pair(&mut doc, 0, "SECTION");
    pair(&mut doc, 2, "TABLES");
    pair(&mut doc, 0, "TABLE");
    pair(&mut doc, 2, "LAYER");
    pair(&mut doc, 70, "1");
    pair(&mut doc, 0, "LAYER");
    pair(&mut doc, 2, LAYER);
    pair(&mut doc, 70, "0");
    pair(&mut doc, 62, &COLOR_INDEX.to_string());
    pair(&mut doc, 6, "CONTINUOUS");
    pair(&mut doc, 0, "ENDTAB");
    pair(&mut doc, 0, "ENDSEC");

    pair(&mut doc, 0, "SECTION");
    pair(&mut doc, 2, "ENTITIES");
    for contour in contours {
        for segment in contour.windows(2) {
            pair(&mut doc, 0, "LINE");
            pair(&mut doc, 8, LAYER);
            pair(&mut doc, 62, &COLOR_INDEX.to_string());
            pair(&mut doc, 10, &segment[0].x.to_string());
            pair(&mut doc, 20, &segment[0].y.to_string());
            pair(&mut doc, 11, &segment[1].x.to_string());
            pair(&mut doc, 21, &segment[1].y.to_string());
        }
    }
    pair(&mut doc, 0, "ENDSEC");
    pair(&mut doc, 0, "EOF");

    doc
}

/// Render and persist the document at `path`.
pub fn write_dxf(path: &Path, contours: &[Contour]) -> Result<(), Error> {
    fs::write(path, render_dxf(contours)).map_err(|source| Error::Io {
        path: path.to_path_buf(),
        source,
    })
}

#[inline]
fn pair(doc: &mut String, code: i32, value: &str) {
    let _ = writeln!(doc, "{code}");
    let _ = writeln!(doc, "{value}");
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::Point;

    fn line_count(doc: &str) -> usize {
        doc.matches("\nLINE\n").count()
    }

    #[test]
    fn n_points_yield_n_minus_one_lines() {
        let contour: Contour = (0..5).map(|i| Point::new(i, i * 2)).collect();
        let doc = render_dxf(&[contour]);
        assert_eq!(line_count(&doc), 4);
    }

    #[test]
    fn short_contours_contribute_no_entities() {
        let doc = render_dxf(&[vec![], vec![Point::new(3, 3)]]);
        assert_eq!(line_count(&doc), 0);
        assert!(doc.contains("LINES"));
        assert!(doc.ends_with("0\nEOF\n"));
    }

    #[test]
    fn segments_match_consecutive_pairs() {
        let contour = vec![Point::new(1, 2), Point::new(3, 4), Point::new(5, 6)];
        let doc = render_dxf(&[contour]);
        let first = doc.find("\nLINE\n").expect("first entity");
        let entity = &doc[first..];
        assert!(entity.contains("10\n1\n20\n2\n11\n3\n21\n4\n"));
        assert!(entity.contains("10\n3\n20\n4\n11\n5\n21\n6\n"));
    }

    #[test]
    fn entities_sit_on_the_lines_layer_with_color_7() {
        let contour = vec![Point::new(0, 0), Point::new(1, 0)];
        let doc = render_dxf(&[contour]);
        let entities = &doc[doc.find("ENTITIES").expect("entities section")..];
        assert!(entities.contains("8\nLINES\n62\n7\n"));
    }
}
