use super::*;
use crate::foundation::core::Rgba8;

#[test]
fn single_pixel_document_is_byte_exact() {
    let grid = PixelGrid::new(1, 1, vec![Rgba8::new(255, 0, 0, 255)]).unwrap();
    let expected = concat!(
        "\n\t<html>\n\t\t<head>\n\t\t\t<style>\n\t\t\t\t.img {\n",
        "\t\t\t\t\twidth:1px;\n\t\t\t\t\theight:1px;\n\t\t\t\t\tbackground-image:\n\t",
        "radial-gradient(1px circle at 0px 0px, rgba(255,0,0,255), transparent 1px)",
        ";\n\t\t\t</style>\n\t\t</head>\n\t\t<body>\n\t\t\t<div class=\"img\"></div>\n",
        "\t\t</body>\n\t</html>\n\t",
    );
    assert_eq!(render_document(&grid), expected);
}

#[test]
fn container_size_matches_grid() {
    let pixels = vec![Rgba8::new(255, 255, 255, 255), Rgba8::new(0, 0, 0, 255)];
    let grid = PixelGrid::new(2, 1, pixels).unwrap();
    let doc = render_document(&grid);
    assert!(doc.contains("width:2px;"));
    assert!(doc.contains("height:1px;"));

    let first = doc
        .find("radial-gradient(1px circle at 0px 0px, rgba(255,255,255,255), transparent 1px),\n")
        .unwrap();
    let second = doc
        .find("radial-gradient(1px circle at 1px 0px, rgba(0,0,0,255), transparent 1px);")
        .unwrap();
    assert!(first < second);
}

#[test]
fn write_document_reports_stats() {
    let grid = PixelGrid::new(3, 2, vec![Rgba8::default(); 6]).unwrap();
    let mut out = Vec::new();
    let stats = write_document(&mut out, &grid).unwrap();
    assert_eq!(
        stats,
        DocumentStats {
            width: 3,
            height: 2,
            stops: 6
        }
    );
    assert_eq!(String::from_utf8(out).unwrap(), render_document(&grid));
}

#[test]
fn empty_grid_still_emits_scaffold() {
    let grid = PixelGrid::new(0, 0, Vec::new()).unwrap();
    let doc = render_document(&grid);
    assert!(doc.contains("width:0px;"));
    assert!(doc.contains("background-image:\n\t;\n"));
    assert!(!doc.contains("radial-gradient"));
    assert!(doc.ends_with("</html>\n\t"));
}
