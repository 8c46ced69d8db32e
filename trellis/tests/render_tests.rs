//! Tests for markup rendering.

use facet_testhelpers::test;
use trellis::tags::{a, body, h1, html, li, ol, table, td, tr};
use trellis::{Document, Element, RenderOptions};

#[test]
fn test_div_with_text() {
    let mut doc = Document::new();
    let div = doc.create_element("div");
    let hi = doc.text("hi");
    doc.append(div, hi).unwrap();

    assert_eq!(doc.render(div, &RenderOptions::new()).unwrap(), "<div>hi</div>");
    assert_eq!(
        doc.render(div, &RenderOptions::new().pretty()).unwrap(),
        "<div>\n\thi\n</div>"
    );
}

#[test]
fn test_empty_children_edge_case() {
    let mut doc = Document::new();
    let link = doc.insert(Element::with_attributes("a", [("href", "http://x")]));

    // compact: nothing between the tags
    assert_eq!(doc.to_markup(link).unwrap(), "<a href=\"http://x\"></a>");
    // pretty: the empty join contributes exactly one blank line
    assert_eq!(
        doc.to_markup_pretty(link).unwrap(),
        "<a href=\"http://x\">\n\n</a>"
    );
}

#[test]
fn test_multi_value_attributes_render_joined() {
    let mut doc = Document::new();
    let cell = doc.insert(td().with_attribute("class", vec!["num", "  ", "right "]));
    doc.element_mut(cell).unwrap().add_class("bold");

    assert_eq!(
        doc.to_markup(cell).unwrap(),
        "<td class=\"num right bold\"></td>"
    );
}

#[test]
fn test_subtree_render_at_level() {
    let mut doc = Document::new();
    let row = doc.insert(tr());
    let cell = doc.insert(td());
    doc.append(row, cell).unwrap();
    doc.add_text(cell, "1").unwrap();

    let opts = RenderOptions::new().pretty().at_level(1);
    assert_eq!(
        doc.render(row, &opts).unwrap(),
        "\t<tr>\n\t\t<td>\n\t\t\t1\n\t\t</td>\n\t</tr>"
    );
}

#[test]
fn test_full_page() {
    let mut doc = Document::new();
    let root = doc.insert(html());
    let page = doc.insert(body().with_class("home"));
    doc.append(root, page).unwrap();

    let title = doc.insert(h1());
    doc.append(page, title).unwrap();
    doc.add_text(title, "Links").unwrap();

    let list = doc.insert(ol());
    doc.append(page, list).unwrap();
    for (href, label) in [("/a", "A"), ("/b", "B")] {
        let item = doc.insert(li());
        doc.append(list, item).unwrap();
        let link = doc.insert(a().with_attribute("href", href));
        doc.append(item, link).unwrap();
        doc.add_text(link, label).unwrap();
    }

    let grid = doc.insert(table());
    doc.append(page, grid).unwrap();

    assert_eq!(
        doc.to_markup(root).unwrap(),
        concat!(
            "<html><body class=\"home\">",
            "<h1>Links</h1>",
            "<ol><li><a href=\"/a\">A</a></li><li><a href=\"/b\">B</a></li></ol>",
            "<table></table>",
            "</body></html>"
        )
    );

    let pretty = doc.to_markup_pretty(root).unwrap();
    assert!(pretty.starts_with("<html>\n\t<body class=\"home\">\n\t\t<h1>\n\t\t\tLinks\n\t\t</h1>"));
    assert!(pretty.contains("\n\t\t\t<li>\n\t\t\t\t<a href=\"/a\">\n\t\t\t\t\tA\n\t\t\t\t</a>\n\t\t\t</li>"));
    assert!(pretty.contains("\n\t\t<table>\n\n\t\t</table>"));
    assert!(pretty.ends_with("\n\t</body>\n</html>"));
}
