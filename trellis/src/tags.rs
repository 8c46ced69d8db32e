//! Shorthand constructors for common tags.
//!
//! Each tag has two forms: `div()` fixes only the tag name, and
//! `div_with(attrs)` also sets attributes as [`Element::with_attributes`]
//! does. Children are attached through the [`Document`](crate::Document).
//!
//! ```
//! use trellis::Document;
//! use trellis::tags::{a, li, ul};
//!
//! let mut doc = Document::new();
//! let list = doc.insert(ul().with_class("nav"));
//! let item = doc.insert(li());
//! doc.append(list, item).unwrap();
//! let link = doc.insert(a().with_attribute("href", "/"));
//! doc.append(item, link).unwrap();
//! doc.add_text(link, "Home").unwrap();
//!
//! assert_eq!(
//!     doc.to_markup(list).unwrap(),
//!     r#"<ul class="nav"><li><a href="/">Home</a></li></ul>"#
//! );
//! ```

use compact_str::CompactString;

use crate::attribute::AttrValue;
use crate::node::Element;

macro_rules! tags {
    ($($name:ident / $with:ident),* $(,)?) => {
        $(
            #[doc = concat!("A `<", stringify!($name), ">` element.")]
            pub fn $name() -> Element {
                Element::new(stringify!($name))
            }

            #[doc = concat!("A `<", stringify!($name), ">` element with `attrs` set in order.")]
            pub fn $with<K, V>(attrs: impl IntoIterator<Item = (K, V)>) -> Element
            where
                K: Into<CompactString>,
                V: Into<AttrValue>,
            {
                Element::with_attributes(stringify!($name), attrs)
            }
        )*
    };
}

tags! {
    // document
    html / html_with, head / head_with, body / body_with, title / title_with,
    // sections
    header / header_with, footer / footer_with, main / main_with, nav / nav_with,
    section / section_with, article / article_with, h1 / h1_with, h2 / h2_with, h3 / h3_with,
    h4 / h4_with, h5 / h5_with, h6 / h6_with,
    // grouping
    div / div_with, p / p_with, pre / pre_with, ul / ul_with, ol / ol_with, li / li_with,
    // text-level
    a / a_with, span / span_with, em / em_with, strong / strong_with, code / code_with,
    // tables
    table / table_with, thead / thead_with, tbody / tbody_with, tfoot / tfoot_with,
    tr / tr_with, th / th_with, td / td_with,
    // forms
    form / form_with, label / label_with, button / button_with,
}

#[cfg(test)]
mod tests {
    use super::*;
    use facet_testhelpers::test;

    #[test]
    fn test_tag_names() {
        assert_eq!(div().tag(), "div");
        assert_eq!(span().tag(), "span");
        assert_eq!(table().tag(), "table");
        assert_eq!(p().tag(), "p");
        assert_eq!(a().tag(), "a");
        assert_eq!(li().tag(), "li");
        assert_eq!(ul().tag(), "ul");
        assert_eq!(ol().tag(), "ol");
        assert_eq!(h3().tag(), "h3");
    }

    #[test]
    fn test_constructors_carry_no_attributes() {
        assert_eq!(div(), Element::new("div"));
        assert_eq!(td().attributes().count(), 0);
    }

    #[test]
    fn test_with_forms_forward_attributes() {
        let link = a_with([("href", "/docs"), ("class", "nav  active")]);
        assert_eq!(link.tag(), "a");
        assert_eq!(
            link,
            Element::with_attributes("a", [("href", "/docs"), ("class", "nav  active")])
        );
        assert!(link.has_class("active"));
        assert_eq!(
            link.attributes().map(|(k, _)| k).collect::<Vec<_>>(),
            ["href", "class"]
        );

        let cell = td_with([("colspan", vec!["2"])]);
        assert_eq!(cell.get_attribute("colspan").unwrap(), "2");
        assert_eq!(div_with::<&str, &str>([]), div());
    }
}
