//! Builds a small page and prints it. Pass `--pretty` for indented output.

use trellis::tags::{a, body, h1, html, li, p, ul};
use trellis::{Document, RenderOptions};

fn main() -> trellis::Result<()> {
    let pretty = std::env::args().any(|arg| arg == "--pretty");

    let mut doc = Document::new();
    let root = doc.insert(html());
    let page = doc.append_element(root, body().with_class("home"))?;

    let title = doc.append_element(page, h1())?;
    doc.add_text(title, "trellis")?;

    let intro = doc.append_element(page, p().with_class("lead"))?;
    doc.add_text(intro, "Markup built in memory.")?;

    let nav = doc.append_element(page, ul().with_class("nav"))?;
    for (href, label) in [("/", "Home"), ("/docs", "Docs"), ("/about", "About")] {
        let item = doc.append_element(nav, li())?;
        let link = doc.append_element(item, a().with_attribute("href", href))?;
        doc.add_text(link, label)?;
    }
    let home = doc.first(nav)?;
    doc.element_mut(home)?.add_class("active");

    let mut opts = RenderOptions::new();
    if pretty {
        opts = opts.pretty();
    }
    println!("{}", doc.render(root, &opts)?);
    Ok(())
}
