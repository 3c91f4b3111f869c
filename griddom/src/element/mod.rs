mod content;
mod node;

pub use content::Content;
pub use node::Element;

/// Find an element by ID in the tree.
pub fn find_element<'a>(root: &'a Element, id: &str) -> Option<&'a Element> {
    if root.id == id {
        return Some(root);
    }

    root.child_elements()
        .iter()
        .find_map(|child| find_element(child, id))
}

/// Ancestor chain from `root` down to the element with `id`, inclusive.
///
/// Empty when the id is not in the tree.
pub fn path_to<'a>(root: &'a Element, id: &str) -> Vec<&'a Element> {
    let mut path = Vec::new();
    if collect_path(root, id, &mut path) {
        path
    } else {
        Vec::new()
    }
}

fn collect_path<'a>(element: &'a Element, id: &str, path: &mut Vec<&'a Element>) -> bool {
    path.push(element);
    if element.id == id {
        return true;
    }
    for child in element.child_elements() {
        if collect_path(child, id, path) {
            return true;
        }
    }
    path.pop();
    false
}

/// All elements (pre-order) matching `predicate`.
pub fn find_all<'a>(root: &'a Element, predicate: impl Fn(&Element) -> bool) -> Vec<&'a Element> {
    let mut out = Vec::new();
    walk(root, &predicate, &mut out);
    out
}

fn walk<'a>(element: &'a Element, predicate: &dyn Fn(&Element) -> bool, out: &mut Vec<&'a Element>) {
    if predicate(element) {
        out.push(element);
    }
    for child in element.child_elements() {
        walk(child, predicate, out);
    }
}

/// Concatenated text of every `Text` leaf below `root`, space separated.
pub fn collect_text(root: &Element) -> String {
    find_all(root, |el| el.text_content().is_some())
        .into_iter()
        .filter_map(Element::text_content)
        .filter(|s| !s.is_empty())
        .collect::<Vec<_>>()
        .join(" ")
}
