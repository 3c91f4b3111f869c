use griddom::text::{align_offset, display_width, fit, render_plain, truncate_to_width};
use griddom::{Element, Size, Style, TextAlign};

#[test]
fn test_display_width_ascii() {
    assert_eq!(display_width("hello"), 5);
    assert_eq!(display_width(""), 0);
}

#[test]
fn test_truncate_adds_ellipsis() {
    assert_eq!(truncate_to_width("hello world", 5), "hell…");
    assert_eq!(truncate_to_width("hi", 5), "hi");
    assert_eq!(truncate_to_width("hi", 0), "");
}

#[test]
fn test_align_offset() {
    assert_eq!(align_offset(2, 6, TextAlign::Left), 0);
    assert_eq!(align_offset(2, 6, TextAlign::Center), 2);
    assert_eq!(align_offset(2, 6, TextAlign::Right), 4);
    assert_eq!(align_offset(8, 6, TextAlign::Right), 0);
}

#[test]
fn test_fit_pads_to_width() {
    assert_eq!(fit("5.00", 6, TextAlign::Right), "  5.00");
    assert_eq!(fit("ab", 4, TextAlign::Left), "ab  ");
}

#[test]
fn test_render_row_and_column() {
    let root = Element::col()
        .child(
            Element::row()
                .gap(1)
                .child(Element::text("Name").width(Size::Fixed(6)))
                .child(Element::text("Age")),
        )
        .child(
            Element::row()
                .gap(1)
                .child(Element::text("Ada").width(Size::Fixed(6)))
                .child(Element::text("36")),
        );
    assert_eq!(render_plain(&root), "Name   Age\nAda    36");
}

#[test]
fn test_render_checkbox_and_placeholder() {
    let root = Element::row()
        .gap(1)
        .child(Element::checkbox(true))
        .child(Element::checkbox(false).indeterminate(true))
        .child(Element::placeholder(50));
    assert_eq!(render_plain(&root), "[x] [-] ░░░░░");
}

#[test]
fn test_transparent_element_keeps_footprint() {
    let root = Element::row()
        .gap(1)
        .child(Element::text("A"))
        .child(Element::button("Edit").style(Style::new().transparent()))
        .child(Element::text("B"));
    assert_eq!(render_plain(&root), "A      B");
}
