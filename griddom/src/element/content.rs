#[derive(Debug, Clone, Default, PartialEq)]
pub enum Content {
    #[default]
    None,
    Text(String),
    Children(Vec<super::Element>),
    /// A check mark; `indeterminate` wins over `checked` when painting.
    Checkbox { checked: bool, indeterminate: bool },
    /// A loading bar filling `percent` of the available width.
    Placeholder { percent: u8 },
}
