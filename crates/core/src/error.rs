/// Structural failures surfaced to the caller. Field- and entity-level
/// problems never reach this type: the affected field is omitted or the
/// affected entity dropped, and parsing continues.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ScenarioError {
    /// The document root is not a `scenario` element.
    #[error("expected <scenario> root element, found <{found}>")]
    MissingRoot { found: String },

    /// The parse succeeded but produced an entirely empty normalized tree.
    #[error("document contains no scenario data")]
    NoScenarioData,
}
