use serde::Deserialize;

/// The discrete user gestures a session reacts to.
#[derive(Debug, Deserialize, PartialEq, Eq, Clone, Copy)]
#[serde(rename_all = "lowercase")]
pub enum ActionKind {
    /// Submit the form as a new item.
    Add,
    /// Pick an item to edit; requires `id`.
    Edit,
    /// Submit the form as an update of the item being edited.
    Update,
    /// Delete the item being edited.
    Delete,
    /// Leave edit mode without touching the list.
    Back,
    /// Remove every item.
    Clear,
}

/// One scripted user action.
///
/// `name` and `price` carry the form field text for `add` and `update`;
/// `id` carries the target of `edit`. Empty CSV fields decode to `None`.
#[derive(Debug, Deserialize, PartialEq, Eq, Clone)]
pub struct Action {
    pub action: ActionKind,
    pub id: Option<u32>,
    pub name: Option<String>,
    pub price: Option<String>,
}
