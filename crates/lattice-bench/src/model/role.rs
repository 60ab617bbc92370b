//! Data roles and the item value container.
//!
//! Views ask a model for an item's data under a role. The table model's cells
//! are stored as [`ItemData`] directly, with `ItemData::None` playing the part
//! of a null cell.

/// Standard roles for accessing different aspects of item data.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ItemRole {
    /// Primary value to display.
    Display,
    /// Value for editing. The bench models return the display value.
    Edit,
    /// Check state for boolean cells.
    CheckState,
}

/// Check state for checkable items.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum CheckState {
    /// Item is unchecked.
    #[default]
    Unchecked,
    /// Item is checked.
    Checked,
}

impl CheckState {
    /// Returns `true` if checked.
    pub fn is_checked(&self) -> bool {
        matches!(self, CheckState::Checked)
    }
}

impl From<bool> for CheckState {
    fn from(checked: bool) -> Self {
        if checked {
            CheckState::Checked
        } else {
            CheckState::Unchecked
        }
    }
}

/// Container for item data.
///
/// `ItemData::None` is the null value: an unset table cell, an unsupported
/// role, or an invalid index.
#[derive(Debug, Clone, PartialEq, Default)]
pub enum ItemData {
    /// No data.
    #[default]
    None,
    /// String data.
    String(String),
    /// Integer data.
    Int(i64),
    /// Boolean data.
    Bool(bool),
    /// Check state data.
    CheckState(CheckState),
}

impl ItemData {
    /// Returns `true` if this is `ItemData::None`.
    pub fn is_none(&self) -> bool {
        matches!(self, ItemData::None)
    }

    /// Returns `true` if this holds a value.
    pub fn is_some(&self) -> bool {
        !self.is_none()
    }

    /// Returns the string value, if this is string data.
    pub fn as_string(&self) -> Option<&str> {
        match self {
            ItemData::String(s) => Some(s),
            _ => None,
        }
    }

    /// Consumes this value and returns the string, if any.
    pub fn into_string(self) -> Option<String> {
        match self {
            ItemData::String(s) => Some(s),
            _ => None,
        }
    }

    /// Returns the integer value, if this is integer data.
    pub fn as_int(&self) -> Option<i64> {
        match self {
            ItemData::Int(n) => Some(*n),
            _ => None,
        }
    }

    /// Returns the boolean value, if this is boolean data.
    pub fn as_bool(&self) -> Option<bool> {
        match self {
            ItemData::Bool(b) => Some(*b),
            _ => None,
        }
    }
}

impl From<String> for ItemData {
    fn from(s: String) -> Self {
        ItemData::String(s)
    }
}

impl From<&str> for ItemData {
    fn from(s: &str) -> Self {
        ItemData::String(s.to_string())
    }
}

impl From<i64> for ItemData {
    fn from(n: i64) -> Self {
        ItemData::Int(n)
    }
}

impl From<i32> for ItemData {
    fn from(n: i32) -> Self {
        ItemData::Int(n as i64)
    }
}

impl From<bool> for ItemData {
    fn from(b: bool) -> Self {
        ItemData::Bool(b)
    }
}

impl From<CheckState> for ItemData {
    fn from(s: CheckState) -> Self {
        ItemData::CheckState(s)
    }
}

impl<T: Into<ItemData>> From<Option<T>> for ItemData {
    fn from(opt: Option<T>) -> Self {
        match opt {
            Some(value) => value.into(),
            None => ItemData::None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_item_data_accessors() {
        let data = ItemData::from("hello");
        assert_eq!(data.as_string(), Some("hello"));
        assert!(data.as_int().is_none());

        assert_eq!(ItemData::from(123).as_int(), Some(123));
        assert_eq!(ItemData::from(true).as_bool(), Some(true));
        assert!(ItemData::from(None::<i32>).is_none());
    }

    #[test]
    fn test_check_state_from_bool() {
        assert!(CheckState::from(true).is_checked());
        assert!(!CheckState::from(false).is_checked());
    }
}
