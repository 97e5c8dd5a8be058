//! Accessibility tree for a combobox.
//!
//! [`snapshot`] describes the combobox the way assistive technology sees it:
//! a combobox root owning a text input and, while open, a listbox of options.
//! The tree is rebuilt from state on demand and never cached.

use crate::config::ComboboxConfig;
use crate::option::OptionSet;
use crate::state::{ComboboxState, Focus};

/// Id prefix used when the config provides neither an id nor a label.
const FALLBACK_ID: &str = "combobox";

/// The accessibility role of a node.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AccessibleRole {
    /// The composite widget
    ComboBox,
    /// The editable text field
    TextInput,
    /// The popup list
    ListBox,
    /// One entry of the popup list
    ListBoxOption,
}

impl AccessibleRole {
    /// The WAI-ARIA role name.
    pub fn aria_name(&self) -> &'static str {
        match self {
            AccessibleRole::ComboBox => "combobox",
            AccessibleRole::TextInput => "textbox",
            AccessibleRole::ListBox => "listbox",
            AccessibleRole::ListBoxOption => "option",
        }
    }
}

/// One node of the accessibility tree.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AccessibilityNode {
    pub role: AccessibleRole,
    pub id: String,
    /// Accessible name
    pub name: Option<String>,
    /// Current text (inputs only)
    pub value: Option<String>,
    pub placeholder: Option<String>,
    /// Id of the node naming this one
    pub labelled_by: Option<String>,
    /// Id of the popup this node controls
    pub controls: Option<String>,
    /// Popup expanded state (combobox only)
    pub expanded: Option<bool>,
    /// Kind of popup this node opens
    pub has_popup: Option<AccessibleRole>,
    /// Selection state (options only)
    pub selected: Option<bool>,
    /// Has keyboard focus
    pub focused: bool,
    /// Id of the focused descendant option
    pub active_descendant: Option<String>,
    pub children: Vec<AccessibilityNode>,
}

impl AccessibilityNode {
    fn new(role: AccessibleRole, id: impl Into<String>) -> Self {
        Self {
            role,
            id: id.into(),
            name: None,
            value: None,
            placeholder: None,
            labelled_by: None,
            controls: None,
            expanded: None,
            has_popup: None,
            selected: None,
            focused: false,
            active_descendant: None,
            children: Vec::new(),
        }
    }

    /// First descendant (or self) with `role`, depth first.
    pub fn find(&self, role: AccessibleRole) -> Option<&AccessibilityNode> {
        if self.role == role {
            return Some(self);
        }
        self.children.iter().find_map(|child| child.find(role))
    }

    /// Option nodes in list order; empty while the listbox is closed.
    pub fn options(&self) -> Vec<&AccessibilityNode> {
        match self.find(AccessibleRole::ListBox) {
            Some(listbox) => listbox.children.iter().collect(),
            None => Vec::new(),
        }
    }
}

/// Id of the option node for unique key `key`.
pub fn option_id(base: &str, key: &str) -> String {
    format!("{}-option-{}", base, key)
}

/// Build the accessibility tree for the current state.
pub fn snapshot(
    state: &ComboboxState,
    set: &OptionSet,
    config: &ComboboxConfig,
) -> AccessibilityNode {
    let base = config.input_id().unwrap_or(FALLBACK_ID);
    let label_id = config.label.as_ref().map(|_| format!("{}-label", base));
    let listbox_id = format!("{}-listbox", base);

    let mut root = AccessibilityNode::new(AccessibleRole::ComboBox, format!("{}-combobox", base));
    root.name = config.label.clone();
    root.labelled_by = label_id.clone();
    root.expanded = Some(state.is_open());
    root.has_popup = Some(AccessibleRole::ListBox);
    root.controls = Some(listbox_id.clone());

    let mut input = AccessibilityNode::new(AccessibleRole::TextInput, base);
    input.name = config.label.clone();
    input.value = Some(state.display_text().to_string());
    input.placeholder = Some(config.placeholder_text());
    input.labelled_by = label_id.clone();
    input.focused = state.focus() == Focus::Input;
    root.children.push(input);

    if state.is_open() {
        let mut listbox = AccessibilityNode::new(AccessibleRole::ListBox, listbox_id);
        listbox.labelled_by = label_id;

        let active = state.active_position();
        for (position, &index) in state.rendered().iter().enumerate() {
            let mut option =
                AccessibilityNode::new(AccessibleRole::ListBoxOption, option_id(base, set.key(index)));
            option.name = Some(set.display(index).to_string());
            option.selected = Some(state.is_selected(set, index));
            option.focused = active == Some(position);
            if option.focused {
                root.active_descendant = Some(option.id.clone());
            }
            listbox.children.push(option);
        }
        root.children.push(listbox);
    }

    root
}
